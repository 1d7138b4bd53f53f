//! Sifter UI library
//!
//! This crate contains the searchable options dropdown used by the demo
//! executable in `src/main.rs`. The `dropdown` module owns the behavioral
//! core (state record, messages, pure reducer, async query service); the
//! `views` module renders it; `app` is a reference host showing the
//! embedding contract.
//!
//! Notes
//! - The host owns visibility: the dropdown never shows or hides itself, it
//!   only emits [`dropdown::DropdownEvent::Closed`] and lets the host decide
//!   whether to unmount.
//! - Public items are subject to change while the component stabilizes.

pub mod app;
pub mod common;
pub mod config;
pub mod dropdown;
pub mod views;
