use sifter_ui::app;
use sifter_ui::config::DropdownConfig;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("sifter_ui", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = DropdownConfig::load();
    log::debug!(
        "dropdown config: min_keyword_len={}, debounce={}ms",
        config.min_keyword_len,
        config.debounce_ms
    );

    app::run(config)
}
