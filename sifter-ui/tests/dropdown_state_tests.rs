//! Reducer-level tests: every transition in the dropdown's contract is
//! observable through state and returned events, without rendering and
//! without executing tasks.

use std::sync::Arc;

use sifter_model::prelude::{OptionGroups, OptionId, OptionItem};
use sifter_ui::config::DropdownConfig;
use sifter_ui::dropdown::{
    DropdownEvent, FetchPhase, Message, OptionsDropdown, StaticProvider,
};

fn item(id: &str) -> OptionItem {
    OptionItem::new(id, id.to_uppercase())
}

fn with_provider() -> OptionsDropdown {
    let provider = Arc::new(StaticProvider::new(Vec::new()));
    OptionsDropdown::new(DropdownConfig::default()).with_provider(provider)
}

fn dispatched_seq(events: &[DropdownEvent]) -> Option<u64> {
    events.iter().find_map(|event| match event {
        DropdownEvent::QueryDispatched { seq, .. } => Some(*seq),
        _ => None,
    })
}

/// Type a keyword and run it through the debounce echo, returning the
/// sequence token of the dispatched query.
fn type_and_dispatch(dropdown: &mut OptionsDropdown, keyword: &str) -> u64 {
    dropdown.update(Message::KeywordChanged(keyword.to_owned()));
    let update = dropdown.update(Message::QueryDebounced(keyword.to_owned()));
    dispatched_seq(&update.events).expect("filterable keyword should dispatch a query")
}

#[test]
fn unfilterable_keyword_clears_queried_even_with_fetch_in_flight() {
    let mut dropdown = with_provider();

    let seq = type_and_dispatch(&mut dropdown, "serif");
    assert!(dropdown.state.is_searching());

    // Keyword drops below the filterable threshold before the fetch lands.
    dropdown.update(Message::KeywordChanged(String::new()));
    assert_eq!(dropdown.state.queried, None);
    assert!(!dropdown.state.is_searching());

    // The orphaned response must not resurrect the cleared result.
    dropdown.update(Message::QueryLoaded {
        seq,
        options: vec![item("stale")],
    });
    assert_eq!(dropdown.state.queried, None);
}

#[test]
fn last_dispatched_query_wins_over_last_resolved() {
    let mut dropdown = with_provider();

    let seq1 = type_and_dispatch(&mut dropdown, "sl");
    let seq2 = type_and_dispatch(&mut dropdown, "slow");
    assert!(seq2 > seq1);

    // The newer query resolves first, then the stale one limps in.
    dropdown.update(Message::QueryLoaded {
        seq: seq2,
        options: vec![item("fresh")],
    });
    dropdown.update(Message::QueryLoaded {
        seq: seq1,
        options: vec![item("stale")],
    });

    assert_eq!(dropdown.state.queried, Some(vec![item("fresh")]));
}

#[test]
fn static_options_take_precedence_over_queried() {
    let statics = vec![item("a"), item("b")];
    let provider = Arc::new(StaticProvider::new(Vec::new()));
    let mut dropdown = OptionsDropdown::new(DropdownConfig::default())
        .with_options(statics.clone())
        .with_provider(provider);

    let seq = type_and_dispatch(&mut dropdown, "x");
    dropdown.update(Message::QueryLoaded {
        seq,
        options: vec![item("queried")],
    });

    // The fetch resolved, but the supplied list is still authoritative.
    assert_eq!(dropdown.state.queried, Some(vec![item("queried")]));
    assert_eq!(dropdown.resolved_options(), Some(statics.as_slice()));
}

#[test]
fn opening_requests_search_focus() {
    let mut dropdown = with_provider();
    let update = dropdown.update(Message::Opened);
    assert_eq!(update.events, vec![DropdownEvent::SearchFocusRequested]);

    // Without a search box there is nothing to focus.
    let mut dropdown = with_provider().with_search(false);
    let update = dropdown.update(Message::Opened);
    assert!(update.events.is_empty());
}

#[test]
fn outside_interaction_closes_exactly_once() {
    let mut dropdown = with_provider();

    let update = dropdown.update(Message::OutsideInteraction);
    assert_eq!(update.events, vec![DropdownEvent::Closed]);

    let update = dropdown.update(Message::CloseRequested);
    assert_eq!(update.events, vec![DropdownEvent::Closed]);
}

#[test]
fn typing_over_a_static_list_only_moves_the_keyword() {
    let statics = vec![item("a"), item("b")];
    let mut dropdown =
        OptionsDropdown::new(DropdownConfig::default()).with_options(statics.clone());

    let update = dropdown.update(Message::KeywordChanged("b".to_owned()));

    // No query source: nothing dispatched, nothing filtered by the dropdown.
    assert!(update.events.is_empty());
    assert_eq!(dropdown.state.keyword, "b");
    assert_eq!(dropdown.state.queried, None);
    assert_eq!(dropdown.resolved_options(), Some(statics.as_slice()));
    assert_eq!(dropdown.general_window(), statics.as_slice());
}

#[test]
fn queried_options_render_when_no_static_list_is_present() {
    let mut dropdown = with_provider();

    let seq = type_and_dispatch(&mut dropdown, "x");
    dropdown.update(Message::QueryLoaded {
        seq,
        options: vec![item("x")],
    });

    assert_eq!(dropdown.state.queried, Some(vec![item("x")]));
    assert_eq!(dropdown.resolved_options(), Some(vec![item("x")].as_slice()));
}

#[test]
fn stale_debounce_echo_does_not_dispatch() {
    let mut dropdown = with_provider();

    dropdown.update(Message::KeywordChanged("ab".to_owned()));
    dropdown.update(Message::KeywordChanged("abc".to_owned()));

    // The echo armed by "ab" fires after more typing; it must be a no-op.
    let update = dropdown.update(Message::QueryDebounced("ab".to_owned()));
    assert!(dispatched_seq(&update.events).is_none());
    assert_eq!(dropdown.state.fetch, FetchPhase::Idle);

    let update = dropdown.update(Message::QueryDebounced("abc".to_owned()));
    assert!(dispatched_seq(&update.events).is_some());
}

#[test]
fn failure_and_empty_result_are_distinguishable() {
    use sifter_ui::dropdown::QueryError;

    let mut dropdown = with_provider();

    let seq = type_and_dispatch(&mut dropdown, "bad");
    dropdown.update(Message::QueryFailed {
        seq,
        error: QueryError::Source("boom".to_owned()),
    });
    assert!(dropdown.state.error.is_some());
    assert!(!dropdown.state.is_searching());

    // A later successful (but empty) query clears the error state.
    let seq = type_and_dispatch(&mut dropdown, "none");
    dropdown.update(Message::QueryLoaded {
        seq,
        options: Vec::new(),
    });
    assert_eq!(dropdown.state.error, None);
    assert_eq!(dropdown.state.queried, Some(Vec::new()));
}

#[test]
fn stale_failure_is_discarded() {
    use sifter_ui::dropdown::QueryError;

    let mut dropdown = with_provider();

    let seq1 = type_and_dispatch(&mut dropdown, "sl");
    let seq2 = type_and_dispatch(&mut dropdown, "slow");

    dropdown.update(Message::QueryLoaded {
        seq: seq2,
        options: vec![item("fresh")],
    });
    dropdown.update(Message::QueryFailed {
        seq: seq1,
        error: QueryError::Source("late".to_owned()),
    });

    assert_eq!(dropdown.state.error, None);
    assert_eq!(dropdown.state.queried, Some(vec![item("fresh")]));
}

#[test]
fn selection_commits_value_and_closes() {
    let mut dropdown =
        OptionsDropdown::new(DropdownConfig::default()).with_options(vec![item("a"), item("b")]);

    let update = dropdown.update(Message::Select(item("b")));

    assert_eq!(dropdown.state.value, Some(OptionId::new("b")));
    assert_eq!(
        update.events,
        vec![DropdownEvent::Selected(item("b")), DropdownEvent::Closed]
    );
}

#[test]
fn cursor_walks_the_visible_order_and_activates() {
    let mut dropdown = OptionsDropdown::new(DropdownConfig::default())
        .with_options(vec![item("a"), item("b"), item("c")]);

    // First downward step is the focus-first pulse.
    dropdown.update(Message::CursorDown);
    assert_eq!(dropdown.state.focus_epoch, 1);
    assert_eq!(dropdown.state.selected_index, Some(0));

    dropdown.update(Message::CursorDown);
    dropdown.update(Message::CursorDown);
    assert_eq!(dropdown.state.selected_index, Some(2));

    let update = dropdown.update(Message::ActivateCursor);
    assert_eq!(
        update.events,
        vec![DropdownEvent::Selected(item("c")), DropdownEvent::Closed]
    );
}

#[test]
fn focus_first_option_is_a_pulse() {
    let mut dropdown =
        OptionsDropdown::new(DropdownConfig::default()).with_options(vec![item("a")]);

    dropdown.update(Message::FocusFirstOption);
    dropdown.update(Message::FocusFirstOption);

    // The counter only ever advances; consumers react to the change.
    assert_eq!(dropdown.state.focus_epoch, 2);
    assert_eq!(dropdown.state.selected_index, Some(0));
}

#[test]
fn expansion_report_is_stored_as_is() {
    let mut dropdown = with_provider();
    assert!(dropdown.state.expanded);

    dropdown.update(Message::ExpansionChanged(false));
    assert!(!dropdown.state.expanded);

    dropdown.update(Message::ExpansionChanged(true));
    assert!(dropdown.state.expanded);
}

#[test]
fn reveal_window_grows_and_caps_at_the_catalog() {
    let catalog: Vec<OptionItem> = (0..25).map(|i| item(&format!("opt{i:02}"))).collect();
    let mut dropdown = OptionsDropdown::new(DropdownConfig::default()).with_options(catalog);

    assert_eq!(dropdown.general_window().len(), 10);

    let update = dropdown.update(Message::RevealMore);
    assert_eq!(update.events, vec![DropdownEvent::Revealed { shown: 20 }]);
    assert_eq!(dropdown.general_window().len(), 20);

    let update = dropdown.update(Message::RevealMore);
    assert_eq!(update.events, vec![DropdownEvent::Revealed { shown: 25 }]);
    assert_eq!(dropdown.general_window().len(), 25);
}

#[test]
fn groups_decorate_only_the_default_view() {
    let groups = OptionGroups {
        priority: vec![item("p1"), item("p2")],
        priority_label: Some("Recent".to_owned()),
        primary: vec![item("m1")],
        primary_label: Some("Popular".to_owned()),
    };
    let mut dropdown = OptionsDropdown::new(DropdownConfig::default())
        .with_options(vec![item("g1"), item("g2")])
        .with_groups(groups);

    // Default view: priority, primary, then the general window.
    assert_eq!(dropdown.visible_len(), 5);
    let order: Vec<&str> = dropdown
        .visible_options()
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(order, ["p1", "p2", "m1", "g1", "g2"]);

    // The cursor indexes into that flattened order.
    dropdown.update(Message::FocusFirstOption);
    dropdown.update(Message::CursorDown);
    let update = dropdown.update(Message::ActivateCursor);
    assert_eq!(
        update.events,
        vec![DropdownEvent::Selected(item("p2")), DropdownEvent::Closed]
    );

    // An active keyword replaces the grouped sections with the general set.
    dropdown.update(Message::KeywordChanged("g".to_owned()));
    assert!(!dropdown.groups_visible());
    assert_eq!(dropdown.visible_len(), 2);
}

#[test]
fn keyword_reset_restores_the_default_window() {
    let mut dropdown = with_provider();

    let seq = type_and_dispatch(&mut dropdown, "mono");
    dropdown.update(Message::QueryLoaded {
        seq,
        options: vec![item("mono")],
    });
    assert_eq!(dropdown.visible_len(), 1);

    dropdown.update(Message::KeywordChanged(String::new()));
    assert_eq!(dropdown.state.queried, None);
    assert_eq!(dropdown.visible_len(), 0);
}
