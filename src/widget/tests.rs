//! Tests for the dropdown handle

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::*;
use crate::error::Error;
use crate::loader::{PageRequest, Reply};
use crate::model::Choice;
use crate::select_filter::SelectFilter;
use crate::sources::StaticSource;
use pretty_assertions::assert_eq;

fn tools() -> Vec<Choice> {
    ["ripgrep", "fd", "bat", "delta", "dust", "eza"]
        .into_iter()
        .map(Choice::new)
        .collect()
}

fn labels(dropdown: &Dropdown<Choice>) -> Vec<String> {
    dropdown.entries().iter().map(|e| e.item.label.clone()).collect()
}

fn sync_dropdown() -> Dropdown<Choice> {
    Dropdown::builder()
        .options(tools())
        .throttle_ms(0)
        .build()
        .unwrap()
}

type Pending = Rc<RefCell<Vec<(PageRequest, Reply<Choice>)>>>;

fn manual_source() -> (impl FnMut(&PageRequest, Reply<Choice>), Pending) {
    let pending: Pending = Rc::new(RefCell::new(Vec::new()));
    let inner = Rc::clone(&pending);
    let source = move |request: &PageRequest, reply: Reply<Choice>| {
        inner.borrow_mut().push((request.clone(), reply));
    };
    (source, pending)
}

// ==================== Setup ====================

#[test]
fn test_build_without_provider_fails() {
    let result = Dropdown::<Choice>::builder().build();
    assert!(matches!(result, Err(Error::Setup(_))));
}

#[test]
fn test_build_with_zero_height_fails() {
    let result = Dropdown::builder().options(tools()).height(0).build();
    assert!(matches!(result, Err(Error::Setup(_))));
}

// ==================== Initial selection ====================

#[test]
fn test_initial_load_selects_first_without_placeholder() {
    let mut dropdown = sync_dropdown();

    assert_eq!(dropdown.entries().len(), 6);
    assert_eq!(dropdown.selected().map(|c| c.label.as_str()), Some("ripgrep"));
    assert_eq!(dropdown.shown(), &Shown::Item("ripgrep".into()));

    let events = dropdown.drain_events();
    assert!(events.contains(&DropdownEvent::Ready));
    assert!(events.contains(&DropdownEvent::Changed(Choice::new("ripgrep"))));
}

#[test]
fn test_placeholder_leaves_selection_empty() {
    let dropdown = Dropdown::builder()
        .options(tools())
        .placeholder("Pick a tool")
        .build()
        .unwrap();

    assert!(dropdown.selected().is_none());
    assert_eq!(dropdown.shown(), &Shown::Placeholder("Pick a tool".into()));
}

#[test]
fn test_initial_item_wins() {
    let dropdown = Dropdown::builder()
        .options(tools())
        .placeholder("Pick a tool")
        .initial(Choice::new("bat"))
        .build()
        .unwrap();

    assert_eq!(dropdown.selected(), Some(&Choice::new("bat")));
}

#[test]
fn test_preselected_option_is_selected() {
    let mut choices = tools();
    choices[3].selected = true;
    let dropdown = Dropdown::builder()
        .select_filter(SelectFilter::from_choices(choices))
        .placeholder("ignored")
        .build()
        .unwrap();

    assert_eq!(dropdown.selected().map(|c| c.label.as_str()), Some("delta"));
}

#[test]
fn test_empty_source_shows_no_results_placeholder() {
    let dropdown = Dropdown::builder()
        .loader(StaticSource::<Choice>::new(Vec::new(), 5))
        .build()
        .unwrap();

    assert!(dropdown.selected().is_none());
    assert_eq!(dropdown.shown(), &Shown::Placeholder("No results for ''".into()));
    assert_eq!(dropdown.no_results(), Some("No results for ''"));
}

// ==================== Searching ====================

#[test]
fn test_typing_is_debounced() {
    let mut dropdown = Dropdown::builder()
        .options(tools())
        .throttle_ms(300)
        .build()
        .unwrap();
    let start = Instant::now();

    for (i, c) in "de".chars().enumerate() {
        dropdown.handle(Intent::Input(c), start + Duration::from_millis(50 * i as u64));
    }
    // Still the unfiltered list
    assert_eq!(dropdown.entries().len(), 6);
    let due = dropdown.next_deadline().unwrap();
    assert_eq!(due, start + Duration::from_millis(350));

    dropdown.tick(due - Duration::from_millis(1));
    assert_eq!(dropdown.entries().len(), 6);

    dropdown.tick(due);
    assert_eq!(labels(&dropdown), vec!["delta"]);
    assert!(dropdown.next_deadline().is_none());
}

#[test]
fn test_synchronous_filter_runs_on_every_key() {
    let mut dropdown = sync_dropdown();
    let now = Instant::now();

    dropdown.handle(Intent::Input('d'), now);
    assert_eq!(labels(&dropdown), vec!["delta", "dust"]);
    dropdown.handle(Intent::Input('u'), now);
    assert_eq!(labels(&dropdown), vec!["dust"]);
    dropdown.handle(Intent::Backspace, now);
    assert_eq!(labels(&dropdown), vec!["delta", "dust"]);
}

#[test]
fn test_no_results_then_recovery() {
    let mut dropdown = sync_dropdown();
    dropdown.drain_events();

    dropdown.new_term("zzz");
    assert_eq!(dropdown.no_results(), Some("No results for 'zzz'"));
    assert!(
        dropdown
            .drain_events()
            .contains(&DropdownEvent::NoResults("No results for 'zzz'".into()))
    );
    assert_eq!(dropdown.current(), None);

    dropdown.new_term("b");
    assert_eq!(dropdown.no_results(), None);
    assert_eq!(dropdown.current(), Some(0));
}

#[test]
fn test_stale_search_results_never_show() {
    let (source, pending) = manual_source();
    let mut dropdown = Dropdown::builder()
        .loader(source)
        .throttle_ms(0)
        .height(5)
        .build()
        .unwrap();
    let now = Instant::now();

    // Initial load for ""
    let (_, initial) = pending.borrow_mut().remove(0);
    initial.exhausted();
    dropdown.tick(now);

    dropdown.new_term("a");
    let (_, reply_a) = pending.borrow_mut().remove(0);
    dropdown.new_term("b");
    let (request_b, reply_b) = pending.borrow_mut().remove(0);
    assert_eq!(request_b.term, "b");

    reply_b.deliver(vec![Choice::new("b1")]);
    dropdown.tick(now);
    reply_a.deliver(vec![Choice::new("a1"), Choice::new("a2")]);
    dropdown.tick(now);

    assert_eq!(labels(&dropdown), vec!["b1"]);
    assert!(dropdown.entries().iter().all(|e| e.term == "b"));
}

// ==================== Navigation ====================

#[test]
fn test_open_seeds_current_from_selection() {
    let mut dropdown = Dropdown::builder()
        .options(tools())
        .initial(Choice::new("delta"))
        .throttle_ms(0)
        .build()
        .unwrap();

    dropdown.handle(Intent::Open, Instant::now());
    assert!(dropdown.is_open());
    assert_eq!(dropdown.current(), Some(3));
}

#[test]
fn test_advance_then_commit_selects_and_closes() {
    let mut dropdown = sync_dropdown();
    let now = Instant::now();
    dropdown.drain_events();

    dropdown.handle(Intent::Advance, now); // opens
    assert!(dropdown.is_open());
    assert_eq!(dropdown.current(), Some(0));
    dropdown.handle(Intent::Advance, now);
    dropdown.handle(Intent::Advance, now);
    dropdown.handle(Intent::Retreat, now);
    dropdown.handle(Intent::Commit, now);

    assert!(!dropdown.is_open());
    assert_eq!(dropdown.selected(), Some(&Choice::new("fd")));
    assert!(
        dropdown
            .drain_events()
            .contains(&DropdownEvent::Changed(Choice::new("fd")))
    );
}

#[test]
fn test_click_disabled_is_ignored() {
    let mut choices = tools();
    choices[1].disabled = true;
    let mut dropdown = Dropdown::builder()
        .options(choices)
        .placeholder("pick")
        .build()
        .unwrap();
    let now = Instant::now();

    dropdown.handle(Intent::Open, now);
    dropdown.handle(Intent::Click(1), now);
    assert!(dropdown.selected().is_none());
    assert!(dropdown.is_open());

    dropdown.handle(Intent::Click(2), now);
    assert_eq!(dropdown.selected(), Some(&Choice::new("bat")));
    assert!(!dropdown.is_open());
}

#[test]
fn test_hover_moves_current_unless_disabled() {
    let mut dropdown = sync_dropdown();
    let now = Instant::now();
    dropdown.handle(Intent::Open, now);

    dropdown.handle(Intent::Hover(4), now);
    assert_eq!(dropdown.current(), Some(4));

    let mut quiet = Dropdown::builder()
        .options(tools())
        .select_on_hover(false)
        .build()
        .unwrap();
    quiet.handle(Intent::Open, now);
    quiet.handle(Intent::Hover(4), now);
    assert_eq!(quiet.current(), Some(0));
}

// ==================== Commands ====================

#[test]
fn test_refresh_item_updates_selection_and_entries() {
    let mut dropdown = sync_dropdown();
    let renamed = Choice::new("ripgrep 14").with_value("ripgrep");

    dropdown.refresh_item(renamed.clone(), |c| c.value.clone());

    assert_eq!(dropdown.selected(), Some(&renamed));
    assert_eq!(dropdown.shown(), &Shown::Item("ripgrep 14".into()));
    assert_eq!(dropdown.entries()[0].item, renamed);
}

#[test]
fn test_reset_ignores_initial_item() {
    let mut dropdown = Dropdown::builder()
        .options(tools())
        .initial(Choice::new("eza"))
        .throttle_ms(0)
        .build()
        .unwrap();
    let now = Instant::now();

    dropdown.handle(Intent::Input('b'), now);
    assert_eq!(dropdown.entries().len(), 1);

    dropdown.reset();
    assert_eq!(dropdown.query(), "");
    assert_eq!(dropdown.entries().len(), 6);
    assert_eq!(dropdown.selected(), Some(&Choice::new("ripgrep")));
}

#[test]
fn test_refresh_reports_when_settled() {
    let mut dropdown = sync_dropdown();
    dropdown.drain_events();

    dropdown.refresh();
    assert!(dropdown.drain_events().contains(&DropdownEvent::Refreshed));
}

#[test]
fn test_load_only_when_needed_defers_until_open() {
    let fetches = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&fetches);
    let source = move |request: &PageRequest, reply: Reply<Choice>| {
        *counter.borrow_mut() += 1;
        if request.page == 0 {
            reply.deliver(tools());
        } else {
            reply.exhausted();
        }
    };
    let mut dropdown = Dropdown::builder()
        .loader(source)
        .placeholder("pick")
        .load_only_when_needed(true)
        .build()
        .unwrap();

    assert!(dropdown.drain_events().contains(&DropdownEvent::Ready));
    assert_eq!(*fetches.borrow(), 0);
    assert!(dropdown.entries().is_empty());

    dropdown.handle(Intent::Open, Instant::now());
    assert_eq!(dropdown.entries().len(), 6);
    assert_eq!(dropdown.current(), Some(0));
    assert!(*fetches.borrow() >= 1);
}

#[test]
fn test_scrolling_tops_up_paginated_list() {
    let source = StaticSource::new(
        (0..50).map(|i| Choice::new(format!("item{i:02}"))).collect(),
        5,
    );
    let mut dropdown = Dropdown::builder()
        .loader(source)
        .height(5)
        .build()
        .unwrap();
    let now = Instant::now();

    // Two pages: the first fills rows 0..5 with the last row still visible
    assert_eq!(dropdown.entries().len(), 10);

    dropdown.handle(Intent::Open, now);
    dropdown.handle(Intent::Scroll(5), now);
    assert_eq!(dropdown.viewport().offset, 5);
    assert_eq!(dropdown.entries().len(), 15);

    // Walking to the last row with the keyboard keeps loading too
    for _ in 0..15 {
        dropdown.handle(Intent::Advance, now);
    }
    assert_eq!(dropdown.current(), Some(15));
    assert_eq!(dropdown.entries().len(), 20);
}

#[test]
fn test_refresh_item_moves_current_off_disabled_entry() {
    let mut dropdown = Dropdown::builder()
        .options(["a", "b", "c"].into_iter().map(Choice::new).collect())
        .throttle_ms(0)
        .build()
        .unwrap();
    let now = Instant::now();
    dropdown.handle(Intent::Open, now);
    dropdown.handle(Intent::Advance, now);
    assert_eq!(dropdown.current_item(), Some(&Choice::new("b")));

    // e.g. a crate that got yanked while the list was open
    dropdown.refresh_item(Choice::new("b").disabled(), |c| c.value.clone());

    let current = dropdown.current_item().unwrap();
    assert!(!current.disabled);
    assert_eq!(current, &Choice::new("a"));
}

#[test]
fn test_superseded_initial_load_still_reports_ready() {
    let (source, pending) = manual_source();
    let mut dropdown = Dropdown::builder()
        .loader(source)
        .placeholder("pick")
        .throttle_ms(0)
        .build()
        .unwrap();
    let now = Instant::now();
    assert!(!dropdown.drain_events().contains(&DropdownEvent::Ready));

    // Typing before the first page of "" arrives
    dropdown.handle(Intent::Open, now);
    dropdown.handle(Intent::Input('r'), now);
    assert!(dropdown.drain_events().contains(&DropdownEvent::Ready));

    let (_, initial) = pending.borrow_mut().remove(0);
    initial.deliver(vec![Choice::new("stale")]);
    let (request, reply) = pending.borrow_mut().remove(0);
    assert_eq!(request.term, "r");
    reply.deliver(vec![Choice::new("rg")]);
    dropdown.tick(now);
    let (_, last) = pending.borrow_mut().remove(0);
    last.exhausted();
    dropdown.tick(now);

    assert_eq!(labels(&dropdown), vec!["rg"]);
    assert_eq!(dropdown.shown(), &Shown::Placeholder("pick".into()));
    // Ready is raised once only
    assert!(!dropdown.drain_events().contains(&DropdownEvent::Ready));
}

#[test]
fn test_deferred_load_skips_no_results_event() {
    let events = Dropdown::builder()
        .loader(StaticSource::<Choice>::new(Vec::new(), 5))
        .load_only_when_needed(true)
        .build()
        .unwrap()
        .drain_events();

    assert!(events.contains(&DropdownEvent::Ready));
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, DropdownEvent::NoResults(_)))
    );
}
