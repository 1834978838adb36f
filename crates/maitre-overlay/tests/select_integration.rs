#![forbid(unsafe_code)]

//! Integration tests for list overlays driven through the in-memory document.
//!
//! These tests exercise placement, dismissal, roving focus and mounting
//! together, the way a console screen wires a dropdown.
//!
//! # Invariants tested
//!
//! 1. Global listeners exist only while a panel is open; every close path
//!    (outside click, Escape, commit, disable, unmount) leaves none behind.
//! 2. The pointer-down that opened a panel never dismisses it.
//! 3. Keyboard moves focus entries; hover only moves the highlight.
//! 4. Arrow navigation clamps at both ends.
//! 5. Panels mount under the overlay root, else under the body.
//! 6. Scroll, resize, option changes and explicit invalidation re-measure
//!    and place the panel again; an unchanged placement is not re-applied.
//! 7. Instances are independent.

use std::cell::RefCell;
use std::rc::Rc;

use maitre_core::element::ElementId;
use maitre_core::event::{GlobalEvent, KeyCode, KeyEvent, ListenerKind, ListenerOptions};
use maitre_core::focus::FocusControl;
use maitre_core::geometry::{Rect, Size};
use maitre_core::host::{OverlayHost, PanelRole};
use maitre_core::measure::Geometry;
use maitre_harness::Document;
use maitre_overlay::{
    ActionMenu, CloseReason, Entry, OpenCause, Overlay, OverlayOutcome, PlacementOptions, Select,
    Side,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn page() -> Rc<Document> {
    Rc::new(Document::new(Size::new(1280.0, 800.0)))
}

fn wines() -> Vec<Entry<&'static str>> {
    vec![
        Entry::new("barolo", "Barolo"),
        Entry::new("chablis", "Chablis"),
        Entry::new("rioja", "Rioja"),
        Entry::new("sancerre", "Sancerre"),
        Entry::new("tokaji", "Tokaji"),
    ]
}

fn trigger_at(doc: &Document, x: f64, y: f64) -> ElementId {
    doc.append(doc.body(), Rect::new(x, y, 220.0, 36.0))
}

/// Deliver a global event to `select` if the document routes it there.
fn deliver<V: Clone + PartialEq>(
    doc: &Document,
    event: &GlobalEvent,
    select: &mut Select<V>,
) -> OverlayOutcome {
    if doc.route(event).contains(&select.overlay().id()) {
        select.handle_global(event)
    } else {
        OverlayOutcome::Ignored
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

// ---------------------------------------------------------------------------
// Opening and placement
// ---------------------------------------------------------------------------

#[test]
fn open_mounts_under_overlay_root_and_attaches_listeners() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());

    assert_eq!(doc.listener_count(), 0);
    assert!(select.trigger_pointer_down(&doc.pointer(trigger)));

    let panel = select.overlay().panel().unwrap();
    assert_eq!(doc.parent(panel), doc.overlay_root());
    let regs = doc.listeners_of(select.overlay().id());
    assert_eq!(regs.len(), 4);
    let scroll = regs
        .iter()
        .find(|reg| reg.kind == ListenerKind::Scroll)
        .unwrap();
    assert_eq!(scroll.options, ListenerOptions::CAPTURE | ListenerOptions::PASSIVE);

    let placement = select.overlay().placement().unwrap();
    assert_eq!(placement.side, Side::Below);
    assert_eq!(placement.top, 140.0);
    assert_eq!(placement.left, 100.0);
    assert_eq!(placement.width, 220.0);
    assert_eq!(doc.panel(panel).unwrap().frame, placement.frame());
}

#[test]
fn mounts_under_body_without_overlay_root() {
    let doc = Rc::new(Document::without_overlay_root(Size::new(1280.0, 800.0)));
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Programmatic);
    let panel = select.overlay().panel().unwrap();
    assert_eq!(doc.parent(panel), Some(doc.body()));
}

#[test]
fn flips_above_near_viewport_bottom() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 740.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let placement = select.overlay().placement().unwrap();
    assert_eq!(placement.side, Side::Above);
    // Five rows of 32 under the default cap.
    assert_eq!(placement.top, 740.0 - 4.0 - 160.0);
    assert_eq!(select.overlay().panel_aria().unwrap().side, Side::Above);

    // Provisional pass assumed a full cap; the measured pass moved it once.
    let panel = select.overlay().panel().unwrap();
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);
}

#[test]
fn short_list_above_sits_gap_from_trigger() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 740.0);
    let mut select = Select::new(doc.surface(), trigger, wines()[..3].to_vec());
    select.open(OpenCause::Keyboard);
    assert_eq!(select.overlay().placement().unwrap().side, Side::Above);

    let panel = select.overlay().panel().unwrap();
    let rendered = doc.measure(panel).unwrap();
    let trigger_rect = doc.measure(trigger).unwrap();
    assert_eq!(rendered.height, 96.0);
    assert_eq!(trigger_rect.top() - rendered.bottom(), 4.0);
}

#[test]
fn clamps_into_viewport_near_right_edge() {
    let doc = page();
    let trigger = doc.append(doc.body(), Rect::new(1250.0, 100.0, 20.0, 36.0));
    let mut select = Select::new(doc.surface(), trigger, wines()).min_width(240.0);
    select.open(OpenCause::Keyboard);
    let placement = select.overlay().placement().unwrap();
    assert_eq!(placement.width, 240.0);
    assert_eq!(placement.left, 1280.0 - 240.0 - 8.0);
}

#[test]
fn scroll_of_ancestor_repositions() {
    let doc = page();
    let region = doc.append_container(doc.body());
    let trigger = doc.append(region, Rect::new(100.0, 100.0, 220.0, 36.0));
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let panel = select.overlay().panel().unwrap();
    assert_eq!(doc.panel(panel).unwrap().repositions, 0);

    let scroll = doc.scroll_by(region, 0.0, 50.0);
    assert_eq!(deliver(&doc, &scroll, &mut select), OverlayOutcome::Repositioned);
    assert_eq!(select.overlay().placement().unwrap().top, 90.0);
    assert_eq!(doc.panel(panel).unwrap().frame.top, 90.0);
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);
}

#[test]
fn shrinking_viewport_flips_and_floors_cap() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);

    let resize = doc.resize(Size::new(1280.0, 200.0));
    assert_eq!(deliver(&doc, &resize, &mut select), OverlayOutcome::Repositioned);
    let placement = select.overlay().placement().unwrap();
    assert_eq!(placement.side, Side::Above);
    assert_eq!(placement.top, 8.0);
    assert_eq!(placement.max_height, Some(96.0));
}

#[test]
fn detached_trigger_keeps_last_placement() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let before = select.overlay().placement();
    doc.remove(trigger);
    let resize = doc.resize(Size::new(900.0, 700.0));
    deliver(&doc, &resize, &mut select);
    assert_eq!(select.overlay().placement(), before);
}

#[test]
fn invalidate_picks_up_wider_content() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let panel = select.overlay().panel().unwrap();
    assert_eq!(doc.panel(panel).unwrap().repositions, 0);

    doc.set_content_size(panel, Size::new(400.0, 160.0));
    let placement = select.invalidate().unwrap();
    assert_eq!(placement.width, 400.0);
    assert_eq!(doc.panel(panel).unwrap().frame.width, 400.0);
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);

    select.invalidate();
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);
}

#[test]
fn invalidate_while_closed_is_a_no_op() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut menu = ActionMenu::new(doc.surface(), trigger, wines());
    assert_eq!(menu.invalidate(), None);
    assert!(doc.mounted_panels().is_empty());
}

#[test]
fn new_options_reposition_open_panel() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let options = PlacementOptions::default().preferred_max_height(320.0);
    let mut overlay =
        Overlay::new(doc.surface(), trigger, PanelRole::Listbox).with_options(options);
    overlay.set_entries(3);
    assert!(overlay.open(OpenCause::Keyboard));
    let panel = overlay.panel().unwrap();
    assert_eq!(overlay.placement().unwrap().width, 220.0);
    assert_eq!(doc.panel(panel).unwrap().repositions, 0);

    overlay.set_options(options.min_width(300.0));
    assert_eq!(overlay.placement().unwrap().width, 300.0);
    assert_eq!(doc.panel(panel).unwrap().frame.width, 300.0);
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);

    // A mounted panel is measured, so a new estimate changes nothing.
    overlay.set_estimate(Size::new(500.0, 600.0));
    assert_eq!(overlay.placement().unwrap().width, 300.0);
    assert_eq!(doc.panel(panel).unwrap().repositions, 1);
}

// ---------------------------------------------------------------------------
// Dismissal
// ---------------------------------------------------------------------------

#[test]
fn opening_pointer_does_not_dismiss() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let elsewhere = doc.append(doc.body(), Rect::new(600.0, 600.0, 40.0, 20.0));
    let mut select = Select::new(doc.surface(), trigger, wines());

    // Opened from a label click: the same pointer-down then bubbles to the
    // document with a target outside the trigger.
    let opening = doc.pointer(elsewhere);
    select.open(OpenCause::Pointer { seq: opening.seq });
    let event = GlobalEvent::PointerDown(opening);
    assert_eq!(deliver(&doc, &event, &mut select), OverlayOutcome::Ignored);
    assert!(select.is_open());

    let later = doc.pointer_down(elsewhere);
    assert_eq!(
        deliver(&doc, &later, &mut select),
        OverlayOutcome::Dismissed(CloseReason::OutsidePointer)
    );
}

#[test]
fn outside_click_closes_without_restoring_focus() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.trigger_pointer_down(&doc.pointer(trigger));
    let focused_before = doc.focus_log().len();

    let outside = doc.pointer_down(doc.body());
    assert_eq!(
        deliver(&doc, &outside, &mut select),
        OverlayOutcome::Dismissed(CloseReason::OutsidePointer)
    );
    assert!(!select.is_open());
    assert_eq!(doc.listener_count(), 0);
    assert!(doc.mounted_panels().is_empty());
    assert_eq!(doc.focus_log().len(), focused_before);
}

#[test]
fn clicks_inside_panel_or_trigger_do_not_dismiss() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let entry = select.overlay().entry(2).unwrap();

    for target in [entry, trigger, select.overlay().panel().unwrap()] {
        let event = doc.pointer_down(target);
        assert_eq!(deliver(&doc, &event, &mut select), OverlayOutcome::Ignored);
    }
    assert!(select.is_open());
}

#[test]
fn global_escape_closes_and_restores_focus() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);

    let escape = doc.key_down(KeyCode::Escape);
    assert_eq!(
        deliver(&doc, &escape, &mut select),
        OverlayOutcome::Dismissed(CloseReason::Escape)
    );
    assert_eq!(doc.focused(), Some(trigger));
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn other_keys_are_not_dismissals() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let event = doc.key_down(KeyCode::Char('a'));
    assert_eq!(deliver(&doc, &event, &mut select), OverlayOutcome::Ignored);
    assert!(select.is_open());
}

#[test]
fn trigger_pointer_toggles() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    assert!(select.trigger_pointer_down(&doc.pointer(trigger)));
    assert!(!select.trigger_pointer_down(&doc.pointer(trigger)));
    assert!(!select.is_open());
    assert_eq!(doc.listener_count(), 0);
    assert_eq!(doc.focused(), Some(trigger));
}

#[test]
fn disabling_while_open_closes_and_leaks_nothing() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    assert_eq!(select.set_disabled(true), Some(CloseReason::Disabled));
    assert_eq!(doc.listener_count(), 0);
    assert!(doc.mounted_panels().is_empty());

    assert!(!select.open(OpenCause::Keyboard));
    assert!(!select.trigger_key(&key(KeyCode::Enter)));
    assert!(select.trigger_aria().disabled);
    assert_eq!(doc.listener_count(), 0);

    select.set_disabled(false);
    assert!(select.open(OpenCause::Keyboard));
}

#[test]
fn dropping_an_open_widget_releases_everything() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    assert_eq!(doc.listener_count(), 4);
    drop(select);
    assert_eq!(doc.listener_count(), 0);
    assert!(doc.mounted_panels().is_empty());
}

#[test]
fn repeated_open_close_cycles_do_not_accumulate_listeners() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    for _ in 0..25 {
        select.open(OpenCause::Keyboard);
        assert_eq!(doc.listener_count(), 4);
        let escape = doc.key_down(KeyCode::Escape);
        deliver(&doc, &escape, &mut select);
    }
    assert_eq!(doc.listener_count(), 0);
}

// ---------------------------------------------------------------------------
// Keyboard and pointer interaction
// ---------------------------------------------------------------------------

#[test]
fn trigger_keys_open() {
    for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down] {
        let doc = page();
        let trigger = trigger_at(&doc, 100.0, 100.0);
        let mut select = Select::new(doc.surface(), trigger, wines());
        assert!(select.trigger_key(&key(code)), "{code:?} should open");
    }
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    assert!(!select.trigger_key(&key(KeyCode::Char('x'))));
}

#[test]
fn open_focuses_selected_entry() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines()).value("rioja");
    select.open(OpenCause::Keyboard);
    assert_eq!(select.active_index(), Some(2));
    assert_eq!(doc.focused(), select.overlay().entry(2));
    assert!(select.option_aria(2).unwrap().selected);
    assert_eq!(select.option_aria(2).unwrap().role, "option");
}

#[test]
fn arrows_move_focus_and_clamp() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines()).value("sancerre");
    select.open(OpenCause::Keyboard);

    select.handle_key(&key(KeyCode::Down));
    assert_eq!(select.active_index(), Some(4));
    assert_eq!(doc.focused(), select.overlay().entry(4));

    let log_len = doc.focus_log().len();
    select.handle_key(&key(KeyCode::Down));
    assert_eq!(select.active_index(), Some(4));
    assert_eq!(doc.focus_log().len(), log_len);

    select.handle_key(&key(KeyCode::Home));
    select.handle_key(&key(KeyCode::Up));
    assert_eq!(select.active_index(), Some(0));
    assert_eq!(doc.focused(), select.overlay().entry(0));
}

#[test]
fn hover_moves_highlight_but_not_focus() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    select.open(OpenCause::Keyboard);
    let focused = doc.focused();

    assert!(select.hover(3));
    assert_eq!(select.active_index(), Some(3));
    assert!(select.option_aria(3).unwrap().active);
    assert_eq!(doc.focused(), focused);
}

#[test]
fn enter_commits_and_restores_focus() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut select = Select::new(doc.surface(), trigger, wines())
        .placeholder("Pick a wine")
        .on_change(move |v| sink.borrow_mut().push(v));
    assert_eq!(select.label(), "Pick a wine");

    select.open(OpenCause::Keyboard);
    select.handle_key(&key(KeyCode::Down));
    select.handle_key(&key(KeyCode::Enter));

    assert_eq!(*changes.borrow(), vec!["chablis"]);
    assert_eq!(select.current(), Some(&"chablis"));
    assert_eq!(select.label(), "Chablis");
    assert!(!select.is_open());
    assert_eq!(doc.focused(), Some(trigger));
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn click_commits_entry() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut select =
        Select::new(doc.surface(), trigger, wines()).on_change(move |v| sink.borrow_mut().push(v));
    select.open(OpenCause::Keyboard);
    select.click_entry(4);
    assert_eq!(*changes.borrow(), vec!["tokaji"]);
    select.click_entry(1);
    assert_eq!(changes.borrow().len(), 1, "closed panel must not commit");
}

#[test]
fn panel_escape_cancels_without_commit() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let changes = Rc::new(RefCell::new(Vec::<&str>::new()));
    let sink = Rc::clone(&changes);
    let mut select = Select::new(doc.surface(), trigger, wines())
        .value("barolo")
        .on_change(move |v| sink.borrow_mut().push(v));
    select.open(OpenCause::Keyboard);
    select.handle_key(&key(KeyCode::Down));
    select.handle_key(&key(KeyCode::Escape));
    assert!(!select.is_open());
    assert!(changes.borrow().is_empty());
    assert_eq!(select.current(), Some(&"barolo"));
    assert_eq!(doc.focused(), Some(trigger));
}

#[test]
fn empty_list_opens_and_ignores_keys() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select: Select<u32> = Select::new(doc.surface(), trigger, Vec::new());
    select.open(OpenCause::Keyboard);
    assert_eq!(select.active_index(), None);
    select.handle_key(&key(KeyCode::Down));
    select.handle_key(&key(KeyCode::Enter));
    assert!(select.is_open());
    select.handle_key(&key(KeyCode::Escape));
    assert!(!select.is_open());
}

#[test]
fn aria_reflects_state() {
    let doc = page();
    let trigger = trigger_at(&doc, 100.0, 100.0);
    let mut select = Select::new(doc.surface(), trigger, wines());
    let closed = select.trigger_aria();
    assert_eq!(closed.haspopup, "listbox");
    assert!(!closed.expanded);
    assert_eq!(closed.controls, None);

    select.open(OpenCause::Keyboard);
    let open = select.trigger_aria();
    assert!(open.expanded);
    assert_eq!(open.controls, select.overlay().panel());
    let panel = select.overlay().panel_aria().unwrap();
    assert_eq!(panel.role, "listbox");
    assert_eq!(panel.labelled_by, trigger);
}

// ---------------------------------------------------------------------------
// Multiple instances
// ---------------------------------------------------------------------------

#[test]
fn instances_are_independent() {
    let doc = page();
    let a_trigger = trigger_at(&doc, 100.0, 100.0);
    let b_trigger = trigger_at(&doc, 500.0, 100.0);
    let mut a = Select::new(doc.surface(), a_trigger, wines());
    let mut b = Select::new(doc.surface(), b_trigger, wines());

    a.open(OpenCause::Programmatic);
    b.open(OpenCause::Programmatic);
    assert!(a.is_open() && b.is_open());
    assert_eq!(doc.listener_count(), 8);
    assert_eq!(doc.mounted_panels().len(), 2);

    // A click on B's panel is outside A.
    let inside_b = doc.pointer_down(b.overlay().entry(0).unwrap());
    assert_eq!(
        deliver(&doc, &inside_b, &mut a),
        OverlayOutcome::Dismissed(CloseReason::OutsidePointer)
    );
    assert_eq!(deliver(&doc, &inside_b, &mut b), OverlayOutcome::Ignored);
    assert!(!a.is_open() && b.is_open());
    assert_eq!(doc.listener_count(), 4);
    assert_eq!(doc.listeners_of(b.overlay().id()).len(), 4);
}

#[test]
fn clicking_another_trigger_switches_panels() {
    let doc = page();
    let a_trigger = trigger_at(&doc, 100.0, 100.0);
    let b_trigger = trigger_at(&doc, 500.0, 100.0);
    let mut a = Select::new(doc.surface(), a_trigger, wines());
    let mut b = Select::new(doc.surface(), b_trigger, wines());
    a.trigger_pointer_down(&doc.pointer(a_trigger));

    // Capture-phase document listeners see the pointer-down first.
    let click = doc.pointer(b_trigger);
    let event = GlobalEvent::PointerDown(click);
    deliver(&doc, &event, &mut a);
    deliver(&doc, &event, &mut b);
    b.trigger_pointer_down(&click);

    assert!(!a.is_open());
    assert!(b.is_open());
    assert_eq!(doc.listener_count(), 4);
}

// ---------------------------------------------------------------------------
// Action menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Edit,
    Duplicate,
    Archive,
}

#[test]
fn action_menu_starts_at_first_and_invokes() {
    let doc = page();
    let trigger = doc.append(doc.body(), Rect::new(1200.0, 300.0, 32.0, 32.0));
    let invoked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&invoked);
    let mut menu = ActionMenu::new(
        doc.surface(),
        trigger,
        vec![
            Entry::new(RowAction::Edit, "Edit").icon("pencil"),
            Entry::new(RowAction::Duplicate, "Duplicate"),
            Entry::new(RowAction::Archive, "Archive").icon("archive"),
        ],
    )
    .on_action(move |a| sink.borrow_mut().push(a));

    assert_eq!(menu.trigger_aria().haspopup, "listbox");
    assert!(menu.trigger_key(&key(KeyCode::Enter)));
    assert_eq!(menu.active_index(), Some(0));
    assert_eq!(doc.focused(), menu.overlay().entry(0));
    assert_eq!(menu.option_aria(0).unwrap().role, "option");
    assert!(!menu.option_aria(0).unwrap().selected);

    let placement = menu.overlay().placement().unwrap();
    assert_eq!(placement.left, 1280.0 - 180.0 - 8.0);

    menu.handle_key(&key(KeyCode::End));
    menu.handle_key(&key(KeyCode::Enter));
    assert_eq!(*invoked.borrow(), vec![RowAction::Archive]);
    assert_eq!(doc.focused(), Some(trigger));

    // No selection memory: reopening starts at the top again.
    menu.open(OpenCause::Keyboard);
    assert_eq!(menu.active_index(), Some(0));
    menu.click_entry(1);
    assert_eq!(*invoked.borrow(), vec![RowAction::Archive, RowAction::Duplicate]);
    assert_eq!(doc.listener_count(), 0);
}
