//! Integration tests: editing session and screen set (mb-editor ↔ mb-core ↔ mb-render).
//!
//! Drives the session the way the browser host does: text edits, canvas
//! clicks by box path, outline clicks, and screen switching.

use mb_core::{DeviceConfig, WidgetId, lint_document};
use mb_editor::{ScreenSet, SelectionEvent, SyncEngine};
use mb_render::{OutlineEvent, path_to_box, selected_count};
use pretty_assertions::assert_eq;

const WELCOME: &str = include_str!("../../mb-core/tests/fixtures/welcome_screen.json");

fn session() -> SyncEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    SyncEngine::from_text(WELCOME, DeviceConfig::default()).unwrap()
}

// ─── Canvas → selection ─────────────────────────────────────────────────

#[test]
fn canvas_click_selects_innermost_widget() {
    let mut s = session();
    let title = WidgetId::intern("welcome_title");
    let path = path_to_box(&s.render(), title).unwrap();

    assert_eq!(s.handle(SelectionEvent::Canvas { path }), Some(title));
    let canvas = s.render();
    assert_eq!(selected_count(&canvas), 1);

    let selected: Vec<_> = s.outline().into_iter().filter(|l| l.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, title);
}

#[test]
fn canvas_click_on_frame_keeps_selection() {
    let mut s = session();
    s.select_str("welcome_card");
    // The device frame itself carries no click handler.
    let sel = s.handle(SelectionEvent::Canvas { path: vec![] });
    assert_eq!(sel, Some(WidgetId::intern("welcome_card")));
}

// ─── Outline → selection ────────────────────────────────────────────────

#[test]
fn outline_click_and_collapse() {
    let mut s = session();
    let lines = s.outline();
    assert_eq!(lines.len(), 12);

    let actions = lines
        .iter()
        .find(|l| l.id == WidgetId::intern("welcome_actions"))
        .unwrap();
    let toggle = actions.click_chevron().unwrap();
    s.handle(SelectionEvent::Outline(toggle));
    assert_eq!(s.outline().len(), 8);

    let sel = s.handle(SelectionEvent::Outline(OutlineEvent::Select(actions.id)));
    assert_eq!(sel, Some(actions.id));
    assert!(s.render_html().contains("data-widget-id=\"welcome_actions\" data-selected=\"true\""));
}

// ─── Text → tree ────────────────────────────────────────────────────────

#[test]
fn editing_through_invalid_text() {
    let mut s = session();
    s.select_str("welcome_next");

    let broken = &WELCOME[..WELCOME.len() / 2];
    assert!(s.set_text(broken).is_err());
    assert_eq!(s.outline().len(), 12, "last good tree stays visible");
    assert_eq!(s.selected(), Some(WidgetId::intern("welcome_next")));

    let edited = WELCOME.replace("\"Next\"", "\"Continue\"");
    s.set_text(&edited).unwrap();
    assert!(s.last_error().is_none());
    assert!(s.render_html().contains("Continue"));
    assert_eq!(s.selected(), Some(WidgetId::intern("welcome_next")));
    assert!(s.has_unsaved_changes());
}

#[test]
fn welcome_screen_lints_clean() {
    let s = session();
    assert_eq!(lint_document(s.tree()), vec![]);
}

// ─── Screens ────────────────────────────────────────────────────────────

#[test]
fn screens_keep_their_own_layouts() {
    let mut set = ScreenSet::new(DeviceConfig::default());
    let home = set.active().id.clone();
    set.session_mut().set_text(WELCOME).unwrap();
    set.save_active().unwrap();

    let second = set.add_screen(None);
    assert_eq!(set.active().name, "Screen 2");
    assert_eq!(set.session().outline().len(), 2);

    assert!(set.activate(&home));
    assert_eq!(set.session().outline().len(), 12);
    assert!(set.delete_screen(&second));
    assert_eq!(set.screens().len(), 1);
    assert!(!set.delete_screen(&home));
}
