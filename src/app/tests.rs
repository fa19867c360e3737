use super::*;
use crate::medialist::{MediaListView, Notification, NotifyProperty};
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver};

fn list(id: usize, files: &[&str], tx: mpsc::Sender<Notification>) -> MediaListView {
    let literal = files
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{{`File`: `{}`, `Title`: `Song {}`}}", f, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let mut attrs = BTreeMap::new();
    attrs.insert("list".to_string(), format!("[{literal}]"));
    MediaListView::new(id, &attrs, tx)
}

fn dashboard() -> (App, Receiver<Notification>) {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(4);
    let a = app.next_widget_id();
    let b = app.next_widget_id();
    app.push_list(list(a, &["a.mp3", "b.mp3", "c.mp3"], tx.clone()));
    app.push_list(list(b, &["x.mp3", "y.mp3"], tx));
    (app, rx)
}

#[test]
fn hover_wraps_in_both_directions() {
    let (mut app, _rx) = dashboard();

    app.hover_prev();
    assert_eq!(app.hover, 2);
    app.hover_next();
    assert_eq!(app.hover, 0);
    app.hover_next();
    assert_eq!(app.hover, 1);

    app.hover_bottom();
    assert_eq!(app.hover, 2);
    app.hover_top();
    assert_eq!(app.hover, 0);
}

#[test]
fn cycle_focus_wraps_and_resets_hover() {
    let (mut app, _rx) = dashboard();
    app.hover_next();

    app.cycle_focus();
    assert_eq!(app.focused, 1);
    assert_eq!(app.hover, 0);

    app.cycle_focus();
    assert_eq!(app.focused, 0);
}

#[test]
fn click_hovered_routes_to_the_focused_list() {
    let (mut app, rx) = dashboard();
    app.cycle_focus();
    app.hover_next();

    app.click_hovered();

    let first = rx.try_recv().unwrap();
    assert_eq!(first.widget, 1);
    assert_eq!(first.property, NotifyProperty::File);
    assert_eq!(first.value, "y.mp3");
    assert_eq!(rx.try_recv().unwrap().property, NotifyProperty::Track);
}

#[test]
fn hover_on_empty_dashboard_is_a_no_op() {
    let mut app = App::new(4);
    app.hover_next();
    app.hover_prev();
    app.cycle_focus();
    app.click_hovered();
    assert_eq!(app.hover, 0);
    assert_eq!(app.focused, 0);
}

#[test]
fn event_log_is_bounded() {
    let (mut app, _rx) = dashboard();
    for i in 0..10 {
        app.record_event(Notification {
            widget: 0,
            property: NotifyProperty::Track,
            value: i.to_string(),
        });
    }

    assert_eq!(app.events().len(), 4);
    assert_eq!(app.events().first().unwrap().value, "6");
    assert_eq!(app.events().last().unwrap().value, "9");
}
