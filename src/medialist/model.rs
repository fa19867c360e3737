//! The media list view-model: entry collection, selection marking and
//! outward change notifications.

use std::collections::BTreeMap;
use std::sync::mpsc::Sender;

use tracing::error;

use crate::widget::{Props, Widget};

use super::parse::{MediaEntry, parse_list};

/// Which property an outward change notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyProperty {
    File,
    Track,
}

impl NotifyProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyProperty::File => "file",
            NotifyProperty::Track => "track",
        }
    }
}

/// Outward change notification for external subscribers, e.g. a playback
/// command dispatcher.
#[derive(Debug, Clone)]
pub struct Notification {
    pub widget: usize,
    pub property: NotifyProperty,
    pub value: String,
}

/// A rendered entry. The current marker is a recomputed flag on the
/// view-model, not shared visual state.
#[derive(Debug, Clone)]
pub struct EntryView {
    pub entry: MediaEntry,
    pub duration_text: String,
    pub current: bool,
}

const DEFAULTS: &[(&str, &str)] = &[
    ("list", ""),
    ("file", ""),
    ("track", ""),
    ("width", ""),
    ("height", ""),
    ("margin", "1"),
];

/// The media list widget.
pub struct MediaListView {
    id: usize,
    props: Props,
    entries: Vec<EntryView>,
    events: Sender<Notification>,
    /// Entry index the UI should scroll into view on the next draw.
    scroll_to: Option<usize>,
    margin: u16,
}

impl MediaListView {
    pub fn new(id: usize, attrs: &BTreeMap<String, String>, events: Sender<Notification>) -> Self {
        let mut props = Props::with_defaults(DEFAULTS);
        props.apply(attrs);

        Self {
            id,
            props,
            entries: Vec::new(),
            events,
            scroll_to: None,
            margin: 1,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn entries(&self) -> &[EntryView] {
        &self.entries
    }

    /// Index of the entry carrying the current marker, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.entries.iter().position(|view| view.current)
    }

    /// Margin in cells, applied on connect and on `margin` changes.
    pub fn margin(&self) -> u16 {
        self.margin
    }

    /// Requested panel height in rows, when `height` is numeric.
    pub fn height_rows(&self) -> Option<u16> {
        self.props.get("height").trim().parse().ok()
    }

    /// Requested panel width in columns, when `width` is numeric.
    pub fn width_cols(&self) -> Option<u16> {
        self.props.get("width").trim().parse().ok()
    }

    /// Consume the scroll-into-view hint recorded by the last marking pass.
    pub fn take_scroll_to(&mut self) -> Option<usize> {
        self.scroll_to.take()
    }

    /// Entry activation: route the new values through the attribute
    /// dispatcher (each axis re-runs its marking handler), then emit one
    /// notification per property. Repeated activations each emit.
    pub fn on_clicked(&mut self, index: usize) {
        let Some(view) = self.entries.get(index) else {
            return;
        };
        let file = view.entry.file.clone();
        let track = view.entry.track.clone();

        self.set_attribute("file", &file);
        self.set_attribute("track", &track);

        let _ = self.events.send(Notification {
            widget: self.id,
            property: NotifyProperty::File,
            value: file,
        });
        let _ = self.events.send(Notification {
            widget: self.id,
            property: NotifyProperty::Track,
            value: track,
        });
    }

    /// Rebuild the entry collection from the `list` property.
    ///
    /// On malformed input the pass is abandoned: a two-line diagnostic is
    /// logged, prior entries stay rendered and the invalid `list` value
    /// remains set.
    fn fill_list(&mut self) {
        let raw = self.props.get("list").to_string();
        match parse_list(&raw) {
            Ok(entries) => {
                self.entries = entries
                    .into_iter()
                    .map(|entry| EntryView {
                        duration_text: duration_text(entry.time),
                        entry,
                        current: false,
                    })
                    .collect();
                self.set_position();
            }
            Err(e) => {
                error!(widget = self.id, "media list parse failed: {e}");
                error!(widget = self.id, "offending list value: {raw}");
            }
        }
    }

    /// Re-mark selection from the `track` axis.
    fn set_position(&mut self) {
        let track = self.props.get("track").to_string();
        self.mark_current(|view| !track.is_empty() && view.entry.track == track);
    }

    /// Re-mark selection from the `file` axis.
    fn set_file(&mut self) {
        let file = self.props.get("file").to_string();
        self.mark_current(|view| !file.is_empty() && view.entry.file == file);
    }

    /// Clear every marker, then mark the first matching entry. Keeps the
    /// zero-or-one invariant even when the source data has duplicate keys.
    fn mark_current<F: Fn(&EntryView) -> bool>(&mut self, matches: F) {
        for view in &mut self.entries {
            view.current = false;
        }
        self.scroll_to = None;

        if let Some(index) = self.entries.iter().position(|view| matches(view)) {
            self.entries[index].current = true;
            self.scroll_to = Some(index);
        }
    }

    fn apply_margin(&mut self) {
        self.margin = margin_cells(self.props.get("margin"));
    }
}

impl Widget for MediaListView {
    fn props(&self) -> &Props {
        &self.props
    }
    fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    fn on_connected(&mut self) {
        self.apply_margin();
        if !self.props.get("list").is_empty() {
            self.fill_list();
        }
    }

    fn on_attribute_changed(&mut self, name: &str) {
        match name {
            "list" => self.fill_list(),
            "track" => self.set_position(),
            "file" => self.set_file(),
            "margin" => self.apply_margin(),
            _ => {}
        }
    }
}

/// Format a positive duration in seconds as `MM:SS`; anything else renders
/// as a blank placeholder.
pub(crate) fn duration_text(time: Option<f64>) -> String {
    match time {
        Some(t) if t > 0.0 => {
            let secs = t as u64;
            format!("{:02}:{:02}", secs / 60, secs % 60)
        }
        _ => " ".to_string(),
    }
}

/// Numeric margins convert to the TUI size unit (cells); unitful values
/// keep their leading digits.
pub(crate) fn margin_cells(raw: &str) -> u16 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u16>() {
        return n;
    }
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(1)
}
