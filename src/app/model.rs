//! Dashboard model: the widgets on screen plus focus, hover and the
//! bounded notification log.

use crate::content::ContentLoader;
use crate::medialist::{MediaListView, Notification};
use crate::widget::Widget;

/// The main dashboard model.
pub struct App {
    /// At most one content widget; a fragment-declared one replaces it.
    pub content: Option<ContentLoader>,
    pub lists: Vec<MediaListView>,
    /// Index into `lists` of the focused panel.
    pub focused: usize,
    /// Hover cursor within the focused list.
    pub hover: usize,

    events: Vec<Notification>,
    event_log_capacity: usize,
    next_widget_id: usize,
}

impl App {
    pub fn new(event_log_capacity: usize) -> Self {
        Self {
            content: None,
            lists: Vec::new(),
            focused: 0,
            hover: 0,
            events: Vec::new(),
            event_log_capacity: event_log_capacity.max(1),
            next_widget_id: 0,
        }
    }

    /// Hand out the next widget id; ids tag outward notifications.
    pub fn next_widget_id(&mut self) -> usize {
        let id = self.next_widget_id;
        self.next_widget_id += 1;
        id
    }

    pub fn set_content(&mut self, content: ContentLoader) {
        self.content = Some(content);
    }

    /// Connect a media list and add it to the dashboard.
    pub fn push_list(&mut self, mut list: MediaListView) {
        list.on_connected();
        self.lists.push(list);
    }

    pub fn focused_list(&self) -> Option<&MediaListView> {
        self.lists.get(self.focused)
    }

    pub fn focused_list_mut(&mut self) -> Option<&mut MediaListView> {
        self.lists.get_mut(self.focused)
    }

    /// Cycle panel focus; the hover cursor resets on every switch.
    pub fn cycle_focus(&mut self) {
        if self.lists.is_empty() {
            return;
        }
        self.focused = (self.focused + 1) % self.lists.len();
        self.hover = 0;
    }

    fn focused_len(&self) -> usize {
        self.focused_list().map(|l| l.entries().len()).unwrap_or(0)
    }

    /// Move the hover cursor down, wrapping around.
    pub fn hover_next(&mut self) {
        let len = self.focused_len();
        if len > 0 {
            self.hover = (self.hover + 1) % len;
        }
    }

    /// Move the hover cursor up, wrapping around.
    pub fn hover_prev(&mut self) {
        let len = self.focused_len();
        if len > 0 {
            self.hover = (self.hover + len - 1) % len;
        }
    }

    pub fn hover_top(&mut self) {
        self.hover = 0;
    }

    pub fn hover_bottom(&mut self) {
        let len = self.focused_len();
        if len > 0 {
            self.hover = len - 1;
        }
    }

    /// Activate the hovered entry of the focused list.
    pub fn click_hovered(&mut self) {
        let hover = self.hover;
        if let Some(list) = self.focused_list_mut() {
            list.on_clicked(hover);
        }
    }

    /// Append a notification to the bounded log.
    pub fn record_event(&mut self, notification: Notification) {
        self.events.push(notification);
        if self.events.len() > self.event_log_capacity {
            self.events.remove(0);
        }
    }

    /// Recent notifications, oldest first.
    pub fn events(&self) -> &[Notification] {
        &self.events
    }
}
