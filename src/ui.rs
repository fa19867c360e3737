//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::content::ContentLoader;
use crate::medialist::{EntryView, MediaListView, Notification};

/// Render the controls help text.
fn controls_text() -> String {
    [
        "[j/k] hover",
        "[gg/G] top/bottom",
        "[tab] focus",
        "[enter] select",
        "[q] quit",
    ]
    .join(" | ")
}

/// Render the recent-notification log, newest first.
fn events_text(events: &[Notification]) -> String {
    if events.is_empty() {
        return "no events yet".to_string();
    }
    events
        .iter()
        .rev()
        .map(|n| format!("list#{} {}={}", n.widget, n.property.as_str(), n.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let content_rows = app
        .content
        .as_ref()
        .map(|c| (c.lines().len() as u16 + 2).clamp(3, 8))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(content_rows),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" hearth ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if let Some(content) = &app.content {
        draw_content(frame, content, chunks[1]);
    }

    draw_lists(frame, app, chunks[2]);

    let footer = Paragraph::new(format!("{}\n{}", controls_text(), events_text(app.events())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_content(frame: &mut Frame, content: &ContentLoader, area: Rect) {
    let body = if content.loading() {
        "loading...".to_string()
    } else {
        content.lines().join("\n")
    };

    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" content ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_lists(frame: &mut Frame, app: &App, area: Rect) {
    if app.lists.is_empty() {
        let empty = Paragraph::new("no media lists declared")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" media "));
        frame.render_widget(empty, area);
        return;
    }

    let constraints: Vec<Constraint> = app
        .lists
        .iter()
        .map(|list| {
            list.height_rows()
                .map(|h| Constraint::Length(h.saturating_add(2)))
                .unwrap_or(Constraint::Min(3))
        })
        .collect();
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, list) in app.lists.iter().enumerate() {
        let focused = i == app.focused;
        let hover = if focused { Some(app.hover) } else { None };
        draw_media_list(frame, list, hover, focused, areas[i]);
    }
}

fn draw_media_list(
    frame: &mut Frame,
    list: &MediaListView,
    hover: Option<usize>,
    focused: bool,
    area: Rect,
) {
    // `width` is a pass-through sizing hint; the panel shrinks to it.
    let area = match list.width_cols() {
        Some(w) => {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(w.saturating_add(2)), Constraint::Min(0)])
                .split(area)[0]
        }
        None => area,
    };

    let margin = list.margin();
    let title = if focused {
        format!(" media #{} * ", list.id())
    } else {
        format!(" media #{} ", list.id())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: margin,
            right: margin,
            top: 0,
            bottom: 0,
        });

    let total = list.entries().len();
    let list_height = area.height.saturating_sub(2) as usize;
    let anchor = hover
        .or_else(|| list.current_index())
        .unwrap_or(0)
        .min(total.saturating_sub(1));

    // Center the anchored row when the list overflows the panel. Important:
    // only build rows for the visible window.
    let (start, end, anchor_in_visible) = if total <= list_height || list_height == 0 {
        (0, total, anchor)
    } else {
        let half = list_height / 2;
        let mut start = if anchor > half { anchor - half } else { 0 };
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height, anchor - start)
    };

    let visible: Vec<ListItem> = list.entries()[start..end].iter().map(entry_row).collect();

    let rows = List::new(visible)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    if focused && total > 0 {
        state.select(Some(anchor_in_visible));
    }
    frame.render_stateful_widget(rows, area, &mut state);
}

/// One display line: current marker, track, title, artist, duration and a
/// dim cover reference.
fn entry_row(view: &EntryView) -> ListItem<'_> {
    let marker = if view.current { "▶" } else { " " };
    let mut spans = vec![
        Span::raw(format!("{} {:>3}  ", marker, view.entry.track)),
        Span::raw(format!("{:<24}", view.entry.title)),
        Span::raw(format!(" {:<18}", view.entry.artist)),
        Span::raw(format!(" {:>6}", view.duration_text)),
    ];
    if !view.entry.cover.is_empty() {
        spans.push(Span::styled(
            format!("  {}", view.entry.cover),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let line = Line::from(spans);
    if view.current {
        ListItem::new(line).style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        ListItem::new(line)
    }
}
