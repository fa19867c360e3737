use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::app::App;
use crate::config::Settings;
use crate::content::ContentLoader;
use crate::medialist::{MediaListView, Notification};
use crate::widget::{WidgetKind, declared_widgets};

/// Instantiate and connect every widget declared in `markup`.
///
/// Runs once over the layout file at startup and again over every fetched
/// fragment, so dynamically loaded markup can declare further widgets.
pub fn connect_declared(
    app: &mut App,
    markup: &str,
    settings: &Settings,
    events_tx: &Sender<Notification>,
    refresh: &mut Duration,
) {
    for decl in declared_widgets(markup) {
        match decl.kind {
            WidgetKind::Content => {
                let content = ContentLoader::new(
                    &decl.attrs,
                    Duration::from_millis(settings.content.refresh_delay_ms),
                    refresh,
                );
                app.set_content(content);
            }
            WidgetKind::MediaList => {
                let id = app.next_widget_id();
                let list = MediaListView::new(id, &decl.attrs, events_tx.clone());
                app.push_list(list);
            }
        }
    }
}
