//! Content widget: loads a remote text fragment, resolves `{{name}}`
//! placeholders against the host attributes and appends the result to its
//! content area. Fragments may declare further widgets; the runtime feeds
//! the returned markup back through the registry.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use regex::{Captures, Regex};
use tracing::{debug, error};

use crate::widget::{Props, Widget};

mod fetch;

pub use fetch::FetchError;

#[cfg(test)]
mod tests;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

/// A templated content include.
///
/// Construction starts a single, non-retrying fetch of the resource named
/// by the `file` property. The fetch result is delivered through `poll`,
/// driven by the runtime's event loop.
pub struct ContentLoader {
    props: Props,
    lines: Vec<String>,
    pending: Option<Receiver<Result<String, FetchError>>>,
}

impl ContentLoader {
    /// Create the widget and start fetching its fragment.
    ///
    /// The widget unconditionally injects `refresh_delay` into the caller's
    /// refresh slot: content dashboards drop to this poll interval for the
    /// lifetime of the process. There is no teardown.
    pub fn new(
        attrs: &BTreeMap<String, String>,
        refresh_delay: Duration,
        refresh: &mut Duration,
    ) -> Self {
        let mut props = Props::with_defaults(&[("file", "")]);
        props.apply(attrs);

        *refresh = refresh_delay;

        let url = props.get("file").to_string();
        debug!(file = %url, "content widget constructed");
        let pending = if url.is_empty() {
            None
        } else {
            Some(fetch::spawn_fetch(url))
        };

        Self {
            props,
            lines: Vec::new(),
            pending,
        }
    }

    /// Drive the in-flight fetch.
    ///
    /// Returns the substituted markup exactly once, when the fragment
    /// arrives, so the caller can initialize widgets declared inside it.
    /// A failed fetch is terminal: logged, nothing inserted, no retry.
    pub fn poll(&mut self) -> Option<String> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(Ok(body)) => {
                self.pending = None;
                let solved = self.substitute(&body);
                self.lines.extend(solved.lines().map(str::to_string));
                debug!("content fragment loaded and inserted");
                Some(solved)
            }
            Ok(Err(e)) => {
                self.pending = None;
                error!(error = %e, "content fetch failed");
                None
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                None
            }
        }
    }

    /// Single left-to-right substitution pass. Replacement text is not
    /// rescanned, so nested placeholders stay literal.
    fn substitute(&self, body: &str) -> String {
        PLACEHOLDER
            .replace_all(body, |caps: &Captures| self.props.get(&caps[1]).to_string())
            .into_owned()
    }

    /// The widget's rendered content area.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True while the fetch is still outstanding.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }
}

impl Widget for ContentLoader {
    fn props(&self) -> &Props {
        &self.props
    }
    fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }
    // Attributes only feed substitution at insertion time; there are no
    // reactive handlers and no re-fetch on `file` changes.
    fn on_attribute_changed(&mut self, _name: &str) {}
}
