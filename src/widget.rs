//! Widget framework: property store, attribute dispatch and the tag registry.
//!
//! Widgets are plain structs composed from a `Props` store and the `Widget`
//! trait, which routes attribute writes through a per-widget dispatcher.

mod props;
mod registry;

pub use props::Props;
pub use registry::{WidgetDecl, WidgetKind, declared_widgets};

/// Reactive widget lifecycle.
///
/// `set_attribute` is the single entry point for external state changes:
/// it writes the property store and immediately runs the widget's handler
/// for that attribute. Handlers are synchronous and run to completion, so
/// two render passes can never overlap for one instance.
pub trait Widget {
    fn props(&self) -> &Props;
    fn props_mut(&mut self) -> &mut Props;

    /// Called once when the widget joins the dashboard.
    fn on_connected(&mut self) {}

    /// Dispatch an attribute change to the matching handler.
    fn on_attribute_changed(&mut self, name: &str);

    /// Write a property and notify the widget's dispatcher.
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.props_mut().set(name, value);
        self.on_attribute_changed(name);
    }
}

#[cfg(test)]
mod tests;
