use std::collections::BTreeMap;

/// Explicit property store with per-widget defaults.
///
/// Attribute names equal property names; unknown properties read as the
/// empty string, so substitution and handlers never need to special-case
/// missing values.
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: BTreeMap<String, String>,
}

impl Props {
    /// Create a store seeded with the widget's defaults.
    pub fn with_defaults(defaults: &[(&str, &str)]) -> Self {
        Self {
            values: defaults
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Read a property; absent properties read as the empty string.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Write a property.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Overlay declaration attributes on top of the defaults.
    pub fn apply(&mut self, attrs: &BTreeMap<String, String>) {
        for (name, value) in attrs {
            self.set(name, value.clone());
        }
    }
}
