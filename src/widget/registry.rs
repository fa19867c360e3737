use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// The widget kinds the dashboard knows how to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Content,
    MediaList,
}

/// A widget declaration extracted from layout or fragment markup.
#[derive(Debug, Clone)]
pub struct WidgetDecl {
    pub kind: WidgetKind,
    pub attrs: BTreeMap<String, String>,
}

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<hearth-(content|medialist)\b([^>]*)>").unwrap());

// Values accept double or single quoting so a list literal can sit inside
// an outer-quoted attribute without escaping collisions.
static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Scan markup for widget tags and return their declarations in source order.
///
/// Fragments loaded at runtime go through the same scan, so dynamically
/// inserted markup can declare further widgets.
pub fn declared_widgets(markup: &str) -> Vec<WidgetDecl> {
    TAG.captures_iter(markup)
        .map(|tag| {
            let kind = match &tag[1] {
                "content" => WidgetKind::Content,
                _ => WidgetKind::MediaList,
            };

            let mut attrs = BTreeMap::new();
            for attr in ATTR.captures_iter(&tag[2]) {
                let value = attr
                    .get(2)
                    .or_else(|| attr.get(3))
                    .map(|m| m.as_str())
                    .unwrap_or("");
                attrs.insert(attr[1].to_ascii_lowercase(), value.to_string());
            }

            WidgetDecl { kind, attrs }
        })
        .collect()
}
