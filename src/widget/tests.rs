use super::*;

struct Probe {
    props: Props,
    changed: Vec<String>,
}

impl Probe {
    fn new() -> Self {
        Self {
            props: Props::with_defaults(&[("file", ""), ("margin", "1")]),
            changed: Vec::new(),
        }
    }
}

impl Widget for Probe {
    fn props(&self) -> &Props {
        &self.props
    }
    fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }
    fn on_attribute_changed(&mut self, name: &str) {
        self.changed.push(name.to_string());
    }
}

#[test]
fn props_defaults_and_overrides() {
    let mut props = Props::with_defaults(&[("margin", "1"), ("list", "")]);
    assert_eq!(props.get("margin"), "1");
    assert_eq!(props.get("list"), "");
    assert_eq!(props.get("unknown"), "");

    props.set("margin", "3");
    assert_eq!(props.get("margin"), "3");
}

#[test]
fn props_apply_overlays_declaration_attributes() {
    let mut props = Props::with_defaults(&[("margin", "1")]);
    let mut attrs = std::collections::BTreeMap::new();
    attrs.insert("margin".to_string(), "2".to_string());
    attrs.insert("title".to_string(), "Hall".to_string());

    props.apply(&attrs);
    assert_eq!(props.get("margin"), "2");
    assert_eq!(props.get("title"), "Hall");
}

#[test]
fn set_attribute_writes_store_and_dispatches() {
    let mut probe = Probe::new();
    probe.set_attribute("file", "a.mp3");
    probe.set_attribute("margin", "2");

    assert_eq!(probe.props.get("file"), "a.mp3");
    assert_eq!(probe.props.get("margin"), "2");
    assert_eq!(probe.changed, vec!["file".to_string(), "margin".to_string()]);
}

#[test]
fn registry_extracts_declarations_in_source_order() {
    let markup = r#"
        <div>
          <hearth-content file="http://hub/fragment.html" room="kitchen">
          <hearth-medialist list='[{`File`: `a.mp3`}]' margin="2">
        </div>
    "#;

    let decls = declared_widgets(markup);
    assert_eq!(decls.len(), 2);

    assert_eq!(decls[0].kind, WidgetKind::Content);
    assert_eq!(decls[0].attrs["file"], "http://hub/fragment.html");
    assert_eq!(decls[0].attrs["room"], "kitchen");

    assert_eq!(decls[1].kind, WidgetKind::MediaList);
    assert_eq!(decls[1].attrs["list"], "[{`File`: `a.mp3`}]");
    assert_eq!(decls[1].attrs["margin"], "2");
}

#[test]
fn registry_accepts_both_quote_styles_and_lowercases_names() {
    let decls = declared_widgets(r#"<hearth-medialist Track='7' file="b.mp3">"#);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].attrs["track"], "7");
    assert_eq!(decls[0].attrs["file"], "b.mp3");
}

#[test]
fn registry_ignores_unrelated_markup() {
    assert!(declared_widgets("<div class=\"media\">plain</div>").is_empty());
}
