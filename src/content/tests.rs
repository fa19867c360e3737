use super::fetch;
use super::*;
use std::collections::BTreeMap;
use std::sync::mpsc;

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn loader(pairs: &[(&str, &str)]) -> ContentLoader {
    let mut refresh = Duration::ZERO;
    ContentLoader::new(&attrs(pairs), Duration::from_millis(500), &mut refresh)
}

#[test]
fn construction_injects_refresh_delay() {
    let mut refresh = Duration::from_millis(50);
    let _ = ContentLoader::new(&attrs(&[]), Duration::from_millis(500), &mut refresh);
    assert_eq!(refresh, Duration::from_millis(500));
}

#[test]
fn substitution_replaces_known_attributes_verbatim() {
    let loader = loader(&[("room", "Kitchen"), ("temp", "21.5")]);
    let out = loader.substitute("<b>{{room}}</b> at {{temp}} deg");
    assert_eq!(out, "<b>Kitchen</b> at 21.5 deg");
}

#[test]
fn absent_attributes_substitute_empty_string() {
    let loader = loader(&[]);
    assert_eq!(loader.substitute("a{{missing}}b"), "ab");
}

#[test]
fn substitution_is_a_single_pass() {
    // Replacement text containing a placeholder token must stay literal.
    let loader = loader(&[("a", "{{b}}"), ("b", "resolved")]);
    assert_eq!(loader.substitute("x {{a}} y"), "x {{b}} y");
}

#[test]
fn empty_file_starts_no_fetch() {
    let loader = loader(&[("file", "")]);
    assert!(!loader.loading());
}

#[test]
fn poll_appends_fragment_and_returns_markup_once() {
    let mut loader = loader(&[("greeting", "hi")]);
    let (tx, rx) = mpsc::channel();
    loader.pending = Some(rx);

    tx.send(Ok("<b>{{greeting}}</b>\nsecond line".to_string()))
        .unwrap();

    let markup = loader.poll().expect("fragment should be delivered");
    assert_eq!(markup, "<b>hi</b>\nsecond line");
    assert_eq!(
        loader.lines(),
        &["<b>hi</b>".to_string(), "second line".to_string()]
    );
    assert!(!loader.loading());

    // The markup is handed out exactly once.
    assert!(loader.poll().is_none());
}

#[test]
fn poll_returns_none_while_fetch_is_outstanding() {
    let mut loader = loader(&[]);
    let (tx, rx) = mpsc::channel::<Result<String, FetchError>>();
    loader.pending = Some(rx);

    assert!(loader.poll().is_none());
    assert!(loader.loading());
    drop(tx);
}

#[test]
fn fetch_failure_is_terminal_and_inserts_nothing() {
    // Connection refused on a closed local port produces a real error fast.
    let rx = fetch::spawn_fetch("http://127.0.0.1:9/fragment.html".to_string());
    let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(result.is_err());

    let mut loader = loader(&[]);
    let (tx, err_rx) = mpsc::channel();
    loader.pending = Some(err_rx);
    tx.send(result).unwrap();

    assert!(loader.poll().is_none());
    assert!(loader.lines().is_empty());
    assert!(!loader.loading());
}
