use serde::Deserialize;
use thiserror::Error;

/// Failure to parse the `list` collection literal.
#[derive(Debug, Error)]
pub enum ListParseError {
    #[error("malformed media list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One item of the `list` collection literal, as written by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MediaItem {
    #[serde(alias = "File")]
    file: String,
    #[serde(alias = "Track")]
    track: Option<TrackValue>,
    #[serde(alias = "Cover")]
    cover: String,
    #[serde(alias = "Title")]
    title: String,
    #[serde(alias = "Artist")]
    artist: String,
    #[serde(alias = "Time")]
    time: Option<f64>,
}

/// Track ordinals may be written as numbers or text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TrackValue {
    Number(i64),
    Text(String),
}

impl TrackValue {
    /// Falsy per the source convention: zero or blank text.
    fn is_falsy(&self) -> bool {
        match self {
            TrackValue::Number(n) => *n == 0,
            TrackValue::Text(s) => s.trim().is_empty(),
        }
    }

    fn to_text(&self) -> String {
        match self {
            TrackValue::Number(n) => n.to_string(),
            TrackValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// A parsed media entry, immutable once rendered.
#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub file: String,
    /// Ordinal as text; defaults to position + 1 when absent or falsy.
    pub track: String,
    pub cover: String,
    pub title: String,
    pub artist: String,
    /// Duration in seconds, when the source provides one.
    pub time: Option<f64>,
}

/// Normalize the relaxed quoting and parse the collection literal into an
/// ordered sequence of entries. Source order is preserved; entries are
/// never sorted by track.
pub fn parse_list(raw: &str) -> Result<Vec<MediaEntry>, ListParseError> {
    let items: Vec<MediaItem> = serde_json::from_str(&normalize_quotes(raw))?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let track = match &item.track {
                Some(t) if !t.is_falsy() => t.to_text(),
                _ => (index + 1).to_string(),
            };
            MediaEntry {
                file: item.file,
                track,
                cover: item.cover,
                title: item.title,
                artist: item.artist,
                time: item.time,
            }
        })
        .collect())
}

/// The literal allows backtick and acute-accent quoting so it can sit
/// inside an outer-quoted attribute without escaping collisions.
fn normalize_quotes(raw: &str) -> String {
    raw.replace(['`', '´'], "\"")
}
