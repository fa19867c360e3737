//! Media list widget: parses a compact collection literal into entries,
//! renders them as selectable rows and tracks a single "current" selection
//! driven by the independent `track` and `file` attribute axes.

mod model;
mod parse;

pub use model::*;
pub use parse::{ListParseError, MediaEntry, parse_list};
