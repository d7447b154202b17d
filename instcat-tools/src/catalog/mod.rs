//! Instance catalog text model.
//!
//! - [`line`]: classify a line as passthrough or `object`, parse its position
//! - [`header`]: header commands (`rightascension`, `mjd`, ...) and file summaries

pub mod header;
pub mod line;

pub use header::{
    read_header_block, read_header_commands, summarize, CatalogSummary, HeaderCommands,
};
pub use line::{is_object_record, CatalogLine, MalformedLine, ObjectLine, OBJECT_KEYWORD};
