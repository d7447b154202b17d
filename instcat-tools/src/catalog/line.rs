//! Classification of individual catalog lines.
//!
//! An instance catalog is a sequence of records keyed by their first
//! whitespace-delimited token. Only `object` records carry a sky position:
//!
//! ```text
//! rightascension 53.0091385
//! object 992886536196 53.0449009 -27.3220807 22.5 starSED/... 0 0 0 0 0 0 point none CCM 0.03 3.1
//! ```
//!
//! Everything after the declination is ignored here. Lines with any other
//! first token, blank lines included, are passthrough lines.

use instcat_core::SkyPosition;
use thiserror::Error;

/// First token of a record that describes a sky object.
pub const OBJECT_KEYWORD: &str = "object";

/// A single line of an instance catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogLine<'a> {
    /// Header command, comment, blank line, or any non-object record.
    Passthrough(&'a str),
    Object(ObjectLine<'a>),
}

/// An `object` record with its parsed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectLine<'a> {
    /// The full line as read, without its terminating newline.
    pub raw: &'a str,
    /// Opaque identifier, the token after `object`.
    pub object_id: &'a str,
    pub position: SkyPosition,
}

/// Why an `object` line could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLine {
    #[error("missing object identifier")]
    MissingId,
    #[error("missing right ascension")]
    MissingRa,
    #[error("missing declination")]
    MissingDec,
    #[error("invalid right ascension '{0}'")]
    InvalidRa(String),
    #[error("invalid declination '{0}'")]
    InvalidDec(String),
}

impl<'a> CatalogLine<'a> {
    /// Classifies `line` and, for object records, parses the position.
    ///
    /// `line` must not contain its newline terminator. Any other trailing
    /// characters, such as `\r`, are kept in [`raw`](Self::raw).
    pub fn parse(line: &'a str) -> Result<Self, MalformedLine> {
        let mut tokens = line.split_ascii_whitespace();
        if tokens.next() != Some(OBJECT_KEYWORD) {
            return Ok(CatalogLine::Passthrough(line));
        }

        let object_id = tokens.next().ok_or(MalformedLine::MissingId)?;
        let ra = tokens.next().ok_or(MalformedLine::MissingRa)?;
        let dec = tokens.next().ok_or(MalformedLine::MissingDec)?;

        let ra_deg = parse_coordinate(ra).ok_or_else(|| MalformedLine::InvalidRa(ra.to_string()))?;
        let dec_deg =
            parse_coordinate(dec).ok_or_else(|| MalformedLine::InvalidDec(dec.to_string()))?;

        Ok(CatalogLine::Object(ObjectLine {
            raw: line,
            object_id,
            position: SkyPosition::new(ra_deg, dec_deg),
        }))
    }

    /// The original text of the line.
    pub fn raw(&self) -> &'a str {
        match self {
            CatalogLine::Passthrough(raw) => raw,
            CatalogLine::Object(object) => object.raw,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, CatalogLine::Object(_))
    }
}

/// Returns `true` if the first token of `line` is `object`, without parsing
/// the rest of the record.
pub fn is_object_record(line: &str) -> bool {
    line.split_ascii_whitespace().next() == Some(OBJECT_KEYWORD)
}

fn parse_coordinate(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
