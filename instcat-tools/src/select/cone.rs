//! Cone selection over instance catalog files.
//!
//! [`ConeSelector`] streams a catalog line by line. Passthrough lines are
//! always written; `object` lines are written only when their position lies
//! within [`ConeQuery::radius_deg`] of the center (inclusive). Surviving lines
//! are emitted byte for byte, in input order, each followed by `\n`.
//!
//! ```no_run
//! use instcat_tools::select::sky_cone_select;
//!
//! let stats = sky_cone_select("instcat.txt", 53.0449009, -27.3220807, 0.1, "cone.txt")?;
//! println!("kept {} objects", stats.kept);
//! # Ok::<(), instcat_tools::InstcatError>(())
//! ```

use super::output::AtomicOutput;
use super::stats::SelectionStats;
use crate::catalog::CatalogLine;
use crate::error::{FileOperation, InstcatError, IoResultExt, Result};
use instcat_core::{SeparationMethod, SeparationMetric, SkyPosition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Center and radius of a selection cone, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeQuery {
    pub center: SkyPosition,
    /// Inclusive radius. A negative or NaN radius matches nothing.
    pub radius_deg: f64,
}

impl ConeQuery {
    pub fn new(ra_deg: f64, dec_deg: f64, radius_deg: f64) -> Self {
        Self {
            center: SkyPosition::new(ra_deg, dec_deg),
            radius_deg,
        }
    }

    /// Whether `position` lies inside the cone according to `metric`.
    #[inline]
    pub fn contains_with<M: SeparationMetric>(&self, metric: &M, position: &SkyPosition) -> bool {
        metric.separation_deg(&self.center, position) <= self.radius_deg
    }

    /// Whether `position` lies inside the cone on the great circle.
    #[inline]
    pub fn contains(&self, position: &SkyPosition) -> bool {
        self.contains_with(&SeparationMethod::Vincenty, position)
    }
}

impl fmt::Display for ConeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} radius {}°", self.center, self.radius_deg)
    }
}

/// What to do with an `object` line whose identifier, RA or Dec is missing
/// or not a finite number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Abort with [`InstcatError::Parse`]; no output file is produced.
    #[default]
    Fail,
    /// Drop the line, log a warning and count it in [`SelectionStats::malformed`].
    Skip,
}

/// Streams catalog lines through a cone test.
#[derive(Debug, Clone)]
pub struct ConeSelector<M = SeparationMethod> {
    query: ConeQuery,
    metric: M,
    policy: MalformedLinePolicy,
}

impl ConeSelector<SeparationMethod> {
    /// Great-circle selection that fails on malformed object lines.
    pub fn new(query: ConeQuery) -> Self {
        Self {
            query,
            metric: SeparationMethod::default(),
            policy: MalformedLinePolicy::default(),
        }
    }
}

impl<M: SeparationMetric + fmt::Debug> ConeSelector<M> {
    pub fn with_metric<N: SeparationMetric>(self, metric: N) -> ConeSelector<N> {
        ConeSelector {
            query: self.query,
            metric,
            policy: self.policy,
        }
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MalformedLinePolicy {
        self.policy
    }

    /// Filters `input` into `output`.
    ///
    /// `output` is created or replaced only after the whole input has been
    /// processed; on error it is left as it was.
    ///
    /// # Errors
    /// [`InstcatError::FileAccess`] if `input` cannot be opened or read or
    /// `output` cannot be written, and [`InstcatError::Parse`] for a malformed
    /// object line under [`MalformedLinePolicy::Fail`].
    pub fn select_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<SelectionStats> {
        let input = input.as_ref();
        let output = output.as_ref();
        debug!(
            input = %input.display(),
            output = %output.display(),
            query = %self.query,
            metric = ?self.metric,
            policy = ?self.policy,
            "Starting cone selection"
        );

        let file = File::open(input).with_file(input, FileOperation::Open)?;
        let mut sink = AtomicOutput::create(output)?;
        let stats = self.filter(BufReader::new(file), &mut sink, input, output)?;
        sink.commit()?;

        info!(
            output = %output.display(),
            kept = stats.kept,
            dropped = stats.dropped,
            passthrough = stats.passthrough,
            malformed = stats.malformed,
            "Cone selection complete"
        );
        Ok(stats)
    }

    /// Filters an in-memory or otherwise already opened catalog.
    ///
    /// File access errors name `<input>` / `<output>` in place of paths.
    pub fn select_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<SelectionStats> {
        self.filter(reader, writer, Path::new("<input>"), Path::new("<output>"))
    }

    fn filter<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
        source: &Path,
        sink: &Path,
    ) -> Result<SelectionStats> {
        let mut stats = SelectionStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .with_file(source, FileOperation::Read)?;
            if n == 0 {
                break;
            }
            stats.lines_read += 1;

            let content = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
            // Classification only; the raw bytes are what gets written.
            let text = String::from_utf8_lossy(content);

            let keep = match CatalogLine::parse(&text) {
                Ok(CatalogLine::Passthrough(_)) => {
                    stats.passthrough += 1;
                    true
                }
                Ok(CatalogLine::Object(object)) => {
                    let inside = self.query.contains_with(&self.metric, &object.position);
                    if inside {
                        stats.kept += 1;
                    } else {
                        stats.dropped += 1;
                    }
                    inside
                }
                Err(reason) => {
                    self.handle_malformed(stats.lines_read, &text, reason.to_string())?;
                    stats.malformed += 1;
                    false
                }
            };

            if keep {
                writer
                    .write_all(content)
                    .and_then(|_| writer.write_all(b"\n"))
                    .with_file(sink, FileOperation::Write)?;
            }
        }

        writer.flush().with_file(sink, FileOperation::Write)?;
        Ok(stats)
    }

    fn handle_malformed(&self, line_number: u64, line: &str, reason: String) -> Result<()> {
        match self.policy {
            MalformedLinePolicy::Fail => Err(InstcatError::Parse {
                line_number,
                line: line.to_string(),
                reason,
            }),
            MalformedLinePolicy::Skip => {
                warn!(line_number, %reason, "Skipping malformed object line");
                Ok(())
            }
        }
    }
}

/// Copies the lines of `input` that survive a cone cut around
/// `(ra, dec)` with radius `radius` (all degrees) into `output`.
///
/// Uses the great-circle distance and rejects malformed object lines. See
/// [`ConeSelector`] for other metrics and policies.
pub fn sky_cone_select(
    input: impl AsRef<Path>,
    ra: f64,
    dec: f64,
    radius: f64,
    output: impl AsRef<Path>,
) -> Result<SelectionStats> {
    ConeSelector::new(ConeQuery::new(ra, dec, radius)).select_file(input, output)
}
