use serde::Serialize;
use std::fmt;

/// Line counts from one cone selection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    pub lines_read: u64,
    /// Non-object lines, all of which are written.
    pub passthrough: u64,
    /// Object lines inside the cone.
    pub kept: u64,
    /// Object lines outside the cone.
    pub dropped: u64,
    /// Object lines skipped because they could not be parsed.
    pub malformed: u64,
}

impl SelectionStats {
    pub fn lines_written(&self) -> u64 {
        self.passthrough + self.kept
    }

    pub fn objects_seen(&self) -> u64 {
        self.kept + self.dropped + self.malformed
    }
}

impl fmt::Display for SelectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines read: {}", self.lines_read)?;
        writeln!(f, "Lines written: {}", self.lines_written())?;
        writeln!(f, "Passthrough lines: {}", self.passthrough)?;
        writeln!(f, "Objects kept: {}", self.kept)?;
        writeln!(f, "Objects dropped: {}", self.dropped)?;
        write!(f, "Malformed objects skipped: {}", self.malformed)
    }
}
