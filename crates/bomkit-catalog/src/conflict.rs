//! Version conflict reporting.

use std::fmt;

/// All version conflicts met while accumulating one catalog.
#[derive(Debug, Default, Clone)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// A version key that was offered a second, different version.
/// The first version is kept; the rejected one is only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    pub key: String,
    pub kept: String,
    pub rejected: String,
    /// `group:artifact` whose declaration carried the rejected version.
    pub source: String,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: kept {}, ignored {} from {}",
            self.key, self.kept, self.rejected, self.source
        )
    }
}
