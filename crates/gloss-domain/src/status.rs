//! Status module - processing outcome recorded in a note's header

/// Processing status of a note
///
/// The pipeline only ever writes two values:
/// - Active: the model response parsed cleanly
/// - Error: the fallback record was used
///
/// Headers written by older tooling may carry other strings; those are
/// overwritten on the next run and never round-trip through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteStatus {
    /// Metadata was extracted from a well-formed model response
    Active,

    /// Model output could not be parsed; the fallback record was written
    Error,
}

impl NoteStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Active => "active",
            NoteStatus::Error => "error",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(NoteStatus::Active),
            "error" => Some(NoteStatus::Error),
            _ => None,
        }
    }
}

impl std::str::FromStr for NoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
