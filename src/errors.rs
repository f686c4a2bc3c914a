use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for roster maintenance.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input & data parsing ----------------------------------------------
    /// Unparsable user input, malformed data rows, invalid config values.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Roster invariants --------------------------------------------------
    /// Raised when inserting a record whose ID is already in the roster.
    #[error("Error - ID {id} is taken.")]
    DuplicateId { id: i32 },

    /// Raised when a grade falls outside the 0-100 scale.
    #[error("Error - Grade value {grade} out of bounds.")]
    GradeOutOfRange { grade: f32 },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
}
