use crate::errors::{Error, Result};
use std::fmt;

/// Grades at or above this value count as a pass.
pub const PASS_MARK: f32 = 50.0;

/// A grade on the closed 0-100 scale. Construction enforces the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade(f32);

impl Grade {
    pub fn new(value: f32) -> Result<Self> {
        if !(0.0..=100.0).contains(&value) {
            return Err(Error::GradeOutOfRange { grade: value });
        }
        Ok(Self(value))
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed.parse::<f32>().map_err(|_| {
            Error::Parse(format!(
                "Invalid grade: '{trimmed}'. Expected a number between 0 and 100."
            ))
        })?;
        Self::new(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_passing(self) -> bool {
        self.0 >= PASS_MARK
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names must be non-empty and free of the flat-file delimiter.
pub fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::parse("Name must not be empty."));
    }
    if name.contains(',') {
        return Err(Error::parse(format!(
            "Name '{name}' must not contain a comma."
        )));
    }
    Ok(name)
}

// ==============
// StudentRecord
// ==============

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub grade: Grade,
}

impl StudentRecord {
    pub fn new(id: i32, name: impl Into<String>, grade: Grade) -> Result<Self> {
        let raw = name.into();
        let name = validate_name(&raw)?.to_string();
        Ok(Self { id, name, grade })
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(id={}, name='{}', grade={})",
            self.id, self.name, self.grade
        )
    }
}

/// Aggregate grade statistics for a non-empty roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSummary {
    pub max: f32,
    pub min: f32,
    pub mean: f32,
}

/// Pass/fail bucket counts at [`PASS_MARK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distribution {
    pub pass: usize,
    pub fail: usize,
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.pass + self.fail
    }

    /// Share of passing records as a percentage, 0.0 on an empty distribution.
    pub fn pass_pct(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.pass as f32 / self.total() as f32 * 100.0
        }
    }

    pub fn fail_pct(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.fail as f32 / self.total() as f32 * 100.0
        }
    }
}
