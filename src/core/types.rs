use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString, FromRepr};

/// Shown when menu input is not a number at all.
pub const INVALID_MENU_NUMBER: &str = "INVALID MENU OPTION -- please enter a number.";
/// Shown when menu input is a number outside the listed options.
pub const INVALID_MENU_RANGE: &str = "INVALID MENU OPTION -- please enter a valid number.";

/// Parse a digits-only menu answer into an enum via its discriminant.
fn numeric_choice<T>(s: &str, from_repr: impl Fn(u8) -> Option<T>) -> Result<T> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::parse(INVALID_MENU_NUMBER));
    }
    trimmed
        .parse::<u8>()
        .ok()
        .and_then(from_repr)
        .ok_or_else(|| Error::parse(INVALID_MENU_RANGE))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    SaveLoad = 1,
    AddStudent = 2,
    Analyse = 3,
    Sort = 4,
    PlotGrades = 5,
    PlotDistribution = 6,
    PlotHistogram = 7,
    Exit = 8,
}

impl MenuChoice {
    pub fn try_from_input(s: &str) -> Result<Self> {
        numeric_choice(s, Self::from_repr)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::SaveLoad => "Save/Load Student Data",
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::Analyse => "Analyse Data",
            MenuChoice::Sort => "Sort Students",
            MenuChoice::PlotGrades => "Plot Grades",
            MenuChoice::PlotDistribution => "Plot Grade Distribution",
            MenuChoice::PlotHistogram => "Plot Grade Histogram",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, FromRepr)]
#[repr(u8)]
pub enum SaveLoadChoice {
    Save = 1,
    Load = 2,
}

impl SaveLoadChoice {
    pub fn try_from_input(s: &str) -> Result<Self> {
        numeric_choice(s, Self::from_repr)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            SaveLoadChoice::Save => "Save Data",
            SaveLoadChoice::Load => "Load Data",
        }
    }
}

/// Roster columns a sort can target, ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive, FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum SortField {
    #[strum(serialize = "id", to_string = "ID")]
    Id = 1,
    #[strum(serialize = "name", to_string = "Name")]
    Name = 2,
    #[strum(serialize = "grade", to_string = "Grade")]
    Grade = 3,
}

impl SortField {
    pub fn try_from_input(s: &str) -> Result<Self> {
        numeric_choice(s, Self::from_repr)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parse a textual column label; an unknown column is a parse error so the
    /// caller can keep its ordering unchanged and warn.
    pub fn try_from_label(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Column '{}' not found. Valid columns: {}",
                s.trim(),
                valid_csv::<SortField>()
            ))
        })
    }
}
