use crate::core::models::{Grade, StudentRecord};
use crate::core::roster::Roster;
use crate::errors::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Header row of the flat data file.
pub const CSV_HEADER: &str = "ID,Name,Grade";

/// Serialize the roster as header + one row per record, overwriting `path`.
pub fn save_roster(roster: &Roster, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut contents = String::with_capacity(CSV_HEADER.len() + roster.len() * 16);
    contents.push_str(CSV_HEADER);
    contents.push('\n');
    for record in roster.records() {
        contents.push_str(&format!(
            "{},{},{}\n",
            record.id, record.name, record.grade
        ));
    }

    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Read a roster back from the flat file. A missing file is not fatal:
/// `Ok(None)` tells the caller to start over with an empty roster. Malformed
/// rows and any other I/O failure propagate.
pub fn load_roster(path: &Path) -> Result<Option<Roster>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    parse_roster(&contents).map(Some)
}

fn parse_roster(contents: &str) -> Result<Roster> {
    let mut lines = contents.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::parse(format!("Data file is empty; expected '{CSV_HEADER}'.")))?;
    if !header.trim().eq_ignore_ascii_case(CSV_HEADER) {
        return Err(Error::Parse(format!(
            "Unexpected header '{}'; expected '{CSV_HEADER}'.",
            header.trim()
        )));
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record =
            parse_row(line).map_err(|err| Error::Parse(format!("Row {}: {err}", idx + 2)))?;
        records.push(record);
    }
    Roster::from_records(records)
}

fn parse_row(line: &str) -> Result<StudentRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::Parse(format!(
            "expected 3 columns, found {}",
            fields.len()
        )));
    }
    let id = fields[0].trim().parse::<i32>().map_err(|_| {
        Error::Parse(format!("invalid student ID '{}'", fields[0].trim()))
    })?;
    let grade = Grade::try_from_str(fields[2])?;
    StudentRecord::new(id, fields[1], grade)
}
