use crate::core::models::{Distribution, GradeSummary, StudentRecord};
use crate::core::types::SortField;
use crate::errors::{Error, Result};

/// Insertion-ordered collection of student records with unique IDs.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from pre-parsed records, enforcing ID uniqueness.
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.add(record)?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Append a record. The roster is unchanged on any failure.
    pub fn add(&mut self, record: StudentRecord) -> Result<&StudentRecord> {
        if self.contains_id(record.id) {
            return Err(Error::DuplicateId { id: record.id });
        }
        self.records.push(record);
        Ok(self.records.last().expect("record missing after push"))
    }

    /// A new roster ordered ascending by `field`. Ties keep insertion order.
    pub fn sorted(&self, field: SortField) -> Roster {
        let mut records = self.records.clone();
        match field {
            SortField::Id => records.sort_by_key(|r| r.id),
            SortField::Name => records.sort_by(|a, b| a.name.cmp(&b.name)),
            SortField::Grade => {
                records.sort_by(|a, b| a.grade.value().total_cmp(&b.grade.value()));
            }
        }
        Roster { records }
    }

    /// Max, min, and mean grade; `None` when there is no data to summarize.
    pub fn summary(&self) -> Option<GradeSummary> {
        let first = self.records.first()?;
        let mut max = first.grade.value();
        let mut min = max;
        let mut sum = 0.0f32;
        for record in &self.records {
            let g = record.grade.value();
            max = max.max(g);
            min = min.min(g);
            sum += g;
        }
        Some(GradeSummary {
            max,
            min,
            mean: sum / self.records.len() as f32,
        })
    }

    pub fn distribution(&self) -> Distribution {
        let pass = self.records.iter().filter(|r| r.grade.is_passing()).count();
        Distribution {
            pass,
            fail: self.records.len() - pass,
        }
    }

    /// Bucket counts over [0, 100]; a grade of exactly 100 lands in the last
    /// bucket. `bins` must be non-zero.
    pub fn histogram(&self, bins: usize) -> Vec<usize> {
        let mut counts = vec![0usize; bins];
        if bins == 0 {
            return counts;
        }
        for record in &self.records {
            let idx = (record.grade.value() / 100.0 * bins as f32) as usize;
            counts[idx.min(bins - 1)] += 1;
        }
        counts
    }
}
