use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use std::collections::BTreeMap;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;
pub const DEFAULT_PASS_MARK: f64 = 40.0;

/// Per-student score table. One grade per student; iteration follows student id order.
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    grades: BTreeMap<String, f64>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the student's grade. Out-of-range grades leave the book untouched.
    pub fn add_grade(&mut self, student_id: impl Into<String>, grade: f64) -> Result<()> {
        validate_range(
            "grade",
            grade,
            MIN_GRADE,
            MAX_GRADE,
            "Grade must be from 0 to 100.",
        )?;
        // -0.0 is in range; store it as 0.0
        let grade = grade + 0.0;
        let student_id = student_id.into();
        tracing::debug!("Recording grade {} for {}", grade, student_id);
        self.grades.insert(student_id, grade);
        Ok(())
    }

    pub fn grade(&self, student_id: &str) -> Option<f64> {
        self.grades.get(student_id).copied()
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn calculate_average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().sum();
        total / self.grades.len() as f64
    }

    /// Returns 0 for an empty book, which is indistinguishable from a book whose best grade is 0.
    pub fn highest_grade(&self) -> f64 {
        self.grades.values().copied().fold(0.0, f64::max)
    }

    pub fn failing_students(&self, pass_mark: f64) -> Vec<String> {
        self.grades
            .iter()
            .filter(|(_, grade)| **grade < pass_mark)
            .map(|(student_id, _)| student_id.clone())
            .collect()
    }

    pub fn failing_students_default(&self) -> Vec<String> {
        self.failing_students(DEFAULT_PASS_MARK)
    }
}
