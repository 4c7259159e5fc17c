use std::collections::BTreeMap;

/// Course code to roster bookkeeping. Rosters keep insertion order and may
/// hold the same student more than once.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentManager {
    rosters: BTreeMap<String, Vec<String>>,
}

impl EnrollmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll_student(&mut self, course_code: impl Into<String>, student_id: impl Into<String>) {
        let course_code = course_code.into();
        let student_id = student_id.into();
        tracing::debug!("Enrolling {} in {}", student_id, course_code);
        self.rosters.entry(course_code).or_default().push(student_id);
    }

    /// Removes every occurrence of the student. Unknown courses or students are ignored.
    pub fn drop_student(&mut self, course_code: &str, student_id: &str) {
        if let Some(roster) = self.rosters.get_mut(course_code) {
            roster.retain(|enrolled| enrolled != student_id);
        }
    }

    pub fn enrollment_count(&self, course_code: &str) -> usize {
        self.roster(course_code).len()
    }

    pub fn roster(&self, course_code: &str) -> &[String] {
        self.rosters
            .get(course_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.rosters.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_course_has_no_enrollments() {
        let manager = EnrollmentManager::new();
        assert_eq!(manager.enrollment_count("CS101"), 0);
        assert!(manager.roster("CS101").is_empty());
        assert_eq!(manager.courses().count(), 0);
    }

    #[test]
    fn test_duplicate_enrollment_is_kept() {
        let mut manager = EnrollmentManager::new();
        manager.enroll_student("C1", "A");
        manager.enroll_student("C1", "A");
        assert_eq!(manager.enrollment_count("C1"), 2);
    }

    #[test]
    fn test_drop_removes_every_occurrence() {
        let mut manager = EnrollmentManager::new();
        manager.enroll_student("C1", "A");
        manager.enroll_student("C1", "B");
        manager.enroll_student("C1", "A");
        manager.drop_student("C1", "A");
        assert_eq!(manager.roster("C1"), ["B".to_string()]);

        manager.drop_student("C1", "B");
        assert_eq!(manager.enrollment_count("C1"), 0);
    }

    #[test]
    fn test_drop_on_missing_course_or_student_is_noop() {
        let mut manager = EnrollmentManager::new();
        manager.drop_student("C9", "A");
        manager.enroll_student("C1", "A");
        manager.drop_student("C1", "Z");
        assert_eq!(manager.enrollment_count("C1"), 1);
        assert_eq!(manager.courses().collect::<Vec<_>>(), vec!["C1"]);
    }

    #[test]
    fn test_roster_preserves_insertion_order() {
        let mut manager = EnrollmentManager::new();
        for id in ["Z", "A", "M"] {
            manager.enroll_student("C1", id);
        }
        assert_eq!(manager.roster("C1"), ["Z", "A", "M"].map(String::from));
    }
}
