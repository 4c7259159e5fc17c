use crate::core::gradebook::{DEFAULT_PASS_MARK, MAX_GRADE, MIN_GRADE};
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_non_empty, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample data a demo run operates on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub departments: Vec<DepartmentEntry>,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentEntry>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub title: String,
    pub credits: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub student_id: String,
    pub grade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentEntry {
    pub course: String,
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityEntry {
    pub name: String,
    pub age: i32,
    pub id: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PersonEntry {
    Student {
        #[serde(flatten)]
        identity: IdentityEntry,
        program: String,
        enroll_date: String,
        gpa: f64,
    },
    Professor {
        #[serde(flatten)]
        identity: IdentityEntry,
        department: String,
        specialization: String,
        hire_date: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_pass_mark")]
    pub pass_mark: f64,
    /// Courses whose enrollment count is printed after enrollments are applied.
    #[serde(default)]
    pub enrollment_queries: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            pass_mark: DEFAULT_PASS_MARK,
            enrollment_queries: Vec::new(),
        }
    }
}

fn default_pass_mark() -> f64 {
    DEFAULT_PASS_MARK
}

impl Scenario {
    /// The sample data the demo has always shipped with.
    pub fn builtin() -> Self {
        Self {
            courses: vec![CourseEntry {
                code: "xyz".to_string(),
                title: " CS".to_string(),
                credits: 3,
                description: "gp and cs hour".to_string(),
            }],
            departments: Vec::new(),
            grades: vec![
                GradeEntry {
                    student_id: "S01".to_string(),
                    grade: 85.0,
                },
                GradeEntry {
                    student_id: "S02".to_string(),
                    grade: 45.0,
                },
            ],
            enrollments: vec![EnrollmentEntry {
                course: "000".to_string(),
                student_id: "0000".to_string(),
            }],
            people: vec![
                PersonEntry::Student {
                    identity: IdentityEntry {
                        name: "Daksh".to_string(),
                        age: 20,
                        id: "S01".to_string(),
                        contact: "9732324".to_string(),
                    },
                    program: "CS".to_string(),
                    enroll_date: "2024-25".to_string(),
                    gpa: 4.0,
                },
                PersonEntry::Professor {
                    identity: IdentityEntry {
                        name: "ABC".to_string(),
                        age: 45,
                        id: "P01".to_string(),
                        contact: "8654758".to_string(),
                    },
                    department: "FOCP".to_string(),
                    specialization: "c++".to_string(),
                    hire_date: "2020-2025".to_string(),
                },
            ],
            report: ReportSettings {
                pass_mark: DEFAULT_PASS_MARK,
                enrollment_queries: vec!["CS101".to_string()],
            },
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| RecordsError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| RecordsError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn pass_mark(&self) -> f64 {
        self.report.pass_mark
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_range(
            "report.pass_mark",
            self.report.pass_mark,
            MIN_GRADE,
            MAX_GRADE,
            "Pass mark must be from 0 to 100.",
        )?;

        for course in &self.courses {
            validate_non_empty("courses.code", &course.code, "Course code cannot be empty.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[[courses]]
code = "CS101"
title = "Programming"
credits = 4
description = "Intro course"

[[departments]]
name = "Computing"
location = "Block B"
budget = 25000.0

[[grades]]
student_id = "S1"
grade = 85.0

[[grades]]
student_id = "S2"
grade = 30.0

[[enrollments]]
course = "CS101"
student_id = "S1"

[[people]]
kind = "student"
name = "Asha"
age = 19
id = "S1"
contact = "555-0101"
program = "CS"
enroll_date = "2025-26"
gpa = 3.6

[[people]]
kind = "professor"
name = "Rao"
age = 52
id = "P7"
department = "Computing"
specialization = "Compilers"
hire_date = "2011"

[report]
pass_mark = 50.0
enrollment_queries = ["CS101", "MA201"]
"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_toml_str(SAMPLE).unwrap();

        assert_eq!(scenario.courses.len(), 1);
        assert_eq!(scenario.courses[0].credits, 4);
        assert_eq!(scenario.departments[0].name, "Computing");
        assert_eq!(scenario.grades.len(), 2);
        assert_eq!(scenario.pass_mark(), 50.0);
        assert_eq!(scenario.report.enrollment_queries, vec!["CS101", "MA201"]);

        match &scenario.people[1] {
            PersonEntry::Professor {
                identity,
                specialization,
                ..
            } => {
                assert_eq!(identity.name, "Rao");
                assert_eq!(identity.contact, "");
                assert_eq!(specialization, "Compilers");
            }
            other => panic!("expected professor, got {:?}", other),
        }
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert!(scenario.courses.is_empty());
        assert_eq!(scenario.pass_mark(), DEFAULT_PASS_MARK);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAMPUS_TEST_COURSE_TITLE", "Databases");

        let content = r#"
[[courses]]
code = "DB1"
title = "${CAMPUS_TEST_COURSE_TITLE}"
credits = 3
description = "${CAMPUS_TEST_UNSET_VARIABLE}"
"#;

        let scenario = Scenario::from_toml_str(content).unwrap();
        assert_eq!(scenario.courses[0].title, "Databases");
        assert_eq!(
            scenario.courses[0].description,
            "${CAMPUS_TEST_UNSET_VARIABLE}"
        );

        std::env::remove_var("CAMPUS_TEST_COURSE_TITLE");
    }

    #[test]
    fn test_unknown_person_kind_is_config_error() {
        let content = r#"
[[people]]
kind = "dean"
name = "X"
age = 60
id = "D1"
"#;
        let err = Scenario::from_toml_str(content).unwrap_err();
        assert!(matches!(err, RecordsError::ConfigError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_pass_mark_and_blank_code() {
        let mut scenario = Scenario::builtin();
        scenario.report.pass_mark = 140.0;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::builtin();
        scenario.courses[0].code.clear();
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_domain_values_are_not_checked_at_load() {
        let content = r#"
[[grades]]
student_id = "S1"
grade = 130.0
"#;
        let scenario = Scenario::from_toml_str(content).unwrap();
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_builtin_scenario() {
        let scenario = Scenario::builtin();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.courses[0].code, "xyz");
        assert_eq!(scenario.report.enrollment_queries, vec!["CS101"]);
        assert_eq!(scenario.people.len(), 2);
    }

    #[test]
    fn test_scenario_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let scenario = Scenario::from_file(temp_file.path()).unwrap();
        assert_eq!(scenario.courses[0].code, "CS101");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Scenario::from_file("/nonexistent/campus/scenario.toml").unwrap_err();
        assert!(matches!(err, RecordsError::IoError(_)));
    }
}
