use crate::utils::error::Result;
use crate::utils::validation::validate_at_least;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    code: String,
    title: String,
    description: String,
    credits: i32,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        credits: i32,
        description: impl Into<String>,
    ) -> Result<Self> {
        check_credits(credits)?;
        Ok(Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            credits,
        })
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<()> {
        check_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn display(&self) -> String {
        format!(
            "Course Info: {} - {} ({} credits)\nAbout Course: {}",
            self.code, self.title, self.credits, self.description
        )
    }
}

fn check_credits(credits: i32) -> Result<()> {
    validate_at_least(
        "credits",
        credits,
        1,
        "Credit hours must be greater than zero.",
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    name: String,
    location: String,
    budget: f64,
}

impl Department {
    pub fn new(name: impl Into<String>, location: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            budget,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }
}

/// Summary of one demo run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoReport {
    pub courses: Vec<String>,
    pub departments: Vec<String>,
    pub average_grade: f64,
    pub highest_grade: f64,
    pub pass_mark: f64,
    pub failing_students: Vec<String>,
    pub enrollment_counts: BTreeMap<String, usize>,
    pub payments: Vec<PaymentLine>,
}

impl DemoReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentLine {
    pub id: String,
    pub role: String,
    pub amount: f64,
}
