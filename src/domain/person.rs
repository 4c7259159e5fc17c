use crate::domain::ports::Person;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range};

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 120;
pub const MIN_GPA: f64 = 0.0;
pub const MAX_GPA: f64 = 4.0;

pub const STUDENT_STIPEND: f64 = 1000.0;
pub const PROFESSOR_SALARY: f64 = 5000.0;

/// Identity fields common to every person. Name and age are re-validated on
/// every assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    full_name: String,
    age: i32,
    id: String,
    contact: String,
}

impl Profile {
    pub fn new(
        full_name: impl Into<String>,
        age: i32,
        id: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<Self> {
        let full_name = full_name.into();
        check_name(&full_name)?;
        check_age(age)?;
        Ok(Self {
            full_name,
            age,
            id: id.into(),
            contact: contact.into(),
        })
    }

    pub fn set_name(&mut self, full_name: impl Into<String>) -> Result<()> {
        let full_name = full_name.into();
        check_name(&full_name)?;
        self.full_name = full_name;
        Ok(())
    }

    pub fn set_age(&mut self, age: i32) -> Result<()> {
        check_age(age)?;
        self.age = age;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.full_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn summary(&self) -> String {
        format!(
            "Full Name: {}, Age: {}, ID: {}, Contact: {}",
            self.full_name, self.age, self.id, self.contact
        )
    }
}

impl Person for Profile {
    fn profile(&self) -> &Profile {
        self
    }
}

fn check_name(full_name: &str) -> Result<()> {
    validate_non_empty("full_name", full_name, "Full name cannot be left blank.")
}

fn check_age(age: i32) -> Result<()> {
    validate_range(
        "age",
        age,
        MIN_AGE,
        MAX_AGE,
        "Enter a valid age between 1 and 120.",
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    profile: Profile,
    program: String,
    enroll_date: String,
    gpa: f64,
}

impl Student {
    pub fn new(
        profile: Profile,
        program: impl Into<String>,
        enroll_date: impl Into<String>,
        gpa: f64,
    ) -> Result<Self> {
        check_gpa(gpa)?;
        Ok(Self {
            profile,
            program: program.into(),
            enroll_date: enroll_date.into(),
            gpa,
        })
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn set_gpa(&mut self, gpa: f64) -> Result<()> {
        check_gpa(gpa)?;
        self.gpa = gpa;
        Ok(())
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn enroll_date(&self) -> &str {
        &self.enroll_date
    }
}

impl Person for Student {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> &'static str {
        "student"
    }

    fn display_details(&self) -> String {
        format!(
            "{}\nProgram Enrolled: {}, GPA: {}, Enrollment Date: {}",
            self.profile.summary(),
            self.program,
            self.gpa,
            self.enroll_date
        )
    }

    fn calculate_payment(&self) -> f64 {
        STUDENT_STIPEND
    }
}

fn check_gpa(gpa: f64) -> Result<()> {
    validate_range(
        "gpa",
        gpa,
        MIN_GPA,
        MAX_GPA,
        "GPA should lie between 0.0 and 4.0.",
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Professor {
    profile: Profile,
    department: String,
    specialization: String,
    hire_date: String,
}

impl Professor {
    pub fn new(
        profile: Profile,
        department: impl Into<String>,
        specialization: impl Into<String>,
        hire_date: impl Into<String>,
    ) -> Self {
        Self {
            profile,
            department: department.into(),
            specialization: specialization.into(),
            hire_date: hire_date.into(),
        }
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn hire_date(&self) -> &str {
        &self.hire_date
    }
}

impl Person for Professor {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn role(&self) -> &'static str {
        "professor"
    }

    fn display_details(&self) -> String {
        format!(
            "{}\nDepartment: {}, Specialization: {}, Date of Hire: {}",
            self.profile.summary(),
            self.department,
            self.specialization,
            self.hire_date
        )
    }

    fn calculate_payment(&self) -> f64 {
        PROFESSOR_SALARY
    }
}
