use crate::config::scenario::{PersonEntry, Scenario};
use crate::core::enrollment::EnrollmentManager;
use crate::core::gradebook::GradeBook;
use crate::domain::model::{Course, DemoReport, Department, PaymentLine};
use crate::domain::person::{Professor, Profile, Student};
use crate::domain::ports::Person;
use crate::utils::error::Result;
use std::io::Write;

/// Drives one demonstration run over a scenario.
///
/// Each step writes its part of the transcript as it goes, so when a step
/// fails the lines of earlier steps have already been written and the
/// remaining steps are skipped.
pub struct Showcase {
    scenario: Scenario,
}

impl Showcase {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoReport> {
        tracing::info!("Starting records demo");

        let mut report = DemoReport {
            pass_mark: self.scenario.pass_mark(),
            ..DemoReport::default()
        };

        self.show_courses(out, &mut report)?;
        self.register_departments(&mut report);
        self.show_grades(out, &mut report)?;
        self.show_enrollments(out, &mut report)?;
        self.show_people(out, &mut report)?;

        tracing::info!("✅ Records demo completed");
        Ok(report)
    }

    fn show_courses<W: Write>(&self, out: &mut W, report: &mut DemoReport) -> Result<()> {
        for entry in &self.scenario.courses {
            let course = Course::new(&entry.code, &entry.title, entry.credits, &entry.description)?;
            writeln!(out, "{}", course.display())?;
            report.courses.push(course.code().to_string());
        }
        Ok(())
    }

    fn register_departments(&self, report: &mut DemoReport) {
        for entry in &self.scenario.departments {
            let department = Department::new(&entry.name, &entry.location, entry.budget);
            tracing::debug!(
                "Registered department {} at {} (budget {})",
                department.name(),
                department.location(),
                department.budget()
            );
            report.departments.push(department.name().to_string());
        }
    }

    fn show_grades<W: Write>(&self, out: &mut W, report: &mut DemoReport) -> Result<()> {
        let mut book = GradeBook::new();
        for entry in &self.scenario.grades {
            book.add_grade(&entry.student_id, entry.grade)?;
        }
        tracing::debug!("Grade book holds {} students", book.len());

        report.average_grade = book.calculate_average_grade();
        report.highest_grade = book.highest_grade();
        report.failing_students = book.failing_students(report.pass_mark);

        writeln!(out, "Average Grade: {}", report.average_grade)?;
        writeln!(out, "Highest Grade: {}", report.highest_grade)?;
        writeln!(
            out,
            "Failing Students (below {}): {}",
            report.pass_mark,
            report.failing_students.join(", ")
        )?;
        Ok(())
    }

    fn show_enrollments<W: Write>(&self, out: &mut W, report: &mut DemoReport) -> Result<()> {
        let mut manager = EnrollmentManager::new();
        for entry in &self.scenario.enrollments {
            manager.enroll_student(&entry.course, &entry.student_id);
        }

        for course_code in &self.scenario.report.enrollment_queries {
            let count = manager.enrollment_count(course_code);
            writeln!(out, "Enrollment in {}: {}", course_code, count)?;
            report.enrollment_counts.insert(course_code.clone(), count);
        }
        Ok(())
    }

    fn show_people<W: Write>(&self, out: &mut W, report: &mut DemoReport) -> Result<()> {
        writeln!(out, "------ Running Polymorphism Test ------")?;

        let people = build_people(&self.scenario.people)?;
        for person in &people {
            let payment = person.calculate_payment();
            writeln!(out, "{}", person.display_details())?;
            writeln!(out, "Calculated Payment: ${}\n", payment)?;

            report.payments.push(PaymentLine {
                id: person.profile().id().to_string(),
                role: person.role().to_string(),
                amount: payment,
            });
        }
        Ok(())
    }
}

/// Builds validated people behind base-typed handles, stopping at the first invalid entry.
pub fn build_people(entries: &[PersonEntry]) -> Result<Vec<Box<dyn Person>>> {
    entries
        .iter()
        .map(|entry| -> Result<Box<dyn Person>> {
            match entry {
                PersonEntry::Student {
                    identity,
                    program,
                    enroll_date,
                    gpa,
                } => {
                    let profile =
                        Profile::new(&identity.name, identity.age, &identity.id, &identity.contact)?;
                    Ok(Box::new(Student::new(profile, program, enroll_date, *gpa)?))
                }
                PersonEntry::Professor {
                    identity,
                    department,
                    specialization,
                    hire_date,
                } => {
                    let profile =
                        Profile::new(&identity.name, identity.age, &identity.id, &identity.contact)?;
                    Ok(Box::new(Professor::new(
                        profile,
                        department,
                        specialization,
                        hire_date,
                    )))
                }
            }
        })
        .collect()
}
