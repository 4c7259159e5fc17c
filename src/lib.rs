pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Scenario;
pub use core::{enrollment::EnrollmentManager, gradebook::GradeBook, showcase::Showcase};
pub use domain::model::{Course, DemoReport, Department};
pub use domain::person::{Professor, Profile, Student};
pub use domain::ports::Person;
pub use utils::error::{RecordsError, Result};
