use crate::config::scenario::Scenario;
use crate::core::gradebook::{MAX_GRADE, MIN_GRADE};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "campus-records")]
#[command(about = "Academic records demo: people, courses, grades and enrollments")]
pub struct CliConfig {
    /// Path to a TOML scenario file; the built-in sample data is used when omitted
    #[arg(long)]
    pub scenario: Option<String>,

    /// Override the pass mark used for the failing-students list
    #[arg(long)]
    pub pass_mark: Option<f64>,

    /// Print the run summary as JSON after the transcript
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the selected scenario and applies command-line overrides.
    pub fn load_scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => {
                tracing::info!("📁 Loading scenario from: {}", path);
                Scenario::from_file(path)?
            }
            None => {
                tracing::debug!("Using built-in scenario");
                Scenario::builtin()
            }
        };

        if let Some(pass_mark) = self.pass_mark {
            tracing::info!("🔧 Pass mark overridden to: {}", pass_mark);
            scenario.report.pass_mark = pass_mark;
        }

        scenario.validate()?;
        Ok(scenario)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;
        }
        if let Some(pass_mark) = self.pass_mark {
            validate_range(
                "pass_mark",
                pass_mark,
                MIN_GRADE,
                MAX_GRADE,
                "Pass mark must be from 0 to 100.",
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "campus-records",
            "--scenario",
            "demo.toml",
            "--pass-mark",
            "55",
            "--json",
        ]);
        assert_eq!(config.scenario.as_deref(), Some("demo.toml"));
        assert_eq!(config.pass_mark, Some(55.0));
        assert!(config.json);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pass_mark_out_of_range() {
        let config = CliConfig::parse_from(["campus-records", "--pass-mark", "101"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_builtin_with_override() {
        let config = CliConfig::parse_from(["campus-records", "--pass-mark", "50"]);
        let scenario = config.load_scenario().unwrap();
        assert_eq!(scenario.pass_mark(), 50.0);
        assert_eq!(scenario.courses[0].code, "xyz");
    }
}
