pub mod local_input;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::{Day, Part};
use crate::utils::error::Result;

pub(crate) fn days_from_numbers(numbers: &[u8]) -> Result<Vec<Day>> {
    let mut days = numbers
        .iter()
        .map(|&n| Day::new(n))
        .collect::<Result<Vec<_>>>()?;
    days.sort();
    days.dedup();
    Ok(days)
}

pub(crate) fn parts_from_numbers(numbers: &[u8]) -> Result<Vec<Part>> {
    let mut parts = numbers
        .iter()
        .map(|&n| Part::try_from(n))
        .collect::<Result<Vec<_>>>()?;
    parts.sort();
    parts.dedup();
    Ok(parts)
}

#[cfg(feature = "cli")]
mod cli {
    use super::local_input::{DEFAULT_INPUT_PATTERN, DEFAULT_MAX_INPUT_BYTES};
    use crate::domain::model::{Day, Part, ReportFormat};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "advent-2022")]
    #[command(about = "Advent of Code 2022 puzzle solutions")]
    pub struct CliConfig {
        /// Days to solve, comma separated. Every implemented day when omitted.
        #[arg(short, long, value_delimiter = ',')]
        pub days: Vec<u8>,

        /// Solve only this part (1 or 2).
        #[arg(short, long)]
        pub part: Option<u8>,

        #[arg(long, default_value = "./input")]
        pub input_dir: String,

        /// Input file name; `{day}` is replaced by the day number.
        #[arg(long, default_value = DEFAULT_INPUT_PATTERN)]
        pub input_pattern: String,

        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
        pub max_input_bytes: u64,

        /// Number of days solved concurrently.
        #[arg(long, default_value = "4")]
        pub parallelism: usize,

        /// Stop at the first failing day instead of reporting it.
        #[arg(long)]
        pub fail_fast: bool,

        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        pub format: ReportFormat,

        /// Write the report to this file instead of stdout.
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_dir(&self) -> &str {
            &self.input_dir
        }

        fn input_pattern(&self) -> &str {
            &self.input_pattern
        }

        fn max_input_bytes(&self) -> u64 {
            self.max_input_bytes
        }

        fn days(&self) -> Result<Vec<Day>> {
            super::days_from_numbers(&self.days)
        }

        fn parts(&self) -> Result<Vec<Part>> {
            super::parts_from_numbers(self.part.as_slice())
        }

        fn parallelism(&self) -> usize {
            self.parallelism
        }

        fn fail_fast(&self) -> bool {
            self.fail_fast
        }

        fn report_format(&self) -> ReportFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("input_dir", &self.input_dir)?;
            validation::validate_day_pattern("input_pattern", &self.input_pattern)?;
            validation::validate_positive_number("parallelism", self.parallelism, 1)?;
            validation::validate_range("max_input_bytes", self.max_input_bytes, 1, u64::MAX)?;
            for &day in &self.days {
                validation::validate_range("days", day, Day::FIRST, Day::LAST)?;
            }
            if let Some(part) = self.part {
                validation::validate_range("part", part, 1, 2)?;
            }
            if let Some(output) = &self.output {
                validation::validate_path("output", output)?;
            }
            Ok(())
        }
    }
}
