use super::local_input::{DEFAULT_INPUT_PATTERN, DEFAULT_MAX_INPUT_BYTES};
use crate::domain::model::{Day, Part, ReportFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AocError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PARALLELISM: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub run: RunConfig,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub dir: String,
    pub pattern: String,
    pub max_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: "./input".to_string(),
            pattern: DEFAULT_INPUT_PATTERN.to_string(),
            max_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub days: Vec<u8>,
    pub parts: Vec<u8>,
    pub parallelism: usize,
    pub fail_fast: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            days: Vec::new(),
            parts: Vec::new(),
            parallelism: DEFAULT_PARALLELISM,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
    #[serde(default)]
    pub json_logs: bool,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AocError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AocError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable. Unset variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AocError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.json_logs).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dir(&self) -> &str {
        &self.input.dir
    }

    fn input_pattern(&self) -> &str {
        &self.input.pattern
    }

    fn max_input_bytes(&self) -> u64 {
        self.input.max_bytes
    }

    fn days(&self) -> Result<Vec<Day>> {
        super::days_from_numbers(&self.run.days)
    }

    fn parts(&self) -> Result<Vec<Part>> {
        super::parts_from_numbers(&self.run.parts)
    }

    fn parallelism(&self) -> usize {
        self.run.parallelism
    }

    fn fail_fast(&self) -> bool {
        self.run.fail_fast
    }

    fn report_format(&self) -> ReportFormat {
        self.report.format
    }

    fn output_path(&self) -> Option<&str> {
        self.report.output_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.dir", &self.input.dir)?;
        validation::validate_day_pattern("input.pattern", &self.input.pattern)?;
        validation::validate_range("input.max_bytes", self.input.max_bytes, 1, u64::MAX)?;
        validation::validate_positive_number("run.parallelism", self.run.parallelism, 1)?;

        for &day in &self.run.days {
            validation::validate_range("run.days", day, Day::FIRST, Day::LAST)?;
        }
        for &part in &self.run.parts {
            validation::validate_range("run.parts", part, 1, 2)?;
        }
        if let Some(output) = &self.report.output_path {
            validation::validate_path("report.output_path", output)?;
        }
        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(AocError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
dir = "./puzzles"
pattern = "day{day}.txt"
max_bytes = 1024

[run]
days = [3, 1]
parts = [2]
parallelism = 2
fail_fast = true

[report]
format = "json"
output_path = "./out/report.json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_dir(), "./puzzles");
        assert_eq!(config.input_pattern(), "day{day}.txt");
        assert_eq!(config.max_input_bytes(), 1024);
        let days: Vec<u8> = config.days().unwrap().into_iter().map(Day::number).collect();
        assert_eq!(days, vec![1, 3]);
        assert_eq!(config.parts().unwrap(), vec![Part::Two]);
        assert_eq!(config.parallelism(), 2);
        assert!(config.fail_fast());
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.output_path(), Some("./out/report.json"));
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_dir(), "./input");
        assert_eq!(config.input_pattern(), DEFAULT_INPUT_PATTERN);
        assert_eq!(config.max_input_bytes(), DEFAULT_MAX_INPUT_BYTES);
        assert!(config.days().unwrap().is_empty());
        assert_eq!(config.parallelism(), DEFAULT_PARALLELISM);
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ADVENT_TEST_INPUT_DIR", "/tmp/advent-inputs");

        let toml_content = r#"
[input]
dir = "${ADVENT_TEST_INPUT_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.dir, "/tmp/advent-inputs");

        std::env::remove_var("ADVENT_TEST_INPUT_DIR");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[input]
dir = "${ADVENT_TEST_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.dir, "${ADVENT_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let bad_day = TomlConfig::from_toml_str("[run]\ndays = [26]").unwrap();
        assert!(bad_day.validate().is_err());

        let bad_pattern = TomlConfig::from_toml_str("[input]\npattern = \"input.txt\"").unwrap();
        assert!(bad_pattern.validate().is_err());

        let bad_level =
            TomlConfig::from_toml_str("[monitoring]\nenabled = false\nlog_level = \"loud\"")
                .unwrap();
        assert!(bad_level.validate().is_err());

        let zero_workers = TomlConfig::from_toml_str("[run]\nparallelism = 0").unwrap();
        assert!(zero_workers.validate().is_err());
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        assert!(TomlConfig::from_toml_str("[report]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[run]
days = [2]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.days().unwrap(), vec![Day::new(2).unwrap()]);
    }
}
