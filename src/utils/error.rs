use thiserror::Error;

/// Exit code when the run finished but some parts failed.
pub const EXIT_PARTIAL_FAILURE: i32 = 4;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid day {value}: must be between 1 and 25")]
    InvalidDay { value: u32 },

    #[error("Invalid part {value}: must be 1 or 2")]
    InvalidPart { value: u32 },

    #[error("Day {day} has no solver")]
    UnknownDay { day: u8 },

    #[error("Input for day {day} not found at {path}")]
    InputNotFound { day: u8, path: String },

    #[error("Input for day {day} is {size} bytes, limit is {limit}")]
    InputTooLarge { day: u8, size: u64, limit: u64 },

    #[error("Day {day}, line {line}: {message}")]
    ParseError {
        day: u8,
        line: usize,
        message: String,
    },

    #[error("Day {day}: {message}")]
    PuzzleError { day: u8, message: String },

    #[error("Worker task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Puzzle,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AocError {
    pub fn parse(day: u8, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            day,
            line,
            message: message.into(),
        }
    }

    pub fn puzzle(day: u8, message: impl Into<String>) -> Self {
        Self::PuzzleError {
            day,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::InvalidDay { .. }
            | Self::InvalidPart { .. }
            | Self::UnknownDay { .. } => ErrorCategory::Config,
            Self::InputNotFound { .. } | Self::InputTooLarge { .. } => ErrorCategory::Input,
            Self::ParseError { .. } | Self::PuzzleError { .. } => ErrorCategory::Puzzle,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
            Self::IoError(_) | Self::TaskError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Puzzle | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a run that stopped on this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InputNotFound { day, .. } => format!(
                "Save your puzzle input for day {} into the input directory, or adjust --input-dir / --input-pattern",
                day
            ),
            Self::InputTooLarge { .. } => {
                "Check that the right file is used, or raise max_input_bytes".to_string()
            }
            Self::UnknownDay { .. } => {
                "Only days with a solver can be run; omit --days to run all of them".to_string()
            }
            Self::InvalidDay { .. } | Self::InvalidPart { .. } => {
                "Days are numbered 1 to 25 and parts 1 or 2".to_string()
            }
            Self::ParseError { .. } | Self::PuzzleError { .. } => {
                "Make sure the input file is the unmodified puzzle input".to_string()
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different report format".to_string()
            }
            Self::IoError(_) => "Check file permissions and available disk space".to_string(),
            Self::TaskError { .. } => "Run again with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not load puzzle input: {}", self),
            ErrorCategory::Puzzle => format!("Puzzle input rejected: {}", self),
            ErrorCategory::Output => format!("Could not produce the report: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AocError>;
