pub mod report;
pub mod runner;

pub use crate::domain::model::{Day, DayReport, Part, PartOutcome, ReportFormat, RunSummary};
pub use crate::domain::ports::{ConfigProvider, InputSource, Solver};
pub use crate::utils::error::Result;
