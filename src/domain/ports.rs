use crate::domain::model::{Day, Part, ReportFormat};
use crate::utils::error::Result;

/// A solution for both parts of one puzzle day.
///
/// Solvers hold no state; the same instance may run on several worker threads.
pub trait Solver: Send + Sync {
    fn day(&self) -> Day;
    fn title(&self) -> &'static str;
    fn part1(&self, input: &str) -> Result<u64>;
    fn part2(&self, input: &str) -> Result<u64>;

    fn solve(&self, part: Part, input: &str) -> Result<u64> {
        match part {
            Part::One => self.part1(input),
            Part::Two => self.part2(input),
        }
    }
}

pub trait InputSource: Send + Sync {
    fn read_input(&self, day: Day) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &str;
    fn input_pattern(&self) -> &str;
    fn max_input_bytes(&self) -> u64;
    /// Requested days; empty means every implemented day.
    fn days(&self) -> Result<Vec<Day>>;
    /// Requested parts; empty means both.
    fn parts(&self) -> Result<Vec<Part>>;
    fn parallelism(&self) -> usize;
    fn fail_fast(&self) -> bool;
    fn report_format(&self) -> ReportFormat;
    fn output_path(&self) -> Option<&str>;
}
