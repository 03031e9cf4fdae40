use crate::days;
use crate::domain::model::{Day, DayReport, Part, PartOutcome, PartReport, RunSummary};
use crate::domain::ports::{ConfigProvider, InputSource, Solver};
use crate::utils::error::{AocError, Result};
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Solves the configured days and collects their answers.
pub struct Runner<I: InputSource + 'static, C: ConfigProvider> {
    input: Arc<I>,
    config: C,
    monitor: SystemMonitor,
}

impl<I: InputSource + 'static, C: ConfigProvider> Runner<I, C> {
    pub fn new(input: I, config: C) -> Self {
        Self::new_with_monitoring(input, config, false)
    }

    pub fn new_with_monitoring(input: I, config: C, monitor_enabled: bool) -> Self {
        Self {
            input: Arc::new(input),
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Days and parts this run would solve, without touching any input.
    pub fn plan(&self) -> Result<(Vec<Arc<dyn Solver>>, Vec<Part>)> {
        let requested = self.config.days()?;
        let selected = if requested.is_empty() {
            days::implemented_days()
        } else {
            requested
        };
        let solvers = selected
            .into_iter()
            .map(days::solver)
            .collect::<Result<Vec<_>>>()?;

        let mut parts = self.config.parts()?;
        if parts.is_empty() {
            parts = Part::ALL.to_vec();
        }

        Ok((solvers, parts))
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let (solvers, parts) = self.plan()?;
        let parallelism = self.config.parallelism().max(1);
        let fail_fast = self.config.fail_fast();

        tracing::info!(
            "Solving {} day(s), parts {:?}, {} at a time",
            solvers.len(),
            parts,
            parallelism
        );
        self.monitor.log_stats("Start");

        let permits = Arc::new(Semaphore::new(parallelism));
        let parts: Arc<[Part]> = parts.into();
        let mut tasks = JoinSet::new();

        for solver in solvers {
            let permits = Arc::clone(&permits);
            let input = Arc::clone(&self.input);
            let parts = Arc::clone(&parts);
            tasks.spawn(async move {
                match permits.acquire_owned().await {
                    Ok(_permit) => solve_day(input.as_ref(), solver, parts, fail_fast).await,
                    Err(e) => Err(AocError::TaskError {
                        message: e.to_string(),
                    }),
                }
            });
        }

        let mut reports = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined.map_err(|e| AocError::TaskError {
                message: e.to_string(),
            });

            match outcome.and_then(|report| report) {
                Ok(report) => {
                    self.monitor.log_stats(&format!("Day {}", report.day));
                    reports.push(report);
                }
                Err(e) => {
                    tasks.abort_all();
                    tracing::error!("Run aborted: {}", e);
                    return Err(e);
                }
            }
        }

        reports.sort_by_key(|report| report.day);
        self.monitor.log_final_stats();

        let summary = RunSummary {
            generated_at: chrono::Utc::now(),
            days: reports,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            "Finished {} day(s) in {}ms with {} failure(s)",
            summary.days.len(),
            summary.elapsed_ms,
            summary.failures()
        );

        Ok(summary)
    }
}

/// Reads one day's input and solves the requested parts on the blocking pool.
///
/// With `fail_fast` any error is returned; otherwise it is recorded in the report.
async fn solve_day<I: InputSource>(
    input: &I,
    solver: Arc<dyn Solver>,
    parts: Arc<[Part]>,
    fail_fast: bool,
) -> Result<DayReport> {
    let day = solver.day();
    let title = solver.title().to_string();

    let text = match input.read_input(day).await {
        Ok(text) => text,
        Err(e) if fail_fast => return Err(e),
        Err(e) => {
            tracing::warn!("Day {}: {}", day, e);
            return Ok(failed_day(day, title, &parts, &e));
        }
    };

    let worker_parts = Arc::clone(&parts);
    let worker = tokio::task::spawn_blocking(move || {
        let mut reports = Vec::with_capacity(worker_parts.len());
        for &part in worker_parts.iter() {
            let started = Instant::now();
            let result = solver.solve(part, &text);
            let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

            let outcome = match result {
                Ok(answer) => {
                    tracing::debug!("Day {} part {}: {} ({}us)", day, part, answer, elapsed_us);
                    PartOutcome::Solved { answer }
                }
                Err(e) if fail_fast => return Err(e),
                Err(e) => {
                    tracing::warn!("Day {} part {} failed: {}", day, part, e);
                    PartOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            reports.push(PartReport {
                part,
                outcome,
                elapsed_us,
            });
        }
        Ok(reports)
    });

    let reports = match worker.await {
        Ok(result) => result?,
        Err(e) => {
            let err = AocError::TaskError {
                message: e.to_string(),
            };
            if fail_fast {
                return Err(err);
            }
            tracing::error!("Day {} worker failed: {}", day, err);
            return Ok(failed_day(day, title, &parts, &err));
        }
    };

    Ok(DayReport {
        day,
        title,
        parts: reports,
    })
}

fn failed_day(day: Day, title: String, parts: &[Part], error: &AocError) -> DayReport {
    DayReport {
        day,
        title,
        parts: parts
            .iter()
            .map(|&part| PartReport {
                part,
                outcome: PartOutcome::Failed {
                    error: error.to_string(),
                },
                elapsed_us: 0,
            })
            .collect(),
    }
}
