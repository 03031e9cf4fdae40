pub mod day01;
pub mod day02;
pub mod day03;

use crate::domain::model::Day;
use crate::domain::ports::Solver;
use crate::utils::error::{AocError, Result};
use std::sync::Arc;

/// Every implemented solver, ordered by day.
pub fn registry() -> Vec<Arc<dyn Solver>> {
    vec![
        Arc::new(day01::CalorieCounting),
        Arc::new(day02::RockPaperScissors),
        Arc::new(day03::RucksackReorganization),
    ]
}

pub fn implemented_days() -> Vec<Day> {
    registry().iter().map(|solver| solver.day()).collect()
}

pub fn solver(day: Day) -> Result<Arc<dyn Solver>> {
    registry()
        .into_iter()
        .find(|solver| solver.day() == day)
        .ok_or(AocError::UnknownDay { day: day.number() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_ordered_and_unique() {
        let days: Vec<u8> = implemented_days().into_iter().map(Day::number).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_solver_lookup() {
        let solver = solver(Day::new(2).unwrap()).unwrap();
        assert_eq!(solver.title(), "Rock Paper Scissors");
        assert!(matches!(
            super::solver(Day::new(25).unwrap()),
            Err(AocError::UnknownDay { day: 25 })
        ));
    }
}
