//! Day 1: Calorie Counting.
//!
//! Each elf writes down the calories of every food item it carries, one per line,
//! with a blank line between elves:
//!
//! ```text
//! 1000
//! 2000
//! 3000
//!
//! 4000
//! ```
//!
//! Part 1 asks for the largest total carried by a single elf; part 2 for the
//! combined total of the three best-stocked elves.

use crate::domain::model::Day;
use crate::domain::ports::Solver;
use crate::utils::error::{AocError, Result};
use crate::utils::top_n::TopN;

const DAY: Day = Day::of(1);

pub struct CalorieCounting;

impl Solver for CalorieCounting {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &'static str {
        "Calorie Counting"
    }

    fn part1(&self, input: &str) -> Result<u64> {
        top_stashes(input, 1)
    }

    fn part2(&self, input: &str) -> Result<u64> {
        top_stashes(input, 3)
    }
}

/// Sum of the `count` largest stashes. Missing elves contribute nothing.
fn top_stashes(input: &str, count: usize) -> Result<u64> {
    let mut top = TopN::new(count);
    for stash in Stashes::new(input) {
        top.push(stash?);
    }

    top.into_sorted_vec()
        .into_iter()
        .try_fold(0u64, |total, stash| total.checked_add(stash))
        .ok_or_else(|| AocError::puzzle(DAY.number(), "sum of top stashes overflows"))
}

fn parse_calories(line_no: usize, line: &str) -> Result<u64> {
    line.trim()
        .parse()
        .map_err(|e| AocError::parse(DAY.number(), line_no, format!("parse calories '{line}': {e}")))
}

/// Streams per-elf totals without holding every elf in memory.
struct Stashes<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Stashes<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }
}

impl Iterator for Stashes<'_> {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut total: Option<u64> = None;

        for (idx, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                if total.is_some() {
                    break;
                }
                continue;
            }

            let calories = match parse_calories(idx + 1, line) {
                Ok(calories) => calories,
                Err(e) => return Some(Err(e)),
            };
            match total.unwrap_or(0).checked_add(calories) {
                Some(sum) => total = Some(sum),
                None => {
                    return Some(Err(AocError::parse(
                        DAY.number(),
                        idx + 1,
                        "calorie total overflows",
                    )))
                }
            }
        }

        total.map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn test_part1_example() {
        assert_eq!(CalorieCounting.part1(EXAMPLE).unwrap(), 24000);
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(CalorieCounting.part2(EXAMPLE).unwrap(), 45000);
    }

    #[test]
    fn test_stashes() {
        let input = "100\n100\n100\n\n400\n\n100\n100";
        let stashes: Vec<u64> = Stashes::new(input).collect::<Result<_>>().unwrap();
        assert_eq!(stashes, vec![300, 400, 200]);
    }

    #[test]
    fn test_repeated_blank_lines_do_not_create_elves() {
        let input = "\n\n5\n\n\n\n7\n\n";
        let stashes: Vec<u64> = Stashes::new(input).collect::<Result<_>>().unwrap();
        assert_eq!(stashes, vec![5, 7]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(CalorieCounting.part1("").unwrap(), 0);
        assert_eq!(CalorieCounting.part2("").unwrap(), 0);
    }

    #[test]
    fn test_fewer_than_three_elves() {
        assert_eq!(CalorieCounting.part2("10\n\n20").unwrap(), 30);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = CalorieCounting.part1("10\n20\n\nabc").unwrap_err();
        match err {
            AocError::ParseError { day, line, .. } => {
                assert_eq!(day, 1);
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let input = format!("{}\n1", u64::MAX);
        assert!(CalorieCounting.part1(&input).is_err());
    }
}
