//! Day 3: Rucksack Reorganization.
//!
//! Each line lists the item types in one rucksack; the first half of the line is the
//! first compartment and the second half the other. Item types map to priorities
//! `a..=z` -> 1..=26 and `A..=Z` -> 27..=52.
//!
//! Part 1 sums the priority of the single type found in both compartments of each
//! rucksack. Part 2 groups the rucksacks in threes and sums the priority of the badge,
//! the only type carried by all three elves of a group.

use crate::domain::model::Day;
use crate::domain::ports::Solver;
use crate::utils::error::{AocError, Result};

const DAY: Day = Day::of(3);
const GROUP_SIZE: usize = 3;

pub struct RucksackReorganization;

impl Solver for RucksackReorganization {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &'static str {
        "Rucksack Reorganization"
    }

    fn part1(&self, input: &str) -> Result<u64> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| -> Result<u64> {
                let line_no = idx + 1;
                // Every item is one ASCII byte once the whole line parses, so splitting by
                // byte length lands on a char boundary.
                ItemSet::parse(line_no, line)?;
                if line.len() % 2 != 0 {
                    return Err(AocError::parse(
                        DAY.number(),
                        line_no,
                        format!("rucksack '{line}' cannot be split into equal compartments"),
                    ));
                }

                let (first, second) = line.split_at(line.len() / 2);
                let shared = ItemSet::parse(line_no, first)?
                    .intersection(ItemSet::parse(line_no, second)?);
                shared
                    .single_priority()
                    .map_err(|reason| AocError::parse(DAY.number(), line_no, reason))
            })
            .sum()
    }

    fn part2(&self, input: &str) -> Result<u64> {
        let mut total = 0;
        let mut badge = ItemSet::ALL;
        let mut members = 0;

        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            badge = badge.intersection(ItemSet::parse(line_no, line)?);
            members += 1;

            if members == GROUP_SIZE {
                let priority = badge.single_priority().map_err(|reason| {
                    AocError::parse(DAY.number(), line_no, format!("group badge: {reason}"))
                })?;
                total += priority;
                badge = ItemSet::ALL;
                members = 0;
            }
        }

        if members != 0 {
            return Err(AocError::puzzle(
                DAY.number(),
                format!("last group has {members} rucksacks, expected {GROUP_SIZE}"),
            ));
        }

        Ok(total)
    }
}

/// Priority of an item type.
fn priority(item: u8) -> Option<u64> {
    match item {
        b'a'..=b'z' => Some(u64::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u64::from(item - b'A') + 27),
        _ => None,
    }
}

/// A set of item types, one bit per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSet(u64);

impl ItemSet {
    const ALL: ItemSet = ItemSet(((1u64 << 52) - 1) << 1);

    fn parse(line_no: usize, items: &str) -> Result<Self> {
        items.bytes().try_fold(ItemSet(0), |set, item| {
            let priority = priority(item).ok_or_else(|| {
                AocError::parse(
                    DAY.number(),
                    line_no,
                    format!("invalid item type '{}'", char::from(item)),
                )
            })?;
            Ok(ItemSet(set.0 | (1 << priority)))
        })
    }

    fn intersection(self, other: ItemSet) -> ItemSet {
        ItemSet(self.0 & other.0)
    }

    /// The priority of the only item in the set.
    fn single_priority(self) -> std::result::Result<u64, String> {
        match self.0.count_ones() {
            0 => Err("no shared item type".to_string()),
            1 => Ok(u64::from(self.0.trailing_zeros())),
            n => Err(format!("{n} shared item types, expected one")),
        }
    }
}
