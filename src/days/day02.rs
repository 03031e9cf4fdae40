//! Day 2: Rock Paper Scissors.
//!
//! Every line of the strategy guide is `<opponent> <code>`, where the opponent plays
//! `A` (Rock), `B` (Paper) or `C` (Scissors). Part 1 reads the code as the shape to play
//! (`X`, `Y`, `Z`); part 2 reads it as the outcome the round has to end with
//! (lose, draw, win). A round scores the chosen shape plus the outcome.

use crate::domain::model::Day;
use crate::domain::ports::Solver;
use crate::utils::error::{AocError, Result};

const DAY: Day = Day::of(2);

pub struct RockPaperScissors;

impl Solver for RockPaperScissors {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &'static str {
        "Rock Paper Scissors"
    }

    fn part1(&self, input: &str) -> Result<u64> {
        total_score(input, |opponent, code| {
            let player = Shape::from_player_code(code)?;
            Some((player, Outcome::of(opponent, player)))
        })
    }

    fn part2(&self, input: &str) -> Result<u64> {
        total_score(input, |opponent, code| {
            let outcome = Outcome::from_code(code)?;
            Some((outcome.required_shape(opponent), outcome))
        })
    }
}

/// Scores every round. `decode` turns the opponent's shape and the second column into
/// the player's shape and the resulting outcome, or `None` for an unknown code.
fn total_score<F>(input: &str, decode: F) -> Result<u64>
where
    F: Fn(Shape, char) -> Option<(Shape, Outcome)>,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| -> Result<u64> {
            let (opponent, code) = split_round(idx + 1, line)?;
            let opponent = Shape::from_opponent_code(opponent).ok_or_else(|| {
                AocError::parse(DAY.number(), idx + 1, format!("unknown opponent move '{opponent}'"))
            })?;
            let (player, outcome) = decode(opponent, code).ok_or_else(|| {
                AocError::parse(DAY.number(), idx + 1, format!("unknown strategy code '{code}'"))
            })?;
            Ok(player.score() + outcome.score())
        })
        .sum()
}

fn split_round(line_no: usize, line: &str) -> Result<(char, char)> {
    let mut chars = line.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(opponent), Some(' '), Some(code), None) => Ok((opponent, code)),
        _ => Err(AocError::parse(
            DAY.number(),
            line_no,
            format!("expected '<move> <code>', got '{line}'"),
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn from_opponent_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Shape::Rock),
            'B' => Some(Shape::Paper),
            'C' => Some(Shape::Scissors),
            _ => None,
        }
    }

    fn from_player_code(code: char) -> Option<Self> {
        match code {
            'X' => Some(Shape::Rock),
            'Y' => Some(Shape::Paper),
            'Z' => Some(Shape::Scissors),
            _ => None,
        }
    }

    /// The shape this one defeats.
    fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one.
    fn beaten_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    fn of(opponent: Shape, player: Shape) -> Self {
        if player == opponent {
            Outcome::Draw
        } else if player.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'X' => Some(Outcome::Lose),
            'Y' => Some(Outcome::Draw),
            'Z' => Some(Outcome::Win),
            _ => None,
        }
    }

    fn required_shape(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Lose => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }

    fn score(self) -> u64 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}
