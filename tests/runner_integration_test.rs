use advent_2022::domain::model::PartOutcome;
use advent_2022::{report, AocError, Day, LocalInput, Part, ReportFormat, Runner, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

const DAY1: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";
const DAY2: &str = "A Y\nB X\nC Z\n";
const DAY3: &str = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

fn write_inputs(dir: &Path, inputs: &[(&str, &str)]) {
    for (name, content) in inputs {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

fn config_for(dir: &Path, extra: &str) -> TomlConfig {
    let toml = format!(
        "[input]\ndir = {:?}\n\n[run]\nparallelism = 2\n{}\n",
        dir.to_str().unwrap(),
        extra
    );
    TomlConfig::from_toml_str(&toml).unwrap()
}

fn day(n: u8) -> Day {
    Day::new(n).unwrap()
}

#[tokio::test]
async fn test_solves_every_implemented_day() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), &[("day1", DAY1), ("day2", DAY2), ("day3", DAY3)]);

    let config = config_for(dir.path(), "");
    let runner = Runner::new(LocalInput::new(dir.path()), config);
    let summary = runner.run().await.unwrap();

    assert!(summary.is_success());
    let days: Vec<u8> = summary.days.iter().map(|d| d.day.number()).collect();
    assert_eq!(days, vec![1, 2, 3]);

    let expected = [(1, 24000, 45000), (2, 15, 12), (3, 157, 70)];
    for (n, part1, part2) in expected {
        let report = summary.day(day(n)).unwrap();
        assert_eq!(report.answer(Part::One), Some(part1), "day {n} part 1");
        assert_eq!(report.answer(Part::Two), Some(part2), "day {n} part 2");
    }
}

#[tokio::test]
async fn test_selected_day_and_part() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), &[("day2", DAY2)]);

    let config = config_for(dir.path(), "days = [2]\nparts = [2]");
    let summary = Runner::new(LocalInput::new(dir.path()), config)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.days.len(), 1);
    let report = &summary.days[0];
    assert_eq!(report.title, "Rock Paper Scissors");
    assert_eq!(report.parts.len(), 1);
    assert_eq!(report.parts[0].part, Part::Two);
    assert_eq!(report.parts[0].outcome, PartOutcome::Solved { answer: 12 });
}

#[tokio::test]
async fn test_missing_input_is_recorded_without_fail_fast() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), &[("day1", DAY1)]);

    let config = config_for(dir.path(), "days = [1, 2]");
    let summary = Runner::new(LocalInput::new(dir.path()), config)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.failures(), 2);
    assert_eq!(summary.day(day(1)).unwrap().answer(Part::One), Some(24000));
    let missing = summary.day(day(2)).unwrap();
    assert!(missing.parts.iter().all(|p| p.outcome.is_failed()));
}

#[tokio::test]
async fn test_fail_fast_returns_first_error() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), &[("day2", "A Y\nnot a round\n")]);

    let config = config_for(dir.path(), "days = [2]\nfail_fast = true");
    let err = Runner::new(LocalInput::new(dir.path()), config)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AocError::ParseError { day: 2, line: 2, .. }));
}

#[tokio::test]
async fn test_bad_input_is_reported_per_part() {
    let dir = TempDir::new().unwrap();
    // Valid for part 1, but the second group of three rucksacks is incomplete.
    let input = format!("{DAY3}vJrwpWtwJgWrhcsFMMfFFhFp\n");
    write_inputs(dir.path(), &[("day3", input.as_str())]);

    let config = config_for(dir.path(), "days = [3]");
    let summary = Runner::new(LocalInput::new(dir.path()), config)
        .run()
        .await
        .unwrap();

    let report = summary.day(day(3)).unwrap();
    assert_eq!(report.answer(Part::One), Some(157 + 16));
    assert!(report.parts[1].outcome.is_failed());
}

#[tokio::test]
async fn test_unknown_day_is_rejected_before_solving() {
    let dir = TempDir::new().unwrap();

    let config = config_for(dir.path(), "days = [1, 24]");
    let err = Runner::new(LocalInput::new(dir.path()), config)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AocError::UnknownDay { day: 24 }));
}

#[tokio::test]
async fn test_report_written_to_file() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path(), &[("day1.txt", DAY1)]);

    let toml = format!(
        "[input]\ndir = {:?}\npattern = \"day{{day}}.txt\"\n\n[run]\ndays = [1]\n",
        dir.path().to_str().unwrap()
    );
    let config = TomlConfig::from_toml_str(&toml).unwrap();
    let input = LocalInput::new(dir.path()).with_pattern("day{day}.txt");
    let summary = Runner::new(input, config).run().await.unwrap();

    let out = dir.path().join("reports/out.csv");
    report::write_report(&summary, ReportFormat::Csv, out.to_str())
        .await
        .unwrap();

    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.contains("1,Calorie Counting,1,solved,24000,,"));
    assert!(csv.contains("1,Calorie Counting,2,solved,45000,,"));
}
