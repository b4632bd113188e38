// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Command {
	Forward(i64),
	Down(i64),
	Up(i64),
}

#[derive(Default)]
struct Position { horizontal: i64, depth: i64, aim: i64 }

impl Position {
	fn product(&self) -> i64 {
		self.horizontal * self.depth
	}
}


fn part1_impl(input_commands: &[Command]) -> i64 {
	input_commands.iter()
		.fold(Position::default(), |mut pos, &cmd| {
			use Command::*;
			match cmd {
				Forward(n) => pos.horizontal += n,
				Down(n) => pos.depth += n,
				Up(n) => pos.depth -= n,
			}
			pos
		})
		.product()
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::CommandsError> {
	parsing::try_commands_from_str(input).map(|c| part1_impl(&c))
}


fn part2_impl(input_commands: &[Command]) -> i64 {
	input_commands.iter()
		.fold(Position::default(), |mut pos, &cmd| {
			use Command::*;
			match cmd {
				Forward(n) => {
					pos.horizontal += n;
					pos.depth += pos.aim * n;
				}
				Down(n) => pos.aim += n,
				Up(n) => pos.aim -= n,
			}
			pos
		})
		.product()
}

pub(crate) fn part2(input: &str) -> Result<i64, parsing::CommandsError> {
	parsing::try_commands_from_str(input).map(|c| part2_impl(&c))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Command;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum CommandError {
		Format,
		Direction(String),
		Amount(ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use CommandError::*;
			let (dir, amount) = s.split_once(' ').ok_or(Format)?;
			let amount = amount.parse().map_err(Amount)?;
			match dir {
				"forward" => Ok(Command::Forward(amount)),
				"down" => Ok(Command::Down(amount)),
				"up" => Ok(Command::Up(amount)),
				_ => Err(Direction(dir.to_owned())),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct CommandsError { line: usize, source: CommandError }

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command>, CommandsError> {
		s.trim_end().lines()
			.enumerate()
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| CommandsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		use Command::*;
		assert_eq!(try_commands_from_str("forward 5\nup 3").unwrap(), [Forward(5), Up(3)]);
		assert!(matches!(
			try_commands_from_str("down 1\nbackward 2"),
			Err(CommandsError { line: 2, source: CommandError::Direction(_) })));
		assert!(matches!(
			try_commands_from_str("down"),
			Err(CommandsError { line: 1, source: CommandError::Format })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };
	assert_eq!(part1(INPUT).unwrap(), 150);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 150);
	assert_eq!(part2(INPUT).unwrap(), 900);
}
