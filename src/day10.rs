// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Bracket { Round, Square, Curly, Angle }

#[derive(Clone, Copy)]
struct Delimiter { bracket: Bracket, opening: bool }

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Status {
	Complete,
	/// Holds the first closing bracket that did not match.
	Corrupted(Bracket),
	/// Holds the brackets still open, innermost last.
	Incomplete(Vec<Bracket>),
}

fn check(line: &[Delimiter]) -> Status {
	let mut open = Vec::new();
	for &Delimiter { bracket, opening } in line {
		if opening { open.push(bracket) }
		else if open.pop() != Some(bracket) { return Status::Corrupted(bracket) }
	}
	if open.is_empty() { Status::Complete } else { Status::Incomplete(open) }
}


fn part1_impl(input_lines: &[Vec<Delimiter>]) -> u64 {
	use Bracket::*;
	input_lines.iter()
		.filter_map(|line| match check(line) {
			Status::Corrupted(bracket) => Some(match bracket {
				Round => 3,
				Square => 57,
				Curly => 1197,
				Angle => 25137,
			}),
			_ => None,
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::LinesError> {
	parsing::try_lines_from_str(input).map(|l| part1_impl(&l))
}


fn part2_impl(input_lines: &[Vec<Delimiter>]) -> Option<u64> {
	use itertools::Itertools as _;
	let scores = input_lines.iter()
		.filter_map(|line| match check(line) {
			Status::Incomplete(open) => Some(open.into_iter()
				.rev()
				.fold(0, |acc, bracket| acc * 5 + bracket as u64 + 1)),
			_ => None,
		})
		.sorted_unstable()
		.collect::<Vec<_>>();
	scores.get(scores.len() / 2).copied()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::LinesError> {
	let lines = parsing::try_lines_from_str(input)?;
	part2_impl(&lines).ok_or(parsing::LinesError { line: lines.len(), column: 1, found: None })
}


pub(crate) mod parsing {
	use super::{Bracket, Delimiter};

	/// `found` is `None` when no line is incomplete.
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct LinesError { pub(super) line: usize, pub(super) column: usize, pub(super) found: Option<char> }

	fn try_delimiter_from_char(chr: char) -> Option<Delimiter> {
		use Bracket::*;
		let (bracket, opening) = match chr {
			'(' => (Round, true),
			')' => (Round, false),
			'[' => (Square, true),
			']' => (Square, false),
			'{' => (Curly, true),
			'}' => (Curly, false),
			'<' => (Angle, true),
			'>' => (Angle, false),
			_ => return None,
		};
		Some(Delimiter { bracket, opening })
	}

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Vec<Delimiter>>, LinesError> {
		s.trim_end().lines()
			.enumerate()
			.map(|(l, line)| line.chars()
				.enumerate()
				.map(|(c, chr)| try_delimiter_from_char(chr)
					.ok_or(LinesError { line: l + 1, column: c + 1, found: Some(chr) }))
				.collect())
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		[({(<(())[]>[[{[]{<()<>>
		[(()[<>])]({[<{<<[]>>(
		{([(<{}[<>[]}>{[]{[(<()>
		(((({<>}<{<{<>}{[]{[]{}
		[[<[([]))<([[{}[[()]]]
		[{[{({}]{}}([{[{{{}}([]
		{<[[]]>}<{[{[{[]{()[[[]
		[<(<(<(<{}))><([]([]()
		<{([([[(<>()){}]>(<<{{
		<{([{{}}[<[[[<>{}]]]>[]]
	" };
	let lines = parsing::try_lines_from_str(INPUT).unwrap();
	assert_eq!(check(&lines[2]), Status::Corrupted(Bracket::Curly));
	assert_eq!(part1(INPUT).unwrap(), 26397);
	assert_eq!(part2(&format!("{INPUT}\n")).unwrap(), 288957);
	assert_eq!(part2(INPUT).unwrap(), 288957);
	assert!(matches!(check(&parsing::try_lines_from_str("<([]){}>").unwrap()[0]), Status::Complete));
	assert!(matches!(part1("(x)"),
		Err(parsing::LinesError { line: 1, column: 2, found: Some('x') })));
}
