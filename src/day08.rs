// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Lit segments as bits `0b_gfedcba`.
type Pattern = u8;

struct Entry {
	signals: [Pattern; 10],
	outputs: [Pattern; 4],
}

fn len(pattern: Pattern) -> u32 {
	pattern.count_ones()
}

fn contains(pattern: Pattern, other: Pattern) -> bool {
	pattern & other == other
}

impl Entry {
	/// Deduces which signal pattern shows which digit, indexed by digit.
	fn wiring(&self) -> Option<[Pattern; 10]> {
		let find_len = |l| self.signals.iter().copied().find(|&p| len(p) == l);
		let (one, four) = (find_len(2)?, find_len(4)?);
		// The two segments of “4” that “1” lacks
		let four_arm = four & !one;

		let mut wiring = [None; 10];
		for &p in &self.signals {
			let digit = match len(p) {
				2 => 1,
				3 => 7,
				4 => 4,
				7 => 8,
				5 if contains(p, one) => 3,
				5 if contains(p, four_arm) => 5,
				5 => 2,
				6 if contains(p, four) => 9,
				6 if contains(p, one) => 0,
				6 => 6,
				_ => return None,
			};
			if wiring[digit].replace(p).is_some() { return None }
		}

		let mut complete = [0; 10];
		for (digit, p) in wiring.into_iter().enumerate() { complete[digit] = p?; }
		Some(complete)
	}

	fn output_value(&self) -> Option<u32> {
		let wiring = self.wiring()?;
		self.outputs.iter().try_fold(0, |acc, o| {
			let digit = wiring.iter().position(|p| p == o)?;
			Some(acc * 10 + digit as u32)
		})
	}
}


fn part1_impl(input_entries: &[Entry]) -> usize {
	input_entries.iter()
		.flat_map(|e| e.outputs.iter())
		.filter(|&&o| matches!(len(o), 2 | 3 | 4 | 7))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::EntriesError> {
	parsing::try_entries_from_str(input).map(|e| part1_impl(&e))
}


fn part2_impl(input_entries: &[Entry]) -> Result<u32, usize> {
	input_entries.iter()
		.enumerate()
		.map(|(l, e)| e.output_value().ok_or(l + 1))
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u32, parsing::EntriesError> {
	let entries = parsing::try_entries_from_str(input)?;
	part2_impl(&entries).map_err(|line| parsing::EntriesError { line, source: parsing::EntryError::Undecodable })
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::{Entry, Pattern};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum EntryError {
		MissingBar,
		Count { signals: usize, outputs: usize },
		Segment(char),
		Undecodable,
	}

	fn try_pattern_from_str(s: &str) -> Result<Pattern, EntryError> {
		s.chars().try_fold(0, |acc, chr| match chr {
			'a'..='g' => Ok(acc | 1 << (chr as u8 - b'a')),
			_ => Err(EntryError::Segment(chr)),
		})
	}

	fn try_patterns<const N: usize>(s: &str) -> Result<Result<[Pattern; N], usize>, EntryError> {
		let patterns = s.split_whitespace()
			.map(try_pattern_from_str)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(patterns.try_into().map_err(|p: Vec<_>| p.len()))
	}

	impl FromStr for Entry {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (signals, outputs) = s.split_once('|').ok_or(EntryError::MissingBar)?;
			match (try_patterns(signals)?, try_patterns(outputs)?) {
				(Ok(signals), Ok(outputs)) => Ok(Entry { signals, outputs }),
				(signals, outputs) => Err(EntryError::Count {
					signals: signals.map_or_else(|n| n, |s| s.len()),
					outputs: outputs.map_or_else(|n| n, |o| o.len()),
				}),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct EntriesError { pub(super) line: usize, pub(super) source: EntryError }

	pub(super) fn try_entries_from_str(s: &str) -> Result<Vec<Entry>, EntriesError> {
		s.trim_end().lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| EntriesError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert!(matches!(try_entries_from_str("ab | cd ef\n"),
			Err(EntriesError { line: 1, source: EntryError::Count { signals: 1, outputs: 2 } })));
		assert!(matches!(try_entries_from_str("ab cx | a b c d"),
			Err(EntriesError { line: 1, source: EntryError::Segment('x') })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf
		abcefg cf acdeg acdfg bcdf abdfg abdefg acf abcdefg abcdfg | cf bcdf acf abcdefg
	" };
	assert_eq!(part1(INPUT).unwrap(), 4);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 4);
	assert_eq!(part2(INPUT).unwrap(), 5353 + 1478);
	assert!(matches!(part2("a b c d e f g ab abc abcd | a b c d"),
		Err(parsing::EntriesError { line: 1, source: parsing::EntryError::Undecodable })));
}
