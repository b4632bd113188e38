// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const START: &str = "start";
const END: &str = "end";

struct Cave<'s> {
	big: bool,
	neighbors: Vec<&'s str>,
}

struct Caves<'s>(HashMap<&'s str, Cave<'s>>);

impl<'s> Caves<'s> {
	fn count_paths(&self, may_revisit_once: bool) -> usize {
		fn visit<'s>(caves: &Caves<'s>, name: &'s str, path: &mut Vec<&'s str>, may_revisit: bool) -> usize {
			if name == END { return 1 }
			let Some(cave) = caves.0.get(name) else { return 0 };
			let mut may_revisit = may_revisit;
			if !cave.big && path.contains(&name) {
				if !may_revisit || name == START { return 0 }
				may_revisit = false;
			}
			path.push(name);
			let count = cave.neighbors.iter()
				.map(|&next| visit(caves, next, path, may_revisit))
				.sum();
			path.pop();
			count
		}

		visit(self, START, &mut Vec::new(), may_revisit_once)
	}
}


fn part1_impl(input_caves: &Caves) -> usize {
	input_caves.count_paths(false)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::CavesError> {
	parsing::try_caves_from_str(input).map(|c| part1_impl(&c))
}


fn part2_impl(input_caves: &Caves) -> usize {
	input_caves.count_paths(true)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CavesError> {
	parsing::try_caves_from_str(input).map(|c| part2_impl(&c))
}


pub(crate) mod parsing {
	use super::{Cave, Caves, START, END};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum CavesError {
		MissingDash { line: usize },
		Name { line: usize, found: String },
		MissingEndpoint,
	}

	pub(super) fn try_caves_from_str(s: &str) -> Result<Caves, CavesError> {
		let mut caves = Caves(Default::default());
		for (l, line) in s.trim_end().lines().enumerate() {
			let (a, b) = line.trim().split_once('-')
				.ok_or(CavesError::MissingDash { line: l + 1 })?;
			for (from, to) in [(a, b), (b, a)] {
				if from.is_empty() || !from.chars().all(|c| c.is_ascii_alphabetic()) {
					return Err(CavesError::Name { line: l + 1, found: from.to_owned() })
				}
				caves.0.entry(from)
					.or_insert_with(|| Cave { big: from.chars().all(|c| c.is_ascii_uppercase()), neighbors: Vec::new() })
					.neighbors.push(to);
			}
		}
		if !caves.0.contains_key(START) || !caves.0.contains_key(END) {
			return Err(CavesError::MissingEndpoint)
		}
		Ok(caves)
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 10);
	assert_eq!(part1("start-end\n\n").unwrap(), 1);
	assert_eq!(part2(INPUTS[0]).unwrap(), 36);
	assert_eq!(part1(INPUTS[1]).unwrap(), 19);
	assert_eq!(part2(INPUTS[1]).unwrap(), 103);
	assert!(matches!(part1("start-A\nA-b"), Err(parsing::CavesError::MissingEndpoint)));
	assert!(matches!(part1("start-A\nA_end"), Err(parsing::CavesError::MissingDash { line: 2 })));
}
