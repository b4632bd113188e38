// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn min_total_fuel(positions: &[i64], fuel: impl Fn(i64) -> i64) -> Option<i64> {
	use itertools::{Itertools as _, MinMaxResult::*};
	let (min, max) = match positions.iter().minmax() {
		NoElements => return None,
		OneElement(&p) => (p, p),
		MinMax(&min, &max) => (min, max),
	};
	(min..=max)
		.map(|target| positions.iter().map(|&p| fuel((p - target).abs())).sum::<i64>())
		.min()
}


fn part1_impl(input_positions: &[i64]) -> Option<i64> {
	min_total_fuel(input_positions, |dist| dist)
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::PositionsError> {
	let positions = parsing::try_positions_from_str(input)?;
	part1_impl(&positions).ok_or(parsing::PositionsError::Empty)
}


fn part2_impl(input_positions: &[i64]) -> Option<i64> {
	min_total_fuel(input_positions, |dist| dist * (dist + 1) / 2)
}

pub(crate) fn part2(input: &str) -> Result<i64, parsing::PositionsError> {
	let positions = parsing::try_positions_from_str(input)?;
	part2_impl(&positions).ok_or(parsing::PositionsError::Empty)
}


pub(crate) mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum PositionsError {
		Empty,
		Position { column: usize, source: ParseIntError },
	}

	pub(super) fn try_positions_from_str(s: &str) -> Result<Vec<i64>, PositionsError> {
		let s = s.trim();
		if s.is_empty() { return Err(PositionsError::Empty) }
		s.split(',')
			.enumerate()
			.map(|(c, p)| p.trim().parse()
				.map_err(|e| PositionsError::Position { column: c + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14";
	assert_eq!(part1(INPUT).unwrap(), 37);
	assert_eq!(part2(INPUT).unwrap(), 168);
	assert_eq!(part1("5").unwrap(), 0);
	assert!(matches!(part2(""), Err(parsing::PositionsError::Empty)));
}
