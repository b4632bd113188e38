// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const RESET_TIMER: usize = 6;
const NEW_TIMER: usize = 8;

/// Number of fish per timer value.
#[derive(Clone)]
struct School([u64; NEW_TIMER + 1]);

impl School {
	fn tick(&mut self) {
		let spawning = self.0[0];
		self.0.rotate_left(1);
		self.0[RESET_TIMER] += spawning;
		debug_assert_eq!(self.0[NEW_TIMER], spawning);
	}

	fn population(&self) -> u64 {
		self.0.iter().sum()
	}
}


fn part1and2_impl<const DAYS: usize>(mut input_school: School) -> u64 {
	for _ in 0..DAYS { input_school.tick() }
	input_school.population()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::SchoolError> {
	parsing::try_school_from_str(input).map(part1and2_impl::<80>)
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::SchoolError> {
	parsing::try_school_from_str(input).map(part1and2_impl::<256>)
}


pub(crate) mod parsing {
	use std::num::ParseIntError;
	use super::{School, NEW_TIMER};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum SchoolError {
		Timer { column: usize, source: ParseIntError },
		OutOfRange { column: usize, found: usize },
	}

	pub(super) fn try_school_from_str(s: &str) -> Result<School, SchoolError> {
		s.trim()
			.split(',')
			.enumerate()
			.try_fold(School([0; NEW_TIMER + 1]), |mut school, (c, timer)| {
				let timer: usize = timer.trim().parse()
					.map_err(|e| SchoolError::Timer { column: c + 1, source: e })?;
				*school.0.get_mut(timer)
					.ok_or(SchoolError::OutOfRange { column: c + 1, found: timer })? += 1;
				Ok(school)
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = "3,4,3,1,2\n";
	let school = parsing::try_school_from_str(INPUT).unwrap();
	assert_eq!(part1and2_impl::<18>(school.clone()), 26);
	assert_eq!(part1(INPUT).unwrap(), 5934);
	assert_eq!(part2(INPUT).unwrap(), 26984457539);
	assert!(matches!(part1("3,9"), Err(parsing::SchoolError::OutOfRange { column: 2, found: 9 })));
}
