// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn count_increases(depths: impl IntoIterator<Item = u64>) -> usize {
	use itertools::Itertools as _;
	depths.into_iter()
		.tuple_windows()
		.filter(|(prev, next)| next > prev)
		.count()
}


fn part1_impl(input_depths: &[u64]) -> usize {
	count_increases(input_depths.iter().copied())
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::DepthsError> {
	parsing::try_depths_from_str(input).map(|d| part1_impl(&d))
}


fn part2_impl(input_depths: &[u64]) -> usize {
	count_increases(input_depths.windows(3).map(|w| w.iter().sum()))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::DepthsError> {
	parsing::try_depths_from_str(input).map(|d| part2_impl(&d))
}


pub(crate) mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct DepthsError { line: usize, source: ParseIntError }

	pub(super) fn try_depths_from_str(s: &str) -> Result<Vec<u64>, DepthsError> {
		s.trim_end().lines()
			.enumerate()
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| DepthsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	assert_eq!(part1(INPUT).unwrap(), 7);
	assert_eq!(part1(&format!("{INPUT}\n\n")).unwrap(), 7);
	assert_eq!(part2(INPUT).unwrap(), 5);
	assert!(part1("199\n2o0\n").is_err());
}
