// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Point = [i32; 2];

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Segment(Point, Point);

impl Segment {
	fn is_diagonal(&self) -> bool {
		self.0[0] != self.1[0] && self.0[1] != self.1[1]
	}

	/// Walks from the first to the second point (inclusive) in unit steps.
	/// **Note**: Assumes the segment is horizontal, vertical, or at 45°.
	fn points(&self) -> impl Iterator<Item = Point> {
		let Segment(from, to) = *self;
		let step = [(to[0] - from[0]).signum(), (to[1] - from[1]).signum()];
		let len = (to[0] - from[0]).abs().max((to[1] - from[1]).abs());
		(0..=len).map(move |i| [from[0] + i * step[0], from[1] + i * step[1]])
	}
}


fn count_overlaps<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> usize {
	use itertools::Itertools as _;
	segments.into_iter()
		.flat_map(Segment::points)
		.counts()
		.into_values()
		.filter(|&n| n >= 2)
		.count()
}


fn part1_impl(input_segments: &[Segment]) -> usize {
	count_overlaps(input_segments.iter().filter(|s| !s.is_diagonal()))
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::SegmentsError> {
	parsing::try_segments_from_str(input).map(|s| part1_impl(&s))
}


fn part2_impl(input_segments: &[Segment]) -> usize {
	count_overlaps(input_segments)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::SegmentsError> {
	parsing::try_segments_from_str(input).map(|s| part2_impl(&s))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Point, Segment};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum SegmentError {
		MissingArrow,
		MissingComma,
		Coord(ParseIntError),
		Angle,
	}

	fn try_point_from_str(s: &str) -> Result<Point, SegmentError> {
		use SegmentError::*;
		let (x, y) = s.trim().split_once(',').ok_or(MissingComma)?;
		Ok([x.parse().map_err(Coord)?, y.parse().map_err(Coord)?])
	}

	impl FromStr for Segment {
		type Err = SegmentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once("->").ok_or(SegmentError::MissingArrow)?;
			let segment = Segment(try_point_from_str(from)?, try_point_from_str(to)?);
			let delta = [segment.1[0] - segment.0[0], segment.1[1] - segment.0[1]];
			if delta[0] != 0 && delta[1] != 0 && delta[0].abs() != delta[1].abs() {
				return Err(SegmentError::Angle)
			}
			Ok(segment)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct SegmentsError { line: usize, source: SegmentError }

	pub(super) fn try_segments_from_str(s: &str) -> Result<Vec<Segment>, SegmentsError> {
		s.trim_end().lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| SegmentsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(try_segments_from_str("0,9 -> 5,9").unwrap(), [Segment([0, 9], [5, 9])]);
		assert!(matches!(try_segments_from_str("0,0 -> 1,1\n0,0 -> 1,2"),
			Err(SegmentsError { line: 2, source: SegmentError::Angle })));
		assert!(matches!(try_segments_from_str("0,0 - 1,1"),
			Err(SegmentsError { line: 1, source: SegmentError::MissingArrow })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	assert_eq!(part1(INPUT).unwrap(), 5);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 5);
	assert_eq!(part2(INPUT).unwrap(), 12);
}
