// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use rayon::prelude::*;


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Target { x: [i64; 2], y: [i64; 2] }

type Velocity = [i64; 2];

impl Target {
	fn contains(&self, pos: [i64; 2]) -> bool {
		(self.x[0]..=self.x[1]).contains(&pos[0]) && (self.y[0]..=self.y[1]).contains(&pos[1])
	}

	/// Returns the highest y reached if the probe hits.
	fn shoot(&self, mut vel: Velocity) -> Option<i64> {
		let (mut pos, mut highest_y) = ([0, 0], 0);
		while pos[0] <= self.x[1] && (pos[1] >= self.y[0] || vel[1] >= 0) {
			pos = [pos[0] + vel[0], pos[1] + vel[1]];
			vel = [vel[0] - vel[0].signum(), vel[1] - 1];
			highest_y = highest_y.max(pos[1]);
			if self.contains(pos) { return Some(highest_y) }
			if vel[0] == 0 && pos[0] < self.x[0] { return None }
		}
		None
	}

	/// Every initial velocity that hits, with the highest y it reaches.
	fn hits(&self) -> Vec<(Velocity, i64)> {
		use num_integer::Roots as _;

		// Slower shots stall before reaching the near edge.
		let min_vx = ((2 * self.x[0]).sqrt() - 1).max(0);
		// Faster shots (up or down) pass the target between two steps.
		let max_vy = self.y[0].abs() + 1;

		let hits = (min_vx..=self.x[1])
			.into_par_iter()
			.flat_map_iter(|vx| (-max_vy..=max_vy)
				.filter_map(move |vy| self.shoot([vx, vy]).map(|h| ([vx, vy], h))))
			.collect::<Vec<_>>();
		tracing::debug!(hits = hits.len(), min_vx, max_vy, "searched velocities");
		hits
	}
}


fn part1_impl(input_target: &Target) -> Option<i64> {
	input_target.hits().into_iter().map(|(_, h)| h).max()
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::TargetError> {
	let target = parsing::try_target_from_str(input)?;
	part1_impl(&target).ok_or(parsing::TargetError::Unreachable)
}


fn part2_impl(input_target: &Target) -> usize {
	input_target.hits().len()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::TargetError> {
	parsing::try_target_from_str(input).map(|t| part2_impl(&t))
}


pub(crate) mod parsing {
	use std::num::ParseIntError;
	use super::Target;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum TargetError {
		Format,
		Coord(ParseIntError),
		/// Only targets ahead of and below the launcher are supported.
		Position,
		Unreachable,
	}

	fn try_range_from_str(s: &str, axis: &str) -> Result<[i64; 2], TargetError> {
		use TargetError::*;
		let (from, to) = s.trim()
			.strip_prefix(axis)
			.and_then(|r| r.strip_prefix('='))
			.and_then(|r| r.split_once(".."))
			.ok_or(Format)?;
		let range: [i64; 2] = [from.parse().map_err(Coord)?, to.parse().map_err(Coord)?];
		Ok([range[0].min(range[1]), range[0].max(range[1])])
	}

	pub(super) fn try_target_from_str(s: &str) -> Result<Target, TargetError> {
		let (x, y) = s.trim()
			.strip_prefix("target area:")
			.and_then(|r| r.split_once(','))
			.ok_or(TargetError::Format)?;
		let target = Target { x: try_range_from_str(x, "x")?, y: try_range_from_str(y, "y")? };
		if target.x[0] < 0 || target.y[1] >= 0 { return Err(TargetError::Position) }
		Ok(target)
	}

	#[test]
	fn tests() {
		assert_eq!(try_target_from_str("target area: x=30..20, y=-5..-10\n").unwrap(),
			Target { x: [20, 30], y: [-10, -5] });
		assert!(matches!(try_target_from_str("target area: x=20..30, y=5..10"), Err(TargetError::Position)));
		assert!(matches!(try_target_from_str("x=20..30, y=-10..-5"), Err(TargetError::Format)));
	}
}


#[test]
fn tests() {
	const INPUT: &str = "target area: x=20..30, y=-10..-5";
	let target = parsing::try_target_from_str(INPUT).unwrap();
	assert_eq!(target.shoot([7, 2]), Some(3));
	assert_eq!(target.shoot([6, 9]), Some(45));
	assert_eq!(target.shoot([17, -4]), None);
	assert_eq!(part1(INPUT).unwrap(), 45);
	assert_eq!(part2(INPUT).unwrap(), 112);
}
