// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const BASIN_EDGE: u8 = 9;

struct Heightmap {
	heights: Vec<u8>,
	width: usize,
}

impl Heightmap {
	fn adjacent_positions(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (width, len) = (self.width, self.heights.len());
		let (x, y) = (pos % width, pos / width);
		[
			(y > 0).then(|| pos - width),
			(x > 0).then(|| pos - 1),
			(x + 1 < width).then(|| pos + 1),
			(pos + width < len).then(|| pos + width),
		].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len())
			.filter(|&pos| self.adjacent_positions(pos)
				.all(|adj| self.heights[adj] > self.heights[pos]))
	}

	fn basin_size(&self, low_point: usize) -> usize {
		use std::collections::HashSet;
		let mut seen = HashSet::new();
		let mut stack = vec![low_point];
		while let Some(pos) = stack.pop() {
			if !seen.insert(pos) { continue }
			stack.extend(self.adjacent_positions(pos)
				.filter(|&adj| self.heights[adj] != BASIN_EDGE && !seen.contains(&adj)));
		}
		seen.len()
	}
}


fn part1_impl(input_map: &Heightmap) -> u32 {
	input_map.low_points()
		.map(|pos| u32::from(input_map.heights[pos]) + 1)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::HeightmapError> {
	parsing::try_heightmap_from_str(input).map(|m| part1_impl(&m))
}


fn part2_impl(input_map: &Heightmap) -> usize {
	use itertools::Itertools as _;
	input_map.low_points()
		.map(|pos| input_map.basin_size(pos))
		.sorted_unstable_by(|l, r| r.cmp(l))
		.take(3)
		.product()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::HeightmapError> {
	parsing::try_heightmap_from_str(input).map(|m| part2_impl(&m))
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum HeightmapErrorKind {
		Format,
		Height(char),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct HeightmapError {
		line: usize,
		column: usize,
		kind: HeightmapErrorKind,
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapErrorKind::*;
			let s = s.trim_end();
			let width = s.lines().next().map_or(0, str::len);
			if width == 0 { return Err(HeightmapError { line: 1, column: 1, kind: Format }) }
			let mut heights = Vec::with_capacity(width * width);
			for (l, line) in s.lines().enumerate() {
				if line.len() != width {
					return Err(HeightmapError { line: l + 1, column: line.len().min(width) + 1, kind: Format })
				}
				for (c, chr) in line.chars().enumerate() {
					let height = chr.to_digit(10)
						.ok_or(HeightmapError { line: l + 1, column: c + 1, kind: Height(chr) })?;
					heights.push(height as u8);
				}
			}
			Ok(Heightmap { heights, width })
		}
	}

	pub(super) fn try_heightmap_from_str(s: &str) -> Result<Heightmap, HeightmapError> {
		s.parse()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	assert_eq!(part1(INPUT).unwrap(), 15);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 15);
	assert_eq!(part2(INPUT).unwrap(), 1134);
	assert!(part1("219\n39x\n").is_err());
}
