// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const TILES: usize = 5;

struct Cavern {
	risks: Vec<u8>,
	width: usize,
}

impl Cavern {
	fn height(&self) -> usize {
		self.risks.len() / self.width
	}

	/// Repeats the cavern `n`×`n` times. Each tile right or down adds 1 to
	/// the risk levels, wrapping from 9 back to 1.
	fn tiled(&self, n: usize) -> Cavern {
		let (width, height) = (self.width * n, self.height() * n);
		let risks = (0..width * height)
			.map(|pos| {
				let (x, y) = (pos % width, pos / width);
				let (tx, ty) = (x / self.width, y / self.height());
				let risk = self.risks[(y % self.height()) * self.width + x % self.width] as usize;
				((risk - 1 + tx + ty) % 9 + 1) as u8
			})
			.collect();
		Cavern { risks, width }
	}

	/// Lowest total risk from the top left to the bottom right. The risk of
	/// the starting position is not counted.
	fn lowest_total_risk(&self) -> Option<u64> {
		use std::collections::BinaryHeap;

		// Dijkstra

		#[derive(PartialEq, Eq)]
		struct State { pos: usize, risk: u64 }

		impl Ord for State {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				other.risk.cmp(&self.risk).then_with(|| self.pos.cmp(&other.pos))
			}
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		let (width, len) = (self.width, self.risks.len());
		let target = len.checked_sub(1)?;

		let mut heap = BinaryHeap::new();
		heap.push(State { pos: 0, risk: 0 });
		let mut risks = vec![None; len];
		let mut visited = 0_usize;

		while let Some(state) = heap.pop() {
			if let Some(risk) = risks[state.pos] { if state.risk >= risk { continue } }
			risks[state.pos] = Some(state.risk);
			visited += 1;
			if state.pos == target { break }

			let (x, pos) = (state.pos % width, state.pos);
			let adjacent = [
				(pos >= width).then(|| pos - width),
				(x > 0).then(|| pos - 1),
				(x + 1 < width).then(|| pos + 1),
				(pos + width < len).then(|| pos + width),
			];
			for next_pos in adjacent.into_iter().flatten() {
				let risk = state.risk + u64::from(self.risks[next_pos]);
				if matches!(risks[next_pos], Some(known) if known <= risk) { continue }
				heap.push(State { pos: next_pos, risk });
			}
		}

		tracing::debug!(visited, len, "searched cavern");
		risks[target]
	}
}


fn part1_impl(input_cavern: &Cavern) -> Option<u64> {
	input_cavern.lowest_total_risk()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::CavernError> {
	let cavern = parsing::try_cavern_from_str(input)?;
	part1_impl(&cavern).ok_or(parsing::CavernError::EMPTY)
}


fn part2_impl(input_cavern: &Cavern) -> Option<u64> {
	input_cavern.tiled(TILES).lowest_total_risk()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::CavernError> {
	let cavern = parsing::try_cavern_from_str(input)?;
	part2_impl(&cavern).ok_or(parsing::CavernError::EMPTY)
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::Cavern;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum CavernErrorKind {
		Format,
		Risk(char),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct CavernError {
		line: usize,
		column: usize,
		kind: CavernErrorKind,
	}

	impl CavernError {
		pub(super) const EMPTY: CavernError = CavernError { line: 1, column: 1, kind: CavernErrorKind::Format };
	}

	impl FromStr for Cavern {
		type Err = CavernError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use CavernErrorKind::*;
			let s = s.trim_end();
			let width = s.lines().next().map_or(0, str::len);
			if width == 0 { return Err(CavernError::EMPTY) }
			let mut risks = Vec::new();
			for (l, line) in s.lines().enumerate() {
				if line.len() != width {
					return Err(CavernError { line: l + 1, column: line.len().min(width) + 1, kind: Format })
				}
				for (c, chr) in line.chars().enumerate() {
					match chr.to_digit(10) {
						Some(risk @ 1..=9) => risks.push(risk as u8),
						_ => return Err(CavernError { line: l + 1, column: c + 1, kind: Risk(chr) }),
					}
				}
			}
			Ok(Cavern { risks, width })
		}
	}

	pub(super) fn try_cavern_from_str(s: &str) -> Result<Cavern, CavernError> {
		s.parse()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };
	assert_eq!(part1(INPUT).unwrap(), 40);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 40);
	assert_eq!(part2(INPUT).unwrap(), 315);

	let cavern = parsing::try_cavern_from_str("8").unwrap().tiled(TILES);
	assert_eq!(cavern.risks[..TILES], [8, 9, 1, 2, 3]);
	assert_eq!(cavern.risks[TILES * TILES - 1], 7);
	assert_eq!(part1("7").unwrap(), 0);
	assert!(part1("12\n3").is_err());
}
