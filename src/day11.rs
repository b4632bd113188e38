// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SIZE: usize = 10;
const FLASH_LEVEL: u8 = 9;
const MAX_STEPS: usize = 100_000;

#[derive(Clone)]
struct Cavern([[u8; SIZE]; SIZE]);

impl Cavern {
	fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
		use itertools::Itertools as _;
		(x.saturating_sub(1)..=(x + 1).min(SIZE - 1))
			.cartesian_product(y.saturating_sub(1)..=(y + 1).min(SIZE - 1))
			.filter(move |&n| n != (x, y))
	}

	/// Returns the number of octopuses that flashed.
	fn step(&mut self) -> usize {
		let mut flashing = Vec::new();
		for y in 0..SIZE { for x in 0..SIZE {
			self.0[y][x] += 1;
			if self.0[y][x] > FLASH_LEVEL { flashing.push((x, y)) }
		} }

		let mut flashed = [[false; SIZE]; SIZE];
		while let Some((x, y)) = flashing.pop() {
			if std::mem::replace(&mut flashed[y][x], true) { continue }
			for (nx, ny) in Self::neighbors(x, y) {
				self.0[ny][nx] += 1;
				if self.0[ny][nx] > FLASH_LEVEL && !flashed[ny][nx] { flashing.push((nx, ny)) }
			}
		}

		let mut count = 0;
		for (level, _) in self.0.iter_mut().flatten()
			.zip(flashed.iter().flatten())
			.filter(|(_, &f)| f)
		{
			*level = 0;
			count += 1;
		}
		count
	}
}


fn part1_impl(mut input_cavern: Cavern) -> u64 {
	(0..100).map(|_| input_cavern.step() as u64).sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::CavernError> {
	parsing::try_cavern_from_str(input).map(part1_impl)
}


fn part2_impl(mut input_cavern: Cavern, max_steps: usize) -> Option<usize> {
	(1..=max_steps).find(|_| input_cavern.step() == SIZE * SIZE)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CavernError> {
	let cavern = parsing::try_cavern_from_str(input)?;
	part2_impl(cavern, MAX_STEPS).ok_or(parsing::CavernError::UNSYNCHRONIZED)
}


pub(crate) mod parsing {
	use super::{Cavern, SIZE};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum CavernErrorKind {
		Format,
		Level(char),
		/// Not all octopuses flashed on the same step within the step limit.
		Unsynchronized,
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct CavernError {
		line: usize,
		column: usize,
		kind: CavernErrorKind,
	}

	impl CavernError {
		pub(super) const UNSYNCHRONIZED: CavernError = CavernError { line: 1, column: 1, kind: CavernErrorKind::Unsynchronized };
	}

	pub(super) fn try_cavern_from_str(s: &str) -> Result<Cavern, CavernError> {
		use CavernErrorKind::*;
		let mut cavern = Cavern([[0; SIZE]; SIZE]);
		let mut lines = s.trim_end().lines();
		for (l, row) in cavern.0.iter_mut().enumerate() {
			let line = lines.next()
				.ok_or(CavernError { line: l + 1, column: 1, kind: Format })?;
			if line.len() != SIZE {
				return Err(CavernError { line: l + 1, column: line.len().min(SIZE) + 1, kind: Format })
			}
			for (c, (level, chr)) in row.iter_mut().zip(line.chars()).enumerate() {
				*level = chr.to_digit(10)
					.ok_or(CavernError { line: l + 1, column: c + 1, kind: Level(chr) })? as u8;
			}
		}
		match lines.next() {
			Some(_) => Err(CavernError { line: SIZE + 1, column: 1, kind: Format }),
			None => Ok(cavern),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };
	let mut cavern = parsing::try_cavern_from_str(INPUT).unwrap();
	assert_eq!((0..10).map(|_| cavern.step()).sum::<usize>(), 204);
	assert_eq!(part1(INPUT).unwrap(), 1656);
	assert_eq!(part1(&format!("{INPUT}\n")).unwrap(), 1656);
	assert_eq!(part2(INPUT).unwrap(), 195);
	let cavern = || parsing::try_cavern_from_str(INPUT).unwrap();
	assert_eq!(part2_impl(cavern(), 194), None);
	assert_eq!(part2_impl(cavern(), 195), Some(195));
	assert!(part1("123\n").is_err());
}
