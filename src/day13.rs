// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


type Dot = [u32; 2];

#[derive(Clone, Copy)]
enum Fold { Left(u32), Up(u32) }

impl Fold {
	fn apply(self, dots: &HashSet<Dot>) -> HashSet<Dot> {
		let reflect = |c: u32, n: u32| if c > n { 2 * n - c } else { c };
		dots.iter()
			.map(|&[x, y]| match self {
				Fold::Left(n) => [reflect(x, n), y],
				Fold::Up(n) => [x, reflect(y, n)],
			})
			.collect()
	}
}

struct Manual {
	dots: HashSet<Dot>,
	folds: Vec<Fold>,
}

fn render(dots: &HashSet<Dot>) -> String {
	let width = dots.iter().map(|d| d[0] + 1).max().unwrap_or(0);
	let height = dots.iter().map(|d| d[1] + 1).max().unwrap_or(0);
	let mut rendered = String::with_capacity(((width + 1) * height) as usize);
	for y in 0..height {
		rendered.extend((0..width).map(|x| if dots.contains(&[x, y]) { '#' } else { '.' }));
		rendered.push('\n');
	}
	rendered
}


fn part1_impl(input_manual: &Manual) -> usize {
	match input_manual.folds.first() {
		Some(fold) => fold.apply(&input_manual.dots).len(),
		None => input_manual.dots.len(),
	}
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ManualError> {
	parsing::try_manual_from_str(input).map(|m| part1_impl(&m))
}


fn part2_impl(input_manual: &Manual) -> String {
	let dots = input_manual.folds.iter()
		.fold(input_manual.dots.clone(), |dots, fold| fold.apply(&dots));
	render(&dots)
}

/// Returns the folded sheet as lines of `#` and `.`, to be read by eye.
pub(crate) fn part2(input: &str) -> Result<String, parsing::ManualError> {
	parsing::try_manual_from_str(input).map(|m| part2_impl(&m))
}


pub(crate) mod parsing {
	use std::{collections::HashSet, num::ParseIntError};
	use super::{Dot, Fold, Manual};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ManualErrorKind {
		MissingComma,
		Coord(ParseIntError),
		Instruction,
		Axis(String),
		Beyond { fold: u32 },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct ManualError { line: usize, kind: ManualErrorKind }

	fn try_dot_from_str(s: &str) -> Result<Dot, ManualErrorKind> {
		use ManualErrorKind::{Coord, MissingComma};
		let (x, y) = s.split_once(',').ok_or(MissingComma)?;
		Ok([x.trim().parse().map_err(Coord)?, y.trim().parse().map_err(Coord)?])
	}

	fn try_fold_from_str(s: &str) -> Result<Fold, ManualErrorKind> {
		use ManualErrorKind::{Axis, Coord, Instruction};
		let (axis, n) = s.strip_prefix("fold along ")
			.and_then(|f| f.split_once('='))
			.ok_or(Instruction)?;
		let n = n.trim().parse().map_err(Coord)?;
		match axis {
			"x" => Ok(Fold::Left(n)),
			"y" => Ok(Fold::Up(n)),
			_ => Err(Axis(axis.to_owned())),
		}
	}

	pub(super) fn try_manual_from_str(s: &str) -> Result<Manual, ManualError> {
		let mut lines = s.lines().enumerate();
		let dots: HashSet<Dot> = lines.by_ref()
			.take_while(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_dot_from_str(line)
				.map_err(|kind| ManualError { line: l + 1, kind }))
			.collect::<Result<_, _>>()?;
		let folds = lines
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_fold_from_str(line)
				.map(|fold| (l + 1, fold))
				.map_err(|kind| ManualError { line: l + 1, kind }))
			.collect::<Result<Vec<_>, _>>()?;

		// A fold maps `c` to `2n - c`, which must not go below zero.
		let mut bounds = dots.iter().fold([0, 0], |b: [u32; 2], d: &Dot| [b[0].max(d[0]), b[1].max(d[1])]);
		for &(line, fold) in &folds {
			let (bound, n) = match fold {
				Fold::Left(n) => (&mut bounds[0], n),
				Fold::Up(n) => (&mut bounds[1], n),
			};
			if *bound > 2 * n {
				return Err(ManualError { line, kind: ManualErrorKind::Beyond { fold: n } })
			}
			*bound = (*bound).min(n);
		}
		let manual = Manual { dots, folds: folds.into_iter().map(|(_, fold)| fold).collect() };
		Ok(manual)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };
	assert_eq!(part1(INPUT).unwrap(), 17);
	assert_eq!(part2(INPUT).unwrap(), indoc::indoc! { "
		#####
		#...#
		#...#
		#...#
		#####
	" });
	// Rendering starts at the origin, even when no dot lies on it
	assert_eq!(render(&HashSet::from([[2, 1]])), "...\n..#\n");
	assert!(part1("0,0\n\nfold along z=1").is_err());
	assert!(part1("0,9\n\nfold along y=2").is_err());
}
