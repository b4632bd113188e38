// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Element = u8;
type Pair = [Element; 2];

struct Polymer {
	first: Element,
	pairs: HashMap<Pair, u64>,
}

struct Manual {
	template: Vec<Element>,
	rules: HashMap<Pair, Element>,
}

impl Manual {
	fn polymer(&self) -> Option<Polymer> {
		use itertools::Itertools as _;
		Some(Polymer {
			first: *self.template.first()?,
			pairs: self.template.iter().copied().tuple_windows().map(|(l, r)| [l, r]).counts()
				.into_iter().map(|(p, n)| (p, n as u64)).collect(),
		})
	}

	fn step(&self, polymer: &mut Polymer) {
		let mut pairs = HashMap::with_capacity(polymer.pairs.len() * 2);
		for (&[l, r], &n) in &polymer.pairs {
			match self.rules.get(&[l, r]) {
				Some(&m) => {
					*pairs.entry([l, m]).or_default() += n;
					*pairs.entry([m, r]).or_default() += n;
				}
				None => *pairs.entry([l, r]).or_default() += n,
			}
		}
		polymer.pairs = pairs;
	}
}

impl Polymer {
	/// Counts each pair's right element, plus the first element.
	fn element_counts(&self) -> HashMap<Element, u64> {
		let mut counts = HashMap::from([(self.first, 1)]);
		for (&[_, r], &n) in &self.pairs { *counts.entry(r).or_default() += n }
		counts
	}
}


fn part1and2_impl<const STEPS: usize>(input_manual: &Manual) -> u64 {
	use itertools::{Itertools as _, MinMaxResult::*};
	let Some(mut polymer) = input_manual.polymer() else { return 0 };
	for _ in 0..STEPS { input_manual.step(&mut polymer) }
	match polymer.element_counts().into_values().minmax() {
		MinMax(min, max) => max - min,
		NoElements | OneElement(_) => 0,
	}
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::ManualError> {
	parsing::try_manual_from_str(input).map(|m| part1and2_impl::<10>(&m))
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::ManualError> {
	parsing::try_manual_from_str(input).map(|m| part1and2_impl::<40>(&m))
}


pub(crate) mod parsing {
	use super::{Element, Manual, Pair};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ManualErrorKind {
		Symbol(char),
		MissingArrow,
		PairLen,
		InsertionLen,
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct ManualError { line: usize, kind: ManualErrorKind }

	fn try_elements_from_str(s: &str) -> Result<Vec<Element>, ManualErrorKind> {
		s.chars()
			.map(|chr| if chr.is_ascii_uppercase() { Ok(chr as u8) } else { Err(ManualErrorKind::Symbol(chr)) })
			.collect()
	}

	fn try_rule_from_str(s: &str) -> Result<(Pair, Element), ManualErrorKind> {
		use ManualErrorKind::{InsertionLen, MissingArrow, PairLen};
		let (pair, insertion) = s.split_once("->").ok_or(MissingArrow)?;
		let pair = try_elements_from_str(pair.trim())?.try_into().map_err(|_| PairLen)?;
		match try_elements_from_str(insertion.trim())?[..] {
			[insertion] => Ok((pair, insertion)),
			_ => Err(InsertionLen),
		}
	}

	pub(super) fn try_manual_from_str(s: &str) -> Result<Manual, ManualError> {
		let mut lines = s.lines().enumerate();
		let template = lines.next().map_or(Ok(Vec::new()), |(_, line)| try_elements_from_str(line.trim()))
			.map_err(|kind| ManualError { line: 1, kind })?;
		let rules = lines
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_rule_from_str(line)
				.map_err(|kind| ManualError { line: l + 1, kind }))
			.collect::<Result<_, _>>()?;
		Ok(Manual { template, rules })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BH -> H
		NC -> B
		NB -> B
		BN -> B
		BB -> N
		BC -> B
		CC -> N
		CN -> C
	" };
	let manual = parsing::try_manual_from_str(INPUT).unwrap();
	let mut polymer = manual.polymer().unwrap();
	for _ in 0..5 { manual.step(&mut polymer) }
	assert_eq!(polymer.pairs.values().sum::<u64>() + 1, 97);
	assert_eq!(part1(INPUT).unwrap(), 1588);
	assert_eq!(part2(INPUT).unwrap(), 2188189693529);
	assert!(part1("NN\n\nNN - C").is_err());
}
