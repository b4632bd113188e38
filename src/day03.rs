// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Report {
	numbers: Vec<u32>,
	width: usize,
}

impl Report {
	fn bit(number: u32, column: usize, width: usize) -> bool {
		number >> (width - 1 - column) & 1 == 1
	}

	/// Counts `(ones, zeros)` in `column`.
	fn bit_counts<'a>(numbers: impl IntoIterator<Item = &'a u32>, column: usize, width: usize) -> (usize, usize) {
		numbers.into_iter()
			.fold((0, 0), |(ones, zeros), &n| if Self::bit(n, column, width) {
				(ones + 1, zeros)
			} else {
				(ones, zeros + 1)
			})
	}

	/// Keeps filtering on one bit criterion per column, left to right, until one number remains.
	/// A column whose candidates all share the same bit leaves them untouched.
	fn rating(&self, keep_prevailing: bool) -> u32 {
		let mut candidates = self.numbers.clone();
		for column in 0..self.width {
			if candidates.len() <= 1 { break }
			let (ones, zeros) = Self::bit_counts(&candidates, column, self.width);
			if ones == 0 || zeros == 0 { continue }
			let keep = (ones >= zeros) == keep_prevailing;
			candidates.retain(|&n| Self::bit(n, column, self.width) == keep);
		}
		candidates[0]
	}
}


fn part1_impl(input_report: &Report) -> u32 {
	let gamma = (0..input_report.width)
		.fold(0, |acc, column| {
			// Ties count towards zero
			let (ones, zeros) = Report::bit_counts(&input_report.numbers, column, input_report.width);
			acc << 1 | u32::from(ones > zeros)
		});
	let epsilon = !gamma & ((1 << input_report.width) - 1);
	gamma * epsilon
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::ReportError> {
	parsing::try_report_from_str(input).map(|r| part1_impl(&r))
}


fn part2_impl(input_report: &Report) -> u32 {
	let oxygen = input_report.rating(true);
	let co2 = input_report.rating(false);
	oxygen * co2
}

pub(crate) fn part2(input: &str) -> Result<u32, parsing::ReportError> {
	parsing::try_report_from_str(input).map(|r| part2_impl(&r))
}


pub(crate) mod parsing {
	use super::Report;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ReportError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Bit { line: usize, column: usize, found: char },
	}

	pub(super) fn try_report_from_str(s: &str) -> Result<Report, ReportError> {
		use ReportError::*;
		let s = s.trim_end();
		let width = s.lines().next().map(str::len).filter(|&w| w > 0 && w < 32).ok_or(Empty)?;
		let numbers = s.lines()
			.enumerate()
			.map(|(l, line)| {
				if line.len() != width { return Err(Width { line: l + 1, found: line.len(), expected: width }) }
				line.chars()
					.enumerate()
					.try_fold(0, |acc, (c, chr)| match chr {
						'0' => Ok(acc << 1),
						'1' => Ok(acc << 1 | 1),
						found => Err(Bit { line: l + 1, column: c + 1, found }),
					})
			})
			.collect::<Result<_, _>>()?;
		Ok(Report { numbers, width })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };
	assert_eq!(part1(INPUT).unwrap(), 198);
	assert_eq!(part2(INPUT).unwrap(), 230);
	assert_eq!(part1(&format!("{INPUT}\n\n")).unwrap(), 198);

	// Gamma 0b10, epsilon 0b01 (the tie in the second column goes to zero)
	assert_eq!(part1("10\n11\n").unwrap(), 2);
	// Every candidate shares the first bit, so only the second column filters
	assert_eq!(part2("10\n11\n").unwrap(), 0b11 * 0b10);
	assert_eq!(part2("11\n11\n").unwrap(), 0b11 * 0b11);
	assert!(matches!(part1("0101\n011"), Err(parsing::ReportError::Width { line: 2, .. })));
	assert!(matches!(part2("01x1"), Err(parsing::ReportError::Bit { column: 3, .. })));
}
