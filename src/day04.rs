// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SIZE: usize = 5;

struct Board([[u32; SIZE]; SIZE]);

struct Bingo {
	calls: Vec<u32>,
	boards: Vec<Board>,
}

impl Board {
	/// Returns the index of the winning call, or `None` if the board never wins.
	fn winning_turn(&self, turns: &std::collections::HashMap<u32, usize>) -> Option<usize> {
		let turn = |n: &u32| turns.get(n).copied();
		let rows = self.0.iter()
			.map(|row| row.iter().map(turn).collect::<Option<Vec<_>>>()?.into_iter().max());
		let cols = (0..SIZE)
			.map(|c| self.0.iter().map(|row| turn(&row[c])).collect::<Option<Vec<_>>>()?.into_iter().max());
		rows.chain(cols).flatten().min()
	}

	fn unmarked_sum(&self, turns: &std::collections::HashMap<u32, usize>, winning_turn: usize) -> u32 {
		self.0.iter()
			.flatten()
			.filter(|&&n| turns.get(&n).map_or(true, |&t| t > winning_turn))
			.sum()
	}
}

impl Bingo {
	/// Iterates over winning boards’ `(winning turn, final score)`, in no particular order.
	fn wins(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
		use std::collections::{HashMap, hash_map::Entry};
		let mut turns = HashMap::new();
		for (t, &n) in self.calls.iter().enumerate() {
			// A number called twice only counts the first time
			if let Entry::Vacant(entry) = turns.entry(n) { entry.insert(t); }
		}
		self.boards.iter()
			.filter_map(move |board| {
				let turn = board.winning_turn(&turns)?;
				Some((turn, board.unmarked_sum(&turns, turn) * self.calls[turn]))
			})
	}
}


fn part1_impl(input_bingo: &Bingo) -> Option<u32> {
	input_bingo.wins().min_by_key(|&(turn, _)| turn).map(|(_, score)| score)
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::BingoError> {
	let bingo = parsing::try_bingo_from_str(input)?;
	part1_impl(&bingo).ok_or(parsing::BingoError::NoWinner)
}


fn part2_impl(input_bingo: &Bingo) -> Option<u32> {
	input_bingo.wins().max_by_key(|&(turn, _)| turn).map(|(_, score)| score)
}

pub(crate) fn part2(input: &str) -> Result<u32, parsing::BingoError> {
	let bingo = parsing::try_bingo_from_str(input)?;
	part2_impl(&bingo).ok_or(parsing::BingoError::NoWinner)
}


pub(crate) mod parsing {
	use std::num::ParseIntError;
	use super::{Bingo, Board, SIZE};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum BingoError {
		Empty,
		Call { column: usize, source: ParseIntError },
		Board { line: usize, source: BoardError },
		NoWinner,
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum BoardError {
		Rows(usize),
		Columns { row: usize, found: usize },
		Number { row: usize, column: usize, source: ParseIntError },
	}

	fn try_board_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Board, BoardError> {
		let mut board = [[0; SIZE]; SIZE];
		let mut rows = 0;
		for (r, line) in lines.into_iter().enumerate() {
			let row = board.get_mut(r).ok_or(BoardError::Rows(r + 1))?;
			let mut columns = 0;
			for (c, number) in line.split_whitespace().enumerate() {
				let cell = row.get_mut(c).ok_or(BoardError::Columns { row: r + 1, found: c + 1 })?;
				*cell = number.parse()
					.map_err(|e| BoardError::Number { row: r + 1, column: c + 1, source: e })?;
				columns += 1;
			}
			if columns != SIZE { return Err(BoardError::Columns { row: r + 1, found: columns }) }
			rows += 1;
		}
		if rows != SIZE { return Err(BoardError::Rows(rows)) }
		Ok(Board(board))
	}

	pub(super) fn try_bingo_from_str(s: &str) -> Result<Bingo, BingoError> {
		use itertools::Itertools as _;

		let mut lines = s.lines().enumerate();
		let (_, calls) = lines.next().ok_or(BingoError::Empty)?;
		let calls = calls.split(',')
			.enumerate()
			.map(|(c, n)| n.trim().parse().map_err(|e| BingoError::Call { column: c + 1, source: e }))
			.collect::<Result<_, _>>()?;

		let boards = lines
			.group_by(|(_, line)| line.trim().is_empty())
			.into_iter()
			.filter(|(is_blank, _)| !is_blank)
			.map(|(_, group)| {
				let group = group.collect::<Vec<_>>();
				try_board_from_lines(group.iter().map(|(_, line)| *line))
					.map_err(|e| BingoError::Board { line: group[0].0 + 1, source: e })
			})
			.collect::<Result<_, _>>()?;

		Ok(Bingo { calls, boards })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };
	assert_eq!(part1(INPUT).unwrap(), 4512);
	assert_eq!(part2(INPUT).unwrap(), 1924);
	assert!(matches!(part1("1,2\n\n1 2 3\n"),
		Err(parsing::BingoError::Board { line: 3, source: parsing::BoardError::Columns { row: 1, found: 3 } })));
}
