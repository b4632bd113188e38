// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Display, path::PathBuf, process::ExitCode};

use clap::Parser;


macro_rules! days {
	( $( $num:literal ),* $(,)? ) => { paste::paste! {
		$( mod [<day $num>]; )*

		const DAYS: &[u8] = &[ $( $num ),* ];

		fn solve(day: u8, part: Part, input: &str) -> Result<String, Error> {
			fn answer<T: Display, E: std::fmt::Debug>(day: u8, part: Part, res: Result<T, E>) -> Result<String, Error> {
				res.map(|a| a.to_string())
					.map_err(|e| Error::Solve { day, part: part.num(), detail: format!("{e:?}") })
			}
			match (day, part) {
				$(
					(d, Part::One) if d == $num => answer(day, part, [<day $num>]::part1(input)),
					(d, Part::Two) if d == $num => answer(day, part, [<day $num>]::part2(input)),
				)*
				_ => Err(Error::UnknownDay(day)),
			}
		}
	} };
}

days!(01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17);


#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Part {
	#[value(name = "1")]
	One,
	#[value(name = "2")]
	Two,
}

impl Part {
	fn num(self) -> u8 {
		match self { Part::One => 1, Part::Two => 2 }
	}
}


#[derive(Debug, thiserror::Error)]
enum Error {
	#[error("no solver for day {0}")]
	UnknownDay(u8),

	#[error("could not read input {path:?}: {source}")]
	Io { path: PathBuf, source: std::io::Error },

	#[error("day {day} part {part}: {detail}")]
	Solve { day: u8, part: u8, detail: String },
}


/// Solves a day of Advent of Code 2021.
#[derive(Parser)]
#[command(name = "advent21")]
struct Cli {
	/// Day to solve (1–17)
	day: u8,

	/// Only solve this part (both by default)
	#[arg(short, long, value_enum)]
	part: Option<Part>,

	/// Puzzle input (`inputs/dayNN.txt` by default)
	#[arg(short, long)]
	input: Option<PathBuf>,
}

impl Cli {
	fn input_path(&self) -> PathBuf {
		self.input.clone()
			.unwrap_or_else(|| PathBuf::from(format!("inputs/day{:02}.txt", self.day)))
	}

	fn parts(&self) -> &'static [Part] {
		match self.part {
			Some(Part::One) => &[Part::One],
			Some(Part::Two) => &[Part::Two],
			None => &[Part::One, Part::Two],
		}
	}
}


fn init_tracing() {
	use tracing_subscriber::{prelude::*, EnvFilter};
	let filter_layer = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::registry()
		.with(filter_layer)
		.with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
		.init();
}

fn run(cli: &Cli) -> Result<(), Error> {
	if !DAYS.contains(&cli.day) { return Err(Error::UnknownDay(cli.day)) }

	let path = cli.input_path();
	let input = std::fs::read_to_string(&path)
		.map_err(|source| Error::Io { path: path.clone(), source })?;
	tracing::debug!(?path, bytes = input.len(), "read input");

	for &part in cli.parts() {
		let _span = tracing::info_span!("solve", day = cli.day, part = part.num()).entered();
		let start = std::time::Instant::now();
		let answer = solve(cli.day, part, &input)?;
		tracing::debug!(elapsed = ?start.elapsed(), "solved");
		println!("Day {} part {}: {answer}", cli.day, part.num());
	}
	Ok(())
}

fn main() -> ExitCode {
	init_tracing();
	let cli = Cli::parse();
	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			tracing::error!("{e}");
			ExitCode::FAILURE
		}
	}
}
