// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{num::ParseIntError, str::FromStr};


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct NumbersError {
	pub(crate) offset: usize,
	pub(crate) source: ParseIntError,
}

/// One number per line.
pub(crate) fn try_numbers_from_str<N>(s: &str) -> Result<Vec<N>, NumbersError>
where N: FromStr<Err = ParseIntError> {
	s.lines()
		.enumerate()
		.map(|(l, line)| line.parse()
			.map_err(|e| NumbersError { offset: l + 1, source: e }))
		.collect()
}

/// Comma-separated numbers on a single line.
pub(crate) fn try_csv_numbers_from_str<N>(s: &str) -> Result<Vec<N>, NumbersError>
where N: FromStr<Err = ParseIntError> {
	s.trim_end().split(',')
		.enumerate()
		.map(|(i, token)| token.parse()
			.map_err(|e| NumbersError { offset: i + 1, source: e }))
		.collect()
}

/// Blank-line-separated records, tolerating a trailing newline.
pub(crate) fn blank_separated(s: &str) -> impl Iterator<Item = &str> {
	s.split("\n\n")
		.map(|record| record.trim_end_matches('\n'))
		.filter(|record| !record.is_empty())
}

pub(crate) fn fold_lcm(numbers: impl IntoIterator<Item = u64>) -> u64 {
	numbers.into_iter().fold(1, num_integer::lcm)
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers() {
		assert_eq!(try_numbers_from_str::<u32>("199\n200\n208\n").unwrap(), [199, 200, 208]);
		assert_eq!(try_numbers_from_str::<u32>("199\nduck\n208").unwrap_err().offset, 2);
		assert_eq!(try_csv_numbers_from_str::<usize>("3,4,3,1,2\n").unwrap(), [3, 4, 3, 1, 2]);
		assert_eq!(try_csv_numbers_from_str::<usize>("3,,2").unwrap_err().offset, 2);
	}

	#[test]
	fn records() {
		let records = blank_separated("a\nb\n\nc\n\nd e\n").collect::<Vec<_>>();
		assert_eq!(records, ["a\nb", "c", "d e"]);
		assert_eq!(blank_separated("a").collect::<Vec<_>>(), ["a"]);
	}

	#[test]
	fn lcm() {
		assert_eq!(fold_lcm([]), 1);
		assert_eq!(fold_lcm([4, 6]), 12);
		assert_eq!(fold_lcm([7, 13, 59, 31, 19]), 3_162_341);
	}
}
