// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Seat id; the upper seven bits are the row, the lower three the column.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Seat(u16);

impl Seat {
	#[cfg(test)]
	fn row(&self) -> u16 { self.0 >> 3 }

	#[cfg(test)]
	fn column(&self) -> u16 { self.0 & 0b111 }

	#[cfg(test)]
	fn encoded(&self) -> String {
		(0..10).rev()
			.map(|bit| match (bit >= 3, self.0 >> bit & 1) {
				(true, 0) => 'F', (true, _) => 'B',
				(false, 0) => 'L', (false, _) => 'R',
			})
			.collect()
	}
}


fn input_seats_from_str(s: &str) -> Vec<Seat> {
	parsing::try_seats_from_str(s).unwrap()
}

fn part1_impl(seats: &[Seat]) -> u16 {
	seats.iter().map(|seat| seat.0).max()
		.expect("At least one boarding pass")
}

fn part2_impl(seats: &[Seat]) -> u16 {
	use itertools::Itertools;
	seats.iter().map(|seat| seat.0).sorted_unstable().tuple_windows()
		.find_map(|(below, above)| (above == below + 2).then(|| below + 1))
		.expect("A single-seat gap somewhere in the middle of the plane")
}

pub(crate) fn part1() -> u16 {
	part1_impl(&input_seats_from_str(include_str!("day05.txt")))
}

pub(crate) fn part2() -> u16 {
	part2_impl(&input_seats_from_str(include_str!("day05.txt")))
}


mod parsing {
	use super::Seat;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SeatError {
		Len(usize),
		Char { column: usize, found: char },
	}

	impl TryFrom<&str> for Seat {
		type Error = SeatError;
		fn try_from(s: &str) -> Result<Self, Self::Error> {
			if s.len() != 10 { return Err(SeatError::Len(s.len())) }
			s.chars()
				.enumerate()
				.try_fold(0, |id, (i, c)| Ok(id << 1 | match (i < 7, c) {
					(true, 'F') | (false, 'L') => 0,
					(true, 'B') | (false, 'R') => 1,
					_ => return Err(SeatError::Char { column: i + 1, found: c }),
				}))
				.map(Seat)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct SeatsError {
		line: usize,
		source: SeatError,
	}

	pub(super) fn try_seats_from_str(s: &str) -> Result<Vec<Seat>, SeatsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Seat::try_from(line)
				.map_err(|e| SeatsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	for (pass, id, row, column) in [
		("FBFBBFFRLR", 357, 44, 5),
		("BFFFBBFRRR", 567, 70, 7),
		("FFFBBBFRRR", 119, 14, 7),
		("BBFFBBFRLL", 820, 102, 4),
	] {
		let seat = Seat::try_from(pass).unwrap();
		assert_eq!((seat.0, seat.row(), seat.column()), (id, row, column));
		assert_eq!(seat.encoded(), pass);
	}
	assert!(matches!(Seat::try_from("FBFBBFFRLX"),
		Err(parsing::SeatError::Char { column: 10, found: 'X' })));
	assert_eq!(part1(), 170);
	assert_eq!(part2(), 123);
}
