// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Balanced base 5: digits `=`, `-`, `0`, `1`, `2` stand for -2 through 2.
fn try_decode(s: &str) -> Result<i64, parsing::SnafuError> {
	s.bytes()
		.enumerate()
		.try_fold(0, |num, (i, b)| Ok(num * 5 + match b {
			b'=' => -2,
			b'-' => -1,
			b'0'..=b'2' => (b - b'0') as i64,
			found => return Err(parsing::SnafuError { column: i + 1, found: found as char }),
		}))
}

fn encode(mut num: i64) -> String {
	use num_integer::Integer;
	if num == 0 { return "0".to_owned() }
	let mut digits = vec![];
	while num != 0 {
		let (next, digit) = (num + 2).div_mod_floor(&5);
		digits.push(match digit { 0 => b'=', 1 => b'-', d => b'0' + d as u8 - 2 });
		num = next;
	}
	digits.reverse();
	// SAFETY: `digits` only contains SNAFU digit characters
	unsafe { String::from_utf8_unchecked(digits) }
}


fn part1_impl(s: &str) -> String {
	encode(s.lines()
		.map(|line| try_decode(line).unwrap())
		.sum())
}

pub(crate) fn part1() -> String {
	part1_impl(include_str!("day25.txt"))
}

pub(crate) fn part2() -> &'static str {
	"Merry Christmas!"
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct SnafuError {
		pub(super) column: usize,
		pub(super) found: char,
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		for (snafu, num) in [
			("1=-0-2", 1747), ("12111", 906), ("2=0=", 198), ("21", 11),
			("2=01", 201), ("111", 31), ("20012", 1257), ("112", 32),
			("1=-1=", 353), ("1-12", 107), ("12", 7), ("1=", 3), ("122", 37),
		] {
			assert_eq!(try_decode(snafu).unwrap(), num);
			assert_eq!(encode(num), snafu);
		}
		assert_eq!(part1(), "2=-1=0");
		assert_eq!(try_decode(&part1()).unwrap(), 4890);
	}

	#[test]
	fn round_trips() {
		assert_eq!(encode(0), "0");
		for num in (-30..=30).chain([314159265, -314159265, i64::MAX / 3]) {
			assert_eq!(try_decode(&encode(num)).unwrap(), num, "for {num}");
		}
		for snafu in ["0", "2", "=", "-", "1=11-2", "1121-1110-1=0", "2=-=02-0----2---=0-="] {
			assert_eq!(encode(try_decode(snafu).unwrap()), snafu, "for {snafu}");
		}
		assert!(matches!(try_decode("12x1"), Err(parsing::SnafuError { column: 3, found: 'x' })));
	}
}
