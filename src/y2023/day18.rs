// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Dir { Up, Down, Left, Right }

#[derive(Clone, Copy)]
struct Step {
	dir: Dir,
	len: i64,
}

/// One dig instruction: the literal direction and distance, plus the
/// alternate pair hidden in the hexadecimal “color” code.
struct Instr {
	literal: Step,
	hexed: Step,
}


/// Area enclosed by the dug loop, trench included: the shoelace formula
/// yields the interior up to the trench’s own one-meter width, which the
/// half-perimeter-plus-one term restores (Pick’s theorem, rearranged).
fn area(steps: impl Iterator<Item = Step>) -> i64 {
	let (mut twice_area, mut perimeter, mut pos) = (0, 0, [0i64; 2]);
	for Step { dir, len } in steps {
		let next = match dir {
			Dir::Up => [pos[0], pos[1] - len],
			Dir::Down => [pos[0], pos[1] + len],
			Dir::Left => [pos[0] - len, pos[1]],
			Dir::Right => [pos[0] + len, pos[1]],
		};
		twice_area += pos[0] * next[1] - next[0] * pos[1];
		perimeter += len;
		pos = next;
	}
	assert_eq!(pos, [0; 2], "The dig plan should loop back to the start!");
	twice_area.abs() / 2 + perimeter / 2 + 1
}


fn input_instrs_from_str(s: &str) -> Vec<Instr> {
	parsing::try_instrs_from_str(s).unwrap()
}

fn part1_impl(instrs: &[Instr]) -> i64 {
	area(instrs.iter().map(|instr| instr.literal))
}

fn part2_impl(instrs: &[Instr]) -> i64 {
	area(instrs.iter().map(|instr| instr.hexed))
}

pub(crate) fn part1() -> i64 {
	part1_impl(&input_instrs_from_str(include_str!("day18.txt")))
}

pub(crate) fn part2() -> i64 {
	part2_impl(&input_instrs_from_str(include_str!("day18.txt")))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Dir, Instr, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstrError {
		Format,
		Dir(char),
		Len(ParseIntError),
		Hex(ParseIntError),
		HexDir(u8),
	}

	impl TryFrom<&str> for Instr {
		type Error = InstrError;
		fn try_from(s: &str) -> Result<Self, Self::Error> {
			let mut tokens = s.split(' ');
			let (Some(dir), Some(len), Some(color), None) =
				(tokens.next(), tokens.next(), tokens.next(), tokens.next())
				else { return Err(InstrError::Format) };

			let literal = Step {
				dir: match dir {
					"U" => Dir::Up, "D" => Dir::Down, "L" => Dir::Left, "R" => Dir::Right,
					_ => return Err(InstrError::Dir(dir.chars().next().unwrap_or(' '))),
				},
				len: len.parse().map_err(InstrError::Len)?,
			};

			let hex = color.strip_prefix("(#")
				.and_then(|color| color.strip_suffix(')'))
				.filter(|hex| hex.len() == 6 && hex.is_ascii())
				.ok_or(InstrError::Format)?;
			let hexed = Step {
				dir: match hex.as_bytes()[5] {
					b'0' => Dir::Right, b'1' => Dir::Down, b'2' => Dir::Left, b'3' => Dir::Up,
					found => return Err(InstrError::HexDir(found)),
				},
				len: i64::from_str_radix(&hex[..5], 16).map_err(InstrError::Hex)?,
			};

			Ok(Instr { literal, hexed })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct InstrsError {
		line: usize,
		source: InstrError,
	}

	pub(super) fn try_instrs_from_str(s: &str) -> Result<Vec<Instr>, InstrsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Instr::try_from(line)
				.map_err(|e| InstrsError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		let square = input_instrs_from_str("R 2 (#000020)\nD 2 (#000021)\nL 2 (#000022)\nU 2 (#000023)");
		assert_eq!(part1_impl(&square), 9);
		assert_eq!(part2_impl(&square), 9);
		assert_eq!(part1(), 62);
		assert_eq!(part2(), 952408144115);
	}
}
