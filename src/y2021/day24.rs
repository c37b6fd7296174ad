// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DIGITS: usize = 14;
const BASE: i64 = 26;


/// One 18-instruction block of the serial-validation program. Each block
/// reads one digit and folds it into `z`, which behaves as a stack of
/// base-26 digits: `pops` blocks drop the top entry, and a failed `check`
/// pushes `digit + offset`.
#[derive(Clone, Copy)]
struct Block {
	pops: bool,
	check: i64,
	offset: i64,
}

impl Block {
	fn step(&self, z: i64, digit: i64) -> i64 {
		let matches = z % BASE + self.check == digit;
		let z = if self.pops { z / BASE } else { z };
		if matches { z } else { z * BASE + digit + self.offset }
	}
}


/// Depth-first search over all digit choices, memoized on block index and
/// accumulator: distinct digit prefixes funnel into few distinct `z` values,
/// which collapses the otherwise exponential space. Digits are tried in the
/// order yielded by `digits`, so the first full serial found is the extreme
/// one under that preference.
fn find_serial(blocks: &[Block; DIGITS], digits: impl Iterator<Item = i64> + Clone) -> Option<u64> {
	use std::collections::HashMap;

	// Blocks can only shrink `z` by popping, so any `z` at or above this
	// bound can no longer reach zero
	let mut bounds = [0i64; DIGITS + 1];
	bounds[DIGITS] = 1;
	for (i, block) in blocks.iter().enumerate().rev() {
		bounds[i] = bounds[i + 1] * if block.pops { BASE } else { 1 };
	}

	fn search(
		blocks: &[Block; DIGITS],
		bounds: &[i64; DIGITS + 1],
		digits: &(impl Iterator<Item = i64> + Clone),
		memo: &mut HashMap<(usize, i64), Option<u64>>,
		i: usize,
		z: i64,
	) -> Option<u64> {
		if z >= bounds[i] { return None }
		if i == DIGITS { return Some(0) }
		if let Some(&known) = memo.get(&(i, z)) { return known }
		let found = digits.clone().find_map(|digit| {
			search(blocks, bounds, digits, memo, i + 1, blocks[i].step(z, digit))
				.map(|suffix| digit as u64 * 10u64.pow((DIGITS - 1 - i) as u32) + suffix)
		});
		memo.insert((i, z), found);
		found
	}

	search(blocks, &bounds, &digits, &mut HashMap::new(), 0, 0)
}

/// Runs the program as written, digit by digit.
fn accepts(blocks: &[Block; DIGITS], serial: u64) -> bool {
	let mut digits = [0; DIGITS];
	let mut serial = serial;
	for digit in digits.iter_mut().rev() {
		*digit = (serial % 10) as i64;
		serial /= 10;
	}
	serial == 0
		&& digits.iter().all(|&d| d >= 1)
		&& digits.iter()
			.zip(blocks)
			.fold(0, |z, (&digit, block)| block.step(z, digit)) == 0
}


pub(crate) fn part1() -> u64 {
	let blocks = parsing::try_blocks_from_str(include_str!("day24.txt")).unwrap();
	find_serial(&blocks, (1..=9).rev()).expect("A largest valid serial number")
}

pub(crate) fn part2() -> u64 {
	let blocks = parsing::try_blocks_from_str(include_str!("day24.txt")).unwrap();
	find_serial(&blocks, 1..=9).expect("A smallest valid serial number")
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Block, DIGITS};

	const BLOCK_LINES: usize = 18;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BlocksError {
		Len { lines: usize },
		Shape { line: usize, expected: &'static str },
		Operand { line: usize, source: ParseIntError },
	}

	/// Extracts the three per-block constants, checking the fixed shape of
	/// the instructions that carry them.
	pub(super) fn try_blocks_from_str(s: &str) -> Result<[Block; DIGITS], BlocksError> {
		let lines = s.lines().collect::<Vec<_>>();
		if lines.len() != DIGITS * BLOCK_LINES {
			return Err(BlocksError::Len { lines: lines.len() })
		}

		let operand = |block: usize, offset: usize, prefix: &'static str| {
			let l = block * BLOCK_LINES + offset;
			lines[l].strip_prefix(prefix)
				.ok_or(BlocksError::Shape { line: l + 1, expected: prefix })?
				.parse::<i64>()
				.map_err(|e| BlocksError::Operand { line: l + 1, source: e })
		};

		let mut blocks = [Block { pops: false, check: 0, offset: 0 }; DIGITS];
		for (b, block) in blocks.iter_mut().enumerate() {
			if lines[b * BLOCK_LINES] != "inp w" {
				return Err(BlocksError::Shape { line: b * BLOCK_LINES + 1, expected: "inp w" })
			}
			block.pops = match operand(b, 4, "div z ")? {
				1 => false,
				26 => true,
				_ => return Err(BlocksError::Shape { line: b * BLOCK_LINES + 5, expected: "div z 1|26" }),
			};
			block.check = operand(b, 5, "add x ")?;
			block.offset = operand(b, 15, "add y ")?;
		}
		Ok(blocks)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		let blocks = parsing::try_blocks_from_str(include_str!("day24.txt")).unwrap();
		let (largest, smallest) = (part1(), part2());
		assert_eq!(largest, 67599698949989);
		assert_eq!(smallest, 11154131612214);
		assert!(accepts(&blocks, largest));
		assert!(accepts(&blocks, smallest));
		assert!(largest > smallest);
		assert!(!accepts(&blocks, 11111111111111));
		assert!(!accepts(&blocks, largest - 1));
	}
}
