// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct HeightMap {
	/// Row-major; always `width * height` long.
	heights: Vec<u8>,
	width: usize,
}

impl HeightMap {
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
		let (width, len) = (self.width, self.heights.len());
		let x = pos % width;
		[
			(x > 0).then(|| pos - 1),
			(x + 1 < width).then(|| pos + 1),
			(pos >= width).then(|| pos - width),
			(pos + width < len).then(|| pos + width),
		].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len()).filter(move |&pos|
			self.neighbors(pos).all(|n| self.heights[n] > self.heights[pos]))
	}

	/// Flood-fills from `low` through all heights below 9.
	fn basin(&self, low: usize) -> std::collections::HashSet<usize> {
		use std::collections::{HashSet, VecDeque};
		let mut seen = HashSet::new();
		let mut queue = VecDeque::from([low]);
		while let Some(pos) = queue.pop_front() {
			if !seen.insert(pos) { continue }
			queue.extend(self.neighbors(pos).filter(|&n| self.heights[n] < 9));
		}
		seen
	}
}


fn part1_impl(map: &HeightMap) -> u32 {
	map.low_points().map(|pos| 1 + map.heights[pos] as u32).sum()
}

fn part2_impl(map: &HeightMap) -> usize {
	use itertools::Itertools;
	map.low_points()
		.map(|low| map.basin(low).len())
		.sorted_unstable()
		.rev()
		.take(3)
		.product()
}

pub(crate) fn part1() -> u32 {
	part1_impl(&parsing::try_map_from_str(include_str!("day09.txt")).unwrap())
}

pub(crate) fn part2() -> usize {
	part2_impl(&parsing::try_map_from_str(include_str!("day09.txt")).unwrap())
}


mod parsing {
	use super::HeightMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MapError {
		Empty,
		Jagged { line: usize },
		Char { line: usize, column: usize, found: char },
	}

	pub(super) fn try_map_from_str(s: &str) -> Result<HeightMap, MapError> {
		let mut heights = Vec::with_capacity(s.len());
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(MapError::Jagged { line: l + 1 })
			}
			for (c, found) in line.chars().enumerate() {
				heights.push(found.to_digit(10)
					.ok_or(MapError::Char { line: l + 1, column: c + 1, found })? as u8);
			}
		}
		match width {
			None | Some(0) => Err(MapError::Empty),
			Some(width) => Ok(HeightMap { heights, width }),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };

	/// Follows the steepest descent from `pos` to its low point.
	fn descend(map: &HeightMap, mut pos: usize) -> usize {
		loop {
			match map.neighbors(pos)
				.filter(|&n| map.heights[n] < map.heights[pos])
				.min_by_key(|&n| map.heights[n])
			{
				Some(lower) => pos = lower,
				None => return pos,
			}
		}
	}

	#[test]
	fn tests() {
		let map = parsing::try_map_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&map), 15);
		assert_eq!(part2_impl(&map), 1134);
		assert_eq!(part1(), 15);
		assert_eq!(part2(), 1134);
	}

	#[test]
	fn flood_fill_matches_descent() {
		use std::collections::HashMap;
		let map = parsing::try_map_from_str(INPUT).unwrap();
		let mut descent_sizes = HashMap::new();
		for pos in 0..map.heights.len() {
			if map.heights[pos] < 9 {
				*descent_sizes.entry(descend(&map, pos)).or_insert(0usize) += 1;
			}
		}
		for low in map.low_points() {
			assert_eq!(map.basin(low).len(), descent_sizes[&low]);
		}
	}
}
