// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const MOVES: [[isize; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];


struct RiskMap {
	/// Row-major; always `width * height` long.
	risks: Vec<u8>,
	width: usize,
}

impl RiskMap {
	fn height(&self) -> usize {
		self.risks.len() / self.width
	}

	/// Risk at `[x, y]` on the map tiled `scale` times in both directions,
	/// each tile bumping risks by one and wrapping from 9 back to 1.
	fn risk(&self, [x, y]: [usize; 2]) -> usize {
		let base = self.risks[y % self.height() * self.width + x % self.width] as usize;
		(base + x / self.width + y / self.height() - 1) % 9 + 1
	}
}


fn lowest_total_risk(map: &RiskMap, scale: usize, moves: [[isize; 2]; 4]) -> usize {
	use std::collections::{BinaryHeap, HashMap, hash_map::Entry::*};

	// Dijkstra

	#[derive(PartialEq, Eq)]
	struct State { cost: usize, pos: [usize; 2] }

	impl Ord for State {
		fn cmp(&self, other: &Self) -> std::cmp::Ordering {
			other.cost.cmp(&self.cost)
				.then_with(|| self.pos.cmp(&other.pos))
		}
	}

	impl PartialOrd for State {
		fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
			Some(self.cmp(other))
		}
	}

	let (width, height) = (map.width * scale, map.height() * scale);
	let target = [width - 1, height - 1];

	let mut heap = BinaryHeap::from([State { cost: 0, pos: [0, 0] }]);
	let mut settled = HashMap::new();
	while let Some(State { cost, pos }) = heap.pop() {
		match settled.entry(pos) {
			Occupied(_) => continue,
			Vacant(entry) => entry.insert(cost),
		};
		if pos == target { return cost }
		for [dx, dy] in moves {
			let (x, y) = (pos[0] as isize + dx, pos[1] as isize + dy);
			if x < 0 || y < 0 || x as usize >= width || y as usize >= height { continue }
			let next = [x as usize, y as usize];
			if settled.contains_key(&next) { continue }
			heap.push(State { cost: cost + map.risk(next), pos: next });
		}
	}

	panic!("No path to the bottom-right corner!")
}


fn part1_impl(map: &RiskMap) -> usize {
	lowest_total_risk(map, 1, MOVES)
}

fn part2_impl(map: &RiskMap) -> usize {
	lowest_total_risk(map, 5, MOVES)
}

pub(crate) fn part1() -> usize {
	part1_impl(&parsing::try_map_from_str(include_str!("day15.txt")).unwrap())
}

pub(crate) fn part2() -> usize {
	part2_impl(&parsing::try_map_from_str(include_str!("day15.txt")).unwrap())
}


mod parsing {
	use super::RiskMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MapError {
		Empty,
		Jagged { line: usize },
		Char { line: usize, column: usize, found: char },
	}

	pub(super) fn try_map_from_str(s: &str) -> Result<RiskMap, MapError> {
		let mut risks = Vec::with_capacity(s.len());
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(MapError::Jagged { line: l + 1 })
			}
			for (c, found) in line.chars().enumerate() {
				match found.to_digit(10) {
					Some(risk) if risk > 0 => risks.push(risk as u8),
					_ => return Err(MapError::Char { line: l + 1, column: c + 1, found }),
				}
			}
		}
		match width {
			None | Some(0) => Err(MapError::Empty),
			Some(width) => Ok(RiskMap { risks, width }),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };

	#[test]
	fn tests() {
		let map = parsing::try_map_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&map), 40);
		assert_eq!(part2_impl(&map), 315);
		assert_eq!(map.risk([10, 0]), 2);
		assert_eq!(map.risk([49, 49]), 9);
		assert_eq!(part1(), 40);
		assert_eq!(part2(), 315);
	}

	#[test]
	fn insertion_order_invariance() {
		let map = parsing::try_map_from_str(INPUT).unwrap();
		let mut reversed = MOVES;
		reversed.reverse();
		assert_eq!(lowest_total_risk(&map, 1, reversed), 40);
		assert_eq!(lowest_total_risk(&map, 5, reversed), 315);
	}
}
