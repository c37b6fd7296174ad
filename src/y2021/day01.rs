// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_depths_from_str(s: &str) -> Vec<u32> {
	crate::common::try_numbers_from_str(s).unwrap()
}


fn part1_impl(depths: &[u32]) -> usize {
	use itertools::Itertools;
	depths.iter().tuple_windows().filter(|(prev, next)| next > prev).count()
}

/// Comparing three-measurement window sums reduces to comparing the
/// measurements three apart.
fn part2_impl(depths: &[u32]) -> usize {
	use itertools::Itertools;
	depths.iter().tuple_windows().filter(|(prev, _, _, next)| next > prev).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(&input_depths_from_str(include_str!("day01.txt")))
}

pub(crate) fn part2() -> usize {
	part2_impl(&input_depths_from_str(include_str!("day01.txt")))
}


#[test]
fn tests() {
	let depths = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];
	assert_eq!(part1_impl(&depths), 7);
	assert_eq!(part2_impl(&depths), 5);
	assert_eq!(part1(), 7);
	assert_eq!(part2(), 5);
}
