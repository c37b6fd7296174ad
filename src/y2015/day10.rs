// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const INPUT: &str = "1";


/// Reads each run of equal digits aloud (“one one, two ones, …”).
fn look_and_say(s: &str) -> String {
	use itertools::Itertools;
	s.chars()
		.dedup_with_count()
		.map(|(count, c)| format!("{count}{c}"))
		.collect()
}

fn part1and2_impl(s: &str, times: usize) -> usize {
	(0..times).fold(s.to_owned(), |s, _| look_and_say(&s)).len()
}

pub(crate) fn part1() -> usize {
	part1and2_impl(INPUT, 40)
}

pub(crate) fn part2() -> usize {
	part1and2_impl(INPUT, 50)
}


#[test]
fn tests() {
	assert_eq!(look_and_say("1"), "11");
	assert_eq!(look_and_say("11"), "21");
	assert_eq!(look_and_say("21"), "1211");
	assert_eq!(look_and_say("1211"), "111221");
	assert_eq!(look_and_say("111221"), "312211");
	assert_eq!(part1and2_impl("1", 5), 6);
	assert_eq!(part1(), 82350);
	assert_eq!(part2(), 1166642);
}
