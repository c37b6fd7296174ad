// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const INPUT: &str = "3,4,3,1,2";

const SPAWN_INTERVAL: usize = 7;
const MATURATION: usize = 2;


fn input_timers_from_str(s: &str) -> Vec<usize> {
	crate::common::try_csv_numbers_from_str(s).unwrap()
}

/// Counts fish bucketed by timer value, so a day is a rotation plus one
/// addition no matter how large the school grows.
fn part1and2_impl(timers: &[usize], days: usize) -> u64 {
	let mut buckets = [0u64; SPAWN_INTERVAL + MATURATION];
	for &timer in timers { buckets[timer] += 1 }
	for _ in 0..days {
		let spawning = buckets[0];
		// The rotation reintroduces the spawning fishes’ count as newborns…
		buckets.rotate_left(1);
		// …and the spawners themselves restart their cycle
		buckets[SPAWN_INTERVAL - 1] += spawning;
	}
	buckets.iter().sum()
}

pub(crate) fn part1() -> u64 {
	part1and2_impl(&input_timers_from_str(INPUT), 80)
}

pub(crate) fn part2() -> u64 {
	part1and2_impl(&input_timers_from_str(INPUT), 256)
}


#[cfg(test)]
fn naive(timers: &[usize], days: usize) -> u64 {
	let mut fish = timers.to_vec();
	for _ in 0..days {
		let mut spawned = 0;
		for timer in fish.iter_mut() {
			if *timer == 0 {
				*timer = SPAWN_INTERVAL - 1;
				spawned += 1;
			} else {
				*timer -= 1;
			}
		}
		fish.resize(fish.len() + spawned, SPAWN_INTERVAL + MATURATION - 1);
	}
	fish.len() as u64
}

#[test]
fn tests() {
	let timers = input_timers_from_str(INPUT);
	for days in 0..=18 {
		assert_eq!(part1and2_impl(&timers, days), naive(&timers, days), "after {days} days");
	}
	assert_eq!(part1and2_impl(&timers, 18), 26);
	assert_eq!(part1(), 5934);
	assert_eq!(part2(), 26_984_457_539);
}
