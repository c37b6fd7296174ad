// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Schedule {
	earliest: u64,
	/// `(offset, id)` per in-service bus; `id` doubles as the loop period.
	buses: Vec<(u64, u64)>,
}


fn part1_impl(schedule: &Schedule) -> u64 {
	let (wait, id) = schedule.buses.iter()
		.map(|&(_, id)| ((id - schedule.earliest % id) % id, id))
		.min()
		.expect("At least one bus in service");
	wait * id
}

/// Finds the earliest timestamp `t` with `(t + offset) % id == 0` for every
/// bus, by chinese-remainder accumulation. Bus ids are prime (a property of
/// every published schedule), so each modular inverse follows from Fermat’s
/// little theorem.
fn part2_impl(schedule: &Schedule) -> u64 {
	use num_modular::{ModularCoreOps, ModularPow};

	let m = crate::common::fold_lcm(schedule.buses.iter().map(|&(_, id)| id));
	schedule.buses.iter().fold(0, |acc, &(offset, id)| {
		let n = m / id;
		let residue = (id - offset % id) % id;
		let inverse = (n % id).powm(id - 2, &id);
		acc.addm(residue.mulm(inverse, &id).mulm(n, &m), &m)
	})
}

pub(crate) fn part1() -> u64 {
	part1_impl(&parsing::try_schedule_from_str(include_str!("day13.txt")).unwrap())
}

pub(crate) fn part2() -> u64 {
	part2_impl(&parsing::try_schedule_from_str(include_str!("day13.txt")).unwrap())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Schedule;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ScheduleError {
		MissingLine(usize),
		Earliest(ParseIntError),
		Bus { column: usize, source: ParseIntError },
		NoBuses,
	}

	pub(super) fn try_schedule_from_str(s: &str) -> Result<Schedule, ScheduleError> {
		let mut lines = s.lines();
		let earliest = lines.next()
			.ok_or(ScheduleError::MissingLine(1))?
			.parse()
			.map_err(ScheduleError::Earliest)?;
		let buses = lines.next()
			.ok_or(ScheduleError::MissingLine(2))?
			.split(',')
			.enumerate()
			.filter(|&(_, token)| token != "x")
			.map(|(offset, token)| token.parse()
				.map(|id| (offset as u64, id))
				.map_err(|e| ScheduleError::Bus { column: offset + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if buses.is_empty() { return Err(ScheduleError::NoBuses) }
		Ok(Schedule { earliest, buses })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = "939\n7,13,x,x,59,x,31,19\n";

	#[test]
	fn tests() {
		let schedule = parsing::try_schedule_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&schedule), 295);
		assert_eq!(part2_impl(&schedule), 1068781);
		for &(offset, id) in &schedule.buses {
			assert_eq!((part2_impl(&schedule) + offset) % id, 0);
		}
		for (buses, timestamp) in [
			("17,x,13,19", 3417),
			("67,7,59,61", 754018),
			("67,x,7,59,61", 779210),
			("67,7,x,59,61", 1261476),
			("1789,37,47,1889", 1202161486),
		] {
			let schedule = parsing::try_schedule_from_str(&format!("0\n{buses}")).unwrap();
			assert_eq!(part2_impl(&schedule), timestamp);
		}
		assert_eq!(part1(), 295);
		assert_eq!(part2(), 1068781);
	}
}
