// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Clone, Copy)]
enum Op { Add, Sub, Mul, Div }

#[derive(Clone, Copy)]
enum Job<'a> {
	Number(i64),
	Operation(&'a str, Op, &'a str),
}

/// Each monkey’s job, keyed by name. The jobs are assumed to form a tree
/// rooted at `root`; a cycle would recurse without bound.
type Jobs<'a> = HashMap<&'a str, Job<'a>>;


fn eval<'a>(jobs: &Jobs<'a>, memo: &mut HashMap<&'a str, i64>, name: &'a str) -> i64 {
	if let Some(&known) = memo.get(name) { return known }
	let value = match jobs[name] {
		Job::Number(number) => number,
		Job::Operation(lhs, op, rhs) => {
			let (lhs, rhs) = (eval(jobs, memo, lhs), eval(jobs, memo, rhs));
			match op {
				Op::Add => lhs + rhs,
				Op::Sub => lhs - rhs,
				Op::Mul => lhs * rhs,
				Op::Div => lhs / rhs,
			}
		}
	};
	memo.insert(name, value);
	value
}

/// Like `eval`, but yields `None` for anything depending on the human.
fn try_eval<'a>(jobs: &Jobs<'a>, memo: &mut HashMap<&'a str, Option<i64>>, name: &'a str) -> Option<i64> {
	if name == HUMAN { return None }
	if let Some(&known) = memo.get(name) { return known }
	let value = match jobs[name] {
		Job::Number(number) => Some(number),
		Job::Operation(lhs, op, rhs) => {
			let (lhs, rhs) = (try_eval(jobs, memo, lhs), try_eval(jobs, memo, rhs));
			match (lhs, op, rhs) {
				(Some(lhs), Op::Add, Some(rhs)) => Some(lhs + rhs),
				(Some(lhs), Op::Sub, Some(rhs)) => Some(lhs - rhs),
				(Some(lhs), Op::Mul, Some(rhs)) => Some(lhs * rhs),
				(Some(lhs), Op::Div, Some(rhs)) => Some(lhs / rhs),
				_ => None,
			}
		}
	};
	memo.insert(name, value);
	value
}


fn part1_impl(s: &str) -> i64 {
	let jobs = parsing::try_jobs_from_str(s).unwrap();
	eval(&jobs, &mut HashMap::new(), ROOT)
}

/// Solves for the human’s number by descending into whichever operand
/// depends on the human, inverting each operation along the way. Exactly one
/// operand per operation may depend on the human (true of the published
/// inputs), and every division along the human’s path is exact.
fn part2_impl(s: &str) -> i64 {
	let jobs = parsing::try_jobs_from_str(s).unwrap();
	let mut memo = HashMap::new();

	let Job::Operation(mut name, _, rhs) = jobs[ROOT]
		else { panic!("The root monkey should yell an operation!") };
	let mut target = match try_eval(&jobs, &mut memo, name) {
		Some(value) => { name = rhs; value }
		None => eval(&jobs, &mut HashMap::new(), rhs),
	};

	while name != HUMAN {
		let Job::Operation(lhs, op, rhs) = jobs[name]
			else { panic!("Monkey “{name}” shouldn’t depend on the human!") };
		target = match (try_eval(&jobs, &mut memo, lhs), op) {
			(Some(lhs), Op::Add) => { name = rhs; target - lhs }
			(Some(lhs), Op::Sub) => { name = rhs; lhs - target }
			(Some(lhs), Op::Mul) => { name = rhs; target / lhs }
			(Some(lhs), Op::Div) => { name = rhs; lhs / target }
			(None, op) => {
				let rhs = eval(&jobs, &mut HashMap::new(), rhs);
				name = lhs;
				match op {
					Op::Add => target - rhs,
					Op::Sub => target + rhs,
					Op::Mul => target / rhs,
					Op::Div => target * rhs,
				}
			}
		};
	}
	target
}

pub(crate) fn part1() -> i64 {
	part1_impl(include_str!("day21.txt"))
}

pub(crate) fn part2() -> i64 {
	part2_impl(include_str!("day21.txt"))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Job, Jobs, Op};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum JobError<'a> {
		Format,
		Number(ParseIntError),
		Op(&'a str),
	}

	impl<'a> TryFrom<&'a str> for Job<'a> {
		type Error = JobError<'a>;
		fn try_from(s: &'a str) -> Result<Self, Self::Error> {
			let mut tokens = s.split(' ');
			match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
				(Some(number), None, ..) =>
					Ok(Job::Number(number.parse().map_err(JobError::Number)?)),
				(Some(lhs), Some(op), Some(rhs), None) => Ok(Job::Operation(lhs, match op {
					"+" => Op::Add, "-" => Op::Sub, "*" => Op::Mul, "/" => Op::Div,
					found => return Err(JobError::Op(found)),
				}, rhs)),
				_ => Err(JobError::Format),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum JobsError<'a> {
		Job { line: usize, source: JobError<'a> },
		Duplicate { line: usize, name: &'a str },
		MissingRoot,
	}

	pub(super) fn try_jobs_from_str(s: &str) -> Result<Jobs<'_>, JobsError<'_>> {
		let jobs = s.lines()
			.enumerate()
			.try_fold(Jobs::new(), |mut jobs, (l, line)| {
				let (name, job) = line.split_once(": ")
					.ok_or(JobsError::Job { line: l + 1, source: JobError::Format })?;
				let job = Job::try_from(job)
					.map_err(|e| JobsError::Job { line: l + 1, source: e })?;
				if jobs.insert(name, job).is_some() {
					return Err(JobsError::Duplicate { line: l + 1, name })
				}
				Ok(jobs)
			})?;
		if !jobs.contains_key(super::ROOT) { return Err(JobsError::MissingRoot) }
		Ok(jobs)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		root: pppw + sjmn
		dbpl: 5
		cczh: sllz + lgvd
		zczc: 2
		ptdq: humn - dvpt
		dvpt: 3
		lfqf: 4
		humn: 5
		ljgn: 2
		sjmn: drzm * dbpl
		sllz: 4
		lgvd: ljgn * ptdq
		pppw: cczh / lfqf
		drzm: hmdt - zczc
		hmdt: 32
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(INPUT), 152);
		assert_eq!(part2_impl(INPUT), 301);
		assert_eq!(part1(), 152);
		assert_eq!(part2(), 301);
	}
}
