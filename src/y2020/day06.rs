// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Per group: answers anyone gave, and answers everyone gave, as `a`–`z` bitmasks.
fn group_answers(s: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
	crate::common::blank_separated(s)
		.map(|group| group.lines()
			.map(|line| parsing::try_answers_from_str(line).unwrap())
			.fold((0, !0), |(any, all), answers| (any | answers, all & answers)))
}


fn part1_impl(s: &str) -> u32 {
	group_answers(s).map(|(any, _)| any.count_ones()).sum()
}

fn part2_impl(s: &str) -> u32 {
	group_answers(s).map(|(_, all)| all.count_ones()).sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(include_str!("day06.txt"))
}

pub(crate) fn part2() -> u32 {
	part2_impl(include_str!("day06.txt"))
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct AnswersError {
		column: usize,
		found: char,
	}

	pub(super) fn try_answers_from_str(s: &str) -> Result<u32, AnswersError> {
		s.chars()
			.enumerate()
			.try_fold(0u32, |answers, (i, c)| match c {
				'a'..='z' => Ok(answers | 1 << (c as u32 - 'a' as u32)),
				found => Err(AnswersError { column: i + 1, found }),
			})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		abc

		a
		b
		c

		ab
		ac

		a
		a
		a
		a

		b
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl("abcx\nabcy\nabcz"), 6);
		assert_eq!(part1_impl(INPUT), 11);
		assert_eq!(part2_impl(INPUT), 6);
		assert_eq!(part1(), 11);
		assert_eq!(part2(), 6);
	}
}
