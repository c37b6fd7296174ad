// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const SHINY_GOLD: &str = "shiny gold";

/// Containing bag as key, contained counts as value. Rules are assumed
/// acyclic; a cyclic rule set would recurse without bound.
type Rules<'a> = HashMap<&'a str, Vec<(usize, &'a str)>>;


fn part1_impl(s: &str) -> usize {
	let rules = parsing::try_rules_from_str(s).unwrap();

	fn contains_shiny_gold<'a>(
		rules: &Rules<'a>,
		memo: &mut HashMap<&'a str, bool>,
		bag: &'a str,
	) -> bool {
		if let Some(&known) = memo.get(bag) { return known }
		let found = rules.get(bag).into_iter().flatten()
			.any(|&(_, inner)| inner == SHINY_GOLD
				|| contains_shiny_gold(rules, memo, inner));
		memo.insert(bag, found);
		found
	}

	let mut memo = HashMap::new();
	rules.keys()
		.filter(|&&bag| contains_shiny_gold(&rules, &mut memo, bag))
		.count()
}

fn part2_impl(s: &str) -> usize {
	let rules = parsing::try_rules_from_str(s).unwrap();

	fn count_inside<'a>(
		rules: &Rules<'a>,
		memo: &mut HashMap<&'a str, usize>,
		bag: &'a str,
	) -> usize {
		if let Some(&known) = memo.get(bag) { return known }
		let count = rules.get(bag).into_iter().flatten()
			.map(|&(n, inner)| n * (1 + count_inside(rules, memo, inner)))
			.sum();
		memo.insert(bag, count);
		count
	}

	count_inside(&rules, &mut HashMap::new(), SHINY_GOLD)
}

pub(crate) fn part1() -> usize {
	part1_impl(include_str!("day07.txt"))
}

pub(crate) fn part2() -> usize {
	part2_impl(include_str!("day07.txt"))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Rules;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RuleError<'a> {
		Format,
		Count { content: &'a str, source: ParseIntError },
		Content(&'a str),
	}

	fn try_contents_from_str(s: &str) -> Result<Vec<(usize, &str)>, RuleError<'_>> {
		if s == "no other bags" { return Ok(vec![]) }
		s.split(", ")
			.map(|content| {
				let (count, bag) = content.split_once(' ')
					.ok_or(RuleError::Content(content))?;
				let count = count.parse()
					.map_err(|e| RuleError::Count { content, source: e })?;
				let bag = bag.strip_suffix(" bags")
					.or_else(|| bag.strip_suffix(" bag"))
					.ok_or(RuleError::Content(content))?;
				Ok((count, bag))
			})
			.collect()
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RulesError<'a> {
		Rule { line: usize, source: RuleError<'a> },
		Duplicate { line: usize, bag: &'a str },
	}

	pub(super) fn try_rules_from_str(s: &str) -> Result<Rules<'_>, RulesError<'_>> {
		s.lines()
			.enumerate()
			.try_fold(Rules::new(), |mut rules, (l, line)| {
				let rule = line.strip_suffix('.')
					.and_then(|line| line.split_once(" bags contain "))
					.ok_or(RulesError::Rule { line: l + 1, source: RuleError::Format })
					.and_then(|(bag, contents)| Ok((bag, try_contents_from_str(contents)
						.map_err(|e| RulesError::Rule { line: l + 1, source: e })?)));
				let (bag, contents) = rule?;
				if rules.insert(bag, contents).is_some() {
					return Err(RulesError::Duplicate { line: l + 1, bag })
				}
				Ok(rules)
			})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const DEEPER_INPUT: &str = indoc::indoc! { "
		shiny gold bags contain 2 dark red bags.
		dark red bags contain 2 dark orange bags.
		dark orange bags contain 2 dark yellow bags.
		dark yellow bags contain 2 dark green bags.
		dark green bags contain 2 dark blue bags.
		dark blue bags contain 2 dark violet bags.
		dark violet bags contain no other bags.
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(), 4);
		assert_eq!(part2(), 32);
		assert_eq!(part2_impl(DEEPER_INPUT), 126);
	}
}
