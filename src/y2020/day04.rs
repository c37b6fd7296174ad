// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Fields<'a> = HashMap<&'a str, &'a str>;

/// All but `cid`, which the North Pole gets by without.
const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];


fn has_required_fields(fields: &Fields<'_>) -> bool {
	REQUIRED_FIELDS.iter().all(|&key| fields.contains_key(key))
}

fn has_valid_fields(fields: &Fields<'_>) -> bool {
	fn year_in(s: &str, range: std::ops::RangeInclusive<u16>) -> bool {
		s.len() == 4 && s.parse().map(|y| range.contains(&y)).unwrap_or(false)
	}

	has_required_fields(fields) && fields.iter().all(|(&key, &value)| match key {
		"byr" => year_in(value, 1920..=2002),
		"iyr" => year_in(value, 2010..=2020),
		"eyr" => year_in(value, 2020..=2030),
		"hgt" => match value.split_at(value.len().saturating_sub(2)) {
			(h, "cm") => h.parse().map(|h: u8| (150..=193).contains(&h)).unwrap_or(false),
			(h, "in") => h.parse().map(|h: u8| (59..=76).contains(&h)).unwrap_or(false),
			_ => false,
		},
		"hcl" => value.len() == 7
			&& value.starts_with('#')
			&& value.bytes().skip(1).all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
		"ecl" => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
		"pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
		_ => true,
	})
}


fn part1and2_impl(s: &str, accept: impl Fn(&Fields<'_>) -> bool) -> usize {
	crate::common::blank_separated(s)
		.map(|record| parsing::try_fields_from_str(record).unwrap())
		.filter(accept)
		.count()
}

pub(crate) fn part1() -> usize {
	part1and2_impl(include_str!("day04.txt"), has_required_fields)
}

pub(crate) fn part2() -> usize {
	part1and2_impl(include_str!("day04.txt"), has_valid_fields)
}


mod parsing {
	use super::Fields;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RecordError<'a> {
		Format(&'a str),
		Duplicate(&'a str),
	}

	pub(super) fn try_fields_from_str(s: &str) -> Result<Fields<'_>, RecordError<'_>> {
		let mut fields = Fields::new();
		for token in s.split_whitespace() {
			let (key, value) = token.split_once(':')
				.ok_or(RecordError::Format(token))?;
			if fields.insert(key, value).is_some() {
				return Err(RecordError::Duplicate(key))
			}
		}
		Ok(fields)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
		byr:1937 iyr:2017 cid:147 hgt:183cm

		iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
		hcl:#cfa07d byr:1929

		hcl:#ae17e1 iyr:2013
		eyr:2024
		ecl:brn pid:760753108 byr:1931
		hgt:179cm

		hcl:#cfa07d eyr:2025 pid:166559648
		iyr:2011 ecl:brn hgt:59in
	" };

	#[test]
	fn tests() {
		assert_eq!(part1and2_impl(INPUT, has_required_fields), 2);
		assert_eq!(part1and2_impl(INPUT, has_valid_fields), 2);
		assert_eq!(part1(), 10);
		assert_eq!(part2(), 6);
	}

	#[test]
	fn field_rules() {
		fn valid_baseline() -> Fields<'static> {
			Fields::from_iter([
				("byr", "1980"), ("iyr", "2012"), ("eyr", "2030"), ("hgt", "74in"),
				("hcl", "#623a2f"), ("ecl", "grn"), ("pid", "087499704"),
			])
		}
		fn field(key: &'static str, value: &'static str) -> bool {
			let mut fields = valid_baseline();
			fields.insert(key, value);
			has_valid_fields(&fields)
		}
		assert!(has_valid_fields(&valid_baseline()));
		assert!(field("byr", "2002") && !field("byr", "2003"));
		assert!(field("hgt", "60in") && field("hgt", "190cm"));
		assert!(!field("hgt", "190in") && !field("hgt", "190"));
		assert!(field("hcl", "#123abc") && !field("hcl", "#123abz") && !field("hcl", "123abc"));
		assert!(field("ecl", "brn") && !field("ecl", "wat"));
		assert!(field("pid", "000000001") && !field("pid", "0123456789"));
	}
}
