// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const INPUT: &str = "abcdefgh";


trait MaybePassword: AsRef<[u8]> {
	fn contains_straight(&self) -> bool {
		use itertools::Itertools;
		self.as_ref().iter().tuple_windows().any(|(a, b, c)|
			b.wrapping_sub(*a) == 1 && c.wrapping_sub(*b) == 1)
	}

	fn contains_confusing_letter(&self) -> bool {
		self.as_ref().iter().any(|b| matches!(b, b'i' | b'o' | b'l'))
	}

	fn contains_two_pairs(&self) -> bool {
		let bytes = self.as_ref();
		let mut first_pair = None;
		let mut i = 0;
		while i + 1 < bytes.len() {
			if bytes[i] == bytes[i + 1] {
				match first_pair {
					None => first_pair = Some(bytes[i]),
					Some(b) if b != bytes[i] => return true,
					Some(_) => (),
				}
				i += 2;
			} else {
				i += 1;
			}
		}
		false
	}

	fn is_valid(&self) -> bool {
		!self.contains_confusing_letter()
			&& self.contains_straight()
			&& self.contains_two_pairs()
	}
}

impl MaybePassword for Vec<u8> {}
impl MaybePassword for &str {}


fn increment(password: &mut [u8]) {
	for b in password.iter_mut().rev() {
		if *b == b'z' { *b = b'a' } else { *b += 1; break }
	}
}

fn next_valid_password(s: &str) -> String {
	let mut password = s.as_bytes().to_vec();
	loop {
		increment(&mut password);
		// No password containing a confusing letter is valid, so leap past
		// the whole block of them at once
		if let Some(i) = password.iter().position(|b| matches!(b, b'i' | b'o' | b'l')) {
			password[i] += 1;
			password[i + 1..].fill(b'a');
		}
		if password.is_valid() { break }
	}
	// SAFETY: `password` started out as ASCII letters and `increment` keeps it that way
	unsafe { String::from_utf8_unchecked(password) }
}


pub(crate) fn part1() -> String {
	next_valid_password(INPUT)
}

pub(crate) fn part2() -> String {
	next_valid_password(&part1())
}


#[test]
fn tests() {
	assert!("hijklmmn".contains_straight());
	assert!("hijklmmn".contains_confusing_letter());
	assert!("abbceffg".contains_two_pairs());
	assert!(!"abbceffg".contains_straight());
	assert!(!"abbcegjk".contains_two_pairs());
	assert!(!"aabaa".contains_two_pairs());
	assert_eq!(next_valid_password("ghijklmn"), "ghjaabcc");
	assert_eq!(part1(), "abcdffaa");
	assert_eq!(part2(), "abcdffbb");
}
