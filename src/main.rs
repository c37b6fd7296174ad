// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod common;
mod y2015;
mod y2020;
mod y2021;
mod y2022;
mod y2023;


macro_rules! run_days {
	( $( $year:literal: [$( $day:literal ),+ $(,)?] ),+ $(,)? ) => { paste::paste! { $( $(
		println!(concat!(stringify!($year), ", day ", stringify!($day), ": {} & {}"),
			[<y $year>]::[<day $day>]::part1(),
			[<y $year>]::[<day $day>]::part2());
	)+ )+ } }
}

fn main() {
	run_days! {
		2015: [10, 11],
		2020: [04, 05, 06, 07, 13],
		2021: [01, 06, 09, 15, 24],
		2022: [21, 25],
		2023: [18],
	}
}
