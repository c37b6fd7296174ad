// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day04;
pub(crate) mod day05;
pub(crate) mod day06;
pub(crate) mod day07;
pub(crate) mod day13;
