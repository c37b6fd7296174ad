// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day01;
pub(crate) mod day06;
pub(crate) mod day09;
pub(crate) mod day15;
pub(crate) mod day24;
