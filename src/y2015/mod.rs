// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day10;
pub(crate) mod day11;
