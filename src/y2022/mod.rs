// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day21;
pub(crate) mod day25;
