// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day18;
