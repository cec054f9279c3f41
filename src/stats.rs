use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::Color;

pub const STAT_COUNT: usize = 6;
pub const NOMINAL_MIN: i32 = 0;
pub const NOMINAL_MAX: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

pub type StatResult<T> = std::result::Result<T, StatError>;

/// One of the six graphed attributes, in graph order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Int,
    Pwr,
    Def,
    Mbl,
    Hp,
    Stl,
}

impl Stat {
    pub const ALL: [Stat; STAT_COUNT] = [
        Stat::Int,
        Stat::Pwr,
        Stat::Def,
        Stat::Mbl,
        Stat::Hp,
        Stat::Stl,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Int => 0,
            Self::Pwr => 1,
            Self::Def => 2,
            Self::Mbl => 3,
            Self::Hp => 4,
            Self::Stl => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Pwr => "pwr",
            Self::Def => "def",
            Self::Mbl => "mbl",
            Self::Hp => "hp",
            Self::Stl => "stl",
        }
    }

    /// Bar fill color baked into the template legend.
    pub const fn color(self) -> Color {
        match self {
            Self::Int => Color::WHITE,
            Self::Pwr => Color::ORANGE,
            Self::Def => Color::BLUE,
            Self::Mbl => Color::GREEN,
            Self::Hp => Color::RED,
            Self::Stl => Color::SLATE,
        }
    }

    /// Left edge of the bar column on the template.
    pub const fn bar_x(self) -> i32 {
        match self {
            Self::Int => 804,
            Self::Pwr => 901,
            Self::Def => 999,
            Self::Mbl => 1096,
            Self::Hp => 1191,
            Self::Stl => 1287,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stat {
    type Err = StatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| StatError::InvalidArgument {
                message: format!("unknown stat label '{value}'"),
            })
    }
}

/// Six stat values. Values outside `0..=100` are kept as given and draw
/// past the graph bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatSet {
    values: [i32; STAT_COUNT],
}

impl StatSet {
    pub const fn new(int: i32, pwr: i32, def: i32, mbl: i32, hp: i32, stl: i32) -> Self {
        Self {
            values: [int, pwr, def, mbl, hp, stl],
        }
    }

    pub fn from_values(values: &[i32]) -> StatResult<Self> {
        let values: [i32; STAT_COUNT] =
            values
                .try_into()
                .map_err(|_| StatError::InvalidArgument {
                    message: format!("expected {STAT_COUNT} stat values, got {}", values.len()),
                })?;
        Ok(Self { values })
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    pub fn is_nominal(&self) -> bool {
        self.values
            .iter()
            .all(|value| (NOMINAL_MIN..=NOMINAL_MAX).contains(value))
    }

    pub fn out_of_range(&self) -> Vec<(Stat, i32)> {
        self.iter()
            .filter(|(_, value)| !(NOMINAL_MIN..=NOMINAL_MAX).contains(value))
            .collect()
    }
}
