// File: src/core/scale.rs
//! Magnitude thresholds for each scale position of a language.

use crate::core::types::{LanguageDescriptor, UnitSet};
use crate::error::{Result, WrittenNumberError};

/// Number of positions defined by each fixed progression.
pub const POSITIONS: usize = 17;

/// Divisor applied to the count of the largest unit of a language.
/// Counts of that unit at or above this wrap around.
pub const LAST_UNIT_MODULUS: u128 = 1_000_000;

/// The fixed numbering conventions for ordered unit lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// 10², 10³, 10⁶, 10⁹, ... one new unit per three zeros.
    Short,
    /// 10², 10³, 10⁶, 10¹², ... one new unit per six zeros.
    Long,
}

impl Convention {
    pub fn for_language(language: &LanguageDescriptor) -> Self {
        if language.use_long_scale {
            Convention::Long
        } else {
            Convention::Short
        }
    }

    /// Power of ten of a position, or `None` past the end of the progression.
    pub fn exponent(self, position: usize) -> Option<u32> {
        if position >= POSITIONS {
            return None;
        }
        let exponent = match (self, position) {
            (_, 0) => 2,
            (Convention::Short, p) => 3 * p,
            (Convention::Long, 1) => 3,
            (Convention::Long, p) => 6 * (p - 1),
        };
        u32::try_from(exponent).ok()
    }

    /// Thresholds of every position that fits in a `u128`.
    pub fn thresholds(self) -> impl Iterator<Item = u128> {
        (0..POSITIONS)
            .map_while(move |position| self.exponent(position))
            .map_while(|exponent| 10u128.checked_pow(exponent))
    }
}

/// One scale position as the decomposition walks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub threshold: u128,
    /// The count at this position is taken modulo the divisor. `None` when the
    /// next threshold is beyond `u128`, where no modulus can bite.
    pub divisor: Option<u128>,
}

/// Thresholds and divisors for the units of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTable {
    /// One entry per unit; `None` for units whose threshold overflows `u128`.
    steps: Vec<Option<Step>>,
}

impl ScaleTable {
    pub fn for_language(language: &LanguageDescriptor) -> Result<Self> {
        if language.units.is_empty() {
            return Err(WrittenNumberError::InvalidUnits(
                "a language needs at least one scale unit".to_owned(),
            ));
        }
        let exponents = match &language.units {
            UnitSet::Ordered(units) => {
                let convention = Convention::for_language(language);
                (0..units.len())
                    .map(|position| {
                        convention.exponent(position).ok_or_else(|| {
                            WrittenNumberError::InvalidUnits(format!(
                                "{} units exceed the {POSITIONS} {convention:?} scale positions",
                                units.len()
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?
            }
            UnitSet::ByExponent(units) => units.keys().copied().collect(),
        };
        Self::from_exponents(&exponents)
    }

    /// Builds the table from ascending unit exponents.
    pub fn from_exponents(exponents: &[u32]) -> Result<Self> {
        if let Some(&exponent) = exponents.iter().find(|&&exponent| exponent == 0) {
            return Err(WrittenNumberError::InvalidDescriptor(format!(
                "unit exponent {exponent} gives a threshold below 10"
            )));
        }
        if let Some(pair) = exponents.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(WrittenNumberError::InvalidDescriptor(format!(
                "unit exponents must ascend strictly, found {} then {}",
                pair[0], pair[1]
            )));
        }

        let thresholds: Vec<Option<u128>> = exponents
            .iter()
            .map(|&exponent| 10u128.checked_pow(exponent))
            .collect();
        let last = thresholds.len().saturating_sub(1);
        let steps = thresholds
            .iter()
            .enumerate()
            .map(|(index, threshold)| {
                let threshold = (*threshold)?;
                let divisor = if index == last {
                    Some(LAST_UNIT_MODULUS)
                } else {
                    thresholds[index + 1].map(|next| next / threshold)
                };
                Some(Step { threshold, divisor })
            })
            .collect();
        Ok(Self { steps })
    }

    /// The step of unit `index`, if its threshold is representable.
    pub fn step(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied().flatten()
    }
}
