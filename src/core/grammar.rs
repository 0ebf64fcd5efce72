// File: src/core/grammar.rs
//! Selects the inflected form of a unit word for a given count.

use crate::core::types::{Form, GrammarUnit, ScaleUnit};

/// The unit word for `count`. `trailing` is true when a nonzero sub-100
/// remainder follows the chunk.
pub fn resolve(unit: &ScaleUnit, count: u128, trailing: bool) -> &str {
    match unit {
        ScaleUnit::Plain(word) => word,
        ScaleUnit::Grammar(grammar) => grammar.form(select_form(grammar, count, trailing)),
    }
}

/// Picks the form of a grammar unit. First match wins; a form is only chosen
/// when the unit defines it.
pub fn select_form(unit: &GrammarUnit, count: u128, trailing: bool) -> Form {
    let last_digit = count % 10;
    let excluded = unit.excludes_ending(count);

    if count == 1 || (unit.use_singular_ending && last_digit == 1 && !excluded) {
        return Form::Singular;
    }
    if count == 2 && unit.dual().is_some() {
        return Form::Dual;
    }
    if unit.few().is_some()
        && ((2..5).contains(&count)
            || (unit.use_few_ending && (2..=4).contains(&last_digit) && !excluded))
    {
        return Form::Few;
    }
    if unit.restricted_plural && count > 10 {
        return Form::Singular;
    }
    match unit.plural() {
        Some(_) if !(unit.avoid_in_number_plural && trailing) => Form::Plural,
        _ => Form::Singular,
    }
}
