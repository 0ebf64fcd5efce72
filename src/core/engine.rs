// File: src/core/engine.rs
//! Recursive decomposition of a magnitude into scale chunks, and assembly of
//! the chunks into reading order.

use crate::core::grammar;
use crate::core::scale::ScaleTable;
use crate::core::types::{lookup, LanguageDescriptor, Lexicon, Options, ScaleUnit};
use crate::error::{Result, WrittenNumberError};
use std::borrow::Cow;

/// Deeper nesting than this can only come from a malformed descriptor.
pub const MAX_DEPTH: usize = 64;

/// Options for one level of the recursion. Every sub-conversion builds its
/// own frame; nothing is inherited implicitly from the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame<'o> {
    pub alternative_base: Option<&'o str>,
    pub no_and: bool,
}

impl<'o> Frame<'o> {
    pub fn from_options(options: &'o Options) -> Self {
        Self {
            alternative_base: options.alternative_base.as_deref(),
            no_and: options.no_and,
        }
    }
}

/// Converts a magnitude with the language and flags selected by `options`.
pub fn convert(magnitude: u128, options: &Options) -> Result<String> {
    let language = options.language.resolve()?;
    Converter::new(language)?.convert(magnitude, Frame::from_options(options))
}

/// A descriptor paired with its scale table.
pub struct Converter<'a> {
    language: &'a LanguageDescriptor,
    units: Vec<Cow<'a, ScaleUnit>>,
    scale: ScaleTable,
}

impl<'a> Converter<'a> {
    pub fn new(language: &'a LanguageDescriptor) -> Result<Self> {
        Ok(Self {
            language,
            units: language.units.scale_units(),
            scale: ScaleTable::for_language(language)?,
        })
    }

    pub fn convert(&self, magnitude: u128, frame: Frame<'_>) -> Result<String> {
        self.convert_at(magnitude, frame, 0)
    }

    fn convert_at(&self, n: u128, frame: Frame<'_>, depth: usize) -> Result<String> {
        if depth > MAX_DEPTH {
            return Err(WrittenNumberError::RecursionLimit(MAX_DEPTH));
        }
        let language = self.language;
        let alternative = frame
            .alternative_base
            .and_then(|name| language.alternative_base.get(name));

        if let Some(word) = lookup(&language.unit_exceptions, n) {
            return Ok(word.to_owned());
        }
        if let Some(word) = alternative.and_then(|lexicon| lookup(lexicon, n)) {
            return Ok(word.to_owned());
        }
        if let Some(word) = lookup(&language.base, n).filter(|word| !word.is_empty()) {
            return Ok(word.to_owned());
        }
        if n < 100 {
            return self.below_hundred(n, alternative, frame, depth);
        }

        let trailing = n % 100;
        let mut chunks = Vec::new();
        if trailing != 0 {
            let words = self.convert_at(trailing, frame, depth + 1)?;
            if frame.no_and && !language.and_exception {
                chunks.push(words);
            } else {
                chunks.push(format!("{}{}", language.unit_separator, words));
            }
        }

        let mut remaining = n;
        let mut first_significant = 0;
        for (index, unit) in self.units.iter().enumerate() {
            // Thresholds ascend, so once one overflows all later ones do too.
            let Some(step) = self.scale.step(index) else {
                break;
            };
            let mut count = remaining / step.threshold;
            if let Some(divisor) = step.divisor {
                count %= divisor;
            }
            if count == 0 {
                continue;
            }
            first_significant = step.threshold;
            let unit = unit.as_ref();

            if let ScaleUnit::Grammar(grammar) = unit {
                if grammar.use_base_instead {
                    let excepted = grammar.uses_base_exception(count)
                        && (!grammar.use_base_exception_when_no_trailing_numbers
                            || (index == 0 && !chunks.is_empty()));
                    let word = if excepted {
                        match grammar.plural() {
                            Some(plural) if count > 1 => plural.to_owned(),
                            _ => grammar.singular.clone(),
                        }
                    } else {
                        self.compound(count * step.threshold, alternative)?
                    };
                    chunks.push(word);
                    continue;
                }
            }

            let word = grammar::resolve(unit, count, trailing != 0);
            let sub_frame = match unit {
                ScaleUnit::Grammar(grammar) if grammar.avoids_prefix(count) => {
                    chunks.push(word.to_owned());
                    continue;
                }
                ScaleUnit::Grammar(grammar) => Frame {
                    alternative_base: grammar.use_alternative_base.as_deref(),
                    no_and: !(language.and_exception || grammar.and_exception),
                },
                ScaleUnit::Plain(_) => Frame {
                    alternative_base: None,
                    no_and: !language.and_exception,
                },
            };
            let count_phrase = self.convert_at(count, sub_frame, depth + 1)?;
            remaining -= count * step.threshold;
            chunks.push(format!("{count_phrase} {word}"));
        }

        self.splice_conjunction(&mut chunks, remaining, first_significant);
        Ok(self.assemble(chunks))
    }

    fn below_hundred(
        &self,
        n: u128,
        alternative: Option<&Lexicon>,
        frame: Frame<'_>,
        depth: usize,
    ) -> Result<String> {
        let tens = n / 10 * 10;
        let unit = n - tens;
        let tens_word = alternative
            .and_then(|lexicon| lookup(lexicon, tens))
            .or_else(|| lookup(&self.language.base, tens))
            .unwrap_or_default();
        if unit == 0 {
            return Ok(tens_word.to_owned());
        }
        let unit_words = self.convert_at(unit, frame, depth + 1)?;
        Ok(format!(
            "{tens_word}{}{unit_words}",
            self.language.base_separator
        ))
    }

    /// An irregular count+unit word such as "doscientos".
    fn compound(&self, key: u128, alternative: Option<&Lexicon>) -> Result<String> {
        alternative
            .and_then(|lexicon| lookup(lexicon, key))
            .or_else(|| lookup(&self.language.base, key))
            .map(str::to_owned)
            .ok_or(WrittenNumberError::MissingWord(key))
    }

    /// Inserts a bare conjunction after the lowest chunk when content below
    /// the most significant unit trails without one.
    fn splice_conjunction(
        &self,
        chunks: &mut Vec<String>,
        remaining: u128,
        first_significant: u128,
    ) {
        let language = self.language;
        if !language.and_when_trailing || first_significant == 0 {
            return;
        }
        let rest = remaining % first_significant;
        let Some(lowest) = chunks.first() else {
            return;
        };
        if rest > 0 && !lowest.starts_with(&language.unit_separator) {
            chunks.insert(1, language.unit_separator.trim().to_owned());
        }
    }

    /// Chunks arrive least significant first.
    fn assemble(&self, mut chunks: Vec<String>) -> String {
        if let Some(prefix) = self.language.all_separator.as_deref().filter(|s| !s.is_empty()) {
            let most_significant = chunks.len().saturating_sub(1);
            for chunk in &mut chunks[..most_significant] {
                chunk.insert_str(0, prefix);
            }
        }
        chunks.reverse();
        chunks.join(" ")
    }
}
