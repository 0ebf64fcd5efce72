// File: src/languages/mod.rs
//! The built-in language table. Each language is a JSON descriptor compiled
//! into the binary and parsed once on first use.

use crate::core::types::LanguageDescriptor;
use crate::error::{Result, WrittenNumberError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// The built-in languages, identified by their short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Arabic,
    Azerbaijani,
    BrazilianPortuguese,
    EuropeanPortuguese,
    French,
    Esperanto,
    Italian,
    Vietnamese,
    Turkish,
    Hungarian,
    IndianEnglish,
    Ukrainian,
    Russian,
    Indonesian,
}

const LANGUAGE_COUNT: usize = 16;

static DESCRIPTORS: [OnceLock<LanguageDescriptor>; LANGUAGE_COUNT] =
    [const { OnceLock::new() }; LANGUAGE_COUNT];

impl Language {
    pub const ALL: [Language; LANGUAGE_COUNT] = [
        Language::English,
        Language::Spanish,
        Language::Arabic,
        Language::Azerbaijani,
        Language::BrazilianPortuguese,
        Language::EuropeanPortuguese,
        Language::French,
        Language::Esperanto,
        Language::Italian,
        Language::Vietnamese,
        Language::Turkish,
        Language::Hungarian,
        Language::IndianEnglish,
        Language::Ukrainian,
        Language::Russian,
        Language::Indonesian,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Arabic => "ar",
            Language::Azerbaijani => "az",
            Language::BrazilianPortuguese => "pt",
            Language::EuropeanPortuguese => "ptPT",
            Language::French => "fr",
            Language::Esperanto => "eo",
            Language::Italian => "it",
            Language::Vietnamese => "vi",
            Language::Turkish => "tr",
            Language::Hungarian => "hu",
            Language::IndianEnglish => "enIndian",
            Language::Ukrainian => "uk",
            Language::Russian => "ru",
            Language::Indonesian => "id",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Language::English => include_str!("data/en.json"),
            Language::Spanish => include_str!("data/es.json"),
            Language::Arabic => include_str!("data/ar.json"),
            Language::Azerbaijani => include_str!("data/az.json"),
            Language::BrazilianPortuguese => include_str!("data/pt.json"),
            Language::EuropeanPortuguese => include_str!("data/ptPT.json"),
            Language::French => include_str!("data/fr.json"),
            Language::Esperanto => include_str!("data/eo.json"),
            Language::Italian => include_str!("data/it.json"),
            Language::Vietnamese => include_str!("data/vi.json"),
            Language::Turkish => include_str!("data/tr.json"),
            Language::Hungarian => include_str!("data/hu.json"),
            Language::IndianEnglish => include_str!("data/enIndian.json"),
            Language::Ukrainian => include_str!("data/uk.json"),
            Language::Russian => include_str!("data/ru.json"),
            Language::Indonesian => include_str!("data/id.json"),
        }
    }

    /// The language's descriptor, parsed and validated on first access.
    pub fn descriptor(self) -> Result<&'static LanguageDescriptor> {
        let cell = &DESCRIPTORS[self as usize];
        if let Some(descriptor) = cell.get() {
            return Ok(descriptor);
        }
        let descriptor = LanguageDescriptor::from_json(self.source())?;
        debug!(language = self.code(), "loaded built-in language descriptor");
        // A concurrent first access may have won the race; both parsed the same data.
        Ok(cell.get_or_init(|| descriptor))
    }
}

impl FromStr for Language {
    type Err = WrittenNumberError;

    fn from_str(code: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| WrittenNumberError::InvalidLanguage(code.to_owned()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_built_in_descriptor_loads() {
        for language in Language::ALL {
            let descriptor = language.descriptor();
            assert!(descriptor.is_ok(), "{language}: {:?}", descriptor.err());
        }
    }

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn table_order_matches_discriminants() {
        for (index, language) in Language::ALL.into_iter().enumerate() {
            assert_eq!(language as usize, index);
        }
    }

    #[test]
    fn empty_and_unknown_codes_are_rejected() {
        assert!(matches!(
            "".parse::<Language>(),
            Err(WrittenNumberError::InvalidLanguage(_))
        ));
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(WrittenNumberError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn descriptors_are_shared() {
        let first = Language::Russian.descriptor().unwrap();
        let second = Language::Russian.descriptor().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
