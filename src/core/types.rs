// src/core/types.rs
use crate::core::scale::ScaleTable;
use crate::error::{Result, WrittenNumberError};
use crate::languages::Language;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

/// Maps a count to the word (or phrase) that spells it.
pub type Lexicon = BTreeMap<u64, String>;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Looks up a magnitude in a lexicon. Magnitudes beyond `u64` never match.
pub(crate) fn lookup(lexicon: &Lexicon, magnitude: u128) -> Option<&str> {
    let key = u64::try_from(magnitude).ok()?;
    lexicon.get(&key).map(String::as_str)
}

/// True if `count` appears in one of a unit's exception lists.
pub(crate) fn listed(list: &[u64], count: u128) -> bool {
    u64::try_from(count).is_ok_and(|count| list.contains(&count))
}

fn non_empty(form: &Option<String>) -> Option<&str> {
    form.as_deref().filter(|word| !word.is_empty())
}

/// The immutable grammar of one language.
///
/// Built-in descriptors live in `src/languages/data/*.json` and are shared as
/// `&'static` references; custom ones are usually wrapped in an [`Arc`] and
/// handed to [`Options::custom`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    /// Selects the long-scale threshold progression for an ordered unit list.
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_long_scale: bool,
    /// Joins a tens word to its unit word, e.g. `-` in "twenty-one".
    #[serde(default)]
    pub base_separator: String,
    /// Prefixed to the sub-100 chunk of a larger number, e.g. `and `.
    #[serde(default)]
    pub unit_separator: String,
    /// Prefixed to every chunk but the most significant one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_separator: Option<String>,
    pub base: Lexicon,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alternative_base: BTreeMap<String, Lexicon>,
    /// Irregular words checked before any decomposition.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unit_exceptions: Lexicon,
    pub units: UnitSet,
    /// Keep the unit separator inside count phrases.
    #[serde(default, skip_serializing_if = "is_false")]
    pub and_exception: bool,
    /// Insert a bare conjunction before trailing content that lacks one.
    #[serde(default, skip_serializing_if = "is_false")]
    pub and_when_trailing: bool,
}

impl LanguageDescriptor {
    /// Parses and validates a descriptor from JSON.
    ///
    /// The shape of `units` is checked on its own first so that a malformed
    /// unit collection is reported as [`WrittenNumberError::InvalidUnits`]
    /// rather than as a generic JSON error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        UnitSet::from_value(value.get("units").cloned().unwrap_or(Value::Null))?;
        let descriptor: LanguageDescriptor = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Checks the structural invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        let scale = ScaleTable::for_language(self)?;
        let units = self.units.scale_units();

        let compound_key = |key: u64| {
            units.iter().enumerate().any(|(index, unit)| match unit.as_ref() {
                ScaleUnit::Grammar(grammar) if grammar.use_base_instead => scale
                    .step(index)
                    .is_some_and(|step| u128::from(key) % step.threshold == 0),
                _ => false,
            })
        };

        let lexicons = std::iter::once(("base", &self.base))
            .chain(self.alternative_base.iter().map(|(name, lex)| (name.as_str(), lex)));
        for (name, lexicon) in lexicons {
            if let Some(key) = lexicon.keys().find(|&&key| key >= 100 && !compound_key(key)) {
                return Err(WrittenNumberError::InvalidDescriptor(format!(
                    "lexicon `{name}` has key {key}, outside 0..=99 and not an irregular compound"
                )));
            }
        }

        for unit in &units {
            if let ScaleUnit::Grammar(GrammarUnit { use_alternative_base: Some(name), .. }) =
                unit.as_ref()
            {
                if !self.alternative_base.contains_key(name) {
                    return Err(WrittenNumberError::InvalidDescriptor(format!(
                        "unit `{}` references unknown alternative base `{name}`",
                        unit.word()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The collection of scale units of a language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnitSet {
    /// Units in ascending order; thresholds come from the short or long scale.
    Ordered(Vec<ScaleUnit>),
    /// Plain unit words keyed by their own power of ten.
    ByExponent(BTreeMap<u32, String>),
}

impl UnitSet {
    /// Number of units, smallest magnitude first.
    pub fn len(&self) -> usize {
        match self {
            UnitSet::Ordered(units) => units.len(),
            UnitSet::ByExponent(units) => units.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The units as [`ScaleUnit`]s, ascending. Exponent-keyed words are plain.
    pub fn scale_units(&self) -> Vec<Cow<'_, ScaleUnit>> {
        match self {
            UnitSet::Ordered(units) => units.iter().map(Cow::Borrowed).collect(),
            UnitSet::ByExponent(units) => units
                .values()
                .map(|word| Cow::Owned(ScaleUnit::Plain(word.clone())))
                .collect(),
        }
    }

    /// Classifies a JSON unit collection, rejecting any other shape.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| ScaleUnit::from_value(index, item))
                .collect::<Result<Vec<_>>>()
                .map(UnitSet::Ordered),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(exponent, word)| {
                    let exponent = exponent.parse::<u32>().map_err(|_| {
                        WrittenNumberError::InvalidUnits(format!(
                            "exponent key `{exponent}` is not a non-negative integer"
                        ))
                    })?;
                    match word {
                        Value::String(word) => Ok((exponent, word)),
                        other => Err(WrittenNumberError::InvalidUnits(format!(
                            "unit for exponent {exponent} must be a plain word, found {}",
                            json_kind(&other)
                        ))),
                    }
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(UnitSet::ByExponent),
            other => Err(WrittenNumberError::InvalidUnits(format!(
                "expected a unit list or an exponent map, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for UnitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        UnitSet::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One named magnitude grouping: hundred, thousand, million, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleUnit {
    /// A single invariant word.
    Plain(String),
    /// A word with inflected forms and per-count exceptions.
    Grammar(GrammarUnit),
}

impl ScaleUnit {
    fn from_value(index: usize, value: Value) -> Result<Self> {
        match value {
            Value::String(word) => Ok(ScaleUnit::Plain(word)),
            Value::Object(_) => serde_json::from_value(value)
                .map(ScaleUnit::Grammar)
                .map_err(|e| WrittenNumberError::InvalidUnits(format!("unit {index}: {e}"))),
            other => Err(WrittenNumberError::InvalidUnits(format!(
                "unit {index} must be a word or a grammar object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// The base (singular or invariant) word of the unit.
    pub fn word(&self) -> &str {
        match self {
            ScaleUnit::Plain(word) => word,
            ScaleUnit::Grammar(grammar) => &grammar.singular,
        }
    }
}

/// The inflectable forms of a unit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Singular,
    Dual,
    Few,
    Plural,
}

/// A scale unit with grammar rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarUnit {
    pub singular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual: Option<String>,
    /// Counts ending in 1 (21, 31, ...) take the singular.
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_singular_ending: bool,
    /// Counts ending in 2..=4 take the few form.
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_few_ending: bool,
    /// Counts exempt from the ending rules (11, 12, 112, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_ending_rules: Vec<u64>,
    /// Counts written as the bare unit word, without a count phrase.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_prefix_exception: Vec<u64>,
    /// Use the singular when a sub-100 remainder follows.
    #[serde(default, skip_serializing_if = "is_false")]
    pub avoid_in_number_plural: bool,
    /// Plural only for 3..=10; larger counts take the singular.
    #[serde(default, skip_serializing_if = "is_false")]
    pub restricted_plural: bool,
    /// Spell `count * threshold` as one lexicon entry.
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_base_instead: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_base_exception: Vec<u64>,
    /// `use_base_exception` applies only to the lowest unit followed by a remainder.
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_base_exception_when_no_trailing_numbers: bool,
    /// Alternative base used for this unit's count phrase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_alternative_base: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub and_exception: bool,
}

impl GrammarUnit {
    pub fn new(singular: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            ..Self::default()
        }
    }

    pub fn plural(&self) -> Option<&str> {
        non_empty(&self.plural)
    }

    pub fn few(&self) -> Option<&str> {
        non_empty(&self.few)
    }

    pub fn dual(&self) -> Option<&str> {
        non_empty(&self.dual)
    }

    /// The word for a form, falling back to the singular when undefined.
    pub fn form(&self, form: Form) -> &str {
        let word = match form {
            Form::Singular => None,
            Form::Dual => self.dual(),
            Form::Few => self.few(),
            Form::Plural => self.plural(),
        };
        word.unwrap_or(&self.singular)
    }

    pub fn avoids_prefix(&self, count: u128) -> bool {
        listed(&self.avoid_prefix_exception, count)
    }

    pub(crate) fn excludes_ending(&self, count: u128) -> bool {
        listed(&self.avoid_ending_rules, count)
    }

    pub(crate) fn uses_base_exception(&self, count: u128) -> bool {
        listed(&self.use_base_exception, count)
    }
}

/// Which descriptor a conversion runs against.
#[derive(Debug, Clone)]
pub enum LanguageSelector {
    BuiltIn(Language),
    Custom(Arc<LanguageDescriptor>),
}

impl Default for LanguageSelector {
    fn default() -> Self {
        LanguageSelector::BuiltIn(Language::default())
    }
}

impl LanguageSelector {
    /// Resolves the selector into the one descriptor the engine works with.
    pub fn resolve(&self) -> Result<&LanguageDescriptor> {
        match self {
            LanguageSelector::BuiltIn(language) => language.descriptor(),
            LanguageSelector::Custom(descriptor) => Ok(descriptor.as_ref()),
        }
    }
}

impl From<Language> for LanguageSelector {
    fn from(language: Language) -> Self {
        LanguageSelector::BuiltIn(language)
    }
}

impl From<LanguageDescriptor> for LanguageSelector {
    fn from(descriptor: LanguageDescriptor) -> Self {
        LanguageSelector::Custom(Arc::new(descriptor))
    }
}

impl From<Arc<LanguageDescriptor>> for LanguageSelector {
    fn from(descriptor: Arc<LanguageDescriptor>) -> Self {
        LanguageSelector::Custom(descriptor)
    }
}

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub language: LanguageSelector,
    /// Name of an alternative digit lexicon defined by the language.
    pub alternative_base: Option<String>,
    /// Suppress the unit separator before the sub-100 chunk.
    pub no_and: bool,
}

impl Options {
    pub fn new(language: impl Into<LanguageSelector>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Options for a validated custom descriptor.
    pub fn custom(descriptor: LanguageDescriptor) -> Result<Self> {
        descriptor.validate()?;
        Ok(Self::new(descriptor))
    }

    /// Options for a built-in language code such as `"ptPT"`.
    pub fn from_code(code: &str) -> Result<Self> {
        Language::from_str(code).map(Self::new)
    }

    pub fn with_alternative_base(mut self, name: impl Into<String>) -> Self {
        self.alternative_base = Some(name.into());
        self
    }

    pub fn with_no_and(mut self, no_and: bool) -> Self {
        self.no_and = no_and;
        self
    }
}
