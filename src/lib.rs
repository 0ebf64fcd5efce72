// src/lib.rs
//! Written-word forms of numbers, driven by declarative language descriptors.
//!
//! ```
//! use written_number::{written_number, Language, Options};
//!
//! let english = Options::default();
//! assert_eq!(written_number(1234, &english).unwrap(),
//!            "one thousand two hundred and thirty-four");
//!
//! let indonesian = Options::new(Language::Indonesian);
//! assert_eq!(written_number(100, &indonesian).unwrap(), "seratus");
//! ```

pub mod core;
pub mod error;
pub mod languages;
pub mod persistence;

pub use crate::core::engine::convert;
pub use crate::core::types::{
    Form, GrammarUnit, LanguageDescriptor, LanguageSelector, Lexicon, Options, ScaleUnit, UnitSet,
};
pub use crate::error::{Result, WrittenNumberError};
pub use crate::languages::Language;
pub use crate::persistence::{load_descriptor, save_descriptor};

/// Values that can be written out: native integers, floats and numeric strings.
pub trait ToWords {
    /// The non-negative integer magnitude to convert, or `InvalidInput`.
    fn magnitude(&self) -> Result<u128>;
}

impl<T: ToWords + ?Sized> ToWords for &T {
    fn magnitude(&self) -> Result<u128> {
        (**self).magnitude()
    }
}

macro_rules! integer_to_words {
    ($($int:ty),*) => {$(
        impl ToWords for $int {
            fn magnitude(&self) -> Result<u128> {
                u128::try_from(*self)
                    .map_err(|_| WrittenNumberError::InvalidInput(format!("{self} is negative")))
            }
        }
    )*};
}

integer_to_words!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ToWords for f64 {
    /// Rounds half to even before converting.
    fn magnitude(&self) -> Result<u128> {
        if self.is_nan() || *self < 0.0 {
            return Err(WrittenNumberError::InvalidInput(format!(
                "{self} is not a non-negative number"
            )));
        }
        let rounded = self.round_ties_even();
        if !rounded.is_finite() || rounded >= u128::MAX as f64 {
            return Err(WrittenNumberError::InvalidInput(format!("{self} is out of range")));
        }
        Ok(rounded as u128)
    }
}

impl ToWords for f32 {
    fn magnitude(&self) -> Result<u128> {
        f64::from(*self).magnitude()
    }
}

impl ToWords for str {
    fn magnitude(&self) -> Result<u128> {
        let text = self.trim();
        if let Ok(value) = text.parse::<u128>() {
            return Ok(value);
        }
        text.parse::<f64>()
            .map_err(|_| WrittenNumberError::InvalidInput(format!("`{text}` is not a number")))?
            .magnitude()
    }
}

impl ToWords for String {
    fn magnitude(&self) -> Result<u128> {
        self.as_str().magnitude()
    }
}

/// Writes `value` out in words.
///
/// Negative, non-finite and non-numeric input yields an empty string. Any
/// other failure points at a malformed descriptor; it is logged and returned.
pub fn written_number<T: ToWords>(value: T, options: &Options) -> Result<String> {
    let magnitude = match value.magnitude() {
        Ok(magnitude) => magnitude,
        Err(WrittenNumberError::InvalidInput(reason)) => {
            tracing::debug!(%reason, "input rejected");
            return Ok(String::new());
        }
        Err(error) => return Err(error),
    };
    convert(magnitude, options).inspect_err(|error| {
        tracing::error!(%error, %magnitude, "number conversion failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_convert_losslessly() {
        assert_eq!(7u8.magnitude().unwrap(), 7);
        assert_eq!(u128::MAX.magnitude().unwrap(), u128::MAX);
        assert_eq!(42i64.magnitude().unwrap(), 42);
        assert!(matches!(
            (-1i32).magnitude(),
            Err(WrittenNumberError::InvalidInput(_))
        ));
    }

    #[test]
    fn floats_round_half_to_even() {
        assert_eq!(2.5f64.magnitude().unwrap(), 2);
        assert_eq!(3.5f64.magnitude().unwrap(), 4);
        assert_eq!(12.4f32.magnitude().unwrap(), 12);
        assert!(f64::NAN.magnitude().is_err());
        assert!(f64::INFINITY.magnitude().is_err());
        assert!((-0.2f64).magnitude().is_err());
    }

    #[test]
    fn strings_parse_as_integers_then_floats() {
        assert_eq!("  1000 ".magnitude().unwrap(), 1000);
        assert_eq!("1e3".magnitude().unwrap(), 1000);
        assert_eq!(String::from("99.6").magnitude().unwrap(), 100);
        assert!("twelve".magnitude().is_err());
        assert!("-5".magnitude().is_err());
    }
}
