//! Defines the currencies a storefront can price its catalog in.

use serde::Deserialize;
use serde::Serialize;

/// A store currency, carrying its code and display symbol.
///
/// Every supported currency is displayed with two decimal places.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum StoreCurrency {
    AED, // United Arab Emirates Dirham
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    EUR, // Euro
    GBP, // Great British Pound
    SAR, // Saudi Riyal
    #[default]
    USD, // United States Dollar
}

impl StoreCurrency {
    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AED => "د.إ",
            Self::AUD => "A$",
            Self::CAD => "C$",
            Self::CHF => "CHF ",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::SAR => "﷼",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(StoreCurrency::from_str("eur"), Ok(StoreCurrency::EUR));
        assert_eq!(StoreCurrency::from_str("Usd"), Ok(StoreCurrency::USD));
        assert!(StoreCurrency::from_str("XYZ").is_err());
    }

    #[test]
    fn code_matches_variant_name() {
        assert_eq!(StoreCurrency::GBP.code(), "GBP");
        assert_eq!(StoreCurrency::default().code(), "USD");
    }
}
