//! # Configuration State
//!
//! Stores shop configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPZEN_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use shopzen_core::validation::{parse_percent, validate_tax_rate, ValidationResult};
use shopzen_core::{Money, Percent, DEFAULT_POS_TAX_PERCENT, DEFAULT_PURCHASE_TAX_PERCENT};
use tracing::warn;

/// Shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (receipt header)
    pub store_name: String,

    /// Second header line on receipts
    pub tagline: String,

    /// Currency symbol printed on receipts and in logs
    pub currency_symbol: String,

    /// Tax rate a new POS session starts with
    pub pos_tax_rate: Percent,

    /// Tax rate a new purchase invoice starts with
    pub purchase_tax_rate: Percent,

    /// Receipt paper width in characters (typically 32, 42 or 48)
    pub receipt_width: usize,
}

impl Default for ConfigState {
    /// Development defaults: "ShopZen", USD, 10% POS tax, 8% purchase tax,
    /// 42-column receipts.
    fn default() -> Self {
        ConfigState {
            store_name: "ShopZen".to_string(),
            tagline: "Mobile Shop Management".to_string(),
            currency_symbol: "$".to_string(),
            pos_tax_rate: Percent::from_whole(DEFAULT_POS_TAX_PERCENT),
            purchase_tax_rate: Percent::from_whole(DEFAULT_PURCHASE_TAX_PERCENT),
            receipt_width: 42,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPZEN_STORE_NAME`: Override store name
    /// - `SHOPZEN_CURRENCY_SYMBOL`: Currency symbol (e.g. "€")
    /// - `SHOPZEN_TAX_RATE`: POS tax rate in percent (e.g. "10")
    /// - `SHOPZEN_PURCHASE_TAX_RATE`: Purchase tax rate in percent (e.g. "8")
    /// - `SHOPZEN_RECEIPT_WIDTH`: Receipt width in characters
    ///
    /// Unparseable or out-of-range values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (env, test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SHOPZEN_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOPZEN_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SHOPZEN_TAX_RATE") {
            match tax_rate("SHOPZEN_TAX_RATE", &raw) {
                Ok(rate) => config.pos_tax_rate = rate,
                Err(e) => warn!(error = %e, "Ignoring invalid POS tax rate"),
            }
        }

        if let Some(raw) = lookup("SHOPZEN_PURCHASE_TAX_RATE") {
            match tax_rate("SHOPZEN_PURCHASE_TAX_RATE", &raw) {
                Ok(rate) => config.purchase_tax_rate = rate,
                Err(e) => warn!(error = %e, "Ignoring invalid purchase tax rate"),
            }
        }

        if let Some(raw) = lookup("SHOPZEN_RECEIPT_WIDTH") {
            match raw.trim().parse::<usize>() {
                Ok(width) => config.receipt_width = width,
                Err(_) => warn!(value = %raw, "Ignoring invalid receipt width"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shopzen_console::state::ConfigState;
    /// use shopzen_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

fn tax_rate(field: &str, raw: &str) -> ValidationResult<Percent> {
    let rate = parse_percent(field, raw)?;
    validate_tax_rate(rate)?;
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.pos_tax_rate, Percent::from_whole(10));
        assert_eq!(config.purchase_tax_rate, Percent::from_whole(8));
        assert_eq!(config.receipt_width, 42);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPZEN_STORE_NAME", "Downtown Mobile"),
            ("SHOPZEN_TAX_RATE", "8.25"),
            ("SHOPZEN_RECEIPT_WIDTH", "32"),
        ]));

        assert_eq!(config.store_name, "Downtown Mobile");
        assert_eq!(config.pos_tax_rate, Percent::from_bps(825));
        assert_eq!(config.purchase_tax_rate, Percent::from_whole(8));
        assert_eq!(config.receipt_width, 32);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPZEN_TAX_RATE", "lots"),
            ("SHOPZEN_RECEIPT_WIDTH", "-1"),
        ]));

        assert_eq!(config.pos_tax_rate, Percent::from_whole(10));
        assert_eq!(config.receipt_width, 42);
    }

    #[test]
    fn test_out_of_range_tax_rates_fall_back_to_defaults() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPZEN_TAX_RATE", "-5"),
            ("SHOPZEN_PURCHASE_TAX_RATE", "79228162514264337593543950335"),
        ]));

        assert_eq!(config.pos_tax_rate, Percent::from_whole(10));
        assert_eq!(config.purchase_tax_rate, Percent::from_whole(8));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(
            config.format_currency(Money::from_cents(123_456_789)),
            "$1234567.89"
        );

        let config = ConfigState::from_lookup(lookup(&[("SHOPZEN_CURRENCY_SYMBOL", "€")]));
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-€12.34");
    }
}
