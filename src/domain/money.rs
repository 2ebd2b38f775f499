//! Monetary amounts and their display convention.

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal so sums never drift.
pub type Price = Decimal;

/// Display convention for amounts: fixed two decimals, configurable
/// separator, no thousands grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub decimal_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
        }
    }
}

impl MoneyFormat {
    pub fn new(symbol: impl Into<String>, decimal_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator,
        }
    }

    /// Amount without the currency symbol, e.g. `1200,00`.
    pub fn amount(&self, amount: Price) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{rounded:.2}");
        fixed.replace('.', &self.decimal_separator.to_string())
    }

    /// Amount prefixed by the currency symbol, e.g. `R$ 1200,00`.
    pub fn format(&self, amount: Price) -> String {
        format!("{} {}", self.symbol, self.amount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_two_digits_with_comma() {
        let money = MoneyFormat::default();
        assert_eq!(money.format(dec!(1200)), "R$ 1200,00");
        assert_eq!(money.format(dec!(899.9)), "R$ 899,90");
        assert_eq!(money.amount(dec!(0)), "0,00");
    }

    #[test]
    fn rounds_to_cents() {
        let money = MoneyFormat::new("$", '.');
        assert_eq!(money.format(dec!(10.005)), "$ 10.01");
        assert_eq!(money.format(dec!(10.004)), "$ 10.00");
    }
}
