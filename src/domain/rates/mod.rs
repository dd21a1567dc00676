// SPDX-License-Identifier: MPL-2.0
//! Rate ladder: one exchange rate expanded over a fixed set of multipliers.

use crate::domain::currency::format_fixed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ladder row. Generated fresh for every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRow {
    pub multiplier: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub from_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub to_amount: Decimal,
}

impl RateRow {
    /// Source amount as displayed: the literal `1` for the unit row, whole
    /// units otherwise.
    #[must_use]
    pub fn source_text(&self) -> String {
        if self.multiplier == 1 {
            "1".to_string()
        } else {
            format_fixed(self.from_amount, 0)
        }
    }

    /// Target amount as displayed, always two fractional digits.
    #[must_use]
    pub fn target_text(&self) -> String {
        format_fixed(self.to_amount, 2)
    }

    /// Multiplier label, e.g. `10×`.
    #[must_use]
    pub fn multiplier_text(&self) -> String {
        format!("{}×", self.multiplier)
    }
}

/// Builds one row per multiplier, in the given order.
///
/// Multipliers are caller-supplied and used as-is: no sorting, no
/// deduplication, nothing derived from the rate itself.
#[must_use]
pub fn build_ladder(rate: Decimal, multipliers: &[u32]) -> Vec<RateRow> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let from_amount = Decimal::from(multiplier);
            RateRow {
                multiplier,
                from_amount,
                to_amount: from_amount.saturating_mul(rate),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(rows: &[RateRow]) -> Vec<(u32, String, String)> {
        rows.iter()
            .map(|row| (row.multiplier, row.source_text(), row.target_text()))
            .collect()
    }

    #[test]
    fn ladder_for_rate_ninety() {
        let rows = build_ladder(Decimal::new(900, 1), &[1, 5, 10, 50, 100]);
        assert_eq!(
            rendered(&rows),
            vec![
                (1, "1".to_string(), "90.00".to_string()),
                (5, "5".to_string(), "450.00".to_string()),
                (10, "10".to_string(), "900.00".to_string()),
                (50, "50".to_string(), "4500.00".to_string()),
                (100, "100".to_string(), "9000.00".to_string()),
            ]
        );
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let rows = build_ladder(Decimal::from(2), &[10, 1, 10]);
        let multipliers: Vec<u32> = rows.iter().map(|row| row.multiplier).collect();
        assert_eq!(multipliers, vec![10, 1, 10]);
    }

    #[test]
    fn empty_multipliers_yield_empty_ladder() {
        assert!(build_ladder(Decimal::ONE, &[]).is_empty());
    }

    #[test]
    fn small_rates_keep_two_decimals() {
        let rows = build_ladder(Decimal::new(11, 3), &[1, 1000]);
        assert_eq!(rows[0].target_text(), "0.01");
        assert_eq!(rows[1].source_text(), "1000");
        assert_eq!(rows[1].target_text(), "11.00");
        assert_eq!(rows[1].multiplier_text(), "1000×");
    }

    #[test]
    fn decodes_backend_rows() {
        let json = r#"[{"multiplier":1,"fromAmount":1,"toAmount":90.5},{"multiplier":10,"fromAmount":10,"toAmount":905}]"#;
        let rows: Vec<RateRow> = serde_json::from_str(json).expect("valid rows json");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].source_text(), "10");
        assert_eq!(rows[1].target_text(), "905.00");
    }
}
