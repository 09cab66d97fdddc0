//! Per-hectare cost estimation in Indian rupees.
//!
//! Each category is rounded on its own and the total is the sum of the
//! rounded values, so it can differ from `round(hectares * 8500)`.

use super::types::CostEstimate;

pub const PRIMARY_COST_PER_HECTARE: f64 = 4000.0;
pub const SECONDARY_COST_PER_HECTARE: f64 = 2500.0;
pub const ORGANIC_COST_PER_HECTARE: f64 = 2000.0;

const CURRENCY_SYMBOL: &str = "₹";

/// Unformatted cost per category in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub primary: i64,
    pub secondary: i64,
    pub organic: i64,
}

impl CostBreakdown {
    pub fn for_hectares(hectares: f64) -> Self {
        Self {
            primary: round_to_unit(hectares * PRIMARY_COST_PER_HECTARE),
            secondary: round_to_unit(hectares * SECONDARY_COST_PER_HECTARE),
            organic: round_to_unit(hectares * ORGANIC_COST_PER_HECTARE),
        }
    }

    pub fn total(&self) -> i64 {
        self.primary + self.secondary + self.organic
    }

    pub fn to_estimate(&self) -> CostEstimate {
        CostEstimate {
            primary: format_rupees(self.primary),
            secondary: format_rupees(self.secondary),
            organic: format_rupees(self.organic),
            total: format_rupees(self.total()),
        }
    }
}

/// Round half up to a whole unit.
pub(crate) fn round_to_unit(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format an amount with the rupee symbol and Indian digit grouping:
/// the last three digits, then groups of two (`₹1,23,45,678`).
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
}
