use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::month::YearMonth;

/// Per-meal cost used for months nobody has configured yet.
pub const DEFAULT_MEAL_COST: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlySettings {
    pub year: i32,
    pub month: u32,
    pub advance_given: Decimal,
    // Cached hint only. The carry-forward resolver is authoritative.
    #[serde(default)]
    pub carried_from_previous: Decimal,
    pub lunch_cost: Decimal,
    pub dinner_cost: Decimal,
}

impl MonthlySettings {
    pub fn new(period: YearMonth, default_cost: Decimal) -> Self {
        Self {
            year: period.year(),
            month: period.month(),
            advance_given: Decimal::ZERO,
            carried_from_previous: Decimal::ZERO,
            lunch_cost: default_cost,
            dinner_cost: default_cost,
        }
    }

    /// `None` for rows whose year/month do not name a real month.
    pub fn period(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}
