use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::month::YearMonth;

/// Reconciled ledger of one month. Always derived, never the source of truth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub advance_given: Decimal,
    pub carried_from_previous: Decimal,
    pub effective_advance: Decimal,
    pub total_lunches: u32,
    pub total_dinners: u32,
    pub total_meals: u32,
    pub lunch_cost: Decimal,
    pub dinner_cost: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub total_days_in_month: u32,
    pub full_present_days: u32,
    pub half_days: u32,
    pub full_absent_days: u32,
    pub days_with_only_lunch: u32,
    pub days_with_only_dinner: u32,
    pub days_absent: u32,
}

impl MonthSummary {
    pub fn period(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month)
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}
