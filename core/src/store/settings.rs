use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{ensure_non_negative, LedgerError};
use crate::model::month::YearMonth;
use crate::model::settings::{MonthlySettings, DEFAULT_MEAL_COST};

/// Per-month advance and meal cost configuration.
#[derive(Debug, Clone)]
pub struct MonthlySettingsStore {
    records: BTreeMap<YearMonth, MonthlySettings>,
    default_cost: Decimal,
}

impl Default for MonthlySettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_MEAL_COST)
    }
}

impl MonthlySettingsStore {
    pub fn new(default_cost: Decimal) -> Self {
        Self {
            records: BTreeMap::new(),
            default_cost,
        }
    }

    /// Builds a store from persisted rows, skipping rows that do not name a real month.
    pub fn from_records<I>(records: I, default_cost: Decimal) -> Self
    where
        I: IntoIterator<Item = MonthlySettings>,
    {
        let mut store = Self::new(default_cost);
        for record in records {
            match record.period() {
                Some(period) => {
                    store.records.insert(period, record);
                }
                None => warn!(
                    year = record.year,
                    month = record.month,
                    "skipping settings for invalid month"
                ),
            }
        }
        store
    }

    pub fn default_cost(&self) -> Decimal {
        self.default_cost
    }

    /// Stored settings, or unsaved defaults when the month was never touched.
    pub fn get(&self, period: YearMonth) -> MonthlySettings {
        self.records
            .get(&period)
            .cloned()
            .unwrap_or_else(|| MonthlySettings::new(period, self.default_cost))
    }

    pub fn contains(&self, period: YearMonth) -> bool {
        self.records.contains_key(&period)
    }

    pub fn set_advance(&mut self, period: YearMonth, amount: Decimal) -> Result<(), LedgerError> {
        ensure_non_negative("advance", amount)?;
        self.entry(period).advance_given = amount;
        Ok(())
    }

    pub fn set_meal_costs(
        &mut self,
        period: YearMonth,
        lunch_cost: Decimal,
        dinner_cost: Decimal,
    ) -> Result<(), LedgerError> {
        ensure_non_negative("lunch cost", lunch_cost)?;
        ensure_non_negative("dinner cost", dinner_cost)?;
        let settings = self.entry(period);
        settings.lunch_cost = lunch_cost;
        settings.dinner_cost = dinner_cost;
        Ok(())
    }

    /// Refreshes the cached carry-forward of a stored month. Untouched months stay unstored.
    pub fn cache_carry(&mut self, period: YearMonth, amount: Decimal) {
        if let Some(settings) = self.records.get_mut(&period) {
            settings.carried_from_previous = amount;
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn months(&self) -> BTreeSet<YearMonth> {
        self.records.keys().copied().collect()
    }

    pub fn records(&self) -> Vec<MonthlySettings> {
        self.records.values().cloned().collect()
    }

    fn entry(&mut self, period: YearMonth) -> &mut MonthlySettings {
        let default_cost = self.default_cost;
        self.records
            .entry(period)
            .or_insert_with(|| MonthlySettings::new(period, default_cost))
    }
}
