use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::model::attendance::DayAttendance;
use crate::model::month::YearMonth;

/// Sparse date -> attendance map. Missing dates mean present for both meals.
///
/// A date the user has touched keeps its record even when it is set back to
/// present/present, so the month still counts as holding data.
#[derive(Debug, Clone, Default)]
pub struct AttendanceStore {
    records: BTreeMap<NaiveDate, DayAttendance>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted rows. Later rows for the same date win.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = DayAttendance>,
    {
        let mut store = Self::new();
        for record in records {
            store.set(record.date, record.is_lunch_present, record.is_dinner_present);
        }
        store
    }

    pub fn get(&self, date: NaiveDate) -> DayAttendance {
        self.records
            .get(&date)
            .copied()
            .unwrap_or_else(|| DayAttendance::present(date))
    }

    pub fn set(&mut self, date: NaiveDate, is_lunch_present: bool, is_dinner_present: bool) {
        self.records
            .insert(date, DayAttendance::new(date, is_lunch_present, is_dinner_present));
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Explicit records falling inside `period`, in date order.
    pub fn in_month(&self, period: YearMonth) -> impl Iterator<Item = &DayAttendance> {
        let range = match (period.first_day(), period.last_day()) {
            (Some(first), Some(last)) => Some(first..=last),
            _ => None,
        };
        range
            .into_iter()
            .flat_map(move |range| self.records.range(range).map(|(_, record)| record))
    }

    pub fn has_month(&self, period: YearMonth) -> bool {
        self.in_month(period).next().is_some()
    }

    pub fn months(&self) -> BTreeSet<YearMonth> {
        self.records.keys().map(|date| YearMonth::of(*date)).collect()
    }

    pub fn records(&self) -> Vec<DayAttendance> {
        self.records.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
