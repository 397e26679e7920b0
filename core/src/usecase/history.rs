use rust_decimal::Decimal;

use crate::model::month::YearMonth;
use crate::model::summary::MonthSummary;
use crate::service::carry_forward::CarryForwardResolver;
use crate::service::ledger::summarize;
use crate::store::{AttendanceStore, MonthlySettingsStore};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryTotals {
    pub months: usize,
    pub total_meals: u32,
    pub advance_given: Decimal,
    pub total_spent: Decimal,
}

pub struct HistoryUseCase<'a> {
    attendance: &'a AttendanceStore,
    settings: &'a MonthlySettingsStore,
}

impl<'a> HistoryUseCase<'a> {
    pub fn new(attendance: &'a AttendanceStore, settings: &'a MonthlySettingsStore) -> Self {
        Self {
            attendance,
            settings,
        }
    }

    /// Summaries for every month in `from..=to`, oldest first.
    ///
    /// Only the first month resolves its carry-forward from scratch; each
    /// later one takes it from the summary just built.
    pub fn months(&self, from: YearMonth, to: YearMonth) -> Vec<MonthSummary> {
        let resolver = CarryForwardResolver::new(self.attendance, self.settings);
        let mut summaries: Vec<MonthSummary> = Vec::new();
        let mut period = from;
        let mut carried = resolver.resolve(from);

        while period <= to {
            let summary = summarize(period, self.attendance, &self.settings.get(period), carried);
            carried = if resolver.has_data(period) {
                summary.remaining.max(Decimal::ZERO)
            } else {
                Decimal::ZERO
            };
            summaries.push(summary);
            period = period.next();
        }
        summaries
    }

    pub fn year(&self, year: i32) -> Vec<MonthSummary> {
        match (YearMonth::new(year, 1), YearMonth::new(year, 12)) {
            (Some(from), Some(to)) => self.months(from, to),
            _ => Vec::new(),
        }
    }

    /// Months holding any stored attendance or settings, oldest first.
    pub fn active_months(&self) -> Vec<YearMonth> {
        let mut months = self.attendance.months();
        months.extend(self.settings.months());
        months.into_iter().collect()
    }

    pub fn totals(summaries: &[MonthSummary]) -> HistoryTotals {
        summaries.iter().fold(
            HistoryTotals {
                months: summaries.len(),
                ..HistoryTotals::default()
            },
            |mut acc, s| {
                acc.total_meals += s.total_meals;
                acc.advance_given += s.advance_given;
                acc.total_spent += s.total_spent;
                acc
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ledger::LedgerCalculator;
    use chrono::NaiveDate;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> (AttendanceStore, MonthlySettingsStore) {
        let mut attendance = AttendanceStore::new();
        for day in 1..=20 {
            attendance.set(date(2024, 1, day), false, false);
        }
        attendance.set(date(2024, 3, 3), true, false);

        let mut settings = MonthlySettingsStore::new(Decimal::from(10));
        settings.set_advance(ym(2023, 12), Decimal::from(900)).unwrap();
        settings.set_advance(ym(2024, 1), Decimal::from(300)).unwrap();
        settings.set_advance(ym(2024, 4), Decimal::from(700)).unwrap();
        (attendance, settings)
    }

    #[test]
    fn test_months_match_calculator() {
        let (attendance, settings) = sample();
        let history = HistoryUseCase::new(&attendance, &settings);
        let calculator = LedgerCalculator::new(&attendance, &settings);

        let summaries = history.months(ym(2023, 11), ym(2024, 5));
        assert_eq!(summaries.len(), 7);
        for summary in &summaries {
            let period = ym(summary.year, summary.month);
            assert_eq!(summary, &calculator.calculate(period), "mismatch for {}", period);
        }
    }

    #[test]
    fn test_carry_flows_through_range() {
        let (attendance, settings) = sample();
        let history = HistoryUseCase::new(&attendance, &settings);
        let summaries = history.months(ym(2023, 12), ym(2024, 2));

        // December: 900 - 31 * 20 = 280 left over.
        assert_eq!(summaries[0].remaining, Decimal::from(280));
        // January: 11 present days cost 220 against 300 + 280.
        assert_eq!(summaries[1].carried_from_previous, Decimal::from(280));
        assert_eq!(summaries[1].remaining, Decimal::from(360));
        // February holds no data of its own but still receives January's balance.
        assert_eq!(summaries[2].carried_from_previous, Decimal::from(360));
    }

    #[test]
    fn test_empty_and_reversed_ranges() {
        let (attendance, settings) = sample();
        let history = HistoryUseCase::new(&attendance, &settings);
        assert!(history.months(ym(2024, 5), ym(2024, 4)).is_empty());
        assert_eq!(history.year(2024).len(), 12);
    }

    #[test]
    fn test_active_months_and_totals() {
        let (attendance, settings) = sample();
        let history = HistoryUseCase::new(&attendance, &settings);
        assert_eq!(
            history.active_months(),
            vec![ym(2023, 12), ym(2024, 1), ym(2024, 3), ym(2024, 4)]
        );

        let summaries = history.months(ym(2023, 12), ym(2024, 1));
        let totals = HistoryUseCase::totals(&summaries);
        assert_eq!(totals.months, 2);
        assert_eq!(totals.total_meals, 62 + 22);
        assert_eq!(totals.advance_given, Decimal::from(1200));
        assert_eq!(totals.total_spent, Decimal::from(620 + 220));
    }
}
