
#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::LedgerError;
    use crate::model::attendance::DayAttendance;
    use crate::model::month::YearMonth;
    use crate::model::settings::MonthlySettings;
    use crate::repository::{FileLedgerRepository, LedgerRepository, MemoryLedgerRepository};
    use crate::usecase::tracker::{SaveOutcome, Tracker};
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::cell::Cell;

    struct FailingRepo {
        fail_loads: bool,
        saves: Cell<usize>,
    }

    impl FailingRepo {
        fn new(fail_loads: bool) -> Self {
            Self { fail_loads, saves: Cell::new(0) }
        }
    }

    impl LedgerRepository for FailingRepo {
        fn load_attendance(&self) -> Result<Vec<DayAttendance>> {
            if self.fail_loads { Err(anyhow!("offline")) } else { Ok(Vec::new()) }
        }
        fn load_settings(&self) -> Result<Vec<MonthlySettings>> {
            if self.fail_loads { Err(anyhow!("offline")) } else { Ok(Vec::new()) }
        }
        fn save_attendance(&self, _records: &[DayAttendance]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            Err(anyhow!("disk full"))
        }
        fn save_settings(&self, _records: &[MonthlySettings]) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let tracker = Tracker::open(FailingRepo::new(true), &Config::default());
        let summary = tracker.summary(ym(2024, 2));
        assert_eq!(summary.total_lunches, 29);
        assert_eq!(summary.remaining, -summary.total_spent);
    }

    #[test]
    fn test_unloaded_records_are_not_written_back() {
        let mut tracker = Tracker::open(FailingRepo::new(true), &Config::default());
        tracker.set_advance(ym(2024, 4), dec(10)).unwrap();
        assert_eq!(tracker.repository().saves.get(), 0);

        tracker.toggle_lunch(date(2024, 4, 2));
        assert_eq!(tracker.repository().saves.get(), 1);
    }

    #[test]
    fn test_unreadable_attendance_file_survives_settings_edit() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let attendance_path = repo.attendance_path().to_path_buf();
        std::fs::write(&attendance_path, r#"[{"date":"2024-04-02","is_lunch"#).unwrap();

        let mut tracker = Tracker::open(repo, &Config::default());
        assert!(tracker.set_advance(ym(2024, 4), dec(10)).unwrap().is_saved());
        assert_eq!(
            std::fs::read_to_string(&attendance_path).unwrap(),
            r#"[{"date":"2024-04-02","is_lunch"#
        );
        assert_eq!(tracker.repository().load_settings().unwrap()[0].advance_given, dec(10));

        // Once attendance itself changes, the session's copy is written.
        assert!(tracker.set_both_absent(date(2024, 4, 3)).is_saved());
        assert_eq!(
            tracker.repository().load_attendance().unwrap(),
            vec![DayAttendance::new(date(2024, 4, 3), false, false)]
        );
    }

    #[test]
    fn test_cached_carry_matches_summary_over_long_chain() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        let mut period = ym(2000, 1);
        for _ in 0..300 {
            tracker.set_advance(period, dec(3100)).unwrap();
            period = period.next();
        }
        tracker.set_both_absent(date(2024, 12, 1));

        let last = ym(2024, 12);
        assert!(tracker.summary(last).carried_from_previous > Decimal::ZERO);
        assert_eq!(
            tracker.settings(last).carried_from_previous,
            tracker.summary(last).carried_from_previous
        );
    }

    #[test]
    fn test_save_failure_keeps_local_state() {
        let mut tracker = Tracker::open(FailingRepo::new(false), &Config::default());

        let outcome = tracker.set_both_absent(date(2024, 3, 5));
        assert!(!outcome.is_saved());
        assert!(matches!(
            outcome.warning(),
            Some(LedgerError::Persistence { operation: "save attendance", .. })
        ));
        assert_eq!(
            tracker.attendance(date(2024, 3, 5)),
            DayAttendance::new(date(2024, 3, 5), false, false)
        );
        assert_eq!(tracker.repository().saves.get(), 1);

        let outcome = tracker.set_advance(ym(2024, 3), dec(500)).unwrap();
        assert!(matches!(outcome, SaveOutcome::LocalOnly(_)));
        assert_eq!(tracker.summary(ym(2024, 3)).advance_given, dec(500));
    }

    #[test]
    fn test_validation_rejects_before_store() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        let err = tracker.set_advance(ym(2024, 3), dec(-10)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation { .. }));
        assert!(tracker.repository().load_settings().unwrap().is_empty());

        assert!(tracker.set_meal_costs(ym(2024, 3), dec(-1), dec(10)).is_err());
        assert_eq!(tracker.settings(ym(2024, 3)).lunch_cost, dec(50));
    }

    #[test]
    fn test_mutations_reach_repository() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        assert!(tracker.toggle_lunch(date(2024, 3, 5)).is_saved());
        assert!(tracker.toggle_dinner(date(2024, 3, 6)).is_saved());
        tracker.set_meal_costs(ym(2024, 3), dec(40), dec(60)).unwrap();

        let saved = tracker.repository().load_attendance().unwrap();
        assert_eq!(
            saved,
            vec![
                DayAttendance::new(date(2024, 3, 5), false, true),
                DayAttendance::new(date(2024, 3, 6), true, false),
            ]
        );
        let settings = tracker.repository().load_settings().unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].lunch_cost, dec(40));

        tracker.set_both_present(date(2024, 3, 5));
        let saved = tracker.repository().load_attendance().unwrap();
        assert_eq!(saved[0], DayAttendance::present(date(2024, 3, 5)));
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_cached_carry_is_refreshed_on_save() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        for day in 1..=30 {
            tracker.set_both_absent(date(2024, 4, day));
        }
        tracker.set_advance(ym(2024, 4), dec(1000)).unwrap();
        tracker.set_advance(ym(2024, 5), dec(0)).unwrap();

        assert_eq!(tracker.settings(ym(2024, 5)).carried_from_previous, dec(1000));
        assert_eq!(tracker.summary(ym(2024, 5)).carried_from_previous, dec(1000));

        // Eating one lunch in April lowers May's carry at the next save.
        tracker.toggle_lunch(date(2024, 4, 10));
        assert_eq!(tracker.settings(ym(2024, 5)).carried_from_previous, dec(950));
        let saved = tracker.repository().load_settings().unwrap();
        assert_eq!(saved[1].carried_from_previous, dec(950));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        tracker.set_both_absent(date(2024, 3, 5));
        tracker.set_advance(ym(2024, 3), dec(100)).unwrap();

        assert!(tracker.reset().is_saved());
        assert!(tracker.attendance(date(2024, 3, 5)).is_default());
        assert_eq!(tracker.summary(ym(2024, 3)).advance_given, Decimal::ZERO);
        assert!(tracker.repository().load_attendance().unwrap().is_empty());
        assert!(tracker.repository().load_settings().unwrap().is_empty());
    }

    #[test]
    fn test_config_default_cost_applies() {
        let config = Config { default_meal_cost: dec(30) };
        let tracker = Tracker::open(MemoryLedgerRepository::new(), &config);
        assert_eq!(tracker.summary(ym(2023, 2)).total_spent, dec(28 * 60));
    }

    #[test]
    fn test_session_survives_reopen_from_files() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
            let mut tracker = Tracker::open(repo, &Config::default());
            tracker.set_meals(date(2024, 3, 5), true, false);
            tracker.set_meal_costs(ym(2024, 3), dec(40), dec(60)).unwrap();
        }

        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let tracker = Tracker::open(repo, &Config::default());
        let summary = tracker.summary(ym(2024, 3));
        assert_eq!(summary.total_lunches, 31);
        assert_eq!(summary.total_dinners, 30);
        assert_eq!(summary.total_spent, dec(3040));
    }

    #[test]
    fn test_history_reads_session_state() {
        let mut tracker = Tracker::open(MemoryLedgerRepository::new(), &Config::default());
        tracker.set_advance(ym(2024, 1), dec(5000)).unwrap();
        let year = tracker.history().year(2024);
        assert_eq!(year.len(), 12);
        assert_eq!(year[1].carried_from_previous, dec(5000 - 3100));
        assert_eq!(tracker.history().active_months(), vec![ym(2024, 1)]);
    }
}
