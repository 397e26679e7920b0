use chrono::NaiveDate;
use tracing::info;

use crate::model::attendance::{DayAttendance, Meal};
use crate::store::AttendanceStore;

/// Toggle and set operations over an [`AttendanceStore`].
///
/// Every operation replaces the whole day record in one write. Prefer
/// [`AttendanceMutator::set_meals`] over two toggles when both flags change.
pub struct AttendanceMutator<'a> {
    store: &'a mut AttendanceStore,
}

impl<'a> AttendanceMutator<'a> {
    pub fn new(store: &'a mut AttendanceStore) -> Self {
        Self { store }
    }

    pub fn toggle_lunch(&mut self, date: NaiveDate) -> DayAttendance {
        self.toggle(date, Meal::Lunch)
    }

    pub fn toggle_dinner(&mut self, date: NaiveDate) -> DayAttendance {
        self.toggle(date, Meal::Dinner)
    }

    pub fn toggle(&mut self, date: NaiveDate, meal: Meal) -> DayAttendance {
        let current = self.store.get(date);
        let updated = current.with(meal, !current.is_present(meal));
        self.write(updated)
    }

    pub fn set_meals(
        &mut self,
        date: NaiveDate,
        is_lunch_present: bool,
        is_dinner_present: bool,
    ) -> DayAttendance {
        self.write(DayAttendance::new(date, is_lunch_present, is_dinner_present))
    }

    pub fn set_both_present(&mut self, date: NaiveDate) -> DayAttendance {
        self.set_meals(date, true, true)
    }

    pub fn set_both_absent(&mut self, date: NaiveDate) -> DayAttendance {
        self.set_meals(date, false, false)
    }

    fn write(&mut self, record: DayAttendance) -> DayAttendance {
        self.store
            .set(record.date, record.is_lunch_present, record.is_dinner_present);
        info!(
            date = %record.date,
            lunch = record.is_lunch_present,
            dinner = record.is_dinner_present,
            "attendance updated"
        );
        record
    }
}
