use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Lunch,
    Dinner,
}

/// How a single day is counted in the monthly partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    FullPresent,
    OnlyLunch,
    OnlyDinner,
    FullAbsent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAttendance {
    pub date: NaiveDate,
    pub is_lunch_present: bool,
    pub is_dinner_present: bool,
}

impl DayAttendance {
    pub fn new(date: NaiveDate, is_lunch_present: bool, is_dinner_present: bool) -> Self {
        Self {
            date,
            is_lunch_present,
            is_dinner_present,
        }
    }

    /// The record assumed for any day nobody has touched.
    pub fn present(date: NaiveDate) -> Self {
        Self::new(date, true, true)
    }

    pub fn is_default(&self) -> bool {
        self.is_lunch_present && self.is_dinner_present
    }

    pub fn is_present(&self, meal: Meal) -> bool {
        match meal {
            Meal::Lunch => self.is_lunch_present,
            Meal::Dinner => self.is_dinner_present,
        }
    }

    pub fn with(self, meal: Meal, present: bool) -> Self {
        match meal {
            Meal::Lunch => Self {
                is_lunch_present: present,
                ..self
            },
            Meal::Dinner => Self {
                is_dinner_present: present,
                ..self
            },
        }
    }

    pub fn kind(&self) -> DayKind {
        match (self.is_lunch_present, self.is_dinner_present) {
            (true, true) => DayKind::FullPresent,
            (true, false) => DayKind::OnlyLunch,
            (false, true) => DayKind::OnlyDinner,
            (false, false) => DayKind::FullAbsent,
        }
    }
}
