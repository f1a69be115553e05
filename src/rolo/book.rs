//! The [`AddressBook`]: a keyed collection of contact records.
//!
//! Keys are the records' name values, one record per name. Backing storage
//! is a `Vec` so iteration and the serialized document keep insertion
//! order; lookups are linear, which is fine at address-book scale.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoloError};
use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// One row of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The stored birth date, original year included.
    pub birthday: NaiveDate,
    /// The projected date moved off weekends: Saturday rolls +2 days,
    /// Sunday +1, both landing on the following Monday.
    pub congratulation_date: NaiveDate,
    /// Weekday the projected birthday itself falls on.
    pub original_weekday: Weekday,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name().as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.contains(record.name().as_str()) {
            return Err(RoloError::ContactExists {
                name: record.name().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.name().as_str() == name)
            .ok_or_else(|| RoloError::ContactNotFound {
                name: name.to_string(),
            })
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name().as_str() == name)
            .ok_or_else(|| RoloError::ContactNotFound {
                name: name.to_string(),
            })
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.name().as_str() == name)
            .ok_or_else(|| RoloError::ContactNotFound {
                name: name.to_string(),
            })?;
        self.records.remove(position);
        Ok(())
    }

    /// Records whose next birthday falls within `days` days of `today`
    /// (inclusive of today, exclusive of `today + days`), sorted ascending
    /// by congratulation date. Ties keep book order; the sort is stable.
    pub fn upcoming_birthdays(&self, days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let birth_date = birthday.date();

            let mut projected = project_onto_year(birth_date, today.year());
            if projected < today {
                projected = project_onto_year(birth_date, today.year() + 1);
            }

            let delta = (projected - today).num_days();
            if delta < 0 || delta >= i64::from(days) {
                continue;
            }

            let congratulation_date = match projected.weekday() {
                Weekday::Sat => projected + Duration::days(2),
                Weekday::Sun => projected + Duration::days(1),
                _ => projected,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                birthday: birth_date,
                congratulation_date,
                original_weekday: projected.weekday(),
            });
        }
        upcoming.sort_by_key(|u| u.congratulation_date);
        upcoming
    }
}

/// Pair a birthday's month and day with `year`. A Feb 29 birthday projected
/// onto a non-leap year resolves to Mar 1.
fn project_onto_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 is always valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_birthday(name: &str, birthday: &str, today: NaiveDate) -> Record {
        let mut record = Record::new(name).unwrap();
        record.set_birthday(birthday, today).unwrap();
        record
    }

    #[test]
    fn add_rejects_existing_name() {
        let mut book = AddressBook::new();
        book.add(Record::new("Anna").unwrap()).unwrap();
        let err = book.add(Record::new("Anna").unwrap()).unwrap_err();
        assert!(matches!(err, RoloError::ContactExists { ref name } if name == "Anna"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn find_is_idempotent_and_missing_names_fail() {
        let mut book = AddressBook::new();
        book.add(Record::new("Anna").unwrap()).unwrap();

        assert_eq!(book.find("Anna").unwrap(), book.find("Anna").unwrap());
        for _ in 0..2 {
            let err = book.find("Bob").unwrap_err();
            assert!(matches!(err, RoloError::ContactNotFound { ref name } if name == "Bob"));
        }
    }

    #[test]
    fn delete_removes_record() {
        let mut book = AddressBook::new();
        book.add(Record::new("Anna").unwrap()).unwrap();
        book.delete("Anna").unwrap();
        assert!(book.is_empty());
        assert!(matches!(
            book.delete("Anna"),
            Err(RoloError::ContactNotFound { .. })
        ));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Clara", "Anna", "Bob"] {
            book.add(Record::new(name).unwrap()).unwrap();
        }
        let names: Vec<_> = book.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["Clara", "Anna", "Bob"]);
    }

    #[test]
    fn upcoming_includes_birthday_within_window() {
        // 2026-06-05 is a Friday; 2026-06-10 a Wednesday.
        let today = date(2026, 6, 5);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Anna", "10.06.1990", today))
            .unwrap();

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Anna");
        assert_eq!(upcoming[0].birthday, date(1990, 6, 10));
        assert_eq!(upcoming[0].congratulation_date, date(2026, 6, 10));
        assert_eq!(upcoming[0].original_weekday, Weekday::Wed);
    }

    #[test]
    fn window_is_inclusive_of_today_and_exclusive_of_day_n() {
        let today = date(2026, 6, 5);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Today", "05.06.1990", today))
            .unwrap();
        book.add(record_with_birthday("Edge", "12.06.1990", today))
            .unwrap();

        let names: Vec<_> = book
            .upcoming_birthdays(7, today)
            .into_iter()
            .map(|u| u.name)
            .collect();
        // delta 0 is in, delta 7 is out.
        assert_eq!(names, ["Today"]);
    }

    #[test]
    fn passed_birthday_projects_onto_next_year() {
        // 2026-06-09: Anna's June 8 birthday has already passed this year.
        let today = date(2026, 6, 9);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Anna", "08.06.1990", today))
            .unwrap();

        assert!(book.upcoming_birthdays(7, today).is_empty());
        let upcoming = book.upcoming_birthdays(365, today);
        assert_eq!(upcoming.len(), 1);
        // 2027-06-08 is a Tuesday, no weekend shift.
        assert_eq!(upcoming[0].congratulation_date, date(2027, 6, 8));
    }

    #[test]
    fn saturday_birthday_rolls_two_days_to_monday() {
        // 2026-06-13 is a Saturday.
        let today = date(2026, 6, 10);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Anna", "13.06.1990", today))
            .unwrap();

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming[0].original_weekday, Weekday::Sat);
        assert_eq!(upcoming[0].congratulation_date, date(2026, 6, 15));
        assert_eq!(upcoming[0].congratulation_date.weekday(), Weekday::Mon);
    }

    #[test]
    fn sunday_birthday_rolls_one_day_to_monday() {
        // 2026-06-14 is a Sunday.
        let today = date(2026, 6, 10);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Anna", "14.06.1990", today))
            .unwrap();

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming[0].original_weekday, Weekday::Sun);
        assert_eq!(upcoming[0].congratulation_date, date(2026, 6, 15));
    }

    #[test]
    fn results_sorted_by_congratulation_date_with_stable_ties() {
        let today = date(2026, 6, 8);
        let mut book = AddressBook::new();
        // Saturday 13.06 rolls to Monday 15.06, same day as the 15.06 birthday.
        book.add(record_with_birthday("Later", "15.06.1990", today))
            .unwrap();
        book.add(record_with_birthday("Rolled", "13.06.1990", today))
            .unwrap();
        book.add(record_with_birthday("Sooner", "10.06.1990", today))
            .unwrap();

        let names: Vec<_> = book
            .upcoming_birthdays(14, today)
            .into_iter()
            .map(|u| u.name)
            .collect();
        // "Later" and "Rolled" tie on 15.06; book order breaks the tie.
        assert_eq!(names, ["Sooner", "Later", "Rolled"]);
    }

    #[test]
    fn feb_29_projects_to_mar_1_in_non_leap_years() {
        // 2026 is not a leap year.
        let today = date(2026, 2, 25);
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Leap", "29.02.2000", today))
            .unwrap();

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2026, 3, 2));
        // Projected Mar 1 2026 is a Sunday, hence the +1 roll above.
        assert_eq!(upcoming[0].original_weekday, Weekday::Sun);
    }

    #[test]
    fn records_without_birthdays_are_skipped() {
        let today = date(2026, 6, 5);
        let mut book = AddressBook::new();
        book.add(Record::new("NoBirthday").unwrap()).unwrap();
        book.add(record_with_birthday("Anna", "10.06.1990", today))
            .unwrap();

        let upcoming = book.upcoming_birthdays(7, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Anna");
    }
}
