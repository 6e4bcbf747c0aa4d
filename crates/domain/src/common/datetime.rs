//! Calendar helpers for date-bounded fields.

use chrono::NaiveDate;

/// Returns true when `date` falls strictly after `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use guildhall_domain::common::is_in_future;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert!(is_in_future(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), today));
/// assert!(!is_in_future(today, today));
/// ```
pub fn is_in_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Whole days elapsed from `from` to `to`.
///
/// Negative when `to` precedes `from`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use guildhall_domain::common::whole_days_between;
///
/// let from = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// assert_eq!(whole_days_between(from, to), 38);
/// ```
pub fn whole_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
