//! Persian (Solar Hijri) date shown in the page header and the results table.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Cumulative day count before each Gregorian month in a common year.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Calendar date in the Solar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JalaliDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for JalaliDate {
    /// Arithmetic conversion; valid for Gregorian years after 1600.
    fn from(date: NaiveDate) -> Self {
        let gy = i64::from(date.year());
        let gm = date.month() as usize;
        let gd = i64::from(date.day());

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
            + gd
            + DAYS_BEFORE_MONTH[gm - 1];

        let mut year = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }
}

impl JalaliDate {
    /// `year/month/day` written with Persian digits and no zero padding.
    pub fn to_persian_string(&self) -> String {
        to_persian_digits(&self.to_string())
    }
}

impl Display for JalaliDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Replaces ASCII digits with their Persian forms.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Header widget showing today's date; the text is fixed when mounted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DateStamp {
    pub text: String,
}

impl DateStamp {
    pub fn mount(today: NaiveDate) -> Self {
        Self {
            text: JalaliDate::from(today).to_persian_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jalali(y: i32, m: u32, d: u32) -> JalaliDate {
        JalaliDate::from(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    #[test]
    fn nowruz_starts_the_year() {
        assert_eq!(jalali(2024, 3, 20), JalaliDate { year: 1403, month: 1, day: 1 });
        assert_eq!(jalali(2023, 3, 21), JalaliDate { year: 1402, month: 1, day: 1 });
    }

    #[test]
    fn day_before_nowruz_ends_the_year() {
        assert_eq!(jalali(2024, 3, 19), JalaliDate { year: 1402, month: 12, day: 29 });
    }

    #[test]
    fn formats_with_persian_digits() {
        assert_eq!(to_persian_digits("1403/1/1"), "۱۴۰۳/۱/۱");
        assert_eq!(
            DateStamp::mount(NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date")).text,
            "۱۴۰۳/۱/۱"
        );
    }
}
