use crate::types::errors::InvalidDate;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

const DIGITS: usize = 8;
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date kept in its raw `DDMMYYYY` digit form.
///
/// Statement cells like `15.03.2023` lose their separators on the way in, and ledgers
/// written by older tooling stored dates as plain integers, dropping the leading zero
/// of single digit days (`1032023`). Both are normalized to eight digits here; no
/// calendar validation happens until [`RawDate::to_calendar`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawDate(String);

impl RawDate {
    pub fn from_cell(value: &str) -> Self {
        let digits: String = value.trim().chars().filter(|c| *c != '.').collect();

        if digits.len() == DIGITS - 1 && digits.chars().all(|c| c.is_ascii_digit()) {
            return RawDate(format!("0{digits}"));
        }

        RawDate(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_calendar(&self) -> Result<NaiveDate, InvalidDate> {
        let invalid = || InvalidDate { value: self.0.clone() };

        if self.0.len() != DIGITS || !self.0.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let day: u32 = self.0[0..2].parse().map_err(|_| invalid())?;
        let month: u32 = self.0[2..4].parse().map_err(|_| invalid())?;
        let year: i32 = self.0[4..8].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }

    /// Renders the date as `DD.MM.YYYY` for export.
    pub fn to_display(&self) -> Result<String, InvalidDate> {
        Ok(self.to_calendar()?.format(DISPLAY_FORMAT).to_string())
    }

    /// Chronological ordering key. Values that are not calendar dates sort before
    /// all valid dates, ordered by their raw text.
    pub fn sort_key(&self) -> (Option<NaiveDate>, &str) {
        (self.to_calendar().ok(), self.0.as_str())
    }
}

impl Display for RawDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
