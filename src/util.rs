use crate::error::{Result, TimeTravelError};
use chrono::NaiveDate;

pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE)
        .map_err(|e| TimeTravelError::InvalidDate(format!("{input}: {e}")))
}

/// A `--select` argument: `YYYY-MM-DD` or `YYYY-MM-DD=COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectArg {
    pub date: NaiveDate,
    pub count: u32,
}

impl std::str::FromStr for SelectArg {
    type Err = TimeTravelError;

    fn from_str(s: &str) -> Result<Self> {
        let (date, count) = match s.split_once('=') {
            Some((date, count)) => {
                let count = count.trim().parse::<u32>().map_err(|e| {
                    TimeTravelError::InvalidSelection(format!("{s}: bad count ({e})"))
                })?;
                (date, count)
            }
            None => (s, 1),
        };
        Ok(Self {
            date: parse_iso_date(date)?,
            count,
        })
    }
}
