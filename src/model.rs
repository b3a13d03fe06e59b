use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Fake-commit counts keyed by date. A date is either absent or carries a count of at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<NaiveDate, u32>",
    into = "BTreeMap<NaiveDate, u32>"
)]
pub struct SelectionMap(BTreeMap<NaiveDate, u32>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `date`, 0 when the date is not selected.
    pub fn get(&self, date: &NaiveDate) -> u32 {
        self.0.get(date).copied().unwrap_or(0)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.0.iter().map(|(date, count)| (*date, *count))
    }

    pub fn total_commits(&self) -> u64 {
        self.0.values().map(|&count| count as u64).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.keys().next().copied()
    }

    /// Returns a copy with `date` set to `count`; a zero count removes the entry.
    pub fn with_count(&self, date: NaiveDate, count: u32) -> Self {
        let mut next = self.0.clone();
        if count == 0 {
            next.remove(&date);
        } else {
            next.insert(date, count);
        }
        Self(next)
    }
}

impl From<BTreeMap<NaiveDate, u32>> for SelectionMap {
    fn from(mut map: BTreeMap<NaiveDate, u32>) -> Self {
        map.retain(|_, count| *count > 0);
        Self(map)
    }
}

impl From<SelectionMap> for BTreeMap<NaiveDate, u32> {
    fn from(map: SelectionMap) -> Self {
        map.0
    }
}

impl FromIterator<(NaiveDate, u32)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u32)>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}

/// Primary (+1) or secondary (-1) action on a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// One grid cell. Placeholder cells have no date and are never selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: Option<NaiveDate>,
    pub count: u32,
    pub selected: bool,
}

impl Day {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date: Some(date),
            count,
            selected: count > 0,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            date: None,
            count: 0,
            selected: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}

/// Seven days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub days: [Day; 7],
}

impl Week {
    /// Real (non-placeholder) days of this week.
    pub fn dated(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| !day.is_placeholder())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridOutput {
    pub version: u32,
    pub year: i32,
    pub selected_dates: usize,
    pub total_commits: u64,
    pub weeks: Vec<Week>,
}
