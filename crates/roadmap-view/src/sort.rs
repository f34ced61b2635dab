//! Sort engine for lifecycle rows
//!
//! Provides the five sort fields, their default directions and a stable
//! comparator that works for both record kinds through [`LifecycleRecord`].
//!
//! Sorting always produces a new `Vec` of references; cached collections are
//! never reordered.

use crate::error::ParseValueError;
use chrono::NaiveDate;
use roadmap_model::LifecycleRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::Peekable;
use std::str::{Chars, FromStr};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// Opposite direction
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending ordering
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Query parameter value
    #[inline]
    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortDirection {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseValueError::new("sort direction", other)),
        }
    }
}

/// Field the lifecycle rows are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// Display name
    Name,
    /// Release the record belongs to
    ReleaseVersion,
    /// Start of support
    ReleaseDate,
    /// End of support
    #[default]
    RetirementDate,
    /// Installed system count
    Systems,
}

impl SortField {
    /// All fields, in column order
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::ReleaseVersion,
        Self::ReleaseDate,
        Self::RetirementDate,
        Self::Systems,
    ];

    /// Direction applied when the field is first selected
    #[inline]
    #[must_use]
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Name | Self::RetirementDate => SortDirection::Asc,
            Self::ReleaseVersion | Self::ReleaseDate | Self::Systems => SortDirection::Desc,
        }
    }

    /// Column label, also used as the query parameter value
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::ReleaseVersion => "Release version",
            Self::ReleaseDate => "Release date",
            Self::RetirementDate => "Retirement date",
            Self::Systems => "Systems",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.label() == s)
            .ok_or_else(|| ParseValueError::new("sort field", s))
    }
}

/// Compare two records by `field` in `direction`
///
/// Records without the compared date sort after dated records in both
/// directions. Release-version ties fall back to ascending name order.
pub fn compare<R>(a: &R, b: &R, field: SortField, direction: SortDirection) -> Ordering
where
    R: LifecycleRecord + ?Sized,
{
    match field {
        SortField::Name => direction.apply(natural_cmp(&a.display_name(), &b.display_name())),
        SortField::ReleaseVersion => direction
            .apply(a.release_version().cmp(&b.release_version()))
            .then_with(|| natural_cmp(&a.display_name(), &b.display_name())),
        SortField::ReleaseDate => compare_dates(a.start_date(), b.start_date(), direction),
        SortField::RetirementDate => compare_dates(a.end_date(), b.end_date(), direction),
        SortField::Systems => direction.apply(a.system_count().cmp(&b.system_count())),
    }
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorted copy of `records`
///
/// The sort is stable: records comparing equal keep their input order.
#[must_use]
pub fn sort_records<'a, R>(records: &[&'a R], field: SortField, direction: SortDirection) -> Vec<&'a R>
where
    R: LifecycleRecord,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(*a, *b, field, direction));
    sorted
}

/// Case-insensitive comparison that orders digit runs numerically
///
/// `"RHEL 9"` sorts before `"RHEL 10"`. Strings that compare equal this way
/// (differing only in case or leading zeros) fall back to byte order so the
/// result is a total order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left = take_digits(&mut xs);
                let right = take_digits(&mut ys);
                let ord = compare_digit_runs(&left, &right);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                xs.next();
                ys.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn names<R: LifecycleRecord>(records: &[&R]) -> Vec<String> {
        records.iter().map(|r| r.display_name().into_owned()).collect()
    }

    #[test]
    fn natural_order_of_numbers() {
        assert_eq!(natural_cmp("RHEL 9", "RHEL 10"), Ordering::Less);
        assert_eq!(natural_cmp("nodejs 18", "nodejs 8"), Ordering::Greater);
        assert_eq!(natural_cmp("php 8.1", "php 8.10"), Ordering::Less);
    }

    #[test]
    fn natural_order_ignores_case() {
        assert_eq!(natural_cmp("apache", "Nginx"), Ordering::Less);
        assert_eq!(natural_cmp("Ruby", "ruby"), "Ruby".cmp("ruby"));
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn default_directions() {
        assert_eq!(SortField::Name.default_direction(), SortDirection::Asc);
        assert_eq!(SortField::ReleaseVersion.default_direction(), SortDirection::Desc);
        assert_eq!(SortField::ReleaseDate.default_direction(), SortDirection::Desc);
        assert_eq!(SortField::RetirementDate.default_direction(), SortDirection::Asc);
        assert_eq!(SortField::Systems.default_direction(), SortDirection::Desc);
    }

    #[test]
    fn label_roundtrip() {
        for field in SortField::ALL {
            assert_eq!(field.label().parse::<SortField>(), Ok(field));
        }
        assert!("name".parse::<SortField>().is_err());
    }

    #[test]
    fn release_version_orders_numerically() {
        let a = SystemLifecycleRecord::new("RHEL", 8, 9);
        let b = SystemLifecycleRecord::new("RHEL", 8, 10);
        let c = SystemLifecycleRecord::new("RHEL", 10, 0);
        let input = [&a, &c, &b];

        let sorted = sort_records(&input, SortField::ReleaseVersion, SortDirection::Desc);
        assert_eq!(names(&sorted), ["RHEL 10.0", "RHEL 8.10", "RHEL 8.9"]);
    }

    #[test]
    fn undated_records_sort_last_both_ways() {
        let early = AppStreamLifecycleRecord::new("a", "A", 9).with_dates(None, date(2025, 1, 1));
        let late = AppStreamLifecycleRecord::new("b", "B", 9).with_dates(None, date(2030, 1, 1));
        let open = AppStreamLifecycleRecord::new("c", "C", 9).rolling();
        let input = [&open, &late, &early];

        let asc = sort_records(&input, SortField::RetirementDate, SortDirection::Asc);
        assert_eq!(names(&asc), ["A", "B", "C"]);

        let desc = sort_records(&input, SortField::RetirementDate, SortDirection::Desc);
        assert_eq!(names(&desc), ["B", "A", "C"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let x = SystemLifecycleRecord::new("RHEL", 9, 0).with_systems(["1"]);
        let y = SystemLifecycleRecord::new("RHEL", 9, 2).with_systems(["2"]);
        let z = SystemLifecycleRecord::new("RHEL", 9, 4).with_systems(["3", "4"]);
        let input = [&y, &x, &z];

        let desc = sort_records(&input, SortField::Systems, SortDirection::Desc);
        assert_eq!(names(&desc), ["RHEL 9.4", "RHEL 9.2", "RHEL 9.0"]);

        let asc = sort_records(&input, SortField::Systems, SortDirection::Asc);
        assert_eq!(names(&asc), ["RHEL 9.2", "RHEL 9.0", "RHEL 9.4"]);
    }

    #[test]
    fn sorting_leaves_source_untouched() {
        let a = SystemLifecycleRecord::new("RHEL", 9, 0);
        let b = SystemLifecycleRecord::new("RHEL", 8, 0);
        let input = [&a, &b];

        let _ = sort_records(&input, SortField::Name, SortDirection::Asc);
        assert_eq!(names(&input), ["RHEL 9.0", "RHEL 8.0"]);
    }
}
