//! Handling of date, time and date-time values with partial precision,
//! in which rightmost components may be missing.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Date is invalid"))]
    InvalidDate { backtrace: Backtrace },
    #[snafu(display("Time is invalid"))]
    InvalidTime { backtrace: Backtrace },
    #[snafu(display(
        "{:?} has invalid value: {}, must be in {:?}",
        component,
        value,
        range
    ))]
    InvalidComponent {
        component: DateComponent,
        value: u32,
        range: RangeInclusive<u32>,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Second fraction precision {} is out of range, must be in 1..=6",
        value
    ))]
    FractionPrecisionRange { value: u32, backtrace: Backtrace },
    #[snafu(display(
        "To combine a date with a time, the date must be precise to the day"
    ))]
    DateTimeFromPartials { backtrace: Backtrace },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents components of date, time and date-time values.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateComponent {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    UtcOffset,
}

/// Represents a date value with a partial precision,
/// where some components may be missing.
///
/// Unlike [`chrono::NaiveDate`], it does not allow for negative years.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DicomDate {
    Year(u16),
    Month(u16, u8),
    Day(u16, u8, u8),
}

/// Represents a time value with a partial precision,
/// where some components may be missing.
///
/// Second fractions are stored with their own precision,
/// so that a value read with two decimal digits
/// is written back with two decimal digits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DicomTime {
    Hour(u8),
    Minute(u8, u8),
    Second(u8, u8, u8),
    /// hour, minute, second, fraction value, fraction digit count
    Fraction(u8, u8, u8, u32, u8),
}

/// Represents a date-time value with a partial precision,
/// composed of a date, an optional time
/// and an optional time zone offset.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DicomDateTime {
    date: DicomDate,
    time: Option<DicomTime>,
    offset: Option<FixedOffset>,
}

/// Raises a detailed `InvalidComponent` error
/// if the date / time component is out of range.
pub fn check_component<T>(component: DateComponent, value: &T) -> Result<()>
where
    T: Into<u32> + Copy,
{
    let range = match component {
        DateComponent::Year => 0..=9_999,
        DateComponent::Month => 1..=12,
        DateComponent::Day => 1..=31,
        DateComponent::Hour => 0..=23,
        DateComponent::Minute => 0..=59,
        DateComponent::Second => 0..=59,
        DateComponent::Fraction => 0..=1_999_999,
        DateComponent::UtcOffset => 0..=86_399,
    };

    let value: u32 = (*value).into();
    if range.contains(&value) {
        Ok(())
    } else {
        InvalidComponentSnafu {
            component,
            value,
            range,
        }
        .fail()
    }
}

impl DicomDate {
    /// Constructs a new `DicomDate` with a year precision
    /// (YYYY).
    pub fn from_y(year: u16) -> Result<DicomDate> {
        check_component(DateComponent::Year, &year)?;
        Ok(DicomDate::Year(year))
    }

    /// Constructs a new `DicomDate` with a year and month precision
    /// (YYYYMM).
    pub fn from_ym(year: u16, month: u8) -> Result<DicomDate> {
        check_component(DateComponent::Year, &year)?;
        check_component(DateComponent::Month, &month)?;
        Ok(DicomDate::Month(year, month))
    }

    /// Constructs a new `DicomDate` with a year, month and day precision
    /// (YYYYMMDD).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<DicomDate> {
        check_component(DateComponent::Year, &year)?;
        check_component(DateComponent::Month, &month)?;
        check_component(DateComponent::Day, &day)?;
        Ok(DicomDate::Day(year, month, day))
    }

    /// Retrieves the year component.
    pub fn year(&self) -> u16 {
        match *self {
            DicomDate::Year(y) | DicomDate::Month(y, _) | DicomDate::Day(y, _, _) => y,
        }
    }

    /// Retrieves the month component, if present.
    pub fn month(&self) -> Option<u8> {
        match *self {
            DicomDate::Year(..) => None,
            DicomDate::Month(_, m) | DicomDate::Day(_, m, _) => Some(m),
        }
    }

    /// Retrieves the day component, if present.
    pub fn day(&self) -> Option<u8> {
        match *self {
            DicomDate::Year(..) | DicomDate::Month(..) => None,
            DicomDate::Day(_, _, d) => Some(d),
        }
    }

    /// Retrieves a DICOM encoded string representation of the value.
    pub fn to_encoded(&self) -> String {
        match self {
            DicomDate::Year(y) => format!("{:04}", y),
            DicomDate::Month(y, m) => format!("{:04}{:02}", y, m),
            DicomDate::Day(y, m, d) => format!("{:04}{:02}{:02}", y, m, d),
        }
    }
}

impl DicomTime {
    /// Constructs a new `DicomTime` with an hour precision
    /// (HH).
    pub fn from_h(hour: u8) -> Result<DicomTime> {
        check_component(DateComponent::Hour, &hour)?;
        Ok(DicomTime::Hour(hour))
    }

    /// Constructs a new `DicomTime` with an hour and minute precision
    /// (HHMM).
    pub fn from_hm(hour: u8, minute: u8) -> Result<DicomTime> {
        check_component(DateComponent::Hour, &hour)?;
        check_component(DateComponent::Minute, &minute)?;
        Ok(DicomTime::Minute(hour, minute))
    }

    /// Constructs a new `DicomTime` with an hour, minute and second precision
    /// (HHMMSS).
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<DicomTime> {
        check_component(DateComponent::Hour, &hour)?;
        check_component(DateComponent::Minute, &minute)?;
        check_component(DateComponent::Second, &second)?;
        Ok(DicomTime::Second(hour, minute, second))
    }

    /// Constructs a new `DicomTime` from an hour, minute, second
    /// and a second fraction with the given number of decimal digits
    /// (HHMMSS.F{1,6}).
    pub fn from_hmsf(
        hour: u8,
        minute: u8,
        second: u8,
        fraction: u32,
        frac_precision: u8,
    ) -> Result<DicomTime> {
        ensure!(
            (1..=6).contains(&frac_precision),
            FractionPrecisionRangeSnafu {
                value: u32::from(frac_precision)
            }
        );
        check_component(DateComponent::Hour, &hour)?;
        check_component(DateComponent::Minute, &minute)?;
        check_component(DateComponent::Second, &second)?;
        check_component(DateComponent::Fraction, &fraction)?;
        Ok(DicomTime::Fraction(
            hour,
            minute,
            second,
            fraction,
            frac_precision,
        ))
    }

    /// Constructs a new `DicomTime` from an hour, minute, second
    /// and microsecond value, with a full six digit second fraction precision.
    pub fn from_hms_micro(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<DicomTime> {
        DicomTime::from_hmsf(hour, minute, second, microsecond, 6)
    }

    /// Retrieves the hour component.
    pub fn hour(&self) -> u8 {
        match *self {
            DicomTime::Hour(h)
            | DicomTime::Minute(h, _)
            | DicomTime::Second(h, _, _)
            | DicomTime::Fraction(h, ..) => h,
        }
    }

    /// Retrieves the minute component, if present.
    pub fn minute(&self) -> Option<u8> {
        match *self {
            DicomTime::Hour(..) => None,
            DicomTime::Minute(_, m) | DicomTime::Second(_, m, _) | DicomTime::Fraction(_, m, ..) => {
                Some(m)
            }
        }
    }

    /// Retrieves the second component, if present.
    pub fn second(&self) -> Option<u8> {
        match *self {
            DicomTime::Hour(..) | DicomTime::Minute(..) => None,
            DicomTime::Second(_, _, s) | DicomTime::Fraction(_, _, s, ..) => Some(s),
        }
    }

    /// Retrieves the second fraction component, if present,
    /// scaled to microseconds.
    pub fn fraction(&self) -> Option<u32> {
        match *self {
            DicomTime::Fraction(_, _, _, f, fp) => {
                Some(f * u32::pow(10, u32::from(6 - fp.min(6))))
            }
            _ => None,
        }
    }

    /// Retrieves a DICOM encoded string representation of the value.
    pub fn to_encoded(&self) -> String {
        match self {
            DicomTime::Hour(h) => format!("{:02}", h),
            DicomTime::Minute(h, m) => format!("{:02}{:02}", h, m),
            DicomTime::Second(h, m, s) => format!("{:02}{:02}{:02}", h, m, s),
            DicomTime::Fraction(h, m, s, f, fp) => format!(
                "{:02}{:02}{:02}.{:0width$}",
                h,
                m,
                s,
                f,
                width = *fp as usize
            ),
        }
    }
}

impl DicomDateTime {
    /// Constructs a new `DicomDateTime` from a date,
    /// with no time nor time zone component.
    pub fn from_date(date: DicomDate) -> DicomDateTime {
        DicomDateTime {
            date,
            time: None,
            offset: None,
        }
    }

    /// Constructs a new `DicomDateTime` from a date and a time.
    /// The date must be precise to the day.
    pub fn from_date_and_time(date: DicomDate, time: DicomTime) -> Result<DicomDateTime> {
        ensure!(
            date.precision() == DateComponent::Day,
            DateTimeFromPartialsSnafu
        );
        Ok(DicomDateTime {
            date,
            time: Some(time),
            offset: None,
        })
    }

    /// Constructs a new `DicomDateTime` from a date and a time zone offset,
    /// with no time component.
    pub fn from_date_with_time_zone(date: DicomDate, offset: FixedOffset) -> DicomDateTime {
        DicomDateTime {
            date,
            time: None,
            offset: Some(offset),
        }
    }

    /// Constructs a new `DicomDateTime` from a date, a time
    /// and a time zone offset.
    /// The date must be precise to the day.
    pub fn from_date_and_time_with_time_zone(
        date: DicomDate,
        time: DicomTime,
        offset: FixedOffset,
    ) -> Result<DicomDateTime> {
        ensure!(
            date.precision() == DateComponent::Day,
            DateTimeFromPartialsSnafu
        );
        Ok(DicomDateTime {
            date,
            time: Some(time),
            offset: Some(offset),
        })
    }

    /// Retrieves a reference to the internal date value.
    pub fn date(&self) -> &DicomDate {
        &self.date
    }

    /// Retrieves a reference to the internal time value, if present.
    pub fn time(&self) -> Option<&DicomTime> {
        self.time.as_ref()
    }

    /// Retrieves a reference to the internal time zone offset, if present.
    pub fn time_zone(&self) -> Option<&FixedOffset> {
        self.offset.as_ref()
    }

    /// Retrieves a DICOM encoded string representation of the value.
    pub fn to_encoded(&self) -> String {
        let mut out = self.date.to_encoded();
        if let Some(time) = self.time {
            out.push_str(&time.to_encoded());
        }
        if let Some(offset) = self.offset {
            let secs = offset.local_minus_utc();
            let (sign, secs) = if secs < 0 { ('-', -secs) } else { ('+', secs) };
            out.push_str(&format!("{}{:02}{:02}", sign, secs / 3600, (secs % 3600) / 60));
        }
        out
    }
}

/// This trait is implemented by partial precision
/// date, time and date-time structures.
/// The trait method returns the last fully precise component of the value.
pub trait Precision {
    fn precision(&self) -> DateComponent;
}

impl Precision for DicomDate {
    fn precision(&self) -> DateComponent {
        match self {
            DicomDate::Year(..) => DateComponent::Year,
            DicomDate::Month(..) => DateComponent::Month,
            DicomDate::Day(..) => DateComponent::Day,
        }
    }
}

impl Precision for DicomTime {
    fn precision(&self) -> DateComponent {
        match self {
            DicomTime::Hour(..) => DateComponent::Hour,
            DicomTime::Minute(..) => DateComponent::Minute,
            DicomTime::Second(..) => DateComponent::Second,
            DicomTime::Fraction(..) => DateComponent::Fraction,
        }
    }
}

impl Precision for DicomDateTime {
    fn precision(&self) -> DateComponent {
        match self.time {
            Some(time) => time.precision(),
            None => self.date.precision(),
        }
    }
}

/// This trait is implemented by partial precision
/// date, time and date-time structures.
/// Retrieving the earliest or latest possible value
/// resolves the missing components to their respective extremes,
/// which allows a partial value to be interpreted as a range.
pub trait AsTemporalRange<T>: Precision
where
    T: PartialEq,
{
    /// Returns the earliest possible value from a partial precision structure.
    /// Missing components default to 1 (days, months)
    /// or 0 (hours, minutes, seconds and fractions).
    fn earliest(&self) -> Result<T>;

    /// Returns the latest possible value from a partial precision structure.
    fn latest(&self) -> Result<T>;

    /// Returns a tuple of the earliest and latest possible values.
    fn to_range(&self) -> Result<(Option<T>, Option<T>)> {
        Ok((self.earliest().ok(), self.latest().ok()))
    }

    /// Returns true if the value has the maximum possible accuracy,
    /// in which case it denotes a single point in time instead of a range.
    fn is_precise(&self) -> bool {
        let e = self.earliest();
        let l = self.latest();

        e.is_ok() && l.is_ok() && e.ok() == l.ok()
    }
}

impl AsTemporalRange<NaiveDate> for DicomDate {
    fn earliest(&self) -> Result<NaiveDate> {
        let (y, m, d) = match *self {
            DicomDate::Year(y) => (y as i32, 1, 1),
            DicomDate::Month(y, m) => (y as i32, m as u32, 1),
            DicomDate::Day(y, m, d) => (y as i32, m as u32, d as u32),
        };
        NaiveDate::from_ymd_opt(y, m, d).context(InvalidDateSnafu)
    }

    fn latest(&self) -> Result<NaiveDate> {
        let (y, m, d) = match *self {
            DicomDate::Year(y) => (y as i32, 12, 31),
            DicomDate::Month(y, m) => {
                // last day of the month
                let d = {
                    if m == 12 {
                        NaiveDate::from_ymd_opt(y as i32 + 1, 1, 1)
                    } else {
                        NaiveDate::from_ymd_opt(y as i32, m as u32 + 1, 1)
                    }
                    .context(InvalidDateSnafu)?
                    .signed_duration_since(
                        NaiveDate::from_ymd_opt(y as i32, m as u32, 1)
                            .context(InvalidDateSnafu)?,
                    )
                    .num_days()
                };
                (y as i32, m as u32, d as u32)
            }
            DicomDate::Day(y, m, d) => (y as i32, m as u32, d as u32),
        };
        NaiveDate::from_ymd_opt(y, m, d).context(InvalidDateSnafu)
    }
}

impl AsTemporalRange<NaiveTime> for DicomTime {
    fn earliest(&self) -> Result<NaiveTime> {
        let (h, m, s, f) = match *self {
            DicomTime::Hour(h) => (h as u32, 0, 0, 0),
            DicomTime::Minute(h, m) => (h as u32, m as u32, 0, 0),
            DicomTime::Second(h, m, s) => (h as u32, m as u32, s as u32, 0),
            DicomTime::Fraction(h, m, s, f, fp) => (
                h as u32,
                m as u32,
                s as u32,
                f * u32::pow(10, u32::from(6 - fp.min(6))),
            ),
        };
        NaiveTime::from_hms_micro_opt(h, m, s, f).context(InvalidTimeSnafu)
    }

    fn latest(&self) -> Result<NaiveTime> {
        let (h, m, s, f) = match *self {
            DicomTime::Hour(h) => (h as u32, 59, 59, 999_999),
            DicomTime::Minute(h, m) => (h as u32, m as u32, 59, 999_999),
            DicomTime::Second(h, m, s) => (h as u32, m as u32, s as u32, 999_999),
            DicomTime::Fraction(h, m, s, f, fp) => (
                h as u32,
                m as u32,
                s as u32,
                (f + 1) * u32::pow(10, u32::from(6 - fp.min(6))) - 1,
            ),
        };
        NaiveTime::from_hms_micro_opt(h, m, s, f).context(InvalidTimeSnafu)
    }
}

impl AsTemporalRange<NaiveDateTime> for DicomDateTime {
    fn earliest(&self) -> Result<NaiveDateTime> {
        let date = self.date.earliest()?;
        let time = match &self.time {
            Some(time) => time.earliest()?,
            None => NaiveTime::from_hms_opt(0, 0, 0).context(InvalidTimeSnafu)?,
        };
        Ok(NaiveDateTime::new(date, time))
    }

    fn latest(&self) -> Result<NaiveDateTime> {
        let date = self.date.latest()?;
        let time = match &self.time {
            Some(time) => time.latest()?,
            None => NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)
                .context(InvalidTimeSnafu)?,
        };
        Ok(NaiveDateTime::new(date, time))
    }
}

impl fmt::Display for DicomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DicomDate::Year(y) => write!(f, "{:04}", y),
            DicomDate::Month(y, m) => write!(f, "{:04}-{:02}", y, m),
            DicomDate::Day(y, m, d) => write!(f, "{:04}-{:02}-{:02}", y, m, d),
        }
    }
}

impl fmt::Display for DicomTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DicomTime::Hour(h) => write!(f, "{:02}", h),
            DicomTime::Minute(h, m) => write!(f, "{:02}:{:02}", h, m),
            DicomTime::Second(h, m, s) => write!(f, "{:02}:{:02}:{:02}", h, m, s),
            DicomTime::Fraction(h, m, s, fr, fp) => write!(
                f,
                "{:02}:{:02}:{:02}.{:0width$}",
                h,
                m,
                s,
                fr,
                width = *fp as usize
            ),
        }
    }
}

impl fmt::Display for DicomDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.time, self.offset) {
            (None, None) => write!(f, "{}", self.date),
            (Some(time), None) => write!(f, "{} {}", self.date, time),
            (None, Some(offset)) => write!(f, "{} {}", self.date, offset),
            (Some(time), Some(offset)) => write!(f, "{} {} {}", self.date, time, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dicom_date() {
        assert_eq!(
            DicomDate::from_ymd(1944, 2, 29).unwrap(),
            DicomDate::Day(1944, 2, 29)
        );
        assert_eq!(DicomDate::from_ym(1944, 2).unwrap(), DicomDate::Month(1944, 2));
        assert_eq!(DicomDate::from_y(1944).unwrap(), DicomDate::Year(1944));

        assert_eq!(DicomDate::from_ymd(1944, 2, 29).unwrap().is_precise(), true);
        assert_eq!(DicomDate::from_ym(1944, 2).unwrap().is_precise(), false);
        assert_eq!(DicomDate::from_y(1944).unwrap().is_precise(), false);
        assert_eq!(
            DicomDate::from_ymd(1944, 2, 29).unwrap().earliest().unwrap(),
            NaiveDate::from_ymd_opt(1944, 2, 29).unwrap()
        );
        assert_eq!(
            DicomDate::from_ymd(1944, 2, 29).unwrap().latest().unwrap(),
            NaiveDate::from_ymd_opt(1944, 2, 29).unwrap()
        );
        assert_eq!(
            DicomDate::from_y(1944).unwrap().earliest().unwrap(),
            NaiveDate::from_ymd_opt(1944, 1, 1).unwrap()
        );
        // detects leap year
        assert_eq!(
            DicomDate::from_ym(1944, 2).unwrap().latest().unwrap(),
            NaiveDate::from_ymd_opt(1944, 2, 29).unwrap()
        );
        assert_eq!(
            DicomDate::from_ym(1945, 2).unwrap().latest().unwrap(),
            NaiveDate::from_ymd_opt(1945, 2, 28).unwrap()
        );

        assert_eq!(DicomDate::from_y(2021).unwrap().to_encoded(), "2021");
        assert_eq!(DicomDate::from_ym(2021, 5).unwrap().to_encoded(), "202105");
        assert_eq!(
            DicomDate::from_ymd(2021, 5, 1).unwrap().to_encoded(),
            "20210501"
        );
        assert_eq!(
            DicomDate::from_ymd(2021, 5, 1).unwrap().to_string(),
            "2021-05-01"
        );

        assert!(matches!(
            DicomDate::from_ymd(2021, 13, 1),
            Err(Error::InvalidComponent {
                component: DateComponent::Month,
                value: 13,
                ..
            })
        ));
        assert!(matches!(
            DicomDate::from_ymd(2021, 12, 32),
            Err(Error::InvalidComponent {
                component: DateComponent::Day,
                value: 32,
                ..
            })
        ));
    }

    #[test]
    fn test_dicom_time() {
        assert_eq!(
            DicomTime::from_hms_micro(9, 1, 1, 123_456).unwrap(),
            DicomTime::Fraction(9, 1, 1, 123_456, 6)
        );
        assert_eq!(
            DicomTime::from_hmsf(9, 0, 0, 1, 1).unwrap(),
            DicomTime::Fraction(9, 0, 0, 1, 1)
        );

        // one tenth of a second expands to a range of 100 000 microseconds
        let t = DicomTime::from_hmsf(9, 0, 0, 1, 1).unwrap();
        assert_eq!(t.is_precise(), false);
        assert_eq!(
            t.earliest().unwrap(),
            NaiveTime::from_hms_micro_opt(9, 0, 0, 100_000).unwrap()
        );
        assert_eq!(
            t.latest().unwrap(),
            NaiveTime::from_hms_micro_opt(9, 0, 0, 199_999).unwrap()
        );

        // full six digit precision denotes a single point in time
        assert_eq!(DicomTime::from_hms_micro(9, 0, 0, 123_456).unwrap().is_precise(), true);

        assert_eq!(DicomTime::from_h(9).unwrap().to_encoded(), "09");
        assert_eq!(DicomTime::from_hm(23, 59).unwrap().to_encoded(), "2359");
        assert_eq!(
            DicomTime::from_hms(23, 59, 48).unwrap().to_encoded(),
            "235948"
        );
        assert_eq!(
            DicomTime::from_hmsf(9, 1, 1, 123, 4).unwrap().to_encoded(),
            "090101.0123"
        );
        assert_eq!(
            DicomTime::from_hms_micro(7, 55, 1, 1).unwrap().to_encoded(),
            "075501.000001"
        );
        assert_eq!(
            DicomTime::from_hmsf(9, 1, 1, 123, 4).unwrap().to_string(),
            "09:01:01.0123"
        );

        assert!(matches!(
            DicomTime::from_hmsf(9, 1, 1, 1, 7),
            Err(Error::FractionPrecisionRange { value: 7, .. })
        ));
        assert!(matches!(
            DicomTime::from_hms(24, 1, 1),
            Err(Error::InvalidComponent {
                component: DateComponent::Hour,
                value: 24,
                ..
            })
        ));
        assert!(matches!(
            DicomTime::from_hm(23, 60),
            Err(Error::InvalidComponent {
                component: DateComponent::Minute,
                value: 60,
                ..
            })
        ));
    }

    #[test]
    fn test_dicom_datetime() {
        let offset = FixedOffset::east_opt(3600).unwrap();

        let dt = DicomDateTime::from_date_and_time_with_time_zone(
            DicomDate::from_ymd(2020, 2, 29).unwrap(),
            DicomTime::from_hms_micro(23, 59, 59, 999_999).unwrap(),
            offset,
        )
        .unwrap();
        assert_eq!(dt.date(), &DicomDate::from_ymd(2020, 2, 29).unwrap());
        assert_eq!(
            dt.time(),
            Some(&DicomTime::from_hms_micro(23, 59, 59, 999_999).unwrap())
        );
        assert_eq!(dt.time_zone(), Some(&offset));
        assert_eq!(dt.to_encoded(), "20200229235959.999999+0100");

        let dt = DicomDateTime::from_date(DicomDate::from_ym(2020, 2).unwrap());
        assert_eq!(dt.to_encoded(), "202002");
        assert_eq!(
            dt.earliest().unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(
            dt.latest().unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29)
                .unwrap()
                .and_hms_micro_opt(23, 59, 59, 999_999)
                .unwrap()
        );

        let dt = DicomDateTime::from_date_with_time_zone(
            DicomDate::from_ymd(2020, 2, 29).unwrap(),
            FixedOffset::west_opt(10 * 3600 + 30 * 60).unwrap(),
        );
        assert_eq!(dt.to_encoded(), "20200229-1030");

        // a time requires the date to be precise to the day
        assert!(matches!(
            DicomDateTime::from_date_and_time(
                DicomDate::from_ym(2020, 2).unwrap(),
                DicomTime::from_h(23).unwrap()
            ),
            Err(Error::DateTimeFromPartials { .. })
        ));
    }
}
