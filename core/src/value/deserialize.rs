//! Parsing of date, time and date-time values from their textual form.

use crate::value::partial::{DicomDate, DicomDateTime, DicomTime, Error as PartialValuesError};
use chrono::FixedOffset;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unexpected end of element"))]
    UnexpectedEndOfElement { backtrace: Backtrace },
    #[snafu(display("Invalid number length: it is {}, but must be between 1 and 9", len))]
    InvalidNumberLength { len: usize, backtrace: Backtrace },
    #[snafu(display("Invalid number token: got '{}', but must be a digit in '0'..='9'", *value as char))]
    InvalidNumberToken { value: u8, backtrace: Backtrace },
    #[snafu(display("Invalid time zone sign token: got '{}', but must be '+' or '-'", *value as char))]
    InvalidTimeZoneSignToken { value: u8, backtrace: Backtrace },
    #[snafu(display("Time zone offset is out of bounds"))]
    InvalidTimeZone { backtrace: Backtrace },
    #[snafu(display("Failed to construct a partial value"))]
    PartialValue {
        #[snafu(backtrace)]
        source: PartialValuesError,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

#[inline]
fn is_tz_sign(b: u8) -> bool {
    b == b'+' || b == b'-'
}

/// Decode a single DICOM Date (DA) into a `DicomDate` value.
///
/// The parser reads up to 8 bytes (YYYYMMDD)
/// and accepts the incomplete forms YYYY and YYYYMM,
/// in which case the stored value keeps the partial precision.
/// The bytes following the parsed value are returned
/// for further interpretation by the caller.
pub fn parse_date(buf: &[u8]) -> Result<(DicomDate, &[u8])> {
    if buf.len() < 4 {
        return UnexpectedEndOfElementSnafu.fail();
    }
    let year: u16 = read_number(&buf[0..4])?;
    let buf = &buf[4..];
    // a time zone sign ends the value early,
    // leaving the offset to the caller
    if buf.len() < 2 || is_tz_sign(buf[0]) {
        Ok((DicomDate::from_y(year).context(PartialValueSnafu)?, buf))
    } else {
        let month: u8 = read_number(&buf[0..2])?;
        let buf = &buf[2..];
        if buf.len() < 2 || is_tz_sign(buf[0]) {
            Ok((
                DicomDate::from_ym(year, month).context(PartialValueSnafu)?,
                buf,
            ))
        } else {
            let day: u8 = read_number(&buf[0..2])?;
            let buf = &buf[2..];
            Ok((
                DicomDate::from_ymd(year, month, day).context(PartialValueSnafu)?,
                buf,
            ))
        }
    }
}

/// Decode a single DICOM Time (TM) into a `DicomTime` value.
///
/// The parser accepts the incomplete forms HH, HHMM and HHMMSS,
/// in which case the stored value keeps the partial precision.
/// The precision of the second fraction is stored as read,
/// so that `b"10.5"` can be told apart from `b"10.500000"`.
/// The bytes following the parsed value are returned
/// for further interpretation by the caller.
pub fn parse_time(buf: &[u8]) -> Result<(DicomTime, &[u8])> {
    if buf.len() < 2 {
        return UnexpectedEndOfElementSnafu.fail();
    }
    let hour: u8 = read_number(&buf[0..2])?;
    let buf = &buf[2..];
    if buf.len() < 2 || is_tz_sign(buf[0]) {
        Ok((DicomTime::from_h(hour).context(PartialValueSnafu)?, buf))
    } else {
        let minute: u8 = read_number(&buf[0..2])?;
        let buf = &buf[2..];
        if buf.len() < 2 || is_tz_sign(buf[0]) {
            Ok((
                DicomTime::from_hm(hour, minute).context(PartialValueSnafu)?,
                buf,
            ))
        } else {
            let second: u8 = read_number(&buf[0..2])?;
            let buf = &buf[2..];
            // a second fraction requires at least ".F", otherwise stop here
            if buf.len() > 1 && buf[0] == b'.' {
                let buf = &buf[1..];
                let no_digit_index = buf.iter().position(|b| !b.is_ascii_digit());
                let n = usize::min(6, no_digit_index.unwrap_or(buf.len()));
                let fraction: u32 = read_number(&buf[0..n])?;
                let buf = &buf[n..];
                let fp = n as u8;
                Ok((
                    DicomTime::from_hmsf(hour, minute, second, fraction, fp)
                        .context(PartialValueSnafu)?,
                    buf,
                ))
            } else {
                Ok((
                    DicomTime::from_hms(hour, minute, second).context(PartialValueSnafu)?,
                    buf,
                ))
            }
        }
    }
}

/// Decode a single DICOM DateTime (DT) into a `DicomDateTime` value.
///
/// The date component is mandatory and may be partial,
/// whereas the time and the time zone offset components are optional.
/// When a time zone suffix is absent,
/// the value is left without a time zone
/// and is usually interpreted in the local time zone of the application.
pub fn parse_datetime(buf: &[u8]) -> Result<DicomDateTime> {
    let (date, rest) = parse_date(buf)?;
    let (time, rest) = match rest.first() {
        None | Some(b'+') | Some(b'-') => (None, rest),
        Some(_) => {
            let (time, rest) = parse_time(rest)?;
            (Some(time), rest)
        }
    };
    let offset = match rest.len() {
        0 => None,
        len if len > 4 => {
            let tz_sign = rest[0];
            let rest = &rest[1..];
            let tz_h: i32 = read_number(&rest[0..2])?;
            let tz_m: i32 = read_number(&rest[2..4])?;
            let s = (tz_h * 60 + tz_m) * 60;
            match tz_sign {
                b'+' => Some(FixedOffset::east_opt(s).context(InvalidTimeZoneSnafu)?),
                b'-' => Some(FixedOffset::west_opt(s).context(InvalidTimeZoneSnafu)?),
                c => return InvalidTimeZoneSignTokenSnafu { value: c }.fail(),
            }
        }
        _ => return UnexpectedEndOfElementSnafu.fail(),
    };

    match (time, offset) {
        (None, None) => Ok(DicomDateTime::from_date(date)),
        (Some(time), None) => {
            DicomDateTime::from_date_and_time(date, time).context(PartialValueSnafu)
        }
        (None, Some(offset)) => Ok(DicomDateTime::from_date_with_time_zone(date, offset)),
        (Some(time), Some(offset)) => {
            DicomDateTime::from_date_and_time_with_time_zone(date, time, offset)
                .context(PartialValueSnafu)
        }
    }
}

/// A simple trait for types with a decimal form.
pub trait Ten {
    /// Retrieve the value ten. This returns `10` for integer types and
    /// `10.` for floating point types.
    fn ten() -> Self;
}

macro_rules! impl_integral_ten {
    ($t:ty) => {
        impl Ten for $t {
            fn ten() -> Self {
                10
            }
        }
    };
}

macro_rules! impl_floating_ten {
    ($t:ty) => {
        impl Ten for $t {
            fn ten() -> Self {
                10.
            }
        }
    };
}

impl_integral_ten!(i16);
impl_integral_ten!(u16);
impl_integral_ten!(u8);
impl_integral_ten!(i32);
impl_integral_ten!(u32);
impl_integral_ten!(i64);
impl_integral_ten!(u64);
impl_integral_ten!(isize);
impl_integral_ten!(usize);
impl_floating_ten!(f32);
impl_floating_ten!(f64);

/// Retrieve an integer in text form.
///
/// All bytes in the text must be within the range b'0' and b'9'.
/// The text must also not be empty nor have more than 9 characters.
pub fn read_number<T>(text: &[u8]) -> Result<T>
where
    T: Ten,
    T: From<u8>,
    T: Add<T, Output = T>,
    T: Mul<T, Output = T>,
    T: Sub<T, Output = T>,
{
    if text.is_empty() || text.len() > 9 {
        return InvalidNumberLengthSnafu { len: text.len() }.fail();
    }
    if let Some(c) = text.iter().cloned().find(|b| !b.is_ascii_digit()) {
        return InvalidNumberTokenSnafu { value: c }.fail();
    }

    Ok(read_number_unchecked(text))
}

#[inline]
fn read_number_unchecked<T>(buf: &[u8]) -> T
where
    T: Ten,
    T: From<u8>,
    T: Add<T, Output = T>,
    T: Mul<T, Output = T>,
{
    debug_assert!(!buf.is_empty());
    debug_assert!(buf.len() < 10);
    (&buf[1..]).iter().fold((buf[0] - b'0').into(), |acc, v| {
        acc * T::ten() + (*v - b'0').into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::partial::DateComponent;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(b"20180101").unwrap(),
            (DicomDate::Day(2018, 1, 1), &[][..])
        );
        assert_eq!(
            parse_date(b"19711231").unwrap(),
            (DicomDate::Day(1971, 12, 31), &[][..])
        );
        assert_eq!(
            parse_date(b"20180101xxxx").unwrap(),
            (DicomDate::Day(2018, 1, 1), &b"xxxx"[..])
        );
        assert_eq!(
            parse_date(b"19020404-0101").unwrap(),
            (DicomDate::Day(1902, 4, 4), &b"-0101"[..])
        );
        assert_eq!(
            parse_date(b"201811").unwrap(),
            (DicomDate::Month(2018, 11), &[][..])
        );
        assert_eq!(parse_date(b"1914").unwrap(), (DicomDate::Year(1914), &[][..]));

        // a time zone sign ends a partial date
        assert_eq!(
            parse_date(b"2014+0535").unwrap(),
            (DicomDate::Year(2014), &b"+0535"[..])
        );
        assert_eq!(
            parse_date(b"201411-0500").unwrap(),
            (DicomDate::Month(2014, 11), &b"-0500"[..])
        );

        assert_eq!(
            parse_date(b"19140").unwrap(),
            (DicomDate::Year(1914), &b"0"[..])
        );

        assert_eq!(
            parse_date(b"1914121").unwrap(),
            (DicomDate::Month(1914, 12), &b"1"[..])
        );

        // does not check for leap year
        assert_eq!(
            parse_date(b"20210229").unwrap(),
            (DicomDate::Day(2021, 2, 29), &[][..])
        );

        assert!(matches!(
            parse_date(b"19021515"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Month,
                    value: 15,
                    ..
                },
                ..
            })
        ));

        assert!(matches!(
            parse_date(b"19021200"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Day,
                    value: 0,
                    ..
                },
                ..
            })
        ));

        assert!(matches!(
            parse_date(b"19021232"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Day,
                    value: 32,
                    ..
                },
                ..
            })
        ));

        assert!(matches!(
            parse_date(b"190"),
            Err(Error::UnexpectedEndOfElement { .. })
        ));

        assert!(parse_date(b"").is_err());
        assert!(parse_date(b"        ").is_err());
        assert!(parse_date(b"--------").is_err());
        assert!(parse_date(&[0x00_u8; 8]).is_err());
        assert!(parse_date(&[0xFF_u8; 8]).is_err());
        assert!(parse_date(b"nothing!").is_err());
        assert!(parse_date(b"2012dec").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time(b"10").unwrap(), (DicomTime::Hour(10), &[][..]));
        assert_eq!(
            parse_time(b"101").unwrap(),
            (DicomTime::Hour(10), &b"1"[..])
        );
        assert_eq!(
            parse_time(b"0755").unwrap(),
            (DicomTime::Minute(7, 55), &[][..])
        );
        assert_eq!(
            parse_time(b"075500").unwrap(),
            (DicomTime::Second(7, 55, 0), &[][..])
        );
        assert_eq!(
            parse_time(b"065003").unwrap(),
            (DicomTime::Second(6, 50, 3), &[][..])
        );
        assert_eq!(
            parse_time(b"075501.5").unwrap(),
            (DicomTime::Fraction(7, 55, 1, 5, 1), &[][..])
        );
        assert_eq!(
            parse_time(b"075501.123").unwrap(),
            (DicomTime::Fraction(7, 55, 1, 123, 3), &[][..])
        );
        assert_eq!(
            parse_time(b"075501.999999").unwrap(),
            (DicomTime::Fraction(7, 55, 1, 999_999, 6), &[][..])
        );
        // only parses up to 6 digits of second fraction
        assert_eq!(
            parse_time(b"075501.9999994").unwrap(),
            (DicomTime::Fraction(7, 55, 1, 999_999, 6), &b"4"[..])
        );
        // a time zone suffix is left for the caller
        assert_eq!(
            parse_time(b"235959.123456+0100").unwrap(),
            (DicomTime::Fraction(23, 59, 59, 123_456, 6), &b"+0100"[..])
        );
        assert_eq!(
            parse_time(b"235959-1100").unwrap(),
            (DicomTime::Second(23, 59, 59), &b"-1100"[..])
        );
        // a time zone sign ends a partial time
        assert_eq!(
            parse_time(b"1010+0535").unwrap(),
            (DicomTime::Minute(10, 10), &b"+0535"[..])
        );
        assert!(matches!(
            parse_time(b"24"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Hour,
                    value: 24,
                    ..
                },
                ..
            })
        ));
        assert!(matches!(
            parse_time(b"1060"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Minute,
                    value: 60,
                    ..
                },
                ..
            })
        ));
        assert!(matches!(
            parse_time(b"105960"),
            Err(Error::PartialValue {
                source: PartialValuesError::InvalidComponent {
                    component: DateComponent::Second,
                    value: 60,
                    ..
                },
                ..
            })
        ));
        assert!(parse_time(b"").is_err());
        assert!(parse_time(b"--").is_err());
        assert!(parse_time(b"nope").is_err());
    }

    #[test]
    fn test_parse_datetime() {
        assert_eq!(
            parse_datetime(b"20171130101010.204").unwrap(),
            DicomDateTime::from_date_and_time(
                DicomDate::from_ymd(2017, 11, 30).unwrap(),
                DicomTime::from_hmsf(10, 10, 10, 204, 3).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"19440229101010.1").unwrap(),
            DicomDateTime::from_date_and_time(
                DicomDate::from_ymd(1944, 2, 29).unwrap(),
                DicomTime::from_hmsf(10, 10, 10, 1, 1).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"201801010930").unwrap(),
            DicomDateTime::from_date_and_time(
                DicomDate::from_ymd(2018, 1, 1).unwrap(),
                DicomTime::from_hm(9, 30).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"20180101").unwrap(),
            DicomDateTime::from_date(DicomDate::from_ymd(2018, 1, 1).unwrap())
        );
        assert_eq!(
            parse_datetime(b"201801").unwrap(),
            DicomDateTime::from_date(DicomDate::from_ym(2018, 1).unwrap())
        );
        assert_eq!(
            parse_datetime(b"2018").unwrap(),
            DicomDateTime::from_date(DicomDate::from_y(2018).unwrap())
        );

        // with a time zone offset
        assert_eq!(
            parse_datetime(b"20171130101010.564204-1001").unwrap(),
            DicomDateTime::from_date_and_time_with_time_zone(
                DicomDate::from_ymd(2017, 11, 30).unwrap(),
                DicomTime::from_hms_micro(10, 10, 10, 564_204).unwrap(),
                FixedOffset::west_opt(10 * 3600 + 60).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"20171130101010+0100").unwrap(),
            DicomDateTime::from_date_and_time_with_time_zone(
                DicomDate::from_ymd(2017, 11, 30).unwrap(),
                DicomTime::from_hms(10, 10, 10).unwrap(),
                FixedOffset::east_opt(3600).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"2014+0535").unwrap(),
            DicomDateTime::from_date_with_time_zone(
                DicomDate::from_y(2014).unwrap(),
                FixedOffset::east_opt(5 * 3600 + 35 * 60).unwrap(),
            )
        );
        assert_eq!(
            parse_datetime(b"201401011010+0535").unwrap(),
            DicomDateTime::from_date_and_time_with_time_zone(
                DicomDate::from_ymd(2014, 1, 1).unwrap(),
                DicomTime::from_hm(10, 10).unwrap(),
                FixedOffset::east_opt(5 * 3600 + 35 * 60).unwrap(),
            )
            .unwrap()
        );
        assert_eq!(
            parse_datetime(b"20140505-1030").unwrap(),
            DicomDateTime::from_date_with_time_zone(
                DicomDate::from_ymd(2014, 5, 5).unwrap(),
                FixedOffset::west_opt(10 * 3600 + 30 * 60).unwrap(),
            )
        );

        assert!(matches!(
            parse_datetime(b"20171130101010*1000"),
            Err(Error::InvalidTimeZoneSignToken { value: b'*', .. })
        ));
        assert!(matches!(
            parse_datetime(b"20171130101010.204+01"),
            Err(Error::UnexpectedEndOfElement { .. })
        ));

        assert!(parse_datetime(b"").is_err());
        assert!(parse_datetime(&[0x00_u8; 8]).is_err());
        assert!(parse_datetime(&[0xFF_u8; 8]).is_err());
        assert!(parse_datetime(&[b' '; 8]).is_err());
        assert!(parse_datetime(b"nope").is_err());
        assert!(parse_datetime(b"2015dec").is_err());
        assert!(parse_datetime(b"20151130161445+").is_err());
        assert!(parse_datetime(b"20151130161445+----").is_err());
        assert!(parse_datetime(b"20151130161445. ").is_err());
        assert!(parse_datetime(b"20100423164000.001+3").is_err());
        assert!(parse_datetime(b"20171130101010.204+1").is_err());
        assert!(parse_datetime(b"20171130101010.204+011").is_err());
    }

    #[test]
    fn test_read_number() {
        assert_eq!(read_number::<u16>(b"2018").unwrap(), 2018);
        assert_eq!(read_number::<u8>(b"09").unwrap(), 9);
        assert_eq!(read_number::<u32>(b"999999").unwrap(), 999_999);
        assert!(matches!(
            read_number::<u32>(b""),
            Err(Error::InvalidNumberLength { len: 0, .. })
        ));
        assert!(matches!(
            read_number::<u32>(b"1234567890"),
            Err(Error::InvalidNumberLength { len: 10, .. })
        ));
        assert!(matches!(
            read_number::<u16>(b"20x8"),
            Err(Error::InvalidNumberToken { value: b'x', .. })
        ));
    }
}
