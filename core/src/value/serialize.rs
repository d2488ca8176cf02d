//! Encoding of date, time and date-time values into their textual form.

use crate::value::partial::{DicomDate, DicomDateTime, DicomTime};
use std::io::{Result as IoResult, Write};

/// Encode a single date in accordance to the DICOM Date (DA)
/// value representation.
pub fn encode_date<W>(mut to: W, date: DicomDate) -> IoResult<usize>
where
    W: Write,
{
    // YYYY(MM(DD)?)?
    let repr = date.to_encoded();
    to.write_all(repr.as_bytes())?;
    Ok(repr.len())
}

/// Encode a single time value in accordance to the DICOM Time (TM)
/// value representation.
pub fn encode_time<W>(mut to: W, time: DicomTime) -> IoResult<usize>
where
    W: Write,
{
    // HH(MM(SS(.F{1,6})?)?)?
    let repr = time.to_encoded();
    to.write_all(repr.as_bytes())?;
    Ok(repr.len())
}

/// Encode a single date-time value in accordance to the DICOM DateTime (DT)
/// value representation.
pub fn encode_datetime<W>(mut to: W, dt: DicomDateTime) -> IoResult<usize>
where
    W: Write,
{
    // YYYY(MM(DD(HH(MM(SS(.F{1,6})?)?)?)?)?)?(&ZZXX)?
    let repr = dt.to_encoded();
    to.write_all(repr.as_bytes())?;
    Ok(repr.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_encode_date() {
        let mut data = vec![];
        encode_date(&mut data, DicomDate::from_ym(1985, 12).unwrap()).unwrap();
        assert_eq!(&data, &*b"198512");

        let mut data = vec![];
        let bytes = encode_date(&mut data, DicomDate::from_ymd(2018, 2, 13).unwrap()).unwrap();
        assert_eq!(&data, &*b"20180213");
        assert_eq!(bytes, 8);
    }

    #[test]
    fn test_encode_time() {
        let mut data = vec![];
        encode_time(&mut data, DicomTime::from_hms_micro(23, 59, 48, 123_456).unwrap()).unwrap();
        assert_eq!(&data, &*b"235948.123456");

        let mut data = vec![];
        encode_time(&mut data, DicomTime::from_hmsf(7, 55, 1, 1, 1).unwrap()).unwrap();
        assert_eq!(&data, &*b"075501.1");

        let mut data = vec![];
        encode_time(&mut data, DicomTime::from_hms(12, 0, 30).unwrap()).unwrap();
        assert_eq!(&data, &*b"120030");

        let mut data = vec![];
        encode_time(&mut data, DicomTime::from_h(9).unwrap()).unwrap();
        assert_eq!(&data, &*b"09");
    }

    #[test]
    fn test_encode_datetime() {
        let mut data = vec![];
        encode_datetime(
            &mut data,
            DicomDateTime::from_date_and_time(
                DicomDate::from_ymd(1985, 12, 31).unwrap(),
                DicomTime::from_hms_micro(23, 59, 48, 123_456).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(std::str::from_utf8(&data).unwrap(), "19851231235948.123456");

        let mut data = vec![];
        encode_datetime(
            &mut data,
            DicomDateTime::from_date_with_time_zone(
                DicomDate::from_ym(2018, 12).unwrap(),
                FixedOffset::east_opt(3_600).unwrap(),
            ),
        )
        .unwrap();
        assert_eq!(std::str::from_utf8(&data).unwrap(), "201812+0100");
    }
}
