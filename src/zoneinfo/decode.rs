use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::cursor::ByteReader;
use crate::error::DecodeError;
use crate::gregorian::{Month, Weekday};
use crate::slice_cursor::SliceCursor;
use crate::time_zone::TimeZone;
use crate::zoneinfo::rule::{AtMode, Daylight, DstTime, OnMode, Rule};

/// Decode a base64 zone record.
pub(crate) fn decode_base64(encoded: &str) -> Result<TimeZone, DecodeError> {
    let bytes = STANDARD.decode(encoded)?;
    decode(&mut SliceCursor::new(&bytes))
}

/// A zone record is its full name followed by rules, newest first, up to the end of the data.
pub(crate) fn decode<R: ByteReader>(reader: &mut R) -> Result<TimeZone, DecodeError> {
    let full_name = reader.read_utf()?;
    let mut rules = Vec::new();
    while reader.more() {
        rules.push(decode_rule(reader)?);
    }
    if rules.is_empty() {
        return Err(DecodeError::NoRules);
    }
    Ok(TimeZone::new(full_name, rules))
}

fn decode_rule<R: ByteReader>(reader: &mut R) -> Result<Rule, DecodeError> {
    let start_year = reader.read_s2()?;
    let offset = reader.read_s4()?;
    let std_abbr = reader.read_utf()?;
    let dst_offset = reader.read_s4()?;
    let daylight = if dst_offset == 0 {
        None
    } else {
        let abbr = reader.read_utf()?;
        let start = decode_dst_time(reader)?;
        let end = decode_dst_time(reader)?;
        Some(Daylight {
            offset: dst_offset,
            abbr,
            start,
            end,
        })
    };
    Ok(Rule {
        start_year,
        offset,
        std_abbr,
        daylight,
    })
}

fn decode_dst_time<R: ByteReader>(reader: &mut R) -> Result<DstTime, DecodeError> {
    let month = reader.read_u1()?;
    let month = Month::from_ordinal(month).ok_or(DecodeError::InvalidMonth(month))?;
    let on_mode = reader.read_u1()?;
    let on_mode = OnMode::from_code(on_mode).ok_or(DecodeError::UnknownOnMode(on_mode))?;
    let on_weekday = reader.read_u1()?;
    let on_weekday =
        Weekday::from_ordinal(on_weekday).ok_or(DecodeError::InvalidWeekday(on_weekday))?;
    let on_day = reader.read_u1()?;
    let at_time = reader.read_s4()?;
    let at_mode = reader.read_u1()?;
    let at_mode = AtMode::from_code(at_mode).ok_or(DecodeError::UnknownAtMode(at_mode))?;
    Ok(DstTime {
        month,
        on_mode,
        on_weekday,
        on_day,
        at_time,
        at_mode,
    })
}
