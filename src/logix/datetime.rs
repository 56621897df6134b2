use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::logix::{AtomicKind, AtomicValue, LogixError, Radix, Result};

const MICROS_PER_SEC: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Format signed microseconds since the Unix epoch as
/// `DT#YYYY-MM-DD-HH:MM:SS.fff_fffZ` (UTC).
pub(crate) fn format_micros(micros: i64) -> Result<String> {
	let secs = micros.div_euclid(MICROS_PER_SEC);
	let sub = micros.rem_euclid(MICROS_PER_SEC) as u32;
	let stamp = utc_stamp(secs, sub * 1_000, micros)?;
	Ok(format!("{stamp}.{:03}_{:03}Z", sub / 1_000, sub % 1_000))
}

/// Format signed nanoseconds since the Unix epoch with a nine-digit
/// fraction, `DT#YYYY-MM-DD-HH:MM:SS.fff_fff_fffZ`.
pub(crate) fn format_nanos(nanos: i64) -> Result<String> {
	let secs = nanos.div_euclid(NANOS_PER_SEC);
	let sub = nanos.rem_euclid(NANOS_PER_SEC) as u32;
	let stamp = utc_stamp(secs, sub, nanos)?;
	Ok(format!("{stamp}.{:03}_{:03}_{:03}Z", sub / 1_000_000, sub / 1_000 % 1_000, sub % 1_000))
}

fn utc_stamp(secs: i64, nanos: u32, raw: i64) -> Result<String> {
	let out_of_range = || LogixError::range(AtomicKind::Lint, raw.to_string());
	let stamp = DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(out_of_range)?;
	// The wire format carries exactly four year digits.
	if !(0..=9999).contains(&stamp.year()) {
		return Err(out_of_range());
	}
	Ok(format!(
		"DT#{:04}-{:02}-{:02}-{:02}:{:02}:{:02}",
		stamp.year(),
		stamp.month(),
		stamp.day(),
		stamp.hour(),
		stamp.minute(),
		stamp.second()
	))
}

/// Parse a `DT#` literal back into signed microseconds since the epoch.
pub(crate) fn parse_micros(text: &str) -> Result<AtomicValue> {
	let (secs, fraction) = parse_stamp(text, Radix::DateTime, &[3, 3])?;
	Ok(AtomicValue::Lint(ticks(secs, fraction, MICROS_PER_SEC, text)?))
}

/// Parse a nine-digit-fraction `DT#` literal back into signed nanoseconds.
pub(crate) fn parse_nanos(text: &str) -> Result<AtomicValue> {
	let (secs, fraction) = parse_stamp(text, Radix::DateTimeNs, &[3, 3, 3])?;
	Ok(AtomicValue::Lint(ticks(secs, fraction, NANOS_PER_SEC, text)?))
}

// Widened so `secs * per_sec` cannot overflow before the non-negative
// fraction is added back.
fn ticks(secs: i64, fraction: i64, per_sec: i64, text: &str) -> Result<i64> {
	let total = i128::from(secs) * i128::from(per_sec) + i128::from(fraction);
	i64::try_from(total).map_err(|_| LogixError::range(AtomicKind::Lint, text))
}

/// Strict field-width scan of `DT#YYYY-MM-DD-HH:MM:SS.<groups>Z`; returns
/// whole seconds since the epoch plus the sub-second fraction.
fn parse_stamp(text: &str, radix: Radix, groups: &[usize]) -> Result<(i64, i64)> {
	let bad = || LogixError::format(radix, text);
	let mut scan = Scan {
		bytes: text.as_bytes(),
		pos: 0,
	};

	scan.literal(b"DT#").ok_or_else(bad)?;
	let year = scan.digits(4).ok_or_else(bad)?;
	scan.literal(b"-").ok_or_else(bad)?;
	let month = scan.digits(2).ok_or_else(bad)?;
	scan.literal(b"-").ok_or_else(bad)?;
	let day = scan.digits(2).ok_or_else(bad)?;
	scan.literal(b"-").ok_or_else(bad)?;
	let hour = scan.digits(2).ok_or_else(bad)?;
	scan.literal(b":").ok_or_else(bad)?;
	let minute = scan.digits(2).ok_or_else(bad)?;
	scan.literal(b":").ok_or_else(bad)?;
	let second = scan.digits(2).ok_or_else(bad)?;
	scan.literal(b".").ok_or_else(bad)?;

	let mut fraction = 0_i64;
	for (idx, width) in groups.iter().enumerate() {
		if idx > 0 {
			scan.literal(b"_").ok_or_else(bad)?;
		}
		fraction = fraction * 1_000 + i64::from(scan.digits(*width).ok_or_else(bad)?);
	}
	scan.literal(b"Z").ok_or_else(bad)?;
	if !scan.done() {
		return Err(bad());
	}

	let stamp = Utc
		.with_ymd_and_hms(year as i32, month, day, hour, minute, second)
		.single()
		.ok_or_else(bad)?;
	Ok((stamp.timestamp(), fraction))
}

struct Scan<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl Scan<'_> {
	fn literal(&mut self, expected: &[u8]) -> Option<()> {
		let end = self.pos.checked_add(expected.len())?;
		if self.bytes.get(self.pos..end)? != expected {
			return None;
		}
		self.pos = end;
		Some(())
	}

	fn digits(&mut self, count: usize) -> Option<u32> {
		let end = self.pos.checked_add(count)?;
		let slice = self.bytes.get(self.pos..end)?;
		let mut value = 0_u32;
		for byte in slice {
			if !byte.is_ascii_digit() {
				return None;
			}
			value = value * 10 + u32::from(byte - b'0');
		}
		self.pos = end;
		Some(value)
	}

	fn done(&self) -> bool {
		self.pos == self.bytes.len()
	}
}
