use core::cell::RefCell;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{Value, Convertible};

impl Convertible for DateTime<Utc> {
  /// This accepts a number of seconds since the Unix epoch, which may be fractional.
  ///
  /// Strings are not accepted, as they require a format. Please use `date_format` or a
  /// `DateFormatter` for them.
  fn convert(value: &Value) -> Option<Self> {
    let Value::Number(number) = value else { return None };
    if let Some(seconds) = number.as_i64() {
      return DateTime::from_timestamp(seconds, 0);
    }

    let seconds = number.as_f64()?;
    // Also rejects values whose whole seconds won't fit in an `i64`
    if !(seconds.is_finite() && (seconds.abs() < 9.2e18)) {
      None?;
    }
    #[allow(clippy::cast_possible_truncation)]
    let mut whole = seconds.floor() as i64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut nanos = ((seconds - seconds.floor()) * 1e9).round() as u32;
    // The fraction may round up to a whole second
    if nanos >= 1_000_000_000 {
      whole = whole.checked_add(1)?;
      nanos = 0;
    }
    DateTime::from_timestamp(whole, nanos)
  }
}
crate::impl_convertible!(DateTime<Utc>);

/// A parser of dates from strings, according to a pattern.
///
/// Patterns use the syntax of `chrono::format::strftime`. A string is first parsed as a date and
/// time with a timezone. If the pattern has no timezone, it's parsed as a date and time in UTC. If
/// the pattern has no time, it's parsed as a date at midnight UTC.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DateFormatter {
  pattern: String,
}

impl Default for DateFormatter {
  /// A formatter for RFC 3339 date-times, such as `2015-06-01T12:30:00+00:00`.
  fn default() -> Self {
    Self::new("%+")
  }
}

impl DateFormatter {
  /// Create a new formatter for the specified pattern.
  pub fn new(pattern: impl Into<String>) -> Self {
    Self { pattern: pattern.into() }
  }

  /// The pattern currently configured.
  pub fn pattern(&self) -> &str {
    &self.pattern
  }

  /// Configure the pattern to use for further parsing.
  pub fn set_pattern(&mut self, pattern: &str) {
    if self.pattern != pattern {
      self.pattern.clear();
      self.pattern.push_str(pattern);
    }
  }

  /// Parse a date from a string.
  pub fn parse(&self, date: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_str(date, &self.pattern) {
      return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(date, &self.pattern) {
      return Some(date.and_utc());
    }
    match NaiveDate::parse_from_str(date, &self.pattern) {
      Ok(date) => date.and_hms_opt(0, 0, 0).map(|date| date.and_utc()),
      Err(e) => {
        tracing::trace!(pattern = %self.pattern, error = %e, "string didn't match the date pattern");
        None
      }
    }
  }

  /// Convert a string value to a date.
  pub fn convert(&self, value: &Value) -> Option<DateTime<Utc>> {
    self.parse(value.as_str()?)
  }

  /// Lend this formatter as a custom converter.
  pub fn converter(&self) -> impl '_ + Fn(&Value) -> Option<DateTime<Utc>> {
    |value: &Value| self.convert(value)
  }
}

thread_local! {
  static SHARED_FORMATTER: RefCell<DateFormatter> = RefCell::new(DateFormatter::default());
}

/// Access this thread's shared formatter.
///
/// The shared formatter is reconfigured by every use of `date_format`. As each thread has its
/// own, parsing on different threads with different patterns doesn't race.
pub fn with_shared_formatter<R>(f: impl FnOnce(&mut DateFormatter) -> R) -> R {
  SHARED_FORMATTER.with(|formatter| f(&mut formatter.borrow_mut()))
}

/// A custom converter parsing a string value with the specified pattern.
///
/// This uses this thread's shared formatter, setting its pattern before each parse.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use json_assign_traits::{assign_with, date_format, Value};
///
/// let fields: Value = serde_json::from_str(r#"{ "born": "1990-04-12" }"#).unwrap();
/// let mut born = Utc.timestamp_opt(0, 0).unwrap();
/// assign_with(&mut born, fields.get("born"), date_format("%Y-%m-%d"));
/// assert_eq!(born, Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap());
/// ```
pub fn date_format(pattern: &str) -> impl '_ + Fn(&Value) -> Option<DateTime<Utc>> {
  move |value: &Value| {
    let date = value.as_str()?;
    with_shared_formatter(|formatter| {
      formatter.set_pattern(pattern);
      formatter.parse(date)
    })
  }
}
