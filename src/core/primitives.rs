use chrono::{DateTime, Utc};

pub const MS_PER_MINUTE: f64 = 60_000.0;
pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_DAY: f64 = 86_400_000.0;

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts fractional unix milliseconds back to an instant.
///
/// Returns `None` for non-finite input or values outside chrono's range.
#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    let rounded = millis.round();
    if rounded > (i64::MAX as f64) || rounded < (i64::MIN as f64) {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::{datetime_to_unix_millis, unix_millis_to_datetime};
    use chrono::{TimeZone, Utc};

    #[test]
    fn millis_conversion_rounds_to_nearest() {
        let time = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).single().expect("valid time");
        let millis = datetime_to_unix_millis(time);
        assert_eq!(unix_millis_to_datetime(millis + 0.4), Some(time));
    }

    #[test]
    fn non_finite_millis_have_no_instant() {
        assert_eq!(unix_millis_to_datetime(f64::NAN), None);
        assert_eq!(unix_millis_to_datetime(f64::INFINITY), None);
    }
}
