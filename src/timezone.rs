//! Helpers for resolving the server's configured timezone.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Resolve a canonical timezone name, e.g. "America/Sao_Paulo", to its
/// current UTC offset. Returns `None` for unknown timezone names.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in the given timezone, used as the default for date inputs.
/// Returns `None` for unknown timezone names.
pub fn local_date_today(canonical_timezone: &str) -> Option<Date> {
    get_local_offset(canonical_timezone)
        .map(|offset| OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use super::{get_local_offset, local_date_today};

    #[test]
    fn resolves_known_timezones() {
        assert!(get_local_offset("America/Sao_Paulo").is_some());
        assert!(get_local_offset("Etc/UTC").is_some());
    }

    #[test]
    fn rejects_unknown_timezones() {
        assert!(get_local_offset("Terra/Média").is_none());
        assert!(local_date_today("Terra/Média").is_none());
    }

    #[test]
    fn utc_today_matches_now() {
        let today = local_date_today("Etc/UTC").unwrap();

        assert_eq!(today, time::OffsetDateTime::now_utc().date());
    }
}
