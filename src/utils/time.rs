use chrono::{DateTime, Utc};

/// 把時間差轉成 "3 hours ago" / "in a day" 這類人類可讀的描述
pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let phrase = humanize(delta.num_seconds().unsigned_abs());

    if delta.num_seconds() < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn round(value: f64) -> u64 {
    (value + 0.5).floor() as u64
}

fn humanize(seconds: u64) -> String {
    let secs = seconds as f64;
    let minutes = round(secs / 60.0);
    let hours = round(secs / 3600.0);
    let days = round(secs / 86_400.0);

    if seconds < 45 {
        "a few seconds".to_string()
    } else if seconds < 90 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{} hours", hours)
    } else if hours < 36 {
        "a day".to_string()
    } else if days < 26 {
        format!("{} days", days)
    } else if days < 45 {
        "a month".to_string()
    } else if days < 320 {
        match round(days as f64 / 30.4) {
            0 | 1 => "a month".to_string(),
            months => format!("{} months", months),
        }
    } else if days < 548 {
        "a year".to_string()
    } else {
        match round(days as f64 / 365.25) {
            0 | 1 => "a year".to_string(),
            years => format!("{} years", years),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        from_now(now() - delta, now())
    }

    #[test]
    fn test_past_phrases() {
        assert_eq!(ago(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(30)), "a month ago");
        assert_eq!(ago(Duration::days(45)), "a month ago");
        assert_eq!(ago(Duration::days(46)), "2 months ago");
        assert_eq!(ago(Duration::days(92)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "a year ago");
        assert_eq!(ago(Duration::days(365 * 3)), "3 years ago");
    }

    #[test]
    fn test_future_phrase() {
        assert_eq!(from_now(now() + Duration::hours(2), now()), "in 2 hours");
    }
}
