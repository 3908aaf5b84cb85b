//! Pure formatting helpers, recomputed on every render over the current
//! list snapshot.

use chrono::{DateTime, Utc};

/// Coarse "time ago" label: whole hours under a day, whole days after.
/// Future timestamps clamp to "0h ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_hours().max(0);
    if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// [`time_ago`] against the current instant.
pub fn time_ago_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}

/// "Member since" month; "Unknown" when the backend sent no date.
pub fn member_since(join_date: Option<DateTime<Utc>>) -> String {
    match join_date {
        Some(d) => d.format("%b %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Suspend the current task for `ms` milliseconds. Native builds resolve
/// immediately.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u64) {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn time_ago_floors_to_hours_then_days() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::minutes(30), now), "0h ago");
        assert_eq!(time_ago(now - Duration::minutes(90), now), "1h ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::hours(24), now), "1d ago");
        assert_eq!(time_ago(now - Duration::hours(50), now), "2d ago");
    }

    #[test]
    fn time_ago_clamps_future_timestamps() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now + Duration::hours(3), now), "0h ago");
    }

    #[test]
    fn member_since_formats_the_month() {
        let d = Utc.with_ymd_and_hms(2024, 9, 15, 8, 30, 0).unwrap();
        assert_eq!(member_since(Some(d)), "Sep 2024");
        assert_eq!(member_since(None), "Unknown");
    }
}
