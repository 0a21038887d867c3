use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One entry in the navbar notification feed. Mock data, like the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub at: Timestamp,
    pub read: bool,
}

/// The fixed feed the navbar seeds at mount, timestamped relative to `now`.
pub fn sample_feed(now: Timestamp) -> Vec<Notification> {
    let minutes = |m: i64| now - jiff::SignedDuration::from_mins(m);
    vec![
        Notification {
            id: 1,
            text: "New user registered".to_string(),
            at: minutes(2),
            read: false,
        },
        Notification {
            id: 2,
            text: "System update available".to_string(),
            at: minutes(60),
            read: true,
        },
        Notification {
            id: 3,
            text: "New message received".to_string(),
            at: minutes(180),
            read: true,
        },
    ]
}

/// Relative-time label for a feed entry.
pub fn time_ago(at: Timestamp, now: Timestamp) -> String {
    let seconds = now.duration_since(at).as_secs().max(0);
    match seconds {
        0..=59 => "just now".to_string(),
        60..=119 => "1 min ago".to_string(),
        120..=3599 => format!("{} mins ago", seconds / 60),
        3600..=7199 => "1 hour ago".to_string(),
        7200..=86399 => format!("{} hours ago", seconds / 3600),
        86400..=172799 => "1 day ago".to_string(),
        _ => format!("{} days ago", seconds / 86400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_second(1_700_000_000).unwrap()
    }

    #[test]
    fn feed_seeds_three_entries_with_one_unread() {
        let feed = sample_feed(now());
        assert_eq!(feed.len(), 3);
        assert_eq!(feed.iter().filter(|n| !n.read).count(), 1);
    }

    #[test]
    fn time_ago_boundaries() {
        let now = now();
        let ago = |secs: i64| now - jiff::SignedDuration::from_secs(secs);

        assert_eq!(time_ago(ago(0), now), "just now");
        assert_eq!(time_ago(ago(59), now), "just now");
        assert_eq!(time_ago(ago(60), now), "1 min ago");
        assert_eq!(time_ago(ago(120), now), "2 mins ago");
        assert_eq!(time_ago(ago(3600), now), "1 hour ago");
        assert_eq!(time_ago(ago(3 * 3600), now), "3 hours ago");
        assert_eq!(time_ago(ago(86400), now), "1 day ago");
        assert_eq!(time_ago(ago(3 * 86400), now), "3 days ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = now();
        let later = now + jiff::SignedDuration::from_secs(30);
        assert_eq!(time_ago(later, now), "just now");
    }
}
