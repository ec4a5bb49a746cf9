//! Notification Settings
//!
//! Per-user notification preferences. The backend auto-creates these with
//! the defaults below the first time they are fetched, so the client carries
//! the same defaults for rendering before the first round-trip.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// User notification preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Warn when items approach their expiry date
    pub expiry_warning_enabled: bool,
    /// Days before expiry to start warning
    pub expiry_warning_days: i32,
    pub low_stock_enabled: bool,
    pub low_stock_threshold: i32,
    /// Warn when fridge usage crosses the threshold
    pub space_warning_enabled: bool,
    /// Usage percentage that triggers the space warning
    pub space_warning_threshold: i32,
    /// Local time of day to deliver notifications
    pub notification_time: NaiveTime,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            expiry_warning_enabled: true,
            expiry_warning_days: 3,
            low_stock_enabled: false,
            low_stock_threshold: 1,
            space_warning_enabled: true,
            space_warning_threshold: 80,
            notification_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_seeding() {
        let s = NotificationSettings::default();
        assert!(s.expiry_warning_enabled);
        assert_eq!(s.expiry_warning_days, 3);
        assert!(!s.low_stock_enabled);
        assert_eq!(s.space_warning_threshold, 80);
        assert_eq!(s.notification_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }
}
