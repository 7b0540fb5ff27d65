use serde::{Deserialize, Serialize};

/// Session persisted to local storage between page loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    /// Epoch milliseconds at which the token was obtained
    pub acquired_at: i64,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, now_ms: i64) -> Self {
        Self {
            token: token.into(),
            acquired_at: now_ms,
        }
    }

    /// Milliseconds left before the session must end, `None` once it has expired.
    /// A clock that moved backwards counts as a fresh session rather than an
    /// infinitely long one.
    pub fn remaining_ms(&self, now_ms: i64, ttl_ms: u32) -> Option<u32> {
        let elapsed = (now_ms - self.acquired_at).max(0);
        let remaining = i64::from(ttl_ms) - elapsed;
        if remaining > 0 {
            u32::try_from(remaining).ok()
        } else {
            None
        }
    }

    pub fn is_expired(&self, now_ms: i64, ttl_ms: u32) -> bool {
        self.remaining_ms(now_ms, ttl_ms).is_none()
    }
}

/// Browser notification permission as reported by `Notification.permission`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    /// The user has not decided yet
    #[default]
    Default,
    Granted,
    /// Explicitly denied, or the browser has no Notification API
    Denied,
}

impl NotificationPermission {
    pub fn from_browser(value: &str) -> Self {
        match value {
            "granted" => NotificationPermission::Granted,
            "denied" => NotificationPermission::Denied,
            _ => NotificationPermission::Default,
        }
    }

    pub fn is_granted(self) -> bool {
        self == NotificationPermission::Granted
    }
}

/// Top-level screen the app shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    PermissionPrompt,
    Main,
}

impl Screen {
    /// Linear gate: auth first, then the permission prompt until notifications
    /// are granted or the user chooses to continue without them.
    pub fn resolve(
        authenticated: bool,
        permission: NotificationPermission,
        prompt_dismissed: bool,
    ) -> Self {
        if !authenticated {
            Screen::Auth
        } else if !permission.is_granted() && !prompt_dismissed {
            Screen::PermissionPrompt
        } else {
            Screen::Main
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: u32 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_fresh_session_has_full_lifetime() {
        let session = StoredSession::new("abc", 1_000);
        assert_eq!(session.remaining_ms(1_000, DAY_MS), Some(DAY_MS));
        assert!(!session.is_expired(1_000, DAY_MS));
    }

    #[test]
    fn test_session_expires_after_24_hours() {
        let session = StoredSession::new("abc", 0);
        let almost = i64::from(DAY_MS) - 1;
        assert_eq!(session.remaining_ms(almost, DAY_MS), Some(1));
        assert!(session.is_expired(i64::from(DAY_MS), DAY_MS));
        assert!(session.is_expired(i64::from(DAY_MS) * 3, DAY_MS));
    }

    #[test]
    fn test_clock_skew_does_not_extend_lifetime() {
        let session = StoredSession::new("abc", 10_000);
        assert_eq!(session.remaining_ms(5_000, DAY_MS), Some(DAY_MS));
    }

    #[test]
    fn test_stored_session_round_trips_through_json() {
        let session = StoredSession::new("jwt.token.value", 1_717_400_000_000);
        let raw = serde_json::to_string(&session).unwrap();
        let parsed: StoredSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, session);
    }

    #[test]
    fn test_permission_from_browser_strings() {
        assert_eq!(NotificationPermission::from_browser("granted"), NotificationPermission::Granted);
        assert_eq!(NotificationPermission::from_browser("denied"), NotificationPermission::Denied);
        assert_eq!(NotificationPermission::from_browser("default"), NotificationPermission::Default);
        assert_eq!(NotificationPermission::from_browser(""), NotificationPermission::Default);
    }

    #[test]
    fn test_screen_gate() {
        use NotificationPermission::*;
        assert_eq!(Screen::resolve(false, Granted, true), Screen::Auth);
        assert_eq!(Screen::resolve(true, Default, false), Screen::PermissionPrompt);
        assert_eq!(Screen::resolve(true, Denied, false), Screen::PermissionPrompt);
        assert_eq!(Screen::resolve(true, Denied, true), Screen::Main);
        assert_eq!(Screen::resolve(true, Granted, false), Screen::Main);
    }
}
