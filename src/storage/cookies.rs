//! Named values with an expiry, the way a browser cookie jar keeps them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Storage;

/// Lifetime given to a cookie when the caller does not pick one.
pub const DEFAULT_COOKIE_DAYS: i64 = 7;

/// Longest lifetime a cookie can get; longer requests are capped.
pub const MAX_COOKIE_DAYS: i64 = 400;

#[derive(Debug, Serialize, Deserialize)]
struct StoredCookie {
    value: String,
    expires: DateTime<Utc>,
}

pub struct CookieJar<S> {
    storage: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: Storage> CookieJar<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: Utc::now,
        }
    }

    /// Replace the time source used for expiry checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Store `value` under `name` for `days` days from now.
    ///
    /// A non-positive lifetime expires the cookie immediately, which removes
    /// it. Lifetimes above [`MAX_COOKIE_DAYS`] are capped. Write failures are
    /// logged and otherwise ignored.
    pub fn set(&mut self, name: &str, value: &str, days: i64) {
        let result = if days <= 0 {
            self.storage.remove(name)
        } else {
            let cookie = StoredCookie {
                value: value.to_string(),
                expires: (self.clock)() + Duration::days(days.min(MAX_COOKIE_DAYS)),
            };
            serde_json::to_string(&cookie)
                .map_err(Into::into)
                .and_then(|json| self.storage.set(name, json))
        };

        if let Err(err) = result {
            tracing::warn!("Failed to write cookie {}: {}", name, err);
        }
    }

    /// Value of `name`, or an empty string when it is missing or expired.
    ///
    /// An unset cookie and one set to `""` read the same.
    pub fn get(&self, name: &str) -> String {
        let Some(raw) = self.storage.get(name) else {
            return String::new();
        };

        match serde_json::from_str::<StoredCookie>(&raw) {
            Ok(cookie) if cookie.expires > (self.clock)() => cookie.value,
            Ok(_) => String::new(),
            Err(err) => {
                tracing::debug!("Ignoring unreadable cookie {}: {}", name, err);
                String::new()
            }
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.set(name, "", -1);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
