//! Subscription profile rows from the external account store.
//!
//! Profiles are owned by the account provider and read-only here: the daily
//! usage counter is incremented and reset by the store, never by this code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel for a plan with no daily rewrite cap.
pub const UNLIMITED: i32 = -1;

/// Defaults written into a fresh tier1 profile row at sign-up.
pub const TIER1_REWRITE_LIMIT: i32 = 10;
pub const TIER1_MAX_WORDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "tier1")]
    Free,
    #[serde(rename = "tier2")]
    Starter,
    #[serde(rename = "tier3")]
    Pro,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Starter => "Starter",
            Tier::Pro => "Pro",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub tier: Tier,
    pub daily_rewrites_used: u32,
    pub rewrite_limit_per_day: i32,
    pub max_words_per_input: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// The row inserted for a brand-new account.
    pub fn signup_defaults(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tier: Tier::Free,
            daily_rewrites_used: 0,
            rewrite_limit_per_day: TIER1_REWRITE_LIMIT,
            max_words_per_input: TIER1_MAX_WORDS,
            updated_at: None,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.rewrite_limit_per_day == UNLIMITED
    }

    /// Rewrites left today, `None` on an unlimited plan.
    pub fn remaining_today(&self) -> Option<u32> {
        if self.is_unlimited() {
            return None;
        }

        let limit = self.rewrite_limit_per_day.max(0) as u32;
        Some(limit.saturating_sub(self.daily_rewrites_used))
    }

    /// Usage as an integer percentage of the daily limit, capped at 100.
    /// Unlimited plans report 0.
    pub fn progress_percent(&self) -> u8 {
        if self.is_unlimited() {
            return 0;
        }

        let limit = self.rewrite_limit_per_day.max(1) as f64;
        let used = self.daily_rewrites_used as f64;

        ((used / limit * 100.0).round() as u64).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::{Profile, Tier};

    #[test]
    fn test_signup_row() {
        let profile = Profile::signup_defaults("user-1");
        assert_eq!(profile.tier, Tier::Free);
        assert_eq!(profile.daily_rewrites_used, 0);
        assert_eq!(profile.rewrite_limit_per_day, 10);
        assert_eq!(profile.max_words_per_input, 100);
    }

    #[test]
    fn test_remaining() {
        let mut profile = Profile::signup_defaults("user-1");
        profile.daily_rewrites_used = 3;
        assert_eq!(profile.remaining_today(), Some(7));

        profile.daily_rewrites_used = 15;
        assert_eq!(profile.remaining_today(), Some(0));

        profile.rewrite_limit_per_day = -1;
        assert_eq!(profile.remaining_today(), None);
    }

    #[test]
    fn test_progress_caps_at_100() {
        let mut profile = Profile::signup_defaults("user-1");
        profile.daily_rewrites_used = 5;
        assert_eq!(profile.progress_percent(), 50);

        profile.daily_rewrites_used = 25;
        assert_eq!(profile.progress_percent(), 100);

        profile.rewrite_limit_per_day = -1;
        assert_eq!(profile.progress_percent(), 0);
    }

    #[test]
    fn test_tier_names_match_store_rows() {
        let row = r#"{"id":"u","tier":"tier2","daily_rewrites_used":1,"rewrite_limit_per_day":50,"max_words_per_input":250}"#;
        let profile: Profile = serde_json::from_str(row).unwrap();
        assert_eq!(profile.tier, Tier::Starter);
        assert_eq!(profile.tier.label(), "Starter");
    }
}
