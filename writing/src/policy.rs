//! Quota policy.
//!
//! One pure decision function gates every transformation request, whichever
//! screen asks. It never mutates the usage counter; the account store owns
//! that.

use thiserror::Error;

use crate::profile::{Profile, UNLIMITED};

/// Minimum words before a rewrite is worth running.
pub const MIN_WORDS: usize = 50;

/// Hard input ceiling, independent of plan. Enforced by truncating input
/// before it ever reaches this policy.
pub const MAX_WORDS: usize = 500;

/// Caps assumed when no profile row has loaded yet.
pub const DEFAULT_REWRITE_LIMIT: i32 = 10;
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Why a transformation request was refused. Checked in order; the first
/// matching reason wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("Please paste or type some text first!")]
    EmptyInput,

    #[error("Please enter at least {min} words first.")]
    BelowMinimum { min: usize },

    #[error("Your plan allows up to {cap} words per input.")]
    ExceedsPlanWordCap { cap: usize },

    #[error("You have used all {limit} of your rewrites for today.")]
    DailyQuotaExhausted { limit: u32 },
}

/// Decide whether a request with `word_count` words of `text` may run under
/// `profile` (or the signup defaults when no profile has loaded).
pub fn evaluate(profile: Option<&Profile>, text: &str, word_count: usize) -> Result<(), Denial> {
    let (cap, limit, used) = match profile {
        Some(p) => (
            p.max_words_per_input,
            p.rewrite_limit_per_day,
            p.daily_rewrites_used,
        ),
        None => (DEFAULT_MAX_WORDS, DEFAULT_REWRITE_LIMIT, 0),
    };

    if text.trim().is_empty() {
        return Err(Denial::EmptyInput);
    }

    if word_count < MIN_WORDS {
        return Err(Denial::BelowMinimum { min: MIN_WORDS });
    }

    if word_count > cap {
        return Err(Denial::ExceedsPlanWordCap { cap });
    }

    if limit != UNLIMITED && i64::from(used) >= i64::from(limit) {
        return Err(Denial::DailyQuotaExhausted {
            limit: limit.max(0) as u32,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{evaluate, Denial, MIN_WORDS};
    use crate::profile::Profile;

    fn profile(cap: usize, limit: i32, used: u32) -> Profile {
        Profile {
            max_words_per_input: cap,
            rewrite_limit_per_day: limit,
            daily_rewrites_used: used,
            ..Profile::signup_defaults("user-1")
        }
    }

    #[test]
    fn test_empty_beats_below_minimum() {
        let p = profile(100, 10, 0);
        assert_eq!(
            evaluate(Some(&p), "   \n ", 0),
            Err(Denial::EmptyInput),
        );
    }

    #[test]
    fn test_below_minimum() {
        let p = profile(100, 10, 0);
        assert_eq!(
            evaluate(Some(&p), "some text", 40),
            Err(Denial::BelowMinimum { min: MIN_WORDS }),
        );
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let p = profile(100, 10, 0);
        assert_eq!(evaluate(Some(&p), "some text", 50), Ok(()));
    }

    #[test]
    fn test_plan_word_cap() {
        let p = profile(100, 10, 0);
        assert_eq!(
            evaluate(Some(&p), "some text", 101),
            Err(Denial::ExceedsPlanWordCap { cap: 100 }),
        );
        assert_eq!(evaluate(Some(&p), "some text", 100), Ok(()));
    }

    #[test]
    fn test_quota_exhausted_at_limit() {
        let p = profile(100, 10, 10);
        assert_eq!(
            evaluate(Some(&p), "some text", 60),
            Err(Denial::DailyQuotaExhausted { limit: 10 }),
        );
    }

    #[test]
    fn test_last_rewrite_of_the_day_allowed() {
        let p = profile(100, 10, 9);
        assert_eq!(evaluate(Some(&p), "some text", 60), Ok(()));
    }

    #[test]
    fn test_unlimited_ignores_usage() {
        let p = profile(500, -1, 9999);
        assert_eq!(evaluate(Some(&p), "some text", 400), Ok(()));
    }

    #[test]
    fn test_word_cap_checked_before_quota() {
        let p = profile(100, 10, 10);
        assert_eq!(
            evaluate(Some(&p), "some text", 150),
            Err(Denial::ExceedsPlanWordCap { cap: 100 }),
        );
    }

    #[test]
    fn test_defaults_without_profile() {
        assert_eq!(evaluate(None, "some text", 60), Ok(()));
        assert_eq!(
            evaluate(None, "some text", 150),
            Err(Denial::ExceedsPlanWordCap { cap: 100 }),
        );
    }

    #[test]
    fn test_pure_and_repeatable() {
        let p = profile(100, 10, 9);
        let first = evaluate(Some(&p), "some text", 60);
        let second = evaluate(Some(&p), "some text", 60);
        assert_eq!(first, second);
        assert_eq!(p.daily_rewrites_used, 9);
    }
}
