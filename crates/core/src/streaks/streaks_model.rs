//! Saving streak domain model and its state transitions.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Consecutive-day saving activity of one user profile.
///
/// Transitions never mutate in place: each returns a new snapshot that the
/// service hands to the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    pub user_id: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_saving_days: i32,
    pub last_saving_date: Option<NaiveDate>,
    pub streak_start_date: Option<NaiveDate>,
    pub daily_target: Decimal,
    pub is_active_today: bool,
    pub last_updated: NaiveDateTime,
}

/// Outcome of applying a saving amount to a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// Amount below the daily target; state untouched.
    BelowTarget,
    /// Activity already registered today.
    AlreadyActiveToday,
    /// First activity ever recorded.
    Started,
    /// Activity on the day after the last one.
    Extended,
    /// Gap of two or more days (or a non-positive gap): a new streak starts.
    Restarted,
}

impl StreakState {
    /// Zero state for a profile that has never saved.
    pub fn new(user_id: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            current_streak: 0,
            longest_streak: 0,
            total_saving_days: 0,
            last_saving_date: None,
            streak_start_date: None,
            daily_target: Decimal::ZERO,
            is_active_today: false,
            last_updated: now,
        }
    }

    /// Applies a saving of `amount` on `today`.
    ///
    /// The restart branch leaves `longest_streak` as is: a restart sets the
    /// current streak to 1, which never exceeds a previously recorded maximum.
    pub fn register_activity(
        &self,
        amount: Decimal,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> (Self, StreakTransition) {
        if amount < self.daily_target {
            return (self.clone(), StreakTransition::BelowTarget);
        }

        let Some(last) = self.last_saving_date else {
            let next = Self {
                current_streak: 1,
                longest_streak: self.longest_streak.max(1),
                total_saving_days: self.total_saving_days + 1,
                last_saving_date: Some(today),
                streak_start_date: Some(today),
                is_active_today: true,
                last_updated: now,
                ..self.clone()
            };
            return (next, StreakTransition::Started);
        };

        if last == today && self.is_active_today {
            return (self.clone(), StreakTransition::AlreadyActiveToday);
        }

        if (today - last).num_days() == 1 {
            let current = self.current_streak + 1;
            let next = Self {
                current_streak: current,
                longest_streak: self.longest_streak.max(current),
                total_saving_days: self.total_saving_days + 1,
                last_saving_date: Some(today),
                is_active_today: true,
                last_updated: now,
                ..self.clone()
            };
            return (next, StreakTransition::Extended);
        }

        let next = Self {
            current_streak: 1,
            total_saving_days: self.total_saving_days + 1,
            last_saving_date: Some(today),
            streak_start_date: Some(today),
            is_active_today: true,
            last_updated: now,
            ..self.clone()
        };
        (next, StreakTransition::Restarted)
    }

    /// Daily maintenance: breaks a lapsed streak and clears the daily flag.
    ///
    /// The flag is cleared even when `today` is a saving day, so it reads as
    /// "saved since the last reset".
    pub fn reset_if_lapsed(&self, today: NaiveDate, now: NaiveDateTime) -> Self {
        let lapsed = self
            .last_saving_date
            .map(|last| (today - last).num_days() > 1)
            .unwrap_or(false);

        let mut next = self.clone();
        if lapsed {
            next.current_streak = 0;
            next.streak_start_date = None;
        }
        next.is_active_today = false;
        if next != *self {
            next.last_updated = now;
        }
        next
    }

    pub fn with_daily_target(&self, daily_target: Decimal, now: NaiveDateTime) -> Self {
        Self {
            daily_target,
            last_updated: now,
            ..self.clone()
        }
    }

    /// XP multiplier earned by the current streak.
    pub fn streak_bonus(&self) -> f64 {
        streak_bonus_for(self.current_streak)
    }
}

/// XP multiplier for a streak of `current_streak` days.
pub fn streak_bonus_for(current_streak: i32) -> f64 {
    match current_streak {
        s if s >= 30 => 2.0,
        s if s >= 14 => 1.5,
        s if s >= 7 => 1.25,
        s if s >= 3 => 1.1,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(day: NaiveDate) -> NaiveDateTime {
        day.and_hms_opt(12, 0, 0).unwrap()
    }

    fn fresh(target: Decimal) -> StreakState {
        StreakState::new("default", ts(date(2024, 1, 1))).with_daily_target(target, ts(date(2024, 1, 1)))
    }

    #[test]
    fn below_target_leaves_state_unchanged() {
        let state = fresh(dec!(10));
        let (next, transition) = state.register_activity(dec!(9.99), date(2024, 1, 2), ts(date(2024, 1, 2)));
        assert_eq!(transition, StreakTransition::BelowTarget);
        assert_eq!(next, state);
    }

    #[test]
    fn first_activity_starts_streak() {
        let day = date(2024, 1, 2);
        let (next, transition) = fresh(dec!(10)).register_activity(dec!(15), day, ts(day));
        assert_eq!(transition, StreakTransition::Started);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 1);
        assert_eq!(next.total_saving_days, 1);
        assert_eq!(next.last_saving_date, Some(day));
        assert_eq!(next.streak_start_date, Some(day));
        assert!(next.is_active_today);
    }

    #[test]
    fn three_consecutive_days_reach_first_bonus_tier() {
        let mut state = fresh(dec!(10));
        for offset in 0..3 {
            let day = date(2024, 1, 2) + chrono::Duration::days(offset);
            state = state.reset_if_lapsed(day, ts(day));
            state = state.register_activity(dec!(15), day, ts(day)).0;
        }
        assert_eq!(state.current_streak, 3);
        assert_eq!(state.longest_streak, 3);
        assert_eq!(state.streak_start_date, Some(date(2024, 1, 2)));
        assert_eq!(state.streak_bonus(), 1.1);
    }

    #[test]
    fn same_day_reentry_is_idempotent() {
        let day = date(2024, 1, 2);
        let (once, _) = fresh(dec!(0)).register_activity(dec!(5), day, ts(day));
        let (twice, transition) = once.register_activity(dec!(5), day, ts(day));
        assert_eq!(transition, StreakTransition::AlreadyActiveToday);
        assert_eq!(once, twice);
    }

    #[test]
    fn gap_restarts_without_touching_longest() {
        let mut state = fresh(dec!(0));
        for offset in 0..4 {
            let day = date(2024, 1, 2) + chrono::Duration::days(offset);
            state = state.reset_if_lapsed(day, ts(day));
            state = state.register_activity(dec!(1), day, ts(day)).0;
        }
        assert_eq!(state.longest_streak, 4);

        let later = date(2024, 1, 10);
        let (next, transition) = state.register_activity(dec!(1), later, ts(later));
        assert_eq!(transition, StreakTransition::Restarted);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 4);
        assert_eq!(next.total_saving_days, 5);
        assert_eq!(next.streak_start_date, Some(later));
    }

    #[test]
    fn clock_skew_into_the_past_restarts() {
        let day = date(2024, 1, 5);
        let (state, _) = fresh(dec!(0)).register_activity(dec!(1), day, ts(day));
        let earlier = date(2024, 1, 3);
        let (next, transition) = state.register_activity(dec!(1), earlier, ts(earlier));
        assert_eq!(transition, StreakTransition::Restarted);
        assert_eq!(next.current_streak, 1);
    }

    #[test]
    fn reset_breaks_lapsed_streak() {
        let day = date(2024, 1, 2);
        let (state, _) = fresh(dec!(0)).register_activity(dec!(1), day, ts(day));
        let later = date(2024, 1, 5);
        let reset = state.reset_if_lapsed(later, ts(later));
        assert_eq!(reset.current_streak, 0);
        assert_eq!(reset.streak_start_date, None);
        assert!(!reset.is_active_today);
        assert_eq!(reset.longest_streak, 1);
    }

    #[test]
    fn reset_keeps_streak_from_yesterday() {
        let day = date(2024, 1, 2);
        let (state, _) = fresh(dec!(0)).register_activity(dec!(1), day, ts(day));
        let next_day = date(2024, 1, 3);
        let reset = state.reset_if_lapsed(next_day, ts(next_day));
        assert_eq!(reset.current_streak, 1);
        assert!(!reset.is_active_today);
        assert_eq!(reset.reset_if_lapsed(next_day, ts(next_day)), reset);
    }

    #[test]
    fn reset_on_a_saving_day_clears_only_the_flag() {
        let day = date(2024, 1, 2);
        let (state, _) = fresh(dec!(0)).register_activity(dec!(1), day, ts(day));
        let reset = state.reset_if_lapsed(day, ts(day));
        assert!(!reset.is_active_today);
        assert_eq!(reset.current_streak, 1);
        assert_eq!(reset.last_saving_date, Some(day));
    }

    #[test]
    fn bonus_tiers() {
        assert_eq!(streak_bonus_for(0), 1.0);
        assert_eq!(streak_bonus_for(2), 1.0);
        assert_eq!(streak_bonus_for(3), 1.1);
        assert_eq!(streak_bonus_for(7), 1.25);
        assert_eq!(streak_bonus_for(14), 1.5);
        assert_eq!(streak_bonus_for(29), 1.5);
        assert_eq!(streak_bonus_for(30), 2.0);
    }
}
