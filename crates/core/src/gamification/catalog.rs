//! Built-in achievements and challenges seeded on first run.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::achievements::{Achievement, AchievementCategory, AchievementTier};
use crate::challenges::{Challenge, ChallengeDifficulty, ChallengeType};

struct AchievementSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: AchievementCategory,
    tier: AchievementTier,
    points_reward: i32,
    icon_name: &'static str,
    target_progress: i32,
    conditions: &'static str,
}

const ACHIEVEMENTS: [AchievementSeed; 4] = [
    AchievementSeed {
        id: "savings-first-step",
        title: "First Step",
        description: "Make your first contribution to a saving goal",
        category: AchievementCategory::Savings,
        tier: AchievementTier::Bronze,
        points_reward: 10,
        icon_name: "ic_achievement_first_goal",
        target_progress: 1,
        conditions: "Contribute to a saving goal",
    },
    AchievementSeed {
        id: "streaks-three-days",
        title: "Streak Starter",
        description: "Save on 3 consecutive days",
        category: AchievementCategory::Streaks,
        tier: AchievementTier::Bronze,
        points_reward: 20,
        icon_name: "ic_achievement_streak",
        target_progress: 3,
        conditions: "Keep a 3-day saving streak",
    },
    AchievementSeed {
        id: "streaks-seven-days",
        title: "Steady Saver",
        description: "Reach a 7-day saving streak",
        category: AchievementCategory::Streaks,
        tier: AchievementTier::Silver,
        points_reward: 50,
        icon_name: "ic_achievement_streak_7",
        target_progress: 7,
        conditions: "Keep a 7-day saving streak",
    },
    AchievementSeed {
        id: "budget-master",
        title: "Budget Master",
        description: "Stay within your budget for a whole month",
        category: AchievementCategory::Budget,
        tier: AchievementTier::Gold,
        points_reward: 100,
        icon_name: "ic_achievement_budget_master",
        target_progress: 30,
        conditions: "Exceed no budget for 30 days",
    },
];

struct ChallengeSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    target_amount: Decimal,
    reward_points: i32,
    difficulty: ChallengeDifficulty,
    challenge_type: ChallengeType,
    duration_days: i32,
    icon_name: &'static str,
}

const CHALLENGES: [ChallengeSeed; 3] = [
    ChallengeSeed {
        id: "daily-saving",
        title: "Daily Saving",
        description: "Put a small amount aside every day for a week",
        target_amount: dec!(50),
        reward_points: 30,
        difficulty: ChallengeDifficulty::Beginner,
        challenge_type: ChallengeType::Daily,
        duration_days: 7,
        icon_name: "ic_challenge_daily",
    },
    ChallengeSeed {
        id: "no-unnecessary-spending",
        title: "No Unnecessary Spending",
        description: "Skip non-essential categories for 3 days",
        target_amount: dec!(0),
        reward_points: 40,
        difficulty: ChallengeDifficulty::Easy,
        challenge_type: ChallengeType::NoSpend,
        duration_days: 3,
        icon_name: "ic_challenge_no_spend",
    },
    ChallengeSeed {
        id: "save-twenty-percent",
        title: "Save 20%",
        description: "Save 20% of your income this week",
        target_amount: dec!(0),
        reward_points: 75,
        difficulty: ChallengeDifficulty::Medium,
        challenge_type: ChallengeType::Percentage,
        duration_days: 7,
        icon_name: "ic_challenge_percentage",
    },
];

pub fn default_achievements(now: NaiveDateTime) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|seed| Achievement {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category,
            tier: seed.tier,
            points_reward: seed.points_reward,
            icon_name: seed.icon_name.to_string(),
            conditions: seed.conditions.to_string(),
            target_progress: seed.target_progress,
            progress: 0,
            is_unlocked: false,
            unlocked_at: None,
            created_at: now,
        })
        .collect()
}

pub fn default_challenges(now: NaiveDateTime) -> Vec<Challenge> {
    CHALLENGES
        .iter()
        .map(|seed| Challenge {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            target_amount: seed.target_amount,
            reward_points: seed.reward_points,
            difficulty: seed.difficulty,
            challenge_type: seed.challenge_type,
            duration_days: seed.duration_days,
            icon_name: Some(seed.icon_name.to_string()),
            color_code: None,
            is_active: false,
            is_completed: false,
            start_date: None,
            end_date: None,
            progress: Decimal::ZERO,
            created_at: now,
        })
        .collect()
}
