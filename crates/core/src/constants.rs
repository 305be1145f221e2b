/// Key of the single supported profile until multi-user support lands.
pub const DEFAULT_USER_ID: &str = "default";

/// Upper bound on simultaneously active challenges.
pub const MAX_ACTIVE_CHALLENGES: usize = 3;

/// One XP point is granted per this many currency units contributed.
pub const XP_AMOUNT_DIVISOR: i64 = 10;

/// Ceiling on the XP of a single grant, after the streak multiplier.
pub const MAX_XP_PER_GRANT: i64 = 1_000_000_000;

/// Share of XP converted into rank points by the level engine.
pub const XP_TO_RANK_POINTS_DIVISOR: i64 = 10;

/// A completed challenge grants `reward_points / CHALLENGE_RANK_DIVISOR` rank points.
pub const CHALLENGE_RANK_DIVISOR: i64 = 10;

/// An unlocked achievement grants `points_reward / ACHIEVEMENT_RANK_DIVISOR` rank points.
pub const ACHIEVEMENT_RANK_DIVISOR: i64 = 5;

/// Cumulative rank points needed to enter each rank, ascending.
pub const RANK_THRESHOLDS: [i64; 8] = [0, 100, 500, 1_000, 2_500, 5_000, 10_000, 25_000];

/// Default number of available challenges offered to the user.
pub const DEFAULT_AVAILABLE_CHALLENGES_LIMIT: usize = 5;
