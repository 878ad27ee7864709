/// Combat rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Speed margin a striker needs over its foe to earn a natural follow-up.
    pub follow_up_threshold: i32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on strikes in one encounter: one vantage strike, two
    /// startup bursts of four and two follow-up bursts of four.
    pub const MAX_TURNS: usize = 17;
    /// Number of equippable skill slots.
    pub const MAX_SKILL_SLOTS: usize = 7;

    // ===== fixed game rules =====
    /// Weapon-triangle swing in percent of attack.
    pub const TRIANGLE_PERCENT: i32 = 20;
    /// Triangle amplification granted by gem weapons and Trilemma.
    pub const AMPLIFIER_PERCENT: i32 = 20;
    /// Ceiling on any triangle amplification a skill can stack up.
    pub const MAX_AMPLIFIER_PERCENT: i32 = 200;
    /// Attack multiplier applied when the striker is effective, in percent.
    pub const EFFECTIVE_ATTACK_PERCENT: i32 = 150;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOLLOW_UP_THRESHOLD: i32 = 5;

    pub fn new() -> Self {
        Self {
            follow_up_threshold: Self::DEFAULT_FOLLOW_UP_THRESHOLD,
        }
    }

    pub fn with_follow_up_threshold(follow_up_threshold: i32) -> Self {
        Self {
            follow_up_threshold,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
