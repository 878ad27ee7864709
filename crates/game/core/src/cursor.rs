//! Saturating per-encounter modifier channels.
//!
//! Skills frequently grant the same rule from several sources ("this unit
//! makes a follow-up attack"). A cursor arbitrates those claims: raising it
//! keeps the strongest declared level instead of summing, so five sources of
//! the same grant count once, and the result does not depend on which hook
//! ran first.
//!
//! Callers read the sign and magnitude:
//! - `> 0`: the rule is granted (at that strength)
//! - `== 0`: untouched
//! - `< 0`: the rule is forcibly denied

use strum::{EnumCount, IntoEnumIterator};

/// The fixed catalog of cursor channels.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CursorKind {
    /// Follow-up attack grant (positive) or denial (negative).
    FollowUp,
    /// Strike twice per attack.
    BraveWeapon,
    /// Strike first when defending.
    Vantage,
    /// Doubles consecutive strikes; suppresses granted follow-ups.
    Desperation,
    /// Counterattack regardless of range (positive) or never (negative).
    Counterattack,
    /// Attack is multiplied by the effectiveness factor.
    Effectiveness,
    /// Flat damage added to each strike.
    DamageIncrease,
    /// Flat damage removed from each strike received.
    DamageReduction,
    /// Foe's triangle relationship is cancelled.
    CancelledAffinity,
    /// Triangle amplification (value in percent).
    GemWeapon,
    /// Always treated as having triangle advantage.
    ArtificialAffinity,
    /// Triangle advantage and disadvantage are swapped.
    ReverseAffinity,
    /// Strikes target the lower of Def and Res.
    LowerOfDefAndRes,
    /// Staff strikes are not halved.
    StaffDamageLikeOtherWeapons,
    /// Negative value neutralizes map buffs.
    MapBuff,
    /// Negative value neutralizes combat buffs.
    CombatBuff,
    /// Extra movement granted on the map.
    AdditionalMovement,
    /// Special charges faster.
    FastCooldown,
    /// Special charges slower.
    SlowCooldown,
}

impl CursorKind {
    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// One saturating channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    value: i32,
}

impl Cursor {
    /// Raises the channel: the strongest claim wins.
    #[inline]
    pub fn increase(&mut self, delta: i32) -> &mut Self {
        self.value = self.value.max(delta);
        self
    }

    /// Pushes the channel to the negative side of the strongest claim.
    #[inline]
    pub fn decrease(&mut self, delta: i32) -> &mut Self {
        self.value = -self.value.max(delta);
        self
    }

    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.value = 0;
        self
    }

    #[inline]
    pub fn read(&self) -> i32 {
        self.value
    }
}

/// All cursor channels of one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorRegistry {
    cursors: [Cursor; CursorKind::COUNT],
}

impl CursorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, kind: CursorKind, delta: i32) {
        self.cursors[kind.index()].increase(delta);
    }

    pub fn lower(&mut self, kind: CursorKind, delta: i32) {
        self.cursors[kind.index()].decrease(delta);
    }

    pub fn value(&self, kind: CursorKind) -> i32 {
        self.cursors[kind.index()].read()
    }

    pub fn is_granted(&self, kind: CursorKind) -> bool {
        self.value(kind) > 0
    }

    pub fn is_denied(&self, kind: CursorKind) -> bool {
        self.value(kind) < 0
    }

    /// Resets every channel to zero (encounter entry).
    pub fn reset_all(&mut self) {
        self.cursors.iter_mut().for_each(|cursor| {
            cursor.reset();
        });
    }

    /// Iterates over every non-zero channel.
    pub fn active(&self) -> impl Iterator<Item = (CursorKind, i32)> + '_ {
        CursorKind::iter()
            .map(|kind| (kind, self.value(kind)))
            .filter(|(_, value)| *value != 0)
    }
}
