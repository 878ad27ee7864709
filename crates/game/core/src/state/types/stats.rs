//! Stat blocks and per-stat modifier tables.

use core::ops::{Add, AddAssign, Index, IndexMut, Neg};

/// Stats that can be buffed or debuffed. HP is never modified by buffs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatStat {
    Atk,
    Spd,
    Def,
    Res,
}

/// A full stat block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: i32,
    pub atk: i32,
    pub spd: i32,
    pub def: i32,
    pub res: i32,
}

impl Stats {
    pub const fn new(hp: i32, atk: i32, spd: i32, def: i32, res: i32) -> Self {
        Self {
            hp,
            atk,
            spd,
            def,
            res,
        }
    }

    /// Returns the value of a buffable stat.
    #[inline]
    pub fn get(&self, stat: CombatStat) -> i32 {
        match stat {
            CombatStat::Atk => self.atk,
            CombatStat::Spd => self.spd,
            CombatStat::Def => self.def,
            CombatStat::Res => self.res,
        }
    }

    /// Adds a modifier table to the buffable stats; HP is left untouched.
    pub fn with_mods(mut self, mods: &StatMods) -> Self {
        self.atk += mods.atk;
        self.spd += mods.spd;
        self.def += mods.def;
        self.res += mods.res;
        self
    }
}

/// Per-stat modifier table (buffs, debuffs, or their net change).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMods {
    pub atk: i32,
    pub spd: i32,
    pub def: i32,
    pub res: i32,
}

impl StatMods {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(atk: i32, spd: i32, def: i32, res: i32) -> Self {
        Self { atk, spd, def, res }
    }

    /// The same value on every stat.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// A table touching a single stat.
    pub fn single(stat: CombatStat, value: i32) -> Self {
        let mut mods = Self::ZERO;
        mods[stat] = value;
        mods
    }

    /// Elementwise combination of two tables.
    pub fn zip_with(self, other: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        Self::new(
            f(self.atk, other.atk),
            f(self.spd, other.spd),
            f(self.def, other.def),
            f(self.res, other.res),
        )
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Index<CombatStat> for StatMods {
    type Output = i32;

    fn index(&self, stat: CombatStat) -> &i32 {
        match stat {
            CombatStat::Atk => &self.atk,
            CombatStat::Spd => &self.spd,
            CombatStat::Def => &self.def,
            CombatStat::Res => &self.res,
        }
    }
}

impl IndexMut<CombatStat> for StatMods {
    fn index_mut(&mut self, stat: CombatStat) -> &mut i32 {
        match stat {
            CombatStat::Atk => &mut self.atk,
            CombatStat::Spd => &mut self.spd,
            CombatStat::Def => &mut self.def,
            CombatStat::Res => &mut self.res,
        }
    }
}

impl Add for StatMods {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl AddAssign for StatMods {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for StatMods {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.atk, -self.spd, -self.def, -self.res)
    }
}
