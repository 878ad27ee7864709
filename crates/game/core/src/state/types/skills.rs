//! Equipped skill slots.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};

use crate::config::CombatConfig;

/// Name of a skill in the skill table.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Skill slots, declared in dispatch order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillSlot {
    #[strum(serialize = "weapon")]
    Weapon,
    #[strum(serialize = "assist")]
    Assist,
    #[strum(serialize = "special")]
    Special,
    A,
    B,
    C,
    S,
}

const _: () = assert!(SkillSlot::COUNT == CombatConfig::MAX_SKILL_SLOTS);

/// Skills equipped by a unit, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    slots: [Option<SkillId>; CombatConfig::MAX_SKILL_SLOTS],
}

impl SkillSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SkillSlot) -> Option<&SkillId> {
        self.slots[slot as usize].as_ref()
    }

    /// Puts a skill into a slot, returning the skill it replaced.
    pub fn set(&mut self, slot: SkillSlot, skill: SkillId) -> Option<SkillId> {
        self.slots[slot as usize].replace(skill)
    }

    pub fn clear(&mut self, slot: SkillSlot) -> Option<SkillId> {
        self.slots[slot as usize].take()
    }

    /// Iterates over equipped skills in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillSlot, &SkillId)> {
        SkillSlot::iter().filter_map(|slot| self.get(slot).map(|skill| (slot, skill)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
