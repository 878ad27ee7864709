//! Weapon and movement classification.

use bitflags::bitflags;

/// Weapon color, which drives the weapon triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponColor {
    Red,
    Blue,
    Green,
    Colorless,
}

/// Weapon category.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Lance,
    Axe,
    Bow,
    Dagger,
    Tome,
    Dragonstone,
    Staff,
    Beast,
}

impl WeaponType {
    /// Attack range in tiles.
    pub const fn range(self) -> u8 {
        match self {
            WeaponType::Sword
            | WeaponType::Lance
            | WeaponType::Axe
            | WeaponType::Dragonstone
            | WeaponType::Beast => 1,
            WeaponType::Bow | WeaponType::Dagger | WeaponType::Tome | WeaponType::Staff => 2,
        }
    }

    /// Color forced by the weapon category, if any.
    pub const fn fixed_color(self) -> Option<WeaponColor> {
        match self {
            WeaponType::Sword => Some(WeaponColor::Red),
            WeaponType::Lance => Some(WeaponColor::Blue),
            WeaponType::Axe => Some(WeaponColor::Green),
            WeaponType::Staff => Some(WeaponColor::Colorless),
            _ => None,
        }
    }

    /// Whether a weapon of this category may carry the given color.
    pub fn accepts_color(self, color: WeaponColor) -> bool {
        self.fixed_color().is_none_or(|fixed| fixed == color)
    }

    /// Magic-using weapons target the foe's Res instead of Def.
    pub const fn is_magic(self) -> bool {
        matches!(
            self,
            WeaponType::Tome | WeaponType::Dragonstone | WeaponType::Staff
        )
    }

    pub const fn target(self) -> TargetSet {
        match self {
            WeaponType::Sword => TargetSet::SWORD,
            WeaponType::Lance => TargetSet::LANCE,
            WeaponType::Axe => TargetSet::AXE,
            WeaponType::Bow => TargetSet::BOW,
            WeaponType::Dagger => TargetSet::DAGGER,
            WeaponType::Tome => TargetSet::TOME,
            WeaponType::Dragonstone => TargetSet::DRAGONSTONE,
            WeaponType::Staff => TargetSet::STAFF,
            WeaponType::Beast => TargetSet::BEAST,
        }
    }
}

/// How a unit moves across the map.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MovementType {
    Infantry,
    Armored,
    Cavalry,
    Flier,
}

impl MovementType {
    pub const fn target(self) -> TargetSet {
        match self {
            MovementType::Infantry => TargetSet::INFANTRY,
            MovementType::Armored => TargetSet::ARMORED,
            MovementType::Cavalry => TargetSet::CAVALRY,
            MovementType::Flier => TargetSet::FLIER,
        }
    }
}

bitflags! {
    /// A set of weapon and movement categories.
    ///
    /// Used for effectiveness lists, protection lists and skill user filters.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TargetSet: u16 {
        const SWORD       = 1 << 0;
        const LANCE       = 1 << 1;
        const AXE         = 1 << 2;
        const BOW         = 1 << 3;
        const DAGGER      = 1 << 4;
        const TOME        = 1 << 5;
        const DRAGONSTONE = 1 << 6;
        const STAFF       = 1 << 7;
        const BEAST       = 1 << 8;
        const INFANTRY    = 1 << 9;
        const ARMORED     = 1 << 10;
        const CAVALRY     = 1 << 11;
        const FLIER       = 1 << 12;

        const MELEE    = Self::SWORD.bits() | Self::LANCE.bits() | Self::AXE.bits();
        const WEAPONS  = 0x01FF;
        const MOVEMENT = 0x1E00;
    }
}

impl TargetSet {
    /// Whether a unit of this movement type wielding this weapon type is in the set.
    pub fn matches(self, movement: MovementType, weapon: Option<WeaponType>) -> bool {
        self.intersects(movement.target()) || weapon.is_some_and(|w| self.intersects(w.target()))
    }

    /// Whether a unit passes this set used as a user filter: its movement type
    /// must be listed, and so must its weapon type once it carries one.
    pub fn admits(self, movement: MovementType, weapon: Option<WeaponType>) -> bool {
        self.contains(movement.target()) && weapon.is_none_or(|w| self.contains(w.target()))
    }
}

/// Weapon data carried by a unit once a weapon skill is equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub kind: WeaponType,
    pub color: WeaponColor,
    pub might: i32,
    pub range: u8,
}

impl WeaponProfile {
    /// Creates a profile with the category's natural range.
    pub const fn new(kind: WeaponType, color: WeaponColor, might: i32) -> Self {
        Self {
            kind,
            color,
            might,
            range: kind.range(),
        }
    }
}
