use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named boolean quest flag, used by location guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// The third wolf has fallen and the sword lies in the open.
    MagicalSwordFound,
    /// The player accepted the sword from the elder.
    HasMagicalSword,
    /// The player agreed to look for the elder's sword.
    ElderQuestAccepted,
    /// The grizzly bear in the deeper forest is dead.
    BearDefeated,
    /// The rusted key was taken from the island remains.
    ChestKeyFound,
    /// The island chest has been unlocked.
    ChestOpened,
    /// The stone that opens the mountain ark is in hand.
    MagicStoneObtained,
    /// The dragon on the summit is dead.
    DragonDefeated,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 8] = [
        Flag::MagicalSwordFound,
        Flag::HasMagicalSword,
        Flag::ElderQuestAccepted,
        Flag::BearDefeated,
        Flag::ChestKeyFound,
        Flag::ChestOpened,
        Flag::MagicStoneObtained,
        Flag::DragonDefeated,
    ];

    /// The snake_case name of this flag.
    pub fn name(self) -> &'static str {
        match self {
            Self::MagicalSwordFound => "magical_sword_found",
            Self::HasMagicalSword => "has_magical_sword",
            Self::ElderQuestAccepted => "elder_quest_accepted",
            Self::BearDefeated => "bear_defeated",
            Self::ChestKeyFound => "chest_key_found",
            Self::ChestOpened => "chest_opened",
            Self::MagicStoneObtained => "magic_stone_obtained",
            Self::DragonDefeated => "dragon_defeated",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name() == wanted)
            .ok_or_else(|| CoreError::UnknownFlag(s.to_string()))
    }
}

/// Quest progress for one playthrough.
///
/// Fields are only writable from within this crate; [`crate::WorldState`]
/// exposes the operations that change them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestFlags {
    pub(crate) dire_wolf_defeated_count: u32,
    pub(crate) magical_sword_found: bool,
    pub(crate) has_magical_sword: bool,
    pub(crate) elder_quest_accepted: bool,
    pub(crate) bear_defeated: bool,
    pub(crate) chest_key_found: bool,
    pub(crate) chest_opened: bool,
    pub(crate) magic_stone_obtained: bool,
    pub(crate) dragon_defeated: bool,
}

impl QuestFlags {
    /// How many dire wolves the player has killed.
    pub fn dire_wolf_defeated_count(&self) -> u32 {
        self.dire_wolf_defeated_count
    }

    /// Read a boolean flag.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::MagicalSwordFound => self.magical_sword_found,
            Flag::HasMagicalSword => self.has_magical_sword,
            Flag::ElderQuestAccepted => self.elder_quest_accepted,
            Flag::BearDefeated => self.bear_defeated,
            Flag::ChestKeyFound => self.chest_key_found,
            Flag::ChestOpened => self.chest_opened,
            Flag::MagicStoneObtained => self.magic_stone_obtained,
            Flag::DragonDefeated => self.dragon_defeated,
        }
    }

    /// The flags currently set, in declaration order.
    pub fn raised(&self) -> Vec<Flag> {
        Flag::ALL.into_iter().filter(|f| self.get(*f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_clear() {
        let flags = QuestFlags::default();
        assert_eq!(flags.dire_wolf_defeated_count(), 0);
        for flag in Flag::ALL {
            assert!(!flags.get(flag), "{flag} should start unset");
        }
        assert!(flags.raised().is_empty());
    }

    #[test]
    fn get_reads_each_field() {
        let flags = QuestFlags {
            chest_key_found: true,
            chest_opened: true,
            ..QuestFlags::default()
        };
        assert_eq!(flags.raised(), vec![Flag::ChestKeyFound, Flag::ChestOpened]);
    }

    #[test]
    fn parse_flag_names() {
        assert_eq!("bear_defeated".parse::<Flag>().unwrap(), Flag::BearDefeated);
        assert_eq!(
            "Magic Stone Obtained".parse::<Flag>().unwrap(),
            Flag::MagicStoneObtained
        );
        assert_eq!(
            "has-magical-sword".parse::<Flag>().unwrap(),
            Flag::HasMagicalSword
        );
        assert!("dragon_tamed".parse::<Flag>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(flag.to_string().parse::<Flag>().unwrap(), flag);
        }
    }
}
