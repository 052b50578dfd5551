use serde::{Deserialize, Serialize};

use crate::flags::{Flag, QuestFlags};
use crate::inventory::{Inventory, MAGICAL_SWORD, MYSTERIOUS_STONE, RUSTED_KEY};
use crate::stats::StatBlock;

/// Dire wolf kills needed before the elder's sword turns up.
pub const WOLVES_FOR_SWORD: u32 = 3;
/// Attack bonus granted by the magical sword.
pub const SWORD_ATTACK_BONUS: u32 = 6;
/// Armor bonus granted by the grizzly pelt.
pub const PELT_ARMOR_BONUS: u32 = 2;

/// Result of recording a dire wolf kill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WolfTally {
    /// Total wolves killed, including this one.
    pub count: u32,
    /// True only for the kill that revealed the sword.
    pub sword_revealed: bool,
}

/// Result of trying to open the island chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestOutcome {
    /// The key has not been found yet.
    Locked,
    /// The chest was opened just now and the stone taken.
    Opened,
    /// The chest was emptied on an earlier visit.
    AlreadyOpened,
}

/// The single mutable record of a playthrough: player stats, inventory,
/// quest flags, and whether a fight is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    player: StatBlock,
    inventory: Inventory,
    flags: QuestFlags,
    in_combat: bool,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            player: StatBlock::player(0, 0),
            inventory: Inventory::new(),
            flags: QuestFlags::default(),
            in_combat: false,
        }
    }
}

impl WorldState {
    /// Create a world state at its initial values. Attack and armor stay at
    /// zero until [`WorldState::configure_player`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every flag, clear the inventory, and reset the player to 100
    /// health with zero attack and armor.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
        tracing::info!("world state reset to defaults");
    }

    /// Apply the player's chosen attack power and armor class. Health is set
    /// to its maximum and armor is clamped to 20.
    pub fn configure_player(&mut self, attack_power: u32, armor_class: u32) {
        self.player = StatBlock::player(attack_power, armor_class);
        tracing::debug!(player = %self.player, "player configured");
    }

    /// The player's stat block.
    pub fn player(&self) -> &StatBlock {
        &self.player
    }

    /// Mutable access to the player's stat block.
    pub fn player_mut(&mut self) -> &mut StatBlock {
        &mut self.player
    }

    /// The player's items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Quest progress.
    pub fn flags(&self) -> &QuestFlags {
        &self.flags
    }

    /// Read a single boolean flag.
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Whether a fight is currently being resolved.
    pub fn in_combat(&self) -> bool {
        self.in_combat
    }

    /// Mark the start of a fight.
    pub fn begin_combat(&mut self) {
        self.in_combat = true;
    }

    /// Mark the end of a fight.
    pub fn end_combat(&mut self) {
        self.in_combat = false;
    }

    /// Sleep until fully healed. Returns the restored health.
    pub fn rest(&mut self) -> u32 {
        self.player.heal_full();
        self.player.health()
    }

    /// Accept the elder's request to find the sword.
    pub fn accept_elder_quest(&mut self) {
        self.flags.elder_quest_accepted = true;
    }

    /// Take the sword from the elder once it has been found.
    ///
    /// Returns false, changing nothing, if the sword is still lost or already
    /// carried.
    pub fn claim_magical_sword(&mut self) -> bool {
        if !self.flags.magical_sword_found || self.flags.has_magical_sword {
            return false;
        }
        self.flags.has_magical_sword = true;
        self.inventory.add(MAGICAL_SWORD);
        let attack = self.player.raise_attack(SWORD_ATTACK_BONUS);
        tracing::info!(attack, "magical sword claimed");
        true
    }

    /// Count a dire wolf kill. The sword is revealed on the kill that brings
    /// the count to exactly three, and never again.
    pub fn record_wolf_kill(&mut self) -> WolfTally {
        let count = self.flags.dire_wolf_defeated_count.saturating_add(1);
        self.flags.dire_wolf_defeated_count = count;
        let sword_revealed = count == WOLVES_FOR_SWORD && !self.flags.magical_sword_found;
        if sword_revealed {
            self.flags.magical_sword_found = true;
            tracing::info!(count, "magical sword revealed");
        }
        WolfTally {
            count,
            sword_revealed,
        }
    }

    /// Mark the grizzly bear as dead.
    pub fn record_bear_defeat(&mut self) {
        self.flags.bear_defeated = true;
    }

    /// Wear the bear's pelt. Returns the new armor class.
    pub fn skin_bear(&mut self) -> u32 {
        self.player.raise_armor(PELT_ARMOR_BONUS)
    }

    /// Search the island remains. Returns true if the key was found just now.
    pub fn search_remains(&mut self) -> bool {
        if self.flags.chest_key_found {
            return false;
        }
        self.flags.chest_key_found = true;
        self.inventory.add(RUSTED_KEY);
        true
    }

    /// Try to open the island chest.
    pub fn open_chest(&mut self) -> ChestOutcome {
        if self.flags.chest_opened {
            return ChestOutcome::AlreadyOpened;
        }
        if !self.flags.chest_key_found {
            return ChestOutcome::Locked;
        }
        self.flags.chest_opened = true;
        self.flags.magic_stone_obtained = true;
        self.inventory.add(MYSTERIOUS_STONE);
        tracing::info!("chest opened, magic stone obtained");
        ChestOutcome::Opened
    }

    /// Mark the dragon as dead.
    pub fn record_dragon_defeat(&mut self) {
        self.flags.dragon_defeated = true;
        tracing::info!("dragon defeated");
    }
}
