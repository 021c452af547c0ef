//! The group table: which test goes into which suite file, in what order.
//!
//! The table is configuration, not something derived from the input: it is
//! read-only for the duration of a run. Groups are disjoint by convention
//! only; an identifier listed in two groups is duplicated verbatim into both.
//! The built-in table mirrors the contract suite's thematic split; an
//! alternative table can be loaded from YAML.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::errors::SplitError;

/// One output group: suite name plus its members in output order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: Vec<String>,
}

/// The ordered group table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GroupSpec {
    pub groups: Vec<Group>,
}

impl GroupSpec {
    pub fn new(groups: Vec<Group>) -> Self {
        GroupSpec { groups }
    }

    /// Loads a group table from a YAML list of `{ name, members }` entries.
    pub fn from_yaml_file(path: &Path) -> Result<GroupSpec, SplitError> {
        let content = std::fs::read_to_string(path).map_err(|source| SplitError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| SplitError::GroupConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every identifier any group requests, in table order, duplicates kept.
    pub fn requested(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.members.iter().map(|m| m.as_str()))
    }
}

fn group(name: &str, members: &[&str]) -> Group {
    Group {
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

/// The built-in table for the contract integration suite.
pub static DEFAULT_GROUPS: Lazy<GroupSpec> = Lazy::new(|| {
    GroupSpec::new(vec![
        group(
            "test_temple_lifecycle",
            &[
                "test_mint_temple_creates_temple_state",
                "test_mint_temple_sequential_ids",
                "test_mint_temple_rejects_zero_difficulty",
                "test_enter_temple_places_explorer_at_entrance",
                "test_enter_temple_initializes_progress",
                "test_enter_temple_rejects_dead_explorer",
                "test_exit_temple_clears_position",
                "test_exit_temple_preserves_stats",
                "test_exit_temple_fails_not_in_temple",
                "test_exit_temple_fails_during_combat",
                "test_enter_temple_rejects_explorer_in_combat",
                "test_reenter_same_temple_preserves_progress",
            ],
        ),
        group(
            "test_exploration",
            &[
                "test_open_exit_generates_new_chamber",
                "test_open_exit_increments_chambers_explored",
                "test_open_exit_creates_back_exit",
                "test_open_exit_fails_if_already_discovered",
                "test_open_exit_fails_with_invalid_index",
                "test_open_exit_fails_if_dead",
                "test_open_exit_fails_if_in_combat",
                "test_move_to_empty_chamber_no_combat",
                "test_move_to_undiscovered_exit_fails",
                "test_move_to_chamber_fails_if_dead",
                "test_move_to_chamber_fails_if_in_combat",
            ],
        ),
        group(
            "test_combat_and_progression",
            &[
                "test_move_to_monster_chamber_triggers_combat",
                "test_attack_in_temple_records_position",
                "test_kill_monster_grants_xp",
                "test_kill_monster_updates_temple_progress",
                "test_level_up_increases_max_hp",
            ],
        ),
        group(
            "test_traps",
            &[
                "test_trap_in_move_to_chamber_kills_explorer_via_handle_death",
                "test_disarm_trap_failure_kills_explorer_via_handle_death",
                "test_disarm_trap_resolves_without_crash",
                "test_disarm_trap_fails_in_non_trap_chamber",
                "test_disarm_trap_fails_if_already_disarmed",
                "test_disarm_trap_fails_if_dead",
                "test_disarm_trap_fails_if_in_combat",
                "test_move_to_trap_chamber_may_deal_damage",
                "test_move_to_disarmed_trap_no_damage",
            ],
        ),
        group(
            "test_looting",
            &[
                "test_loot_treasure_awards_gold_in_treasure_chamber",
                "test_loot_treasure_marks_looted",
                "test_loot_treasure_fails_on_second_attempt",
                "test_loot_treasure_fails_in_monster_chamber",
                "test_loot_treasure_fails_if_in_combat",
                "test_loot_treasure_in_empty_chamber",
            ],
        ),
        group(
            "test_permadeath",
            &[
                "test_loot_fallen_transfers_items",
                "test_loot_fallen_cannot_loot_self",
                "test_loot_fallen_fails_if_already_looted",
                "test_loot_fallen_fails_with_invalid_index",
                "test_loot_fallen_fails_if_in_combat",
                "test_permadeath_two_player_death_and_loot",
                "test_multiple_fallen_bodies_in_same_chamber",
                "test_dead_explorer_cannot_loot_treasure",
                "test_dead_explorer_cannot_loot_fallen",
                "test_dead_explorer_cannot_use_item",
                "test_dead_nft_fully_frozen",
                "test_loot_second_body_leaves_first_intact",
            ],
        ),
        group(
            "test_boss_mechanics",
            &[
                "test_boss_defeat_marks_boss_dead",
                "test_boss_defeat_increments_dungeons_conquered",
                "test_boss_prob_zero_below_min_depth",
                "test_boss_prob_at_min_depth",
                "test_boss_prob_depth_quadratic_growth",
                "test_boss_prob_combined_depth_and_xp",
                "test_boss_prob_caps_at_95_percent",
                "test_boss_prob_progression_milestones",
                "test_boss_prob_roll_range_alignment",
            ],
        ),
        group(
            "test_cross_temple",
            &[
                "test_cross_temple_stats_carry_over",
                "test_cross_temple_level_up_carries_over",
                "test_cross_temple_inventory_carries_over",
                "test_cross_temple_hp_not_auto_healed",
                "test_cross_temple_progress_is_per_temple",
                "test_cross_temple_class_resources_not_reset",
                "test_cross_temple_full_flow_with_rest",
            ],
        ),
        group(
            "test_multiplayer",
            &[
                "test_multiplayer_shared_exit_discovery",
                "test_multiplayer_shared_monster_kill",
                "test_multiplayer_shared_treasure_looted",
                "test_multiplayer_shared_trap_disarmed",
                "test_multiplayer_both_see_same_monster_hp",
                "test_multiplayer_independent_chamber_generation",
                "test_multiplayer_death_visible_to_other_player",
                "test_multiplayer_independent_progress_tracking",
            ],
        ),
        group(
            "test_full_flows",
            &[
                "test_full_flow_mint_enter_explore_fight_exit",
                "test_full_flow_rogue_enters_loots_exits",
                "test_full_flow_wizard_casts_spell_kills_monster",
            ],
        ),
    ])
});
