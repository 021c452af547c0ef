//! Serializes assembled documents to suite files.
//!
//! Purely mechanical: fixed header, separator line before each block, blank
//! line between entries, fixed closing line. Each document is rendered fully
//! in memory and written with a single `fs::write`, so no half-serialized
//! file ever reaches disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SplitError;
use crate::grouper::OutputDocument;

/// Boilerplate prepended to every suite file. Opaque to the core: the scanner
/// and grouper never look inside it.
pub const HEADER: &str = "#[cfg(test)]
mod tests {

    use starknet::{ContractAddress};
    use dojo::model::{ModelStorage, ModelStorageTest};
    use dojo::world::{WorldStorageTrait};

    use d20::d20::models::character::{
        CharacterStats, CharacterCombat, CharacterInventory,
        CharacterPosition, CharacterSkills
    };
    use d20::d20::models::dungeon::{
        DungeonState, Chamber, ChamberType, ChamberExit, MonsterInstance,
        FallenCharacter, CharacterDungeonProgress
    };
    use d20::d20::types::items::{WeaponType, ArmorType};
    use d20::d20::types::character_class::CharacterClass;
    use d20::d20::models::monster::MonsterType;
    use d20::tests::tester::{
        setup_world, mint_fighter, mint_rogue, mint_wizard, assert_explorer_dead,
    };
    use d20::systems::explorer_token::{IExplorerTokenDispatcherTrait};
    use d20::systems::combat_system::{ICombatSystemDispatcherTrait};
    use d20::systems::temple_token::{ITempleTokenDispatcherTrait};

";

/// Visual separator inserted before every block.
pub const SEPARATOR: &str =
    "    // ═══════════════════════════════════════════════════════════════════════";

/// Closing line of every suite file.
pub const FOOTER: &str = "}\n";

/// File extension of the written suite files.
pub const EXTENSION: &str = "cairo";

/// Renders one document: header, then separator + raw block text + blank
/// line per entry, then the closing line.
pub fn render(doc: &OutputDocument) -> String {
    let mut out = String::from(HEADER);
    for block in &doc.blocks {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&block.text());
        out.push_str("\n\n");
    }
    out.push_str(FOOTER);
    out
}

/// Destination path for a group under `out_dir`.
pub fn destination(out_dir: &Path, group: &str) -> PathBuf {
    out_dir.join(format!("{group}.{EXTENSION}"))
}

/// Writes every document, returning the paths written. Fails on the first
/// I/O error; documents already written stay on disk.
pub fn write_all(docs: &[OutputDocument], out_dir: &Path) -> Result<Vec<PathBuf>, SplitError> {
    let mut written = Vec::with_capacity(docs.len());
    for doc in docs {
        let path = destination(out_dir, &doc.group);
        fs::write(&path, render(doc)).map_err(|source| SplitError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
