//! Usage statistics recorded over the course of a game.

use std::collections::BTreeMap;

use atomfront_core::enums::NukeType;
use atomfront_core::state::NukeStatView;
use atomfront_core::types::PlayerId;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// (sender, target, type) -> launches.
    nukes: BTreeMap<(PlayerId, PlayerId, NukeType), u32>,
}

impl Stats {
    pub fn increase_nuke_count(&mut self, sender: PlayerId, target: PlayerId, nuke_type: NukeType) {
        *self.nukes.entry((sender, target, nuke_type)).or_insert(0) += 1;
    }

    pub fn nuke_count(&self, sender: PlayerId, target: PlayerId, nuke_type: NukeType) -> u32 {
        self.nukes
            .get(&(sender, target, nuke_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn nuke_views(&self) -> Vec<NukeStatView> {
        self.nukes
            .iter()
            .map(|(&(sender, target, nuke_type), &count)| NukeStatView {
                sender,
                target,
                nuke_type,
                count,
            })
            .collect()
    }
}
