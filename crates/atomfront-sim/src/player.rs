//! Player bookkeeping: population, territory, attacks and relations.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use atomfront_core::constants::{RELATION_MAX, RELATION_MIN};
use atomfront_core::enums::Relation;
use atomfront_core::types::{Owner, PlayerId, TileRef};

/// Troops committed to an ongoing attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub target: Owner,
    pub troops: u32,
}

#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    troops: u32,
    workers: u32,
    territory: BTreeSet<TileRef>,
    outgoing_attacks: Vec<Attack>,
    /// How this player feels about others. Missing entries read as 0.
    relations: BTreeMap<PlayerId, i32>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, troops: u32, workers: u32) -> Self {
        Self {
            id,
            name: name.into(),
            troops,
            workers,
            territory: BTreeSet::new(),
            outgoing_attacks: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Remove up to `count` troops; never goes below zero.
    pub fn remove_troops(&mut self, count: u32) {
        self.troops = self.troops.saturating_sub(count);
    }

    /// Remove up to `count` workers; never goes below zero.
    pub fn remove_workers(&mut self, count: u32) {
        self.workers = self.workers.saturating_sub(count);
    }

    pub fn territory(&self) -> &BTreeSet<TileRef> {
        &self.territory
    }

    pub fn num_tiles_owned(&self) -> u32 {
        self.territory.len() as u32
    }

    pub fn owns(&self, tile: TileRef) -> bool {
        self.territory.contains(&tile)
    }

    pub(crate) fn claim(&mut self, tile: TileRef) {
        self.territory.insert(tile);
    }

    pub(crate) fn release(&mut self, tile: TileRef) -> bool {
        self.territory.remove(&tile)
    }

    pub fn outgoing_attacks(&self) -> &[Attack] {
        &self.outgoing_attacks
    }

    pub fn outgoing_attacks_mut(&mut self) -> &mut [Attack] {
        &mut self.outgoing_attacks
    }

    pub fn launch_attack(&mut self, target: Owner, troops: u32) {
        let committed = troops.min(self.troops);
        self.troops -= committed;
        self.outgoing_attacks.push(Attack {
            target,
            troops: committed,
        });
    }

    pub fn relation_score(&self, other: PlayerId) -> i32 {
        self.relations.get(&other).copied().unwrap_or(0)
    }

    pub fn relation(&self, other: PlayerId) -> Relation {
        Relation::from_score(self.relation_score(other))
    }

    /// Shift this player's opinion of `other`, clamped to the relation range.
    pub fn update_relation(&mut self, other: PlayerId, delta: i32) {
        let score = self.relations.entry(other).or_insert(0);
        *score = score.saturating_add(delta).clamp(RELATION_MIN, RELATION_MAX);
    }
}
