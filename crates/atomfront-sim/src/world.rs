//! The game world: map, players, units and diplomacy.
//!
//! `GameWorld` is the single collaborator every execution mutates. It is
//! constructed once by the caller and handed to executions by `&mut`
//! on every call; nothing here is global.

use std::collections::BTreeMap;

use hecs::Entity;
use log::{debug, info};

use atomfront_core::components::*;
use atomfront_core::config::GameConfig;
use atomfront_core::enums::{MessageType, NukeType, UnitType};
use atomfront_core::events::{GameEvent, GameMessage};
use atomfront_core::types::{Owner, PlayerId, TileRef};
use atomfront_map::GameMap;

use crate::alliance::Alliance;
use crate::error::WorldError;
use crate::player::Player;
use crate::stats::Stats;

pub struct GameWorld {
    map: GameMap,
    config: GameConfig,
    players: BTreeMap<PlayerId, Player>,
    units: hecs::World,
    alliances: Vec<Alliance>,
    stats: Stats,
    messages: Vec<GameMessage>,
    events: Vec<GameEvent>,
    ticks: u64,
}

impl GameWorld {
    pub fn new(map: GameMap, config: GameConfig) -> Self {
        Self {
            map,
            config,
            players: BTreeMap::new(),
            units: hecs::World::new(),
            alliances: Vec::new(),
            stats: Stats::default(),
            messages: Vec::new(),
            events: Vec::new(),
            ticks: 0,
        }
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current logical tick, maintained by the engine.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn set_ticks(&mut self, ticks: u64) {
        self.ticks = ticks;
    }

    // --- Players ---

    /// Register a player. Replaces any previous player with the same id.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        let id = player.id();
        self.players.insert(id, player);
        id
    }

    pub fn has_player(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, WorldError> {
        self.players.get(&id).ok_or(WorldError::PlayerNotFound(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, WorldError> {
        self.players
            .get_mut(&id)
            .ok_or(WorldError::PlayerNotFound(id))
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    // --- Territory ---

    pub fn owner(&self, tile: TileRef) -> Owner {
        self.map.owner(tile)
    }

    /// Give `tile` to `player`, taking it from any previous owner.
    pub fn conquer(&mut self, player: PlayerId, tile: TileRef) -> Result<(), WorldError> {
        if !self.map.is_valid(tile) {
            return Err(WorldError::InvalidTile(tile));
        }
        if !self.players.contains_key(&player) {
            return Err(WorldError::PlayerNotFound(player));
        }
        if let Owner::Player(previous) = self.map.owner(tile) {
            if let Some(p) = self.players.get_mut(&previous) {
                p.release(tile);
            }
        }
        self.map.set_owner(tile, Some(player))?;
        self.player_mut(player)?.claim(tile);
        Ok(())
    }

    /// Return `tile` to terra nullius. Yields the previous owner, if any.
    pub fn relinquish(&mut self, tile: TileRef) -> Result<Option<PlayerId>, WorldError> {
        let previous = self.map.owner(tile).player();
        if let Some(owner) = previous {
            if let Some(p) = self.players.get_mut(&owner) {
                p.release(tile);
            }
        }
        self.map.set_owner(tile, None)?;
        Ok(previous)
    }

    // --- Units ---

    pub fn units(&self) -> &hecs::World {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut hecs::World {
        &mut self.units
    }

    /// Spawn a unit of `kind` for `owner` at `tile`.
    pub fn build_unit(
        &mut self,
        owner: PlayerId,
        kind: UnitType,
        tile: TileRef,
        troops: u32,
    ) -> Result<Entity, WorldError> {
        if !self.map.is_valid(tile) {
            return Err(WorldError::InvalidTile(tile));
        }
        if !self.has_player(owner) {
            return Err(WorldError::PlayerNotFound(owner));
        }
        let unit = Unit { kind, owner };
        let entity = if kind.is_launcher() {
            self.units.spawn((
                unit,
                TilePos(tile),
                Troops(troops),
                LauncherCooldown::default(),
            ))
        } else {
            self.units.spawn((unit, TilePos(tile), Troops(troops)))
        };
        debug!("{owner} built {kind:?} at {tile:?}");
        Ok(entity)
    }

    /// Spawn a nuke unit headed for `dst`.
    pub fn build_nuke(
        &mut self,
        owner: PlayerId,
        nuke_type: NukeType,
        tile: TileRef,
        dst: TileRef,
    ) -> Result<Entity, WorldError> {
        let entity = self.build_unit(owner, nuke_type.unit_type(), tile, 0)?;
        self.units
            .insert_one(entity, DetonationTarget(dst))
            .map_err(|_| WorldError::UnitNotFound(entity))?;
        Ok(entity)
    }

    /// Whether the unit still exists. Deleted and intercepted units do not.
    pub fn unit_exists(&self, entity: Entity) -> bool {
        self.units.contains(entity)
    }

    pub fn unit(&self, entity: Entity) -> Option<Unit> {
        self.units.get::<&Unit>(entity).ok().map(|u| *u)
    }

    pub fn unit_tile(&self, entity: Entity) -> Option<TileRef> {
        self.units.get::<&TilePos>(entity).ok().map(|p| p.0)
    }

    pub fn move_unit(&mut self, entity: Entity, tile: TileRef) -> Result<(), WorldError> {
        if !self.map.is_valid(tile) {
            return Err(WorldError::InvalidTile(tile));
        }
        let mut pos = self
            .units
            .get::<&mut TilePos>(entity)
            .map_err(|_| WorldError::UnitNotFound(entity))?;
        pos.0 = tile;
        Ok(())
    }

    /// Remove a unit from the world. Returns false if it was already gone.
    pub fn delete_unit(&mut self, entity: Entity) -> bool {
        self.units.despawn(entity).is_ok()
    }

    pub fn unit_troops(&self, entity: Entity) -> Option<u32> {
        self.units.get::<&Troops>(entity).ok().map(|t| t.0)
    }

    pub fn set_unit_troops(&mut self, entity: Entity, troops: u32) -> Result<(), WorldError> {
        let mut t = self
            .units
            .get::<&mut Troops>(entity)
            .map_err(|_| WorldError::UnitNotFound(entity))?;
        t.0 = troops;
        Ok(())
    }

    /// Units of `owner` whose kind is one of `kinds`, in spawn order.
    pub fn units_of(&self, owner: PlayerId, kinds: &[UnitType]) -> Vec<Entity> {
        let mut found: Vec<Entity> = self
            .units
            .query::<&Unit>()
            .iter()
            .filter(|(_, unit)| unit.owner == owner && kinds.contains(&unit.kind))
            .map(|(entity, _)| entity)
            .collect();
        found.sort_by_key(|e| e.id());
        found
    }

    /// Every unit in the world with its identity and tile, in spawn order.
    pub fn all_units(&self) -> Vec<(Entity, Unit, TileRef)> {
        let mut all: Vec<(Entity, Unit, TileRef)> = self
            .units
            .query::<(&Unit, &TilePos)>()
            .iter()
            .map(|(entity, (unit, pos))| (entity, *unit, pos.0))
            .collect();
        all.sort_by_key(|(e, _, _)| e.id());
        all
    }

    /// Put a launcher on (or take it off) cooldown.
    pub fn set_cooldown(&mut self, entity: Entity, cooling: bool) -> Result<(), WorldError> {
        let ticks = self.ticks;
        let mut cooldown = self
            .units
            .get::<&mut LauncherCooldown>(entity)
            .map_err(|_| WorldError::UnitNotFound(entity))?;
        cooldown.started_at = cooling.then_some(ticks);
        Ok(())
    }

    pub fn is_cooling_down(&self, entity: Entity) -> bool {
        self.units
            .get::<&LauncherCooldown>(entity)
            .is_ok_and(|c| c.started_at.is_some())
    }

    /// Spawn cell for `kind` aimed at `dst`, if `player` may build it.
    ///
    /// Atom and hydrogen bombs launch from the ready missile silo nearest
    /// to the target. Other kinds have no build eligibility here.
    pub fn can_build(&self, player: PlayerId, kind: UnitType, dst: TileRef) -> Option<TileRef> {
        if !self.has_player(player) || !self.map.is_valid(dst) {
            return None;
        }
        match kind {
            UnitType::AtomBomb | UnitType::HydrogenBomb => self
                .units_of(player, &[UnitType::MissileSilo])
                .into_iter()
                .filter(|&silo| !self.is_cooling_down(silo))
                .filter_map(|silo| self.unit_tile(silo))
                .min_by_key(|&tile| self.map.manhattan_dist(tile, dst)),
            _ => None,
        }
    }

    // --- Diplomacy ---

    pub fn alliances(&self) -> &[Alliance] {
        &self.alliances
    }

    pub fn alliance_between(&self, a: PlayerId, b: PlayerId) -> Option<Alliance> {
        self.alliances.iter().find(|al| al.binds(a, b)).copied()
    }

    pub fn form_alliance(&mut self, requestor: PlayerId, recipient: PlayerId) -> Option<Alliance> {
        if requestor == recipient || self.alliance_between(requestor, recipient).is_some() {
            return None;
        }
        let alliance = Alliance {
            requestor,
            recipient,
            created_at: self.ticks,
        };
        self.alliances.push(alliance);
        Some(alliance)
    }

    /// Dissolve the alliance between `breaker` and `other`. Returns false
    /// when no such alliance exists.
    pub fn break_alliance(&mut self, breaker: PlayerId, other: PlayerId) -> bool {
        let before = self.alliances.len();
        self.alliances.retain(|al| !al.binds(breaker, other));
        if self.alliances.len() == before {
            return false;
        }
        info!("{breaker} broke alliance with {other}");
        self.events.push(GameEvent::AllianceBroken { breaker, other });
        true
    }

    // --- Messaging and statistics ---

    pub fn display_message(&mut self, text: impl Into<String>, kind: MessageType, recipient: PlayerId) {
        self.messages.push(GameMessage {
            text: text.into(),
            kind,
            recipient,
            tick: self.ticks,
        });
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn take_messages(&mut self) -> Vec<GameMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}
