//! GameMap: tile grid with terrain, ownership and fallout queries.

use glam::IVec2;
use thiserror::Error;

use atomfront_core::types::{Owner, PlayerId, TileRef};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    EmptyMap { width: u32, height: u32 },
    #[error("land mask has {got} bytes, expected {expected}")]
    MaskLength { expected: usize, got: usize },
    #[error("tile {0:?} is outside the map")]
    InvalidTile(TileRef),
    #[error("coordinate ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },
}

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    /// Number of columns (west to east).
    pub width: u32,
    /// Number of rows (north to south).
    pub height: u32,
}

impl MapHeader {
    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes needed for one bit per tile.
    pub fn mask_len(&self) -> usize {
        self.tile_count().div_ceil(8)
    }
}

/// Row-major tile grid. `TileRef(i)` is the tile at `(i % width, i / width)`.
#[derive(Debug, Clone)]
pub struct GameMap {
    header: MapHeader,
    /// Packed land mask: bit 1 = land, bit 0 = water. One bit per tile.
    land_mask: Vec<u8>,
    /// Packed fallout mask: bit 1 = irradiated.
    fallout_mask: Vec<u8>,
    owners: Vec<Option<PlayerId>>,
}

impl GameMap {
    /// Create a map from a packed land mask.
    pub fn new(header: MapHeader, land_mask: Vec<u8>) -> Result<Self, MapError> {
        if header.width == 0 || header.height == 0 {
            return Err(MapError::EmptyMap {
                width: header.width,
                height: header.height,
            });
        }
        if land_mask.len() != header.mask_len() {
            return Err(MapError::MaskLength {
                expected: header.mask_len(),
                got: land_mask.len(),
            });
        }
        Ok(Self {
            header,
            fallout_mask: vec![0; header.mask_len()],
            owners: vec![None; header.tile_count()],
            land_mask,
        })
    }

    /// Create a map classifying each coordinate with `is_land`.
    pub fn from_fn(
        width: u32,
        height: u32,
        is_land: impl Fn(IVec2) -> bool,
    ) -> Result<Self, MapError> {
        let header = MapHeader { width, height };
        let mut mask = vec![0u8; header.mask_len()];
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if is_land(IVec2::new(x, y)) {
                    let idx = y as usize * width as usize + x as usize;
                    mask[idx / 8] |= 1 << (idx % 8);
                }
            }
        }
        Self::new(header, mask)
    }

    /// A map with no water.
    pub fn all_land(width: u32, height: u32) -> Result<Self, MapError> {
        Self::from_fn(width, height, |_| true)
    }

    pub fn header(&self) -> MapHeader {
        self.header
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn tile_count(&self) -> usize {
        self.header.tile_count()
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    pub fn ref_at(&self, x: i32, y: i32) -> Option<TileRef> {
        if x < 0 || y < 0 || x >= self.header.width as i32 || y >= self.header.height as i32 {
            return None;
        }
        Some(TileRef(y as u32 * self.header.width + x as u32))
    }

    pub fn ref_at_coords(&self, coords: IVec2) -> Option<TileRef> {
        self.ref_at(coords.x, coords.y)
    }

    /// Like [`GameMap::ref_at`] but reports the offending coordinate.
    pub fn checked_ref(&self, x: i32, y: i32) -> Result<TileRef, MapError> {
        self.ref_at(x, y).ok_or(MapError::OutOfBounds { x, y })
    }

    pub fn is_valid(&self, tile: TileRef) -> bool {
        tile.index() < self.tile_count()
    }

    pub fn coords(&self, tile: TileRef) -> IVec2 {
        IVec2::new(self.x(tile), self.y(tile))
    }

    pub fn x(&self, tile: TileRef) -> i32 {
        (tile.0 % self.header.width) as i32
    }

    pub fn y(&self, tile: TileRef) -> i32 {
        (tile.0 / self.header.width) as i32
    }

    pub fn is_land(&self, tile: TileRef) -> bool {
        self.is_valid(tile) && read_bit(&self.land_mask, tile.index())
    }

    pub fn is_water(&self, tile: TileRef) -> bool {
        self.is_valid(tile) && !read_bit(&self.land_mask, tile.index())
    }

    pub fn owner(&self, tile: TileRef) -> Owner {
        Owner::from(self.owners.get(tile.index()).copied().flatten())
    }

    pub fn has_owner(&self, tile: TileRef) -> bool {
        self.owner(tile).is_player()
    }

    pub fn set_owner(&mut self, tile: TileRef, owner: Option<PlayerId>) -> Result<(), MapError> {
        let slot = self
            .owners
            .get_mut(tile.index())
            .ok_or(MapError::InvalidTile(tile))?;
        *slot = owner;
        Ok(())
    }

    pub fn has_fallout(&self, tile: TileRef) -> bool {
        self.is_valid(tile) && read_bit(&self.fallout_mask, tile.index())
    }

    pub fn set_fallout(&mut self, tile: TileRef, fallout: bool) -> Result<(), MapError> {
        if !self.is_valid(tile) {
            return Err(MapError::InvalidTile(tile));
        }
        let idx = tile.index();
        if fallout {
            self.fallout_mask[idx / 8] |= 1 << (idx % 8);
        } else {
            self.fallout_mask[idx / 8] &= !(1 << (idx % 8));
        }
        Ok(())
    }

    /// Number of tiles currently marked as fallout.
    pub fn fallout_count(&self) -> u32 {
        self.fallout_mask.iter().map(|b| b.count_ones()).sum()
    }

    /// Squared Euclidean distance in tiles. Exact, no floating point.
    pub fn euclidean_dist_squared(&self, a: TileRef, b: TileRef) -> u64 {
        let d = self.coords(a) - self.coords(b);
        let dx = i64::from(d.x);
        let dy = i64::from(d.y);
        (dx * dx + dy * dy) as u64
    }

    pub fn manhattan_dist(&self, a: TileRef, b: TileRef) -> u32 {
        let d = (self.coords(a) - self.coords(b)).abs();
        (d.x + d.y) as u32
    }
}

fn read_bit(mask: &[u8], idx: usize) -> bool {
    mask.get(idx / 8).is_some_and(|byte| byte & (1 << (idx % 8)) != 0)
}
