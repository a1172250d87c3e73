//! Per-cell terrain, overlays and visibility flags.

use bitflags::bitflags;

/// Base terrain of a cell.
///
/// `Pending` only exists between parsing a level and resolving the terrain
/// underneath entities, items and overlays; the simulation never sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Wall,
    Floor,
    Blank,
    Pending,
}

impl TerrainKind {
    /// Walls and the void block both movement and sight.
    pub const fn is_solid(self) -> bool {
        match self {
            TerrainKind::Wall | TerrainKind::Blank => true,
            TerrainKind::Floor | TerrainKind::Pending => false,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            TerrainKind::Wall => '#',
            TerrainKind::Floor => '.',
            TerrainKind::Blank => ' ',
            TerrainKind::Pending => '?',
        }
    }
}

/// Feature drawn on top of the base terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum OverlayKind {
    ClosedDoor,
    OpenDoor,
    UpStair,
    DownStair,
}

impl OverlayKind {
    pub const fn blocks(self) -> bool {
        match self {
            OverlayKind::ClosedDoor => true,
            OverlayKind::OpenDoor | OverlayKind::UpStair | OverlayKind::DownStair => false,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            OverlayKind::ClosedDoor => '|',
            OverlayKind::OpenDoor => '/',
            OverlayKind::UpStair => 'u',
            OverlayKind::DownStair => 'd',
        }
    }
}

bitflags! {
    /// Visibility state of a tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TileFlags: u8 {
        /// Lit by the most recent visibility pass.
        const VISIBLE = 0b0000_0001;
        /// Lit at least once. Never cleared.
        const SEEN = 0b0000_0010;
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    terrain: TerrainKind,
    overlay: Option<OverlayKind>,
    flags: TileFlags,
}

impl Tile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            overlay: None,
            flags: TileFlags::empty(),
        }
    }

    pub const fn with_overlay(terrain: TerrainKind, overlay: OverlayKind) -> Self {
        Self {
            terrain,
            overlay: Some(overlay),
            flags: TileFlags::empty(),
        }
    }

    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub const fn overlay(&self) -> Option<OverlayKind> {
        self.overlay
    }

    pub const fn flags(&self) -> TileFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(TileFlags::VISIBLE)
    }

    pub fn is_seen(&self) -> bool {
        self.flags.contains(TileFlags::SEEN)
    }

    pub fn is_closed_door(&self) -> bool {
        self.overlay == Some(OverlayKind::ClosedDoor)
    }

    /// True when neither the terrain nor the overlay blocks passage.
    pub fn is_open(&self) -> bool {
        !self.terrain.is_solid() && !self.overlay.is_some_and(OverlayKind::blocks)
    }

    pub fn mark_visible(&mut self) {
        self.flags.insert(TileFlags::VISIBLE | TileFlags::SEEN);
    }

    pub fn clear_visible(&mut self) {
        self.flags.remove(TileFlags::VISIBLE);
    }

    /// Flips a closed door to open. Returns false when there is no closed door.
    pub fn open_door(&mut self) -> bool {
        if self.is_closed_door() {
            self.overlay = Some(OverlayKind::OpenDoor);
            true
        } else {
            false
        }
    }

    /// Replaces `Pending` terrain with a concrete kind.
    ///
    /// Returns false (leaving the tile untouched) when the tile is already
    /// resolved or when asked to resolve to `Pending`.
    pub(crate) fn resolve_terrain(&mut self, terrain: TerrainKind) -> bool {
        if self.terrain != TerrainKind::Pending || terrain == TerrainKind::Pending {
            return false;
        }
        self.terrain = terrain;
        true
    }

    /// Glyph a plain renderer would draw for this cell.
    pub fn glyph(&self) -> char {
        self.overlay
            .map(OverlayKind::glyph)
            .unwrap_or_else(|| self.terrain.glyph())
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TerrainKind::Blank)
    }
}
