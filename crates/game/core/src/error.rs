//! Common error infrastructure for rpg-core.
//!
//! Two error families exist:
//! - [`InvariantViolation`]: a caller or data bug detected while resolving a
//!   turn (e.g. taking an item that is not on the ground). The turn is
//!   abandoned and the runtime stops the simulation.
//! - [`WorldError`]: inconsistent world linkage detected while assembling a
//!   [`World`](crate::World), before any turn runs.
//!
//! Player death is not an error; it is reported through
//! [`GameStatus`](crate::GameStatus).

use crate::state::{ItemId, ItemKind, MonsterId, Position, TerrainKind};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Temporary condition; the same input may succeed later.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// The world cannot be run at all.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all rpg-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Broken invariant detected while resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{item} is not on the ground at {position}")]
    ItemNotOnGround { item: ItemId, position: Position },

    #[error("{item} is not carried")]
    ItemNotCarried { item: ItemId },

    #[error("{item} of kind {kind} has no equipment slot")]
    ItemNotEquippable { item: ItemId, kind: ItemKind },

    #[error("position {position} is outside the grid")]
    OutOfGrid { position: Position },

    #[error("tile {position} is already occupied by {occupant}")]
    TileOccupied {
        position: Position,
        occupant: MonsterId,
    },

    #[error("cannot resolve terrain at {position} from {from} to {to}")]
    TerrainResolution {
        position: Position,
        from: TerrainKind,
        to: TerrainKind,
    },

    #[error("level '{name}' does not exist")]
    UnknownLevel { name: String },
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        use InvariantViolation::*;
        match self {
            ItemNotOnGround { .. } | ItemNotCarried { .. } | ItemNotEquippable { .. } => {
                ErrorSeverity::Internal
            }
            OutOfGrid { .. } | TileOccupied { .. } | TerrainResolution { .. } => {
                ErrorSeverity::Internal
            }
            UnknownLevel { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            ItemNotOnGround { .. } => "INVARIANT_ITEM_NOT_ON_GROUND",
            ItemNotCarried { .. } => "INVARIANT_ITEM_NOT_CARRIED",
            ItemNotEquippable { .. } => "INVARIANT_ITEM_NOT_EQUIPPABLE",
            OutOfGrid { .. } => "INVARIANT_OUT_OF_GRID",
            TileOccupied { .. } => "INVARIANT_TILE_OCCUPIED",
            TerrainResolution { .. } => "INVARIANT_TERRAIN_RESOLUTION",
            UnknownLevel { .. } => "INVARIANT_UNKNOWN_LEVEL",
        }
    }
}

/// Inconsistent world data found while assembling a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("level '{name}' was not loaded")]
    UnknownLevel { name: String },

    #[error("level '{name}' was loaded twice")]
    DuplicateLevel { name: String },

    #[error("portal at {position} on level '{level}' leads to unknown level '{target}'")]
    UnknownPortalTarget {
        level: String,
        position: Position,
        target: String,
    },

    #[error(
        "portal at {position} on level '{level}' leads to {destination}, outside level '{target}'"
    )]
    PortalOutOfGrid {
        level: String,
        position: Position,
        target: String,
        destination: Position,
    },

    #[error("level '{level}' still has unresolved terrain at {position}")]
    UnresolvedTerrain { level: String, position: Position },

    #[error("player start {position} is outside level '{level}'")]
    PlayerOutOfGrid { level: String, position: Position },

    #[error("player start {position} on level '{level}' is occupied by {occupant}")]
    PlayerBlocked {
        level: String,
        position: Position,
        occupant: MonsterId,
    },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use WorldError::*;
        match self {
            UnknownLevel { .. } => "WORLD_UNKNOWN_LEVEL",
            DuplicateLevel { .. } => "WORLD_DUPLICATE_LEVEL",
            UnknownPortalTarget { .. } => "WORLD_UNKNOWN_PORTAL_TARGET",
            PortalOutOfGrid { .. } => "WORLD_PORTAL_OUT_OF_GRID",
            UnresolvedTerrain { .. } => "WORLD_UNRESOLVED_TERRAIN",
            PlayerOutOfGrid { .. } => "WORLD_PLAYER_OUT_OF_GRID",
            PlayerBlocked { .. } => "WORLD_PLAYER_BLOCKED",
        }
    }
}
