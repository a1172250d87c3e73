use super::{Level, Player};

/// Whether the run can continue after a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    /// The player's hitpoints reached zero. Terminal: no further turns resolve.
    PlayerDead,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::PlayerDead)
    }
}

/// State published to observers once per resolved turn.
///
/// A snapshot is a deep copy; observers never alias the resolver's state.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub turn: u64,
    pub level_name: String,
    pub level: Level,
    pub player: Player,
    pub status: GameStatus,
}
