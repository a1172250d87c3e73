/// One of the four grid directions. `y` grows downwards, as rows do in a map file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Neighbour expansion order: right, left, up, down.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::East,
        CardinalDirection::West,
        CardinalDirection::North,
        CardinalDirection::South,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}
