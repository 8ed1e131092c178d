use crate::geom::Point;

/// One of the four cardinal directions.
///
/// North is +Y and East is +X.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, -1),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Whether moving this way changes Y.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Dense index usable for `[T; 4]` tables, in [`Direction::ALL`] order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The coordinate that stays constant while moving this way. Boundary
    /// slots on a side facing this direction are laid out along it.
    #[inline]
    pub const fn along(self, p: Point) -> i32 {
        if self.is_vertical() { p.x } else { p.y }
    }
}
