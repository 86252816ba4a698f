// --- File: cell.rs ---
use std::fmt;

/// State of a single grid cell.
///
/// Discriminants are the integer states the host sees: 0 = empty,
/// 1 = zombie, 2 = survivor, 3 = wall.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty = 0,
    Zombie = 1,
    Survivor = 2,
    Wall = 3,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Zombie,
        CellState::Survivor,
        CellState::Wall,
    ];

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Zombies and survivors take a random step each tick; empty and wall cells are inert.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, CellState::Zombie | CellState::Survivor)
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Zombie),
            2 => Ok(CellState::Survivor),
            3 => Ok(CellState::Wall),
            other => Err(other),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.as_u8()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Zombie => write!(f, "Zombie"),
            Self::Survivor => write!(f, "Survivor"),
            Self::Wall => write!(f, "Wall"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values_match_host_encoding() {
        assert_eq!(CellState::Empty.as_u8(), 0);
        assert_eq!(CellState::Zombie.as_u8(), 1);
        assert_eq!(CellState::Survivor.as_u8(), 2);
        assert_eq!(CellState::Wall.as_u8(), 3);
    }

    #[test]
    fn unknown_integer_is_rejected() {
        for state in CellState::ALL {
            assert_eq!(CellState::try_from(state.as_u8()), Ok(state));
        }
        assert_eq!(CellState::try_from(4), Err(4));
        assert_eq!(CellState::try_from(255), Err(255));
    }

    #[test]
    fn only_zombies_and_survivors_move() {
        assert!(CellState::Zombie.is_mobile());
        assert!(CellState::Survivor.is_mobile());
        assert!(!CellState::Empty.is_mobile());
        assert!(!CellState::Wall.is_mobile());
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
// --- End of File: cell.rs ---
