// --- File: error.rs ---
use std::fmt;

/// Errors raised by grid setup and population.
///
/// Out-of-range reads and writes are never errors: reads clamp to the edge,
/// writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height below 1.
    InvalidDimensions { width: i32, height: i32 },
    /// Cell storage for this many cells could not be allocated.
    TooLarge { width: i32, height: i32 },
    /// More entities requested than there are empty interior cells.
    CapacityExceeded { requested: u64, available: u64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid grid dimensions {width}x{height}: both must be at least 1"
            ),
            GridError::TooLarge { width, height } => {
                write!(f, "Grid {width}x{height} is too large to allocate")
            }
            GridError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "Cannot place {requested} entities: only {available} empty interior cells"
            ),
        }
    }
}

impl std::error::Error for GridError {}
// --- End of File: error.rs ---
