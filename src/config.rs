// --- File: config.rs ---
use crate::cell::CellState;
use crate::constants::*;
use crate::error::GridError;
use glam::Vec4;

#[derive(Debug, Clone, PartialEq)]
pub struct WallConfig {
    pub count: i32,
    pub min_length: i32,
    // Exclusive. When not above min_length every wall is min_length long.
    pub max_length: i32,
    pub thickness: i32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_WALL_COUNT,
            min_length: 0,
            max_length: 0,
            thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// Display colours per cell state.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub empty: Vec4,
    pub zombie: Vec4,
    pub survivor: Vec4,
    pub wall: Vec4,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Vec4::new(0.08, 0.08, 0.1, 1.0),
            zombie: Vec4::new(0.35, 0.8, 0.2, 1.0),
            survivor: Vec4::new(0.95, 0.8, 0.3, 1.0),
            wall: Vec4::new(0.5, 0.5, 0.55, 1.0),
        }
    }
}

impl Palette {
    #[inline]
    pub fn color_for(&self, state: CellState) -> Vec4 {
        match state {
            CellState::Empty => self.empty,
            CellState::Zombie => self.zombie,
            CellState::Survivor => self.survivor,
            CellState::Wall => self.wall,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub zombies: i32,
    pub survivors: i32,
    pub walls: WallConfig,
    pub tick_interval_secs: f32,
    // None draws a fresh seed from the OS on every (re)start.
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            zombies: DEFAULT_ZOMBIE_COUNT,
            survivors: DEFAULT_SURVIVOR_COUNT,
            walls: WallConfig::default(),
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        // --- Wall Config ---
        config.walls.count = 12;
        config.walls.min_length = 12;
        config.walls.max_length = 40;
        config.walls.thickness = 2;

        // --- Population ---
        config.zombies = 20;
        config.survivors = 400;

        config.seed = seed_from_env();
        config
    }

    /// Interior cells available to `randomize` before any walls are built.
    pub fn interior_capacity(&self) -> u64 {
        let w = (self.grid_width - 2).max(0) as u64;
        let h = (self.grid_height - 2).max(0) as u64;
        w * h
    }

    /// Rejects grids that cannot hold the requested population even before
    /// walls take up room.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.grid_width < 1 || self.grid_height < 1 {
            return Err(GridError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let requested = self.zombies.max(0) as u64 + self.survivors.max(0) as u64;
        let available = self.interior_capacity();
        if requested > available {
            return Err(GridError::CapacityExceeded {
                requested,
                available,
            });
        }
        Ok(())
    }
}

/// Reads a fixed seed from `ZOMBIESIM_SEED`, ignoring values that do not parse.
pub fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(err) => {
            log::warn!("Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_host_values() {
        let config = SimulationConfig::default();
        assert_eq!((config.grid_width, config.grid_height), (128, 128));
        assert_eq!((config.zombies, config.survivors), (60, 30));
        assert_eq!(config.walls.count, 5);
        assert_eq!(config.walls.thickness, 3);
        assert_eq!(config.tick_interval_secs, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preset_validates() {
        assert!(SimulationConfig::new().validate().is_ok());
    }

    #[test]
    fn oversized_population_fails_validation() {
        let config = SimulationConfig {
            grid_width: 4,
            grid_height: 4,
            zombies: 3,
            survivors: 2,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GridError::CapacityExceeded {
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn empty_grid_fails_validation() {
        let config = SimulationConfig {
            grid_width: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn palette_maps_every_state() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(CellState::Zombie), palette.zombie);
        assert_eq!(palette.color_for(CellState::Wall), palette.wall);
        assert_ne!(palette.color_for(CellState::Empty), palette.survivor);
    }
}
// --- End of File: config.rs ---
