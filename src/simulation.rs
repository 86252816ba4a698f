// --- File: simulation.rs ---
use crate::cell::CellState;
use crate::error::GridError;
use crate::random::{RandomSource, SimRng};

// --- Wall Directions ---

/// Unit step for each build direction: north, east, south, west.
const WALL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Per-state population counts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Census {
    pub empty: usize,
    pub zombies: usize,
    pub survivors: usize,
    pub walls: usize,
}

impl Census {
    pub fn mobile(&self) -> usize {
        self.zombies + self.survivors
    }

    pub fn total(&self) -> usize {
        self.empty + self.zombies + self.survivors + self.walls
    }
}

/// The zombie automaton: a fixed-size grid of cell states plus the random
/// source that drives movement and map generation.
///
/// Cells are stored x-major (`x * height + y`), the same order the tick scans them.
pub struct SimulationGrid<R = SimRng> {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    generation: u64,
    rng: R,
}

impl<R: RandomSource> SimulationGrid<R> {
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self, GridError> {
        let mut grid = Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
            generation: 0,
            rng,
        };
        grid.init(width, height)?;
        Ok(grid)
    }

    /// Reallocates the grid with every cell empty. On failure (non-positive
    /// size, or storage that cannot be allocated) the previous grid is kept.
    pub fn init(&mut self, width: i32, height: i32) -> Result<(), GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let too_large = GridError::TooLarge { width, height };
        let cell_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| too_large.clone())?;
        let mut cells = Vec::new();
        if let Err(err) = cells.try_reserve_exact(cell_count) {
            log::warn!("Cannot allocate {}x{} grid: {}", width, height, err);
            return Err(too_large);
        }
        cells.resize(cell_count, CellState::Empty);
        self.cells = cells;
        self.width = width;
        self.height = height;
        self.generation = 0;
        log::debug!("Initialized {}x{} grid", width, height);
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of ticks run since the last `init`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// State at `(x, y)`. Out-of-range coordinates are clamped to the nearest edge cell.
    #[inline]
    pub fn state_at(&self, x: i32, y: i32) -> CellState {
        let x = x.clamp(0, self.width - 1);
        let y = y.clamp(0, self.height - 1);
        self.cells[self.index(x, y)]
    }

    /// Writes `state` at `(x, y)`. Out-of-range writes are dropped, never clamped.
    /// Returns whether the cell was written.
    #[inline]
    pub fn set_state(&mut self, x: i32, y: i32, state: CellState) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        let index = self.index(x, y);
        self.cells[index] = state;
        true
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for state in &self.cells {
            match state {
                CellState::Empty => census.empty += 1,
                CellState::Zombie => census.zombies += 1,
                CellState::Survivor => census.survivors += 1,
                CellState::Wall => census.walls += 1,
            }
        }
        census
    }

    // --- Tick ---

    /// Advances one generation.
    ///
    /// Cells are updated in place in a single pass, x outer and y inner, so a
    /// cell sees neighbours that were already updated earlier in the same pass,
    /// and an entity that steps into a later cell is updated again when the
    /// scan reaches it.
    pub fn next_generation(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                self.update_cell(x, y);
            }
        }
        self.generation += 1;
    }

    fn update_cell(&mut self, x: i32, y: i32) {
        let mut state = self.state_at(x, y);

        if state == CellState::Survivor && self.zombie_neighbours(x, y) > 0 {
            self.set_state(x, y, CellState::Zombie);
            state = CellState::Zombie;
        }

        if state.is_mobile() {
            let dx = self.rng.range(-1, 2);
            let dy = self.rng.range(-1, 2);
            self.move_entity(state, x, y, dx, dy);
        }
    }

    /// Zombies in the clamped 3x3 block around `(x, y)`, centre included.
    fn zombie_neighbours(&self, x: i32, y: i32) -> usize {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if self.state_at(x + dx, y + dy) == CellState::Zombie {
                    count += 1;
                }
            }
        }
        count
    }

    fn move_entity(&mut self, state: CellState, x: i32, y: i32, dx: i32, dy: i32) -> bool {
        let dest_x = (x + dx).clamp(0, self.width - 1);
        let dest_y = (y + dy).clamp(0, self.height - 1);

        // Only the low edges are actually reachable by this test after clamping.
        if dest_x == 0 || dest_x == self.width || dest_y == 0 || dest_y == self.height {
            return false;
        }
        if self.state_at(dest_x, dest_y) != CellState::Empty {
            return false;
        }

        self.set_state(x, y, CellState::Empty);
        self.set_state(dest_x, dest_y, state);
        true
    }

    // --- Map Generation ---

    #[inline]
    fn random_interior_position(&mut self) -> (i32, i32) {
        let x = self.rng.range(1, self.width - 1);
        let y = self.rng.range(1, self.height - 1);
        (x, y)
    }

    fn empty_interior_cells(&self) -> u64 {
        let mut count = 0;
        for x in 1..self.width - 1 {
            for y in 1..self.height - 1 {
                if self.cells[self.index(x, y)] == CellState::Empty {
                    count += 1;
                }
            }
        }
        count
    }

    /// Places `zombies` zombies, then `survivors` survivors, on random empty
    /// interior cells.
    ///
    /// Fails without touching the grid when the interior has fewer empty cells
    /// than requested. Negative counts place nothing.
    pub fn randomize(&mut self, zombies: i32, survivors: i32) -> Result<(), GridError> {
        let zombies = zombies.max(0);
        let survivors = survivors.max(0);
        let requested = zombies as u64 + survivors as u64;
        let available = self.empty_interior_cells();
        if requested > available {
            log::warn!(
                "Refusing to place {} zombies and {} survivors: {} empty interior cells",
                zombies,
                survivors,
                available
            );
            return Err(GridError::CapacityExceeded {
                requested,
                available,
            });
        }

        self.place_random(CellState::Zombie, zombies);
        self.place_random(CellState::Survivor, survivors);
        log::debug!("Placed {} zombies and {} survivors", zombies, survivors);
        Ok(())
    }

    fn place_random(&mut self, state: CellState, amount: i32) {
        for _ in 0..amount {
            let (x, y) = loop {
                let (x, y) = self.random_interior_position();
                if self.state_at(x, y) == CellState::Empty {
                    break (x, y);
                }
            };
            self.set_state(x, y, state);
        }
    }

    /// Builds `count` straight wall segments of `thickness` cells, each with a
    /// random interior start, a random cardinal direction and a length in
    /// `[min_length, max_length)`. Cells that fall off the grid are dropped.
    pub fn build_walls(&mut self, count: i32, min_length: i32, max_length: i32, thickness: i32) {
        for _ in 0..count {
            let (start_x, start_y) = self.random_interior_position();
            let direction = self.rng.range(0, WALL_DIRECTIONS.len() as i32) as usize;
            let (dir_x, dir_y) = WALL_DIRECTIONS[direction];
            let length = if max_length > min_length {
                self.rng.range(min_length, max_length)
            } else {
                min_length
            };

            for a in 0..length {
                for b in 0..thickness {
                    let x = start_x + a * dir_x + b * dir_y;
                    let y = start_y + a * dir_y + b * dir_x;
                    self.set_state(x, y, CellState::Wall);
                }
            }
            log::debug!(
                "Wall at ({}, {}) heading {:?}, length {}, thickness {}",
                start_x,
                start_y,
                (dir_x, dir_y),
                length,
                thickness
            );
        }
    }
}

// --- End of File: simulation.rs ---
