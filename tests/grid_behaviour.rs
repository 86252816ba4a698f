use rand::SeedableRng;
use zombiesim::{CellState, GridError, ScriptedRandom, SimRng, SimulationConfig, SimulationGrid};

fn seeded(width: i32, height: i32, seed: u64) -> SimulationGrid {
    SimulationGrid::new(width, height, SimRng::seed_from_u64(seed)).expect("valid dimensions")
}

fn snapshot<R: zombiesim::RandomSource>(grid: &SimulationGrid<R>) -> Vec<CellState> {
    let mut cells = Vec::with_capacity((grid.width() * grid.height()) as usize);
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            cells.push(grid.state_at(x, y));
        }
    }
    cells
}

fn wall_positions<R: zombiesim::RandomSource>(grid: &SimulationGrid<R>) -> Vec<(i32, i32)> {
    let mut walls = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.state_at(x, y) == CellState::Wall {
                walls.push((x, y));
            }
        }
    }
    walls
}

/// Walls, then population, the same way the host sets up a run.
fn populated(seed: u64) -> SimulationGrid {
    let mut grid = seeded(40, 30, seed);
    grid.build_walls(6, 4, 12, 2);
    grid.randomize(25, 120).expect("population fits");
    grid
}

#[test]
fn out_of_range_reads_match_clamped_edge() {
    let mut grid = populated(11);
    for _ in 0..3 {
        grid.next_generation();
    }
    let (w, h) = (grid.width(), grid.height());
    for x in -5..w + 5 {
        for y in -5..h + 5 {
            let clamped = grid.state_at(x.clamp(0, w - 1), y.clamp(0, h - 1));
            assert_eq!(grid.state_at(x, y), clamped, "({x}, {y})");
        }
    }
}

#[test]
fn out_of_range_writes_leave_grid_unchanged() {
    let mut grid = populated(12);
    let before = snapshot(&grid);
    let (w, h) = (grid.width(), grid.height());
    for &(x, y) in &[(-1, 0), (0, -1), (w, 0), (0, h), (w + 10, h + 10), (i32::MIN, 3)] {
        assert!(!grid.set_state(x, y, CellState::Zombie));
    }
    assert_eq!(snapshot(&grid), before);
}

#[test]
fn population_never_lands_on_walls() {
    let mut grid = seeded(30, 30, 5);
    grid.build_walls(10, 5, 15, 3);
    let walls_before = wall_positions(&grid);
    assert!(!walls_before.is_empty());

    grid.randomize(50, 80).expect("population fits");
    assert_eq!(wall_positions(&grid), walls_before);
    let census = grid.census();
    assert_eq!(census.zombies, 50);
    assert_eq!(census.survivors, 80);
    assert_eq!(census.walls, walls_before.len());
}

#[test]
fn population_stays_off_the_outer_ring() {
    let grid = populated(21);
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        for y in 0..h {
            let on_ring = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            if on_ring {
                assert!(!grid.state_at(x, y).is_mobile(), "({x}, {y})");
            }
        }
    }
}

#[test]
fn ticks_conserve_entities_and_walls() {
    let mut grid = populated(7);
    let walls = wall_positions(&grid);
    let start = grid.census();
    let mut zombies = start.zombies;

    for _ in 0..200 {
        grid.next_generation();
        let census = grid.census();
        assert_eq!(census.mobile(), start.mobile());
        assert_eq!(census.total(), start.total());
        assert!(census.zombies >= zombies, "zombie count went down");
        zombies = census.zombies;
    }
    assert_eq!(wall_positions(&grid), walls);
    assert_eq!(grid.generation(), 200);
}

#[test]
fn outbreak_eventually_converts_a_crowded_interior() {
    let mut grid = seeded(12, 12, 99);
    grid.randomize(5, 80).expect("population fits");
    for _ in 0..2_000 {
        grid.next_generation();
    }
    let census = grid.census();
    assert_eq!(census.mobile(), 85);
    assert!(census.zombies > 5);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut a = populated(1234);
    let mut b = populated(1234);
    assert_eq!(snapshot(&a), snapshot(&b));
    for _ in 0..50 {
        a.next_generation();
        b.next_generation();
    }
    assert_eq!(snapshot(&a), snapshot(&b));
}

#[test]
fn survivor_next_to_zombie_turns_with_zero_movement() {
    let mut grid = SimulationGrid::new(5, 5, ScriptedRandom::constant(0)).unwrap();
    grid.set_state(2, 2, CellState::Survivor);
    grid.set_state(2, 3, CellState::Zombie);
    grid.next_generation();
    assert_eq!(grid.state_at(2, 2), CellState::Zombie);
    assert_eq!(grid.state_at(2, 3), CellState::Zombie);
}

#[test]
fn survivor_next_to_zombie_turns_whatever_the_roll() {
    for seed in 0..32 {
        let mut grid = seeded(5, 5, seed);
        grid.set_state(2, 2, CellState::Survivor);
        grid.set_state(2, 3, CellState::Zombie);
        grid.next_generation();
        let census = grid.census();
        assert_eq!(census.zombies, 2, "seed {seed}");
        assert_eq!(census.survivors, 0, "seed {seed}");
    }
}

#[test]
fn survivor_at_edge_sees_zombie_through_clamp() {
    // The clamped scan from (0,0) still covers (1,1).
    let mut grid = SimulationGrid::new(4, 4, ScriptedRandom::constant(0)).unwrap();
    grid.set_state(0, 0, CellState::Survivor);
    grid.set_state(1, 1, CellState::Zombie);
    grid.next_generation();
    assert_eq!(grid.state_at(0, 0), CellState::Zombie);
}

#[test]
fn east_wall_from_fixed_start() {
    let script = ScriptedRandom::new([5, 5, 1, 3], 0);
    let mut grid = SimulationGrid::new(10, 10, script).unwrap();
    grid.build_walls(1, 3, 4, 1);
    assert_eq!(wall_positions(&grid), vec![(5, 5), (6, 5), (7, 5)]);
}

#[test]
fn capacity_error_reports_counts() {
    let mut grid = seeded(6, 6, 1);
    let err = grid.randomize(10, 10).unwrap_err();
    assert_eq!(
        err,
        GridError::CapacityExceeded {
            requested: 20,
            available: 16
        }
    );
    assert!(err.to_string().contains("16"));
    assert_eq!(grid.census().empty, 36);
}

#[test]
fn config_driven_setup_matches_request() {
    let config = SimulationConfig {
        seed: Some(3),
        ..SimulationConfig::new()
    };
    config.validate().unwrap();
    let mut grid = SimulationGrid::new(
        config.grid_width,
        config.grid_height,
        SimRng::seed_from_u64(3),
    )
    .unwrap();
    let walls = &config.walls;
    grid.build_walls(walls.count, walls.min_length, walls.max_length, walls.thickness);
    grid.randomize(config.zombies, config.survivors).unwrap();
    let census = grid.census();
    assert_eq!(census.zombies as i32, config.zombies);
    assert_eq!(census.survivors as i32, config.survivors);
    assert!(census.walls > 0);
}
