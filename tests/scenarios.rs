//! End-to-end command scenarios run through the world interpreter.

use std::collections::BTreeSet;

use tile_life::{Algorithm, Canvas, EngineError, Flow, Tile, TileColor, World};

fn world_with(rows: usize, cols: usize, commands: &str) -> World<Canvas> {
    let mut world = World::new(rows, cols, Canvas::new()).unwrap();
    run(&mut world, commands);
    world
}

fn run(world: &mut World<Canvas>, commands: &str) {
    for line in commands.lines() {
        assert_eq!(world.process_command(line), Ok(Flow::Continue), "command {line:?}");
    }
}

fn alive_cells(world: &World<Canvas>) -> BTreeSet<(usize, usize)> {
    let (rows, cols) = world.dimensions();
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| world.get_tile(r, c).unwrap().is_active())
        .collect()
}

fn shifted(cells: &BTreeSet<(usize, usize)>, by: usize, rows: usize, cols: usize) -> BTreeSet<(usize, usize)> {
    cells.iter().map(|&(r, c)| ((r + by) % rows, (c + by) % cols)).collect()
}

#[test]
fn four_live_neighbors_kill_the_center() {
    let mut world = world_with(
        3,
        3,
        "fill mono 0\nset 1 1 mono 1\nset 0 0 mono 1\nset 0 2 mono 1\nset 2 0 mono 1\nset 2 2 mono 1",
    );
    run(&mut world, "evolve 1 1");
    assert_eq!(world.get_tile(1, 1).unwrap(), Tile::Mono { age: 0 });
    assert_eq!(world.get_tile(1, 1).unwrap().color(), TileColor::Black);
}

#[test]
fn glider_translates_one_cell_diagonally_every_four_steps() {
    for algorithm in Algorithm::all() {
        let mut world = world_with(10, 10, "fill mono 0\nsetShape 2 3 glider");
        world.set_algorithm(algorithm);
        let start = alive_cells(&world);
        assert_eq!(start.len(), 5);

        run(&mut world, "evolve 4 1");
        assert_eq!(alive_cells(&world), shifted(&start, 1, 10, 10));

        run(&mut world, "evolve 4 1");
        assert_eq!(alive_cells(&world), shifted(&start, 2, 10, 10));
        assert_eq!(world.generation(), 8);
    }
}

#[test]
fn glider_wraps_across_the_corner() {
    let mut world = world_with(10, 10, "fill mono 0\nsetShape 8 8 glider");
    let start = alive_cells(&world);
    assert!(start.contains(&(0, 0)));

    run(&mut world, "evolve 4 1");
    assert_eq!(alive_cells(&world), shifted(&start, 1, 10, 10));

    // Ten translations bring it back around the torus
    run(&mut world, "evolve 36 1");
    assert_eq!(alive_cells(&world), start);
}

#[test]
fn glider_cells_age_while_they_survive() {
    let mut world = world_with(10, 10, "fill mono 0\nsetShape 0 0 glider");
    run(&mut world, "evolve 1 1");
    // (2,1) and (2,2) survive with 2-3 neighbors; (1,2) too
    assert_eq!(world.get_tile(2, 1).unwrap(), Tile::Mono { age: 2 });
    assert_eq!(world.get_tile(2, 2).unwrap(), Tile::Mono { age: 2 });
    assert_eq!(world.get_tile(1, 2).unwrap(), Tile::Mono { age: 2 });
    // (1,0) and (3,1) are born
    assert_eq!(world.get_tile(1, 0).unwrap(), Tile::Mono { age: 1 });
    assert_eq!(world.get_tile(3, 1).unwrap(), Tile::Mono { age: 1 });
}

#[test]
fn immigration_glider_stays_green() {
    let mut world = world_with(
        8,
        8,
        "fill immigration 0\nset 0 1 immigration 1\nset 1 2 immigration 1\nset 2 0 immigration 1\nset 2 1 immigration 1\nset 2 2 immigration 1",
    );
    run(&mut world, "evolve 4 1");
    let (rows, cols) = world.dimensions();
    for r in 0..rows {
        for c in 0..cols {
            let tile = world.get_tile(r, c).unwrap();
            let expected = if tile.is_active() { TileColor::Green } else { TileColor::Black };
            assert_eq!(tile.color(), expected, "cell ({r}, {c})");
        }
    }
    assert_eq!(alive_cells(&world).len(), 5);
}

#[test]
fn quad_birth_takes_the_unrepresented_color() {
    let mut world = world_with(
        5,
        5,
        "fill quad 0\nset 1 1 quad 1\nset 1 2 quad 2\nset 1 3 quad 4",
    );
    assert_eq!(world.get_tile(1, 1).unwrap().color(), TileColor::Blue);
    assert_eq!(world.get_tile(1, 2).unwrap().color(), TileColor::Green);
    assert_eq!(world.get_tile(1, 3).unwrap().color(), TileColor::Yellow);

    run(&mut world, "evolve 1 1");
    assert_eq!(world.get_tile(0, 2).unwrap(), Tile::Quad { age: 1, color: TileColor::Red });
    assert_eq!(world.get_tile(2, 2).unwrap(), Tile::Quad { age: 1, color: TileColor::Red });
    assert_eq!(world.get_tile(1, 2).unwrap(), Tile::Quad { age: 3, color: TileColor::Green });
    assert_eq!(world.get_tile(1, 1).unwrap(), Tile::Quad { age: 0, color: TileColor::Black });
    assert_eq!(world.get_tile(1, 3).unwrap(), Tile::Quad { age: 0, color: TileColor::Black });
}

#[test]
fn constant_and_rainbow_ignore_neighbors() {
    let mut world = world_with(
        4,
        4,
        "fill mono 0\nsetShape 0 0 glider\nset 3 3 constant 7\nset 0 3 rainbow 0",
    );
    for step in 1..=12u64 {
        run(&mut world, "evolve 1 1");
        assert_eq!(world.get_tile(3, 3).unwrap(), Tile::Constant { age: 7 });
        assert_eq!(world.get_tile(3, 3).unwrap().color(), TileColor::LightGray);
        assert_eq!(world.get_tile(0, 3).unwrap(), Tile::Rainbow { age: step });
    }
}

#[test]
fn fill_paints_every_cell_exactly_once_with_the_new_color() {
    let mut world = world_with(6, 9, "fill constant 1\nset 2 2 mono 1\nsetShape 0 0 oscillator");
    world.sink_mut().reset_counts();
    run(&mut world, "fill rainbow 3");
    let (rows, cols) = world.dimensions();
    for r in 0..rows {
        for c in 0..cols {
            assert_eq!(world.get_tile(r, c).unwrap(), Tile::Rainbow { age: 3 });
            assert_eq!(world.sink().paint_count(r, c), 1);
            assert_eq!(world.sink().color(r, c), Some(TileColor::Green));
        }
    }
}

/// Evolve a copycat-mirrored world and an explicitly symmetric world side by
/// side; every cell must show the same tile in both.
#[test]
fn mirror_copycats_match_an_explicitly_symmetric_grid() {
    let rows = 6;
    let left = [
        "set 0 1 mono 1",
        "set 1 2 mono 1",
        "set 2 0 mono 1",
        "set 2 1 mono 1",
        "set 2 2 mono 1",
        "set 4 3 mono 1",
        "set 5 0 rainbow 2",
    ];

    for cols in [8usize, 9] {
        for copycats_first in [true, false] {
            let mut mirrored = world_with(rows, cols, "fill mono 0");
            let mut symmetric = world_with(rows, cols, "fill mono 0");

            if copycats_first {
                run(&mut mirrored, "setCopycats mirror");
            }
            for line in left {
                run(&mut mirrored, line);
                run(&mut symmetric, line);
                let words: Vec<&str> = line.split_whitespace().collect();
                let col: usize = words[2].parse().unwrap();
                let image = format!("set {} {} {} {}", words[1], cols - 1 - col, words[3], words[4]);
                run(&mut symmetric, &image);
            }
            if !copycats_first {
                run(&mut mirrored, "setCopycats mirror");
            }

            for _ in 0..6 {
                for r in 0..rows {
                    for c in 0..cols {
                        assert_eq!(
                            mirrored.get_tile(r, c).unwrap(),
                            symmetric.get_tile(r, c).unwrap(),
                            "cols {cols}, cell ({r}, {c}), generation {}",
                            mirrored.generation()
                        );
                    }
                    for c in (cols + 1) / 2..cols {
                        assert!(mirrored.get_cell(r, c).unwrap().is_copycat());
                        assert_eq!(
                            mirrored.get_tile(r, c).unwrap(),
                            mirrored.get_tile(r, cols - 1 - c).unwrap()
                        );
                    }
                }
                run(&mut mirrored, "evolve 1 1");
                run(&mut symmetric, "evolve 1 1");
            }
        }
    }
}

#[test]
fn set_after_mirror_is_seen_through_the_copycat() {
    let mut world = world_with(1, 2, "setCopycats mirror");
    run(&mut world, "set 0 0 rainbow 4");
    assert_eq!(world.get_tile(0, 1).unwrap().color(), TileColor::Blue);
    assert_eq!(world.sink().color(0, 1), Some(TileColor::Blue));
    run(&mut world, "evolve 1 1");
    assert_eq!(world.get_tile(0, 1).unwrap(), Tile::Rainbow { age: 5 });
    assert_eq!(world.get_tile(0, 1).unwrap().color(), TileColor::Magenta);
    assert_eq!(world.sink().color(0, 1), Some(TileColor::Magenta));
}

#[test]
fn new_world_is_painted_dark_gray_before_any_command() {
    let world = world_with(100, 200, "");
    assert_eq!(world.sink().total_paints(), 100 * 200);
    assert_eq!(world.sink().color(99, 199), Some(TileColor::DarkGray));
}

#[test]
fn rejected_commands_leave_the_grid_untouched() {
    let mut world = world_with(4, 4, "fill mono 0\nsetShape 1 0 oscillator");
    let before = world.grid().clone();
    for line in [
        "set 4 0 mono 1",
        "set 0 0 lava 1",
        "fill mono x",
        "setShape 0 0 spaceship",
        "setShape 0 9 glider",
        "setCopycats kaleidoscope",
        "evolve -1 1",
        "jump 1",
    ] {
        let err = world.process_command(line).unwrap_err();
        assert!(
            matches!(err, EngineError::Parse(_) | EngineError::OutOfBounds { .. }),
            "{line:?} gave {err:?}"
        );
    }
    assert_eq!(world.grid(), &before);
}
