use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    variants_of, Board, Catalog, Fleet, GameError, OccupancyGrid, ShapeDef, ShipKind, MAPS,
};

fn shape(letter: char) -> &'static ShapeDef {
    Catalog::validated().unwrap().shape(letter).unwrap()
}

#[test]
fn sea_ship_rejected_on_land() {
    let layout = &MAPS[0];
    let grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('D'))[0];
    // Row 4 cols 0..=7 is land on "Jaggered Coast SS".
    assert!(!grid.can_place(layout, variant, 4, 0, 'D'));
    assert!(grid.can_place(layout, variant, 0, 0, 'D'));
}

#[test]
fn ground_ship_rejected_at_sea() {
    let layout = &MAPS[0];
    let grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('U'))[0];
    assert!(!grid.can_place(layout, variant, 0, 0, 'U'));
    // Rows 4-5, cols 0..=4 are all land.
    assert!(grid.can_place(layout, variant, 4, 0, 'U'));
}

#[test]
fn airplane_may_straddle_land_and_sea() {
    let layout = &MAPS[0];
    let grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('P'))[0];
    assert!(grid.can_place(layout, variant, 4, 0, 'P'));
    // Rows 0-2 col 0: row 2 col 0 is land, the rest sea.
    assert!(grid.can_place(layout, variant, 0, 0, 'P'));
}

#[test]
fn out_of_bounds_placement_rejected() {
    let layout = &MAPS[0];
    let grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('D'))[0];
    assert!(!grid.can_place(layout, variant, 0, layout.cols - 2, 'D'));
    assert!(!grid.can_place(layout, variant, -1, 0, 'D'));
}

#[test]
fn placement_round_trip_marks_every_cell() {
    let layout = &MAPS[0];
    let mut grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('D'))[0];
    assert!(grid.can_place(layout, variant, 0, 5, 'D'));
    let cells = grid.place_variant(variant, 0, 5, 'D', 8);
    assert_eq!(cells, vec![(0, 5), (0, 6), (0, 7)]);
    for &(r, c) in &cells {
        let owner = grid.owner_at(r, c).unwrap();
        assert_eq!((owner.id, owner.letter), (8, 'D'));
    }
}

#[test]
fn no_touch_rule_blocks_adjacent_and_diagonal_cells() {
    let layout = &MAPS[0];
    let mut grid = OccupancyGrid::new(layout);
    let variant = &variants_of(shape('D'))[0];
    grid.place_variant(variant, 0, 0, 'D', 1);
    // Edge-to-edge below, end-to-end, and diagonal contact all fail.
    assert!(!grid.can_place(layout, variant, 1, 0, 'D'));
    assert!(!grid.can_place(layout, variant, 0, 3, 'D'));
    assert!(!grid.can_place(layout, variant, 1, 3, 'D'));
    // One clear column of water is enough.
    assert!(grid.can_place(layout, variant, 0, 4, 'D'));
}

fn chebyshev(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

#[test]
fn random_fleet_respects_no_touch_and_terrain() {
    let layout = &MAPS[0];
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(layout);
        board.place_randomly(&mut rng).unwrap();

        let ships = board.fleet().ships();
        for ship in ships {
            assert!(ship.is_placed(), "ship '{}' unplaced", ship.letter());
            let kind = seabattle::kind_of(ship.letter()).unwrap();
            for &(r, c) in ship.cells() {
                assert!(layout.in_bounds(r, c));
                match kind {
                    ShipKind::Sea => assert!(!layout.is_land(r, c)),
                    ShipKind::Ground => assert!(layout.is_land(r, c)),
                    ShipKind::Air => {}
                }
            }
        }
        for a in ships {
            for b in ships {
                if a.id() == b.id() {
                    continue;
                }
                for &ca in a.cells() {
                    for &cb in b.cells() {
                        assert!(
                            chebyshev(ca, cb) >= 2,
                            "ships {} and {} touch at {:?}/{:?} (seed {})",
                            a.letter(),
                            b.letter(),
                            ca,
                            cb,
                            seed
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn fleet_matches_layout_counts() {
    let layout = &MAPS[0];
    let board = Board::new(layout);
    for &(letter, count) in layout.counts {
        let have = board
            .fleet()
            .ships()
            .iter()
            .filter(|s| s.letter() == letter)
            .count();
        assert_eq!(have, count as usize, "letter '{}'", letter);
    }
}

/// Regression guard: the smallest coastal layout must always be placeable
/// within the retry budget.
#[test]
fn jaggered_coast_ss_is_always_placeable() {
    let layout = &MAPS[0];
    assert_eq!(layout.title, "Jaggered Coast SS");
    for seed in 0..1000u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(layout);
        assert!(
            board.place_randomly(&mut rng).is_ok(),
            "placement failed for seed {}",
            seed
        );
    }
}

#[test]
fn oversized_fleet_is_reported_unplaceable() {
    let layout = &MAPS[0];
    // Ten guns need 50 land cells; "Jaggered Coast SS" has only 47, so no
    // amount of retrying can fit them.
    let gun = shape('G');
    let mut board = Board::with_fleet(layout, Fleet::from_shapes(&[gun; 10]));
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        board.place_randomly(&mut rng),
        Err(GameError::UnplaceableFleet)
    );
}

#[test]
fn every_catalog_layout_is_placeable() {
    for (index, layout) in MAPS.iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(index as u64);
        let mut board = Board::new(layout);
        assert!(
            board.place_randomly(&mut rng).is_ok(),
            "layout '{}' unplaceable",
            layout.title
        );
    }
}
