use pgmseam::{
    compute_cost, compute_energy, seamcarve, CarveError, CarvingMode, Grid, PgmImage,
};

const MODES: [CarvingMode; 2] = [CarvingMode::Vertical, CarvingMode::Horizontal];

// Deterministic and bumpy.
fn landscape(width: usize, height: usize) -> Grid<i32> {
    let data = (0..width * height)
        .map(|i| ((i * 37 + (i / width) * 11) % 101) as i32)
        .collect();
    Grid::from_vec(width, height, data).unwrap()
}

#[test]
fn carving_shrinks_only_the_perpendicular_dimension() {
    let grid = landscape(9, 7);
    for k in 0..7 {
        let carved = seamcarve(&grid, CarvingMode::Vertical, k).unwrap();
        assert_eq!(carved.dimensions(), (9 - k, 7));
    }
    for k in 0..6 {
        let carved = seamcarve(&grid, CarvingMode::Horizontal, k).unwrap();
        assert_eq!(carved.dimensions(), (9, 7 - k));
    }
}

#[test]
fn the_input_is_never_touched() {
    let grid = landscape(8, 6);
    let before = grid.clone();
    for mode in &MODES {
        seamcarve(&grid, *mode, 3).unwrap();
        let _ = seamcarve(&grid, *mode, 100);
    }
    assert_eq!(grid, before);
}

#[test]
fn each_row_loses_exactly_one_sample_per_vertical_seam() {
    let grid = landscape(8, 5);
    let carved = seamcarve(&grid, CarvingMode::Vertical, 1).unwrap();
    for (before, after) in grid.rows().zip(carved.rows()) {
        // The surviving samples keep their order: `after` is `before`
        // with one element taken out.
        let gap = (0..after.len())
            .find(|&i| before[i] != after[i])
            .unwrap_or(after.len());
        assert_eq!(&before[..gap], &after[..gap]);
        assert_eq!(&before[gap + 1..], &after[gap..]);
    }
}

#[test]
fn cost_dominates_energy_everywhere() {
    let grid = landscape(10, 10);
    let energy = compute_energy(&grid).unwrap();
    for mode in &MODES {
        let cost = compute_cost(&energy, *mode).unwrap();
        assert!(cost.iter().zip(energy.iter()).all(|(c, e)| c >= e));
    }
}

#[test]
fn flat_grids_have_no_energy() {
    let energy = compute_energy(&Grid::filled(6, 4, 128)).unwrap();
    assert!(energy.iter().all(|e| *e == 0));
}

#[test]
fn the_bright_centre_survives() {
    let grid = Grid::from_vec(3, 3, vec![0, 0, 0, 0, 9, 0, 0, 0, 0]).unwrap();
    let carved = seamcarve(&grid, CarvingMode::Vertical, 1).unwrap();
    assert_eq!(carved.dimensions(), (2, 3));
    assert!(carved.iter().any(|v| *v == 9));
}

#[test]
fn ties_resolve_the_same_way_every_time() {
    let grid = Grid::from_vec(3, 3, vec![5, 1, 5, 5, 1, 5, 5, 1, 5]).unwrap();
    let first = seamcarve(&grid, CarvingMode::Vertical, 1).unwrap();
    for _ in 0..20 {
        assert_eq!(seamcarve(&grid, CarvingMode::Vertical, 1).unwrap(), first);
    }
}

#[test]
fn degenerate_lines_cannot_be_carved_away() {
    let column = Grid::from_vec(1, 5, vec![1, 2, 3, 4, 5]).unwrap();
    assert!(matches!(
        seamcarve(&column, CarvingMode::Vertical, 1),
        Err(CarveError::OverRemoval { .. })
    ));
    let row = Grid::from_vec(5, 1, vec![1, 2, 3, 4, 5]).unwrap();
    assert!(matches!(
        seamcarve(&row, CarvingMode::Horizontal, 1),
        Err(CarveError::OverRemoval { .. })
    ));
    assert_eq!(
        seamcarve(&row, CarvingMode::Vertical, 4).unwrap().dimensions(),
        (1, 1)
    );
}

#[test]
fn metadata_survives_load_carve_save() {
    let text = "P2 from a scanner\n# comment\n4 3\n200\n1 2 3 4\n5 5 5 5\n9 1 1 9\n";
    let image = PgmImage::read(text.as_bytes()).unwrap();
    let carved = seamcarve(&image.grid, CarvingMode::Vertical, 1).unwrap();
    let carved = seamcarve(&carved, CarvingMode::Horizontal, 1).unwrap();

    let mut out = Vec::new();
    image.with_grid(carved).write(&mut out, None).unwrap();
    let reloaded = PgmImage::read(&out[..]).unwrap();
    assert_eq!(reloaded.header, "P2 from a scanner");
    assert_eq!(reloaded.max_value, 200);
    assert_eq!(reloaded.grid.dimensions(), (3, 2));
}
