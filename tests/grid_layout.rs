//! End-to-end grid layout behavior over the public API.

use std::cell::Cell;
use std::rc::Rc;

use spark_grid::engine::events::on_coord_change;
use spark_grid::engine::invalidate::take_invalid_areas;
use spark_grid::engine::{
    coords, create_object, delete_object, get_x, get_y, height, reset_registry, set_grid_cell,
    set_pos, set_size, width,
};
use spark_grid::layout::{
    FrRemainder, GridAlign, GridCell, GridConfig, GridDefinition, GridRef, TrackList, TrackSize,
    calculate, fr, full_refresh, item_refresh_position, report_grid_change, reset_grid_config,
    scratch_in_use, set_grid, set_grid_config,
};
use spark_grid::pipeline::{create_screen, set_terminal_size};
use spark_grid::types::{ChangeFlags, Coord, Dimension};

// =============================================================================
// Helpers
// =============================================================================

fn setup() -> usize {
    reset_registry();
    reset_grid_config();
    set_terminal_size(80, 24);
    create_screen()
}

fn cells(sizes: &[Coord]) -> TrackList {
    sizes.iter().map(|&s| TrackSize::Cells(s)).collect()
}

fn container(parent: usize, w: Coord, h: Coord) -> usize {
    let cont = create_object(Some(parent));
    set_size(cont, Dimension::Cells(w), Dimension::Cells(h));
    cont
}

fn item(parent: usize, w: Coord, h: Coord, x: GridCell, y: GridCell) -> usize {
    let item = create_object(Some(parent));
    set_size(item, Dimension::Cells(w), Dimension::Cells(h));
    set_grid_cell(item, Some(x), Some(y));
    item
}

fn auto_item(parent: usize, w: Coord, h: Coord) -> usize {
    let start = GridCell::at(0, GridAlign::Start);
    item(parent, w, h, start, start)
}

fn pos(index: usize) -> (Coord, Coord) {
    (get_x(index), get_y(index))
}

// =============================================================================
// Track calculation
// =============================================================================

#[test]
fn fixed_tracks_fill_content_extent() {
    let screen = setup();
    let cont = container(screen, 60, 10);
    set_grid(cont, Some(GridDefinition::explicit(cells(&[10, 20, 30]), cells(&[10])).unwrap().into_ref()));

    let calc = calculate(cont).unwrap();
    assert_eq!(calc.col_sizes().iter().sum::<Coord>(), 60);
    assert_eq!(calc.col_offsets(), &[0, 10, 30]);
    assert_eq!(calc.grid_w(), 60);
}

#[test]
fn fr_tracks_truncate_and_never_overflow() {
    let screen = setup();
    let cont = container(screen, 100, 10);
    let columns = TrackList::new([fr(1), fr(2), fr(4)]);
    set_grid(cont, Some(GridDefinition::explicit(columns, cells(&[10])).unwrap().into_ref()));

    let calc = calculate(cont).unwrap();
    assert_eq!(calc.col_sizes(), &[14, 28, 57]);
    assert!(calc.col_sizes().iter().sum::<Coord>() <= 100);
}

#[test]
fn fr_tracks_collapse_on_auto_axis() {
    let screen = setup();
    let cont = create_object(Some(screen));
    set_size(cont, Dimension::Auto, Dimension::Cells(10));
    let grid = GridDefinition::explicit(TrackList::new([fr(1), fr(5)]), TrackList::new([fr(1)]))
        .unwrap()
        .into_ref();
    set_grid(cont, Some(grid));

    let calc = calculate(cont).unwrap();
    assert_eq!(calc.col_sizes(), &[0, 0]);
    assert_eq!(calc.row_sizes(), &[10]);
}

#[test]
fn implicit_track_count_has_headroom() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::columns(cells(&[10, 10])).unwrap().into_ref()));
    for _ in 0..5 {
        auto_item(cont, 1, 1);
    }
    // A child outside grid layout doesn't count
    create_object(Some(cont));

    let calc = calculate(cont).unwrap();
    assert_eq!(calc.col_num(), 2);
    assert_eq!(calc.row_num(), 4);
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn auto_placement_row_major() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::columns(cells(&[10, 10])).unwrap().into_ref()));

    let items: Vec<usize> = (0..5).map(|_| auto_item(cont, 1, 1)).collect();
    let placed: Vec<_> = items.iter().map(|&i| pos(i)).collect();
    assert_eq!(placed, vec![(0, 0), (10, 0), (0, 1), (10, 1), (0, 2)]);
}

#[test]
fn auto_placement_column_major() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::rows(cells(&[3, 3])).unwrap().into_ref()));

    let items: Vec<usize> = (0..3).map(|_| auto_item(cont, 4, 1)).collect();
    let placed: Vec<_> = items.iter().map(|&i| pos(i)).collect();
    assert_eq!(placed, vec![(0, 0), (0, 3), (4, 0)]);
}

#[test]
fn single_item_refresh_uses_ordinal() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::columns(cells(&[10, 10])).unwrap().into_ref()));
    let items: Vec<usize> = (0..3).map(|_| auto_item(cont, 1, 1)).collect();

    set_pos(items[2], 7, 7);
    item_refresh_position(items[2]);
    assert_eq!(pos(items[2]), (0, 1));
}

#[test]
fn alignment_only_stretch_resizes() {
    let screen = setup();
    let cont = container(screen, 40, 40);
    set_grid(cont, Some(GridDefinition::explicit(cells(&[20]), cells(&[10])).unwrap().into_ref()));
    let it = auto_item(cont, 7, 3);

    let place = |align| {
        let cell = GridCell::at(0, align);
        set_grid_cell(it, Some(cell), Some(cell));
        (pos(it), (width(it), height(it)))
    };

    assert_eq!(place(GridAlign::Start), ((0, 0), (7, 3)));
    assert_eq!(place(GridAlign::Center), ((6, 3), (7, 3)));
    assert_eq!(place(GridAlign::End), ((13, 7), (7, 3)));
    assert_eq!(place(GridAlign::Stretch), ((0, 0), (20, 10)));
}

#[test]
fn center_in_hundred_wide_cell() {
    let screen = setup();
    let cont = container(screen, 100, 10);
    set_grid(cont, Some(GridDefinition::explicit(cells(&[100]), cells(&[10])).unwrap().into_ref()));

    let it = item(cont, 30, 1, GridCell::at(0, GridAlign::Center), GridCell::at(0, GridAlign::Start));
    assert_eq!(get_x(it), 35);
}

#[test]
fn resizing_an_item_shifts_later_implicit_rows() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::columns(cells(&[10, 10])).unwrap().into_ref()));
    let items: Vec<usize> = (0..3).map(|_| auto_item(cont, 1, 1)).collect();
    assert_eq!(pos(items[2]), (0, 1));

    set_size(items[0], Dimension::Cells(1), Dimension::Cells(5));
    let calc = calculate(cont).unwrap();
    assert_eq!(calc.row_sizes(), &[5, 1, 0]);
    assert_eq!(get_y(items[2]), calc.row_offsets()[1]);
    assert_eq!(pos(items[2]), (0, 5));
}

#[test]
fn resizing_an_item_shifts_later_implicit_columns() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::rows(cells(&[3, 3])).unwrap().into_ref()));
    let items: Vec<usize> = (0..3).map(|_| auto_item(cont, 4, 1)).collect();
    assert_eq!(pos(items[2]), (4, 0));

    set_size(items[1], Dimension::Cells(9), Dimension::Cells(1));
    assert_eq!(pos(items[2]), (9, 0));
}

#[test]
fn delete_shifts_auto_placed_siblings() {
    let screen = setup();
    let cont = container(screen, 20, 20);
    set_grid(cont, Some(GridDefinition::columns(cells(&[10, 10])).unwrap().into_ref()));
    let items: Vec<usize> = (0..3).map(|_| auto_item(cont, 1, 1)).collect();

    delete_object(items[0]);
    assert_eq!(pos(items[1]), (0, 0));
    assert_eq!(pos(items[2]), (10, 0));
}

// =============================================================================
// Refresh
// =============================================================================

#[test]
fn second_refresh_has_no_side_effects() {
    let screen = setup();
    let cont = container(screen, 30, 30);
    set_grid(cont, Some(GridDefinition::columns(TrackList::new([fr(1), fr(2)])).unwrap().into_ref()));
    let a = auto_item(cont, 3, 2);
    let stretch = GridCell::at(0, GridAlign::Stretch);
    let b = item(cont, 1, 1, stretch, GridCell::at(0, GridAlign::End));
    let _c = item(cont, 2, 2, GridCell::at(0, GridAlign::Center), stretch);

    full_refresh(cont);
    take_invalid_areas();

    let events = Rc::new(Cell::new(0));
    let mut cleanups = Vec::new();
    for &index in &[a, b, cont] {
        let events = events.clone();
        cleanups.push(on_coord_change(index, move |_| events.set(events.get() + 1)));
    }

    full_refresh(cont);
    assert!(take_invalid_areas().is_empty());
    assert_eq!(events.get(), 0);

    for cleanup in cleanups {
        cleanup();
    }
}

#[test]
fn stretched_item_notified_of_size_and_position() {
    let screen = setup();
    let cont = container(screen, 30, 10);
    set_grid(cont, Some(GridDefinition::explicit(cells(&[10, 20]), cells(&[10])).unwrap().into_ref()));

    let it = create_object(Some(cont));
    let flags = Rc::new(Cell::new(ChangeFlags::NONE));
    let seen = flags.clone();
    let _cleanup = on_coord_change(it, move |change| seen.set(seen.get() | change.flags));

    let stretch = GridCell::at(1, GridAlign::Stretch);
    set_grid_cell(it, Some(stretch), Some(GridCell::at(0, GridAlign::Stretch)));
    assert_eq!(flags.get(), ChangeFlags::SIZE | ChangeFlags::POSITION);
    assert_eq!((width(it), height(it)), (20, 10));
}

#[test]
fn terminal_resize_cascades_into_nested_fr_grids() {
    let screen = setup();
    let halves = GridDefinition::explicit(TrackList::new([fr(1), fr(1)]), TrackList::new([fr(1)]))
        .unwrap()
        .into_ref();
    set_grid(screen, Some(halves));

    let stretch = GridCell::at(0, GridAlign::Stretch);
    let panel = item(screen, 1, 1, GridCell::at(1, GridAlign::Stretch), stretch);
    let sidebar = TrackList::new([TrackSize::Cells(4), fr(1)]);
    set_grid(panel, Some(GridDefinition::explicit(sidebar, cells(&[2])).unwrap().into_ref()));
    let leaf = item(panel, 1, 1, GridCell::at(1, GridAlign::Stretch), GridCell::at(0, GridAlign::Start));

    assert_eq!((width(panel), height(panel)), (40, 24));
    assert_eq!(width(leaf), 36);
    assert_eq!(coords(leaf).x1, 44);

    set_terminal_size(100, 24);
    assert_eq!(width(panel), 50);
    assert_eq!(width(leaf), 46);
    assert_eq!(coords(leaf).x1, 54);
    assert_eq!(scratch_in_use(), 0);
}

#[test]
fn report_grid_change_matches_definition() {
    let first = setup();
    let second = create_screen();
    let shared: GridRef = GridDefinition::columns(cells(&[5])).unwrap().into_ref();
    let other: GridRef = GridDefinition::columns(cells(&[5])).unwrap().into_ref();

    let mut items = Vec::new();
    for (parent, grid) in [(first, &shared), (second, &shared), (second, &other)] {
        let cont = container(parent, 10, 10);
        set_grid(cont, Some(grid.clone()));
        items.push(auto_item(cont, 1, 1));
    }
    for &it in &items {
        set_pos(it, 2, 2);
    }

    report_grid_change(Some(&shared));
    assert_eq!(pos(items[0]), (0, 0));
    assert_eq!(pos(items[1]), (0, 0));
    assert_eq!(pos(items[2]), (2, 2));

    report_grid_change(None);
    assert_eq!(pos(items[2]), (0, 0));
}

#[test]
fn remainder_policy_applies_on_report() {
    let screen = setup();
    let cont = container(screen, 10, 2);
    set_grid(cont, Some(GridDefinition::explicit(TrackList::new([fr(1), fr(1), fr(1)]), cells(&[2])).unwrap().into_ref()));
    let stretch = |col| GridCell::at(col, GridAlign::Stretch);
    let items: Vec<usize> = (0..3).map(|col| item(cont, 1, 1, stretch(col), stretch(0))).collect();

    let widths = || items.iter().map(|&i| width(i)).collect::<Vec<_>>();
    assert_eq!(widths(), vec![3, 3, 3]);

    set_grid_config(GridConfig {
        fr_remainder: FrRemainder::Distribute,
        ..GridConfig::DEFAULT
    });
    report_grid_change(None);
    assert_eq!(widths(), vec![4, 3, 3]);
    assert_eq!(pos(items[1]), (4, 0));
    reset_grid_config();
}

#[test]
fn oversized_fixed_tracks_rejected() {
    use spark_grid::GridError;
    use spark_grid::layout::FR_BASE;
    use spark_grid::types::Axis;

    assert_eq!(
        GridDefinition::columns(cells(&[FR_BASE + 50])),
        Err(GridError::TrackTooLarge { axis: Axis::Column, index: 0, size: FR_BASE + 50 })
    );
    assert!(matches!(
        GridDefinition::explicit(cells(&[FR_BASE - 1; 5]), cells(&[1])),
        Err(GridError::FixedTracksOverflow { .. })
    ));
}

#[test]
fn scratch_buffers_returned_on_every_path() {
    let screen = setup();

    // No grid
    let plain = container(screen, 10, 10);
    full_refresh(plain);
    assert!(calculate(plain).is_none());

    // Explicit, implicit rows, implicit columns
    let explicit = container(screen, 10, 10);
    set_grid(explicit, Some(GridDefinition::explicit(cells(&[5]), cells(&[5])).unwrap().into_ref()));
    let rows = container(screen, 10, 10);
    set_grid(rows, Some(GridDefinition::columns(cells(&[5])).unwrap().into_ref()));
    let columns = container(screen, 10, 10);
    set_grid(columns, Some(GridDefinition::rows(cells(&[5])).unwrap().into_ref()));

    for cont in [explicit, rows, columns] {
        let it = auto_item(cont, 2, 2);
        item_refresh_position(it);
        // Out of range cell: early return
        set_grid_cell(it, Some(GridCell::at(9, GridAlign::Start)), Some(GridCell::at(9, GridAlign::Start)));
    }

    assert_eq!(scratch_in_use(), 0);
}
