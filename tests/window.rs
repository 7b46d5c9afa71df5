//! Integration tests for windowed rendering: visible ranges, clamping, and scroll state.

use duel_log_stats::{compute_visible_range, materialize, StatsError, WindowState};

#[test]
fn top_of_long_list() {
    let r = compute_visible_range(0.0, 400.0, 1000, 40.0, 10);
    assert_eq!((r.visible_start, r.visible_end), (0, 9));
    assert_eq!((r.start_index, r.end_index), (0, 19));
    assert_eq!(r.total_extent, 40_000.0);
    assert_eq!(r.len(), 20);
    assert!(r.contains(19));
    assert!(!r.contains(20));
}

#[test]
fn middle_of_list_overscans_both_ways() {
    let r = compute_visible_range(19_960.0, 400.0, 1000, 40.0, 10);
    assert_eq!((r.visible_start, r.visible_end), (499, 508));
    assert_eq!((r.start_index, r.end_index), (489, 518));
    assert!(r.end_index <= 999);
}

#[test]
fn end_of_list_clamps_to_last_index() {
    let r = compute_visible_range(39_960.0, 400.0, 1000, 40.0, 10);
    assert_eq!(r.visible_start, 999);
    assert_eq!(r.end_index, 999);
    assert_eq!(r.start_index, 989);

    // scrolled far past the end
    let r = compute_visible_range(1.0e9, 400.0, 1000, 40.0, 10);
    assert_eq!((r.start_index, r.end_index), (989, 999));
}

#[test]
fn partially_visible_rows_are_included() {
    // viewport covers 10..410: rows 0 (partly) through 10 (partly)
    let r = compute_visible_range(10.0, 400.0, 1000, 40.0, 0);
    assert_eq!((r.start_index, r.end_index), (0, 10));
}

#[test]
fn empty_sequence_is_empty_range() {
    let r = compute_visible_range(0.0, 400.0, 0, 40.0, 10);
    assert!(r.is_empty());
    assert_eq!(r.len(), 0);
    assert_eq!(r.total_extent, 0.0);
    assert_eq!(r.rows().count(), 0);
}

#[test]
fn short_list_fits_entirely() {
    let r = compute_visible_range(0.0, 400.0, 3, 40.0, 10);
    assert_eq!((r.start_index, r.end_index), (0, 2));
    assert_eq!(r.total_extent, 120.0);
}

#[test]
fn rows_carry_absolute_offsets() {
    let r = compute_visible_range(400.0, 80.0, 100, 40.0, 1);
    let rows: Vec<(usize, f64)> = r.rows().map(|row| (row.index, row.offset)).collect();
    assert_eq!(rows, [(9, 360.0), (10, 400.0), (11, 440.0), (12, 480.0)]);
}

#[test]
fn invalid_row_size_is_rejected_by_state_and_empty_for_free_fn() {
    assert_eq!(
        WindowState::new(0.0, 400.0).unwrap_err(),
        StatsError::InvalidItemSize(0.0)
    );
    assert!(WindowState::new(f64::NAN, 400.0).is_err());
    assert!(compute_visible_range(0.0, 400.0, 10, -1.0, 0).is_empty());
}

#[test]
fn shrinking_sequence_reclamps_scroll() {
    let mut w = WindowState::new(40.0, 400.0).unwrap().with_item_count(1000);
    w.set_scroll_offset(30_000.0);
    assert_eq!(w.range().visible_start, 750);

    w.set_item_count(50);
    // 50 rows * 40 = 2000 total, so the furthest scroll is 1600
    assert_eq!(w.scroll_offset(), 1600.0);
    let r = w.range();
    assert_eq!(r.end_index, 49);
    assert_eq!((r.visible_start, r.visible_end), (40, 49));
    assert_eq!(r.total_extent, 2000.0);

    w.set_item_count(0);
    assert_eq!(w.scroll_offset(), 0.0);
    assert!(w.range().is_empty());
}

#[test]
fn scroll_helpers() {
    let mut w = WindowState::new(40.0, 400.0)
        .unwrap()
        .with_overscan(2)
        .with_item_count(100);
    assert_eq!(w.overscan(), 2);
    w.scroll_to_index(20);
    assert_eq!(w.scroll_offset(), 800.0);
    w.scroll_by(-2000.0);
    assert_eq!(w.scroll_offset(), 0.0);
    w.scroll_to_index(99);
    assert_eq!(w.scroll_offset(), w.max_scroll_offset());
    assert_eq!(w.range().end_index, 99);
}

#[test]
fn materialize_skips_stale_indices() {
    let items: Vec<u32> = (0..5).collect();
    // range computed for a longer list than we now have
    let r = compute_visible_range(0.0, 400.0, 20, 40.0, 0);
    let got: Vec<u32> = materialize(&items, &r).map(|(_, v)| *v).collect();
    assert_eq!(got, [0, 1, 2, 3, 4]);
}

#[test]
fn taller_viewport_reclamps_and_widens_range() {
    let mut w = WindowState::new(40.0, 400.0).unwrap().with_overscan(0).with_item_count(20);
    w.set_scroll_offset(400.0);
    assert_eq!(w.range().visible_end, 19);
    w.set_viewport_extent(600.0);
    // 20 rows * 40 - 600 = 200
    assert_eq!(w.scroll_offset(), 200.0);
    assert_eq!(w.viewport_extent(), 600.0);
    assert_eq!((w.range().start_index, w.range().end_index), (5, 19));
}
