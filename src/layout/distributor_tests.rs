//! Tests for the column distributor.

use super::*;

fn featured() -> ContentItem {
    ContentItem::new().with_class("featured")
}

fn media() -> ContentItem {
    ContentItem::new().with_class("with-media")
}

fn text() -> ContentItem {
    ContentItem::new().with_class("text-only")
}

// ===== distribute_by =====

#[test]
fn worked_scenario_two_columns() {
    // A=350, B=280, C=180, D=180, E=280
    let items = vec![featured(), media(), text(), text(), media()];
    let dist = ColumnDistributor::default().distribute(&items, 2).unwrap();

    // A->0 (350,0) B->1 (350,280) C->1 (350,460) D->0 (530,460) E->1 (530,740)
    assert_eq!(dist.indices(), vec![vec![0, 3], vec![1, 2, 4]]);
    assert_eq!(dist.heights(), vec![530, 740]);
    assert_eq!(dist.imbalance(), 210);
}

#[test]
fn equal_heights_go_round_robin() {
    let heights = [100u32; 7];
    let dist = distribute_by(&heights, ColumnCount::new(3).unwrap(), |h| *h);

    assert_eq!(dist.indices(), vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    let sizes: Vec<usize> = dist.columns().iter().map(Column::len).collect();
    assert_eq!(sizes, vec![3, 2, 2]);
}

#[test]
fn single_column_preserves_input_order() {
    let items = vec![text(), featured(), media(), text()];
    let dist = ColumnDistributor::default().distribute(&items, 1).unwrap();

    assert_eq!(dist.column_count(), 1);
    assert_eq!(dist.indices(), vec![vec![0, 1, 2, 3]]);
    assert_eq!(dist.heights(), vec![180 + 350 + 280 + 180]);
}

#[test]
fn empty_input_yields_empty_columns() {
    let items: Vec<ContentItem> = Vec::new();
    let dist = ColumnDistributor::default().distribute(&items, 3).unwrap();

    assert_eq!(dist.column_count(), 3);
    assert!(dist.is_empty());
    assert_eq!(dist.len(), 0);
    assert_eq!(dist.heights(), vec![0, 0, 0]);
    assert_eq!(dist.imbalance(), 0);
}

#[test]
fn fewer_items_than_columns_leaves_trailing_columns_empty() {
    let items = vec![text(), text()];
    let dist = ColumnDistributor::default().distribute(&items, 4).unwrap();

    assert_eq!(dist.indices(), vec![vec![0], vec![1], vec![], vec![]]);
}

#[test]
fn zero_columns_is_invalid_argument() {
    let items = vec![text()];
    let err = ColumnDistributor::default()
        .distribute(&items, 0)
        .unwrap_err();

    assert!(matches!(err, LayoutError::InvalidArgument { .. }));
}

#[test]
fn negative_column_count_is_rejected_before_layout() {
    let err = ColumnCount::try_from(-1i64).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidArgument { .. }));
}

#[test]
fn early_featured_item_is_avoided_afterwards() {
    let items = vec![featured(), text(), text(), text()];
    let dist = ColumnDistributor::default().distribute(&items, 2).unwrap();

    // 350 | 180 -> 350 | 360 -> 530 | 360
    assert_eq!(dist.indices(), vec![vec![0, 3], vec![1, 2]]);
    assert_eq!(dist.heights(), vec![530, 360]);
}

#[test]
fn repeated_calls_are_identical() {
    let items = vec![featured(), media(), text(), media(), featured(), text()];
    let distributor = ColumnDistributor::default();

    let first = distributor.distribute(&items, 3).unwrap();
    let second = distributor.distribute(&items, 3).unwrap();

    assert_eq!(first, second);
}

#[test]
fn placements_borrow_the_original_items() {
    let items = vec![text().with_key("a"), featured().with_key("b")];
    let dist = ColumnDistributor::default().distribute(&items, 2).unwrap();

    let placement = dist.columns()[1].placements()[0];
    assert_eq!(placement.index, 1);
    assert_eq!(placement.item.key.as_deref(), Some("b"));
    assert_eq!(placement.height, 350);
    assert!(std::ptr::eq(placement.item, &items[1]));
}

#[test]
fn column_of_reports_assignment() {
    let items = vec![featured(), media(), text(), text(), media()];
    let dist = ColumnDistributor::default().distribute(&items, 2).unwrap();

    let assigned: Vec<Option<usize>> = (0..5).map(|i| dist.column_of(i)).collect();
    assert_eq!(
        assigned,
        vec![Some(0), Some(1), Some(1), Some(0), Some(1)]
    );
}

#[test]
fn zero_height_items_still_advance_round_robin_by_index() {
    // All columns stay at height 0, so the lowest index always wins.
    let heights = [0u32; 4];
    let dist = distribute_by(&heights, ColumnCount::new(2).unwrap(), |h| *h);

    assert_eq!(dist.indices(), vec![vec![0, 1, 2, 3], vec![]]);
}

// ===== estimate =====

#[test]
fn explicit_height_wins_over_class() {
    let distributor = ColumnDistributor::default();
    let item = featured().with_height(42);
    assert_eq!(distributor.estimate(&item), 42);
}

#[test]
fn unknown_class_falls_back_to_text_only_even_with_media() {
    let distributor = ColumnDistributor::default();
    let item = ContentItem::new()
        .with_class("breaking-news")
        .with_image("https://img/1.jpg");
    assert_eq!(distributor.estimate(&item), 180);
}

#[test]
fn absent_class_uses_media_presence() {
    let distributor = ColumnDistributor::default();
    assert_eq!(distributor.estimate(&ContentItem::new().with_image("x.png")), 280);
    assert_eq!(distributor.estimate(&ContentItem::new()), 180);
}

#[test]
fn custom_table_changes_estimates_and_layout() {
    let table = HeightTable::default()
        .with_height(HeightClass::Featured, 100)
        .with_height(HeightClass::TextOnly, 300);
    let distributor = ColumnDistributor::new(table);
    assert_eq!(distributor.table().featured, 100);

    let items = vec![featured(), text(), featured()];
    let dist = distributor.distribute(&items, 2).unwrap();

    // 100 | 300 -> 200 | 300
    assert_eq!(dist.indices(), vec![vec![0, 2], vec![1]]);
    assert_eq!(dist.heights(), vec![200, 300]);
}

#[test]
fn tallest_and_shortest_agree_with_heights() {
    let items = vec![featured(), text(), media()];
    let dist = ColumnDistributor::default().distribute(&items, 3).unwrap();

    assert_eq!(dist.tallest(), 350);
    assert_eq!(dist.shortest(), 180);
    assert_eq!(dist.into_columns().len(), 3);
}
