//! Greedy shortest-column-first masonry distribution.
//!
//! Items are visited once, in input order. Each goes to the column with the
//! smallest accumulated height; ties go to the lowest column index. Nothing is
//! reordered or rebalanced afterwards, so the result is fully determined by the
//! input order and the height estimates.
//!
//! # Complexity
//!
//! - `distribute`: O(n * c) for n items and c columns
//! - `column_of`: O(n)
//!
//! The column scan is linear; feeds are tens to low hundreds of items and column
//! counts are single digits.

use crate::model::{ColumnCount, ContentItem, HeightClass, HeightTable, LayoutError};
use tracing::debug;

/// One item placed in a column.
#[derive(Debug, PartialEq, Eq)]
pub struct Placement<'a, T> {
    /// Position of the item in the input sequence.
    pub index: usize,
    /// The item itself, borrowed from the caller.
    pub item: &'a T,
    /// Height estimate used when placing it.
    pub height: u32,
}

// Manual impls: derive would require `T: Clone`.
impl<T> Clone for Placement<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Placement<'_, T> {}

/// A single output column.
#[derive(Debug, PartialEq, Eq)]
pub struct Column<'a, T> {
    index: usize,
    placements: Vec<Placement<'a, T>>,
    height: u64,
}

impl<'a, T> Column<'a, T> {
    fn new(index: usize) -> Self {
        Self {
            index,
            placements: Vec::new(),
            height: 0,
        }
    }

    fn push(&mut self, placement: Placement<'a, T>) {
        self.height += u64::from(placement.height);
        self.placements.push(placement);
    }

    /// Zero-based column index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Accumulated height of every placement in this column.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Placements in the order they were assigned (ascending input index).
    pub fn placements(&self) -> &[Placement<'a, T>] {
        &self.placements
    }

    /// Input indices of the placed items.
    pub fn indices(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.index).collect()
    }

    /// Number of items placed in this column.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True when no item landed in this column.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl<T> Clone for Column<'_, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            placements: self.placements.clone(),
            height: self.height,
        }
    }
}

/// Result of a layout pass: exactly `column_count` columns.
#[derive(Debug, PartialEq, Eq)]
pub struct Distribution<'a, T> {
    columns: Vec<Column<'a, T>>,
}

impl<'a, T> Distribution<'a, T> {
    /// Columns in index order.
    pub fn columns(&self) -> &[Column<'a, T>] {
        &self.columns
    }

    /// Consume the distribution, yielding its columns.
    pub fn into_columns(self) -> Vec<Column<'a, T>> {
        self.columns
    }

    /// Number of columns, including empty ones.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Accumulated height per column.
    pub fn heights(&self) -> Vec<u64> {
        self.columns.iter().map(Column::height).collect()
    }

    /// Height of the tallest column.
    pub fn tallest(&self) -> u64 {
        self.columns.iter().map(Column::height).max().unwrap_or(0)
    }

    /// Height of the shortest column.
    pub fn shortest(&self) -> u64 {
        self.columns.iter().map(Column::height).min().unwrap_or(0)
    }

    /// Tallest minus shortest column height.
    pub fn imbalance(&self) -> u64 {
        self.tallest() - self.shortest()
    }

    /// Total number of placed items.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// True when no item was placed.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Column::is_empty)
    }

    /// Column that received the item at `index`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgrid::layout::distribute_by;
    /// # use newsgrid::model::ColumnCount;
    /// let heights = [10u32, 10, 10];
    /// let dist = distribute_by(&heights, ColumnCount::new(2).unwrap(), |h| *h);
    /// assert_eq!(dist.column_of(2), Some(0));
    /// assert_eq!(dist.column_of(9), None);
    /// ```
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .find(|column| column.placements.iter().any(|p| p.index == index))
            .map(Column::index)
    }

    /// Per-column input indices, in placement order.
    pub fn indices(&self) -> Vec<Vec<usize>> {
        self.columns.iter().map(Column::indices).collect()
    }
}

impl<T> Clone for Distribution<'_, T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

/// Distribute `items` over `column_count` columns with a caller-supplied estimator.
///
/// This is the core of the layout; [`ColumnDistributor`] wraps it with the
/// height-class table for [`ContentItem`]s.
///
/// # Examples
///
/// ```
/// # use newsgrid::layout::distribute_by;
/// # use newsgrid::model::ColumnCount;
/// let heights = [350u32, 280, 180, 180, 280];
/// let dist = distribute_by(&heights, ColumnCount::new(2).unwrap(), |h| *h);
/// assert_eq!(dist.indices(), vec![vec![0, 3], vec![1, 2, 4]]);
/// assert_eq!(dist.heights(), vec![530, 740]);
/// ```
pub fn distribute_by<'a, T, F>(
    items: &'a [T],
    column_count: ColumnCount,
    mut estimate: F,
) -> Distribution<'a, T>
where
    F: FnMut(&T) -> u32,
{
    let mut columns: Vec<Column<'a, T>> = (0..column_count.get()).map(Column::new).collect();

    for (index, item) in items.iter().enumerate() {
        let height = estimate(item);
        let target = shortest_column(&columns);
        columns[target].push(Placement {
            index,
            item,
            height,
        });
    }

    let distribution = Distribution { columns };
    debug!(
        items = items.len(),
        columns = column_count.get(),
        tallest = distribution.tallest(),
        imbalance = distribution.imbalance(),
        "Distributed items into columns"
    );
    distribution
}

/// Index of the column with minimum height, lowest index on ties.
fn shortest_column<T>(columns: &[Column<'_, T>]) -> usize {
    columns
        .iter()
        .min_by_key(|column| (column.height, column.index))
        .map(Column::index)
        .unwrap_or(0)
}

/// Masonry distributor for feed items, parameterized by a height table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDistributor {
    table: HeightTable,
}

impl ColumnDistributor {
    /// Distributor using `table` for class estimates.
    pub fn new(table: HeightTable) -> Self {
        Self { table }
    }

    /// The height table in use.
    pub fn table(&self) -> &HeightTable {
        &self.table
    }

    /// Estimated height of a single item.
    ///
    /// Resolution order:
    /// 1. explicit `height`
    /// 2. recognised `height_class` label
    /// 3. unrecognised label: `text_only`
    /// 4. no label: `with_media` if the item has an image, else `text_only`
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgrid::layout::ColumnDistributor;
    /// # use newsgrid::model::ContentItem;
    /// let distributor = ColumnDistributor::default();
    /// assert_eq!(distributor.estimate(&ContentItem::new().with_class("featured")), 350);
    /// assert_eq!(distributor.estimate(&ContentItem::new().with_image("a.jpg")), 280);
    /// assert_eq!(distributor.estimate(&ContentItem::new()), 180);
    /// ```
    pub fn estimate(&self, item: &ContentItem) -> u32 {
        if let Some(height) = item.height {
            return height;
        }

        match item.height_class.as_deref() {
            Some(label) => match HeightClass::parse(label) {
                Some(class) => self.table.height_of(class),
                None => {
                    debug!(
                        label,
                        key = item.key.as_deref(),
                        "Unknown height class, using text-only estimate"
                    );
                    self.table.text_only
                }
            },
            None if item.has_media() => self.table.with_media,
            None => self.table.text_only,
        }
    }

    /// Distribute feed items over `column_count` columns.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if `column_count` is zero. No item is
    /// placed in that case.
    pub fn distribute<'a>(
        &self,
        items: &'a [ContentItem],
        column_count: usize,
    ) -> Result<Distribution<'a, ContentItem>, LayoutError> {
        let column_count = ColumnCount::new(column_count)?;
        Ok(self.layout(items, column_count))
    }

    /// Distribute with an already validated column count.
    pub fn layout<'a>(
        &self,
        items: &'a [ContentItem],
        column_count: ColumnCount,
    ) -> Distribution<'a, ContentItem> {
        distribute_by(items, column_count, |item| self.estimate(item))
    }
}

#[cfg(test)]
#[path = "distributor_tests.rs"]
mod tests;
