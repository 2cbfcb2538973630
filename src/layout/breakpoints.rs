//! Viewport-width breakpoints that pick a column count.

use crate::model::{ColumnCount, LayoutError};

/// A single breakpoint: from `min_width` upward, use `columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Breakpoint {
    min_width: u32,
    columns: ColumnCount,
}

/// Ordered, non-empty set of breakpoints with unique widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    /// Build from `(min_width, columns)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if the list is empty, a column count
    /// is zero, or two breakpoints share a width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgrid::layout::Breakpoints;
    /// let bps = Breakpoints::new([(1024, 3), (0, 1), (640, 2)]).unwrap();
    /// assert_eq!(bps.columns_for(800).get(), 2);
    /// assert!(Breakpoints::new([(0, 1), (0, 2)]).is_err());
    /// ```
    pub fn new(pairs: impl IntoIterator<Item = (u32, usize)>) -> Result<Self, LayoutError> {
        let mut breakpoints = pairs
            .into_iter()
            .map(|(min_width, columns)| {
                Ok(Breakpoint {
                    min_width,
                    columns: ColumnCount::new(columns)?,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        if breakpoints.is_empty() {
            return Err(LayoutError::InvalidArgument {
                value: "[]".to_string(),
                reason: "at least one breakpoint is required",
            });
        }

        breakpoints.sort_by_key(|bp| bp.min_width);
        if let Some(pair) = breakpoints
            .windows(2)
            .find(|pair| pair[0].min_width == pair[1].min_width)
        {
            return Err(LayoutError::InvalidArgument {
                value: pair[0].min_width.to_string(),
                reason: "breakpoint widths must be unique",
            });
        }

        Ok(Self(breakpoints))
    }

    /// Column count for a viewport width.
    ///
    /// Uses the breakpoint with the largest `min_width <= width`. Widths below the
    /// first breakpoint use the first one.
    pub fn columns_for(&self, width: u32) -> ColumnCount {
        let below = self.0.partition_point(|bp| bp.min_width <= width);
        let slot = below.saturating_sub(1);
        self.0[slot].columns
    }
}

/// Phone, tablet, laptop, desktop.
const DEFAULT_BREAKPOINTS: [(u32, usize); 4] = [(0, 1), (640, 2), (1024, 3), (1440, 4)];

impl Default for Breakpoints {
    fn default() -> Self {
        Self(
            DEFAULT_BREAKPOINTS
                .iter()
                .filter_map(|&(min_width, columns)| {
                    ColumnCount::new(columns)
                        .ok()
                        .map(|columns| Breakpoint { min_width, columns })
                })
                .collect(),
        )
    }
}
