//! newsgrid
//!
//! Balanced masonry column layout for news feeds.
//!
//! The core is [`layout::ColumnDistributor`]: a pure, greedy
//! shortest-column-first pass that assigns every item to exactly one column.
//! Everything else (config, logging, input, rendering, CLI) is the shell
//! around it.
//!
//! ```
//! use newsgrid::layout::ColumnDistributor;
//! use newsgrid::model::ContentItem;
//!
//! let items = vec![
//!     ContentItem::new().with_key("a").with_class("featured"),
//!     ContentItem::new().with_key("b"),
//!     ContentItem::new().with_key("c").with_image("c.jpg"),
//! ];
//! let layout = ColumnDistributor::default().distribute(&items, 2).unwrap();
//! assert_eq!(layout.indices(), vec![vec![0], vec![1, 2]]);
//! ```

pub mod cli;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;
