//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod column_count;
pub mod error;
pub mod height;
pub mod item;

// Re-export for convenience
pub use column_count::ColumnCount;
pub use error::{AppError, InputError, LayoutError};
pub use height::{HeightClass, HeightTable};
pub use item::ContentItem;
