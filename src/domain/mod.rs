//! Domain layer - Quote records and the pure logic over them

pub mod category;
pub mod merge;
pub mod quote;
pub mod selection;

pub use category::{distinct_categories, CategoryFilter};
pub use merge::{merge_quotes, MergeOutcome};
pub use quote::{default_quotes, Quote};
pub use selection::pick_random;
