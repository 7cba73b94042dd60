//! Sorting module for file listings
//!
//! This module provides:
//! - Sort key types that handle missing data and direction
//! - Natural (numeric-aware) string ordering
//! - A comparator built from a
//!   [`SortSpecification`](arrange_model::SortSpecification)
//! - Strategy types that apply the comparator to whole listings

pub mod comparator;
pub mod keys;
pub mod natural;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use comparator::*;
pub use keys::*;
pub use natural::{NaturalKey, natural_cmp};
pub use strategy::*;
pub use traits::*;
