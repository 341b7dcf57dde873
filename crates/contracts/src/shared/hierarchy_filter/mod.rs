//! Cascading multi-select filter over a fixed-depth hierarchy.
//!
//! A flat list of [`LeafRecord`]s (each carrying one value per level) is indexed
//! once; [`HierarchyFilterEngine`] then keeps the per-level selections
//! consistent while the user toggles values at any level, and reports the
//! leaf-level selection to a single listener.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod level;
pub mod record;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use index::*;
pub use level::*;
pub use record::*;
