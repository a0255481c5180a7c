//! `stockboard-core` — shared building blocks.
//!
//! Pure primitives used by every other crate: the error model, block
//! identifiers and a couple of marker traits. No host or IO concerns.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{find_by_id_mut, position_by_id, Entity};
pub use error::{StockboardError, StockboardResult};
pub use id::EntityId;
pub use value_object::ValueObject;
