//! Data model for WoW item extraction.
//!
//! Closed taxonomy enumerations (class, subclass, quality), the open
//! expansion id, the materialized [`ItemRecord`] and typed [`CategoryKey`]s.

pub mod category;
pub mod enums;
pub mod error;
pub mod item;
pub mod subclass;
pub mod text;

pub use category::{CategoryKey, normalize_key};
pub use enums::{Expansion, ExpansionId, ItemClass, ItemQuality};
pub use error::{ModelError, Result};
pub use item::{ItemId, ItemRecord, Taxonomy};
pub use subclass::{ItemSubclass, SubclassContext};
pub use text::sanitize_text;
