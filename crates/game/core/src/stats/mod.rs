//! Stat system: stored base attributes, item bonuses and derived sheets.
//!
//! ```text
//! [ AttributeSet (stored base) ] ──┐
//!                                  ├─► StatSheet { base, additional, total }
//! [ equipped items → ItemBonuses ] ┘
//!
//! [ role GrowthTable ] ──► apply_level_growth ──► AttributeSet
//! ```
//!
//! Everything here is a pure function of its inputs. The sheet is recomputed
//! on demand and never persisted.

pub mod attribute;
pub mod bonus;
pub mod growth;
pub mod sheet;
pub mod template;

pub use attribute::{Attribute, AttributeMap};
pub use bonus::{BonusEntry, BonusKind, ItemBonus, ItemBonuses, extract_item_bonuses};
pub use growth::{GrowthTable, apply_level_growth};
pub use sheet::{StatSheet, compute_stats, equipped_bonuses};
pub use template::{AttributeSet, AttributeValue, DEFAULT_RESOURCE_KIND, ResourceBlock};
