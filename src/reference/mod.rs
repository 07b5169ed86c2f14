//! Reference data module
//!
//! The DGE recommendation table and overlays that adjust it.

mod dge;
pub mod overlay;
pub mod table;

pub use overlay::{load_with_overlay, BaselineOverlay, ReferenceOverlay, SpecialOverlay};
pub use table::{
    ConditionOverride, NutrientReference, ReferenceBucket, ReferenceTable, ReferenceValue,
    SpecialReference,
};
