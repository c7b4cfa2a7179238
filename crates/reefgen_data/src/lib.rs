pub mod data;

pub use data::category::{Category, CATEGORY_COUNT, TERRAIN_CATEGORIES};
