//! SeaORM entity definitions.

pub mod category;
