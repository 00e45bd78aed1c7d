//! Domain entities - the core business objects.

mod category;

pub use category::Category;
