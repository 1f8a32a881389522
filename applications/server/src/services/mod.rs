/// Business logic services
pub mod catalog;

pub use catalog::Catalog;
