pub mod product;
pub mod query;

pub use product::Product;
pub use query::{ListParams, QueryOptions};
