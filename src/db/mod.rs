pub mod dashboard;
pub mod enrich;
pub mod seed;
pub mod store;

pub use store::{Store, Tables, Upserted};
