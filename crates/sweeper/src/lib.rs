mod errors;
mod models;
mod sweep;

pub use errors::SweepError;
pub use models::Sweeper;
pub use sweep::object_key;
