// dustloop-api: Async Rust client for the Dustloop wiki Cargo export API

pub mod cargo;
pub mod error;
pub mod transport;

pub use cargo::{CargoClient, CargoQuery, DEFAULT_ENDPOINT};
pub use error::Error;
pub use transport::TransportConfig;
