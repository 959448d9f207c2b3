pub mod loader;
pub mod types;

pub use loader::{load_clients, parse_clients, LoadError};
pub use types::ClientRecord;
