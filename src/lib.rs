// Bills Tracker - Core Library
// Exposes all modules for use in the API server and tests

pub mod api;
pub mod bill;
pub mod money;
pub mod registry;

// Re-export commonly used types
pub use api::{build_router, AppState};
pub use bill::{Bill, BillDraft};
pub use money::Money;
pub use registry::BillRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
