// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::float_cmp
    )
)]

pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use item::{Item, StoreError};
pub use server::{router, AppState};
pub use store::ItemStore;
