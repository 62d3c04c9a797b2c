//! Embeddable columnar store for fixed-shape records.
//!
//! Provides a runtime type registry with struct-layout computation,
//! append-only columnar storage, and a byte-codec bridge between typed
//! values and raw column bytes.

pub mod config;
pub mod error;
pub mod record;
pub mod storage;
pub mod store;
pub mod types;

pub use config::StoreConfig;
pub use error::StoreError;
pub use record::{Record, TimestampNs};
pub use store::Store;
pub use types::{TypeHandle, TypeKind};
