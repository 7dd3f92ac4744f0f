//! Backend platform clients.
//!
//! The hosted platform exposes three APIs: row access to tables, bucketed
//! object storage, and password authentication. Each is a trait with a REST
//! implementation and an in-memory one under [`memory`].

mod client;
mod config;
mod decode;
mod errors;
mod identity;
pub mod memory;
mod query;
mod storage;
mod store;
mod tables;

pub use client::PlatformClient;
pub use config::PlatformConfig;
pub use errors::{PlatformError, PlatformErrorKind};
pub use identity::{IdentityProvider, MockIdentityProvider, RestIdentityProvider};
pub(crate) use decode::{decode_row, decode_rows, null_as_default};
pub use query::{Filter, Select};
pub use storage::{FileUpload, MockObjectStore, ObjectStore, RestObjectStore};
pub use store::{MockTableStore, RestTableStore, TableStore};
pub use tables::Table;
