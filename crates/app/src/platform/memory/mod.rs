//! In-memory platform.
//!
//! Models the remote schema closely enough to exercise services without a
//! network: primary keys are assigned and kept unique, join tables enforce
//! their product reference, and inner-join embeds drop unmatched rows.

mod identity;
mod objects;
mod tables;

pub use identity::MemoryIdentityProvider;
pub use objects::MemoryObjectStore;
pub use tables::MemoryTableStore;
