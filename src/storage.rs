mod snapshot;
pub use snapshot::{Snapshot, SnapshotError};

mod store;
pub use store::{LoadError, SaveError, Store};
