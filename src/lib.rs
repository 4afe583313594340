pub mod calls;
mod error;
pub mod global;
pub mod recent;
pub mod storage;
mod value;

pub use calls::{Call, CallLog, Op};
pub use error::{Error, Result};
pub use recent::RecentSearches;
pub use storage::{MemoryStorage, Storage, StorageExt};
pub use value::StorageValue;
