//! Per-upload sessions.
//!
//! One session spans a single upload cycle: the merged data table and the
//! reference table are persisted at creation, the chosen column pair is
//! attached by the selection step, and the download steps read all of it
//! back. Storage is an injected [`SessionStore`]; the core table operations
//! never see the store, only the tables handed back from it.

mod error;
mod id;
mod store;

pub use error::{Result, SessionError};
pub use id::SessionId;
pub use store::{ColumnChoice, MemoryStore, SessionStore, TempDirStore};
