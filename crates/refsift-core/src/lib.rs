//! Core table operations.
//!
//! Three pure, synchronous functions over in-memory tables:
//!
//! - [`merge`]: column-union concatenation of several tables into one.
//! - [`partition`]: split a data table into rows whose chosen-column value
//!   is present in / absent from a reference table's chosen column.
//! - [`normalize`]: the comparison key used by [`partition`].
//!
//! Nothing here touches files, sessions, or shared state; concurrent calls
//! for independent tables never interfere.

mod error;
mod merge;
mod normalize;
mod partition;

pub use error::{CoreError, Result};
pub use merge::merge;
pub use normalize::{normalize, normalize_text};
pub use partition::{Partition, partition};
