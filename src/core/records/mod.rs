//! Remote post records and where they come from.

pub mod model;
pub mod source;

pub use model::Record;
pub use source::{FetchError, HttpRecordSource, RecordSource, FETCH_ERROR_MESSAGE};

#[cfg(test)]
pub use source::{MockRecordSource, StaticRecordSource};
