//! Directory source: decodes the team document into a validated record store.
mod decode;
mod load;

pub use decode::decode_records;
pub use load::{load_records, SourceError};
