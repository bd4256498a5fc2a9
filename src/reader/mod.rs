//! Delimited-table reading: dialect detection, header normalization and
//! per-cell decoding.

pub mod dialect;
pub mod remap;
pub mod row;
pub mod table;

pub use dialect::{Delimiter, Dialect};
pub use remap::FieldRemapping;
pub use row::RawRow;
pub use table::{ReaderOptions, TableReader, resolve_encoding};
