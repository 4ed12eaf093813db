//! Reading and writing tagged JSON records.
//!
//! [`RecordReader`] turns a record of any registered version into the latest
//! version of its family. [`RecordWriter`] tags an instance with the
//! registration of its type.

pub mod envelope;
mod reader;
mod writer;

pub use envelope::RecordHeader;
pub use reader::{RecordInput, RecordReader};
pub use writer::RecordWriter;
