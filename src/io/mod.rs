mod error;
mod reader;
mod writer;

pub use error::{WavError, WavErrorKind, WavResult};
pub use reader::ReadPrimitives;
pub use writer::WritePrimitives;
