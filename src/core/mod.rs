pub mod buffer;
pub mod header;
pub mod time;

pub use buffer::SampleBuffer;
pub use header::WavHeader;
pub use time::{duration_precise, duration_secs};
