pub mod wav;

pub use wav::{WavFormat, WavReader, WavWriter};
