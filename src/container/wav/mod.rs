pub mod read;
pub mod write;

pub use read::{WavReader, read};
pub use write::{WavWriter, write};

use crate::core::WavHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
}

impl WavFormat {
	pub fn bytes_per_sample(&self) -> usize {
		(self.bit_depth / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.channels as usize
	}
}

impl From<&WavHeader> for WavFormat {
	fn from(header: &WavHeader) -> Self {
		Self {
			channels: header.channels,
			sample_rate: header.sample_rate,
			bit_depth: header.bits_per_sample,
		}
	}
}
