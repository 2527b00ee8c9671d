use crate::container::WavFormat;
use crate::io::{ReadPrimitives, WavError, WavResult};

pub const HEADER_SIZE: usize = 44;
pub const RIFF_ID: [u8; 4] = *b"RIFF";
pub const WAVE_ID: [u8; 4] = *b"WAVE";
pub const FMT_ID: [u8; 4] = *b"fmt ";
pub const DATA_ID: [u8; 4] = *b"data";
pub const PCM_FORMAT: u16 = 1;
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;
pub const BITS_PER_SAMPLE: u16 = 16;
pub const MAX_CHANNELS: u16 = 6;

// riff id + size, not counted by the size field
const RIFF_PREAMBLE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
	pub file_type_id: [u8; 4],
	pub file_size: u32,
	pub file_format_id: [u8; 4],
	pub format_chunk_id: [u8; 4],
	pub fmt_chunk_size: u32,
	pub audio_format: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
	pub data_chunk_id: [u8; 4],
	pub data_size: u32,
}

impl WavHeader {
	pub fn pcm16(channels: u16, sample_rate: u32, frames: usize) -> WavResult<Self> {
		if channels == 0 || channels > MAX_CHANNELS {
			return Err(WavError::format(format!(
				"channel count {} outside 1..={}",
				channels, MAX_CHANNELS
			)));
		}

		let block_align = channels * (BITS_PER_SAMPLE / 8);
		let data_size = u32::try_from(frames)
			.ok()
			.and_then(|f| f.checked_mul(block_align as u32))
			.ok_or_else(|| WavError::format(format!("{} frames do not fit a wav file", frames)))?;
		let byte_rate = sample_rate
			.checked_mul(block_align as u32)
			.ok_or_else(|| WavError::format(format!("sample rate {} is too high", sample_rate)))?;

		let header = Self {
			file_type_id: RIFF_ID,
			file_size: 0,
			file_format_id: WAVE_ID,
			format_chunk_id: FMT_ID,
			fmt_chunk_size: PCM_FMT_CHUNK_SIZE,
			audio_format: PCM_FORMAT,
			channels,
			sample_rate,
			byte_rate,
			block_align,
			bits_per_sample: BITS_PER_SAMPLE,
			data_chunk_id: DATA_ID,
			data_size: 0,
		};

		header.with_data_size(data_size)
	}

	/// Keeps `file_size` in step with the new payload size.
	pub fn with_data_size(mut self, data_size: u32) -> WavResult<Self> {
		self.file_size = riff_size(data_size)?;
		self.data_size = data_size;
		Ok(self)
	}

	pub fn decode(bytes: &[u8; HEADER_SIZE]) -> WavResult<Self> {
		let mut src = &bytes[..];
		Ok(Self {
			file_type_id: src.read_tag()?,
			file_size: src.read_u32_le()?,
			file_format_id: src.read_tag()?,
			format_chunk_id: src.read_tag()?,
			fmt_chunk_size: src.read_u32_le()?,
			audio_format: src.read_u16_le()?,
			channels: src.read_u16_le()?,
			sample_rate: src.read_u32_le()?,
			byte_rate: src.read_u32_le()?,
			block_align: src.read_u16_le()?,
			bits_per_sample: src.read_u16_le()?,
			data_chunk_id: src.read_tag()?,
			data_size: src.read_u32_le()?,
		})
	}

	pub fn encode(&self) -> [u8; HEADER_SIZE] {
		let mut out = [0u8; HEADER_SIZE];
		out[0..4].copy_from_slice(&self.file_type_id);
		out[4..8].copy_from_slice(&self.file_size.to_le_bytes());
		out[8..12].copy_from_slice(&self.file_format_id);
		out[12..16].copy_from_slice(&self.format_chunk_id);
		out[16..20].copy_from_slice(&self.fmt_chunk_size.to_le_bytes());
		out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
		out[22..24].copy_from_slice(&self.channels.to_le_bytes());
		out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
		out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
		out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
		out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
		out[36..40].copy_from_slice(&self.data_chunk_id);
		out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
		out
	}

	pub fn format(&self) -> WavFormat {
		WavFormat::from(self)
	}

	pub fn check_magic(&self) -> WavResult<()> {
		check_tag(&self.file_type_id, "RIFF")?;
		check_tag(&self.file_format_id, "WAVE")
	}

	pub fn check_codec(&self) -> WavResult<()> {
		if self.audio_format != PCM_FORMAT {
			return Err(WavError::UnsupportedCodec(self.audio_format));
		}
		Ok(())
	}

	pub fn validate(&self) -> WavResult<()> {
		self.check_magic()?;
		self.check_codec()?;

		if self.format_chunk_id != FMT_ID {
			return Err(WavError::format(format!(
				"expected \"fmt \" chunk at offset 12, found {:?}",
				String::from_utf8_lossy(&self.format_chunk_id)
			)));
		}
		if self.data_chunk_id != DATA_ID {
			return Err(WavError::format(format!(
				"expected \"data\" chunk at offset 36, found {:?}",
				String::from_utf8_lossy(&self.data_chunk_id)
			)));
		}
		if self.fmt_chunk_size != PCM_FMT_CHUNK_SIZE {
			return Err(WavError::format(format!(
				"fmt chunk size {} (expected {})",
				self.fmt_chunk_size, PCM_FMT_CHUNK_SIZE
			)));
		}
		if self.channels == 0 || self.channels > MAX_CHANNELS {
			return Err(WavError::format(format!(
				"channel count {} outside 1..={}",
				self.channels, MAX_CHANNELS
			)));
		}
		if self.bits_per_sample != BITS_PER_SAMPLE {
			return Err(WavError::format(format!(
				"{} bits per sample, only {} is supported",
				self.bits_per_sample, BITS_PER_SAMPLE
			)));
		}

		let block_align = self.channels as u32 * (self.bits_per_sample / 8) as u32;
		if self.block_align as u32 != block_align {
			return Err(WavError::format(format!(
				"block align {} does not match {} channel(s) of {} bits",
				self.block_align, self.channels, self.bits_per_sample
			)));
		}
		if self.byte_rate as u64 != self.sample_rate as u64 * block_align as u64 {
			return Err(WavError::format(format!(
				"byte rate {} does not match sample rate {} x block align {}",
				self.byte_rate, self.sample_rate, block_align
			)));
		}
		if self.data_size % (self.bits_per_sample / 8) as u32 != 0 {
			return Err(WavError::format(format!(
				"data size {} is not a whole number of samples",
				self.data_size
			)));
		}
		if self.file_size != riff_size(self.data_size)? {
			return Err(WavError::format(format!(
				"riff size {} does not match data size {}",
				self.file_size, self.data_size
			)));
		}

		Ok(())
	}

	pub fn frames(&self) -> usize {
		if self.block_align == 0 {
			return 0;
		}
		(self.data_size / self.block_align as u32) as usize
	}

	pub fn duration_secs(&self) -> WavResult<u32> {
		super::time::duration_secs(self)
	}
}

fn check_tag(found: &[u8; 4], expected: &'static str) -> WavResult<()> {
	if found != expected.as_bytes() {
		return Err(WavError::NotWav {
			expected,
			found: String::from_utf8_lossy(found).into_owned(),
		});
	}
	Ok(())
}

fn riff_size(data_size: u32) -> WavResult<u32> {
	data_size
		.checked_add(HEADER_SIZE as u32 - RIFF_PREAMBLE)
		.ok_or_else(|| WavError::format(format!("data size {} overflows the riff size", data_size)))
}
