use super::{WavError, WavResult};
use std::io::Read;

pub trait ReadPrimitives: Read {
	fn read_exact_or_format(&mut self, buf: &mut [u8], what: &str) -> WavResult<()> {
		self.read_exact(buf).map_err(|e| WavError::from_read(e, what))
	}

	#[inline]
	fn read_tag(&mut self) -> WavResult<[u8; 4]> {
		let mut buf = [0u8; 4];
		self.read_exact_or_format(&mut buf, "chunk id")?;
		Ok(buf)
	}

	#[inline]
	fn read_u16_le(&mut self) -> WavResult<u16> {
		let mut buf = [0u8; 2];
		self.read_exact_or_format(&mut buf, "u16 field")?;
		Ok(u16::from_le_bytes(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> WavResult<u32> {
		let mut buf = [0u8; 4];
		self.read_exact_or_format(&mut buf, "u32 field")?;
		Ok(u32::from_le_bytes(buf))
	}
}

impl<T: Read + ?Sized> ReadPrimitives for T {}
