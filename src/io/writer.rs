use super::{WavError, WavResult};
use std::io::Write;

pub trait WritePrimitives: Write {
	#[inline]
	fn write_bytes(&mut self, buf: &[u8]) -> WavResult<()> {
		self.write_all(buf).map_err(WavError::Write)
	}
}

impl<T: Write + ?Sized> WritePrimitives for T {}
