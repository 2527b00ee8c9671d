use crate::io::{WavError, WavResult};

/// Interleaved samples; meaningless without the header that gives their channel stride.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBuffer {
	samples: Vec<i16>,
}

impl SampleBuffer {
	pub fn new(samples: Vec<i16>) -> Self {
		Self { samples }
	}

	pub fn try_alloc(len: usize) -> WavResult<Vec<i16>> {
		let mut samples = Vec::new();
		samples
			.try_reserve_exact(len)
			.map_err(|_| WavError::Allocation(len.saturating_mul(2)))?;
		Ok(samples)
	}

	pub fn extend_from_le_bytes(&mut self, bytes: &[u8]) -> WavResult<()> {
		if bytes.len() % 2 != 0 {
			return Err(WavError::format(format!(
				"{} data bytes is not a whole number of 16-bit samples",
				bytes.len()
			)));
		}

		self.samples.try_reserve(bytes.len() / 2).map_err(|_| WavError::Allocation(bytes.len()))?;
		self.samples.extend(bytes.chunks_exact(2).map(|c| i16::from_le_bytes([c[0], c[1]])));
		Ok(())
	}

	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
	}

	pub fn samples(&self) -> &[i16] {
		&self.samples
	}

	pub fn len(&self) -> usize {
		self.samples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.samples.is_empty()
	}

	pub fn byte_len(&self) -> usize {
		self.samples.len() * 2
	}

	pub fn into_inner(self) -> Vec<i16> {
		self.samples
	}
}

impl From<Vec<i16>> for SampleBuffer {
	fn from(samples: Vec<i16>) -> Self {
		Self::new(samples)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::WavErrorKind;

	#[test]
	fn test_extend_from_le_bytes() {
		let mut buffer = SampleBuffer::default();
		buffer.extend_from_le_bytes(&[0x01, 0x00, 0xff, 0xff]).unwrap();
		buffer.extend_from_le_bytes(&[0x00, 0x80]).unwrap();
		assert_eq!(buffer.samples(), &[1, -1, i16::MIN]);
		assert_eq!(buffer.len(), 3);
		assert_eq!(buffer.byte_len(), 6);
		assert_eq!(buffer.to_le_bytes(), vec![0x01, 0x00, 0xff, 0xff, 0x00, 0x80]);
	}

	#[test]
	fn test_odd_byte_count_is_rejected() {
		let mut buffer = SampleBuffer::default();
		let err = buffer.extend_from_le_bytes(&[0x01, 0x00, 0x02]).unwrap_err();
		assert_eq!(err.kind(), WavErrorKind::Format);
		assert!(buffer.is_empty());
	}

	#[test]
	fn test_impossible_allocation_is_reported() {
		let err = SampleBuffer::try_alloc(usize::MAX).unwrap_err();
		assert_eq!(err.kind(), WavErrorKind::Allocation);
	}

	#[test]
	fn test_replacing_a_held_buffer() {
		let mut held = SampleBuffer::from(vec![1, 2, 3]);
		assert!(!held.is_empty());
		held = SampleBuffer::default();
		assert!(held.is_empty());
		assert_eq!(held.into_inner(), Vec::<i16>::new());
	}
}
