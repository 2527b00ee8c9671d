use super::WavHeader;
use crate::io::{WavError, WavResult};

/// Rounds down.
pub fn duration_secs(header: &WavHeader) -> WavResult<u32> {
	if header.byte_rate == 0 {
		return Err(WavError::DivisionByZero);
	}
	Ok(header.data_size / header.byte_rate)
}

pub fn duration_precise(header: &WavHeader) -> WavResult<f64> {
	if header.byte_rate == 0 {
		return Err(WavError::DivisionByZero);
	}
	Ok(header.data_size as f64 / header.byte_rate as f64)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::WavErrorKind;

	fn header(data_size: u32, byte_rate: u32) -> WavHeader {
		let mut header = WavHeader::pcm16(1, 22050, 0).unwrap();
		header.data_size = data_size;
		header.byte_rate = byte_rate;
		header
	}

	#[test]
	fn test_two_seconds() {
		assert_eq!(duration_secs(&header(88200, 44100)).unwrap(), 2);
	}

	#[test]
	fn test_rounds_down() {
		assert_eq!(duration_secs(&header(88199, 44100)).unwrap(), 1);
		assert_eq!(duration_secs(&header(100, 44100)).unwrap(), 0);
		let precise = duration_precise(&header(66150, 44100)).unwrap();
		assert!((precise - 1.5).abs() < 1e-9);
	}

	#[test]
	fn test_zero_byte_rate() {
		let header = header(88200, 0);
		assert_eq!(duration_secs(&header).unwrap_err().kind(), WavErrorKind::DivisionByZero);
		assert_eq!(header.duration_secs().unwrap_err().kind(), WavErrorKind::DivisionByZero);
		assert_eq!(duration_precise(&header).unwrap_err().kind(), WavErrorKind::DivisionByZero);
	}
}
