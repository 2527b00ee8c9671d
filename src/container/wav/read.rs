use crate::core::header::HEADER_SIZE;
use crate::core::{SampleBuffer, WavHeader};
use crate::io::{ReadPrimitives, WavError, WavResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

const READ_CHUNK_SIZE: usize = 8192;

pub fn read<P: AsRef<Path>>(path: P) -> WavResult<(WavHeader, SampleBuffer)> {
	let path = path.as_ref();
	read_file(path).map_err(|e| e.in_file("read", path))
}

fn read_file(path: &Path) -> WavResult<(WavHeader, SampleBuffer)> {
	let file = File::open(path).map_err(WavError::Io)?;
	debug!(path = %path.display(), "reading wav");
	WavReader::new(BufReader::new(file))?.read_samples()
}

pub struct WavReader<R: Read> {
	reader: R,
	header: WavHeader,
}

impl<R: Read> WavReader<R> {
	pub fn new(mut reader: R) -> WavResult<Self> {
		let header = Self::read_header(&mut reader)?;
		Ok(Self { reader, header })
	}

	pub fn header(&self) -> WavHeader {
		self.header
	}

	fn read_header(reader: &mut R) -> WavResult<WavHeader> {
		let mut buf = [0u8; HEADER_SIZE];
		reader.read_exact_or_format(&mut buf, "wav header")?;

		let header = WavHeader::decode(&buf)?;
		header.validate()?;

		debug!(
			channels = header.channels,
			sample_rate = header.sample_rate,
			data_size = header.data_size,
			"decoded wav header"
		);

		Ok(header)
	}

	pub fn read_samples(mut self) -> WavResult<(WavHeader, SampleBuffer)> {
		let len = self.header.data_size as usize;
		let mut samples = SampleBuffer::default();
		let mut chunk = [0u8; READ_CHUNK_SIZE];
		let mut remaining = len;

		// grow only as bytes arrive, so an oversized data_size fails on the short read
		while remaining > 0 {
			let want = remaining.min(READ_CHUNK_SIZE);
			self.reader.read_exact_or_format(&mut chunk[..want], "sample data")?;
			samples.extend_from_le_bytes(&chunk[..want])?;
			remaining -= want;
		}
		trace!(bytes = len, "read sample data");

		Ok((self.header, samples))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::container::WavFormat;
	use crate::io::WavErrorKind;

	fn stereo_bytes(frames: usize) -> Vec<u8> {
		let header = WavHeader::pcm16(2, 8000, frames).unwrap();
		let mut out = Vec::new();
		crate::container::WavWriter::write_header(&mut out, &header).unwrap();
		for i in 0..frames as i16 {
			out.extend_from_slice(&i.to_le_bytes());
			out.extend_from_slice(&(-i).to_le_bytes());
		}
		out
	}

	#[test]
	fn test_reads_header_and_samples() {
		let bytes = stereo_bytes(3);
		let reader = WavReader::new(&bytes[..]).unwrap();
		assert_eq!(reader.header().format(), WavFormat { channels: 2, sample_rate: 8000, bit_depth: 16 });

		let (header, samples) = reader.read_samples().unwrap();
		assert_eq!(header.data_size, 12);
		assert_eq!(samples.samples(), &[0, 0, 1, -1, 2, -2]);
	}

	#[test]
	fn test_short_header() {
		let bytes = stereo_bytes(1);
		let err = WavReader::new(&bytes[..20]).err().unwrap();
		assert_eq!(err.kind(), WavErrorKind::Format);
	}

	#[test]
	fn test_truncated_payload() {
		let bytes = stereo_bytes(4);
		let reader = WavReader::new(&bytes[..bytes.len() - 3]).unwrap();
		assert_eq!(reader.read_samples().unwrap_err().kind(), WavErrorKind::Format);
	}

	#[test]
	fn test_oversized_data_size_fails_on_short_read() {
		let header = WavHeader::pcm16(1, 8000, 0).unwrap().with_data_size(1_000_000_000).unwrap();
		let mut bytes = Vec::new();
		crate::container::WavWriter::write_header(&mut bytes, &header).unwrap();
		bytes.extend_from_slice(&[1, 0, 2, 0]);

		let reader = WavReader::new(&bytes[..]).unwrap();
		assert_eq!(reader.read_samples().unwrap_err().kind(), WavErrorKind::Format);
	}

	#[test]
	fn test_payload_spanning_several_chunks() {
		let bytes = stereo_bytes(READ_CHUNK_SIZE);
		let (header, samples) = WavReader::new(&bytes[..]).unwrap().read_samples().unwrap();
		assert_eq!(samples.len(), READ_CHUNK_SIZE * 2);
		assert_eq!(samples.byte_len(), header.data_size as usize);
		assert_eq!(samples.samples()[READ_CHUNK_SIZE * 2 - 2], (READ_CHUNK_SIZE - 1) as i16);
	}

	#[test]
	fn test_wrong_magic_stops_before_payload() {
		let mut bytes = stereo_bytes(2);
		bytes[0..4].copy_from_slice(b"OggS");
		assert_eq!(WavReader::new(&bytes[..]).err().unwrap().kind(), WavErrorKind::NotWav);

		let mut bytes = stereo_bytes(2);
		bytes[8..12].copy_from_slice(b"AVI ");
		assert_eq!(WavReader::new(&bytes[..]).err().unwrap().kind(), WavErrorKind::NotWav);
	}

	#[test]
	fn test_non_pcm_codec() {
		let mut bytes = stereo_bytes(2);
		bytes[20..22].copy_from_slice(&3u16.to_le_bytes());
		let err = WavReader::new(&bytes[..]).err().unwrap();
		assert_eq!(err.kind(), WavErrorKind::UnsupportedCodec);
	}
}
