use crate::core::{SampleBuffer, WavHeader};
use crate::io::{WavError, WavResult, WritePrimitives};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Rejected payloads never create the file. Flush and sync failures are write errors.
pub fn write<P: AsRef<Path>>(path: P, header: &WavHeader, buffer: &SampleBuffer) -> WavResult<()> {
	let path = path.as_ref();
	write_file(path, header, buffer).map_err(|e| e.in_file("write", path))
}

fn write_file(path: &Path, header: &WavHeader, buffer: &SampleBuffer) -> WavResult<()> {
	check_payload(header, buffer)?;

	let file = File::create(path).map_err(WavError::Io)?;
	debug!(path = %path.display(), channels = header.channels, "writing wav");

	let mut writer = WavWriter::new(BufWriter::new(file));
	writer.write(header, buffer)?;

	let file = writer.into_inner().into_inner().map_err(|e| WavError::Write(e.into_error()))?;
	file.sync_all().map_err(WavError::Write)
}

fn check_payload(header: &WavHeader, buffer: &SampleBuffer) -> WavResult<()> {
	if buffer.is_empty() {
		return Err(WavError::EmptyBuffer("nothing to write"));
	}

	header.validate()?;

	if buffer.byte_len() != header.data_size as usize {
		return Err(WavError::format(format!(
			"header declares {} data bytes but buffer holds {}",
			header.data_size,
			buffer.byte_len()
		)));
	}

	Ok(())
}

pub struct WavWriter<W: Write> {
	writer: W,
}

impl<W: Write> WavWriter<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn write(&mut self, header: &WavHeader, buffer: &SampleBuffer) -> WavResult<()> {
		check_payload(header, buffer)?;

		Self::write_header(&mut self.writer, header)?;
		self.writer.write_bytes(&buffer.to_le_bytes())?;
		trace!(bytes = buffer.byte_len(), "wrote sample data");

		self.writer.flush().map_err(WavError::Write)
	}

	pub fn write_header(writer: &mut W, header: &WavHeader) -> WavResult<()> {
		writer.write_bytes(&header.encode())
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}
