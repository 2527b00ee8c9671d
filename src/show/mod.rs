use crate::container::WavReader;
use crate::core::{WavHeader, duration_precise};
use crate::io::{WavError, WavResult};
use prettytable::{Table, row};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub struct Show {
	input_path: PathBuf,
}

impl Show {
	pub fn new(input_path: impl Into<PathBuf>) -> Self {
		Self { input_path: input_path.into() }
	}

	pub fn run(&self) -> WavResult<()> {
		let header = self.analyze()?;
		print!("{}", render(&self.input_path, &header));
		Ok(())
	}

	fn analyze(&self) -> WavResult<WavHeader> {
		let path = self.input_path.as_path();
		let open = || -> WavResult<WavHeader> {
			let file = File::open(path).map_err(WavError::Io)?;
			Ok(WavReader::new(BufReader::new(file))?.header())
		};
		open().map_err(|e| e.in_file("read", path))
	}
}

pub fn render(path: &Path, header: &WavHeader) -> String {
	let mut table = Table::new();
	table.set_titles(row!["field", "value"]);

	table.add_row(row!["file", path.display()]);
	table.add_row(row!["riff id", String::from_utf8_lossy(&header.file_type_id)]);
	table.add_row(row!["riff size", header.file_size]);
	table.add_row(row!["wave id", String::from_utf8_lossy(&header.file_format_id)]);
	table.add_row(row!["fmt id", String::from_utf8_lossy(&header.format_chunk_id)]);
	table.add_row(row!["fmt size", header.fmt_chunk_size]);
	table.add_row(row!["audio format", header.audio_format]);
	table.add_row(row!["channels", header.channels]);
	table.add_row(row!["sample rate", format!("{} Hz", header.sample_rate)]);
	table.add_row(row!["byte rate", header.byte_rate]);
	table.add_row(row!["block align", header.block_align]);
	table.add_row(row!["bits per sample", header.bits_per_sample]);
	table.add_row(row!["data id", String::from_utf8_lossy(&header.data_chunk_id)]);
	table.add_row(row!["data size", header.data_size]);
	table.add_row(row!["frames", header.frames()]);

	let format = header.format();
	table.add_row(row![
		"layout",
		format!(
			"{} ch x {}-bit, {} bytes/frame",
			format.channels,
			format.bit_depth,
			format.bytes_per_frame()
		)
	]);

	let duration = match (header.duration_secs(), duration_precise(header)) {
		(Ok(secs), Ok(precise)) => format!("{} s ({:.3} s)", secs, precise),
		_ => "n/a".to_string(),
	};
	table.add_row(row!["duration", duration]);

	table.to_string()
}
