use super::{CliError, CliResult};
use crate::container::wav;
use crate::transform::ChannelExtractor;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
	/// Exactly this file; only meaningful for a single channel.
	File(PathBuf),
	/// `<dir>/<stem>_s<channel>.wav`
	Dir(PathBuf),
	/// `<stem>_s<channel>.wav` next to the input.
	Beside,
}

pub struct Pipeline {
	input_path: PathBuf,
	output: Output,
	channel: Option<usize>,
	count: i64,
}

impl Pipeline {
	pub fn new(input_path: impl Into<PathBuf>, output: Output, channel: Option<usize>, count: i64) -> Self {
		Self { input_path: input_path.into(), output, channel, count }
	}

	pub fn run(&self) -> CliResult<Vec<PathBuf>> {
		let (header, samples) = wav::read(&self.input_path)?;

		let channels: Vec<usize> = match self.channel {
			Some(channel) => vec![channel],
			None => (0..header.channels as usize).collect(),
		};

		let mut outputs = Vec::with_capacity(channels.len());
		for channel in channels {
			let extractor = ChannelExtractor::new(channel).with_count(self.count);
			outputs.push((extractor.channel(), extractor.apply(&header, &samples)?));
		}
		drop(samples);

		let mut written = Vec::with_capacity(outputs.len());
		for (channel, (mono, buffer)) in outputs {
			let result = self.output_path(channel).and_then(|path| {
				wav::write(&path, &mono, &buffer)?;
				Ok(path)
			});

			match result {
				Ok(path) => {
					info!(channel, path = %path.display(), "wrote channel");
					written.push(path);
				}
				Err(e) => {
					if !written.is_empty() {
						warn!(channel, kept = ?written, "channel failed, earlier channel files are left in place");
					}
					return Err(e);
				}
			}
		}

		Ok(written)
	}

	fn output_path(&self, channel: usize) -> CliResult<PathBuf> {
		let dir = match &self.output {
			Output::File(path) if self.channel.is_some() => return Ok(path.clone()),
			Output::File(dir) | Output::Dir(dir) => dir.clone(),
			Output::Beside => self.input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
		};

		if !dir.as_os_str().is_empty() {
			std::fs::create_dir_all(&dir).map_err(|source| CliError::OutputDir {
				path: dir.display().to_string(),
				source,
			})?;
		}

		Ok(dir.join(channel_file_name(&self.input_path, channel)))
	}
}

/// `mozart.wav` channel 1 becomes `mozart_s1.wav`.
pub fn channel_file_name(input: &Path, channel: usize) -> String {
	let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
	format!("{}_s{}.wav", stem, channel)
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: PathBuf,
	channel: Option<usize>,
	count: i64,
}

impl BatchPipeline {
	pub fn new(
		input_pattern: String,
		output_dir: impl Into<PathBuf>,
		channel: Option<usize>,
		count: i64,
	) -> Self {
		Self { input_pattern, output_dir: output_dir.into(), channel, count }
	}

	pub fn run(&self) -> CliResult<Vec<PathBuf>> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(CliError::NoMatches(self.input_pattern.clone()));
		}

		let mut written = Vec::new();
		let mut seen = HashSet::new();
		for input_path in files {
			info!(path = %input_path.display(), "processing");
			let pipeline =
				Pipeline::new(&input_path, Output::Dir(self.output_dir.clone()), self.channel, self.count);

			for output in pipeline.run()? {
				if !seen.insert(output.clone()) {
					warn!(
						input = %input_path.display(),
						output = %output.display(),
						"output overwrote one from an earlier input with the same name"
					);
				}
				written.push(output);
			}
		}

		Ok(written)
	}

	fn expand_glob(&self) -> CliResult<Vec<PathBuf>> {
		let mut files = Vec::new();

		if !is_batch_pattern(&self.input_pattern) {
			files.push(PathBuf::from(&self.input_pattern));
			return Ok(files);
		}

		for entry in glob::glob(&self.input_pattern)? {
			match entry {
				Ok(path) if path.is_file() => files.push(path),
				Ok(_) => {}
				Err(e) => warn!("skipping unreadable entry: {}", e),
			}
		}

		Ok(files)
	}
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_channel_file_name() {
		assert_eq!(channel_file_name(Path::new("sound/mozart.wav"), 1), "mozart_s1.wav");
		assert_eq!(channel_file_name(Path::new("take"), 0), "take_s0.wav");
	}

	#[test]
	fn test_single_channel_output_paths() {
		let single = Pipeline::new("a/song.wav", Output::File("x.wav".into()), Some(1), -1);
		assert_eq!(single.output_path(1).unwrap(), PathBuf::from("x.wav"));

		let beside = Pipeline::new("song.wav", Output::Beside, Some(0), -1);
		assert_eq!(beside.output_path(0).unwrap(), PathBuf::from("song_s0.wav"));
	}

	#[test]
	fn test_batch_pattern() {
		assert!(is_batch_pattern("sounds/*.wav"));
		assert!(!is_batch_pattern("sounds/a.wav"));
	}
}
