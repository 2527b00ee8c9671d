use crate::core::{SampleBuffer, WavHeader};
use crate::io::{WavError, WavResult};
use tracing::debug;

/// `limit` caps the frames copied; `None`, or a cap above the frames available, copies all of them.
pub fn extract_channel(
	header: &WavHeader,
	buffer: &SampleBuffer,
	channel: usize,
	limit: Option<usize>,
) -> WavResult<(WavHeader, SampleBuffer)> {
	if buffer.is_empty() {
		return Err(WavError::EmptyBuffer("no source samples to extract from"));
	}
	if channel >= header.channels as usize {
		return Err(WavError::InvalidChannel { channel, channels: header.channels });
	}

	header.validate()?;
	if buffer.byte_len() != header.data_size as usize {
		return Err(WavError::format(format!(
			"header declares {} data bytes but buffer holds {}",
			header.data_size,
			buffer.byte_len()
		)));
	}

	let available = header.frames();
	let count = match limit {
		Some(n) if n <= available => n,
		_ => available,
	};

	let format = header.format();
	let data_size = (count * format.bytes_per_sample()) as u32;
	let mut mono = *header;
	mono.channels = 1;
	mono.block_align = format.bytes_per_sample() as u16;
	mono.byte_rate = mono.sample_rate * mono.block_align as u32;
	let mono = mono.with_data_size(data_size)?;

	debug!(channel, frames = count, available, "extracting channel");

	let stride = format.channels as usize;
	let mut samples = SampleBuffer::try_alloc(count)?;
	samples.extend(buffer.samples().iter().skip(channel).step_by(stride).take(count));

	Ok((mono, SampleBuffer::new(samples)))
}

pub fn split_channels(
	header: &WavHeader,
	buffer: &SampleBuffer,
	limit: Option<usize>,
) -> WavResult<Vec<(WavHeader, SampleBuffer)>> {
	(0..header.channels as usize)
		.map(|channel| ChannelExtractor::new(channel).with_limit(limit).apply(header, buffer))
		.collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelExtractor {
	channel: usize,
	limit: Option<usize>,
}

impl ChannelExtractor {
	pub fn new(channel: usize) -> Self {
		Self { channel, limit: None }
	}

	// negative counts mean every frame
	pub fn with_count(mut self, count: i64) -> Self {
		self.limit = usize::try_from(count).ok();
		self
	}

	pub fn with_limit(mut self, limit: Option<usize>) -> Self {
		self.limit = limit;
		self
	}

	pub fn channel(&self) -> usize {
		self.channel
	}

	pub fn apply(&self, header: &WavHeader, buffer: &SampleBuffer) -> WavResult<(WavHeader, SampleBuffer)> {
		extract_channel(header, buffer, self.channel, self.limit)
	}
}
