use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type WavResult<T> = Result<T, WavError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavErrorKind {
	Io,
	Format,
	NotWav,
	UnsupportedCodec,
	EmptyBuffer,
	InvalidChannel,
	Allocation,
	DivisionByZero,
	Write,
}

impl fmt::Display for WavErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			WavErrorKind::Io => "i/o error",
			WavErrorKind::Format => "format error",
			WavErrorKind::NotWav => "not a wav file",
			WavErrorKind::UnsupportedCodec => "unsupported codec",
			WavErrorKind::EmptyBuffer => "empty buffer",
			WavErrorKind::InvalidChannel => "invalid channel",
			WavErrorKind::Allocation => "allocation failure",
			WavErrorKind::DivisionByZero => "division by zero",
			WavErrorKind::Write => "write error",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Error)]
pub enum WavError {
	#[error("cannot {op} '{}': {source}", path.display())]
	File {
		op: &'static str,
		path: PathBuf,
		#[source]
		source: Box<WavError>,
	},

	#[error("{0}")]
	Io(#[source] std::io::Error),

	#[error("malformed data: {0}")]
	Format(String),

	#[error("missing {expected:?} marker, found {found:?}")]
	NotWav { expected: &'static str, found: String },

	#[error("audio format {0} is not supported, only PCM (1)")]
	UnsupportedCodec(u16),

	#[error("{0}: sample buffer is empty")]
	EmptyBuffer(&'static str),

	#[error("channel {channel} does not exist, source has {channels} channel(s)")]
	InvalidChannel { channel: usize, channels: u16 },

	#[error("cannot allocate {0} bytes for samples")]
	Allocation(usize),

	#[error("byte rate is zero")]
	DivisionByZero,

	#[error("write failed: {0}")]
	Write(#[source] std::io::Error),
}

impl WavError {
	pub fn format(message: impl Into<String>) -> Self {
		WavError::Format(message.into())
	}

	pub fn kind(&self) -> WavErrorKind {
		match self {
			WavError::File { source, .. } => source.kind(),
			WavError::Io(_) => WavErrorKind::Io,
			WavError::Format(_) => WavErrorKind::Format,
			WavError::NotWav { .. } => WavErrorKind::NotWav,
			WavError::UnsupportedCodec(_) => WavErrorKind::UnsupportedCodec,
			WavError::EmptyBuffer(_) => WavErrorKind::EmptyBuffer,
			WavError::InvalidChannel { .. } => WavErrorKind::InvalidChannel,
			WavError::Allocation(_) => WavErrorKind::Allocation,
			WavError::DivisionByZero => WavErrorKind::DivisionByZero,
			WavError::Write(_) => WavErrorKind::Write,
		}
	}

	// an already attached context wins
	pub fn in_file(self, op: &'static str, path: impl Into<PathBuf>) -> Self {
		match self {
			WavError::File { .. } => self,
			other => WavError::File { op, path: path.into(), source: Box::new(other) },
		}
	}

	pub(crate) fn from_read(err: std::io::Error, what: &str) -> Self {
		if err.kind() == std::io::ErrorKind::UnexpectedEof {
			WavError::Format(format!("unexpected end of file while reading {}", what))
		} else {
			WavError::Io(err)
		}
	}
}
