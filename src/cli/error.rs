use crate::io::WavError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Wav(#[from] WavError),

	#[error("invalid glob pattern: {0}")]
	Pattern(#[from] glob::PatternError),

	#[error("no files matching pattern: {0}")]
	NoMatches(String),

	#[error("cannot create output directory '{path}': {source}")]
	OutputDir {
		path: String,
		#[source]
		source: std::io::Error,
	},
}
