pub mod args;
pub mod error;
pub mod pipeline;

pub use args::Args;
pub use error::{CliError, CliResult};
pub use pipeline::{BatchPipeline, Output, Pipeline, is_batch_pattern, is_directory};
