pub mod extract;

pub use extract::{ChannelExtractor, extract_channel, split_channels};
