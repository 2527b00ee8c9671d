use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wavsplit")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input file or glob pattern")]
	pub input: String,

	#[arg(short, long, value_name = "FILE", help = "Output file or directory")]
	pub output: Option<String>,

	#[arg(short, long, value_name = "N", help = "Channel to extract, starting at 0 (default: all)")]
	pub channel: Option<usize>,

	#[arg(
		short = 'n',
		long,
		value_name = "FRAMES",
		default_value_t = -1,
		allow_negative_numbers = true,
		help = "Maximum frames to extract, negative for all"
	)]
	pub count: i64,

	#[arg(long, help = "Show header information instead of extracting")]
	pub show: bool,

	#[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
	pub verbose: u8,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn log_filter(&self) -> &'static str {
		match self.verbose {
			0 => "wavsplit=warn",
			1 => "wavsplit=info",
			_ => "wavsplit=debug",
		}
	}
}
