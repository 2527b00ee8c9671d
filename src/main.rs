use tracing_subscriber::EnvFilter;
use wavsplit::cli::{Args, BatchPipeline, CliResult, Output, Pipeline, is_batch_pattern, is_directory};
use wavsplit::show::Show;

fn main() {
	let args = Args::parse();
	init_tracing(&args);

	match run(&args) {
		Ok(written) => {
			for output in written {
				println!("ok: {} -> {}", args.input, output.display());
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}

fn init_tracing(args: &Args) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: &Args) -> CliResult<Vec<std::path::PathBuf>> {
	if args.show {
		Show::new(&args.input).run()?;
		return Ok(Vec::new());
	}

	if is_batch_pattern(&args.input) {
		let output_dir = args.output.clone().unwrap_or_else(|| "out".to_string());
		return BatchPipeline::new(args.input.clone(), output_dir, args.channel, args.count).run();
	}

	let output = match &args.output {
		Some(o) if is_directory(o) || args.channel.is_none() => Output::Dir(o.into()),
		Some(o) => Output::File(o.into()),
		None => Output::Beside,
	};

	Pipeline::new(&args.input, output, args.channel, args.count).run()
}
