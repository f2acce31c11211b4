use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use yamlrev_core::ReverserError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "YAMLREV_LOG";

/// Exit status used for every fatal error.
pub const FAILURE_EXIT_CODE: i32 = 1;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

#[derive(Parser)]
#[command(
	name = "reverser",
	author,
	version,
	about = "Reverse the order of the documents in a multi-document YAML stream.",
	long_about = "Reads every YAML document from standard input, reverses their order and \
	              writes them to standard output separated by `---`.\n\nThe whole input is \
	              decoded before anything is written, so malformed input never produces \
	              partial output.\n\nExample:\n  kubectl get -o yaml ... | reverser > \
	              reversed.yaml"
)]
pub struct ReverserCli {}

#[derive(Parser)]
#[command(
	name = "stamper",
	author,
	version,
	about = "Substitute build stamp variables into a format string.",
	after_help = "Example:\n  stamper --format=\"Built by {BUILD_USER} on {BUILD_HOST}\" \
	              --stamp-info-file=bazel-out/stable-status.txt \
	              --stamp-info-file=bazel-out/volatile-status.txt --output=out.txt"
)]
pub struct StamperCli {
	/// The format string containing stamp variables (e.g. `{BUILD_USER}`).
	#[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
	pub format: String,

	/// The file into which the result is written.
	#[arg(long)]
	pub output: PathBuf,

	/// A file of `KEY VALUE` lines to read substitutions from. May be given
	/// multiple times; later files override earlier ones.
	#[arg(long = "stamp-info-file", value_name = "FILE")]
	pub stamp_info_files: Vec<PathBuf>,
}

/// Whether colored output is allowed. Respects `NO_COLOR`.
pub fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Set up colors, the diagnostic renderer and the stderr logger for a
/// binary.
pub fn init() {
	let use_color = std::env::var_os("NO_COLOR").is_none();
	USE_COLOR.store(use_color, Ordering::Relaxed);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.try_init()
		.ok();
}

/// Print a warning to stderr regardless of the log filter.
pub fn print_warning(message: impl std::fmt::Display) {
	let label = "warning:";
	if color_enabled() {
		eprintln!("{} {message}", label.yellow());
	} else {
		eprintln!("{label} {message}");
	}
}

/// Render an error with its diagnostic code and help text, then exit.
pub fn exit_with_error(error: ReverserError) -> ! {
	let report: miette::Report = error.into();
	eprintln!("{report:?}");
	std::process::exit(FAILURE_EXIT_CODE);
}
