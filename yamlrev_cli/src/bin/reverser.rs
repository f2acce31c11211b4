use std::io;

use clap::Parser;
use yamlrev_cli::ReverserCli;
use yamlrev_cli::exit_with_error;
use yamlrev_cli::init;
use yamlrev_cli::print_warning;
use yamlrev_core::reverse_stream;

fn main() {
	let ReverserCli {} = ReverserCli::parse();
	init();

	let stdin = io::stdin().lock();
	let stdout = io::stdout().lock();

	match reverse_stream(stdin, stdout) {
		Ok(report) => {
			// A failed close does not change the exit status.
			if let Some(error) = report.flush_error {
				print_warning(error);
			}
			tracing::debug!(documents = report.documents, "reversed stream");
		}
		Err(error) => exit_with_error(error),
	}
}
