use clap::Parser;
use yamlrev_cli::StamperCli;
use yamlrev_cli::exit_with_error;
use yamlrev_cli::init;
use yamlrev_cli::print_warning;
use yamlrev_core::ReverserResult;
use yamlrev_core::stamp::StampVariables;
use yamlrev_core::stamp::write_stamp_output;

fn main() {
	let args = StamperCli::parse();
	init();

	if let Err(error) = run(&args) {
		exit_with_error(error);
	}
}

fn run(args: &StamperCli) -> ReverserResult<()> {
	let (variables, warnings) = StampVariables::load(&args.stamp_info_files)?;
	for warning in &warnings {
		print_warning(warning);
	}

	let content = variables.substitute(&args.format);
	write_stamp_output(&args.output, &content)?;
	tracing::debug!(
		output = %args.output.display(),
		variables = variables.len(),
		"wrote stamp output"
	);

	Ok(())
}
