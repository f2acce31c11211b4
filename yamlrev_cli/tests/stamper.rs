mod common;

use clap::Parser;
use yamlrev_cli::StamperCli;
use yamlrev_core::AnyEmptyResult;

#[test]
fn stamper_substitutes_variables_from_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let stable = tmp.path().join("stable-status.txt");
	let volatile = tmp.path().join("volatile-status.txt");
	let output = tmp.path().join("out.txt");
	std::fs::write(&stable, "BUILD_USER alice\nBUILD_HOST ci-07\n")?;
	std::fs::write(&volatile, "BUILD_TIMESTAMP 1700000000\n")?;

	common::stamper_cmd()
		.arg("--format=Built by {BUILD_USER} on {BUILD_HOST} at {BUILD_TIMESTAMP} {UNKNOWN}")
		.arg("--stamp-info-file")
		.arg(&stable)
		.arg("--stamp-info-file")
		.arg(&volatile)
		.arg("--output")
		.arg(&output)
		.assert()
		.success();

	assert_eq!(
		std::fs::read_to_string(&output)?,
		"Built by alice on ci-07 at 1700000000 {UNKNOWN}"
	);

	Ok(())
}

#[test]
fn stamper_without_stamp_files_copies_format() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let output = tmp.path().join("out.txt");

	common::stamper_cmd()
		.arg("--format")
		.arg("{BUILD_USER}")
		.arg("--output")
		.arg(&output)
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&output)?, "{BUILD_USER}");

	Ok(())
}

#[test]
fn stamper_warns_about_duplicates_and_malformed_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let stable = tmp.path().join("stable-status.txt");
	let volatile = tmp.path().join("volatile-status.txt");
	let output = tmp.path().join("out.txt");
	std::fs::write(&stable, "BUILD_HOST ci-07\nNOSPACE\n")?;
	std::fs::write(&volatile, "BUILD_HOST ci-08\n")?;

	common::stamper_cmd()
		.arg("--format={BUILD_HOST}")
		.arg("--stamp-info-file")
		.arg(&stable)
		.arg("--stamp-info-file")
		.arg(&volatile)
		.arg("--output")
		.arg(&output)
		.assert()
		.success()
		.stderr(predicates::str::contains(
			r#"warning: duplicate value for key "BUILD_HOST": using "ci-08""#,
		))
		.stderr(predicates::str::contains("malformed line 2"));

	assert_eq!(std::fs::read_to_string(&output)?, "ci-08");

	Ok(())
}

#[test]
fn stamper_missing_stamp_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let output = tmp.path().join("out.txt");

	common::stamper_cmd()
		.arg("--format=x")
		.arg("--stamp-info-file")
		.arg(tmp.path().join("missing.txt"))
		.arg("--output")
		.arg(&output)
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("failed to open stamp file"));

	assert!(!output.exists());

	Ok(())
}

#[test]
fn stamper_requires_format_and_output() {
	assert!(StamperCli::try_parse_from(["stamper", "--output", "out.txt"]).is_err());
	assert!(StamperCli::try_parse_from(["stamper", "--format", "x"]).is_err());

	common::stamper_cmd()
		.arg("--format=x")
		.assert()
		.failure();
}

#[test]
fn stamper_rejects_empty_format_and_output() {
	assert!(StamperCli::try_parse_from(["stamper", "--format=", "--output=o"]).is_err());
	assert!(StamperCli::try_parse_from(["stamper", "--format=x", "--output="]).is_err());

	common::stamper_cmd()
		.args(["--format=", "--output=out.txt"])
		.assert()
		.failure()
		.code(2);
}

#[test]
fn stamper_collects_repeated_stamp_files() {
	let cli = StamperCli::try_parse_from([
		"stamper",
		"--format=f",
		"--output=o",
		"--stamp-info-file=a.txt",
		"--stamp-info-file=b.txt",
	])
	.unwrap();

	assert_eq!(cli.format, "f");
	assert_eq!(cli.stamp_info_files.len(), 2);
	assert_eq!(cli.stamp_info_files[1], std::path::PathBuf::from("b.txt"));
}
