mod common;

use clap::Parser;
use rstest::rstest;
use similar_asserts::assert_eq;
use yamlrev_cli::ReverserCli;
use yamlrev_core::AnyEmptyResult;
use yamlrev_core::AnyResult;
use yamlrev_core::decode_all;

fn run_reverser(input: &str) -> AnyResult<Vec<u8>> {
	let output = common::reverser_cmd()
		.write_stdin(input)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	Ok(output)
}

#[test]
fn reverser_reverses_documents() -> AnyEmptyResult {
	let stdout = run_reverser("a: 1\n---\nb: 2\n---\nc: 3\n")?;

	let actual = decode_all(&stdout)?;
	let expected = decode_all(b"c: 3\n---\nb: 2\n---\na: 1\n")?;
	assert_eq!(actual, expected);

	let text = String::from_utf8(stdout)?;
	assert_eq!(text.lines().filter(|line| *line == "---").count(), 2);

	Ok(())
}

#[rstest]
#[case::empty("")]
#[case::blank_lines("\n\n   \n")]
#[case::comments("# generated\n")]
fn reverser_empty_input_produces_empty_output(#[case] input: &str) -> AnyEmptyResult {
	let stdout = run_reverser(input)?;
	assert!(stdout.is_empty());

	Ok(())
}

#[test]
fn reverser_single_document_is_unchanged() -> AnyEmptyResult {
	let input = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: demo\ndata:\n  key: value\n";
	let stdout = run_reverser(input)?;

	assert_eq!(decode_all(&stdout)?, decode_all(input.as_bytes())?);

	Ok(())
}

#[test]
fn reverser_twice_restores_original_documents() -> AnyEmptyResult {
	let input = "\
apiVersion: v1
kind: Namespace
metadata:
  name: web
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: web
spec:
  replicas: 2
  template:
    spec:
      containers:
        - name: web
          image: nginx:1.27
          ports: [{containerPort: 80}]
---
- just
- a
- list
";
	let once = run_reverser(input)?;
	let twice = run_reverser(&String::from_utf8(once)?)?;

	assert_eq!(decode_all(&twice)?, decode_all(input.as_bytes())?);

	Ok(())
}

#[test]
fn reverser_malformed_document_fails_without_output() {
	common::reverser_cmd()
		.write_stdin("a: 1\n---\nb: [1, 2\n---\nc: 3\n")
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("document 2"));
}

#[test]
fn reverser_reports_diagnostic_code() {
	common::reverser_cmd()
		.write_stdin("key: [unclosed\n")
		.assert()
		.failure()
		.stderr(predicates::str::contains("yamlrev::decode"));
}

#[test]
fn reverser_rejects_arguments() {
	common::reverser_cmd()
		.arg("input.yaml")
		.assert()
		.failure()
		.stdout("");
}

#[test]
fn reverser_help_describes_tool() {
	common::reverser_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicates::str::contains("reverses their order"));
}

#[test]
fn reverser_cli_takes_no_flags() {
	assert!(ReverserCli::try_parse_from(["reverser"]).is_ok());
	assert!(ReverserCli::try_parse_from(["reverser", "--verbose"]).is_err());
}
