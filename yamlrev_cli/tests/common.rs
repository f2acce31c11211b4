use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

#[allow(dead_code)]
pub fn reverser_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("reverser"));
	cmd.env("NO_COLOR", "1").env_remove("YAMLREV_LOG");
	cmd
}

#[allow(dead_code)]
pub fn stamper_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("stamper"));
	cmd.env("NO_COLOR", "1").env_remove("YAMLREV_LOG");
	cmd
}
