use assert_cmd::Command;

pub fn workjournal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("workjournal").unwrap();
    cmd.env_remove("WORKJOURNAL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
