use assert_cmd::Command;

pub fn rhiz_tag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rhiz-tag").unwrap();
    cmd.env_remove("RHIZ_TAG_CONFIG");
    cmd.env_remove("RHIZ_TAG_CLOCK");
    cmd.env_remove("RHIZ_TAG_SEED");
    cmd.env_remove("RUST_LOG");
    cmd
}
