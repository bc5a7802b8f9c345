use assert_cmd::Command;
use std::path::Path;

pub fn quotebook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.env_remove("QUOTEBOOK_ROOT");
    cmd.env_remove("QUOTEBOOK_SERVER_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize an empty quote book and load it with `quotes` as raw JSON
#[allow(dead_code)]
pub fn init_with_quotes(root: &Path, quotes_json: &str) {
    quotebook_cmd()
        .arg("init")
        .arg(root)
        .arg("--empty")
        .assert()
        .success();
    std::fs::write(root.join(".quotebook/quotes.json"), quotes_json).unwrap();
}

#[allow(dead_code)]
pub fn stored_quotes(root: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(root.join(".quotebook/quotes.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}
