#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// psplog with a private, non-existent configuration file and no colors,
/// so the user's own settings never leak into a test.
pub fn psplog(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("psplog");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--config", &config_path(dir).to_string_lossy()]);
    cmd
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("psplog.conf")
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Output file path inside `dir` (not created).
pub fn out_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().to_string()
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("read output")
}

pub const TIME_CSV: &str = "\
Date,Start,End,Phase,Comment,Name
1/6/2024,13:00,14:30,code,second day,Al
1/5/2024,9:00,10:15,design,first day,Bo
1/5/2024,8:00,8:45,planning,kickoff,
";

pub const DEFECT_CSV: &str = "\
Date,Type,Fix Time,Comment,Name
1/7/2024,logic,12,off by one,Al
1/5/2024,syntax,2,missing semicolon,Bo
";

pub const OBJECT_CSV: &str = "\
Name,Type,New/Reused,Lines,Base,Added,Comments
Parser,module,new,120,,,hand written
Lexer,module,reused,,300,25,
";
