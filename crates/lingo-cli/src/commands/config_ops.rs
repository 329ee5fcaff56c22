use std::fs;

use lingo_core::settings::{default_toml, parse_settings_toml};

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: word_lists.french={}, word_lists.english={}, word_lists.spanish={}, report.decimals={}",
        s.word_lists.french.display(),
        s.word_lists.english.display(),
        s.word_lists.spanish.display(),
        s.report.decimals
    );
}
