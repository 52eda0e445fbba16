use std::process;

use crate::input::read_text;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a user settings file before anything reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(read_text(file), "Error: {}");
    die!(pali_core::settings::init_custom(content), "Error in {file}: {}");
    tracing::debug!(file, "custom settings installed");
}

pub fn settings_export() {
    print!("{}", pali_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_text(file), "Error: {}");
    let s = die!(
        pali_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.whole_word={}, search.case_sensitive={}, detect.sample_chars={}",
        s.search.whole_word, s.search.case_sensitive, s.detect.sample_chars
    );
}
