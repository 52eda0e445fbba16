use std::process;
use std::sync::Arc;

use pali_core::script::Script;
use pali_core::settings::settings;
use pali_core::translit::ConvertOptions;
use pali_core::unicode::{detect_script, normalize_niggahita, Niggahita};
use pali_session::{NullHost, ViewerSession};

use crate::input::{read_document, read_text, InputFormat};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Flags layered over `[conversion]` from the settings; a flag can only
/// switch an option on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertFlags {
    pub numbers: bool,
    pub alternate: bool,
    pub native_period: bool,
}

impl ConvertFlags {
    fn options(self) -> ConvertOptions {
        let base = settings().conversion;
        ConvertOptions {
            localize_numbers: base.localize_numbers || self.numbers,
            alternate_glyphs: base.alternate_glyphs || self.alternate,
            native_period: base.native_period || self.native_period,
        }
    }
}

pub fn convert_cmd(script: &str, file: &str, flags: ConvertFlags) {
    let script: Script = die!(script.parse(), "Error: {}");
    let (doc, format) = die!(read_document(file), "Error: {}");
    let mut session = ViewerSession::new(Arc::new(NullHost), doc);
    die!(session.convert(script, flags.options()), "Error: {}");
    match format {
        InputFormat::Json => {
            let json = die!(session.document().to_json(), "Error: {}");
            println!("{json}");
        }
        InputFormat::PlainText => println!("{}", session.document().plain_text()),
    }
}

pub fn detect_cmd(file: &str, sample: Option<usize>) {
    let text = die!(read_text(file), "Error: {}");
    let sample = sample.unwrap_or(settings().detect.sample_chars);
    match detect_script(&text, sample) {
        Some(script) => println!("{script}"),
        None => println!("UNKNOWN"),
    }
}

pub fn niggahita_cmd(file: &str, to: Niggahita) {
    let text = die!(read_text(file), "Error: {}");
    print!("{}", normalize_niggahita(&text, to));
}
