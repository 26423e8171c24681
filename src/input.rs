use crate::error::{Result, WordFreqError};
use log::debug;
use std::fs;
use std::path::Path;

/// Read a text file, decoding it as UTF-8 or, failing that, Latin-1.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(WordFreqError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{} is not valid UTF-8 ({e}), reading as Latin-1", path.display());
            Ok(decode_latin1(e.as_bytes()))
        }
    }
}

// every Latin-1 byte is the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// The text to analyse: `text` itself, or the contents of the file it names.
pub fn load(text: &str, is_file: bool) -> Result<String> {
    if is_file {
        read_text(Path::new(text))
    } else {
        Ok(text.to_string())
    }
}
