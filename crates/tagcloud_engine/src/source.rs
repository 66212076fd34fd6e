use std::fs;
use std::io;
use std::path::Path;

use chardetng::EncodingDetector;
use cloud_logging::cloud_debug;
use encoding_rs::Encoding;
use thiserror::Error;

/// Source text decoded to UTF-8, with the encoding it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path} as {encoding}")]
    Decode { path: String, encoding: String },
}

/// Reads a whole text file into memory, decoding BOM-first, then as UTF-8
/// when the bytes are valid UTF-8, with a chardetng guess as the fallback,
/// so non-UTF-8 sources still tokenize.
pub fn load_text(path: &Path) -> Result<SourceText, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let encoding = sniff_encoding(&bytes);
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(SourceError::Decode {
            path: path.display().to_string(),
            encoding: encoding.name().to_string(),
        });
    }

    cloud_debug!("Decoded {:?} as {}", path, encoding.name());
    Ok(SourceText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    // chardetng labels plain ASCII as windows-1252; prefer UTF-8 whenever
    // the bytes already are.
    if std::str::from_utf8(bytes).is_ok() {
        return encoding_rs::UTF_8;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
