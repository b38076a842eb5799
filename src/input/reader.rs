use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::EsqlError;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// File extensions accepted as source text.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["java", "sql"];

pub struct InputReader;

impl InputReader {
    /// Reads source text from `file_path`, or from stdin when `None`.
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    pub fn read_file(path: &Path) -> Result<String> {
        check_extension(path)?;

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        check_size(metadata.len() as usize)?;

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        decode(bytes)
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len())?;
        }

        decode(buffer)
    }
}

fn check_extension(path: &Path) -> Result<(), EsqlError> {
    let accepted = path.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
        ACCEPTED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    });

    if accepted {
        Ok(())
    } else {
        Err(EsqlError::Validation(format!(
            "Unsupported file: {}\n\nOnly .java and .sql files are accepted.",
            path.display()
        )))
    }
}

fn check_size(size: usize) -> Result<(), EsqlError> {
    if size > MAX_INPUT_SIZE {
        return Err(EsqlError::Validation(format!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
            size as f64 / 1024.0 / 1024.0
        )));
    }
    Ok(())
}

fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| EsqlError::Validation("Input is not valid UTF-8".to_string()).into())
}
