use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Largest message accepted from a file or stdin.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads the message for a one-shot send.
    ///
    /// An explicit message wins, then `file_path`, then stdin. Text read
    /// from a file or stdin loses one trailing line break, the one a shell
    /// pipe or editor adds; everything else is kept as is.
    pub fn read(message: Option<&str>, file_path: Option<&str>) -> Result<String> {
        if let Some(message) = message {
            return Ok(message.to_string());
        }

        let text = file_path.map_or_else(Self::read_stdin, Self::read_file)?;
        Ok(strip_line_break(text))
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                mebibytes(size)
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
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

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                    mebibytes(buffer.len())
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[allow(clippy::cast_precision_loss)]
fn mebibytes(bytes: usize) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
