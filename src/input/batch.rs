use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::LineSource;
use crate::error::ShellError;

/// Reads a script line by line, without a prompt. Bytes that are not UTF-8
/// are replaced rather than ending the script.
pub struct BatchInput<R> {
    reader: R,
}

impl BatchInput<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|source| ShellError::Script {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> BatchInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BatchInput<R> {
    fn next_line(&mut self, _prompt: Option<&str>) -> Result<Option<String>, ShellError> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
