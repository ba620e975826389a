use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::ports::ScriptSource;

/// Script source backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemScriptSource;

impl ScriptSource for FilesystemScriptSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn first_line(&self, path: &Path) -> io::Result<Option<String>> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
