use std::io;
use std::path::Path;

/// The only window the script validator has onto the filesystem: an
/// existence check and a first-line read. Implementations must not write.
pub trait ScriptSource {
    fn exists(&self, path: &Path) -> bool;

    /// First line of the file without the trailing line ending, or `None`
    /// for an empty file.
    fn first_line(&self, path: &Path) -> io::Result<Option<String>>;
}
