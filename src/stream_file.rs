//! Materialized directory entries.
//!
//! A decoded entry is backed either by memory or by a spill file on disk;
//! the variant is chosen once, when the entry is materialized, and never
//! changes afterwards.

use std::fs::{self, File};
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bytes::Bytes;

/// Entries at or above this many bytes are spilled to disk.
pub const MEMORY_LIMIT: u64 = u32::MAX as u64;

enum Backing {
    Memory(Cursor<Bytes>),
    File(File),
}

/// One named entry decoded out of a container, positioned at its start.
pub struct StreamFile {
    /// Full entry path as stored in the container directory.
    pub path: String,
    /// Final component of `path`.
    pub file_name: String,
    backing: Backing,
}

impl StreamFile {
    /// Wrap already-decoded bytes.
    pub fn from_bytes(path: String, data: Bytes) -> StreamFile {
        let file_name = file_name_of(&path);
        StreamFile {
            path,
            file_name,
            backing: Backing::Memory(Cursor::new(data)),
        }
    }

    /// Copy `len` bytes from `source` into a spill file under `dir`,
    /// creating the directory if needed. The file is left in place for the
    /// caller to inspect; it is the oversized-entry path.
    pub fn spill(
        path: String,
        source: &mut impl Read,
        len: u64,
        dir: &Path,
    ) -> io::Result<StreamFile> {
        let file_name = file_name_of(&path);
        fs::create_dir_all(dir)?;
        let mut file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(dir.join(&file_name))?;
        io::copy(&mut source.take(len), &mut file)?;
        file.seek(SeekFrom::Start(0))?;
        Ok(StreamFile {
            path,
            file_name,
            backing: Backing::File(file),
        })
    }

    /// Open a loose file from disk, memory-backed below [`MEMORY_LIMIT`].
    pub fn open(path: &Path) -> io::Result<StreamFile> {
        let len = fs::metadata(path)?.len();
        let name = path.to_string_lossy().into_owned();
        if len < MEMORY_LIMIT {
            Ok(StreamFile::from_bytes(name, Bytes::from(fs::read(path)?)))
        } else {
            Ok(StreamFile {
                file_name: file_name_of(&name),
                path: name,
                backing: Backing::File(File::open(path)?),
            })
        }
    }

    pub fn len(&self) -> io::Result<u64> {
        match &self.backing {
            Backing::Memory(cursor) => Ok(cursor.get_ref().len() as u64),
            Backing::File(file) => Ok(file.metadata()?.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.len(), Ok(0))
    }

    /// Cheap handle to the content of a memory-backed entry; reads a
    /// file-backed one fully.
    pub fn bytes(&mut self) -> io::Result<Bytes> {
        match &mut self.backing {
            Backing::Memory(cursor) => Ok(cursor.get_ref().clone()),
            Backing::File(file) => {
                file.seek(SeekFrom::Start(0))?;
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)?;
                file.seek(SeekFrom::Start(0))?;
                Ok(Bytes::from(buf))
            }
        }
    }

    /// Rewind to the start of the entry.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// The spill file behind a file-backed entry, if any.
    pub fn spill_path(&self, dir: &Path) -> Option<PathBuf> {
        match self.backing {
            Backing::Memory(_) => None,
            Backing::File(_) => Some(dir.join(&self.file_name)),
        }
    }
}

impl Read for StreamFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.backing {
            Backing::Memory(cursor) => cursor.read(buf),
            Backing::File(file) => file.read(buf),
        }
    }
}

impl Seek for StreamFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.backing {
            Backing::Memory(cursor) => cursor.seek(pos),
            Backing::File(file) => file.seek(pos),
        }
    }
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_entry_reads_and_rewinds() {
        let mut sf = StreamFile::from_bytes(
            "sub/dir/CAB-test".to_owned(),
            Bytes::from_static(b"hello entry"),
        );
        assert_eq!(sf.file_name, "CAB-test");
        assert_eq!(sf.len().unwrap(), 11);

        let mut buf = String::new();
        sf.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello entry");

        sf.rewind().unwrap();
        let mut again = Vec::new();
        sf.read_to_end(&mut again).unwrap();
        assert_eq!(again, b"hello entry");
    }

    #[test]
    fn spill_copies_exactly_len_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = Cursor::new(b"0123456789".to_vec());
        let mut sf =
            StreamFile::spill("big/entry.bin".to_owned(), &mut source, 6, dir.path()).unwrap();
        assert_eq!(sf.len().unwrap(), 6);
        assert_eq!(StreamFile::bytes(&mut sf).unwrap().as_ref(), b"012345");
        assert!(dir.path().join("entry.bin").exists());
    }
}
