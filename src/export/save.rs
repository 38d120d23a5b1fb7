use crate::error::ExportError;
use std::cell::RefCell;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Media type attached to saved content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Csv,
    Pdf,
}

impl MediaType {
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Csv => "text/csv",
            MediaType::Pdf => "application/pdf",
        }
    }
}

/// Destination for finished exports.
pub trait FileSaver {
    fn save(&self, contents: &[u8], media_type: MediaType, filename: &str)
        -> Result<(), ExportError>;
}

/// Writes exports into a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl FileSaver for DiskSaver {
    fn save(
        &self,
        contents: &[u8],
        media_type: MediaType,
        filename: &str,
    ) -> Result<(), ExportError> {
        // Files land directly in `dir`: no separators, no `..`.
        if Path::new(filename).file_name() != Some(OsStr::new(filename)) {
            return Err(ExportError::InvalidFilename {
                filename: filename.to_string(),
            });
        }
        let path = self.path_for(filename);

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::FileCreate {
            path: self.dir.clone(),
            source,
        })?;

        let mut file = File::create(&path).map_err(|source| ExportError::FileCreate {
            path: path.clone(),
            source,
        })?;

        file.write_all(contents)
            .map_err(|e| ExportError::WriteError {
                message: e.to_string(),
            })?;

        tracing::info!(
            path = %path.display(),
            media_type = media_type.mime(),
            bytes = contents.len(),
            "export saved"
        );
        Ok(())
    }
}

/// A file captured by [`MemorySaver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub media_type: MediaType,
    pub contents: Vec<u8>,
}

/// Keeps saved files in memory instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct MemorySaver {
    files: RefCell<Vec<SavedFile>>,
}

impl MemorySaver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files(&self) -> Vec<SavedFile> {
        self.files.borrow().clone()
    }
}

impl FileSaver for MemorySaver {
    fn save(
        &self,
        contents: &[u8],
        media_type: MediaType,
        filename: &str,
    ) -> Result<(), ExportError> {
        self.files.borrow_mut().push(SavedFile {
            filename: filename.to_string(),
            media_type,
            contents: contents.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_saver_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DiskSaver::new(dir.path().join("out"));
        saver.save(b"hello", MediaType::Csv, "a.csv").unwrap();
        let written = fs::read(dir.path().join("out").join("a.csv")).unwrap();
        assert_eq!(written, b"hello");
    }

    #[test]
    fn disk_saver_rejects_paths() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let saver = DiskSaver::new(&out);

        for name in ["../escape.pdf", "q3/q4_sales.pdf", "..", ""] {
            let err = saver.save(b"x", MediaType::Pdf, name).unwrap_err();
            assert!(matches!(err, ExportError::InvalidFilename { .. }), "{name}");
        }
        assert!(!dir.path().join("escape.pdf").exists());
        assert!(!out.exists());
    }

    #[test]
    fn memory_saver_records_calls() {
        let saver = MemorySaver::new();
        saver.save(b"%PDF", MediaType::Pdf, "r.pdf").unwrap();
        let files = saver.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "r.pdf");
        assert_eq!(files[0].media_type.mime(), "application/pdf");
    }
}
