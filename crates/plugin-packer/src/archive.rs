//! Zip archive creation.
//!
//! The [`ArchiveWriter`] compresses a staged directory tree. Entry order and
//! timestamps are fixed so that packing the same tree twice produces the same
//! bytes.

use crate::PackResult;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes a directory tree into a zip archive.
///
/// # Example
///
/// ```no_run
/// use plugin_packer::ArchiveWriter;
///
/// let digest = ArchiveWriter::new("Package.Site").write("MyPlugin-1.2+ue.5.1.game.zip")?;
/// println!("sha256: {digest}");
/// # Ok::<(), plugin_packer::PackError>(())
/// ```
pub struct ArchiveWriter {
    source_root: PathBuf,
    options: SimpleFileOptions,
}

impl ArchiveWriter {
    /// Create a writer for the tree rooted at `source_root`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(source_root: P) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        Self {
            source_root: source_root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Write the archive and return its SHA256 checksum as a hex string.
    pub fn write<P: AsRef<Path>>(&self, output_path: P) -> PackResult<String> {
        let output_path = output_path.as_ref();

        let file = File::create(output_path)?;
        let mut zip = ZipWriter::new(file);
        self.add_directory_contents(&mut zip, &self.source_root, "")?;
        zip.finish()?;

        compute_file_sha256(output_path)
    }

    /// Add the children of `dir` depth-first, siblings sorted by name.
    fn add_directory_contents(
        &self,
        zip: &mut ZipWriter<File>,
        dir: &Path,
        prefix: &str,
    ) -> PackResult<()> {
        let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let name = format!("{prefix}{}", entry.file_name().to_string_lossy());

            if path.is_dir() {
                let dir_name = format!("{name}/");
                zip.add_directory(dir_name.as_str(), self.options)?;
                self.add_directory_contents(zip, &path, &dir_name)?;
            } else {
                zip.start_file(name.as_str(), self.options)?;
                let mut reader = BufReader::new(File::open(&path)?);
                io::copy(&mut reader, zip)?;
            }
        }

        Ok(())
    }
}

/// Compute the SHA256 hash of a file and return it as a hex string.
pub fn compute_file_sha256<P: AsRef<Path>>(path: P) -> PackResult<String> {
    let mut hasher = Sha256::new();
    let mut reader = BufReader::new(File::open(path)?);
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
