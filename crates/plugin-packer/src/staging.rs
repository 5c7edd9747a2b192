//! Staging directory assembly.
//!
//! Each packaging pass rebuilds the staging directory from scratch, copies the
//! plugin's component paths into it, and removes it again once the archive is
//! written.

use crate::{COMPONENTS, PackResult, PackContext};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The staging directory of the current packaging pass.
#[derive(Debug)]
pub struct StagingArea {
    source_root: PathBuf,
    path: PathBuf,
}

impl StagingArea {
    /// Clear any leftover staging directory and create a fresh, empty one.
    pub fn prepare(ctx: &PackContext) -> PackResult<Self> {
        let path = ctx.staging_dir();

        remove_dir_if_present(&path)?;
        match fs::create_dir(&path) {
            Err(e) if e.kind() != ErrorKind::AlreadyExists => return Err(e.into()),
            _ => {}
        }

        Ok(Self {
            source_root: ctx.root().to_path_buf(),
            path,
        })
    }

    /// Copy every component that exists in the plugin directory.
    ///
    /// Returns the names of the components that were staged.
    pub fn assemble(&self) -> PackResult<Vec<&'static str>> {
        let mut staged = Vec::new();

        for component in COMPONENTS {
            let source = self.source_root.join(component);
            let dest = self.path.join(component);

            if source.is_file() {
                fs::copy(&source, &dest)?;
            } else if source.is_dir() {
                copy_directory_recursive(&source, &dest)?;
            } else {
                debug!("Skipping absent component: {}", component);
                continue;
            }

            debug!("Staged component: {}", component);
            staged.push(component);
        }

        Ok(staged)
    }

    /// Root of the staging directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staging directory.
    pub fn discard(self) -> PackResult<()> {
        remove_dir_if_present(&self.path)
    }
}

/// Recursively copy a directory.
fn copy_directory_recursive(source: &Path, dest: &Path) -> PackResult<()> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if path.is_dir() {
            copy_directory_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }

    Ok(())
}

fn remove_dir_if_present(path: &Path) -> PackResult<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::PackageType;
    use tempfile::TempDir;

    fn plugin_dir(temp_dir: &TempDir) -> PathBuf {
        let dir = temp_dir.path().join("Sample");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("Sample.uplugin"), r#"{"Modules": []}"#).unwrap();
        dir
    }

    fn context(dir: &Path) -> PackContext {
        PackContext::discover(dir, PackageType::Game).unwrap()
    }

    #[test]
    fn StagingArea___prepare___creates_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&plugin_dir(&temp_dir));

        let stage = StagingArea::prepare(&ctx).unwrap();

        assert!(stage.path().is_dir());
        assert_eq!(fs::read_dir(stage.path()).unwrap().count(), 0);
    }

    #[test]
    fn StagingArea___prepare___clears_leftover_contents() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&plugin_dir(&temp_dir));
        fs::create_dir_all(ctx.staging_dir().join("Source")).unwrap();
        fs::write(ctx.staging_dir().join("Source/stale.cpp"), "stale").unwrap();

        let stage = StagingArea::prepare(&ctx).unwrap();

        assert_eq!(fs::read_dir(stage.path()).unwrap().count(), 0);
    }

    #[test]
    fn StagingArea___assemble___copies_directories_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = plugin_dir(&temp_dir);
        fs::create_dir_all(dir.join("Source/SampleRuntime/Private")).unwrap();
        fs::write(dir.join("Source/SampleRuntime/Private/Sample.cpp"), "// cpp").unwrap();
        fs::create_dir(dir.join("Config")).unwrap();
        fs::write(dir.join("Config/DefaultSample.ini"), "[Core]").unwrap();
        fs::write(dir.join("Docs"), "docs as a single file").unwrap();
        let ctx = context(&dir);

        let stage = StagingArea::prepare(&ctx).unwrap();
        let staged = stage.assemble().unwrap();

        assert_eq!(staged, vec!["Config", "Docs", "Source"]);
        assert_eq!(
            fs::read_to_string(stage.path().join("Source/SampleRuntime/Private/Sample.cpp"))
                .unwrap(),
            "// cpp"
        );
        assert!(stage.path().join("Config/DefaultSample.ini").is_file());
        assert!(stage.path().join("Docs").is_file());
        assert!(!stage.path().join("Resources").exists());
    }

    #[test]
    fn StagingArea___assemble___skips_unlisted_paths() {
        let temp_dir = TempDir::new().unwrap();
        let dir = plugin_dir(&temp_dir);
        fs::create_dir(dir.join("Binaries")).unwrap();
        fs::write(dir.join("Binaries/Sample.dll"), "binary").unwrap();
        let ctx = context(&dir);

        let stage = StagingArea::prepare(&ctx).unwrap();
        let staged = stage.assemble().unwrap();

        assert!(staged.is_empty());
        assert!(!stage.path().join("Binaries").exists());
        assert!(!stage.path().join("Sample.uplugin").exists());
    }

    #[test]
    fn StagingArea___discard___removes_directory() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&plugin_dir(&temp_dir));
        let stage = StagingArea::prepare(&ctx).unwrap();
        let path = stage.path().to_path_buf();

        stage.discard().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn StagingArea___discard___tolerates_already_removed_directory() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&plugin_dir(&temp_dir));
        let stage = StagingArea::prepare(&ctx).unwrap();
        fs::remove_dir_all(stage.path()).unwrap();

        assert!(stage.discard().is_ok());
    }
}
