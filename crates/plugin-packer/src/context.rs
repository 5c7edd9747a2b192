//! Run-wide packaging settings, resolved once at startup.

use crate::{PackError, PackResult, PackageType, PluginDescriptor, STAGING_DIR};
use std::path::{Path, PathBuf};

/// Everything a packaging pass needs to know about the plugin being packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackContext {
    root: PathBuf,
    plugin_name: String,
    descriptor_path: PathBuf,
    package_type: PackageType,
}

impl PackContext {
    /// Inspect a plugin directory.
    ///
    /// Fails with [`PackError::DescriptorNotFound`] when the directory holds no
    /// `.uplugin` file.
    pub fn discover<P: AsRef<Path>>(root: P, package_type: PackageType) -> PackResult<Self> {
        let root = root.as_ref().canonicalize()?;

        let plugin_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PackError::InvalidDescriptor(format!(
                    "cannot derive a plugin name from {}",
                    root.display()
                ))
            })?;

        let descriptor_path = PluginDescriptor::find(&root)?;

        Ok(Self {
            root,
            plugin_name,
            descriptor_path,
            package_type,
        })
    }

    /// The plugin directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The plugin name, taken from the plugin directory's name.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Path of the source descriptor. This file is only ever read.
    #[must_use]
    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// File name of the descriptor (e.g., "MyPlugin.uplugin").
    #[must_use]
    pub fn descriptor_file_name(&self) -> &std::ffi::OsStr {
        // `find` only returns paths of regular files inside `root`.
        self.descriptor_path
            .file_name()
            .unwrap_or(self.descriptor_path.as_os_str())
    }

    #[must_use]
    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    /// Directory the package contents are assembled in.
    #[must_use]
    pub fn staging_dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR)
    }

    /// Where the archive for `file_version` is written.
    #[must_use]
    pub fn archive_path(&self, file_version: &str) -> PathBuf {
        self.root
            .join(format!("{}-{}.zip", self.plugin_name, file_version))
    }
}
