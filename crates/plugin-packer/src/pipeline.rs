//! One packaging pass per engine version.

use crate::rewrite::{PackageVersions, rename_engine_config, rewrite_descriptor};
use crate::{
    ArchiveWriter, PackContext, PackResult, PluginDescriptor, ResolvedVersion, StagingArea,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful packaging pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutput {
    /// The engine version as requested.
    pub engine_version: String,
    /// The `VersionName` written into the packaged descriptor.
    pub full_version: String,
    /// The version embedded in the archive file name.
    pub file_version: String,
    /// Path of the written archive.
    pub archive_path: PathBuf,
    /// SHA256 of the archive, hex encoded.
    pub sha256: String,
}

/// Packages a plugin for one or more engine versions.
#[derive(Debug, Clone)]
pub struct Packer {
    ctx: PackContext,
}

impl Packer {
    #[must_use]
    pub fn new(ctx: PackContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn context(&self) -> &PackContext {
        &self.ctx
    }

    /// Package for each engine version in turn, stopping at the first failure.
    ///
    /// Archives produced before a failure are left in place.
    pub fn pack_all<S: AsRef<str>>(
        &self,
        engine_versions: &[S],
    ) -> PackResult<Vec<PackageOutput>> {
        engine_versions
            .iter()
            .map(|version| self.pack(version.as_ref()))
            .collect()
    }

    /// Package for a single engine version.
    ///
    /// The source descriptor is re-read for every pass so passes never see
    /// each other's edits.
    pub fn pack(&self, engine_version: &str) -> PackResult<PackageOutput> {
        let engine = ResolvedVersion::resolve(engine_version);
        let mut descriptor = PluginDescriptor::load(self.ctx.descriptor_path())?;
        let plugin = ResolvedVersion::resolve(&descriptor.version_name());
        let versions = PackageVersions::compose(&plugin, &engine, self.ctx.package_type());

        info!(
            "Packaging {} {} for engine {}",
            self.ctx.plugin_name(),
            versions.full,
            versions.engine
        );

        let stage = StagingArea::prepare(&self.ctx)?;
        let staged = stage.assemble()?;
        debug!("Staged components: {:?}", staged);

        rewrite_descriptor(&mut descriptor, &versions, &engine)?;
        rename_engine_config(
            stage.path(),
            self.ctx.plugin_name(),
            self.ctx.package_type(),
        )?;

        descriptor.write(stage.path().join(self.ctx.descriptor_file_name()))?;

        let archive_path = self.ctx.archive_path(&versions.file);
        let sha256 = ArchiveWriter::new(stage.path()).write(&archive_path)?;
        stage.discard()?;

        info!("Created {}", archive_path.display());

        Ok(PackageOutput {
            engine_version: engine_version.to_string(),
            full_version: versions.full,
            file_version: versions.file,
            archive_path,
            sha256,
        })
    }
}
