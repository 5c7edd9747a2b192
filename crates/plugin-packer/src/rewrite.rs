//! Descriptor rewriting for a specific engine version and package type.

use crate::{
    DEPRECATED_PLATFORM, EXPANDED_PLATFORMS, EXPANDED_MODULE_TYPES, PackResult, PackageType,
    PluginDescriptor, ResolvedVersion,
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// First engine major version without 32-bit Windows support.
const WIN32_REMOVED_IN_MAJOR: u64 = 5;

/// Version strings written into a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersions {
    /// Goes into the staged descriptor's `VersionName`.
    pub full: String,
    /// Goes into the archive file name; omits the patch number.
    pub file: String,
    /// Goes into the staged descriptor's `EngineVersion`.
    pub engine: String,
}

impl PackageVersions {
    /// Compose the version strings for one plugin/engine pairing.
    ///
    /// # Example
    ///
    /// ```
    /// use plugin_packer::{PackageType, PackageVersions, ResolvedVersion};
    ///
    /// let versions = PackageVersions::compose(
    ///     &ResolvedVersion::resolve("1.2.3"),
    ///     &ResolvedVersion::resolve("5.1"),
    ///     PackageType::Game,
    /// );
    /// assert_eq!(versions.full, "1.2.3+ue.5.1.game");
    /// assert_eq!(versions.file, "1.2+ue.5.1.game");
    /// ```
    #[must_use]
    pub fn compose(
        plugin: &ResolvedVersion,
        engine: &ResolvedVersion,
        package_type: PackageType,
    ) -> Self {
        let engine_short = engine.short();
        Self {
            full: format!("{}+ue.{engine_short}.{package_type}", plugin.full()),
            file: format!("{}+ue.{engine_short}.{package_type}", plugin.short()),
            engine: engine_short,
        }
    }
}

/// Apply version fields and platform rules to a descriptor.
pub fn rewrite_descriptor(
    descriptor: &mut PluginDescriptor,
    versions: &PackageVersions,
    engine: &ResolvedVersion,
) -> PackResult<()> {
    descriptor.set_version_name(versions.full.as_str());
    descriptor.set_engine_version(versions.engine.as_str());

    remove_deprecated_platforms(descriptor, engine)?;
    expand_platforms(descriptor)
}

/// Drop `Win32` from every module on engine 5 and later.
///
/// Opaque engine versions have no major component and are left alone, as
/// are modules without a `WhitelistPlatforms` list.
pub fn remove_deprecated_platforms(
    descriptor: &mut PluginDescriptor,
    engine: &ResolvedVersion,
) -> PackResult<()> {
    let Some(major) = engine.major() else {
        return Ok(());
    };
    if major < WIN32_REMOVED_IN_MAJOR {
        return Ok(());
    }

    for mut module in descriptor.modules_mut()? {
        if let Some(platforms) = module.platforms_mut() {
            platforms.retain(|platform| platform.as_str() != Some(DEPRECATED_PLATFORM));
        }
    }

    Ok(())
}

/// Whitelist console and mobile platforms for runtime modules.
///
/// Platforms are appended in a fixed order and only when missing, so running
/// this twice changes nothing.
pub fn expand_platforms(descriptor: &mut PluginDescriptor) -> PackResult<()> {
    for mut module in descriptor.modules_mut()? {
        let expands = module
            .module_type()
            .is_some_and(|ty| EXPANDED_MODULE_TYPES.contains(&ty));
        if !expands {
            continue;
        }

        let platforms = module.require_platforms_mut()?;
        for platform in EXPANDED_PLATFORMS {
            if !platforms.iter().any(|p| p.as_str() == Some(platform)) {
                platforms.push(Value::String(platform.to_string()));
            }
        }
    }

    Ok(())
}

/// Rename `Config/Default{name}.ini` to `Config/Base{name}.ini` for engine packages.
///
/// Returns `true` when a file was renamed.
pub fn rename_engine_config(
    stage_root: &Path,
    plugin_name: &str,
    package_type: PackageType,
) -> PackResult<bool> {
    if !package_type.renames_config() {
        return Ok(false);
    }

    let config_dir = stage_root.join("Config");
    let source = config_dir.join(format!("Default{plugin_name}.ini"));
    if !source.is_file() {
        return Ok(false);
    }

    let dest = config_dir.join(format!("Base{plugin_name}.ini"));
    fs::rename(&source, &dest)?;
    debug!("Renamed {} to {}", source.display(), dest.display());

    Ok(true)
}
