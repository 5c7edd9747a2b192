//! Pack command.
//!
//! Resolves the target engine versions and packages the plugin for each one.

use anyhow::{Context, Result};
use plugin_packer::{
    PackContext, PackError, PackageType, Packer, PackerConfig, PluginDescriptor,
    select_engine_versions,
};
use std::path::PathBuf;

/// Run the pack command.
pub fn run(dir: Option<String>, engine: bool, unreal_engine: Option<String>) -> Result<()> {
    let dir = dir.map_or_else(std::env::current_dir, |d| Ok(PathBuf::from(d)))?;
    let package_type = PackageType::from_engine_flag(engine);

    let ctx = match PackContext::discover(&dir, package_type) {
        Ok(ctx) => ctx,
        Err(e @ PackError::DescriptorNotFound(_)) => {
            tracing::error!("{e}");
            return Err(e.into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open plugin: {}", dir.display()));
        }
    };

    let descriptor = PluginDescriptor::load(ctx.descriptor_path())
        .with_context(|| format!("Failed to read {}", ctx.descriptor_path().display()))?;
    let config = PackerConfig::load(ctx.root());
    let targets = select_engine_versions(
        unreal_engine.as_deref(),
        config.as_ref(),
        &descriptor.engine_version(),
    );

    println!(
        "Packing {} ({} package) for: {}",
        ctx.plugin_name(),
        package_type,
        targets.join(", ")
    );

    let packer = Packer::new(ctx);
    for engine_version in &targets {
        let output = packer
            .pack(engine_version)
            .with_context(|| format!("while packaging for engine version {engine_version}"))?;

        println!("Package created: {}", output.archive_path.display());
        println!("  Version: {}", output.full_version);
        println!("  SHA256: {}", output.sha256);
    }

    Ok(())
}
