//! Distribution packaging for Unreal Engine plugins
//!
//! This crate turns a plugin source directory into one zip archive per target
//! engine version. Every archive carries a copy of the plugin's components and
//! a rewritten `.uplugin` descriptor whose version name, engine version and
//! platform whitelists match the target.
//!
//! # Package Layout
//!
//! ```text
//! MyPlugin-1.2+ue.5.1.game.zip
//! ├── MyPlugin.uplugin           # VersionName = "1.2.3+ue.5.1.game"
//! ├── Config/
//! │   └── DefaultMyPlugin.ini    # BaseMyPlugin.ini in engine packages
//! ├── Docs/
//! ├── Resources/
//! └── Source/
//! ```
//!
//! # Example
//!
//! ```no_run
//! use plugin_packer::{PackContext, PackageType, Packer, PackerConfig, select_engine_versions};
//! use plugin_packer::PluginDescriptor;
//!
//! let ctx = PackContext::discover(".", PackageType::Game)?;
//! let descriptor = PluginDescriptor::load(ctx.descriptor_path())?;
//! let config = PackerConfig::load(ctx.root());
//! let targets = select_engine_versions(None, config.as_ref(), &descriptor.engine_version());
//!
//! for output in Packer::new(ctx).pack_all(&targets)? {
//!     println!("{}", output.archive_path.display());
//! }
//! # Ok::<(), plugin_packer::PackError>(())
//! ```

mod archive;
mod config;
mod context;
mod descriptor;
mod error;
mod package_type;
mod pipeline;
mod staging;
mod version;

pub mod rewrite;

pub use archive::{ArchiveWriter, compute_file_sha256};
pub use config::{PackerConfig, select_engine_versions};
pub use context::PackContext;
pub use descriptor::{ModuleEntry, PluginDescriptor};
pub use error::PackError;
pub use package_type::PackageType;
pub use pipeline::{PackageOutput, Packer};
pub use rewrite::PackageVersions;
pub use staging::StagingArea;
pub use version::ResolvedVersion;

/// Result type for packaging operations.
pub type PackResult<T> = Result<T, PackError>;

/// Plugin descriptor file extension.
pub const DESCRIPTOR_EXTENSION: &str = "uplugin";

/// Optional packer configuration file name.
pub const CONFIG_FILE: &str = "PackerConfig.json";

/// Staging directory name, relative to the plugin directory.
pub const STAGING_DIR: &str = "Package.Site";

/// Top-level plugin paths copied into every package.
pub const COMPONENTS: [&str; 4] = ["Config", "Docs", "Source", "Resources"];

/// Placeholder for versions the descriptor does not declare.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Platform dropped from whitelists on engine 5 and later.
pub const DEPRECATED_PLATFORM: &str = "Win32";

/// Module types whose whitelists get [`EXPANDED_PLATFORMS`].
pub const EXPANDED_MODULE_TYPES: [&str; 2] = ["Runtime", "UncookedOnly"];

/// Platforms added to runtime module whitelists, in this order.
pub const EXPANDED_PLATFORMS: [&str; 4] = ["IOS", "Switch", "PS4", "XboxOne"];
