//! The `.uplugin` plugin descriptor.
//!
//! The descriptor is kept as a JSON object rather than a typed struct: only a
//! handful of fields are rewritten and everything else has to survive the
//! round trip unchanged, in the order it was read.

use crate::{DESCRIPTOR_EXTENSION, PackError, PackResult, UNKNOWN_VERSION};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const VERSION_NAME: &str = "VersionName";
const ENGINE_VERSION: &str = "EngineVersion";
const MODULES: &str = "Modules";
const MODULE_TYPE: &str = "Type";
const WHITELIST_PLATFORMS: &str = "WhitelistPlatforms";

/// In-memory plugin descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    fields: Map<String, Value>,
}

/// Mutable view of one entry of the descriptor's `Modules` list.
#[derive(Debug)]
pub struct ModuleEntry<'a> {
    fields: &'a mut Map<String, Value>,
}

impl PluginDescriptor {
    /// Locate the descriptor file in a plugin directory.
    ///
    /// When several `.uplugin` files exist the lexicographically first one wins.
    pub fn find<P: AsRef<Path>>(dir: P) -> PackResult<PathBuf> {
        let dir = dir.as_ref();

        let mut candidates = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_descriptor = path
                .extension()
                .is_some_and(|ext| ext == DESCRIPTOR_EXTENSION);
            if is_descriptor && path.is_file() {
                candidates.push(path);
            }
        }

        candidates.sort();
        candidates
            .into_iter()
            .next()
            .ok_or_else(|| PackError::DescriptorNotFound(dir.to_path_buf()))
    }

    /// Load and parse a descriptor file.
    pub fn load<P: AsRef<Path>>(path: P) -> PackResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Parse a descriptor from JSON text.
    pub fn from_json(json: &str) -> PackResult<Self> {
        match serde_json::from_str(json)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(PackError::InvalidDescriptor(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// The plugin's version name, or `"Unknown"` when absent.
    #[must_use]
    pub fn version_name(&self) -> String {
        self.text_field(VERSION_NAME)
    }

    /// The engine version the plugin declares, or `"Unknown"` when absent.
    #[must_use]
    pub fn engine_version(&self) -> String {
        self.text_field(ENGINE_VERSION)
    }

    pub fn set_version_name(&mut self, version: impl Into<String>) {
        self.fields
            .insert(VERSION_NAME.to_string(), Value::String(version.into()));
    }

    pub fn set_engine_version(&mut self, version: impl Into<String>) {
        self.fields
            .insert(ENGINE_VERSION.to_string(), Value::String(version.into()));
    }

    /// All entries of the `Modules` list, in declaration order.
    pub fn modules_mut(&mut self) -> PackResult<Vec<ModuleEntry<'_>>> {
        let modules = self
            .fields
            .get_mut(MODULES)
            .and_then(Value::as_array_mut)
            .ok_or(PackError::MissingField(MODULES))?;

        modules
            .iter_mut()
            .map(|module| match module {
                Value::Object(fields) => Ok(ModuleEntry { fields }),
                other => Err(PackError::InvalidDescriptor(format!(
                    "module entries must be objects, found {}",
                    json_kind(other)
                ))),
            })
            .collect()
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize with tab indentation, keeping the key order as read.
    pub fn to_json_tabbed(&self) -> PackResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        self.fields.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write the descriptor to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> PackResult<()> {
        fs::write(path, self.to_json_tabbed()?)?;
        Ok(())
    }

    fn text_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => UNKNOWN_VERSION.to_string(),
        }
    }
}

impl ModuleEntry<'_> {
    /// The module's `Type` (e.g., "Runtime"), if it is a string.
    #[must_use]
    pub fn module_type(&self) -> Option<&str> {
        self.fields.get(MODULE_TYPE).and_then(Value::as_str)
    }

    /// The module's `WhitelistPlatforms` list, if it has one.
    pub fn platforms_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.fields
            .get_mut(WHITELIST_PLATFORMS)
            .and_then(Value::as_array_mut)
    }

    /// Like [`platforms_mut`](Self::platforms_mut), but a missing list is an error.
    pub fn require_platforms_mut(&mut self) -> PackResult<&mut Vec<Value>> {
        self.platforms_mut()
            .ok_or(PackError::MissingField(WHITELIST_PLATFORMS))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
