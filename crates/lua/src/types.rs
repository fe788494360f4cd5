//! The build environment descriptor
//!
//! A descriptor is fully determined by its construction arguments and
//! never mutated afterwards: a fragment builds it, returns it, and the
//! enclosing build orchestrator consumes it. Descriptors are exposed to
//! Lua as userdata with read-only field getters so a fragment can
//! inspect what it constructed.

use mlua::{FromLua, Lua, UserData, UserDataFields, Value};
use serde::{Deserialize, Serialize};

/// A build environment descriptor, as constructed by a fragment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildEnv {
    /// Identifier of the software project
    pub project_name: String,

    /// Build environments that must be processed before this one.
    /// Kept in first-seen order, duplicates removed.
    pub auto_deps: Vec<String>,

    /// Whether build shortcut targets are generated
    pub shortcuts: bool,

    /// Whether this environment is the default build variant
    pub default_version: bool,

    /// Whether a binary artifact is produced
    pub binary: bool,

    /// Whether include paths are flattened
    pub flat_includes: bool,

    /// Native libraries to link against, in link order
    pub libs: Vec<String>,

    /// Binding to a source-control location, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_control: Option<RevisionControl>,
}

impl BuildEnv {
    /// Validate construction invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.project_name.is_empty() {
            return Err("build_env{} requires a non-empty 'projname'".to_string());
        }
        Ok(())
    }
}

impl UserData for BuildEnv {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        fields.add_field_method_get("projname", |_, this| Ok(this.project_name.clone()));
        fields.add_field_method_get("autodeps", |_, this| Ok(this.auto_deps.clone()));
        fields.add_field_method_get("shortcuts", |_, this| Ok(this.shortcuts));
        fields.add_field_method_get("defaultversion", |_, this| Ok(this.default_version));
        fields.add_field_method_get("binary", |_, this| Ok(this.binary));
        fields.add_field_method_get("flatincludes", |_, this| Ok(this.flat_includes));
        fields.add_field_method_get("libs", |_, this| Ok(this.libs.clone()));
        fields.add_field_method_get("revisioncontrol", |_, this| {
            Ok(this.revision_control.clone())
        });
    }
}

impl FromLua for BuildEnv {
    fn from_lua(value: Value, _: &Lua) -> mlua::Result<Self> {
        match value {
            Value::UserData(user_data) if user_data.is::<Self>() => {
                Ok(user_data.borrow::<Self>()?.clone())
            }
            _ => Err(mlua::Error::UserDataTypeMismatch),
        }
    }
}

/// Source-control system a build environment can be bound to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RcsSystem {
    Bazaar,
    Tla,
}

impl RcsSystem {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RcsSystem::Bazaar => "bazaar",
            RcsSystem::Tla => "tla",
        }
    }
}

impl std::fmt::Display for RcsSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata binding a build environment to a source-control location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevisionControl {
    pub system: RcsSystem,
    /// Repository path, relative to the fragment
    pub path: String,
    /// Module within the repository
    pub module: String,
    pub branch: String,
    pub version: String,
}

impl RevisionControl {
    pub fn new(
        system: RcsSystem,
        path: impl Into<String>,
        module: impl Into<String>,
        branch: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            system,
            path: path.into(),
            module: module.into(),
            branch: branch.into(),
            version: version.into(),
        }
    }
}

impl UserData for RevisionControl {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        fields.add_field_method_get("system", |_, this| Ok(this.system.as_str()));
        fields.add_field_method_get("path", |_, this| Ok(this.path.clone()));
        fields.add_field_method_get("module", |_, this| Ok(this.module.clone()));
        fields.add_field_method_get("branch", |_, this| Ok(this.branch.clone()));
        fields.add_field_method_get("version", |_, this| Ok(this.version.clone()));
    }
}

impl FromLua for RevisionControl {
    fn from_lua(value: Value, _: &Lua) -> mlua::Result<Self> {
        match value {
            Value::UserData(user_data) if user_data.is::<Self>() => {
                Ok(user_data.borrow::<Self>()?.clone())
            }
            _ => Err(mlua::Error::UserDataTypeMismatch),
        }
    }
}

/// De-duplicate a name list, keeping the first occurrence of each name
pub(crate) fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
