//! Global Lua functions and the wns table

use crate::settings::SimSettings;
use crate::types::{dedup_preserving_order, BuildEnv, RcsSystem, RevisionControl};
use mlua::{Lua, Result as LuaResult, Table};
use std::cell::RefCell;
use std::rc::Rc;
use wns_platform::HostInfo;

/// Set up the wns global table with host information
///
/// Fragments branch on these to vary library sets per platform.
pub fn setup_wns_global(lua: &Lua, host: &HostInfo) -> LuaResult<()> {
    let wns = lua.create_table()?;

    wns.set("platform", host.platform_string())?;
    wns.set("os", host.os.as_str())?;
    wns.set("arch", host.arch.as_str())?;
    wns.set("hostname", host.hostname.as_str())?;
    wns.set("username", host.username.as_str())?;

    wns.set("is_linux", host.is_linux())?;
    wns.set("is_darwin", host.is_darwin())?;
    wns.set("is_windows", host.is_windows())?;

    wns.set("version", env!("CARGO_PKG_VERSION"))?;

    lua.globals().set("wns", wns)?;

    Ok(())
}

/// Set up the build_env{} global function
///
/// Usage from a fragment:
/// ```lua
/// local common = build_env {
///     projname = "openwns",
///     autodeps = { "wns" },
///     shortcuts = true,
///     defaultversion = true,
///     binary = true,
///     flatincludes = false,
///     libs = { "wns-1.0" },
///     revisioncontrol = rcs.bazaar("..", "application", "main", "1.0"),
/// }
///
/// return common
/// ```
///
/// The descriptor is returned to the fragment, which hands it back to
/// the orchestrator via `return`. Construction is a pure assembly of
/// the supplied fields; only `projname` is required.
pub fn setup_build_env_function(lua: &Lua) -> LuaResult<()> {
    let build_env_fn = lua.create_function(|_, spec: Table| {
        let project_name: String = spec
            .get::<String>("projname")
            .map_err(|_| mlua::Error::runtime("build_env{} requires a string 'projname' field"))?;

        let auto_deps: Vec<String> = spec.get::<Option<Vec<String>>>("autodeps")?.unwrap_or_default();
        let libs: Vec<String> = spec.get::<Option<Vec<String>>>("libs")?.unwrap_or_default();

        let env = BuildEnv {
            project_name,
            auto_deps: dedup_preserving_order(auto_deps),
            shortcuts: spec.get::<Option<bool>>("shortcuts")?.unwrap_or(false),
            default_version: spec.get::<Option<bool>>("defaultversion")?.unwrap_or(false),
            binary: spec.get::<Option<bool>>("binary")?.unwrap_or(false),
            flat_includes: spec.get::<Option<bool>>("flatincludes")?.unwrap_or(false),
            libs,
            revision_control: spec.get::<Option<RevisionControl>>("revisioncontrol")?,
        };

        env.validate().map_err(mlua::Error::runtime)?;

        Ok(env)
    })?;

    lua.globals().set("build_env", build_env_fn)?;

    Ok(())
}

/// Set up the rcs global table with revision-control constructors
///
/// `rcs.bazaar(path, module, branch, version)` and `rcs.tla(...)`
/// produce the optional binding a fragment attaches to its descriptor.
pub fn setup_rcs_table(lua: &Lua) -> LuaResult<()> {
    let rcs = lua.create_table()?;

    let bazaar_fn = lua.create_function(
        |_, (path, module, branch, version): (String, String, String, String)| {
            Ok(RevisionControl::new(
                RcsSystem::Bazaar,
                path,
                module,
                branch,
                version,
            ))
        },
    )?;

    let tla_fn = lua.create_function(
        |_, (path, module, branch, version): (String, String, String, String)| {
            Ok(RevisionControl::new(
                RcsSystem::Tla,
                path,
                module,
                branch,
                version,
            ))
        },
    )?;

    rcs.set("bazaar", bazaar_fn)?;
    rcs.set("tla", tla_fn)?;

    lua.globals().set("rcs", rcs)?;

    Ok(())
}

/// Set up the simulation{} global function
///
/// Each call merges the keys it names into the shared settings, so a
/// patch expression like `simulation { max_sim_time = 5 }` overrides a
/// single knob.
pub fn setup_simulation_function(lua: &Lua, settings: Rc<RefCell<SimSettings>>) -> LuaResult<()> {
    let simulation_fn = lua.create_function(move |_, spec: Table| {
        let mut settings = settings.borrow_mut();

        if let Some(value) = spec.get::<Option<f64>>("max_sim_time")? {
            if value < 0.0 {
                return Err(mlua::Error::runtime("max_sim_time must not be negative"));
            }
            settings.max_sim_time = value;
        }

        if let Some(value) = spec.get::<Option<f64>>("settling_time")? {
            if value < 0.0 {
                return Err(mlua::Error::runtime("settling_time must not be negative"));
            }
            settings.settling_time = value;
        }

        if let Some(dir) = spec.get::<Option<String>>("output_dir")? {
            let expanded =
                wns_platform::expand_path(&dir).map_err(|e| mlua::Error::runtime(e.to_string()))?;
            settings.output_dir = wns_platform::normalize_path(&expanded);
        }

        if let Some(name) = spec.get::<Option<String>>("status_file_name")? {
            settings.status_file_name = name;
        }

        if let Some(value) = spec.get::<Option<f64>>("status_write_interval")? {
            if value <= 0.0 {
                return Err(mlua::Error::runtime(
                    "status_write_interval must be positive",
                ));
            }
            settings.status_write_interval = value;
        }

        if let Some(name) = spec.get::<Option<String>>("output_strategy")? {
            settings.output_strategy = name;
        }

        if let Some(value) = spec.get::<Option<bool>>("fast_shutdown")? {
            settings.fast_shutdown = value;
        }

        if let Some(value) = spec.get::<Option<f64>>("mark_interval")? {
            if value <= 0.0 {
                return Err(mlua::Error::runtime("mark_interval must be positive"));
            }
            settings.mark_interval = value;
        }

        Ok(())
    })?;

    lua.globals().set("simulation", simulation_fn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lua_with_globals() -> Lua {
        let lua = Lua::new();
        let host = HostInfo::current();
        setup_wns_global(&lua, &host).unwrap();
        setup_build_env_function(&lua).unwrap();
        setup_rcs_table(&lua).unwrap();
        lua
    }

    #[test]
    fn test_wns_global() {
        let lua = lua_with_globals();

        let wns: Table = lua.globals().get("wns").unwrap();

        let os: String = wns.get("os").unwrap();
        assert!(!os.is_empty());

        let is_darwin: bool = wns.get("is_darwin").unwrap();
        let is_linux: bool = wns.get("is_linux").unwrap();
        let is_windows: bool = wns.get("is_windows").unwrap();

        // Exactly one should be true
        assert_eq!(
            [is_darwin, is_linux, is_windows]
                .iter()
                .filter(|&&x| x)
                .count(),
            1
        );
    }

    #[test]
    fn test_build_env_returns_descriptor() {
        let lua = lua_with_globals();

        let env: BuildEnv = lua
            .load(
                r#"
                return build_env {
                    projname = "openwns",
                    autodeps = { "wns" },
                    binary = true,
                    libs = { "wns-1.0" },
                }
            "#,
            )
            .eval()
            .unwrap();

        assert_eq!(env.project_name, "openwns");
        assert_eq!(env.auto_deps, vec!["wns".to_string()]);
        assert!(env.binary);
        assert!(!env.shortcuts);
        assert!(env.revision_control.is_none());
    }

    #[test]
    fn test_build_env_requires_projname() {
        let lua = lua_with_globals();

        let result = lua
            .load(
                r#"
                return build_env {
                    libs = { "wns-1.0" },
                }
            "#,
            )
            .eval::<BuildEnv>();

        assert!(result.is_err());
    }

    #[test]
    fn test_rcs_bazaar_constructor() {
        let lua = lua_with_globals();

        let binding: RevisionControl = lua
            .load(r#"return rcs.bazaar("..", "application", "main", "1.0")"#)
            .eval()
            .unwrap();

        assert_eq!(binding.system, RcsSystem::Bazaar);
        assert_eq!(binding.path, "..");
        assert_eq!(binding.module, "application");
        assert_eq!(binding.branch, "main");
        assert_eq!(binding.version, "1.0");
    }

    #[test]
    fn test_descriptor_fields_readable_from_lua() {
        let lua = lua_with_globals();

        // A fragment can read back exactly what it supplied
        lua.load(
            r#"
            local env = build_env {
                projname = "openwns",
                autodeps = { "wns" },
                shortcuts = true,
                libs = { "wns-1.0", "speetcl" },
                revisioncontrol = rcs.tla("..", "wns-core", "main", "1.0"),
            }

            assert(env.projname == "openwns")
            assert(env.autodeps[1] == "wns")
            assert(env.shortcuts == true)
            assert(env.defaultversion == false)
            assert(env.libs[2] == "speetcl")
            assert(env.revisioncontrol.system == "tla")
            assert(env.revisioncontrol.branch == "main")
        "#,
        )
        .exec()
        .unwrap();
    }

    #[test]
    fn test_simulation_merges_over_defaults() {
        let lua = Lua::new();
        let settings = Rc::new(RefCell::new(SimSettings::default()));
        setup_simulation_function(&lua, settings.clone()).unwrap();

        lua.load(
            r#"
            simulation {
                max_sim_time = 10.0,
                output_dir = "run-output",
            }

            simulation {
                max_sim_time = 5.0,
            }
        "#,
        )
        .exec()
        .unwrap();

        let settings = settings.borrow();
        assert_eq!(settings.max_sim_time, 5.0);
        assert_eq!(settings.output_dir.to_str().unwrap(), "run-output");
        // Untouched keys keep their defaults
        assert_eq!(settings.status_file_name, "WNSStatus.dat");
    }

    #[test]
    fn test_simulation_rejects_bad_interval() {
        let lua = Lua::new();
        let settings = Rc::new(RefCell::new(SimSettings::default()));
        setup_simulation_function(&lua, settings).unwrap();

        let result = lua
            .load(r#"simulation { status_write_interval = 0 }"#)
            .exec();

        assert!(result.is_err());
    }
}
