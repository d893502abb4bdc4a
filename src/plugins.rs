//! Plugin lookup and mutation
//!
//! Plugins are matched by their type name, exactly. Lookups return the first
//! match. `modify_plugin` expects its target to exist and fails otherwise;
//! `replace_plugin` treats a missing target as a normal outcome so optional
//! plugins can be swapped without a guard.

use pack_config_model::{Configuration, Plugin};
use tracing::{debug, info};

use crate::error::{ConfigUtilsError, Result, Target};

/// Index of the first plugin whose type name is `type_name`.
pub fn plugin_index(config: &Configuration, type_name: &str) -> Option<usize> {
    let index = config
        .plugins
        .iter()
        .position(|plugin| plugin.type_name == type_name);
    debug!(type_name, ?index, "plugin lookup");
    index
}

/// Whether a plugin of type `type_name` is present.
pub fn is_plugin_loaded(config: &Configuration, type_name: &str) -> bool {
    plugin_index(config, type_name).is_some()
}

/// Modify a plugin in place.
///
/// `f` receives the plugin and its index; its result is returned. Fails with
/// [`ConfigUtilsError::NotFound`] without calling `f` when no plugin of that
/// type is present.
///
/// ```
/// use pack_config_utils::{modify_plugin, Configuration, Plugin};
/// use serde_json::json;
///
/// let mut config = Configuration::new().with_plugins(vec![
///     Plugin::new("StartServerPlugin").with_options(json!({"nodeArgs": []})),
/// ]);
/// modify_plugin(&mut config, "StartServerPlugin", |plugin, _| {
///     plugin.options_mut()["nodeArgs"] = json!(["--inspect"]);
/// })
/// .unwrap();
/// assert_eq!(config.plugins[0].options()["nodeArgs"][0], "--inspect");
/// ```
pub fn modify_plugin<F, R>(config: &mut Configuration, type_name: &str, f: F) -> Result<R>
where
    F: FnOnce(&mut Plugin, usize) -> R,
{
    let index = plugin_index(config, type_name)
        .ok_or_else(|| ConfigUtilsError::not_found(Target::Plugin, type_name))?;

    info!(type_name, index, "modifying plugin");
    Ok(f(&mut config.plugins[index], index))
}

/// Replace the first plugin of type `type_name` with `plugin`.
///
/// Returns the new plugin in its slot, or `None` (leaving the configuration
/// untouched) when no plugin of that type is present.
pub fn replace_plugin<'a>(
    config: &'a mut Configuration,
    type_name: &str,
    plugin: Plugin,
) -> Option<&'a mut Plugin> {
    let index = plugin_index(config, type_name)?;

    info!(
        type_name,
        index,
        replacement = %plugin.type_name,
        "replacing plugin"
    );
    let slot = &mut config.plugins[index];
    *slot = plugin;
    Some(slot)
}
