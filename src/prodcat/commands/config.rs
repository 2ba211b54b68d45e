use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::{CatalogConfig, ConfigKey, Scope};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(paths: &CatalogPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = CatalogConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in ConfigKey::all() {
                result.add_message(CmdMessage::info(format!(
                    "{} = {}",
                    key.name(),
                    config.get(*key)
                )));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key.name(),
                config.get(key)
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(&dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}
