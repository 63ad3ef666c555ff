use khmer_menu::config::MenuConfig;
use tracing::{info, warn};

use crate::ui_model::CONFIG_ELEMENT_ID;

/// Reads overrides from the page, falling back to defaults.
pub(super) fn load() -> MenuConfig {
    let Some(json) = config_text() else {
        return MenuConfig::default();
    };
    match MenuConfig::from_json(&json) {
        Ok(cfg) => {
            info!("menu config loaded from #{}", CONFIG_ELEMENT_ID);
            cfg
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            MenuConfig::default()
        }
    }
}

fn config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|s| !s.trim().is_empty())
}
