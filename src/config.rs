use serde::Deserialize;

use crate::message::Locale;

/// Options passed by the view when the game is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub locale: Locale,
}
