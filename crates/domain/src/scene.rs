//! Scene — a saved preset of device states.

use serde::{Deserialize, Serialize};

use crate::id::SceneId;

/// A scene as rendered by the scene list.
///
/// Only `id` carries meaning for the panel; everything else is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Scene {
    /// Create a scene with only an id.
    #[must_use]
    pub fn new(id: impl Into<SceneId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address: None,
            description: None,
            extra: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
