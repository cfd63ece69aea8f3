//! Button — a keypad button a scene can be bound to.

use serde::{Deserialize, Serialize};

use crate::id::ButtonId;

/// Button configuration handed to the scene editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub id: ButtonId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_unknown_fields() {
        let json = r#"{"id": "b1", "name": "Top", "deviceId": "k2"}"#;
        let button: Button = serde_json::from_str(json).unwrap();
        assert_eq!(button.name, "Top");
        assert_eq!(button.extra["deviceId"], "k2");

        let back = serde_json::to_value(&button).unwrap();
        assert_eq!(back["deviceId"], "k2");
    }
}
