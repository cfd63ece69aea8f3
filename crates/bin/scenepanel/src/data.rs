//! Initial scene list props, read from a JSON file.

use std::path::Path;

use serde::Deserialize;

use scenepanel_domain::button::Button;
use scenepanel_domain::list_state::ListProps;
use scenepanel_domain::scene::Scene;
use scenepanel_domain::zone::Zone;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PanelData {
    scenes: Vec<Scene>,
    zones: Vec<Zone>,
    buttons: Vec<Button>,
}

impl From<PanelData> for ListProps {
    fn from(data: PanelData) -> Self {
        Self {
            scenes: data.scenes,
            zones: data.zones,
            buttons: data.buttons,
        }
    }
}

/// Errors reading the data file.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read data file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse data file")]
    Parse(#[from] serde_json::Error),
}

/// Parse props from a JSON document. Every key is optional.
///
/// # Errors
///
/// Returns [`DataError::Parse`] when the document is not valid panel data.
pub fn parse(content: &str) -> Result<ListProps, DataError> {
    let data: PanelData = serde_json::from_str(content)?;
    Ok(data.into())
}

/// Read props from the file at `path`.
///
/// # Errors
///
/// Returns [`DataError::Io`] when the file cannot be read, or
/// [`DataError::Parse`] when it is not valid panel data.
pub fn load(path: &Path) -> Result<ListProps, DataError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_full_document() {
        let json = r#"{
            "scenes": [{"id": "s1", "name": "All On"}, {"id": "s2", "name": "All Off"}],
            "zones": [{"id": "z1", "type": "light"}],
            "buttons": [{"id": "b1", "name": "Top"}]
        }"#;
        let props = parse(json).unwrap();
        assert_eq!(props.scenes.len(), 2);
        assert_eq!(props.zones.len(), 1);
        assert_eq!(props.buttons[0].name, "Top");
    }

    #[test]
    fn should_default_missing_collections() {
        let props = parse(r#"{"scenes": [{"id": "s1"}]}"#).unwrap();
        assert_eq!(props.scenes.len(), 1);
        assert!(props.zones.is_empty());
        assert!(props.buttons.is_empty());
    }

    #[test]
    fn should_reject_malformed_document() {
        assert!(matches!(parse("[1, 2"), Err(DataError::Parse(_))));
    }

    #[test]
    fn should_report_missing_file() {
        let result = load(Path::new("does-not-exist.json"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
