//! Zone — an addressable device or area carrying a classification type.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::ZoneId;

/// Classification of what a zone controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    #[default]
    Unknown,
    Light,
    Switch,
    Shade,
}

impl ZoneType {
    /// Every zone type, in the order a picker lists them.
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Light, Self::Switch, Self::Shade];

    /// Wire representation (`"unknown"`, `"light"`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Light => "light",
            Self::Switch => "switch",
            Self::Shade => "shade",
        }
    }

    /// Human readable label shown in pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Light => "Light",
            Self::Switch => "Switch",
            Self::Shade => "Shade",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownZoneType(s.to_string()))
    }
}

/// Lenient wire decoding: `null`, `""` and values outside the enum all read
/// as [`ZoneType::Unknown`], so one odd zone cannot fail a whole zone list.
/// Use [`FromStr`] for strict parsing.
impl<'de> Deserialize<'de> for ZoneType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(Self::Unknown),
            Some(value) => Ok(value.parse().unwrap_or_else(|err: ValidationError| {
                tracing::warn!(error = %err, "zone type outside the known set, using unknown");
                Self::Unknown
            })),
        }
    }
}

/// A zone as served by `GET /api/v1/systems/{id}/zones`.
///
/// Fields the panel does not interpret are kept in `extra` so a zone
/// survives a deserialize/serialize cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: ZoneId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(rename = "type", default)]
    pub zone_type: ZoneType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Zone {
    /// Create a zone with only an id and a type.
    #[must_use]
    pub fn new(id: impl Into<ZoneId>, zone_type: ZoneType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address: None,
            description: None,
            device_id: None,
            zone_type,
            output: None,
            extra: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
