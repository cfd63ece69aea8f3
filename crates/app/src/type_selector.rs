//! Zone type selector — the state machine behind the zone type picker.
//!
//! The selector owns a single [`ZoneType`] and tells its owner about every
//! selection. When it comes up with the default (`unknown`) it also sends one
//! synthetic notification on activation, so an owning record can persist the
//! default without any user interaction.

use std::fmt;
use std::str::FromStr;

use scenepanel_domain::error::ValidationError;
use scenepanel_domain::zone::ZoneType;

type ChangeCallback = Box<dyn FnMut(ZoneType) + Send>;

/// Selection state for one zone's type.
pub struct TypeSelector {
    value: ZoneType,
    on_change: Option<ChangeCallback>,
    activated: bool,
}

impl TypeSelector {
    /// Create a selector, defaulting to [`ZoneType::Unknown`].
    #[must_use]
    pub fn new(initial: Option<ZoneType>) -> Self {
        Self {
            value: initial.unwrap_or_default(),
            on_change: None,
            activated: false,
        }
    }

    /// Create a selector from a raw zone `type` attribute.
    ///
    /// An empty attribute means no type was given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownZoneType`] for a non-empty value
    /// outside the zone type enum.
    pub fn from_attribute(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Ok(Self::new(None));
        }
        ZoneType::from_str(raw).map(|kind| Self::new(Some(kind)))
    }

    /// Register the change notification.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(ZoneType) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Currently selected type.
    #[must_use]
    pub fn value(&self) -> ZoneType {
        self.value
    }

    /// Picker options as `(value, label)` pairs, in display order.
    pub fn options() -> impl Iterator<Item = (ZoneType, &'static str)> {
        ZoneType::ALL.into_iter().map(|kind| (kind, kind.label()))
    }

    /// Activation hook.
    ///
    /// Notifies the owner with `unknown` when the selector holds the default.
    /// Only the first activation can notify.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        if self.value == ZoneType::Unknown {
            tracing::trace!("zone type defaulted to unknown");
            self.notify();
        }
    }

    /// Select a type and notify the owner, even if it is already selected.
    pub fn select(&mut self, kind: ZoneType) {
        self.value = kind;
        tracing::trace!(zone_type = %kind, "zone type selected");
        self.notify();
    }

    /// Select a type from a raw picker value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownZoneType`] when `raw` is not a zone
    /// type; the current value is kept and no notification is sent.
    pub fn select_raw(&mut self, raw: &str) -> Result<(), ValidationError> {
        let kind = ZoneType::from_str(raw)?;
        self.select(kind);
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.value);
        }
    }
}

impl Default for TypeSelector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSelector")
            .field("value", &self.value)
            .field("activated", &self.activated)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
