//! Zone source port — fetches the zones of the active system.

use std::future::Future;

use scenepanel_domain::error::PanelError;
use scenepanel_domain::zone::Zone;

/// Fetches the full zone collection from the backend.
pub trait ZoneSource: Send + Sync {
    /// Fetch every zone of the active system.
    fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, PanelError>> + Send;
}

impl<T: ZoneSource> ZoneSource for std::sync::Arc<T> {
    fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, PanelError>> + Send {
        (**self).fetch_zones()
    }
}
