//! Scene list controller — owns the scene list state for one activation lifetime.
//!
//! The hosting view drives the lifecycle explicitly:
//!
//! 1. [`new`](ListStateController::new) — mirror the initial props, [`Mode::View`]
//! 2. [`activate`](ListStateController::activate) — issue the one zone refresh
//! 3. [`update`](ListStateController::update), [`enter_edit_mode`](ListStateController::enter_edit_mode),
//!    [`delete_scene`](ListStateController::delete_scene), [`render`](ListStateController::render)
//! 4. [`dispose`](ListStateController::dispose) — cancel the refresh if still pending
//!
//! A refresh that resolves after disposal never touches the state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::task::JoinHandle;

use scenepanel_domain::error::ValidationError;
use scenepanel_domain::id::SceneId;
use scenepanel_domain::list_state::{ListProps, ListState, Mode, PropsUpdate};
use scenepanel_domain::scene::Scene;

use crate::ports::ZoneSource;
use crate::presentation::{self, SceneRenderer};

#[derive(Debug)]
struct Shared {
    state: ListState,
    disposed: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn duplicate_errors(rejected: &[Scene]) -> impl Iterator<Item = ValidationError> + '_ {
    rejected
        .iter()
        .map(|scene| ValidationError::DuplicateSceneId(scene.id.clone()))
}

fn report_duplicates(rejected: &[Scene]) {
    for err in duplicate_errors(rejected) {
        tracing::warn!(error = %err, "scene dropped from props");
    }
}

fn delete_in(state: &mut ListState, id: &SceneId) -> bool {
    let removed = state.delete_scene(id);
    if removed {
        tracing::debug!(scene_id = %id, remaining = state.scenes().len(), "scene deleted");
    } else {
        tracing::debug!(scene_id = %id, "no scene to delete");
    }
    removed
}

enum Refresh {
    Idle,
    Pending(JoinHandle<()>),
    Done,
}

/// Controller owning the [`ListState`] behind the scene list.
pub struct ListStateController<S> {
    source: Arc<S>,
    shared: Arc<Mutex<Shared>>,
    refresh: Refresh,
}

impl<S: ZoneSource + 'static> ListStateController<S> {
    /// Create the controller in [`Mode::View`] from the initial props.
    ///
    /// Nothing is fetched until [`activate`](Self::activate) is called.
    pub fn new(source: S, props: ListProps) -> Self {
        let (state, rejected) = ListState::new(props);
        report_duplicates(&rejected);
        Self {
            source: Arc::new(source),
            shared: Arc::new(Mutex::new(Shared {
                state,
                disposed: false,
            })),
            refresh: Refresh::Idle,
        }
    }

    /// Issue the zone refresh for this controller.
    ///
    /// Only the first call fetches; the refresh is never re-triggered.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn activate(&mut self) {
        if !matches!(self.refresh, Refresh::Idle) {
            tracing::debug!("zone refresh already issued");
            return;
        }
        let handle = tokio::spawn(refresh_zones(
            Arc::clone(&self.source),
            Arc::downgrade(&self.shared),
        ));
        self.refresh = Refresh::Pending(handle);
    }

    /// Whether the zone refresh has been issued but not yet awaited.
    #[must_use]
    pub fn is_refresh_pending(&self) -> bool {
        matches!(&self.refresh, Refresh::Pending(handle) if !handle.is_finished())
    }

    /// Wait for the zone refresh to resolve, successfully or not.
    ///
    /// Returns immediately when no refresh is pending.
    pub async fn settle(&mut self) {
        let Refresh::Pending(handle) = std::mem::replace(&mut self.refresh, Refresh::Done) else {
            return;
        };
        if let Err(err) = handle.await {
            tracing::warn!(error = %err, "zone refresh task did not complete");
        }
    }

    /// Apply new props; each present field replaces its collection wholesale.
    pub fn update(&self, update: PropsUpdate) {
        let rejected = lock(&self.shared).state.apply(update);
        report_duplicates(&rejected);
    }

    /// Switch to edit mode. Repeated calls are no-ops.
    pub fn enter_edit_mode(&self) {
        lock(&self.shared).state.enter_edit_mode();
    }

    /// Remove the first scene whose id matches. Unknown ids are ignored.
    ///
    /// Returns whether a scene was removed.
    pub fn delete_scene(&self, id: &SceneId) -> bool {
        delete_in(&mut lock(&self.shared).state, id)
    }

    /// A deletion callback bound to [`delete_scene`](Self::delete_scene).
    #[must_use]
    pub fn deleter(&self) -> SceneDeleter {
        SceneDeleter {
            shared: Arc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        lock(&self.shared).state.mode()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ListState {
        lock(&self.shared).state.clone()
    }

    /// Render every scene through `renderer` using the strategy for the
    /// current mode.
    ///
    /// The state is snapshotted first, so the renderer may call back into
    /// the controller (e.g. through the [`SceneDeleter`]).
    pub fn render<R: SceneRenderer>(&self, renderer: &mut R) -> Vec<R::Output> {
        let state = self.snapshot();
        presentation::render(&state, &self.deleter(), renderer)
    }

    /// Tear the controller down, cancelling a pending refresh.
    pub fn dispose(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        {
            let mut shared = lock(&self.shared);
            if shared.disposed {
                return;
            }
            shared.disposed = true;
        }
        if let Refresh::Pending(handle) = std::mem::replace(&mut self.refresh, Refresh::Done) {
            handle.abort();
            tracing::debug!("pending zone refresh aborted");
        }
        tracing::debug!("scene list controller disposed");
    }
}

impl<S> Drop for ListStateController<S> {
    fn drop(&mut self) {
        lock(&self.shared).disposed = true;
        if let Refresh::Pending(handle) = &self.refresh {
            handle.abort();
        }
    }
}

async fn refresh_zones<S: ZoneSource>(source: Arc<S>, shared: Weak<Mutex<Shared>>) {
    tracing::debug!("zone refresh started");
    let result = source.fetch_zones().await;

    let Some(shared) = shared.upgrade() else {
        tracing::debug!("zone refresh resolved after controller was dropped");
        return;
    };
    let mut shared = lock(&shared);
    if shared.disposed {
        tracing::debug!("zone refresh resolved after disposal, ignoring");
        return;
    }
    match result {
        Ok(zones) => {
            tracing::info!(count = zones.len(), "zones refreshed");
            shared.state.replace_zones(zones);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to refresh zones, keeping previous zones");
        }
    }
}

/// Deletion callback handed to the edit-mode renderer.
///
/// Holds only a weak reference: once the controller is disposed every call
/// is a silent no-op.
#[derive(Debug, Clone)]
pub struct SceneDeleter {
    shared: Weak<Mutex<Shared>>,
}

impl SceneDeleter {
    /// Delete the scene with `id` from the owning controller.
    ///
    /// Returns whether a scene was removed.
    pub fn delete(&self, id: &SceneId) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            tracing::debug!(scene_id = %id, "scene deletion after disposal ignored");
            return false;
        };
        let mut shared = lock(&shared);
        if shared.disposed {
            tracing::debug!(scene_id = %id, "scene deletion after disposal ignored");
            return false;
        }
        delete_in(&mut shared.state, id)
    }
}
