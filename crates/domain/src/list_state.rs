//! Scene list state — the collections and mode behind the scene list.
//!
//! [`ListState`] is mutated in exactly three ways:
//!
//! 1. wholesale, field-independent overwrite from new props ([`ListState::apply`])
//! 2. a zone overwrite from the backend refresh ([`ListState::replace_zones`])
//! 3. removal of a single scene by id ([`ListState::delete_scene`])
//!
//! plus the one-way switch from [`Mode::View`] to [`Mode::Edit`].

use serde::{Deserialize, Serialize};

use crate::button::Button;
use crate::id::SceneId;
use crate::scene::Scene;
use crate::zone::Zone;

/// How the scene list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Read-only rendering.
    #[default]
    View,
    /// Rendering with editors and delete controls.
    Edit,
}

/// Ordered scenes with unique ids.
///
/// Order is arrival order and is significant for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneList(Vec<Scene>);

impl SceneList {
    /// Build a list from caller-supplied scenes.
    ///
    /// The first scene for any id wins. Later scenes reusing an id are
    /// returned as rejected so the caller can report them.
    #[must_use]
    pub fn from_scenes(scenes: Vec<Scene>) -> (Self, Vec<Scene>) {
        let mut kept: Vec<Scene> = Vec::with_capacity(scenes.len());
        let mut rejected = Vec::new();
        for scene in scenes {
            if kept.iter().any(|existing| existing.id == scene.id) {
                rejected.push(scene);
            } else {
                kept.push(scene);
            }
        }
        (Self(kept), rejected)
    }

    /// Remove the scene with the given id, preserving the order of the rest.
    ///
    /// Returns `None` and leaves the list untouched when no scene matches.
    pub fn remove(&mut self, id: &SceneId) -> Option<Scene> {
        let index = self.0.iter().position(|scene| &scene.id == id)?;
        Some(self.0.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &SceneId) -> Option<&Scene> {
        self.0.iter().find(|scene| &scene.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &SceneId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Scene] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SceneList {
    type Item = &'a Scene;
    type IntoIter = std::slice::Iter<'a, Scene>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Props supplied when the scene list is created.
#[derive(Debug, Clone, Default)]
pub struct ListProps {
    pub scenes: Vec<Scene>,
    pub zones: Vec<Zone>,
    pub buttons: Vec<Button>,
}

/// A props update where every field is independently optional.
///
/// A present field replaces the corresponding collection wholesale (no merge
/// by id); an absent field leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct PropsUpdate {
    pub scenes: Option<Vec<Scene>>,
    pub zones: Option<Vec<Zone>>,
    pub buttons: Option<Vec<Button>>,
}

impl PropsUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scenes(mut self, scenes: Vec<Scene>) -> Self {
        self.scenes = Some(scenes);
        self
    }

    #[must_use]
    pub fn zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = Some(zones);
        self
    }

    #[must_use]
    pub fn buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = Some(buttons);
        self
    }

    /// Whether the update carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_none() && self.zones.is_none() && self.buttons.is_none()
    }
}

/// Canonical in-memory state of the scene list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    mode: Mode,
    scenes: SceneList,
    zones: Vec<Zone>,
    buttons: Vec<Button>,
}

impl ListState {
    /// Create the state in [`Mode::View`] from the initial props.
    ///
    /// Returns the state along with any scenes dropped for reusing an id.
    #[must_use]
    pub fn new(props: ListProps) -> (Self, Vec<Scene>) {
        let (scenes, rejected) = SceneList::from_scenes(props.scenes);
        let state = Self {
            mode: Mode::View,
            scenes,
            zones: props.zones,
            buttons: props.buttons,
        };
        (state, rejected)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn scenes(&self) -> &SceneList {
        &self.scenes
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Switch to [`Mode::Edit`]. There is no way back to [`Mode::View`].
    pub fn enter_edit_mode(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Apply a props update, field by field.
    ///
    /// Returns scenes dropped for reusing an id within the new collection.
    pub fn apply(&mut self, update: PropsUpdate) -> Vec<Scene> {
        let mut rejected = Vec::new();
        if let Some(scenes) = update.scenes {
            let (scenes, dropped) = SceneList::from_scenes(scenes);
            self.scenes = scenes;
            rejected = dropped;
        }
        if let Some(zones) = update.zones {
            self.zones = zones;
        }
        if let Some(buttons) = update.buttons {
            self.buttons = buttons;
        }
        rejected
    }

    /// Remove the scene with `id`. Returns whether a scene was removed.
    pub fn delete_scene(&mut self, id: &SceneId) -> bool {
        self.scenes.remove(id).is_some()
    }

    /// Replace the zones wholesale.
    pub fn replace_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
    }
}
