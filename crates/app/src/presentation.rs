//! Presentation contract — how the scene list asks the hosting view to render.
//!
//! The controller picks one of two strategies from the current [`Mode`]:
//!
//! | Mode | Called per scene | Receives |
//! |------|------------------|----------|
//! | [`Mode::View`] | [`SceneRenderer::render_scene`] | the scene |
//! | [`Mode::Edit`] | [`SceneRenderer::render_scene_editor`] | [`SceneEditorProps`] |

use scenepanel_domain::button::Button;
use scenepanel_domain::list_state::{ListState, Mode, SceneList};
use scenepanel_domain::scene::Scene;
use scenepanel_domain::zone::Zone;

use crate::list_controller::SceneDeleter;

/// Everything the scene editor needs for one scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneEditorProps<'a> {
    /// The scene being edited.
    pub scene: &'a Scene,
    /// All scenes of the list.
    pub scenes: &'a SceneList,
    /// All zones, for the per-command zone picker.
    pub zones: &'a [Zone],
    /// Button configuration.
    pub buttons: &'a [Button],
    /// Deletion callback bound to the owning controller.
    pub on_destroy: &'a SceneDeleter,
}

/// Renders scenes for the hosting view.
pub trait SceneRenderer {
    type Output;

    /// Read-only rendering of a single scene.
    fn render_scene(&mut self, scene: &Scene) -> Self::Output;

    /// Editable rendering of a single scene.
    fn render_scene_editor(&mut self, props: SceneEditorProps<'_>) -> Self::Output;
}

/// Render every scene of `state`, in order, with the strategy for its mode.
pub fn render<R: SceneRenderer>(
    state: &ListState,
    deleter: &SceneDeleter,
    renderer: &mut R,
) -> Vec<R::Output> {
    match state.mode() {
        Mode::View => state
            .scenes()
            .iter()
            .map(|scene| renderer.render_scene(scene))
            .collect(),
        Mode::Edit => state
            .scenes()
            .iter()
            .map(|scene| {
                renderer.render_scene_editor(SceneEditorProps {
                    scene,
                    scenes: state.scenes(),
                    zones: state.zones(),
                    buttons: state.buttons(),
                    on_destroy: deleter,
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_controller::ListStateController;
    use crate::ports::ZoneSource;
    use scenepanel_domain::error::PanelError;
    use scenepanel_domain::id::SceneId;
    use scenepanel_domain::list_state::ListProps;
    use scenepanel_domain::zone::ZoneType;
    use std::future::Future;

    struct NoZones;

    impl ZoneSource for NoZones {
        fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, PanelError>> + Send {
            async { Ok(Vec::new()) }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Rendered {
        Scene(String),
        Editor { scene: String, zones: usize, scenes: usize },
    }

    #[derive(Default)]
    struct Recorder {
        delete_on_edit: Option<SceneId>,
    }

    impl SceneRenderer for Recorder {
        type Output = Rendered;

        fn render_scene(&mut self, scene: &Scene) -> Rendered {
            Rendered::Scene(scene.id.to_string())
        }

        fn render_scene_editor(&mut self, props: SceneEditorProps<'_>) -> Rendered {
            if let Some(id) = self.delete_on_edit.take() {
                props.on_destroy.delete(&id);
            }
            Rendered::Editor {
                scene: props.scene.id.to_string(),
                zones: props.zones.len(),
                scenes: props.scenes.len(),
            }
        }
    }

    fn controller() -> ListStateController<NoZones> {
        ListStateController::new(
            NoZones,
            ListProps {
                scenes: vec![Scene::new("1"), Scene::new("2")],
                zones: vec![
                    Zone::new("z1", ZoneType::Light),
                    Zone::new("z2", ZoneType::Shade),
                ],
                buttons: Vec::new(),
            },
        )
    }

    #[test]
    fn should_render_read_only_scenes_in_view_mode() {
        let controller = controller();
        let rendered = controller.render(&mut Recorder::default());
        assert_eq!(
            rendered,
            [
                Rendered::Scene("1".to_string()),
                Rendered::Scene("2".to_string())
            ]
        );
    }

    #[test]
    fn should_render_editors_with_zones_in_edit_mode() {
        let controller = controller();
        controller.enter_edit_mode();
        let rendered = controller.render(&mut Recorder::default());
        assert_eq!(
            rendered[1],
            Rendered::Editor {
                scene: "2".to_string(),
                zones: 2,
                scenes: 2
            }
        );
    }

    #[test]
    fn should_render_nothing_for_empty_list() {
        let controller = ListStateController::new(NoZones, ListProps::default());
        controller.enter_edit_mode();
        assert!(controller.render(&mut Recorder::default()).is_empty());
    }

    #[test]
    fn should_let_editor_delete_through_callback() {
        let controller = controller();
        controller.enter_edit_mode();
        let mut recorder = Recorder {
            delete_on_edit: Some(SceneId::from("2")),
        };

        let rendered = controller.render(&mut recorder);
        assert_eq!(rendered.len(), 2);

        let remaining: Vec<_> = controller
            .snapshot()
            .scenes()
            .iter()
            .map(|scene| scene.id.to_string())
            .collect();
        assert_eq!(remaining, ["1"]);
        assert_eq!(controller.render(&mut Recorder::default()).len(), 1);
    }
}
