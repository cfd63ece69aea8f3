//! Plain-text scene list rendering.

use scenepanel_app::presentation::{SceneEditorProps, SceneRenderer};
use scenepanel_domain::scene::Scene;
use scenepanel_domain::zone::{Zone, ZoneType};

/// Renders each scene as a block of text lines.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl SceneRenderer for TextRenderer {
    type Output = String;

    fn render_scene(&mut self, scene: &Scene) -> String {
        format!("{} [{}]", display_name(scene), scene.id)
    }

    fn render_scene_editor(&mut self, props: SceneEditorProps<'_>) -> String {
        let scene = props.scene;
        let address = scene
            .address
            .as_ref()
            .map(|address| format!(" address={address}"))
            .unwrap_or_default();
        let mut out = format!(
            "* {} [{}]{address} ({} of {} scenes, {} buttons)",
            display_name(scene),
            scene.id,
            position(props) + 1,
            props.scenes.len(),
            props.buttons.len()
        );
        for zone in props.zones {
            out.push_str("\n    ");
            out.push_str(&zone_picker(zone));
        }
        out
    }
}

/// One picker line; the zone's current type is bracketed.
fn zone_picker(zone: &Zone) -> String {
    let options: Vec<String> = ZoneType::ALL
        .into_iter()
        .map(|kind| {
            if kind == zone.zone_type {
                format!("[{}]", kind.label())
            } else {
                kind.label().to_string()
            }
        })
        .collect();
    format!("zone {} {}", zone.id, options.join(" "))
}

fn display_name(scene: &Scene) -> &str {
    if scene.name.is_empty() {
        "(unnamed)"
    } else {
        &scene.name
    }
}

fn position(props: SceneEditorProps<'_>) -> usize {
    props
        .scenes
        .iter()
        .position(|scene| scene.id == props.scene.id)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenepanel_app::list_controller::ListStateController;
    use scenepanel_app::ports::ZoneSource;
    use scenepanel_domain::error::PanelError;
    use scenepanel_domain::list_state::ListProps;
    use std::future::Future;

    struct NoZones;

    impl ZoneSource for NoZones {
        fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, PanelError>> + Send {
            async { Ok(Vec::new()) }
        }
    }

    fn controller() -> ListStateController<NoZones> {
        ListStateController::new(
            NoZones,
            ListProps {
                scenes: vec![Scene::new("s1").with_name("Evening"), Scene::new("s2")],
                zones: vec![Zone::new("z1", ZoneType::Switch)],
                buttons: Vec::new(),
            },
        )
    }

    #[test]
    fn should_render_one_line_per_scene_in_view_mode() {
        let lines = controller().render(&mut TextRenderer);
        assert_eq!(lines, ["Evening [s1]", "(unnamed) [s2]"]);
    }

    #[test]
    fn should_render_zone_pickers_in_edit_mode() {
        let controller = controller();
        controller.enter_edit_mode();
        let blocks = controller.render(&mut TextRenderer);
        assert_eq!(
            blocks[1],
            "* (unnamed) [s2] (2 of 2 scenes, 0 buttons)\n    zone z1 Unknown Light [Switch] Shade"
        );
    }

    #[test]
    fn should_bracket_current_type_of_each_zone_picker() {
        assert_eq!(
            zone_picker(&Zone::new("z9", ZoneType::Unknown)),
            "zone z9 [Unknown] Light Switch Shade"
        );
        assert_eq!(
            zone_picker(&Zone::new("z9", ZoneType::Shade)),
            "zone z9 Unknown Light Switch [Shade]"
        );
    }

    #[test]
    fn should_render_address_before_position() {
        let mut scene = Scene::new("s3").with_name("Night");
        scene.address = Some("1:7".to_string());
        let controller = ListStateController::new(
            NoZones,
            ListProps {
                scenes: vec![scene],
                zones: Vec::new(),
                buttons: Vec::new(),
            },
        );
        controller.enter_edit_mode();

        let blocks = controller.render(&mut TextRenderer);

        assert_eq!(blocks, ["* Night [s3] address=1:7 (1 of 1 scenes, 0 buttons)"]);
    }
}
