//! egui overlay - the tuning panel.

use crate::config::Config;
use glam::Vec2;

/// Values the panel displays but does not edit
pub struct PanelReadout {
    pub target: Vec2,
    pub hook: Vec2,
    pub player: Vec2,
}

/// Actions requested through the UI, applied after the egui pass
#[derive(Default)]
pub struct UiActions {
    pub reset: bool,
}

/// Draw the tuning panel. Sliders and the checkbox edit the live config;
/// button presses are returned through `actions`.
pub fn draw_tuning_panel(
    ctx: &egui::Context,
    readout: &PanelReadout,
    config: &mut Config,
    actions: &mut UiActions,
) {
    egui::Window::new("Grapple")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "target  ({:6.1}, {:6.1})",
                readout.target.x, readout.target.y
            ));
            ui.label(format!(
                "hook    ({:6.1}, {:6.1})",
                readout.hook.x, readout.hook.y
            ));
            ui.label(format!(
                "player  ({:6.1}, {:6.1})",
                readout.player.x, readout.player.y
            ));

            ui.separator();

            ui.add(
                egui::Slider::new(&mut config.hook_smoothing, 0.01..=0.95)
                    .text("hook smoothing"),
            );
            ui.add(
                egui::Slider::new(&mut config.player_smoothing, 0.01..=0.95)
                    .text("player smoothing"),
            );
            ui.checkbox(
                &mut config.frame_rate_independent,
                "frame-rate independent",
            )
            .on_hover_text(
                "Re-expresses the per-tick rates per elapsed second. \
                 Off = the reference fixed-fraction-per-tick behavior.",
            );

            ui.separator();

            if ui.button("Reset scene (R)").clicked() {
                actions.reset = true;
            }

            ui.small("click: fire grapple · drag: pan · scroll: zoom · Tab: hide");
        });
}
