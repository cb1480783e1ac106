use crate::wind::events::{ReloadWindConfig, SaveWindConfig};
use crate::wind::resources::{PublishedWind, WindSettings, WindSimulation};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use windsim::config::{DirectionConfig, EvaluatePolicy, WindConfig};

pub fn render_wind_ui(
    mut contexts: EguiContexts,
    mut settings: ResMut<WindSettings>,
    simulation: Res<WindSimulation>,
    published: Res<PublishedWind>,
    mut reload_events: MessageWriter<ReloadWindConfig>,
    mut save_events: MessageWriter<SaveWindConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Edit a copy so the settings are only marked changed when a value moved
    let mut config = settings.config.clone();

    egui::SidePanel::right("wind_panel")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Wind");
                ui.add_space(10.0);

                render_state(ui, &simulation, &published, config.zone.strength);
                ui.separator();
                render_settings(ui, &mut config);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Reload (R)").clicked() {
                        reload_events.write(ReloadWindConfig);
                    }
                    if ui.button("Save").clicked() {
                        save_events.write(SaveWindConfig);
                    }
                });
                ui.label(format!("File: {}", settings.path.display()));
            });
        });

    if config != settings.config {
        settings.config = config;
    }
}

fn render_state(
    ui: &mut egui::Ui,
    simulation: &WindSimulation,
    published: &PublishedWind,
    strength: f32,
) {
    let direction = simulation.direction();
    let forward = direction.forward();
    ui.label(format!("Direction: ({:+.2}, {:+.2})", forward.x, forward.y));
    ui.add(
        egui::ProgressBar::new(direction.rotate_progress())
            .text(format!("Rotation {:.0}%", direction.rotate_progress() * 100.0)),
    );
    ui.label(format!("Live wind: {:+.2}", published.active().x));

    ui.add_space(6.0);
    ui.label("History (oldest first)");
    let range = strength.max(f32::EPSILON);
    for (index, vector) in published.vectors.iter().enumerate() {
        // centre the bar so calm sits at half
        let fill = (vector.x / range * 0.5 + 0.5).clamp(0.0, 1.0);
        ui.add(egui::ProgressBar::new(fill).text(format!("{}: {:+.2}", index, vector.x)));
    }
}

fn render_settings(ui: &mut egui::Ui, config: &mut WindConfig) {
    ui.label("Decay seconds:");
    ui.add(egui::Slider::new(&mut config.buffer.decay_seconds, 0.0..=2.0).step_by(0.05));

    ui.label("Strength:");
    ui.add(egui::Slider::new(&mut config.zone.strength, 0.0..=5.0).step_by(0.1));

    render_direction_settings(ui, &mut config.direction);
}

fn render_direction_settings(ui: &mut egui::Ui, direction: &mut DirectionConfig) {
    ui.label("Evaluate seconds:");
    ui.add(egui::Slider::new(&mut direction.evaluate_seconds_min, 0.0..=20.0).text("min"));
    ui.add(egui::Slider::new(&mut direction.evaluate_seconds_max, 0.0..=20.0).text("max"));

    ui.label("Rotate seconds:");
    ui.add(egui::Slider::new(&mut direction.rotate_seconds_min, 0.0..=10.0).text("min"));
    ui.add(egui::Slider::new(&mut direction.rotate_seconds_max, 0.0..=10.0).text("max"));

    // keep ranges ordered while dragging
    direction.evaluate_seconds_max = direction.evaluate_seconds_max.max(direction.evaluate_seconds_min);
    direction.rotate_seconds_max = direction.rotate_seconds_max.max(direction.rotate_seconds_min);

    ui.label("Evaluation period:");
    ui.radio_value(
        &mut direction.evaluate_policy,
        EvaluatePolicy::IncludeRotation,
        "Includes rotation",
    );
    ui.radio_value(
        &mut direction.evaluate_policy,
        EvaluatePolicy::Independent,
        "Independent",
    );
}
