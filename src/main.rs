use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use endurance_viz::config::*;
use endurance_viz::ui::{
    CalculatorInputs, EfficiencyChart, chart_panel, controls_panel, recompute_chart, setup_camera,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<CalculatorInputs>()
        .init_resource::<EfficiencyChart>()
        .add_systems(Startup, setup_camera)
        .add_systems(Update, (
            // Side panel first so the central panel fills what is left
            controls_panel,
            recompute_chart.run_if(resource_changed::<CalculatorInputs>),
            chart_panel,
        ).chain())
        .run();
}
