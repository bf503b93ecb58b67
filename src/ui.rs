use crate::chart::{compute_chart, ChartModel};
use crate::config::*;
use crate::efficiency::{InputField, Inputs};
use crate::markers::ChartColor;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints, PlotTransform, Points};

/// Slider order in the side panel
const SLIDER_FIELDS: [InputField; 4] = [
    InputField::EnduranceLevel,
    InputField::Control,
    InputField::Complexity,
    InputField::StatLevel,
];

/// Resource holding the current slider values
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct CalculatorInputs(pub Inputs);

/// Resource holding the chart built from the current inputs
#[derive(Resource)]
pub struct EfficiencyChart(pub ChartModel);

impl Default for EfficiencyChart {
    fn default() -> Self {
        Self(compute_chart(Inputs::default()))
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System to rebuild the chart; scheduled to run only when the inputs changed
pub fn recompute_chart(inputs: Res<CalculatorInputs>, mut chart: ResMut<EfficiencyChart>) {
    let model = compute_chart(inputs.0);

    info!(
        "recomputed chart: endurance={} control={} complexity={} stat={} adjusted_pool={:.1}",
        inputs.0.endurance_level(),
        inputs.0.control(),
        inputs.0.complexity(),
        inputs.0.stat_level(),
        model.adjusted_pool
    );
    let [burst, mid, fade] = model.samples;
    debug!(
        "sample indices: burst={} mid={} fade={}",
        burst.index, mid.index, fade.index
    );

    chart.0 = model;
}

/// Left panel with the four sliders and the derived values
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut inputs: ResMut<CalculatorInputs>,
    chart: Res<EfficiencyChart>,
) {
    let mut next = inputs.0;

    egui::SidePanel::left("controls")
        .exact_width(SIDE_PANEL_WIDTH)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Parameters");
            ui.separator();

            for field in SLIDER_FIELDS {
                let (min, max) = field.range();
                let mut value = next.get(field);
                ui.add(egui::Slider::new(&mut value, min..=max).text(field.to_string()));
                // The slider clamps to the field's range, so this only fails on a bad range table
                match next.with(field, value) {
                    Ok(updated) => next = updated,
                    Err(err) => warn!("ignoring slider value: {}", err),
                }
            }

            ui.add_space(8.0);
            if ui.button("↺ Reset to defaults").clicked() {
                next = Inputs::default();
            }

            ui.separator();
            ui.heading("Derived");
            ui.separator();

            let model = &chart.0;
            ui.label(format!("Endurance Pool: {:.1}", model.endurance_pool));
            ui.label(format!("Multiplier: {:.2}", model.multiplier));
            ui.label(format!("Adjusted Pool: {:.1}", model.adjusted_pool));
        });

    inputs.set_if_neq(CalculatorInputs(next));
}

/// Central panel with the uses curve
pub fn chart_panel(mut contexts: EguiContexts, chart: Res<EfficiencyChart>) {
    let model = &chart.0;

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.heading(WINDOW_TITLE);
        ui.label(egui::RichText::new(model.title()).strong());
        ui.separator();
        draw_uses_plot(ui, model);
    });
}

fn color32(color: ChartColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

fn draw_uses_plot(ui: &mut egui::Ui, model: &ChartModel) {
    let (x_min, x_max) = model.x_range();
    let y_limit = model.y_limit();

    let curve = Line::new(PlotPoints::from(model.curve_points()))
        .name("Uses vs Output")
        .color(color32(ChartColor::Crimson))
        .width(CURVE_WIDTH);

    let response = Plot::new("uses_plot")
        .x_axis_label("Output Power (Stat Level)")
        .y_axis_label("Number of Uses (Adjusted)")
        .legend(Legend::default().position(Corner::RightTop))
        .show_grid(true)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, 0.0], [x_max, y_limit]));
            plot_ui.line(curve);

            for point in &model.samples {
                plot_ui.points(
                    Points::new(vec![[point.output, point.uses]])
                        .name(point.legend_label())
                        .color(color32(point.kind.color()))
                        .radius(MARKER_RADIUS)
                        .filled(true),
                );
            }
        });

    draw_summary_box(ui, &response.transform, model);
}

/// Max/min uses and adjusted pool, on a white box anchored at its bottom-left
fn draw_summary_box(ui: &egui::Ui, transform: &PlotTransform, model: &ChartModel) {
    let [x, y] = model.summary_anchor();
    let anchor = transform.position_from_point(&PlotPoint::new(x, y));

    let galley = ui.painter().layout_no_wrap(
        model.summary_text(),
        egui::FontId::proportional(13.0),
        egui::Color32::BLACK,
    );
    let padding = egui::vec2(6.0, 4.0);
    let rect = egui::Rect::from_min_size(anchor - egui::vec2(0.0, galley.size().y), galley.size())
        .expand2(padding);

    let painter = ui.painter_at(*transform.frame());
    painter.rect_filled(
        rect,
        egui::Rounding::same(3.0),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 204),
    );
    painter.galley(rect.min + padding, galley, egui::Color32::BLACK);
}
