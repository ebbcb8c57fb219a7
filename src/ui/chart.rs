use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::data::aggregate::Aggregate;

// ---------------------------------------------------------------------------
// Cost-by-supervisor bar chart
// ---------------------------------------------------------------------------

/// Render one bar per supervisor label, coloured via the session
/// [`ColorMap`], with the labels on the x axis.
pub fn cost_chart(ui: &mut Ui, aggregate: &Aggregate, colors: &ColorMap) {
    let labels: Vec<String> = aggregate.cost_by_supervisor.keys().cloned().collect();

    let bars: Vec<Bar> = aggregate
        .cost_by_supervisor
        .iter()
        .enumerate()
        .map(|(i, (label, &cost))| {
            Bar::new(i as f64, cost)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.6)
        })
        .collect();

    Plot::new("cost_by_supervisor")
        .legend(Legend::default())
        .height(260.0)
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_label("Cost")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
