use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::Aggregate;
use crate::state::{DashboardState, Session};
use crate::ui::chart;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title plus loaded/shown counts once the session is
/// ready.
pub fn top_bar(ui: &mut Ui, session: &Session) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Market 1 CMS");
        if let Session::Ready(state) = session {
            ui.separator();
            ui.label(format!(
                "{} projects loaded, {} shown",
                state.dataset().len(),
                state.visible_indices.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Dashboard (central panel, Ready state only)
// ---------------------------------------------------------------------------

/// Render the full dashboard: selector, cards, chart, table.
pub fn dashboard(ui: &mut Ui, state: &mut DashboardState) {
    filter_selector(ui, state);
    ui.add_space(8.0);
    summary_cards(ui, &state.aggregate);
    ui.add_space(8.0);

    ui.heading("Project Costs by Supervisor");
    chart::cost_chart(ui, &state.aggregate, &state.color_map);
    ui.add_space(8.0);

    ui.heading("Projects List");
    projects_table(ui, state);
}

/// The supervisor selector. Emits the one filter-change event the store
/// consumes; the first entry clears the filter.
fn filter_selector(ui: &mut Ui, state: &mut DashboardState) {
    let current = state.supervisor_filter.clone();
    let selected_text = if current.is_empty() {
        "All Supervisors".to_string()
    } else {
        current.clone()
    };

    let mut selection: Option<String> = None;
    egui::ComboBox::from_id_salt("supervisor_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current.is_empty(), "All Supervisors")
                .clicked()
            {
                selection = Some(String::new());
            }
            for supervisor in state.supervisors() {
                if ui
                    .selectable_label(current == *supervisor, supervisor.as_str())
                    .clicked()
                {
                    selection = Some(supervisor.clone());
                }
            }
        });

    if let Some(supervisor) = selection {
        state.set_filter(supervisor);
    }
}

fn summary_cards(ui: &mut Ui, aggregate: &Aggregate) {
    ui.horizontal(|ui: &mut Ui| {
        ui.group(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.strong("Total Projects");
                ui.heading(aggregate.record_count.to_string());
            });
        });
        ui.group(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.strong("Total Cost");
                ui.heading(format_currency(aggregate.total_cost));
            });
        });
    });
}

fn projects_table(ui: &mut Ui, state: &DashboardState) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("NTP Number");
            });
            header.col(|ui| {
                ui.strong("Supervisor");
            });
            header.col(|ui| {
                ui.strong("Cost");
            });
        })
        .body(|mut body| {
            for record in state.visible_records() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(record.id.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.supervisor.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format_currency(record.cost));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Currency formatting (render time only)
// ---------------------------------------------------------------------------

/// Format a cost for display: `$1,234,567.89`. The data model keeps raw
/// `f64` values; rounding happens only here.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn rounds_to_cents_and_keeps_the_sign() {
        assert_eq!(format_currency(2.006), "$2.01");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }
}
