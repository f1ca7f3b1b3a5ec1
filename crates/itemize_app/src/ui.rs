use eframe::egui;
use itemize_core::{AppViewModel, ItemRowView, Msg, ResultsView};

/// Renders the whole window from the view model and returns the messages the
/// user's interactions produced this frame.
pub fn view(ui: &mut egui::Ui, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.heading("Invoice Parser");
    ui.add_space(8.0);

    let mut text = view.invoice_text.clone();
    let input = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text("Paste invoice text here...")
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );
    if input.changed() {
        msgs.push(Msg::InputChanged(text));
    }

    ui.add_space(4.0);
    let label = if view.loading {
        "Parsing..."
    } else {
        "Parse Invoice"
    };
    if ui
        .add_enabled(!view.loading, egui::Button::new(label))
        .clicked()
    {
        msgs.push(Msg::ParseClicked);
    }

    if view.loading {
        ui.label("Loading...");
    }
    if let Some(error) = &view.error {
        ui.colored_label(egui::Color32::RED, format!("Error: {error}"));
    }

    match &view.results {
        ResultsView::NotParsed => {}
        ResultsView::Empty => {
            if !view.loading {
                ui.label("No items extracted.");
            }
        }
        ResultsView::Items(rows) => {
            ui.add_space(8.0);
            ui.heading("Extracted Items:");
            if view.edit_mode {
                if ui.button("Save").clicked() {
                    msgs.push(Msg::SaveClicked);
                }
            } else if ui.button("Edit").clicked() {
                msgs.push(Msg::EditClicked);
            }
            for row in rows {
                item_row(ui, view.edit_mode, row, &mut msgs);
            }
        }
    }

    msgs
}

fn item_row(ui: &mut egui::Ui, edit_mode: bool, row: &ItemRowView, msgs: &mut Vec<Msg>) {
    ui.add_space(6.0);
    ui.group(|ui| {
        egui::Grid::new(("extracted_item", row.index))
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for slot in &row.fields {
                    ui.label(egui::RichText::new(format!("{}:", slot.label)).strong());
                    if edit_mode {
                        let mut value = slot.edit_text.clone();
                        if ui.text_edit_singleline(&mut value).changed() {
                            msgs.push(Msg::FieldEdited {
                                index: row.index,
                                field: slot.field,
                                value,
                            });
                        }
                    } else {
                        ui.label(&slot.display);
                    }
                    ui.end_row();
                }
            });
    });
}
