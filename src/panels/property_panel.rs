use crate::DesignApp;
use crate::command::Command;
use crate::element::properties::{
    FieldKind, FieldSpec, FieldValue, fields_for, patch_field, read_field,
};
use crate::element::{Element, ElementKind};
use crate::renderer::parse_hex_color;

pub fn property_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::SidePanel::right("property_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Properties");

            // Edit a copy; changes go back through commands so they are recorded.
            let Some(element) = app.session().selected_element().cloned() else {
                ui.label("Select an element to edit it.");
                return;
            };

            ui.label(format!("{} · {}", element.kind().name(), element.id()));
            ui.separator();

            let kind = element.kind();
            for spec in fields_for(kind) {
                if let Some(value) = field_editor(ui, &element, spec) {
                    if let Some(patch) = patch_field(kind, spec.name, value) {
                        app.execute_command(Command::UpdateElement {
                            id: element.id().clone(),
                            patch,
                        });
                    }
                }
            }

            if kind != ElementKind::Background {
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Duplicate").clicked() {
                        app.execute_command(Command::DuplicateElement(element.id().clone()));
                    }
                    if ui.button("Delete").clicked() {
                        app.execute_command(Command::RemoveElement(element.id().clone()));
                    }
                });
            }
        });
}

/// Shows one field and returns the new value when the user changed it.
fn field_editor(ui: &mut egui::Ui, element: &Element, spec: &FieldSpec) -> Option<FieldValue> {
    let current = read_field(element, spec.name);
    ui.label(spec.label);

    match spec.kind {
        FieldKind::Text => {
            let mut text = current
                .as_ref()
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string();
            let response = ui.text_edit_multiline(&mut text);
            response.changed().then_some(FieldValue::Text(text))
        }
        FieldKind::Integer { min, max } => {
            let mut value = current
                .as_ref()
                .and_then(FieldValue::as_integer)
                .unwrap_or(min.max(0));
            let changed = if min == i32::MIN && max == i32::MAX {
                ui.add(egui::DragValue::new(&mut value)).changed()
            } else {
                ui.add(egui::Slider::new(&mut value, min..=max)).changed()
            };
            changed.then_some(FieldValue::Integer(value))
        }
        FieldKind::Choice(names) => {
            let selected = current
                .as_ref()
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string();
            let mut picked = None;
            egui::ComboBox::from_id_salt(spec.name)
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for name in names {
                        let clicked = ui.selectable_label(selected == *name, *name).clicked();
                        if clicked && selected != *name {
                            picked = Some(FieldValue::Text(name.to_string()));
                        }
                    }
                });
            picked
        }
        FieldKind::Color(palette) | FieldKind::Gradient(palette) => {
            let selected = current.as_ref().and_then(FieldValue::as_text).map(str::to_string);
            swatches(ui, spec, palette, selected.as_deref())
        }
    }
}

fn swatches(
    ui: &mut egui::Ui,
    spec: &FieldSpec,
    palette: &[&str],
    selected: Option<&str>,
) -> Option<FieldValue> {
    let mut picked = None;
    let is_gradient = matches!(spec.kind, FieldKind::Gradient(_));
    let size = if is_gradient {
        egui::vec2(64.0, 28.0)
    } else {
        egui::vec2(28.0, 28.0)
    };

    ui.horizontal_wrapped(|ui| {
        for value in palette {
            let fill = if is_gradient {
                crate::renderer::gradient_stops(value).map(|stops| stops.from)
            } else {
                parse_hex_color(value)
            }
            .unwrap_or(egui::Color32::GRAY);

            let mut button = egui::Button::new("").fill(fill).min_size(size);
            if selected == Some(*value) {
                let accent = egui::Color32::from_rgb(0x4F, 0x46, 0xE5);
                button = button.stroke(egui::Stroke::new(2.0, accent));
            }
            if ui.add(button).on_hover_text(*value).clicked() && selected != Some(*value) {
                picked = Some(FieldValue::Text(value.to_string()));
            }
        }
    });
    picked
}
