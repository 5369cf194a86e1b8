use crate::DesignApp;
use crate::command::Command;
use crate::element::ShapeType;

pub fn tools_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Elements");

            if ui.button("🅰 Add Text").clicked() {
                app.execute_command(Command::AddText);
            }
            ui.horizontal(|ui| {
                if ui.button("⬜ Rectangle").clicked() {
                    app.execute_command(Command::AddShape(ShapeType::Rectangle));
                }
                if ui.button("⭕ Circle").clicked() {
                    app.execute_command(Command::AddShape(ShapeType::Circle));
                }
            });

            ui.separator();
            ui.strong("Shapes");
            egui::Grid::new("shape_palette")
                .num_columns(3)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for (i, shape_type) in ShapeType::ALL.into_iter().enumerate() {
                        let button = egui::Button::new(shape_type.icon())
                            .min_size(egui::vec2(48.0, 40.0));
                        if ui.add(button).on_hover_text(shape_type.name()).clicked() {
                            log::info!("Shape selected from palette: {}", shape_type.name());
                            app.execute_command(Command::AddShape(shape_type));
                        }
                        if i % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();
            ui.strong(format!("Layers ({})", app.session().elements().len()));

            // Topmost first, like the stacking order on the canvas
            let layers: Vec<_> = app
                .session()
                .elements()
                .iter()
                .rev()
                .map(|element| {
                    (
                        element.id().clone(),
                        format!("{} {}", element.kind().name(), element.label()),
                    )
                })
                .collect();
            let selected = app.session().selected_id().cloned();

            egui::ScrollArea::vertical().id_salt("layers").show(ui, |ui| {
                for (id, label) in layers {
                    let is_selected = selected.as_ref() == Some(&id);
                    if ui.selectable_label(is_selected, label).clicked() {
                        app.execute_command(Command::Select(Some(id)));
                    }
                }
            });
        });
}
