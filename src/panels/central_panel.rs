use crate::DesignApp;
use crate::command::Command;

pub fn central_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_gray(230)))
        .show(ctx, |ui| {
            let panel_rect = ui.max_rect();
            let canvas_size = app.session().view().canvas_size(app.session().dimensions());
            let mut canvas_rect = None;

            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click());
                app.renderer().paint(&painter, response.rect, app.session());
                canvas_rect = Some(response.rect);

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let point = app.session().view().screen_to_document(response.rect.min, pos);
                        let hit = app.session_mut().select_at(point);
                        log::debug!("Canvas click at {:?} hit {:?}", point, hit);
                    }
                }
            });

            // A click on the surrounding workspace drops the selection.
            let outside_canvas = |pos: egui::Pos2| {
                panel_rect.contains(pos) && !canvas_rect.is_some_and(|rect| rect.contains(pos))
            };
            let clicked_outside = ctx.input(|i| {
                i.pointer.primary_clicked() && i.pointer.interact_pos().is_some_and(outside_canvas)
            });
            if clicked_outside && app.session().selected_id().is_some() {
                app.execute_command(Command::Select(None));
            }
        });
}
