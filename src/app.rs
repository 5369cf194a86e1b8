use crate::backend::{ExportFormat, MemoryBackend, Outbox};
use crate::command::{Command, CommandOutcome};
use crate::config::EditorConfig;
use crate::notification::{Notification, NotificationLevel};
use crate::panels::{central_panel, property_panel, tools_panel};
use crate::renderer::CanvasRenderer;
use crate::state::EditorSession;
use crate::template::TemplateCatalog;

const TOAST_SECONDS: f64 = 4.0;

#[derive(Debug)]
struct Toast {
    notification: Notification,
    expires_at: f64,
}

/// Design editor shell: toolbar, tool and property panels around the canvas.
pub struct DesignApp {
    session: EditorSession,
    backend: MemoryBackend,
    outbox: Outbox,
    renderer: CanvasRenderer,
    toasts: Vec<Toast>,
    design_name: String,
    export_format: ExportFormat,
}

impl DesignApp {
    /// Called once before the first frame.
    ///
    /// A config restored from eframe storage wins over `config`.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        template_id: Option<u32>,
        config: EditorConfig,
    ) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            .unwrap_or(config);
        Self::with_config(template_id, config)
    }

    /// Builds the app without an eframe context. An unknown template falls
    /// back to the blank canvas and reports it as a notification.
    pub fn with_config(template_id: Option<u32>, config: EditorConfig) -> Self {
        let catalog = match TemplateCatalog::builtin() {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("Built-in templates unavailable: {}", err);
                TemplateCatalog::new(Vec::new())
            }
        };

        let (mut session, failure) = match catalog.resolve(template_id, &config) {
            Ok(template) => (EditorSession::new(template, config), None),
            Err(err) => {
                log::warn!("Falling back to a blank canvas: {}", err);
                (EditorSession::blank(config), Some(err))
            }
        };
        if let Some(err) = failure {
            session.notify(Notification::error("Template not found", err.to_string()));
        }

        let design_name = session.template_name().to_string();
        Self {
            session,
            backend: MemoryBackend::new(),
            outbox: Outbox::new(),
            renderer: CanvasRenderer::new(),
            toasts: Vec::new(),
            design_name,
            export_format: ExportFormat::default(),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &CanvasRenderer {
        &self.renderer
    }

    pub fn execute_command(&mut self, command: Command) -> CommandOutcome {
        self.session.execute(command)
    }

    pub fn save_design(&mut self) {
        let payload = self.session.design_payload(self.design_name.clone());
        self.outbox.save(&self.backend, payload);
    }

    pub fn export_design(&mut self) {
        let request = self.session.export_request(self.design_name.clone(), self.export_format);
        self.outbox.export(&self.backend, request);
    }

    /// Delivers finished backend requests. Returns how many finished.
    pub fn poll_backend(&mut self) -> usize {
        self.outbox.poll(&mut self.session)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus.
        if ctx.wants_keyboard_input() {
            return;
        }
        let redo = egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::Z,
        );
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        let duplicate = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::D);

        // Redo first: its chord contains the undo chord.
        let mut commands = Vec::new();
        ctx.input_mut(|i| {
            if i.consume_shortcut(&redo) {
                commands.push(Command::Redo);
            }
            if i.consume_shortcut(&undo) {
                commands.push(Command::Undo);
            }
            if i.consume_shortcut(&duplicate) {
                if let Some(id) = self.session.selected_id() {
                    commands.push(Command::DuplicateElement(id.clone()));
                }
            }
            if i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace) {
                if let Some(id) = self.session.selected_id() {
                    commands.push(Command::RemoveElement(id.clone()));
                }
            }
            if i.key_pressed(egui::Key::Escape) {
                commands.push(Command::Select(None));
            }
        });
        for command in commands {
            self.execute_command(command);
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(self.session.template_name().to_string());
                let dimensions = self.session.dimensions();
                ui.label(
                    egui::RichText::new(format!("{} × {}", dimensions.width, dimensions.height))
                        .small()
                        .background_color(ui.visuals().faint_bg_color),
                );
                ui.separator();

                let can_undo = self.session.can_undo();
                let can_redo = self.session.can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("↶ Undo")).clicked() {
                    self.execute_command(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("↷ Redo")).clicked() {
                    self.execute_command(Command::Redo);
                }
                ui.separator();

                let show_grid = self.session.view().show_grid();
                if ui.selectable_label(show_grid, "# Grid").clicked() {
                    self.execute_command(Command::ToggleGrid);
                }

                let can_zoom_out = self.session.view().can_zoom_out();
                let can_zoom_in = self.session.view().can_zoom_in();
                if ui.add_enabled(can_zoom_out, egui::Button::new("−")).clicked() {
                    self.execute_command(Command::ZoomOut);
                }
                ui.label(format!("{}%", self.session.view().zoom()));
                if ui.add_enabled(can_zoom_in, egui::Button::new("+")).clicked() {
                    self.execute_command(Command::ZoomIn);
                }
                ui.separator();

                ui.add(egui::TextEdit::singleline(&mut self.design_name).desired_width(160.0));
                if ui.button("💾 Save").clicked() {
                    self.save_design();
                }

                egui::ComboBox::from_id_salt("export_format")
                    .selected_text(self.export_format.name())
                    .show_ui(ui, |ui| {
                        for format in ExportFormat::ALL {
                            ui.selectable_value(&mut self.export_format, format, format.name());
                        }
                    });
                if ui.button("⬇ Export").clicked() {
                    self.export_design();
                }

                if self.outbox.in_flight() > 0 {
                    ui.spinner();
                }
            });
        });
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        for notification in self.session.drain_notifications() {
            self.toasts.push(Toast {
                notification,
                expires_at: now + TOAST_SECONDS,
            });
        }
        self.toasts.retain(|toast| toast.expires_at > now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let accent = match toast.notification.level {
                        NotificationLevel::Info => egui::Color32::from_rgb(0x3B, 0x82, 0xF6),
                        NotificationLevel::Success => egui::Color32::from_rgb(0x10, 0xB9, 0x81),
                        NotificationLevel::Error => egui::Color32::from_rgb(0xEF, 0x44, 0x44),
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.strong(&toast.notification.title);
                            ui.label(&toast.notification.description);
                        });
                }
            });
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl eframe::App for DesignApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_backend() > 0 || self.outbox.in_flight() > 0 {
            ctx.request_repaint();
        }

        self.handle_shortcuts(ctx);
        self.toolbar(ctx);
        tools_panel(self, ctx);
        property_panel(self, ctx);
        central_panel(self, ctx);
        self.show_toasts(ctx);
    }
}
