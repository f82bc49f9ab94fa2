//! The editor window.
//!
//! Widgets only collect what was clicked; the actions themselves run on the
//! [`Session`] once the frame's UI has been laid out.

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit};
use path_editor::backup;
use path_editor::dialogs::Dialogs;
use path_editor::privilege;
use path_editor::registry::RegistryStore;
use path_editor::{Direction, Scope, Session};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const WINDOW_TITLE: &str = "PATH Editor";
const WINDOW_SIZE: [f32; 2] = [760.0, 540.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

pub fn run() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Box::new(PathEditorApp::new(cc))),
    )
}

/// Native message boxes.
struct RfdDialogs;

impl RfdDialogs {
    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Dialogs for RfdDialogs {
    fn info(&mut self, title: &str, message: &str) {
        Self::show(MessageLevel::Info, title, message);
    }

    fn warning(&mut self, title: &str, message: &str) {
        Self::show(MessageLevel::Warning, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        Self::show(MessageLevel::Error, title, message);
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        matches!(
            MessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title(title)
                .set_description(message)
                .set_buttons(MessageButtons::YesNo)
                .show(),
            MessageDialogResult::Yes
        )
    }
}

#[derive(Default)]
struct EditDialogState {
    open: bool,
    input: String,
}

struct PathEditorApp {
    session: Session,
    store: RegistryStore,
    edit_dialog: EditDialogState,
}

impl PathEditorApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_style(&cc.egui_ctx);

        Session::warn_if_not_elevated(privilege::is_elevated(), &mut RfdDialogs);

        let store = RegistryStore;
        Self {
            session: Session::start(&store, Scope::User),
            store,
            edit_dialog: EditDialogState::default(),
        }
    }

    fn add_from_picker(&mut self) {
        if let Some(folder) = FileDialog::new()
            .set_title("Select directory to add to PATH")
            .pick_folder()
        {
            self.session
                .add(&mut RfdDialogs, &folder.display().to_string());
        }
    }

    fn open_edit_dialog(&mut self) {
        if let Some(current) = self.session.begin_edit(&mut RfdDialogs) {
            self.edit_dialog = EditDialogState {
                open: true,
                input: current,
            };
        }
    }

    fn export_backup(&mut self) {
        let now = chrono::Local::now().naive_local();
        let username = backup::current_username();
        let file_name = self.session.suggested_backup_name(username.as_deref(), now);
        let Some(path) = FileDialog::new()
            .set_title("Save PATH to file")
            .set_file_name(file_name)
            .add_filter("JSON files", &["json"])
            .add_filter("All files", &["*"])
            .save_file()
        else {
            return;
        };
        self.session
            .export_to(&mut RfdDialogs, &with_json_extension(path), now);
    }

    fn import_backup(&mut self) {
        if let Some(path) = FileDialog::new()
            .set_title("Load PATH from file")
            .add_filter("JSON files", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.session.import_from(&mut RfdDialogs, &path);
        }
    }

    fn draw_list(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        let list_height = (ui.available_height() - 60.0).max(120.0);
        egui::Frame::canvas(ui.style()).show(ui, |ui| {
            ui.set_height(list_height);
            ScrollArea::vertical()
                .id_source("path_list")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (idx, entry) in self.session.list().iter().enumerate() {
                        let selected = self.session.selected() == Some(idx);
                        let text = RichText::new(entry).monospace();
                        if ui.selectable_label(selected, text).clicked() {
                            clicked = Some(idx);
                        }
                    }
                });
        });
        if clicked.is_some() {
            self.session.select(clicked);
        }
    }

    fn draw_edit_dialog(&mut self, ctx: &egui::Context) {
        if !self.edit_dialog.open {
            return;
        }
        // The session dropped the edit because the list changed underneath it.
        if !self.session.is_editing() {
            self.edit_dialog = EditDialogState::default();
            return;
        }

        let mut open = self.edit_dialog.open;
        let mut apply = false;
        let mut cancel = false;

        egui::Window::new("Edit Path")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(600.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Path:");
                    ui.add(
                        TextEdit::singleline(&mut self.edit_dialog.input)
                            .desired_width(420.0)
                            .font(egui::TextStyle::Monospace),
                    );
                    if ui.button("Browse...").clicked() {
                        if let Some(folder) =
                            FileDialog::new().set_title("Select Directory").pick_folder()
                        {
                            self.edit_dialog.input = folder.display().to_string();
                        }
                    }
                });

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        apply = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if apply {
            self.session.apply_edit(&self.edit_dialog.input);
        } else if cancel || !open {
            self.session.cancel_edit();
        }
        if apply || cancel {
            open = false;
        }
        self.edit_dialog.open = open;
    }
}

impl eframe::App for PathEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut scope = self.session.scope();
        let mut do_add = false;
        let mut do_edit = false;
        let mut do_delete = false;
        let mut do_up = false;
        let mut do_down = false;
        let mut do_export = false;
        let mut do_import = false;
        let mut do_save = false;
        let mut do_close = false;
        // The edit dialog is modal: the main window ignores input while it is open.
        let idle = !self.edit_dialog.open;

        egui::TopBottomPanel::top("scope").show(ctx, |ui| {
            ui.set_enabled(idle);
            ui.horizontal(|ui| {
                ui.label("Select PATH variable type:");
                ui.radio_value(&mut scope, Scope::User, Scope::User.label());
                ui.radio_value(&mut scope, Scope::System, Scope::System.label());
            });
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.set_enabled(idle);
            ui.horizontal(|ui| {
                if ui.button("Save PATH to File").clicked() {
                    do_export = true;
                }
                if ui.button("Restore from File").clicked() {
                    do_import = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("Save").strong().color(Color32::WHITE))
                        .clicked()
                    {
                        do_save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        do_close = true;
                    }
                });
            });
            ui.label(
                RichText::new(self.session.status())
                    .small()
                    .color(Color32::from_gray(170)),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(idle);
            ui.heading(format!("Paths in {}", self.session.scope().panel_title()));
            ui.add_space(6.0);
            self.draw_list(ui);
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                do_add = ui.button("Add").clicked();
                do_edit = ui.button("Edit").clicked();
                do_delete = ui.button("Delete").clicked();
                do_up = ui.button("Up").clicked();
                do_down = ui.button("Down").clicked();
            });
        });

        self.draw_edit_dialog(ctx);

        if scope != self.session.scope() {
            self.session.switch_scope(&self.store, scope);
        }
        if do_add {
            self.add_from_picker();
        }
        if do_edit {
            self.open_edit_dialog();
        }
        if do_delete {
            self.session.delete_selected(&mut RfdDialogs);
        }
        if do_up {
            self.session.move_selected(&mut RfdDialogs, Direction::Up);
        }
        if do_down {
            self.session.move_selected(&mut RfdDialogs, Direction::Down);
        }
        if do_export {
            self.export_backup();
        }
        if do_import {
            self.import_backup();
        }
        if do_save {
            self.session.save(&mut self.store, &mut RfdDialogs);
        }
        if do_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.visuals = egui::Visuals::dark();
    style.visuals.window_fill = Color32::from_rgb(20, 24, 30);
    style.visuals.panel_fill = Color32::from_rgb(17, 20, 26);
    style.visuals.widgets.active.bg_fill = Color32::from_rgb(0, 120, 212);
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(0, 96, 172);
    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(37, 44, 54);
    ctx.set_style(style);
}

/// The save dialog does not append the extension when the user types a bare name.
fn with_json_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("json")
    }
}
