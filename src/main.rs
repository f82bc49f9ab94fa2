#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(target_os = "windows")]
mod gui;

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("This application is Windows-only.");
}

#[cfg(target_os = "windows")]
fn main() -> eframe::Result<()> {
    if let Err(e) = path_editor::logging::init_logging() {
        eprintln!("{e}");
    }
    gui::run()
}
