// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the form editor UI.

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;

use crate::ui::FormEditorApp;

const WINDOW_TITLE: &str = "Form Editor";
const INNER_SIZE: [f32; 2] = [800.0, 900.0];
const MIN_INNER_SIZE: [f32; 2] = [480.0, 400.0];

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INNER_SIZE)
            .with_min_inner_size(MIN_INNER_SIZE),
        ..Default::default()
    };

    tracing::info!("starting {WINDOW_TITLE}");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FormEditorApp::default()))
        }),
    )
    // eframe::Error is not Send + Sync, so it cannot be wrapped directly.
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("Failed to run the form editor window")
}
