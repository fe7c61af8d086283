// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for building a form.
//! Handles layout and routes view messages into the MVU kernel.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{field_editor, form_preview};

/// Stateful egui application holding the form being built.
#[derive(Default)]
pub struct FormEditorApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for FormEditorApp {
    /// Drives a single UI frame: applies messages queued by the previous frame, then renders the
    /// top bar, status line, and the editor and preview sections.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Apply in the order the views emitted them.
        let msgs = std::mem::take(&mut self.inbox);
        let applied = !msgs.is_empty();
        for msg in msgs {
            mvu::update(&mut self.model, msg);
        }
        if applied {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Form Editor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_editor_section(ui);
                ui.add_space(24.0);

                self.render_preview_section(ui);
                ui.add_space(8.0);
            });
        });
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls
    /// before `ui` each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl FormEditorApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_editor_section(&mut self, ui: &mut egui::Ui) {
        let msgs = field_editor::view(ui, &self.model.fields);
        self.inbox.extend(msgs.into_iter().map(Msg::Editor));
    }

    /// Render the "Form Preview" heading followed by the preview form.
    fn render_preview_section(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Form Preview");
        });
        ui.add_space(8.0);
        let msgs = form_preview::view(ui, &self.model.fields, &self.model.preview);
        self.inbox.extend(msgs.into_iter().map(Msg::Preview));
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let count = self.model.fields.len();
        let text = match count {
            0 => "Empty form".to_string(),
            1 => "1 field".to_string(),
            n => format!("{n} fields"),
        };
        ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
    }
}
