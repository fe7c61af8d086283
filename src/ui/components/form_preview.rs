// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Live preview of the form as an end user would fill it in.

use std::collections::HashMap;

use eframe::egui;

use crate::models::field::{Field, FieldId, FieldKind, FieldList};

/// Values typed into the preview controls, keyed by field.
///
/// This never feeds back into the field list; it only keeps the enabled
/// preview controls editable between frames.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PreviewModel {
    entries: HashMap<FieldId, String>,
}

impl PreviewModel {
    /// Current entry for a field, empty when nothing was typed yet.
    pub fn entry(&self, id: FieldId) -> &str {
        self.entries.get(&id).map(String::as_str).unwrap_or_default()
    }

    /// Drop entries whose field is no longer in `fields`.
    pub fn retain_fields(&mut self, fields: &FieldList) {
        self.entries.retain(|id, _| fields.get(*id).is_some());
    }
}

/// Messages emitted by the preview view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewMsg {
    EntryChanged { id: FieldId, value: String },
    NumberChanged { id: FieldId, value: String },
    OptionChosen { id: FieldId, option: String },
}

/// Enabled control rendered for a field in the preview form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewControl<'a> {
    SingleLine,
    Number,
    MultiLine { rows: usize },
    Dropdown { options: &'a [String] },
}

/// What the preview draws for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow<'a> {
    /// Raw field label; blank labels stay blank here.
    pub label: &'a str,
    pub control: Option<PreviewControl<'a>>,
}

/// Project a field onto its preview row.
pub fn preview_row(field: &Field) -> PreviewRow<'_> {
    PreviewRow {
        label: &field.label,
        control: preview_control(field),
    }
}

/// Project a field onto its preview control, or `None` for kinds without one.
pub fn preview_control(field: &Field) -> Option<PreviewControl<'_>> {
    match &field.kind {
        FieldKind::Text => Some(PreviewControl::SingleLine),
        FieldKind::Number => Some(PreviewControl::Number),
        FieldKind::Textarea => Some(PreviewControl::MultiLine { rows: 3 }),
        FieldKind::Select => Some(PreviewControl::Dropdown {
            options: &field.options,
        }),
        FieldKind::Unknown(_) => None,
    }
}

/// Apply a preview message.
pub fn update(model: &mut PreviewModel, msg: PreviewMsg) {
    match msg {
        PreviewMsg::EntryChanged { id, value }
        | PreviewMsg::OptionChosen { id, option: value } => {
            model.entries.insert(id, value);
        }
        PreviewMsg::NumberChanged { id, value } => {
            model.entries.insert(id, numeric_only(&value));
        }
    }
}

/// Render the preview form and return triggered messages.
pub fn view(ui: &mut egui::Ui, fields: &FieldList, model: &PreviewModel) -> Vec<PreviewMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            for field in fields {
                ui.push_id(field.id, |ui| {
                    render_field(ui, field, model, &mut msgs);
                });
                ui.add_space(10.0);
            }

            ui.vertical_centered(|ui| {
                // Submitting is out of scope; the button is shown but not wired.
                let _ = ui.button(format!(
                    "{} Submit Form",
                    egui_phosphor::regular::PAPER_PLANE_RIGHT
                ));
            });
        });

    msgs
}

fn render_field(
    ui: &mut egui::Ui,
    field: &Field,
    model: &PreviewModel,
    msgs: &mut Vec<PreviewMsg>,
) {
    let row = preview_row(field);
    ui.label(egui::RichText::new(row.label).strong());

    let Some(control) = row.control else {
        return;
    };
    let id = field.id;
    let mut value = model.entry(id).to_string();

    match control {
        PreviewControl::SingleLine => {
            if ui
                .add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY))
                .changed()
            {
                msgs.push(PreviewMsg::EntryChanged { id, value });
            }
        }
        PreviewControl::Number => {
            if ui
                .add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY))
                .changed()
            {
                msgs.push(PreviewMsg::NumberChanged { id, value });
            }
        }
        PreviewControl::MultiLine { rows } => {
            if ui
                .add(
                    egui::TextEdit::multiline(&mut value)
                        .desired_rows(rows)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                msgs.push(PreviewMsg::EntryChanged { id, value });
            }
        }
        PreviewControl::Dropdown { options } => {
            let selected = selected_option(options, &value);
            let mut current = selected.to_string();
            egui::ComboBox::from_id_salt("preview-options")
                .width(ui.available_width())
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for option in options {
                        if ui
                            .selectable_value(&mut current, option.clone(), option.as_str())
                            .clicked()
                        {
                            msgs.push(PreviewMsg::OptionChosen {
                                id,
                                option: option.clone(),
                            });
                        }
                    }
                });
        }
    }
}

/// Option shown as chosen: the entry when it is still offered, else the first option.
fn selected_option<'a>(options: &'a [String], entry: &'a str) -> &'a str {
    if options.iter().any(|o| o == entry) {
        entry
    } else {
        options.first().map(String::as_str).unwrap_or_default()
    }
}

/// Keep only characters a number input would accept.
fn numeric_only(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect()
}
