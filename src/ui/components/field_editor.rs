// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Editor view: add toolbar plus one editing card per field.
//!
//! Which control a card shows is decided by [`editor_row`], a pure
//! projection of the field; [`view`] only draws that projection and reports
//! user interaction as [`FieldEditorMsg`]s.

use std::borrow::Cow;

use eframe::egui;

use crate::models::field::{Field, FieldId, FieldKind, FieldList};

/// Messages emitted by the editor view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEditorMsg {
    Add(FieldKind),
    LabelChanged { id: FieldId, label: String },
    OptionsChanged { id: FieldId, raw: String },
    Remove(FieldId),
}

/// Disabled sample control drawn under a field's label input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleControl {
    SingleLine { placeholder: &'static str },
    MultiLine { placeholder: &'static str },
    Number { placeholder: &'static str },
    Dropdown { options: Vec<String> },
}

/// Kind-specific part of an editor card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorRow<'a> {
    /// Label shown above the sample control; falls back to the kind name.
    pub caption: Cow<'a, str>,
    pub control: SampleControl,
}

/// Project a field onto its editor row, or `None` for kinds without one.
pub fn editor_row(field: &Field) -> Option<EditorRow<'_>> {
    let (fallback, control) = match &field.kind {
        FieldKind::Text => (
            "Text Input",
            SampleControl::SingleLine {
                placeholder: "Text input",
            },
        ),
        FieldKind::Textarea => (
            "Textarea",
            SampleControl::MultiLine {
                placeholder: "Textarea",
            },
        ),
        FieldKind::Number => (
            "Number Input",
            SampleControl::Number {
                placeholder: "Number input",
            },
        ),
        FieldKind::Select => (
            "Select Dropdown",
            SampleControl::Dropdown {
                options: field.options.clone(),
            },
        ),
        FieldKind::Unknown(_) => return None,
    };

    let caption = if field.label.is_empty() {
        Cow::Borrowed(fallback)
    } else {
        Cow::Borrowed(field.label.as_str())
    };

    Some(EditorRow { caption, control })
}

/// Toolbar caption for the add button of `kind`.
pub fn add_button_text(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "Add Text Field",
        FieldKind::Textarea => "Add Textarea",
        FieldKind::Number => "Add Number Field",
        FieldKind::Select => "Add Select Dropdown",
        FieldKind::Unknown(_) => "Add Field",
    }
}

/// Render the editor and return triggered messages.
pub fn view(ui: &mut egui::Ui, fields: &FieldList) -> Vec<FieldEditorMsg> {
    let mut msgs = Vec::new();

    ui.horizontal_wrapped(|ui| {
        for kind in FieldKind::BUILTIN {
            let text = format!(
                "{} {}",
                egui_phosphor::regular::PLUS,
                add_button_text(&kind)
            );
            if ui.button(text).clicked() {
                msgs.push(FieldEditorMsg::Add(kind));
            }
        }
    });

    ui.add_space(12.0);

    if fields.is_empty() {
        ui.label(
            egui::RichText::new("No fields yet. Use the buttons above to add one.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    for field in fields {
        render_card(ui, field, &mut msgs);
        ui.add_space(8.0);
    }

    msgs
}

fn render_card(ui: &mut egui::Ui, field: &Field, msgs: &mut Vec<FieldEditorMsg>) {
    // egui keys widget state by id; salt with the field id so cards survive reordering.
    ui.push_id(field.id, |ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Label:").strong());
                let mut label = field.label.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut label)
                            .hint_text("Enter field label")
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    msgs.push(FieldEditorMsg::LabelChanged {
                        id: field.id,
                        label,
                    });
                }
            });

            if let Some(row) = editor_row(field) {
                ui.add_space(6.0);
                render_row(ui, field, row, msgs);
            }

            ui.add_space(6.0);
            let remove = egui::Button::new(
                egui::RichText::new(format!(
                    "{} Remove Field",
                    egui_phosphor::regular::TRASH
                ))
                .color(egui::Color32::WHITE),
            )
            .fill(egui::Color32::from_rgb(0xdc, 0x35, 0x45));
            if ui.add(remove).clicked() {
                msgs.push(FieldEditorMsg::Remove(field.id));
            }
        });
    });
}

fn render_row(
    ui: &mut egui::Ui,
    field: &Field,
    row: EditorRow<'_>,
    msgs: &mut Vec<FieldEditorMsg>,
) {
    ui.label(egui::RichText::new(row.caption).strong());

    match row.control {
        SampleControl::SingleLine { placeholder } | SampleControl::Number { placeholder } => {
            let mut empty = String::new();
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut empty)
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY),
            );
        }
        SampleControl::MultiLine { placeholder } => {
            let mut empty = String::new();
            ui.add_enabled(
                false,
                egui::TextEdit::multiline(&mut empty)
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY),
            );
        }
        SampleControl::Dropdown { options } => {
            // Splitting and re-joining on ',' is lossless, so the options are the buffer.
            let mut raw = field.options.join(",");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut raw)
                        .hint_text("Enter options, comma separated")
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                msgs.push(FieldEditorMsg::OptionsChanged { id: field.id, raw });
            }

            ui.add_enabled_ui(false, |ui| {
                egui::ComboBox::from_id_salt("editor-options")
                    .width(ui.available_width())
                    .selected_text(options.first().map(String::as_str).unwrap_or_default())
                    .show_ui(ui, |ui| {
                        for option in &options {
                            ui.label(option);
                        }
                    });
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(kind: FieldKind) -> FieldList {
        FieldList::new().add(kind)
    }

    #[test]
    fn empty_label_falls_back_per_kind() {
        let cases = [
            (FieldKind::Text, "Text Input"),
            (FieldKind::Textarea, "Textarea"),
            (FieldKind::Number, "Number Input"),
            (FieldKind::Select, "Select Dropdown"),
        ];
        for (kind, expected) in cases {
            let list = single(kind);
            let row = editor_row(&list.fields()[0]).unwrap();
            assert_eq!(row.caption, expected);
        }
    }

    #[test]
    fn label_wins_over_fallback_without_mutating_field() {
        let list = single(FieldKind::Number);
        let id = list.fields()[0].id;
        let list = list.update_label(id, "Age");

        let row = editor_row(&list.fields()[0]).unwrap();
        assert_eq!(row.caption, "Age");
        assert_eq!(
            row.control,
            SampleControl::Number {
                placeholder: "Number input"
            }
        );

        let blank = single(FieldKind::Number);
        assert_eq!(editor_row(&blank.fields()[0]).unwrap().caption, "Number Input");
    }

    #[test]
    fn placeholders_match_kind() {
        let text = single(FieldKind::Text);
        assert_eq!(
            editor_row(&text.fields()[0]).unwrap().control,
            SampleControl::SingleLine {
                placeholder: "Text input"
            }
        );
        let area = single(FieldKind::Textarea);
        assert_eq!(
            editor_row(&area.fields()[0]).unwrap().control,
            SampleControl::MultiLine {
                placeholder: "Textarea"
            }
        );
    }

    #[test]
    fn select_row_lists_current_options() {
        let list = single(FieldKind::Select);
        let id = list.fields()[0].id;
        let list = list.update_options(id, "red,green,blue");

        let row = editor_row(&list.fields()[0]).unwrap();
        assert_eq!(
            row.control,
            SampleControl::Dropdown {
                options: vec!["red".into(), "green".into(), "blue".into()]
            }
        );
    }

    #[test]
    fn unknown_kind_has_no_row() {
        let list = single(FieldKind::Unknown("date".into()));
        assert!(editor_row(&list.fields()[0]).is_none());
    }

    #[test]
    fn toolbar_captions() {
        let captions: Vec<_> = FieldKind::BUILTIN.iter().map(add_button_text).collect();
        assert_eq!(
            captions,
            vec![
                "Add Text Field",
                "Add Textarea",
                "Add Number Field",
                "Add Select Dropdown"
            ]
        );
    }
}
