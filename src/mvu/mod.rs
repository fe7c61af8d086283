// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the field list to the two views.

use crate::models::field::FieldList;
use crate::ui::components::field_editor::FieldEditorMsg;
use crate::ui::components::form_preview::{self, PreviewModel, PreviewMsg};

/// Top-level application state.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct AppModel {
    /// The form definition being built.
    pub fields: FieldList,
    /// Values typed into the preview form.
    pub preview: PreviewModel,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Editor(FieldEditorMsg),
    Preview(PreviewMsg),
}

/// Update the application model.
///
/// Every editor message maps to exactly one field list operation; the list
/// is replaced as a whole with the value that operation returns.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::Editor(m) => {
            let fields = std::mem::take(&mut model.fields);
            model.fields = match m {
                FieldEditorMsg::Add(kind) => {
                    tracing::debug!(kind = kind.as_str(), "adding field");
                    fields.add(kind)
                }
                FieldEditorMsg::LabelChanged { id, label } => fields.update_label(id, label),
                FieldEditorMsg::OptionsChanged { id, raw } => fields.update_options(id, &raw),
                FieldEditorMsg::Remove(id) => {
                    tracing::debug!(%id, "removing field");
                    let fields = fields.remove(id);
                    model.preview.retain_fields(&fields);
                    fields
                }
            };
        }
        Msg::Preview(m) => form_preview::update(&mut model.preview, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::{FieldId, FieldKind};
    use crate::ui::components::form_preview::{PreviewControl, preview_row};

    fn add(model: &mut AppModel, kind: FieldKind) -> FieldId {
        update(model, Msg::Editor(FieldEditorMsg::Add(kind)));
        model.fields.fields().last().unwrap().id
    }

    #[test]
    fn select_field_lifecycle() {
        let mut model = AppModel::default();

        let id = add(&mut model, FieldKind::Select);
        assert_eq!(model.fields.len(), 1);
        let field = model.fields.get(id).unwrap();
        assert_eq!(field.kind, FieldKind::Select);
        assert_eq!(field.label, "");
        assert!(field.options.is_empty());

        update(
            &mut model,
            Msg::Editor(FieldEditorMsg::OptionsChanged {
                id,
                raw: "red,green,blue".into(),
            }),
        );
        assert_eq!(
            model.fields.get(id).unwrap().options,
            vec!["red", "green", "blue"]
        );

        update(
            &mut model,
            Msg::Editor(FieldEditorMsg::LabelChanged {
                id,
                label: "Color".into(),
            }),
        );
        let field = model.fields.get(id).unwrap();
        assert_eq!(field.label, "Color");
        let row = preview_row(field);
        assert_eq!(row.label, "Color");
        match row.control {
            Some(PreviewControl::Dropdown { options }) => {
                assert_eq!(options, ["red", "green", "blue"]);
            }
            other => panic!("unexpected control: {other:?}"),
        }

        update(&mut model, Msg::Editor(FieldEditorMsg::Remove(id)));
        assert!(model.fields.is_empty());
    }

    #[test]
    fn repeated_remove_is_noop() {
        let mut model = AppModel::default();
        let first = add(&mut model, FieldKind::Text);
        let second = add(&mut model, FieldKind::Text);
        assert_ne!(first, second);

        update(&mut model, Msg::Editor(FieldEditorMsg::Remove(first)));
        let snapshot = model.clone();
        update(&mut model, Msg::Editor(FieldEditorMsg::Remove(first)));

        assert_eq!(model, snapshot);
        assert_eq!(model.fields.len(), 1);
    }

    #[test]
    fn remove_clears_preview_entry() {
        let mut model = AppModel::default();
        let id = add(&mut model, FieldKind::Textarea);
        update(
            &mut model,
            Msg::Preview(PreviewMsg::EntryChanged {
                id,
                value: "notes".into(),
            }),
        );
        assert_eq!(model.preview.entry(id), "notes");

        update(&mut model, Msg::Editor(FieldEditorMsg::Remove(id)));

        assert_eq!(model.preview.entry(id), "");
    }

    #[test]
    fn preview_edits_leave_fields_untouched() {
        let mut model = AppModel::default();
        let id = add(&mut model, FieldKind::Number);
        let fields = model.fields.clone();

        update(
            &mut model,
            Msg::Preview(PreviewMsg::NumberChanged {
                id,
                value: "42".into(),
            }),
        );

        assert_eq!(model.fields, fields);
        assert_eq!(model.preview.entry(id), "42");
    }
}
