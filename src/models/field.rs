// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field definitions and the ordered field list the builder edits.
//! Everything here is pure so it can be driven by the UI or by tests alike.

use std::fmt;

use thiserror::Error;

/// Opaque identifier assigned to a field when it is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// Input control kinds the builder knows how to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Select,
    Unknown(String),
}

impl FieldKind {
    /// Kinds offered by the add toolbar, in display order.
    pub const BUILTIN: [FieldKind; 4] = [
        FieldKind::Text,
        FieldKind::Textarea,
        FieldKind::Number,
        FieldKind::Select,
    ];

    /// Creates a `FieldKind` from its type token.
    ///
    /// Unrecognized tokens are kept verbatim as `FieldKind::Unknown` so a field
    /// of that kind can still live in the list; it just renders no control.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcraft::models::field::FieldKind;
    ///
    /// assert_eq!(FieldKind::from_token("select"), FieldKind::Select);
    /// assert_eq!(
    ///     FieldKind::from_token("date"),
    ///     FieldKind::Unknown("date".to_string())
    /// );
    /// ```
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "select" => Self::Select,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Type token for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Select => "select",
            Self::Unknown(raw) => raw.as_str(),
        }
    }
}

/// Single field descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    pub options: Vec<String>,
}

/// Raised by the strict operations when no field carries the given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no field with id {0}")]
    NotFound(FieldId),
}

/// Ordered list of fields; insertion order is display order.
///
/// The non-`try_` operations consume the list and hand back the new one.
/// Referencing an id that is not present is a no-op on that path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldList {
    fields: Vec<Field>,
    next_id: u64,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Append a new field of `kind` with an empty label and no options.
    ///
    /// Ids come from a counter owned by the list and are never reused, even
    /// after the field holding one has been removed.
    #[must_use]
    pub fn add(mut self, kind: FieldKind) -> Self {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.fields.push(Field {
            id,
            kind,
            label: String::new(),
            options: Vec::new(),
        });
        self
    }

    /// Replace the label of the field with `id`.
    #[must_use]
    pub fn update_label(mut self, id: FieldId, label: impl Into<String>) -> Self {
        ignore_missing(self.try_update_label(id, label));
        self
    }

    /// Replace the options of the field with `id` by splitting `raw` on commas.
    #[must_use]
    pub fn update_options(mut self, id: FieldId, raw: &str) -> Self {
        ignore_missing(self.try_update_options(id, raw));
        self
    }

    /// Drop the field with `id`, keeping the others in order.
    #[must_use]
    pub fn remove(mut self, id: FieldId) -> Self {
        ignore_missing(self.try_remove(id).map(|_| ()));
        self
    }

    pub fn try_update_label(
        &mut self,
        id: FieldId,
        label: impl Into<String>,
    ) -> Result<(), FieldError> {
        self.get_mut(id)?.label = label.into();
        Ok(())
    }

    pub fn try_update_options(&mut self, id: FieldId, raw: &str) -> Result<(), FieldError> {
        self.get_mut(id)?.options = split_options(raw);
        Ok(())
    }

    /// Remove and return the field with `id`.
    pub fn try_remove(&mut self, id: FieldId) -> Result<Field, FieldError> {
        let index = self
            .fields
            .iter()
            .position(|f| f.id == id)
            .ok_or(FieldError::NotFound(id))?;
        Ok(self.fields.remove(index))
    }

    fn get_mut(&mut self, id: FieldId) -> Result<&mut Field, FieldError> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(FieldError::NotFound(id))
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Split comma-separated option text verbatim.
///
/// Whitespace is kept and empty entries survive, so `""` becomes `[""]`.
/// Joining the result with `,` gives back the input unchanged.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

fn ignore_missing(result: Result<(), FieldError>) {
    if let Err(err) = result {
        tracing::debug!(%err, "field operation ignored");
    }
}
