//! Resource schemas: what each admin screen manages and how its create form
//! is shaped. One generic screen is configured with these; the entities
//! themselves live in [`crate::models`].

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::backend::{FilePart, FormPayload};

/// How a create-form field is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    /// Rich text; the stored value is an HTML string.
    RichText,
    /// Binary upload; the draft stages the selected file.
    File,
}

/// One field of a resource's create form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// Multipart part name, as the backend expects it.
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDef {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind,
            required: true,
        }
    }
}

/// Which operations on a resource attach the bearer credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceAuth {
    pub list: bool,
    pub mutate: bool,
}

/// A backend-managed collection of one entity kind.
pub trait Resource: DeserializeOwned + Clone + PartialEq + 'static {
    /// Collection segment of the API path: `blogs`, `cases`, ...
    const ENDPOINT: &'static str;
    /// Singular noun for user-facing messages: `blog`, `case`, ...
    const LABEL: &'static str;
    const AUTH: ResourceAuth;
    /// Create-form schema. Empty when the resource has no create form
    /// (contact submissions are created externally).
    const FIELDS: &'static [FieldDef];

    /// Server-assigned id, used as the list key and the delete target.
    fn id(&self) -> &str;

    fn collection_path() -> String {
        format!("/api/{}", Self::ENDPOINT)
    }

    fn item_path(id: &str) -> String {
        format!("/api/{}/{}", Self::ENDPOINT, id)
    }
}

/// Client-local buffer for a not-yet-submitted entity.
///
/// Text values are keyed by field name; a file field stages the selected
/// file's bytes. The buffer survives a failed submission so the user can
/// retry without retyping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    texts: BTreeMap<String, String>,
    file: Option<FilePart>,
}

impl Draft {
    pub fn set_text(&mut self, name: &str, value: String) {
        self.texts.insert(name.to_string(), value);
    }

    pub fn set_file(&mut self, part: FilePart) {
        self.file = Some(part);
    }

    /// Current value of a text field, empty if never touched.
    pub fn text(&self, name: &str) -> &str {
        self.texts.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn file(&self) -> Option<&FilePart> {
        self.file.as_ref()
    }

    /// Serialize against a schema into a multipart payload. Fields keep the
    /// schema's order; the file part is named after its field.
    pub fn to_form(&self, fields: &[FieldDef]) -> FormPayload {
        let mut form = FormPayload::default();
        for field in fields {
            match field.kind {
                FieldKind::File => {
                    if let Some(file) = &self.file {
                        form = form.file(field.name, file.clone());
                    }
                }
                _ => {
                    form = form.text(field.name, self.text(field.name));
                }
            }
        }
        form
    }
}

/// Required-field check, run before any request is issued. Returns the
/// user-facing message on failure.
pub fn validate(fields: &[FieldDef], draft: &Draft) -> Result<(), String> {
    for field in fields.iter().filter(|field| field.required) {
        let missing = match field.kind {
            FieldKind::File => draft.file().is_none(),
            _ => draft.text(field.name).trim().is_empty(),
        };
        if missing {
            return Err("All fields are required.".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDef] = &[
        FieldDef::new("title", "Title:", "Post title", FieldKind::Text),
        FieldDef::new("body", "Body:", "", FieldKind::TextArea),
        FieldDef::new("image", "Image:", "", FieldKind::File),
    ];

    fn file() -> FilePart {
        FilePart {
            filename: "cover.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn empty_draft_fails_validation() {
        let draft = Draft::default();
        assert!(validate(FIELDS, &draft).is_err());
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let mut draft = Draft::default();
        draft.set_text("title", "  ".to_string());
        draft.set_text("body", "hello".to_string());
        draft.set_file(file());
        assert_eq!(
            validate(FIELDS, &draft),
            Err("All fields are required.".to_string())
        );
    }

    #[test]
    fn missing_file_counts_as_missing() {
        let mut draft = Draft::default();
        draft.set_text("title", "A".to_string());
        draft.set_text("body", "B".to_string());
        assert!(validate(FIELDS, &draft).is_err());
    }

    #[test]
    fn complete_draft_passes() {
        let mut draft = Draft::default();
        draft.set_text("title", "A".to_string());
        draft.set_text("body", "B".to_string());
        draft.set_file(file());
        assert_eq!(validate(FIELDS, &draft), Ok(()));
    }

    #[test]
    fn empty_schema_always_passes() {
        assert_eq!(validate(&[], &Draft::default()), Ok(()));
    }

    #[test]
    fn to_form_keeps_schema_order_and_names_the_file_part() {
        let mut draft = Draft::default();
        draft.set_text("title", "A".to_string());
        draft.set_text("body", "B".to_string());
        draft.set_file(file());

        let form = draft.to_form(FIELDS);
        assert_eq!(
            form.texts,
            vec![
                ("title".to_string(), "A".to_string()),
                ("body".to_string(), "B".to_string()),
            ]
        );
        let (name, part) = form.file.expect("file part");
        assert_eq!(name, "image");
        assert_eq!(part.filename, "cover.png");
    }
}
