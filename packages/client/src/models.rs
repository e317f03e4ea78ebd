//! Entities served by the content API.
//!
//! The backend is MongoDB-shaped: ids arrive as `_id`, field names are
//! camelCase and timestamps are RFC 3339 strings. Each entity implements
//! [`Resource`] so the generic admin machinery knows its endpoint, auth
//! requirements and create-form schema.

use serde::{Deserialize, Serialize};

use crate::resource::{FieldDef, FieldKind, Resource, ResourceAuth};

/// A published blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    /// HTML string, authored in the admin rich-text editor.
    pub content: String,
    /// Image URL as served by the backend.
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for BlogPost {
    const ENDPOINT: &'static str = "blogs";
    const LABEL: &'static str = "blog";
    const AUTH: ResourceAuth = ResourceAuth {
        list: true,
        mutate: true,
    };
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("title", "Title:", "Blog title", FieldKind::Text),
        FieldDef::new("author", "Author Name:", "Author name", FieldKind::Text),
        FieldDef::new("content", "Content:", "Write the post...", FieldKind::RichText),
        FieldDef::new("image", "Image:", "", FieldKind::File),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A client case study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub technologies: String,
    #[serde(default)]
    pub figma_provider: String,
    #[serde(default)]
    pub what_was_build: String,
    #[serde(default)]
    pub what_we_added: String,
    #[serde(default)]
    pub problem_before: String,
    #[serde(default)]
    pub problem_solved: String,
    pub author: String,
    pub image: String,
}

impl Resource for CaseStudy {
    const ENDPOINT: &'static str = "cases";
    const LABEL: &'static str = "case";
    const AUTH: ResourceAuth = ResourceAuth {
        list: true,
        mutate: true,
    };
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("title", "Title:", "Case title", FieldKind::Text),
        FieldDef::new(
            "technologies",
            "Technologies Used:",
            "Technologies",
            FieldKind::Text,
        ),
        FieldDef::new(
            "figmaProvider",
            "Figma Provider:",
            "Figma Provider",
            FieldKind::Text,
        ),
        FieldDef::new(
            "whatWasBuild",
            "What Was Built:",
            "What Was Built",
            FieldKind::Text,
        ),
        FieldDef::new(
            "whatWeAdded",
            "What We Added:",
            "What We Added",
            FieldKind::TextArea,
        ),
        FieldDef::new(
            "problemBefore",
            "Problem Before:",
            "Problem Before",
            FieldKind::TextArea,
        ),
        FieldDef::new(
            "problemSolved",
            "Problem Solved:",
            "Problem Solved",
            FieldKind::TextArea,
        ),
        FieldDef::new("author", "Author:", "Case author", FieldKind::Text),
        FieldDef::new("image", "Image:", "", FieldKind::File),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// HTML string, authored in the admin rich-text editor.
    #[serde(default)]
    pub description: String,
    pub image: String,
}

impl Resource for Product {
    const ENDPOINT: &'static str = "products";
    const LABEL: &'static str = "product";
    const AUTH: ResourceAuth = ResourceAuth {
        list: false,
        mutate: true,
    };
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("name", "Product Name", "Enter product name", FieldKind::Text),
        FieldDef::new(
            "description",
            "Description",
            "Describe the product...",
            FieldKind::RichText,
        ),
        FieldDef::new("image", "Product Image", "", FieldKind::File),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A contact-form submission. Created externally; the admin only reads and
/// deletes these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub number: String,
    pub message: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for ContactSubmission {
    const ENDPOINT: &'static str = "contacts";
    const LABEL: &'static str = "contact";
    const AUTH: ResourceAuth = ResourceAuth {
        list: false,
        mutate: false,
    };
    const FIELDS: &'static [FieldDef] = &[];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_decodes_wire_field_names() {
        let body = r#"{
            "_id": "66f0a",
            "title": "Launch",
            "author": "Dana",
            "content": "<p>Hello</p>",
            "image": "https://cdn.example.com/launch.png",
            "createdAt": "2025-11-02T09:30:00.000Z"
        }"#;
        let post: BlogPost = serde_json::from_str(body).unwrap();
        assert_eq!(post.id, "66f0a");
        assert_eq!(post.created_at, "2025-11-02T09:30:00.000Z");
        assert_eq!(post.description, "");
    }

    #[test]
    fn case_study_decodes_camel_case_fields() {
        let body = r#"{
            "_id": "1",
            "title": "Shopfront",
            "technologies": "Rust, Postgres",
            "figmaProvider": "Studio X",
            "whatWasBuild": "Storefront",
            "whatWeAdded": "Checkout",
            "problemBefore": "Manual orders",
            "problemSolved": "Self-serve",
            "author": "Lee",
            "image": "/uploads/shopfront.png"
        }"#;
        let case: CaseStudy = serde_json::from_str(body).unwrap();
        assert_eq!(case.figma_provider, "Studio X");
        assert_eq!(case.what_was_build, "Storefront");
    }

    #[test]
    fn paths_follow_the_rest_layout() {
        assert_eq!(BlogPost::collection_path(), "/api/blogs");
        assert_eq!(Product::item_path("42"), "/api/products/42");
    }

    #[test]
    fn contacts_have_no_create_form() {
        assert!(ContactSubmission::FIELDS.is_empty());
        assert!(!ContactSubmission::AUTH.mutate);
    }
}
