//! Chat attachment model
//!
//! The payload handed to the chat-delivery layer. Field names serialize to the
//! snake_case keys the chat platform expects (`title_link`, `image_url`, ...).

use serde::{Deserialize, Serialize};

/// Brand color stamped on every attachment
pub const COLOR: &str = "#431E3F";

/// Chat message attachment
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
}

/// A single title/value entry rendered in the attachment's field grid
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub short: bool,
}

impl Attachment {
    /// Create an attachment with the given title and the brand color
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            text: None,
            title: title.into(),
            title_link: None,
            image_url: None,
            color: COLOR.to_string(),
            fields: Vec::new(),
            footer: None,
            footer_icon: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_title_link(mut self, link: Option<String>) -> Self {
        self.title_link = link;
        self
    }

    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

impl Field {
    /// Untitled, full-width field
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            title: None,
            value: value.into(),
            short: false,
        }
    }

    /// Titled field rendered side by side with its neighbours
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            value: value.into(),
            short: true,
        }
    }
}
