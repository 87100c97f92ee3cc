//! The closed taxonomy of form-control kinds the pipeline understands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown element kind token: {0}")]
pub struct UnknownKindError(pub String);

/// Functional kind of a form control, derived per call from DOM signals.
///
/// Classification is total: an element either maps to one of these
/// variants or classification fails with a typed error. Downstream
/// dispatch matches exhaustively so no kind can fall through unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    Email,
    Tel,
    Url,
    Search,
    Password,
    Textarea,
    Select,
    SelectOne,
    Radio,
    Radiogroup,
    Checkbox,
    CheckboxContainer,
    Fieldset,
    Clickable,
    File,
}

impl ElementKind {
    /// Parse a DOM token (tag name or input `type` value) into a kind.
    pub fn parse(token: &str) -> Result<Self, UnknownKindError> {
        match token {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "tel" => Ok(Self::Tel),
            "url" => Ok(Self::Url),
            "search" => Ok(Self::Search),
            "password" => Ok(Self::Password),
            "textarea" => Ok(Self::Textarea),
            "select" => Ok(Self::Select),
            "select-one" => Ok(Self::SelectOne),
            "radio" => Ok(Self::Radio),
            "radiogroup" => Ok(Self::Radiogroup),
            "checkbox" => Ok(Self::Checkbox),
            "checkbox-container" => Ok(Self::CheckboxContainer),
            "fieldset" => Ok(Self::Fieldset),
            "clickable" => Ok(Self::Clickable),
            "file" => Ok(Self::File),
            other => Err(UnknownKindError(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::SelectOne => "select-one",
            Self::Radio => "radio",
            Self::Radiogroup => "radiogroup",
            Self::Checkbox => "checkbox",
            Self::CheckboxContainer => "checkbox-container",
            Self::Fieldset => "fieldset",
            Self::Clickable => "clickable",
            Self::File => "file",
        }
    }

    /// Kinds filled by typing free text into the control.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Email
                | Self::Tel
                | Self::Url
                | Self::Search
                | Self::Password
                | Self::Textarea
        )
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_tokens() {
        assert!(matches!(
            ElementKind::parse("select-one"),
            Ok(ElementKind::SelectOne)
        ));
        assert!(matches!(
            ElementKind::parse("checkbox-container"),
            Ok(ElementKind::CheckboxContainer)
        ));
    }

    #[test]
    fn rejects_tokens_outside_taxonomy() {
        assert!(ElementKind::parse("number").is_err());
        assert!(ElementKind::parse("submit").is_err());
        assert!(ElementKind::parse("").is_err());
    }

    #[test]
    fn as_str_round_trips() {
        let kinds = [
            ElementKind::Text,
            ElementKind::SelectOne,
            ElementKind::CheckboxContainer,
            ElementKind::Clickable,
            ElementKind::File,
        ];
        for kind in kinds {
            assert!(matches!(ElementKind::parse(kind.as_str()), Ok(k) if k == kind));
        }
    }

    #[test]
    fn text_like_covers_typing_kinds_only() {
        assert!(ElementKind::Email.is_text_like());
        assert!(ElementKind::Textarea.is_text_like());
        assert!(!ElementKind::Select.is_text_like());
        assert!(!ElementKind::Checkbox.is_text_like());
        assert!(!ElementKind::File.is_text_like());
    }
}
