//! Form bodies for the mutation endpoints
//!
//! Field names match what the server reads from the request parameters.

use serde::{Serialize, Serializer};
use skyadmin_core::{ContentMode, FLAG_NO, FLAG_YES};

fn flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { FLAG_YES } else { FLAG_NO })
}

fn mode<S: Serializer>(value: &ContentMode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_query())
}

fn is_false(value: &bool) -> bool {
    !value
}

/// `/update_post` and `/preview` body
///
/// An empty `id` inserts a new record. `published` is only sent when on,
/// like an unchecked checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentForm {
    pub id: String,
    #[serde(rename = "type", serialize_with = "mode")]
    pub mode: ContentMode,
    pub title: String,
    pub head: String,
    pub content: String,
    pub url: String,
    pub template: String,
    pub elementcolor: String,
    pub schedule_published: String,
    pub schedule_unpublished: String,
    #[serde(serialize_with = "flag", skip_serializing_if = "is_false")]
    pub published: bool,
}

/// `/user_post` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserForm {
    pub id: String,
    pub name: String,
    pub password: String,
    pub email: String,
    #[serde(serialize_with = "flag", skip_serializing_if = "is_false")]
    pub admin: bool,
}

/// `/delete_post` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteForm<'a> {
    pub id: &'a str,
    #[serde(serialize_with = "mode")]
    pub mode: ContentMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_content_form_field_names() {
        let form = ContentForm {
            mode: ContentMode::Template,
            published: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        let mut names = field_names(&value);
        names.sort();
        assert_eq!(
            names,
            vec![
                "content",
                "elementcolor",
                "head",
                "id",
                "published",
                "schedule_published",
                "schedule_unpublished",
                "template",
                "title",
                "type",
                "url"
            ]
        );
        assert_eq!(value["type"], "template");
        assert_eq!(value["published"], "1");
    }

    #[test]
    fn test_unpublished_is_omitted() {
        let value = serde_json::to_value(ContentForm::default()).unwrap();
        assert!(value.get("published").is_none());
        assert_eq!(value["type"], "");
    }

    #[test]
    fn test_user_form_admin_flag() {
        let form = UserForm {
            name: "root".into(),
            admin: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["admin"], "1");
    }

    #[test]
    fn test_delete_form() {
        let value = serde_json::to_value(DeleteForm {
            id: "7",
            mode: ContentMode::Element,
        })
        .unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["mode"], "element");
    }
}
