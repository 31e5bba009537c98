//! Editor screen state: content records and user accounts
//!
//! Each editor knows which fields its record type shows, how to validate them
//! synchronously, and how to turn itself into the form body the server expects.

use std::collections::BTreeMap;

use chrono::Local;
use skyadmin_api::{ContentForm, UserForm};
use skyadmin_core::{
    is_valid_datetime, is_valid_email, validate_url, ContentDetail, ContentMode, ContentRecord,
    ElementList, ElementRef, UserRecord, DATETIME_FORMAT,
};

use crate::form::{SelectField, TextField};

/// Inline message shown when `/urlmatches` reports a clash
pub const URL_IN_USE: &str = "URL is already in use";

// ─────────────────────────────────────────────────────────────────────────────
// Content Editor
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable field of the content editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentField {
    SchedulePublished,
    ScheduleUnpublished,
    Published,
    Template,
    ElementColor,
    Title,
    Head,
    Content,
    Url,
    Elements,
}

impl ContentField {
    pub fn label(&self) -> &'static str {
        match self {
            ContentField::SchedulePublished => "Publish from",
            ContentField::ScheduleUnpublished => "Publish until",
            ContentField::Published => "Published",
            ContentField::Template => "Template",
            ContentField::ElementColor => "Color",
            ContentField::Title => "Title",
            ContentField::Head => "Head",
            ContentField::Content => "Content",
            ContentField::Url => "URL",
            ContentField::Elements => "Elements",
        }
    }

    /// Fields that take typed text
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ContentField::SchedulePublished
                | ContentField::ScheduleUnpublished
                | ContentField::Title
                | ContentField::Head
                | ContentField::Content
                | ContentField::Url
        )
    }

    /// Visible fields per record type, in focus order
    pub fn for_mode(mode: ContentMode) -> &'static [ContentField] {
        use ContentField::*;
        match mode {
            ContentMode::Content => &[
                SchedulePublished,
                ScheduleUnpublished,
                Published,
                Template,
                Title,
                Head,
                Content,
                Url,
            ],
            ContentMode::Template => &[Title, Head, Elements],
            ContentMode::Element => &[ElementColor, Title, Content, Url],
            _ => &[Title, Content, Url],
        }
    }
}

/// Field-level validation messages
pub type FieldErrors<F> = BTreeMap<F, String>;

/// State of the content/template/element editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEditorState {
    pub mode: ContentMode,
    /// Empty for a new record
    pub id: String,
    pub screen_name: String,
    pub loading: bool,

    pub schedule_published: TextField,
    pub schedule_unpublished: TextField,
    pub published: bool,
    pub template: SelectField,
    pub element_color: SelectField,
    pub title: TextField,
    pub head: TextField,
    pub content: TextField,
    pub url: TextField,

    /// Template composition
    pub elements: ElementList,
    pub element_cursor: usize,
    /// Elements offered by the selection modal
    pub catalog: Vec<ContentRecord>,
    pub catalog_cursor: usize,

    pub focus: usize,
    pub errors: FieldErrors<ContentField>,
}

impl ContentEditorState {
    /// Blank editor for a new record of `mode`
    pub fn new(mode: ContentMode) -> Self {
        let elements = if mode.is_composed() {
            ElementList::with_content()
        } else {
            ElementList::default()
        };
        Self {
            mode,
            id: String::new(),
            screen_name: mode.label().to_string(),
            loading: false,
            schedule_published: TextField::new(now_string()),
            schedule_unpublished: TextField::default(),
            published: true,
            template: SelectField::default(),
            element_color: SelectField::default(),
            title: TextField::default(),
            head: TextField::multiline(""),
            content: TextField::multiline(""),
            url: TextField::default(),
            elements,
            element_cursor: 0,
            catalog: Vec::new(),
            catalog_cursor: 0,
            focus: 0,
            errors: FieldErrors::new(),
        }
    }

    /// Editor waiting for `/getcontent` of an existing record
    pub fn loading(mode: ContentMode, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            loading: true,
            ..Self::new(mode)
        }
    }

    /// Fill the form from the server's record
    pub fn apply_detail(&mut self, detail: ContentDetail) {
        self.loading = false;
        if !detail.screen_name.is_empty() {
            self.screen_name = detail.screen_name.clone();
        }
        self.schedule_published.set(if detail.schedule_published.is_empty() {
            now_string()
        } else {
            detail.schedule_published.clone()
        });
        self.schedule_unpublished.set(detail.schedule_unpublished.clone());
        self.published = detail.is_published();
        self.title.set(detail.title.clone());
        self.head.set(detail.head.clone());
        self.url.set(detail.url.clone());
        self.template.value = detail.template.clone();
        self.element_color.value = detail.elementcolor.clone();
        if !detail.template_output.is_empty() {
            self.template
                .set_options(skyadmin_core::parse_options(&detail.template_output));
        }
        if !detail.color_output.is_empty() {
            self.element_color
                .set_options(skyadmin_core::parse_options(&detail.color_output));
        }
        if self.mode.is_composed() {
            self.elements = if detail.ele_results.is_empty() {
                ElementList::parse_wire(&detail.content)
            } else {
                ElementList::from_detail(&detail.ele_results)
            };
            if self.elements.is_empty() {
                self.elements = ElementList::with_content();
            }
            self.element_cursor = 0;
        } else {
            self.content.set(detail.content);
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    pub fn fields(&self) -> &'static [ContentField] {
        ContentField::for_mode(self.mode)
    }

    pub fn focused(&self) -> ContentField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn text_field_mut(&mut self, field: ContentField) -> Option<&mut TextField> {
        match field {
            ContentField::SchedulePublished => Some(&mut self.schedule_published),
            ContentField::ScheduleUnpublished => Some(&mut self.schedule_unpublished),
            ContentField::Title => Some(&mut self.title),
            ContentField::Head => Some(&mut self.head),
            ContentField::Content => Some(&mut self.content),
            ContentField::Url => Some(&mut self.url),
            _ => None,
        }
    }

    /// Synchronous checks run before submission
    ///
    /// Templates are submitted without validation.
    pub fn validate(&self) -> FieldErrors<ContentField> {
        let mut errors = FieldErrors::new();
        if self.mode.is_composed() {
            return errors;
        }
        for (field, value) in [
            (ContentField::SchedulePublished, &self.schedule_published),
            (ContentField::ScheduleUnpublished, &self.schedule_unpublished),
        ] {
            if self.fields().contains(&field)
                && !value.value.is_empty()
                && !is_valid_datetime(&value.value)
            {
                errors.insert(field, format!("Use {}", display_format()));
            }
        }
        if self.title.is_blank() {
            errors.insert(ContentField::Title, "Title is required".to_string());
        }
        if self.mode.has_url() {
            if let Err(e) = validate_url(self.url.as_str()) {
                errors.insert(ContentField::Url, e.to_string());
            }
        }
        errors
    }

    /// URL to check with `/urlmatches`, if the record type has one
    pub fn url_to_check(&self) -> Option<String> {
        (self.mode.has_url() && !self.url.value.is_empty()).then(|| self.url.value.clone())
    }

    /// Form body for `/update_post` and `/preview`
    pub fn to_form(&self) -> ContentForm {
        let composed = self.mode.is_composed();
        ContentForm {
            id: self.id.clone(),
            mode: self.mode,
            title: self.title.value.clone(),
            head: if self.mode.has_head() {
                self.head.value.clone()
            } else {
                String::new()
            },
            content: if composed {
                self.elements.to_wire()
            } else {
                self.content.value.clone()
            },
            url: if self.mode.has_url() {
                self.url.value.clone()
            } else {
                String::new()
            },
            template: self.template.value.clone(),
            elementcolor: self.element_color.value.clone(),
            schedule_published: self.schedule_published.value.clone(),
            schedule_unpublished: self.schedule_unpublished.value.clone(),
            published: composed || self.published,
        }
    }

    // ── element list ──────────────────────────────────────────────

    pub fn element_cursor_next(&mut self) {
        if self.element_cursor + 1 < self.elements.len() {
            self.element_cursor += 1;
        }
    }

    pub fn element_cursor_previous(&mut self) {
        self.element_cursor = self.element_cursor.saturating_sub(1);
    }

    pub fn move_element_up(&mut self) -> bool {
        let moved = self.elements.move_up(self.element_cursor);
        if moved {
            self.element_cursor -= 1;
        }
        moved
    }

    pub fn move_element_down(&mut self) -> bool {
        let moved = self.elements.move_down(self.element_cursor);
        if moved {
            self.element_cursor += 1;
        }
        moved
    }

    pub fn delete_element(&mut self) -> bool {
        let deleted = self.elements.delete(self.element_cursor);
        if deleted && self.element_cursor >= self.elements.len() {
            self.element_cursor = self.elements.len().saturating_sub(1);
        }
        deleted
    }

    /// Append a placeholder and point the cursors at it and the catalog
    pub fn begin_add_element(&mut self) {
        self.element_cursor = self.elements.add_placeholder();
        self.catalog_cursor = 0;
    }

    /// Resolve the placeholder with the highlighted catalog entry
    pub fn select_catalog_entry(&mut self) -> bool {
        match self.catalog.get(self.catalog_cursor) {
            Some(record) => self.elements.select(ElementRef::from_record(record)),
            None => false,
        }
    }

    pub fn cancel_add_element(&mut self) {
        self.elements.cancel_add();
        if self.element_cursor >= self.elements.len() {
            self.element_cursor = self.elements.len().saturating_sub(1);
        }
    }
}

fn now_string() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}

fn display_format() -> &'static str {
    "YYYY-MM-DD HH:mm"
}

// ─────────────────────────────────────────────────────────────────────────────
// User Editor
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Password,
    Email,
    Admin,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::Name,
        UserField::Password,
        UserField::Email,
        UserField::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Password => "Password",
            UserField::Email => "Email",
            UserField::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEditorState {
    pub id: String,
    pub loading: bool,
    pub name: TextField,
    pub password: TextField,
    pub email: TextField,
    pub admin: bool,
    pub focus: usize,
    pub errors: FieldErrors<UserField>,
}

impl Default for UserEditorState {
    fn default() -> Self {
        Self {
            id: String::new(),
            loading: false,
            name: TextField::default(),
            password: TextField::masked(""),
            email: TextField::default(),
            admin: false,
            focus: 0,
            errors: FieldErrors::new(),
        }
    }
}

impl UserEditorState {
    pub fn loading(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            loading: true,
            ..Self::default()
        }
    }

    pub fn apply_user(&mut self, user: UserRecord) {
        self.loading = false;
        self.admin = user.is_admin();
        self.name.set(user.name);
        self.password.set(user.password);
        self.email.set(user.email);
    }

    pub fn focused(&self) -> UserField {
        UserField::ALL[self.focus.min(UserField::ALL.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % UserField::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + UserField::ALL.len() - 1) % UserField::ALL.len();
    }

    pub fn text_field_mut(&mut self, field: UserField) -> Option<&mut TextField> {
        match field {
            UserField::Name => Some(&mut self.name),
            UserField::Password => Some(&mut self.password),
            UserField::Email => Some(&mut self.email),
            UserField::Admin => None,
        }
    }

    pub fn validate(&self) -> FieldErrors<UserField> {
        let mut errors = FieldErrors::new();
        if self.name.is_blank() {
            errors.insert(UserField::Name, "Name is required".to_string());
        }
        if self.password.value.is_empty() {
            errors.insert(UserField::Password, "Password is required".to_string());
        }
        if !is_valid_email(self.email.as_str()) {
            errors.insert(UserField::Email, "Enter a valid email address".to_string());
        }
        errors
    }

    pub fn to_form(&self) -> UserForm {
        UserForm {
            id: self.id.clone(),
            name: self.name.value.clone(),
            password: self.password.value.clone(),
            email: self.email.value.clone(),
            admin: self.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyadmin_core::EleResult;

    #[test]
    fn test_new_content_defaults() {
        let editor = ContentEditorState::new(ContentMode::Content);
        assert!(editor.published);
        assert!(is_valid_datetime(editor.schedule_published.as_str()));
        assert!(editor.schedule_unpublished.as_str().is_empty());
        assert!(editor.is_new());
    }

    #[test]
    fn test_new_template_starts_with_content_entry() {
        let editor = ContentEditorState::new(ContentMode::Template);
        assert_eq!(editor.elements.len(), 1);
        assert!(editor.elements.items()[0].is_content());
        assert_eq!(editor.to_form().content, "###content###");
    }

    #[test]
    fn test_field_sets_per_mode() {
        assert!(ContentField::for_mode(ContentMode::Template).contains(&ContentField::Elements));
        assert!(!ContentField::for_mode(ContentMode::Template).contains(&ContentField::Url));
        assert!(ContentField::for_mode(ContentMode::Element).contains(&ContentField::ElementColor));
        assert_eq!(
            ContentField::for_mode(ContentMode::Script),
            &[ContentField::Title, ContentField::Content, ContentField::Url]
        );
    }

    #[test]
    fn test_apply_detail_for_content() {
        let mut editor = ContentEditorState::loading(ContentMode::Content, "4");
        editor.apply_detail(ContentDetail {
            title: "About".into(),
            url: "about".into(),
            content: "<p>hi</p>".into(),
            template: "2".into(),
            template_output: r#"<option value="">--none--</option><option value="2" selected>Base</option>"#.into(),
            publish_flag_keep: "0".into(),
            ..Default::default()
        });
        assert!(!editor.loading);
        assert!(!editor.published);
        assert_eq!(editor.template.label(), "Base");
        assert_eq!(editor.content.as_str(), "<p>hi</p>");
        // empty schedule falls back to now
        assert!(is_valid_datetime(editor.schedule_published.as_str()));
    }

    #[test]
    fn test_apply_detail_for_template() {
        let mut editor = ContentEditorState::loading(ContentMode::Template, "3");
        editor.apply_detail(ContentDetail {
            ele_results: vec![
                EleResult {
                    id: "5".into(),
                    title: "Header".into(),
                    ..Default::default()
                },
                EleResult {
                    content: "1".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        assert_eq!(
            editor.to_form().content,
            "###element(5)###,###content###"
        );
    }

    #[test]
    fn test_validate_invalid_date_and_url() {
        let mut editor = ContentEditorState::new(ContentMode::Content);
        editor.title.set("t");
        editor.schedule_published.set("2024-02-30 10:00");
        editor.url.set("/foo");
        let errors = editor.validate();
        assert!(errors.contains_key(&ContentField::SchedulePublished));
        assert!(errors.contains_key(&ContentField::Url));
        assert!(!errors.contains_key(&ContentField::Title));
    }

    #[test]
    fn test_validate_passes_and_requests_url_check() {
        let mut editor = ContentEditorState::new(ContentMode::Stylesheet);
        editor.title.set("site");
        editor.url.set("css/site.css");
        assert!(editor.validate().is_empty());
        assert_eq!(editor.url_to_check().as_deref(), Some("css/site.css"));
    }

    #[test]
    fn test_template_skips_validation() {
        let editor = ContentEditorState::new(ContentMode::Template);
        assert!(editor.validate().is_empty());
        assert_eq!(editor.url_to_check(), None);
        assert!(editor.to_form().published);
    }

    #[test]
    fn test_element_cursor_follows_moves() {
        let mut editor = ContentEditorState::new(ContentMode::Template);
        editor.catalog = vec![ContentRecord {
            id: "5".into(),
            title: "Header".into(),
            ..Default::default()
        }];
        editor.begin_add_element();
        assert_eq!(editor.element_cursor, 1);
        assert!(editor.select_catalog_entry());
        assert!(editor.move_element_up());
        assert_eq!(editor.element_cursor, 0);
        assert!(!editor.move_element_up());
        assert_eq!(editor.to_form().content, "###element(5)###,###content###");
    }

    #[test]
    fn test_cancel_add_restores_cursor() {
        let mut editor = ContentEditorState::new(ContentMode::Template);
        editor.begin_add_element();
        editor.cancel_add_element();
        assert_eq!(editor.elements.len(), 1);
        assert_eq!(editor.element_cursor, 0);
    }

    #[test]
    fn test_user_validation() {
        let mut editor = UserEditorState::default();
        let errors = editor.validate();
        assert_eq!(errors.len(), 3);

        editor.name.set("alice");
        editor.password.set("pw");
        editor.email.set("alice@example.com");
        assert!(editor.validate().is_empty());
        editor.admin = true;
        assert!(editor.to_form().admin);
    }
}
