//! User editor form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};
use skyadmin_app::editor::{UserEditorState, UserField};

use super::form_field;
use crate::theme::styles;

pub struct UserEditor<'a> {
    editor: &'a UserEditorState,
}

impl<'a> UserEditor<'a> {
    pub fn new(editor: &'a UserEditorState) -> Self {
        Self { editor }
    }
}

impl Widget for UserEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editor = self.editor;
        if editor.loading {
            Paragraph::new(Span::styled("Loading\u{2026}", styles::text_muted()))
                .render(area, buf);
            return;
        }

        let rows = Layout::vertical(
            UserField::ALL
                .iter()
                .map(|_| Constraint::Length(3))
                .chain([Constraint::Min(0)]),
        )
        .split(area);

        for (field, row) in UserField::ALL.iter().zip(rows.iter()) {
            let focused = editor.focused() == *field;
            let error = editor.errors.get(field).map(String::as_str);
            let label = field.label();
            match field {
                UserField::Name => {
                    form_field::render_text(buf, *row, label, &editor.name, focused, error)
                }
                UserField::Password => {
                    form_field::render_text(buf, *row, label, &editor.password, focused, error)
                }
                UserField::Email => {
                    form_field::render_text(buf, *row, label, &editor.email, focused, error)
                }
                UserField::Admin => form_field::render_choice(
                    buf,
                    *row,
                    label,
                    form_field::flag_label(editor.admin),
                    focused,
                    error,
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use skyadmin_core::UserRecord;

    #[test]
    fn test_user_form_fields() {
        let mut term = TestTerminal::new();
        let mut editor = UserEditorState::default();
        editor.apply_user(UserRecord {
            id: "2".into(),
            name: "jiro".into(),
            password: "pw".into(),
            email: "jiro@example.com".into(),
            admin: "1".into(),
            ..Default::default()
        });
        term.render_widget(UserEditor::new(&editor), term.area());
        assert!(term.buffer_contains("jiro@example.com"));
        assert!(term.buffer_contains("[x] yes"));
        assert!(!term.buffer_contains("pw "));
    }

    #[test]
    fn test_error_shown_under_field() {
        let mut term = TestTerminal::new();
        let mut editor = UserEditorState::default();
        editor
            .errors
            .insert(UserField::Email, "Email is invalid".to_string());
        term.render_widget(UserEditor::new(&editor), term.area());
        assert!(term.buffer_contains("Email is invalid"));
    }
}
