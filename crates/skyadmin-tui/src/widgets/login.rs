//! Login form

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};
use skyadmin_app::state::{LoginField, LoginState};

use super::{form_field, modal_overlay};
use crate::theme::styles;

pub struct LoginForm<'a> {
    state: &'a LoginState,
    base_url: &'a str,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginState, base_url: &'a str) -> Self {
        Self { state, base_url }
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = modal_overlay::centered_rect(56, 14, area);
        let block =
            styles::glass_block(true).title(Span::styled(" Sign in ", styles::accent_bold()));
        let inner = block.inner(card);
        block.render(card, buf);

        let [server_area, name_area, password_area, message_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(self.base_url.to_string(), styles::text_muted()))
            .alignment(Alignment::Center)
            .render(server_area, buf);

        form_field::render_text(
            buf,
            name_area,
            "Name",
            &self.state.name,
            self.state.focus == LoginField::Name,
            None,
        );
        form_field::render_text(
            buf,
            password_area,
            "Password",
            &self.state.password,
            self.state.focus == LoginField::Password,
            None,
        );

        let message = if self.state.submitting {
            Some(Span::styled("Signing in\u{2026}", styles::status_yellow()))
        } else {
            self.state
                .error
                .as_ref()
                .map(|e| Span::styled(e.clone(), styles::status_red()))
        };
        if let Some(message) = message {
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(message_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_login_form_shows_fields_and_server() {
        let mut term = TestTerminal::new();
        let state = LoginState::default();
        term.render_widget(
            LoginForm::new(&state, "http://cms.local/webadmin"),
            term.area(),
        );
        assert!(term.buffer_contains("Name"));
        assert!(term.buffer_contains("Password"));
        assert!(term.buffer_contains("http://cms.local/webadmin"));
    }

    #[test]
    fn test_login_error_is_shown() {
        let mut term = TestTerminal::new();
        let state = LoginState {
            error: Some("Invalid name or password".into()),
            ..Default::default()
        };
        term.render_widget(LoginForm::new(&state, ""), term.area());
        assert!(term.buffer_contains("Invalid name or password"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut term = TestTerminal::new();
        let mut state = LoginState::default();
        state.password.set("hunter2");
        term.render_widget(LoginForm::new(&state, ""), term.area());
        assert!(!term.buffer_contains("hunter2"));
    }
}
