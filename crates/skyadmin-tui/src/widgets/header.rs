//! Header bar: app title, active screen and signed-in user

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use skyadmin_app::state::{AppState, Screen};

use crate::theme::{palette, styles};

/// Main header showing app title, screen title and the session user
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Human title of the active screen
    pub fn screen_title(state: &AppState) -> String {
        match state.screen {
            Screen::Login => "Sign in".to_string(),
            Screen::ContentList => format!("{} list", state.list_mode().label()),
            Screen::ContentEditor => {
                let editor = &state.content_editor;
                if editor.is_new() {
                    format!("New {}", editor.screen_name)
                } else {
                    format!("Edit {} #{}", editor.screen_name, editor.id)
                }
            }
            Screen::UserList => "Users".to_string(),
            Screen::UserEditor if state.user_editor.id.is_empty() => "New user".to_string(),
            Screen::UserEditor => format!("Edit user #{}", state.user_editor.id),
            Screen::Settings => "Settings".to_string(),
        }
    }

    fn user_span(&self) -> Span<'static> {
        let session = &self.state.session;
        if !session.authenticated {
            return Span::styled("not signed in", styles::text_muted());
        }
        let name = if session.user_name.is_empty() {
            "signed in".to_string()
        } else {
            session.user_name.clone()
        };
        if session.is_admin {
            Span::styled(format!("\u{25cf} {} (admin)", name), styles::accent())
        } else {
            Span::styled(format!("\u{25cf} {}", name), styles::text_secondary())
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("\u{25c6} Skygarden Admin", styles::accent_bold()),
            Span::styled("  \u{2502}  ", styles::text_muted()),
            Span::styled(Self::screen_title(self.state), styles::text_primary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        Paragraph::new(Line::from(self.user_span()))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
