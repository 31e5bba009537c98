//! Status line and key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use skyadmin_app::state::{AppState, Screen, UiMode};
use skyadmin_app::editor::ContentField;

use crate::theme::styles;

/// One-line feedback: the latest status message, or a busy marker
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn is_busy(&self) -> bool {
        let state = self.state;
        state.submitting
            || state.pending_url_check.is_some()
            || state.login.submitting
            || match state.screen {
                Screen::ContentList => state.content_list.view.loading,
                Screen::UserList => state.user_list.view.loading,
                Screen::ContentEditor => state.content_editor.loading,
                Screen::UserEditor => state.user_editor.loading,
                Screen::Settings => state.color_settings.loading,
                Screen::Login => false,
            }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.is_busy() {
            spans.push(Span::styled(" \u{21bb} working\u{2026} ", styles::status_yellow()));
        }
        if let Some(status) = &self.state.status {
            spans.push(Span::styled(
                format!(" {}", status.text),
                styles::status_level(status.level),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Key hints for the active screen and overlay
pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, action)` pairs shown for the current context
    pub fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui_mode {
            UiMode::ConfirmDialog => return vec![("y/Enter", "confirm"), ("n/Esc", "cancel")],
            UiMode::ElementSelect => {
                return vec![("\u{2191}\u{2193}", "choose"), ("Enter", "add"), ("Esc", "cancel")]
            }
            UiMode::Normal => {}
        }

        match state.screen {
            Screen::Login => vec![("Tab", "next field"), ("Enter", "sign in"), ("Esc", "quit")],
            Screen::ContentList => {
                let mut hints = vec![
                    ("Enter", "edit"),
                    ("n", "new"),
                    ("Tab/1-8", "mode"),
                    ("s", "sort"),
                    ("\u{2190}\u{2192}", "page"),
                    ("r", "refresh"),
                    ("S", "settings"),
                ];
                if state.session.is_admin {
                    hints.push(("u", "users"));
                }
                hints.extend([("L", "logout"), ("q", "quit")]);
                hints
            }
            Screen::UserList => vec![
                ("Enter", "edit"),
                ("n", "new"),
                ("s", "sort"),
                ("\u{2190}\u{2192}", "page"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            Screen::ContentEditor => {
                let editor = &state.content_editor;
                let mut hints = vec![("Tab", "next field"), ("Ctrl+S", "save")];
                if editor.focused() == ContentField::Elements {
                    hints.extend([
                        ("j/k", "cursor"),
                        ("J/K", "move"),
                        ("a", "add"),
                        ("d", "remove"),
                    ]);
                } else if !editor.focused().is_text() {
                    hints.push(("Space/\u{2190}\u{2192}", "change"));
                }
                if !editor.is_new() {
                    hints.push(("Ctrl+D", "delete"));
                }
                if editor.mode == skyadmin_core::ContentMode::Content {
                    hints.push(("Ctrl+P", "preview"));
                }
                hints.push(("Esc", "back"));
                hints
            }
            Screen::UserEditor => vec![
                ("Tab", "next field"),
                ("Space", "toggle admin"),
                ("Ctrl+S", "save"),
                ("Esc", "back"),
            ],
            Screen::Settings => vec![
                ("Tab", "next field"),
                ("Enter", "add color"),
                ("d", "remove row"),
                ("Ctrl+S", "save"),
                ("Esc", "back"),
            ],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in Self::hints(self.state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2502} ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
