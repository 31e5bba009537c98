//! Confirmation dialog widget for quit/save/delete confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use skyadmin_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 8;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// "[y] Save  [n] Cancel"; the first option is bound to `y`, the rest to `n`
    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            let (key, color) = if i == 0 {
                ("y", palette::STATUS_GREEN)
            } else {
                ("n", palette::STATUS_RED)
            };
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(
                key,
                styles::text_primary().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!("] {}", label), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::open_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::status_yellow())
            .render(message_area, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_confirm_dialog_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::save_confirmation("this template");
        term.render_widget(ConfirmDialog::new(&state), term.area());
        assert!(term.buffer_contains("Save"));
        assert!(term.buffer_contains("Save this template?"));
    }

    #[test]
    fn test_confirm_dialog_shows_options() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::delete_confirmation("this element");
        term.render_widget(ConfirmDialog::new(&state), term.area());
        assert!(term.buffer_contains("[y] Delete"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_confirm_dialog_compact() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::quit_confirmation();
        term.render_widget(ConfirmDialog::new(&state), term.area());
        assert!(term.buffer_contains("Quit"));
    }
}
