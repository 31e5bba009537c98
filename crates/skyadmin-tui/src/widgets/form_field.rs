//! Bordered field boxes shared by the editor and login forms

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use skyadmin_app::form::TextField;

use crate::theme::styles;

const CURSOR: &str = "\u{258f}";

/// Titled, rounded box; the error (if any) is shown in the bottom border
fn field_block(label: &str, focused: bool, error: Option<&str>) -> Block<'static> {
    let title_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    let mut block =
        styles::glass_block(focused).title(Span::styled(format!(" {} ", label), title_style));
    if let Some(error) = error {
        block = block.title_bottom(Span::styled(
            format!(" {} ", error),
            styles::status_red(),
        ));
    }
    if error.is_some() && !focused {
        block = block.border_style(styles::status_red());
    }
    block
}

/// Text input box
///
/// Multi-line values scroll so the end (where typing happens) stays visible.
pub fn render_text(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
    error: Option<&str>,
) {
    let block = field_block(label, focused, error);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut text = field.display();
    if focused {
        text.push_str(CURSOR);
    }

    let line_count = text.split('\n').count() as u16;
    let scroll = if field.multiline {
        line_count.saturating_sub(inner.height)
    } else {
        0
    };

    Paragraph::new(text)
        .style(styles::text_primary())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .render(inner, buf);
}

/// Choice box (toggle or server-provided select)
pub fn render_choice(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) {
    let block = field_block(label, focused, error);
    let inner = block.inner(area);
    block.render(area, buf);

    let arrow_style = if focused {
        styles::accent()
    } else {
        styles::text_muted()
    };
    Paragraph::new(Line::from(vec![
        Span::styled("\u{25c2} ", arrow_style),
        Span::styled(value.to_string(), styles::text_primary()),
        Span::styled(" \u{25b8}", arrow_style),
    ]))
    .render(inner, buf);
}

/// Checkbox-style label for boolean fields
pub fn flag_label(on: bool) -> &'static str {
    if on {
        "[x] yes"
    } else {
        "[ ] no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_text_field_shows_label_and_value() {
        let mut term = TestTerminal::with_size(40, 3);
        let field = TextField::new("About us");
        let area = term.area();
        term.draw_with(|f| {
            render_text(f.buffer_mut(), area, "Title", &field, false, None)
        });
        assert!(term.buffer_contains("Title"));
        assert!(term.buffer_contains("About us"));
    }

    #[test]
    fn test_error_is_shown_in_border() {
        let mut term = TestTerminal::with_size(50, 3);
        let field = TextField::new("");
        let area = term.area();
        term.draw_with(|f| {
            render_text(f.buffer_mut(), area, "Title", &field, true, Some("Title is required"))
        });
        assert!(term.buffer_contains("Title is required"));
    }

    #[test]
    fn test_masked_field_hides_value() {
        let mut term = TestTerminal::with_size(40, 3);
        let field = TextField::masked("secret");
        let area = term.area();
        term.draw_with(|f| {
            render_text(f.buffer_mut(), area, "Password", &field, false, None)
        });
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_choice_shows_value() {
        let mut term = TestTerminal::with_size(40, 3);
        let area = term.area();
        term.draw_with(|f| {
            render_choice(f.buffer_mut(), area, "Published", flag_label(true), true, None)
        });
        assert!(term.buffer_contains("[x] yes"));
    }
}
