//! Content/template/element editor form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use skyadmin_app::editor::{ContentEditorState, ContentField};
use skyadmin_core::{ContentMode, ElementRef};

use super::form_field;
use crate::theme::styles;

/// Screen rows of the form; fields sharing a row are laid out side by side
fn rows_for(mode: ContentMode) -> &'static [&'static [ContentField]] {
    use ContentField::*;
    match mode {
        ContentMode::Content => &[
            &[SchedulePublished, ScheduleUnpublished],
            &[Published, Template],
            &[Title, Url],
            &[Head],
            &[Content],
        ],
        ContentMode::Template => &[&[Title], &[Head], &[Elements]],
        ContentMode::Element => &[&[Title, ElementColor], &[Url], &[Content]],
        _ => &[&[Title, Url], &[Content]],
    }
}

fn is_tall(field: ContentField) -> bool {
    matches!(
        field,
        ContentField::Head | ContentField::Content | ContentField::Elements
    )
}

/// `#rrggbb` to a terminal color
pub fn hex_color(code: &str) -> Option<Color> {
    let hex = code.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub struct ContentEditor<'a> {
    editor: &'a ContentEditorState,
}

impl<'a> ContentEditor<'a> {
    pub fn new(editor: &'a ContentEditorState) -> Self {
        Self { editor }
    }

    fn render_field(&self, field: ContentField, area: Rect, buf: &mut Buffer) {
        let editor = self.editor;
        let focused = editor.focused() == field;
        let error = editor.errors.get(&field).map(String::as_str);
        let label = field.label();
        match field {
            ContentField::SchedulePublished => form_field::render_text(
                buf,
                area,
                label,
                &editor.schedule_published,
                focused,
                error,
            ),
            ContentField::ScheduleUnpublished => form_field::render_text(
                buf,
                area,
                label,
                &editor.schedule_unpublished,
                focused,
                error,
            ),
            ContentField::Title => {
                form_field::render_text(buf, area, label, &editor.title, focused, error)
            }
            ContentField::Head => {
                form_field::render_text(buf, area, label, &editor.head, focused, error)
            }
            ContentField::Content => {
                form_field::render_text(buf, area, label, &editor.content, focused, error)
            }
            ContentField::Url => {
                form_field::render_text(buf, area, label, &editor.url, focused, error)
            }
            ContentField::Published => form_field::render_choice(
                buf,
                area,
                label,
                form_field::flag_label(editor.published),
                focused,
                error,
            ),
            ContentField::Template => form_field::render_choice(
                buf,
                area,
                label,
                &editor.template.label(),
                focused,
                error,
            ),
            ContentField::ElementColor => form_field::render_choice(
                buf,
                area,
                label,
                &editor.element_color.label(),
                focused,
                error,
            ),
            ContentField::Elements => self.render_elements(area, buf, focused),
        }
    }

    fn element_item(element: &ElementRef) -> ListItem<'static> {
        let line = if element.is_content() {
            Line::from(vec![
                Span::styled("\u{25c6} ", styles::accent()),
                Span::styled("Content", styles::accent_bold()),
                Span::styled("  (record body)", styles::text_muted()),
            ])
        } else if element.is_placeholder() {
            Line::from(Span::styled(
                "\u{2026} choose an element",
                styles::text_muted(),
            ))
        } else {
            let swatch = hex_color(&element.color_code)
                .map(|c| Style::default().fg(c))
                .unwrap_or_else(styles::text_muted);
            Line::from(vec![
                Span::styled("\u{25a0} ", swatch),
                Span::styled(element.title.clone(), styles::text_primary()),
                Span::styled(format!("  #{}", element.id), styles::text_muted()),
            ])
        };
        ListItem::new(line)
    }

    fn render_elements(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let editor = self.editor;
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" Elements ({}) ", editor.elements.len()),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let items: Vec<ListItem> = editor
            .elements
            .items()
            .iter()
            .map(Self::element_item)
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_symbol("\u{25b6} ")
            .highlight_style(if focused {
                styles::focused_selected()
            } else {
                Style::default()
            });
        let mut list_state = ListState::default().with_selected(Some(editor.element_cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

impl Widget for ContentEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.editor.loading {
            Paragraph::new(Span::styled("Loading\u{2026}", styles::text_muted()))
                .render(area, buf);
            return;
        }

        let rows = rows_for(self.editor.mode);
        let constraints: Vec<Constraint> = rows
            .iter()
            .map(|row| {
                if row.iter().any(|f| is_tall(*f)) {
                    Constraint::Min(4)
                } else {
                    Constraint::Length(3)
                }
            })
            .collect();
        let row_areas = Layout::vertical(constraints).split(area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); row.len()]).split(*row_area);
            for (field, cell) in row.iter().zip(cells.iter()) {
                self.render_field(*field, *cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_layout_covers_every_visible_field() {
        for mode in ContentMode::ALL {
            let mut laid_out: Vec<ContentField> =
                rows_for(mode).iter().flat_map(|r| r.iter().copied()).collect();
            let mut expected = ContentField::for_mode(mode).to_vec();
            laid_out.sort();
            expected.sort();
            assert_eq!(laid_out, expected, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(hex_color("red"), None);
        assert_eq!(hex_color("#fff"), None);
    }

    #[test]
    fn test_content_mode_form() {
        let mut term = TestTerminal::new();
        let mut editor = ContentEditorState::new(ContentMode::Content);
        editor.title.set("Welcome");
        term.render_widget(ContentEditor::new(&editor), term.area());
        assert!(term.buffer_contains("Publish from"));
        assert!(term.buffer_contains("Template"));
        assert!(term.buffer_contains("Welcome"));
        assert!(term.buffer_contains("[x] yes"));
    }

    #[test]
    fn test_template_form_lists_elements() {
        let mut term = TestTerminal::new();
        let editor = ContentEditorState::new(ContentMode::Template);
        term.render_widget(ContentEditor::new(&editor), term.area());
        assert!(term.buffer_contains("Elements (1)"));
        assert!(term.buffer_contains("record body"));
        assert!(!term.buffer_contains("URL"));
    }

    #[test]
    fn test_validation_error_is_visible() {
        let mut term = TestTerminal::new();
        let mut editor = ContentEditorState::new(ContentMode::Image);
        editor
            .errors
            .insert(ContentField::Url, "URL is required".to_string());
        term.render_widget(ContentEditor::new(&editor), term.area());
        assert!(term.buffer_contains("URL is required"));
    }

    #[test]
    fn test_loading_editor() {
        let mut term = TestTerminal::new();
        let editor = ContentEditorState::loading(ContentMode::Script, "4");
        term.render_widget(ContentEditor::new(&editor), term.area());
        assert!(term.buffer_contains("Loading"));
        assert!(!term.buffer_contains("Title"));
    }
}
