//! Element selection modal of the template editor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use skyadmin_app::editor::ContentEditorState;

use super::content_editor::hex_color;
use super::modal_overlay;
use crate::theme::styles;

pub struct ElementSelect<'a> {
    editor: &'a ContentEditorState,
}

impl<'a> ElementSelect<'a> {
    pub fn new(editor: &'a ContentEditorState) -> Self {
        Self { editor }
    }
}

impl Widget for ElementSelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.editor.catalog.len() as u16).saturating_add(2).clamp(5, 16);
        let modal = modal_overlay::open_modal(buf, area, 50, height);
        let block = styles::modal_block(" Add element ");
        let inner = block.inner(modal);

        if self.editor.catalog.is_empty() {
            block.render(modal, buf);
            Paragraph::new(Span::styled("No elements available", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .editor
            .catalog
            .iter()
            .map(|record| {
                let swatch = hex_color(&record.elementcolor)
                    .map(|c| Style::default().fg(c))
                    .unwrap_or_else(styles::text_muted);
                ListItem::new(Line::from(vec![
                    Span::styled("\u{25a0} ", swatch),
                    Span::styled(record.title.clone(), styles::text_primary()),
                    Span::styled(format!("  #{}", record.id), styles::text_muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("\u{25b6} ")
            .highlight_style(styles::focused_selected());
        let mut state = ListState::default().with_selected(Some(self.editor.catalog_cursor));
        StatefulWidget::render(list, modal, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use skyadmin_core::{ContentMode, ContentRecord};

    #[test]
    fn test_lists_catalog_entries() {
        let mut term = TestTerminal::new();
        let mut editor = ContentEditorState::new(ContentMode::Template);
        editor.catalog = vec![
            ContentRecord {
                id: "5".into(),
                title: "Global nav".into(),
                ..Default::default()
            },
            ContentRecord {
                id: "6".into(),
                title: "Footer".into(),
                ..Default::default()
            },
        ];
        term.render_widget(ElementSelect::new(&editor), term.area());
        assert!(term.buffer_contains("Add element"));
        assert!(term.buffer_contains("Global nav"));
        assert!(term.buffer_contains("Footer"));
    }

    #[test]
    fn test_empty_catalog() {
        let mut term = TestTerminal::new();
        let editor = ContentEditorState::new(ContentMode::Template);
        term.render_widget(ElementSelect::new(&editor), term.area());
        assert!(term.buffer_contains("No elements available"));
    }
}
