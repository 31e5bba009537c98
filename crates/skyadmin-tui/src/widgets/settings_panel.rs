//! Color settings screen: new-row inputs and the ordered color list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use skyadmin_app::state::{SettingsFocus, SettingsState};

use super::content_editor::hex_color;
use super::form_field;
use crate::theme::styles;

pub struct SettingsPanel<'a> {
    state: &'a SettingsState,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a SettingsState) -> Self {
        Self { state }
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == SettingsFocus::Rows;
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" Colors ({}) ", self.state.colors.len()),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        if self.state.colors.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled("No colors defined", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let rows: Vec<Row> = self
            .state
            .colors
            .rows()
            .iter()
            .map(|row| {
                let swatch = hex_color(&row.code)
                    .map(|c| Style::default().fg(c))
                    .unwrap_or_else(styles::text_muted);
                Row::new(vec![
                    Cell::from(row.number.to_string()),
                    Cell::from(row.name.clone()),
                    Cell::from(Span::styled("\u{25a0}\u{25a0}", swatch)),
                    Cell::from(row.code.clone()),
                ])
            })
            .collect();
        let header = Row::new(vec!["No", "Name", "", "Code"]).style(styles::accent_bold());
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Fill(2),
                Constraint::Length(3),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(if focused {
            styles::focused_selected()
        } else {
            Style::default()
        });
        let mut table_state = TableState::default().with_selected(Some(self.state.row_cursor));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.loading {
            Paragraph::new(Span::styled("Loading\u{2026}", styles::text_muted()))
                .render(area, buf);
            return;
        }

        let [inputs_area, rows_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);
        let [name_area, code_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inputs_area);

        form_field::render_text(
            buf,
            name_area,
            "New color name",
            &self.state.new_name,
            self.state.focus == SettingsFocus::NameInput,
            None,
        );
        form_field::render_text(
            buf,
            code_area,
            "Color code",
            &self.state.new_code,
            self.state.focus == SettingsFocus::CodeInput,
            None,
        );
        self.render_rows(rows_area, buf);
    }
}
