//! Content list screen: mode tabs, records table and pager

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Tabs, Widget},
};
use skyadmin_app::state::ContentListState;
use skyadmin_core::{ContentMode, ContentRecord};

use super::paging;
use crate::theme::styles;

pub struct ContentList<'a> {
    state: &'a ContentListState,
}

impl<'a> ContentList<'a> {
    pub fn new(state: &'a ContentListState) -> Self {
        Self { state }
    }

    fn tabs(&self) -> Tabs<'static> {
        let titles: Vec<Line> = ContentMode::ALL
            .iter()
            .enumerate()
            .map(|(i, mode)| Line::from(format!("{} {}", i + 1, mode.label())))
            .collect();
        let selected = ContentMode::ALL
            .iter()
            .position(|m| *m == self.state.query.mode)
            .unwrap_or(0);
        Tabs::new(titles)
            .select(selected)
            .style(styles::text_muted())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("\u{2502}", styles::text_muted()))
    }

    fn row(record: &ContentRecord, mode: ContentMode) -> Row<'static> {
        let detail = if mode == ContentMode::Element {
            record.elementcolor.clone()
        } else {
            record.url.clone()
        };
        Row::new(vec![
            Cell::from(record.id.clone()),
            Cell::from(record.title.clone()),
            Cell::from(detail),
            Cell::from(record.updated.clone()),
            Cell::from(record.updated_by.clone()),
        ])
    }
}

impl Widget for ContentList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_area, summary_area, table_area, pager_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.tabs().render(tabs_area, buf);

        let view = &self.state.view;
        let query = &self.state.query;
        Paragraph::new(paging::summary_line(view, &query.sort, query.page))
            .render(summary_area, buf);

        if view.records().is_empty() {
            let text = if view.loading {
                "Loading\u{2026}"
            } else {
                "No records"
            };
            Paragraph::new(Span::styled(text, styles::text_muted())).render(table_area, buf);
        } else {
            let detail_header = if query.mode == ContentMode::Element {
                "Color"
            } else {
                "URL"
            };
            let header = Row::new(vec!["ID", "Title", detail_header, "Updated", "By"])
                .style(styles::accent_bold());
            let rows: Vec<Row> = view
                .records()
                .iter()
                .map(|r| Self::row(r, query.mode))
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Fill(3),
                    Constraint::Fill(2),
                    Constraint::Length(16),
                    Constraint::Fill(1),
                ],
            )
            .header(header)
            .row_highlight_style(styles::focused_selected())
            .highlight_symbol("\u{25b6} ");
            let mut table_state = TableState::default().with_selected(Some(view.selected));
            StatefulWidget::render(table, table_area, buf, &mut table_state);
        }

        Paragraph::new(paging::pager_line(view, query.page)).render(pager_area, buf);
    }
}
