//! User list screen

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use skyadmin_app::state::UserListState;
use skyadmin_core::UserRecord;

use super::paging;
use crate::theme::styles;

pub struct UserList<'a> {
    state: &'a UserListState,
}

impl<'a> UserList<'a> {
    pub fn new(state: &'a UserListState) -> Self {
        Self { state }
    }

    fn row(user: &UserRecord) -> Row<'static> {
        let role = if user.is_admin() { "admin" } else { "" };
        Row::new(vec![
            Cell::from(user.id.clone()),
            Cell::from(user.name.clone()),
            Cell::from(user.email.clone()),
            Cell::from(role),
        ])
    }
}

impl Widget for UserList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [summary_area, table_area, pager_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let view = &self.state.view;
        let query = &self.state.query;
        Paragraph::new(paging::summary_line(view, &query.sort, query.page))
            .render(summary_area, buf);

        if view.records().is_empty() {
            let text = if view.loading {
                "Loading\u{2026}"
            } else {
                "No users"
            };
            Paragraph::new(Span::styled(text, styles::text_muted())).render(table_area, buf);
        } else {
            let header = Row::new(vec!["ID", "Name", "Email", "Role"]).style(styles::accent_bold());
            let rows: Vec<Row> = view.records().iter().map(Self::row).collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Fill(2),
                    Constraint::Fill(3),
                    Constraint::Length(6),
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
