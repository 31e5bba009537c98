//! Sort and pager lines shown under both list screens

use ratatui::text::{Line, Span};
use skyadmin_app::list_view::ListView;

use crate::theme::styles;

/// "Sort: Updated  Page 2/5" summary
pub fn summary_line<T>(view: &ListView<T>, sort: &str, page: u32) -> Line<'static> {
    let sort_label = view.sort_label(sort);
    let sort_label = if sort_label.is_empty() {
        "default".to_string()
    } else {
        sort_label
    };
    Line::from(vec![
        Span::styled("Sort: ", styles::text_muted()),
        Span::styled(sort_label, styles::text_secondary()),
        Span::styled("   Page ", styles::text_muted()),
        Span::styled(
            format!("{}/{}", page, view.last_page(page)),
            styles::text_secondary(),
        ),
        Span::styled(
            format!("   {} records", view.records().len()),
            styles::text_muted(),
        ),
    ])
}

/// The server's pager links, current page highlighted
pub fn pager_line<T>(view: &ListView<T>, page: u32) -> Line<'static> {
    let mut spans = Vec::new();
    for link in &view.pager {
        let style = if link.page == page {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        spans.push(Span::styled(format!(" {} ", link.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
