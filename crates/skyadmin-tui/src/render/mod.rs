//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use skyadmin_app::state::{AppState, Screen, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI
///
/// Pure function of the state: nothing here mutates application state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    match state.screen {
        Screen::Login => frame.render_widget(
            widgets::LoginForm::new(&state.login, &state.settings.api.base_url),
            areas.body,
        ),
        Screen::ContentList => {
            frame.render_widget(widgets::ContentList::new(&state.content_list), areas.body)
        }
        Screen::ContentEditor => frame.render_widget(
            widgets::ContentEditor::new(&state.content_editor),
            areas.body,
        ),
        Screen::UserList => {
            frame.render_widget(widgets::UserList::new(&state.user_list), areas.body)
        }
        Screen::UserEditor => {
            frame.render_widget(widgets::UserEditor::new(&state.user_editor), areas.body)
        }
        Screen::Settings => frame.render_widget(
            widgets::SettingsPanel::new(&state.color_settings),
            areas.body,
        ),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
    frame.render_widget(widgets::KeyHints::new(state), areas.hints);

    // Modal overlays on top of everything
    match state.ui_mode {
        UiMode::ConfirmDialog => {
            if let Some(ref dialog_state) = state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::ElementSelect => {
            frame.render_widget(widgets::ElementSelect::new(&state.content_editor), area);
        }
        UiMode::Normal => {}
    }
}
