//! Key event handlers for different screens and UI modes

use skyadmin_core::ContentMode;

use crate::editor::{ContentField, UserField};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen, SettingsFocus, UiMode};

/// Convert key events to messages based on current UI mode and screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::ElementSelect => handle_key_element_select(key),
        UiMode::Normal => match state.screen {
            Screen::Login => handle_key_login(key),
            Screen::ContentList => handle_key_content_list(state, key),
            Screen::UserList => handle_key_user_list(key),
            Screen::ContentEditor => handle_key_content_editor(state, key),
            Screen::UserEditor => handle_key_user_editor(state, key),
            Screen::Settings => handle_key_settings(state, key),
        },
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // 'y', 'Y' or Enter accepts the dialog's first option
        InputKey::Char('y' | 'Y') | InputKey::Enter => state
            .confirm_dialog_state
            .as_ref()
            .and_then(|dialog| dialog.accept_message()),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDialog),
        _ => None,
    }
}

fn handle_key_element_select(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CatalogPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::CatalogNext),
        InputKey::Enter => Some(Message::CatalogSelect),
        InputKey::Esc => Some(Message::CatalogCancel),
        _ => None,
    }
}

fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::FocusNext)
        }
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClear),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Keys shared by both list screens
fn handle_key_list_common(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Up | InputKey::Char('k') => Some(Message::ListSelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::ListSelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::ListSelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::ListSelectLast),
        InputKey::Enter | InputKey::Char('e') => Some(Message::ListOpenSelected),
        InputKey::PageDown | InputKey::Right | InputKey::Char('l') => Some(Message::ListNextPage),
        InputKey::PageUp | InputKey::Left | InputKey::Char('h') => {
            Some(Message::ListPreviousPage)
        }
        InputKey::Char('s') => Some(Message::ListCycleSort),
        InputKey::Char('r') => Some(Message::ListRefresh),
        InputKey::Char('S') => Some(Message::OpenSettings),
        InputKey::Char('L') => Some(Message::Logout),
        _ => None,
    }
}

fn handle_key_content_list(state: &AppState, key: InputKey) -> Option<Message> {
    let mode = state.list_mode();
    match key {
        InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char('n') => Some(Message::OpenContentEditor { mode, id: None }),
        InputKey::Char('u') if state.session.is_admin => Some(Message::OpenUserList),
        InputKey::Tab => Some(Message::OpenContentList { mode: mode.next() }),
        InputKey::BackTab => Some(Message::OpenContentList { mode: mode.prev() }),
        InputKey::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            ContentMode::ALL
                .get(index)
                .map(|&mode| Message::OpenContentList { mode })
        }
        _ => handle_key_list_common(key),
    }
}

fn handle_key_user_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('c') => Some(Message::Back),
        InputKey::Char('n') => Some(Message::OpenUserEditor { id: None }),
        _ => handle_key_list_common(key),
    }
}

/// Keys available on every editor screen
fn handle_key_editor_common(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Back),
        InputKey::CharCtrl('s') => Some(Message::RequestSave),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        _ => None,
    }
}

/// Typing into a text field
fn handle_key_text(key: InputKey, multiline: bool) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::FormInput(c)),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClear),
        InputKey::Enter if multiline => Some(Message::FormNewline),
        InputKey::Enter | InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}

/// Flags and selects
fn handle_key_choice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') | InputKey::Enter | InputKey::Right => Some(Message::FormToggle),
        InputKey::Left => Some(Message::FormCycleBack),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}

fn handle_key_content_editor(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_editor_common(key) {
        return Some(msg);
    }
    match key {
        InputKey::CharCtrl('d') => return Some(Message::RequestDelete),
        InputKey::CharCtrl('p') => return Some(Message::RequestPreview),
        _ => {}
    }
    let editor = &state.content_editor;
    match editor.focused() {
        ContentField::Elements => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::ElementCursorPrevious),
            InputKey::Down | InputKey::Char('j') => Some(Message::ElementCursorNext),
            InputKey::Char('K') => Some(Message::ElementMoveUp),
            InputKey::Char('J') => Some(Message::ElementMoveDown),
            InputKey::Char('a') => Some(Message::ElementAdd),
            InputKey::Char('d') | InputKey::Delete => Some(Message::ElementDelete),
            _ => None,
        },
        field if field.is_text() => {
            let multiline = matches!(field, ContentField::Head | ContentField::Content);
            handle_key_text(key, multiline)
        }
        _ => handle_key_choice(key),
    }
}

fn handle_key_user_editor(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_editor_common(key) {
        return Some(msg);
    }
    match state.user_editor.focused() {
        UserField::Admin => handle_key_choice(key),
        _ => handle_key_text(key, false),
    }
}

fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_editor_common(key) {
        return Some(msg);
    }
    match state.color_settings.focus {
        SettingsFocus::Rows => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::ColorRowPrevious),
            InputKey::Down | InputKey::Char('j') => Some(Message::ColorRowNext),
            InputKey::Char('d') | InputKey::Delete => Some(Message::ColorDelete),
            _ => None,
        },
        SettingsFocus::NameInput | SettingsFocus::CodeInput => match key {
            InputKey::Enter => Some(Message::ColorAdd),
            _ => handle_key_text(key, false),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm_dialog::ConfirmDialogState;

    fn logged_in(screen: Screen) -> AppState {
        let mut state = AppState::new();
        state.session.authenticated = true;
        state.navigate(screen);
        state
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = logged_in(Screen::ContentEditor);
        state.show_dialog(ConfirmDialogState::quit_confirmation());
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_confirm_dialog_accepts_first_option() {
        let mut state = logged_in(Screen::ContentEditor);
        state.show_dialog(ConfirmDialogState::save_confirmation("this page"));
        assert!(matches!(
            handle_key(&state, InputKey::Char('y')),
            Some(Message::ConfirmSave)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::CancelDialog)
        ));
    }

    #[test]
    fn test_content_list_mode_shortcuts() {
        let state = logged_in(Screen::ContentList);
        assert!(matches!(
            handle_key(&state, InputKey::Char('2')),
            Some(Message::OpenContentList {
                mode: ContentMode::Template
            })
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Tab),
            Some(Message::OpenContentList {
                mode: ContentMode::Template
            })
        ));
        assert!(handle_key(&state, InputKey::Char('9')).is_none());
    }

    #[test]
    fn test_user_list_key_requires_admin() {
        let mut state = logged_in(Screen::ContentList);
        assert!(handle_key(&state, InputKey::Char('u')).is_none());
        state.session.is_admin = true;
        assert!(matches!(
            handle_key(&state, InputKey::Char('u')),
            Some(Message::OpenUserList)
        ));
    }

    #[test]
    fn test_editor_typing_goes_to_focused_field() {
        let mut state = logged_in(Screen::ContentEditor);
        state.content_editor = crate::editor::ContentEditorState::new(ContentMode::Script);
        // Script focus starts on the title
        assert!(matches!(
            handle_key(&state, InputKey::Char('x')),
            Some(Message::FormInput('x'))
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::FocusNext)
        ));
    }

    #[test]
    fn test_template_element_keys() {
        let mut state = logged_in(Screen::ContentEditor);
        state.content_editor = crate::editor::ContentEditorState::new(ContentMode::Template);
        state.content_editor.focus = 2;
        assert_eq!(state.content_editor.focused(), ContentField::Elements);
        assert!(matches!(
            handle_key(&state, InputKey::Char('a')),
            Some(Message::ElementAdd)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('K')),
            Some(Message::ElementMoveUp)
        ));
    }

    #[test]
    fn test_settings_enter_adds_row() {
        let state = logged_in(Screen::Settings);
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::ColorAdd)
        ));
    }
}
