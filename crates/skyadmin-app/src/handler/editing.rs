//! Field editing on the login, editor and settings screens

use crate::editor::{ContentField, UserField};
use crate::form::TextField;
use crate::state::{AppState, Screen, UiMode};

use super::UpdateResult;

/// Edit the focused text field of the active screen
///
/// The content and user editors drop the field's validation message on edit.
fn edit_text(state: &mut AppState, f: impl FnOnce(&mut TextField)) -> bool {
    match state.screen {
        Screen::Login => {
            f(state.login.focused_field_mut());
            state.login.error = None;
            true
        }
        Screen::ContentEditor => {
            let editor = &mut state.content_editor;
            let field = editor.focused();
            match editor.text_field_mut(field) {
                Some(text) => {
                    f(text);
                    editor.errors.remove(&field);
                    true
                }
                None => false,
            }
        }
        Screen::UserEditor => {
            let editor = &mut state.user_editor;
            let field = editor.focused();
            match editor.text_field_mut(field) {
                Some(text) => {
                    f(text);
                    editor.errors.remove(&field);
                    true
                }
                None => false,
            }
        }
        Screen::Settings => match state.color_settings.focused_field_mut() {
            Some(text) => {
                f(text);
                true
            }
            None => false,
        },
        Screen::ContentList | Screen::UserList => false,
    }
}

pub fn input(state: &mut AppState, c: char) -> UpdateResult {
    if !edit_text(state, |field| field.push(c)) && c == ' ' {
        return toggle(state, true);
    }
    UpdateResult::none()
}

pub fn backspace(state: &mut AppState) -> UpdateResult {
    edit_text(state, TextField::backspace);
    UpdateResult::none()
}

pub fn newline(state: &mut AppState) -> UpdateResult {
    if state.screen == Screen::ContentEditor {
        edit_text(state, |field| {
            field.newline();
        });
    }
    UpdateResult::none()
}

pub fn clear(state: &mut AppState) -> UpdateResult {
    edit_text(state, TextField::clear);
    UpdateResult::none()
}

/// Flip a flag or step a select of the focused field
pub fn toggle(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.screen {
        Screen::ContentEditor => {
            let editor = &mut state.content_editor;
            match editor.focused() {
                ContentField::Published => editor.published = !editor.published,
                ContentField::Template => editor.template.cycle(forward),
                ContentField::ElementColor => editor.element_color.cycle(forward),
                _ => {}
            }
        }
        Screen::UserEditor if state.user_editor.focused() == UserField::Admin => {
            state.user_editor.admin = !state.user_editor.admin;
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn focus_next(state: &mut AppState) -> UpdateResult {
    match state.screen {
        Screen::Login => state.login.toggle_focus(),
        Screen::ContentEditor => state.content_editor.focus_next(),
        Screen::UserEditor => state.user_editor.focus_next(),
        Screen::Settings => state.color_settings.focus = state.color_settings.focus.next(),
        _ => {}
    }
    UpdateResult::none()
}

pub fn focus_previous(state: &mut AppState) -> UpdateResult {
    match state.screen {
        Screen::Login => state.login.toggle_focus(),
        Screen::ContentEditor => state.content_editor.focus_previous(),
        Screen::UserEditor => state.user_editor.focus_previous(),
        Screen::Settings => state.color_settings.focus = state.color_settings.focus.prev(),
        _ => {}
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Element list
// ─────────────────────────────────────────────────────────────────────────────

/// Run `f` on the template editor's element list once the record has loaded
fn with_elements(state: &mut AppState, f: impl FnOnce(&mut AppState)) -> UpdateResult {
    let editor = &state.content_editor;
    if state.screen == Screen::ContentEditor && editor.mode.is_composed() && !editor.loading {
        f(state);
    }
    UpdateResult::none()
}

pub fn element_cursor_next(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| s.content_editor.element_cursor_next())
}

pub fn element_cursor_previous(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| s.content_editor.element_cursor_previous())
}

pub fn element_move_up(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| {
        s.content_editor.move_element_up();
    })
}

pub fn element_move_down(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| {
        s.content_editor.move_element_down();
    })
}

pub fn element_delete(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| {
        if !s.content_editor.delete_element() {
            s.info("The content entry cannot be removed");
        }
    })
}

pub fn element_add(state: &mut AppState) -> UpdateResult {
    with_elements(state, |s| {
        s.content_editor.begin_add_element();
        s.ui_mode = UiMode::ElementSelect;
    })
}

pub fn catalog_next(state: &mut AppState) -> UpdateResult {
    let editor = &mut state.content_editor;
    if editor.catalog_cursor + 1 < editor.catalog.len() {
        editor.catalog_cursor += 1;
    }
    UpdateResult::none()
}

pub fn catalog_previous(state: &mut AppState) -> UpdateResult {
    let editor = &mut state.content_editor;
    editor.catalog_cursor = editor.catalog_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn catalog_select(state: &mut AppState) -> UpdateResult {
    if state.content_editor.select_catalog_entry() {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn catalog_cancel(state: &mut AppState) -> UpdateResult {
    state.content_editor.cancel_add_element();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Color rows
// ─────────────────────────────────────────────────────────────────────────────

pub fn color_add(state: &mut AppState) -> UpdateResult {
    if state.screen != Screen::Settings {
        return UpdateResult::none();
    }
    if state.color_settings.add_row() {
        state.clear_status();
    } else {
        state.error("Enter both a name and a color code");
    }
    UpdateResult::none()
}

pub fn color_delete(state: &mut AppState) -> UpdateResult {
    if state.screen == Screen::Settings {
        state.color_settings.delete_row();
    }
    UpdateResult::none()
}

pub fn color_row_next(state: &mut AppState) -> UpdateResult {
    let screen = &mut state.color_settings;
    if screen.row_cursor + 1 < screen.colors.len() {
        screen.row_cursor += 1;
    }
    UpdateResult::none()
}

pub fn color_row_previous(state: &mut AppState) -> UpdateResult {
    let screen = &mut state.color_settings;
    screen.row_cursor = screen.row_cursor.saturating_sub(1);
    UpdateResult::none()
}
