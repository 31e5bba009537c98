//! Screen transitions
//!
//! Every transition fetches fresh data for the target screen; nothing is cached
//! between visits.

use skyadmin_core::prelude::*;
use skyadmin_core::{
    parse_options, ColorSettingList, ContentDetail, ContentMode, ElementCatalog, ListQuery,
    SettingData, UserRecord,
};

use crate::editor::{ContentEditorState, UserEditorState};
use crate::state::{AppState, Screen, SettingsState};
use crate::Message;

use super::{UpdateAction, UpdateResult};

/// Navigate, reporting whether the gate let us through
fn enter(state: &mut AppState, screen: Screen) -> bool {
    state.navigate(screen) == screen
}

fn admin_only(state: &mut AppState) -> bool {
    if state.session.is_admin {
        true
    } else {
        state.error("User management requires an administrator account");
        false
    }
}

pub fn open_content_list(state: &mut AppState, mode: ContentMode) -> UpdateResult {
    if !enter(state, Screen::ContentList) {
        return UpdateResult::none();
    }
    let list = &mut state.content_list;
    if list.query.mode != mode {
        list.query = ListQuery::new(mode);
        list.view = Default::default();
    }
    list.view.loading = true;
    UpdateResult::action(UpdateAction::FetchContentList {
        query: list.query.clone(),
    })
}

pub fn open_user_list(state: &mut AppState) -> UpdateResult {
    if !admin_only(state) || !enter(state, Screen::UserList) {
        return UpdateResult::none();
    }
    state.user_list.view.loading = true;
    UpdateResult::action(UpdateAction::FetchUserList {
        query: state.user_list.query.clone(),
    })
}

pub fn open_content_editor(
    state: &mut AppState,
    mode: ContentMode,
    id: Option<String>,
) -> UpdateResult {
    if !enter(state, Screen::ContentEditor) {
        return UpdateResult::none();
    }
    let id = id.filter(|id| !id.is_empty());
    state.content_editor = match &id {
        Some(id) => ContentEditorState::loading(mode, id.clone()),
        None => ContentEditorState::new(mode),
    };
    debug!("Opening {} editor (id: {:?})", mode, id);
    UpdateResult::action(UpdateAction::LoadContentEditor { mode, id })
}

pub fn open_user_editor(state: &mut AppState, id: Option<String>) -> UpdateResult {
    if !admin_only(state) || !enter(state, Screen::UserEditor) {
        return UpdateResult::none();
    }
    match id.filter(|id| !id.is_empty()) {
        Some(id) => {
            state.user_editor = UserEditorState::loading(id.clone());
            UpdateResult::action(UpdateAction::FetchUser { id })
        }
        None => {
            state.user_editor = UserEditorState::default();
            UpdateResult::none()
        }
    }
}

pub fn open_settings(state: &mut AppState) -> UpdateResult {
    if !enter(state, Screen::Settings) {
        return UpdateResult::none();
    }
    state.color_settings = SettingsState {
        loading: true,
        ..Default::default()
    };
    UpdateResult::action(UpdateAction::FetchSettings)
}

/// Leave the current screen for its parent list
pub fn back(state: &mut AppState) -> UpdateResult {
    let msg = match state.screen {
        Screen::ContentEditor => Message::OpenContentList {
            mode: state.content_editor.mode,
        },
        Screen::UserEditor => Message::OpenUserList,
        Screen::Settings | Screen::UserList => Message::OpenContentList {
            mode: state.list_mode(),
        },
        Screen::ContentList | Screen::Login => return UpdateResult::none(),
    };
    UpdateResult::message(msg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Loaded data
// ─────────────────────────────────────────────────────────────────────────────

pub fn content_loaded(
    state: &mut AppState,
    mode: ContentMode,
    id: String,
    detail: ContentDetail,
) -> UpdateResult {
    let editor = &mut state.content_editor;
    if editor.mode != mode || editor.id != id {
        debug!("Dropping stale record {} ({})", id, mode);
        return UpdateResult::none();
    }
    editor.apply_detail(detail);
    UpdateResult::none()
}

pub fn template_options_loaded(state: &mut AppState, markup: &str) -> UpdateResult {
    state
        .content_editor
        .template
        .set_options(parse_options(markup));
    UpdateResult::none()
}

pub fn color_options_loaded(state: &mut AppState, markup: &str) -> UpdateResult {
    state
        .content_editor
        .element_color
        .set_options(parse_options(markup));
    UpdateResult::none()
}

pub fn element_catalog_loaded(state: &mut AppState, catalog: ElementCatalog) -> UpdateResult {
    state.content_editor.catalog = catalog.results;
    state.content_editor.catalog_cursor = 0;
    UpdateResult::none()
}

pub fn user_loaded(state: &mut AppState, id: String, user: UserRecord) -> UpdateResult {
    if state.user_editor.id != id {
        debug!("Dropping stale user {}", id);
        return UpdateResult::none();
    }
    state.user_editor.apply_user(user);
    UpdateResult::none()
}

pub fn settings_loaded(state: &mut AppState, data: SettingData) -> UpdateResult {
    let screen = &mut state.color_settings;
    screen.colors = ColorSettingList::from_elements(&data.color_elements);
    screen.row_cursor = 0;
    screen.loading = false;
    UpdateResult::none()
}
