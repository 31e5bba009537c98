//! List screen handlers
//!
//! Sorting and paging never happen locally: each change builds a new query
//! and refetches.

use skyadmin_core::prelude::*;
use skyadmin_core::{ContentRecord, ListPage, ListQuery, UserListQuery, UserRecord};

use crate::list_view::ListView;
use crate::state::{AppState, Screen};
use crate::Message;

use super::{UpdateAction, UpdateResult};

/// Apply `f` to whichever list is on screen
fn with_view(state: &mut AppState, f: impl FnOnce(&mut ListViewRef<'_>)) -> UpdateResult {
    match state.screen {
        Screen::ContentList => f(&mut ListViewRef::Content(&mut state.content_list.view)),
        Screen::UserList => f(&mut ListViewRef::User(&mut state.user_list.view)),
        _ => {}
    }
    UpdateResult::none()
}

enum ListViewRef<'a> {
    Content(&'a mut ListView<ContentRecord>),
    User(&'a mut ListView<UserRecord>),
}

impl ListViewRef<'_> {
    fn select_next(&mut self) {
        match self {
            ListViewRef::Content(v) => v.select_next(),
            ListViewRef::User(v) => v.select_next(),
        }
    }

    fn select_previous(&mut self) {
        match self {
            ListViewRef::Content(v) => v.select_previous(),
            ListViewRef::User(v) => v.select_previous(),
        }
    }

    fn select_first(&mut self) {
        match self {
            ListViewRef::Content(v) => v.select_first(),
            ListViewRef::User(v) => v.select_first(),
        }
    }

    fn select_last(&mut self) {
        match self {
            ListViewRef::Content(v) => v.select_last(),
            ListViewRef::User(v) => v.select_last(),
        }
    }
}

pub fn select_next(state: &mut AppState) -> UpdateResult {
    with_view(state, |v| v.select_next())
}

pub fn select_previous(state: &mut AppState) -> UpdateResult {
    with_view(state, |v| v.select_previous())
}

pub fn select_first(state: &mut AppState) -> UpdateResult {
    with_view(state, |v| v.select_first())
}

pub fn select_last(state: &mut AppState) -> UpdateResult {
    with_view(state, |v| v.select_last())
}

fn fetch_content(state: &mut AppState, query: ListQuery) -> UpdateResult {
    state.content_list.query = query.clone();
    state.content_list.view.loading = true;
    UpdateResult::action(UpdateAction::FetchContentList { query })
}

fn fetch_users(state: &mut AppState, query: UserListQuery) -> UpdateResult {
    state.user_list.query = query.clone();
    state.user_list.view.loading = true;
    UpdateResult::action(UpdateAction::FetchUserList { query })
}

/// Follow the pager to `page` if the server offered a link to it
fn go_to_page(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.screen {
        Screen::ContentList => {
            let list = &state.content_list;
            let Some(page) = step(list.query.page, forward) else {
                return UpdateResult::none();
            };
            if !list.view.has_page(page) {
                return UpdateResult::none();
            }
            let query = list.query.with_page(page);
            fetch_content(state, query)
        }
        Screen::UserList => {
            let list = &state.user_list;
            let Some(page) = step(list.query.page, forward) else {
                return UpdateResult::none();
            };
            if !list.view.has_page(page) {
                return UpdateResult::none();
            }
            let query = list.query.with_page(page);
            fetch_users(state, query)
        }
        _ => UpdateResult::none(),
    }
}

fn step(page: u32, forward: bool) -> Option<u32> {
    if forward {
        page.checked_add(1)
    } else {
        page.checked_sub(1).filter(|p| *p >= 1)
    }
}

pub fn next_page(state: &mut AppState) -> UpdateResult {
    go_to_page(state, true)
}

pub fn previous_page(state: &mut AppState) -> UpdateResult {
    go_to_page(state, false)
}

/// Step to the next server-offered sort; mode and page are kept
pub fn cycle_sort(state: &mut AppState) -> UpdateResult {
    match state.screen {
        Screen::ContentList => {
            let list = &state.content_list;
            let Some(sort) = list.view.next_sort(&list.query.sort) else {
                return UpdateResult::none();
            };
            let query = list.query.with_sort(sort);
            fetch_content(state, query)
        }
        Screen::UserList => {
            let list = &state.user_list;
            let Some(sort) = list.view.next_sort(&list.query.sort) else {
                return UpdateResult::none();
            };
            let query = list.query.with_sort(sort);
            fetch_users(state, query)
        }
        _ => UpdateResult::none(),
    }
}

pub fn refresh(state: &mut AppState) -> UpdateResult {
    match state.screen {
        Screen::ContentList => {
            let query = state.content_list.query.clone();
            fetch_content(state, query)
        }
        Screen::UserList => {
            let query = state.user_list.query.clone();
            fetch_users(state, query)
        }
        _ => UpdateResult::none(),
    }
}

pub fn open_selected(state: &mut AppState) -> UpdateResult {
    match state.screen {
        Screen::ContentList => match state.content_list.view.selected_record() {
            Some(record) => UpdateResult::message(Message::OpenContentEditor {
                mode: state.content_list.query.mode,
                id: Some(record.id.clone()),
            }),
            None => UpdateResult::none(),
        },
        Screen::UserList => match state.user_list.view.selected_record() {
            Some(user) => UpdateResult::message(Message::OpenUserEditor {
                id: Some(user.id.clone()),
            }),
            None => UpdateResult::none(),
        },
        _ => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loaded pages
// ─────────────────────────────────────────────────────────────────────────────

fn show_register_message(state: &mut AppState, message: &str) {
    if !message.trim().is_empty() {
        state.info(skyadmin_core::strip_tags(message));
    }
}

pub fn content_list_loaded(
    state: &mut AppState,
    query: ListQuery,
    page: ListPage<ContentRecord>,
) -> UpdateResult {
    if state.content_list.query != query {
        debug!("Dropping page for superseded query {:?}", query);
        return UpdateResult::none();
    }
    let register_message = page.register_message.clone();
    state.content_list.view.apply_page(page);
    show_register_message(state, &register_message);
    UpdateResult::none()
}

pub fn user_list_loaded(
    state: &mut AppState,
    query: UserListQuery,
    page: ListPage<UserRecord>,
) -> UpdateResult {
    if state.user_list.query != query {
        debug!("Dropping user page for superseded query {:?}", query);
        return UpdateResult::none();
    }
    let register_message = page.register_message.clone();
    state.user_list.view.apply_page(page);
    show_register_message(state, &register_message);
    UpdateResult::none()
}
