//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{editing, keys::handle_key, lists, navigation, session, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelDialog => {
            state.close_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session
        // ─────────────────────────────────────────────────────────
        Message::AuthChecked { authenticated } => {
            session::handle_auth_checked(state, authenticated)
        }
        Message::SessionLoaded {
            user_name,
            is_admin,
        } => session::handle_session_loaded(state, user_name, is_admin),
        Message::SubmitLogin => session::handle_submit_login(state),
        Message::LoginFailed { reason } => session::handle_login_failed(state, reason),
        Message::SessionExpired => session::handle_session_expired(state),
        Message::Logout => session::handle_logout(state),
        Message::LoggedOut => session::handle_logged_out(state),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::OpenContentList { mode } => navigation::open_content_list(state, mode),
        Message::OpenUserList => navigation::open_user_list(state),
        Message::OpenContentEditor { mode, id } => {
            navigation::open_content_editor(state, mode, id)
        }
        Message::OpenUserEditor { id } => navigation::open_user_editor(state, id),
        Message::OpenSettings => navigation::open_settings(state),
        Message::Back => navigation::back(state),

        // ─────────────────────────────────────────────────────────
        // Lists
        // ─────────────────────────────────────────────────────────
        Message::ListSelectNext => lists::select_next(state),
        Message::ListSelectPrevious => lists::select_previous(state),
        Message::ListSelectFirst => lists::select_first(state),
        Message::ListSelectLast => lists::select_last(state),
        Message::ListNextPage => lists::next_page(state),
        Message::ListPreviousPage => lists::previous_page(state),
        Message::ListCycleSort => lists::cycle_sort(state),
        Message::ListRefresh => lists::refresh(state),
        Message::ListOpenSelected => lists::open_selected(state),
        Message::ContentListLoaded { query, page } => {
            lists::content_list_loaded(state, query, page)
        }
        Message::UserListLoaded { query, page } => lists::user_list_loaded(state, query, page),

        // ─────────────────────────────────────────────────────────
        // Editor data
        // ─────────────────────────────────────────────────────────
        Message::ContentLoaded { mode, id, detail } => {
            navigation::content_loaded(state, mode, id, *detail)
        }
        Message::TemplateOptionsLoaded { markup } => {
            navigation::template_options_loaded(state, &markup)
        }
        Message::ColorOptionsLoaded { markup } => navigation::color_options_loaded(state, &markup),
        Message::ElementCatalogLoaded { catalog } => {
            navigation::element_catalog_loaded(state, catalog)
        }
        Message::UserLoaded { id, user } => navigation::user_loaded(state, id, user),
        Message::SettingsLoaded { data } => navigation::settings_loaded(state, data),

        // ─────────────────────────────────────────────────────────
        // Form editing
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => editing::input(state, c),
        Message::FormBackspace => editing::backspace(state),
        Message::FormNewline => editing::newline(state),
        Message::FormClear => editing::clear(state),
        Message::FormToggle => editing::toggle(state, true),
        Message::FormCycleBack => editing::toggle(state, false),
        Message::FocusNext => editing::focus_next(state),
        Message::FocusPrevious => editing::focus_previous(state),

        Message::ElementCursorNext => editing::element_cursor_next(state),
        Message::ElementCursorPrevious => editing::element_cursor_previous(state),
        Message::ElementMoveUp => editing::element_move_up(state),
        Message::ElementMoveDown => editing::element_move_down(state),
        Message::ElementDelete => editing::element_delete(state),
        Message::ElementAdd => editing::element_add(state),
        Message::CatalogNext => editing::catalog_next(state),
        Message::CatalogPrevious => editing::catalog_previous(state),
        Message::CatalogSelect => editing::catalog_select(state),
        Message::CatalogCancel => editing::catalog_cancel(state),

        Message::ColorAdd => editing::color_add(state),
        Message::ColorDelete => editing::color_delete(state),
        Message::ColorRowNext => editing::color_row_next(state),
        Message::ColorRowPrevious => editing::color_row_previous(state),

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::RequestSave => submit::request_save(state),
        Message::ConfirmSave => submit::confirm_save(state),
        Message::RequestDelete => submit::request_delete(state),
        Message::ConfirmDelete => submit::confirm_delete(state),
        Message::RequestPreview => submit::request_preview(state),
        Message::UrlChecked { url, in_use } => submit::url_checked(state, url, in_use),
        Message::SubmitSucceeded { kind } => submit::submit_succeeded(state, kind),
        Message::SubmitFailed { kind, error } => submit::submit_failed(state, kind, error),
        Message::PreviewOpened { path } => {
            state.info(format!("Preview opened: {}", path.display()));
            UpdateResult::none()
        }
        Message::PreviewFailed { error } => {
            state.error(format!("Preview failed: {}", error));
            UpdateResult::none()
        }
    }
}
