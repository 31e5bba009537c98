//! Session handlers: auth check, login, logout

use crate::state::{AppState, Screen};
use crate::Message;

use super::{UpdateAction, UpdateResult};

const NO_SESSION: &str = "Login was accepted but no session was started";

pub fn handle_auth_checked(state: &mut AppState, authenticated: bool) -> UpdateResult {
    state.session.checked = true;
    state.session.authenticated = authenticated;
    let after_login = std::mem::take(&mut state.login.submitting);
    if authenticated {
        UpdateResult::action(UpdateAction::LoadSession)
    } else {
        // the server took the credentials but did not open a session
        if after_login {
            state.login.password.clear();
            state.login.error = Some(NO_SESSION.to_string());
        }
        state.navigate(Screen::Login);
        UpdateResult::none()
    }
}

/// Header data is in; show the configured first list
pub fn handle_session_loaded(
    state: &mut AppState,
    user_name: String,
    is_admin: bool,
) -> UpdateResult {
    state.session.user_name = user_name;
    state.session.is_admin = is_admin;
    state.login = Default::default();
    if state.screen == Screen::Login {
        UpdateResult::message(Message::OpenContentList {
            mode: state.list_mode(),
        })
    } else {
        UpdateResult::none()
    }
}

pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    if state.login.submitting {
        return UpdateResult::none();
    }
    if state.login.name.is_blank() {
        state.login.error = Some("Enter your user name".to_string());
        return UpdateResult::none();
    }
    state.login.error = None;
    state.login.submitting = true;
    UpdateResult::action(UpdateAction::Login {
        name: state.login.name.value.trim().to_string(),
        password: state.login.password.value.clone(),
    })
}

pub fn handle_login_failed(state: &mut AppState, reason: String) -> UpdateResult {
    state.login.submitting = false;
    state.login.password.clear();
    state.login.error = Some(reason);
    UpdateResult::none()
}

pub fn handle_session_expired(state: &mut AppState) -> UpdateResult {
    if !state.session.authenticated && state.screen == Screen::Login {
        return UpdateResult::none();
    }
    state.end_session();
    state.login.error = Some("Your session has ended. Please log in again.".to_string());
    UpdateResult::none()
}

pub fn handle_logout(_state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::Logout)
}

pub fn handle_logged_out(state: &mut AppState) -> UpdateResult {
    state.end_session();
    state.info("Logged out");
    UpdateResult::none()
}
