//! Save, delete and preview flows
//!
//! A save is: confirm dialog -> synchronous validation -> optional URL
//! uniqueness check -> POST. Any validation failure closes the dialog and
//! flags the offending fields instead of submitting.

use skyadmin_api::ContentForm;
use skyadmin_core::prelude::*;
use skyadmin_core::ContentMode;

use crate::confirm_dialog::ConfirmDialogState;
use crate::editor::{ContentField, URL_IN_USE};
use crate::message::SubmitKind;
use crate::state::{AppState, PendingUrlCheck, Screen};
use crate::Message;

use super::{UpdateAction, UpdateResult};

const FIX_FIELDS: &str = "Fix the highlighted fields before saving";

fn noun(mode: ContentMode) -> String {
    format!("this {}", mode.label().to_lowercase())
}

pub fn request_save(state: &mut AppState) -> UpdateResult {
    if state.submitting {
        return UpdateResult::none();
    }
    let dialog = match state.screen {
        Screen::ContentEditor if !state.content_editor.loading => {
            ConfirmDialogState::save_confirmation(&noun(state.content_editor.mode))
        }
        Screen::UserEditor if !state.user_editor.loading => {
            ConfirmDialogState::save_confirmation("this user")
        }
        Screen::Settings if !state.color_settings.loading => {
            ConfirmDialogState::save_confirmation("these settings")
        }
        _ => return UpdateResult::none(),
    };
    state.show_dialog(dialog);
    UpdateResult::none()
}

pub fn confirm_save(state: &mut AppState) -> UpdateResult {
    state.close_dialog();
    match state.screen {
        Screen::ContentEditor => validate_content(state),
        Screen::UserEditor => {
            let errors = state.user_editor.validate();
            let valid = errors.is_empty();
            state.user_editor.errors = errors;
            if !valid {
                state.error(FIX_FIELDS);
                return UpdateResult::none();
            }
            state.submitting = true;
            UpdateResult::action(UpdateAction::SaveUser {
                form: state.user_editor.to_form(),
            })
        }
        Screen::Settings => {
            state.submitting = true;
            UpdateResult::action(UpdateAction::SaveSettings {
                wire: state.color_settings.colors.to_wire(),
            })
        }
        _ => UpdateResult::none(),
    }
}

fn validate_content(state: &mut AppState) -> UpdateResult {
    let editor = &mut state.content_editor;
    editor.errors = editor.validate();
    if !editor.errors.is_empty() {
        debug!("Save blocked by {} invalid field(s)", editor.errors.len());
        state.error(FIX_FIELDS);
        return UpdateResult::none();
    }
    let form = Box::new(editor.to_form());
    match editor.url_to_check() {
        Some(url) => {
            let my_id = editor.id.clone();
            state.pending_url_check = Some(PendingUrlCheck {
                url: url.clone(),
                form,
            });
            state.info("Checking URL...");
            UpdateResult::action(UpdateAction::CheckUrl { url, my_id })
        }
        None => submit_content(state, form),
    }
}

fn submit_content(state: &mut AppState, form: Box<ContentForm>) -> UpdateResult {
    state.submitting = true;
    state.info("Saving...");
    UpdateResult::action(UpdateAction::SaveContent { form })
}

pub fn url_checked(state: &mut AppState, url: String, in_use: bool) -> UpdateResult {
    let pending = match state.pending_url_check.take() {
        Some(pending) if pending.url == url => pending,
        other => {
            state.pending_url_check = other;
            debug!("Ignoring URL check for {}", url);
            return UpdateResult::none();
        }
    };
    if in_use {
        state
            .content_editor
            .errors
            .insert(ContentField::Url, URL_IN_USE.to_string());
        state.error(FIX_FIELDS);
        return UpdateResult::none();
    }
    submit_content(state, pending.form)
}

pub fn request_delete(state: &mut AppState) -> UpdateResult {
    let editor = &state.content_editor;
    if state.submitting || state.screen != Screen::ContentEditor || editor.is_new() {
        return UpdateResult::none();
    }
    let dialog = ConfirmDialogState::delete_confirmation(&noun(editor.mode));
    state.show_dialog(dialog);
    UpdateResult::none()
}

pub fn confirm_delete(state: &mut AppState) -> UpdateResult {
    state.close_dialog();
    let editor = &state.content_editor;
    if state.screen != Screen::ContentEditor || editor.is_new() {
        return UpdateResult::none();
    }
    let action = UpdateAction::DeleteContent {
        id: editor.id.clone(),
        mode: editor.mode,
    };
    state.submitting = true;
    UpdateResult::action(action)
}

/// Preview is offered for plain content records only
pub fn request_preview(state: &mut AppState) -> UpdateResult {
    if state.screen != Screen::ContentEditor
        || state.content_editor.mode != ContentMode::Content
        || state.content_editor.loading
    {
        return UpdateResult::none();
    }
    state.info("Rendering preview...");
    UpdateResult::action(UpdateAction::Preview {
        form: Box::new(state.content_editor.to_form()),
        browser: state.settings.preview.browser.clone(),
    })
}

pub fn submit_succeeded(state: &mut AppState, kind: SubmitKind) -> UpdateResult {
    state.submitting = false;
    let (text, next) = match kind {
        SubmitKind::SaveContent => (
            "Saved",
            Message::OpenContentList {
                mode: state.content_editor.mode,
            },
        ),
        SubmitKind::DeleteContent => (
            "Deleted",
            Message::OpenContentList {
                mode: state.content_editor.mode,
            },
        ),
        SubmitKind::SaveUser => ("User saved", Message::OpenUserList),
        SubmitKind::SaveSettings => (
            "Settings saved",
            Message::OpenContentList {
                mode: state.list_mode(),
            },
        ),
    };
    info!("{} succeeded", kind.label());
    state.success(text);
    UpdateResult::message(next)
}

pub fn submit_failed(state: &mut AppState, kind: SubmitKind, error: String) -> UpdateResult {
    state.submitting = false;
    state.error(format!("{} failed: {}", kind.label(), error));
    UpdateResult::none()
}
