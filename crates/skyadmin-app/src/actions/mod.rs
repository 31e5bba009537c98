//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs as a spawned task that talks to the CMS and reports back
//! with a [`Message`]. Reads never fail from the UI's point of view: a failed
//! fetch is logged and replaced by an empty value, except that an ended
//! session is reported as [`Message::SessionExpired`].

use std::sync::Arc;

use skyadmin_api::CmsApi;
use skyadmin_core::prelude::*;
use skyadmin_core::{ContentMode, FLAG_YES};
use tokio::sync::mpsc;

use crate::message::{Message, SubmitKind};
use crate::UpdateAction;

pub(crate) mod preview;


/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: CmsApi + Sync + 'static,
{
    match action {
        UpdateAction::CheckAuth => {
            tokio::spawn(async move {
                let authenticated = check_auth(api.as_ref()).await;
                send(&msg_tx, Message::AuthChecked { authenticated }).await;
            });
        }

        UpdateAction::LoadSession => {
            tokio::spawn(async move {
                let user_name = session_attribute(api.as_ref(), "name").await;
                let admin = session_attribute(api.as_ref(), "admin").await;
                send(
                    &msg_tx,
                    Message::SessionLoaded {
                        user_name,
                        is_admin: admin == FLAG_YES,
                    },
                )
                .await;
            });
        }

        UpdateAction::Login { name, password } => {
            tokio::spawn(async move {
                let msg = match api.login(&name, &password).await {
                    Ok(()) => {
                        info!("Login accepted for {}", name);
                        Message::AuthChecked {
                            authenticated: check_auth(api.as_ref()).await,
                        }
                    }
                    Err(Error::LoginRejected { reason }) => {
                        warn!("Login rejected: {}", reason);
                        Message::LoginFailed { reason }
                    }
                    Err(e) => {
                        error!("Login request failed: {}", e);
                        Message::LoginFailed {
                            reason: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::Logout => {
            tokio::spawn(async move {
                if let Err(e) = api.logout().await {
                    warn!("Logout request failed: {}", e);
                }
                send(&msg_tx, Message::LoggedOut).await;
            });
        }

        UpdateAction::FetchContentList { query } => {
            tokio::spawn(async move {
                let result = api.get_list(&query).await;
                if let Some(page) = or_default(result, "content list", &msg_tx).await {
                    send(&msg_tx, Message::ContentListLoaded { query, page }).await;
                }
            });
        }

        UpdateAction::FetchUserList { query } => {
            tokio::spawn(async move {
                let result = api.get_user_list(&query).await;
                if let Some(page) = or_default(result, "user list", &msg_tx).await {
                    send(&msg_tx, Message::UserListLoaded { query, page }).await;
                }
            });
        }

        UpdateAction::LoadContentEditor { mode, id } => {
            spawn_load_content_editor(mode, id, msg_tx, api);
        }

        UpdateAction::FetchUser { id } => {
            tokio::spawn(async move {
                let result = api.get_user(&id).await;
                if let Some(user) = or_default(result, "user", &msg_tx).await {
                    send(&msg_tx, Message::UserLoaded { id, user }).await;
                }
            });
        }

        UpdateAction::FetchSettings => {
            tokio::spawn(async move {
                let result = api.settings().await;
                if let Some(data) = or_default(result, "settings", &msg_tx).await {
                    send(&msg_tx, Message::SettingsLoaded { data }).await;
                }
            });
        }

        UpdateAction::CheckUrl { url, my_id } => {
            tokio::spawn(async move {
                let result = api.url_matches(&url, &my_id).await;
                // a failed check does not block the save
                if let Some(in_use) = or_default(result, "URL check", &msg_tx).await {
                    send(&msg_tx, Message::UrlChecked { url, in_use }).await;
                }
            });
        }

        UpdateAction::SaveContent { form } => {
            tokio::spawn(async move {
                let result = api.save_content(&form).await;
                report_submit(SubmitKind::SaveContent, result, &msg_tx).await;
            });
        }

        UpdateAction::DeleteContent { id, mode } => {
            tokio::spawn(async move {
                let result = api.delete_content(&id, mode).await;
                report_submit(SubmitKind::DeleteContent, result, &msg_tx).await;
            });
        }

        UpdateAction::SaveUser { form } => {
            tokio::spawn(async move {
                let result = api.save_user(&form).await;
                report_submit(SubmitKind::SaveUser, result, &msg_tx).await;
            });
        }

        UpdateAction::SaveSettings { wire } => {
            tokio::spawn(async move {
                let result = api.save_settings(&wire).await;
                report_submit(SubmitKind::SaveSettings, result, &msg_tx).await;
            });
        }

        UpdateAction::Preview { form, browser } => {
            tokio::spawn(async move {
                let msg = match api.preview(&form).await {
                    Ok(html) => match preview::open_preview(&html, &browser) {
                        Ok(path) => Message::PreviewOpened { path },
                        Err(e) => {
                            error!("Failed to open preview: {}", e);
                            Message::PreviewFailed {
                                error: e.to_string(),
                            }
                        }
                    },
                    Err(Error::Unauthorized) => Message::SessionExpired,
                    Err(e) => {
                        warn!("Preview request failed: {}", e);
                        Message::PreviewFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Fan out the fetches the content editor needs
///
/// Each response arrives as its own message, in whatever order the server
/// answers.
fn spawn_load_content_editor<A>(
    mode: ContentMode,
    id: Option<String>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) where
    A: CmsApi + Sync + 'static,
{
    if mode.is_composed() {
        let api = api.clone();
        let msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            let result = api.element_catalog().await;
            if let Some(catalog) = or_default(result, "element catalog", &msg_tx).await {
                send(&msg_tx, Message::ElementCatalogLoaded { catalog }).await;
            }
        });
    }

    match id {
        Some(id) => {
            tokio::spawn(async move {
                let result = api.get_content(mode, &id).await;
                if let Some(detail) = or_default(result, "record", &msg_tx).await {
                    let detail = Box::new(detail);
                    send(&msg_tx, Message::ContentLoaded { mode, id, detail }).await;
                }
            });
        }
        None if mode == ContentMode::Content => {
            tokio::spawn(async move {
                let result = api.template_options().await;
                if let Some(markup) = or_default(result, "template options", &msg_tx).await {
                    send(&msg_tx, Message::TemplateOptionsLoaded { markup }).await;
                }
            });
        }
        None if mode == ContentMode::Element => {
            tokio::spawn(async move {
                let result = api.color_options().await;
                if let Some(markup) = or_default(result, "color options", &msg_tx).await {
                    send(&msg_tx, Message::ColorOptionsLoaded { markup }).await;
                }
            });
        }
        None => {}
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed; dropping action result");
    }
}

/// `/auth`, treating a failed request as "not authenticated"
async fn check_auth<A: CmsApi + Sync>(api: &A) -> bool {
    match api.check_auth().await {
        Ok(authenticated) => authenticated,
        Err(e) => {
            warn!("Auth check failed: {}", e);
            false
        }
    }
}

async fn session_attribute<A: CmsApi + Sync>(api: &A, attribute: &str) -> String {
    api.session_attribute(attribute)
        .await
        .unwrap_or_else(|e| {
            warn!("Failed to read session attribute {}: {}", attribute, e);
            String::new()
        })
}

/// Unwrap a read, substituting the default on failure
///
/// Returns `None` when the session has ended; the caller then sends nothing
/// and the UI moves to the login screen instead.
async fn or_default<T: Default>(
    result: Result<T>,
    what: &str,
    msg_tx: &mpsc::Sender<Message>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(Error::Unauthorized) => {
            send(msg_tx, Message::SessionExpired).await;
            None
        }
        Err(e) => {
            warn!("Failed to load {}: {}", what, e);
            Some(T::default())
        }
    }
}

async fn report_submit(kind: SubmitKind, result: Result<()>, msg_tx: &mpsc::Sender<Message>) {
    let msg = match result {
        Ok(()) => Message::SubmitSucceeded { kind },
        Err(Error::Unauthorized) => Message::SessionExpired,
        Err(e) => {
            if e.is_recoverable() {
                warn!("{} failed: {}", kind.label(), e);
            } else {
                error!("{} failed: {}", kind.label(), e);
            }
            Message::SubmitFailed {
                kind,
                error: e.to_string(),
            }
        }
    };
    send(msg_tx, msg).await;
}
