//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen and UI mode
//! - `session`: Auth check, login and logout
//! - `navigation`: Screen transitions and the fetches they trigger
//! - `lists`: Content/user list paging, sorting and selection
//! - `editing`: Field input, element list and color rows
//! - `submit`: Save/delete/preview flows and their completions

pub(crate) mod editing;
pub(crate) mod keys;
pub(crate) mod lists;
pub(crate) mod navigation;
pub(crate) mod session;
pub(crate) mod submit;
pub(crate) mod update;


use skyadmin_api::{ContentForm, UserForm};
use skyadmin_core::{ContentMode, ListQuery, UserListQuery};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Ask `/auth` whether the cookie session is valid
    CheckAuth,

    /// Read the header attributes (`name`, `admin`) of the session
    LoadSession,

    /// Post the login form
    Login { name: String, password: String },

    /// End the server session and drop the cookie jar
    Logout,

    FetchContentList { query: ListQuery },

    FetchUserList { query: UserListQuery },

    /// Load everything the content editor needs
    ///
    /// With an id: the record itself. Without: the select options for the
    /// mode. Templates additionally fetch the element catalog.
    LoadContentEditor {
        mode: ContentMode,
        id: Option<String>,
    },

    FetchUser { id: String },

    FetchSettings,

    /// `/urlmatches` for the record being saved
    CheckUrl { url: String, my_id: String },

    SaveContent { form: Box<ContentForm> },

    DeleteContent { id: String, mode: ContentMode },

    SaveUser { form: UserForm },

    /// Post the serialized color list
    SaveSettings { wire: String },

    /// Render the form server-side and open the result in a browser
    ///
    /// If `browser` is empty, the platform default opener is used.
    Preview {
        form: Box<ContentForm>,
        browser: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
