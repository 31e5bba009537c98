//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use skyadmin_core::{
    ContentDetail, ContentMode, ContentRecord, ElementCatalog, ListPage, ListQuery, SettingData,
    UserListQuery, UserRecord,
};

use crate::input_key::InputKey;

/// Which submission a completion message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    SaveContent,
    DeleteContent,
    SaveUser,
    SaveSettings,
}

impl SubmitKind {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitKind::SaveContent => "Save",
            SubmitKind::DeleteContent => "Delete",
            SubmitKind::SaveUser => "Save user",
            SubmitKind::SaveSettings => "Save settings",
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates
    Tick,

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Request to quit (may show confirmation dialog)
    RequestQuit,
    /// Quit without confirmation
    Quit,
    /// Confirm quit from the dialog
    ConfirmQuit,
    /// Dismiss the confirm dialog
    CancelDialog,

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────
    /// Result of `/auth`
    AuthChecked { authenticated: bool },
    /// Header data after authentication
    SessionLoaded { user_name: String, is_admin: bool },
    SubmitLogin,
    LoginFailed { reason: String },
    /// A request was answered as unauthenticated
    SessionExpired,
    Logout,
    LoggedOut,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    OpenContentList { mode: ContentMode },
    OpenUserList,
    OpenContentEditor {
        mode: ContentMode,
        /// `None` creates a new record
        id: Option<String>,
    },
    OpenUserEditor { id: Option<String> },
    OpenSettings,
    /// Leave an editor for the list it belongs to
    Back,

    // ─────────────────────────────────────────────────────────
    // List screens
    // ─────────────────────────────────────────────────────────
    ListSelectNext,
    ListSelectPrevious,
    ListSelectFirst,
    ListSelectLast,
    ListNextPage,
    ListPreviousPage,
    ListCycleSort,
    ListRefresh,
    /// Edit the highlighted record
    ListOpenSelected,
    ContentListLoaded {
        query: ListQuery,
        page: ListPage<ContentRecord>,
    },
    UserListLoaded {
        query: UserListQuery,
        page: ListPage<UserRecord>,
    },

    // ─────────────────────────────────────────────────────────
    // Editor data
    // ─────────────────────────────────────────────────────────
    ContentLoaded {
        mode: ContentMode,
        id: String,
        detail: Box<ContentDetail>,
    },
    TemplateOptionsLoaded { markup: String },
    ColorOptionsLoaded { markup: String },
    ElementCatalogLoaded { catalog: ElementCatalog },
    UserLoaded { id: String, user: UserRecord },
    SettingsLoaded { data: SettingData },

    // ─────────────────────────────────────────────────────────
    // Form editing (applies to the focused field of the active screen)
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormNewline,
    FormClear,
    /// Toggle a flag or step a select forward
    FormToggle,
    FormCycleBack,
    FocusNext,
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Element list
    // ─────────────────────────────────────────────────────────
    ElementCursorNext,
    ElementCursorPrevious,
    ElementMoveUp,
    ElementMoveDown,
    ElementDelete,
    /// Append a placeholder and open the selection modal
    ElementAdd,
    CatalogNext,
    CatalogPrevious,
    CatalogSelect,
    CatalogCancel,

    // ─────────────────────────────────────────────────────────
    // Settings screen
    // ─────────────────────────────────────────────────────────
    ColorAdd,
    ColorDelete,
    ColorRowNext,
    ColorRowPrevious,

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before saving the active editor
    RequestSave,
    ConfirmSave,
    RequestDelete,
    ConfirmDelete,
    RequestPreview,
    /// Result of `/urlmatches` for the pending save
    UrlChecked { url: String, in_use: bool },
    SubmitSucceeded { kind: SubmitKind },
    SubmitFailed { kind: SubmitKind, error: String },
    PreviewOpened { path: PathBuf },
    PreviewFailed { error: String },
}
