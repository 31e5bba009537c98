//! Application state (Model in TEA pattern)

use skyadmin_api::ContentForm;
use skyadmin_core::{
    ColorSettingList, ContentMode, ContentRecord, ListQuery, UserListQuery, UserRecord,
};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::editor::{ContentEditorState, UserEditorState};
use crate::form::TextField;
use crate::list_view::ListView;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    ContentList,
    ContentEditor,
    UserList,
    UserEditor,
    Settings,
}

impl Screen {
    /// Screens reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login)
    }

    pub fn is_editor(&self) -> bool {
        matches!(
            self,
            Screen::ContentEditor | Screen::UserEditor | Screen::Settings
        )
    }
}

/// Current UI mode/screen overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Normal,
    /// Confirmation dialog is shown
    ConfirmDialog,
    /// Element selection modal of the template editor
    ElementSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// One-line feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// What the server told us about the logged-in user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    /// `/auth` has answered at least once
    pub checked: bool,
    pub authenticated: bool,
    pub user_name: String,
    pub is_admin: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-screen state
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Name,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub name: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            name: TextField::default(),
            password: TextField::masked(""),
            focus: LoginField::Name,
            error: None,
            submitting: false,
        }
    }
}

impl LoginState {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Name => &mut self.name,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Name => LoginField::Password,
            LoginField::Password => LoginField::Name,
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentListState {
    pub query: ListQuery,
    pub view: ListView<ContentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListState {
    pub query: UserListQuery,
    pub view: ListView<UserRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsFocus {
    #[default]
    NameInput,
    CodeInput,
    Rows,
}

impl SettingsFocus {
    pub fn next(&self) -> Self {
        match self {
            SettingsFocus::NameInput => SettingsFocus::CodeInput,
            SettingsFocus::CodeInput => SettingsFocus::Rows,
            SettingsFocus::Rows => SettingsFocus::NameInput,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SettingsFocus::NameInput => SettingsFocus::Rows,
            SettingsFocus::CodeInput => SettingsFocus::NameInput,
            SettingsFocus::Rows => SettingsFocus::CodeInput,
        }
    }
}

/// Color settings screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub colors: ColorSettingList,
    pub new_name: TextField,
    pub new_code: TextField,
    pub focus: SettingsFocus,
    pub row_cursor: usize,
    pub loading: bool,
}

impl SettingsState {
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SettingsFocus::NameInput => Some(&mut self.new_name),
            SettingsFocus::CodeInput => Some(&mut self.new_code),
            SettingsFocus::Rows => None,
        }
    }

    /// Append the typed row; inputs are cleared only when it was accepted
    pub fn add_row(&mut self) -> bool {
        let added = self
            .colors
            .add(self.new_name.as_str(), self.new_code.as_str());
        if added {
            self.new_name.clear();
            self.new_code.clear();
        }
        added
    }

    /// Delete the highlighted row
    pub fn delete_row(&mut self) -> bool {
        let Some(number) = self.colors.rows().get(self.row_cursor).map(|r| r.number) else {
            return false;
        };
        let deleted = self.colors.delete(number);
        if deleted && self.row_cursor >= self.colors.len() {
            self.row_cursor = self.colors.len().saturating_sub(1);
        }
        deleted
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// A content save held back until the server answers the URL check
///
/// `form` is the snapshot that passed validation; edits made while the
/// check is in flight are not part of this save.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUrlCheck {
    pub url: String,
    pub form: Box<ContentForm>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub ui_mode: UiMode,

    /// Loaded configuration
    pub settings: Settings,

    pub session: SessionInfo,
    pub status: Option<StatusMessage>,

    /// Confirm dialog shown in `UiMode::ConfirmDialog`
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    pub login: LoginState,
    pub content_list: ContentListState,
    pub user_list: UserListState,
    pub content_editor: ContentEditorState,
    pub user_editor: UserEditorState,
    pub color_settings: SettingsState,

    /// Validated save waiting on its URL uniqueness check
    pub pending_url_check: Option<PendingUrlCheck>,
    /// A mutation request is in flight
    pub submitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let start_mode = settings.behavior.start_mode;
        Self {
            phase: AppPhase::Running,
            screen: Screen::Login,
            ui_mode: UiMode::Normal,
            settings,
            session: SessionInfo::default(),
            status: None,
            confirm_dialog_state: None,
            login: LoginState::default(),
            content_list: ContentListState {
                query: ListQuery::new(start_mode),
                view: ListView::default(),
            },
            user_list: UserListState::default(),
            content_editor: ContentEditorState::new(start_mode),
            user_editor: UserEditorState::default(),
            color_settings: SettingsState::default(),
            pending_url_check: None,
            submitting: false,
        }
    }

    /// Mode of the content list the user last looked at
    pub fn list_mode(&self) -> ContentMode {
        self.content_list.query.mode
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit && self.screen.is_editor() {
            self.show_dialog(ConfirmDialogState::quit_confirmation());
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Dialogs and status
    // ─────────────────────────────────────────────────────────

    pub fn show_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_dialog(&mut self) {
        self.confirm_dialog_state = None;
        if self.ui_mode == UiMode::ConfirmDialog {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Info);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Error);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Switch screens; gated screens fall back to Login without a session
    pub fn navigate(&mut self, screen: Screen) -> Screen {
        self.screen = if screen.is_public() || self.is_authenticated() {
            screen
        } else {
            Screen::Login
        };
        self.ui_mode = UiMode::Normal;
        self.confirm_dialog_state = None;
        self.pending_url_check = None;
        self.screen
    }

    /// Forget everything tied to the server session
    pub fn end_session(&mut self) {
        self.session = SessionInfo {
            checked: true,
            ..SessionInfo::default()
        };
        self.login = LoginState::default();
        self.submitting = false;
        self.navigate(Screen::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_login_with_configured_mode() {
        let mut settings = Settings::default();
        settings.behavior.start_mode = ContentMode::Element;
        let state = AppState::with_settings(settings);
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.list_mode(), ContentMode::Element);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_gated_navigation_requires_session() {
        let mut state = AppState::new();
        assert_eq!(state.navigate(Screen::Settings), Screen::Login);
        state.session.authenticated = true;
        assert_eq!(state.navigate(Screen::Settings), Screen::Settings);
    }

    #[test]
    fn test_quit_from_list_is_immediate() {
        let mut state = AppState::new();
        state.session.authenticated = true;
        state.navigate(Screen::ContentList);
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_quit_from_editor_asks_first() {
        let mut state = AppState::new();
        state.session.authenticated = true;
        state.navigate(Screen::ContentEditor);
        state.request_quit();
        assert!(!state.should_quit());
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
        state.close_dialog();
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_end_session_returns_to_login() {
        let mut state = AppState::new();
        state.session = SessionInfo {
            checked: true,
            authenticated: true,
            user_name: "admin".into(),
            is_admin: true,
        };
        state.navigate(Screen::UserList);
        state.end_session();
        assert_eq!(state.screen, Screen::Login);
        assert!(state.session.checked);
        assert!(state.session.user_name.is_empty());
    }

    #[test]
    fn test_settings_add_and_delete_rows() {
        let mut screen = SettingsState::default();
        screen.new_name.set("header");
        assert!(!screen.add_row());
        assert_eq!(screen.new_name.as_str(), "header");
        screen.new_code.set("#000000");
        assert!(screen.add_row());
        assert!(screen.new_name.as_str().is_empty());

        screen.row_cursor = 0;
        assert!(screen.delete_row());
        assert!(screen.colors.is_empty());
        assert!(!screen.delete_row());
    }

    #[test]
    fn test_login_focus_toggle() {
        let mut login = LoginState::default();
        login.focused_field_mut().push('a');
        login.toggle_focus();
        login.focused_field_mut().push('b');
        assert_eq!(login.name.as_str(), "a");
        assert_eq!(login.password.as_str(), "b");
        assert!(login.password.masked);
    }
}
