//! Custom widget components

mod confirm_dialog;
mod content_editor;
mod content_list;
mod element_select;
pub mod form_field;
mod header;
mod login;
pub mod modal_overlay;
mod paging;
mod settings_panel;
mod status_bar;
mod user_editor;
mod user_list;

pub use confirm_dialog::ConfirmDialog;
pub use content_editor::{hex_color, ContentEditor};
pub use content_list::ContentList;
pub use element_select::ElementSelect;
pub use header::MainHeader;
pub use login::LoginForm;
pub use settings_panel::SettingsPanel;
pub use status_bar::{KeyHints, StatusBar};
pub use user_editor::UserEditor;
pub use user_list::UserList;
