//! The CMS operations the admin screens depend on
//!
//! The application layer is generic over this trait so actions can be tested
//! against an in-memory implementation.

use skyadmin_core::prelude::*;
use skyadmin_core::{
    ContentDetail, ContentMode, ContentRecord, ElementCatalog, ListPage, ListQuery,
    SettingData, UserListQuery, UserRecord,
};

use crate::forms::{ContentForm, UserForm};

/// Remote CMS operations
///
/// Reads return the decoded payload; mutations return `Ok(())` once the server
/// accepted the form (a 2xx or a redirect).
#[trait_variant::make(CmsApi: Send)]
pub trait LocalCmsApi {
    /// `GET /auth`
    async fn check_auth(&self) -> Result<bool>;

    /// `GET /get-session?attribute=` (`name`, `admin`)
    async fn session_attribute(&self, attribute: &str) -> Result<String>;

    /// `GET /getlist`
    async fn get_list(&self, query: &ListQuery) -> Result<ListPage<ContentRecord>>;

    /// `GET /getlist-user`
    async fn get_user_list(&self, query: &UserListQuery) -> Result<ListPage<UserRecord>>;

    /// `GET /getcontent`
    async fn get_content(&self, mode: ContentMode, id: &str) -> Result<ContentDetail>;

    /// `GET /getuser`
    async fn get_user(&self, id: &str) -> Result<UserRecord>;

    /// `GET /gettemplate`: `<option>` markup of all templates
    async fn template_options(&self) -> Result<String>;

    /// `GET /getelement`: `<option>` markup of the element colors
    async fn color_options(&self) -> Result<String>;

    /// `GET /getElementItem`
    async fn element_catalog(&self) -> Result<ElementCatalog>;

    /// `GET /get-setting`
    async fn settings(&self) -> Result<SettingData>;

    /// `GET /urlmatches`: whether another record already uses `url`
    async fn url_matches(&self, url: &str, my_id: &str) -> Result<bool>;

    /// `POST /update_post`
    async fn save_content(&self, form: &ContentForm) -> Result<()>;

    /// `POST /delete_post`
    async fn delete_content(&self, id: &str, mode: ContentMode) -> Result<()>;

    /// `POST /user_post`
    async fn save_user(&self, form: &UserForm) -> Result<()>;

    /// `POST /setting_post` with the serialized color palette
    async fn save_settings(&self, color_wire: &str) -> Result<()>;

    /// `POST /login_post`; a rejected login is [`Error::LoginRejected`]
    async fn login(&self, name: &str, password: &str) -> Result<()>;

    /// `GET /logout` and drop the session cookie
    async fn logout(&self) -> Result<()>;

    /// `POST /preview`: rendered HTML of an unsaved form
    async fn preview(&self, form: &ContentForm) -> Result<String>;
}
