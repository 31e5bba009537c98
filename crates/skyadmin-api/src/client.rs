//! reqwest implementation of [`CmsApi`]

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{header::LOCATION, redirect::Policy, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use skyadmin_core::prelude::*;
use skyadmin_core::{
    ContentDetail, ContentMode, ContentRecord, ElementCatalog, ListPage, ListQuery,
    SettingData, UserListQuery, UserRecord,
};
use url::Url;

use crate::api::CmsApi;
use crate::endpoints::{self, endpoint_url, parse_base_url};
use crate::forms::{ContentForm, DeleteForm, UserForm};
use crate::login::login_error_from_location;

/// Connection settings for [`HttpCmsClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root including the `/webadmin` prefix
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/webadmin".to_string(),
            timeout: None,
        }
    }
}

/// HTTP client holding the session cookie
///
/// Redirects are never followed: the CMS answers every form post with a
/// redirect, and an unauthenticated request is redirected to the login page.
#[derive(Debug)]
pub struct HttpCmsClient {
    base: Url,
    timeout: Option<Duration>,
    /// Replaced on logout to drop the cookie store
    http: RwLock<Client>,
}

impl HttpCmsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        let http = build_http(config.timeout)?;
        Ok(Self {
            base,
            timeout: config.timeout,
            http: RwLock::new(http),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn http(&self) -> Client {
        self.http
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Forget the session cookie
    pub fn reset_session(&self) -> Result<()> {
        let fresh = build_http(self.timeout)?;
        *self
            .http
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = fresh;
        debug!("Session cookie store reset");
        Ok(())
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        endpoint_url(&self.base, path, query)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.url(path, query)?;
        trace!("GET {}", url);
        let response = self
            .http()
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;
        check_status(response, &url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(path, query).await?;
        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| {
            Error::invalid_response(format!("{path}: {e}"))
        })
    }

    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        self.get(path, query)
            .await?
            .text()
            .await
            .map_err(transport)
    }

    async fn get_bool(&self, path: &str, query: &[(&str, String)]) -> Result<bool> {
        let text = self.get_text(path, query).await?;
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(Error::invalid_response(format!(
                "{path}: expected a boolean, got {other:?}"
            ))),
        }
    }

    /// Post a form; success is a 2xx or a redirect
    async fn post_form<F: Serialize + ?Sized>(&self, path: &str, form: &F) -> Result<Response> {
        let url = self.url(path, &[])?;
        debug!("POST {}", url);
        let response = self
            .http()
            .post(url.clone())
            .form(form)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(response)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Unauthorized)
        } else {
            Err(Error::http_status(status.as_u16(), url.as_str()))
        }
    }
}

fn build_http(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .cookie_store(true)
        .redirect(Policy::none());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))
}

fn transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::http(format!("request timed out: {err}"))
    } else {
        Error::http(err.to_string())
    }
}

fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Reads must answer 2xx; a redirect means the session is gone
fn check_status(response: Response, url: &Url) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.is_redirection() || status == StatusCode::UNAUTHORIZED {
        warn!(
            "{} redirected to {:?}, treating as logged out",
            url,
            location(&response)
        );
        return Err(Error::Unauthorized);
    }
    Err(Error::http_status(status.as_u16(), url.as_str()))
}

impl CmsApi for HttpCmsClient {
    async fn check_auth(&self) -> Result<bool> {
        match self.get_bool(endpoints::AUTH, &[]).await {
            Err(Error::Unauthorized) => Ok(false),
            other => other,
        }
    }

    async fn session_attribute(&self, attribute: &str) -> Result<String> {
        let text = self
            .get_text(endpoints::GET_SESSION, &[("attribute", attribute.to_string())])
            .await?;
        Ok(text.trim().to_string())
    }

    async fn get_list(&self, query: &ListQuery) -> Result<ListPage<ContentRecord>> {
        self.get_json(endpoints::GET_LIST, &query.query_pairs()).await
    }

    async fn get_user_list(&self, query: &UserListQuery) -> Result<ListPage<UserRecord>> {
        self.get_json(endpoints::GET_LIST_USER, &query.query_pairs())
            .await
    }

    async fn get_content(&self, mode: ContentMode, id: &str) -> Result<ContentDetail> {
        self.get_json(
            endpoints::GET_CONTENT,
            &[
                ("mode", mode.as_query().to_string()),
                ("id", id.to_string()),
            ],
        )
        .await
    }

    async fn get_user(&self, id: &str) -> Result<UserRecord> {
        self.get_json(endpoints::GET_USER, &[("id", id.to_string())])
            .await
    }

    async fn template_options(&self) -> Result<String> {
        self.get_text(endpoints::GET_TEMPLATE, &[]).await
    }

    async fn color_options(&self) -> Result<String> {
        self.get_text(endpoints::GET_ELEMENT, &[]).await
    }

    async fn element_catalog(&self) -> Result<ElementCatalog> {
        self.get_json(endpoints::GET_ELEMENT_ITEM, &[]).await
    }

    async fn settings(&self) -> Result<SettingData> {
        self.get_json(endpoints::GET_SETTING, &[]).await
    }

    async fn url_matches(&self, url: &str, my_id: &str) -> Result<bool> {
        self.get_bool(
            endpoints::URL_MATCHES,
            &[("url", url.to_string()), ("myId", my_id.to_string())],
        )
        .await
    }

    async fn save_content(&self, form: &ContentForm) -> Result<()> {
        self.post_form(endpoints::UPDATE_POST, form).await?;
        info!("Saved {} record {:?}", form.mode, form.id);
        Ok(())
    }

    async fn delete_content(&self, id: &str, mode: ContentMode) -> Result<()> {
        self.post_form(endpoints::DELETE_POST, &DeleteForm { id, mode })
            .await?;
        info!("Deleted {} record {}", mode, id);
        Ok(())
    }

    async fn save_user(&self, form: &UserForm) -> Result<()> {
        self.post_form(endpoints::USER_POST, form).await?;
        info!("Saved user {:?}", form.name);
        Ok(())
    }

    async fn save_settings(&self, color_wire: &str) -> Result<()> {
        self.post_form(
            endpoints::SETTING_POST,
            &[(endpoints::COLOR_SETTING_FIELD, color_wire)],
        )
        .await?;
        info!("Saved color settings");
        Ok(())
    }

    async fn login(&self, name: &str, password: &str) -> Result<()> {
        let response = self
            .post_form(
                endpoints::LOGIN_POST,
                &[("name", name), ("password", password)],
            )
            .await?;
        if let Some(reason) = location(&response)
            .as_deref()
            .and_then(login_error_from_location)
        {
            info!("Login rejected for {:?}", name);
            return Err(Error::login_rejected(reason));
        }
        info!("Logged in as {:?}", name);
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        let result = self.get_text(endpoints::LOGOUT, &[]).await;
        self.reset_session()?;
        match result {
            // the server answers with a redirect to its login page
            Ok(_) | Err(Error::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn preview(&self, form: &ContentForm) -> Result<String> {
        self.post_form(endpoints::PREVIEW, form)
            .await?
            .text()
            .await
            .map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "::nope".into(),
            timeout: None,
        };
        let err = HttpCmsClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_default_config_points_at_webadmin() {
        let client = HttpCmsClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url().path(), "/webadmin");
    }

    #[test]
    fn test_reset_session_keeps_base() {
        let client = HttpCmsClient::new(&ClientConfig::default()).unwrap();
        client.reset_session().unwrap();
        assert_eq!(client.base_url().host_str(), Some("localhost"));
    }
}
