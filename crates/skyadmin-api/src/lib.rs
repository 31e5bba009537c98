//! # skyadmin-api - Skygarden CMS HTTP Client
//!
//! Talks to the CMS back end under its `/webadmin` prefix. The session is a
//! server-side cookie kept in the client's cookie store; form submissions are
//! sent without following redirects so the `Location` header can be inspected.
//!
//! ## Public API
//!
//! - [`CmsApi`] - Async trait covering every endpoint the admin screens use
//! - [`HttpCmsClient`] - reqwest implementation of [`CmsApi`]
//! - [`ClientConfig`] - Base URL and timeout for [`HttpCmsClient`]
//! - [`ContentForm`], [`UserForm`] - Form bodies for the save endpoints
//! - [`login_error_from_location()`] - Extracts the rejection reason of a failed login

pub mod api;
pub mod client;
pub mod endpoints;
pub mod forms;
pub mod login;

pub use api::{CmsApi, LocalCmsApi};
pub use client::{ClientConfig, HttpCmsClient};
pub use forms::{ContentForm, DeleteForm, UserForm};
pub use login::login_error_from_location;
