//! # skyadmin-core - Core Domain Types
//!
//! Foundation crate for Skygarden Admin. Provides the CMS record types, the
//! client-owned editors (element composition list, color settings), field
//! validation, server markup helpers, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ContentMode`] - Record type selector (content, template, element, ...)
//! - [`ContentRecord`] - One row of a content list
//! - [`ContentDetail`] - Single record as returned for the editor
//! - [`UserRecord`] - User account
//! - [`ListPage`] - A page of records plus server-rendered sort/pager markup
//!
//! ### Editors
//! - [`ElementList`] - Ordered template composition with a pinned content sentinel
//! - [`ColorSettingList`] - Numbered name/color rows for the settings screen
//!
//! ### Validation (`validation`)
//! - [`is_valid_datetime()`] - Strict `YYYY-MM-DD HH:mm` check with calendar validation
//! - [`validate_url()`] - Path segment syntax check for record URLs
//!
//! ### Markup (`markup`)
//! - [`parse_options()`] - `<option>` fragments to [`SelectOption`]s
//! - [`parse_pager()`] - Pager fragments to [`PagerLink`]s
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use skyadmin_core::prelude::*;
//! ```

pub mod color_setting;
pub mod element_list;
pub mod error;
pub mod logging;
pub mod markup;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all Skygarden Admin crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color_setting::{ColorElement, ColorRow, ColorSettingList, SettingData};
pub use element_list::{ElementList, ElementRef, CONTENT_ID};
pub use error::{Error, Result, ResultExt};
pub use markup::{parse_options, parse_pager, strip_tags, PagerLink, SelectOption};
pub use types::{
    ContentDetail, ContentMode, ContentRecord, EleResult, ElementCatalog, ListPage, ListQuery,
    UserListQuery, UserRecord, FLAG_NO, FLAG_YES,
};
pub use validation::{
    is_valid_datetime, is_valid_email, validate_url, UrlError, DATETIME_FORMAT,
};
