//! One-shot notifications carried across a redirect.
//!
//! A mutation handler redirects back to the list view and leaves a `flash`
//! cookie behind; the next list view reports it once and clears the cookie.
//! Cookie value: `<level>:<percent-encoded message>`.

use axum::{
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap,
    },
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
            FlashLevel::Warning => "warning",
            FlashLevel::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashLevel::Success),
            "error" => Some(FlashLevel::Error),
            "warning" => Some(FlashLevel::Warning),
            "info" => Some(FlashLevel::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    /// `Set-Cookie` value carrying this notification
    pub fn to_cookie(&self) -> String {
        format!(
            "{}={}:{}; {}",
            FLASH_COOKIE,
            self.level.as_str(),
            urlencoding::encode(&self.message),
            COOKIE_ATTRIBUTES
        )
    }

    /// Pending notification sent back by the client, if any
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().strip_prefix("flash="))
            .find_map(Self::decode)
    }

    fn decode(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        let level = FlashLevel::parse(level)?;
        let message = urlencoding::decode(message).ok()?;
        Some(Self::new(level, message.into_owned()))
    }
}

/// `Set-Cookie` value that discards a consumed notification
pub fn clear_cookie() -> String {
    format!("{}=; Max-Age=0; {}", FLASH_COOKIE, COOKIE_ATTRIBUTES)
}

/// 303 back to the list view, leaving `flash` for it to show
pub fn redirect_with_flash(flash: Flash) -> Response {
    (AppendHeaders([(SET_COOKIE, flash.to_cookie())]), Redirect::to("/")).into_response()
}
