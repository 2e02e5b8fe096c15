//! One-shot banner messages
//!
//! A flash set by a redirecting or JSON handler travels to the next page
//! in a cookie. The page that renders it clears the cookie.

use axum::http::{header, HeaderMap, HeaderValue};

/// Cookie carrying a pending flash
pub const COOKIE_NAME: &str = "showbook_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Danger,
}

impl Level {
    /// CSS class suffix of the banner
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Danger => "danger",
        }
    }

    fn parse(value: &str) -> Option<Level> {
        match value {
            "success" => Some(Level::Success),
            "danger" => Some(Level::Danger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: Level::Danger,
            message: message.into(),
        }
    }

    /// Cookie value: form-urlencoded `level` and `message` pairs
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("level", self.level.as_str())
            .append_pair("message", &self.message)
            .finish()
    }

    pub fn decode(value: &str) -> Option<Flash> {
        let mut level = None;
        let mut message = None;
        for (key, val) in url::form_urlencoded::parse(value.as_bytes()) {
            match key.as_ref() {
                "level" => level = Level::parse(&val),
                "message" => message = Some(val.into_owned()),
                _ => {}
            }
        }
        Some(Flash {
            level: level?,
            message: message?,
        })
    }

    /// `Set-Cookie` value storing this flash for the next page
    pub fn set_cookie(&self) -> HeaderValue {
        cookie_header(&format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            self.encode()
        ))
    }
}

/// `Set-Cookie` value removing a delivered flash
pub fn clear_cookie() -> HeaderValue {
    cookie_header(&format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
        COOKIE_NAME
    ))
}

fn cookie_header(value: &str) -> HeaderValue {
    // Encoded values are always visible ASCII
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Flash carried in by the request's cookies, if any
pub fn from_headers(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| Flash::decode(value))
}
