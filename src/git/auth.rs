// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTPS credentials for remote operations.
//!
//! The token never reaches `.git/config` or the git argument list: a single
//! invocation receives `http.extraHeader` through `GIT_CONFIG_COUNT`,
//! `GIT_CONFIG_KEY_0` and `GIT_CONFIG_VALUE_0`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Personal access token.
pub struct Token(SecretBox<String>);

impl Token {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::new(token.into())))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    /// Borrow the raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for Token {
    fn clone(&self) -> Self {
        Self::new(self.0.expose_secret().clone())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[hidden]")
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Username and token pair used for HTTP basic authentication.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    token: Token,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, token: Token) -> Self {
        Self {
            username: username.into(),
            token,
        }
    }

    /// Build credentials only when both parts are present.
    #[must_use]
    pub fn from_parts(username: Option<&str>, token: Option<&Token>) -> Option<Self> {
        let username = username.map(str::trim).filter(|u| !u.is_empty())?;
        let token = token.filter(|t| !t.is_empty())?;
        Some(Self::new(username, token.clone()))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization: Basic <base64(user:token)>` value for [`HEADER_KEY`].
    pub(crate) fn header_value(&self) -> String {
        let pair = format!("{}:{}", self.username, self.token.expose());
        format!("Authorization: Basic {}", STANDARD.encode(pair))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &self.token)
            .finish()
    }
}

/// Git config key carrying the credentials header.
pub(crate) const HEADER_KEY: &str = "http.extraHeader";
