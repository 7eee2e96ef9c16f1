//! One-shot notices carried across a redirect.
//!
//! A form handler that redirects appends a [`Notice`] to the `coop_flash`
//! cookie. The next view that renders reads the pending notices, includes
//! them in its [`Page`] body, and expires the cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Json;
use coop_core::notice::Notice;
use serde::Serialize;

use crate::auth::cookie::{expired_cookie, flash_cookie, read_cookie, FLASH_COOKIE};
use crate::response::Page;

/// Separator between notice keys in the cookie value.
const SEPARATOR: char = '.';

/// Oldest notices are dropped past this many.
const MAX_PENDING: usize = 8;

/// Notices pending for this browser, read from the flash cookie.
///
/// Unknown keys are ignored, so a stale or tampered cookie degrades to no
/// notices rather than an error.
#[derive(Debug, Default)]
pub struct Flash {
    pending: Vec<Notice>,
}

impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pending = read_cookie(&parts.headers, FLASH_COOKIE)
            .map(decode)
            .unwrap_or_default();
        Ok(Flash { pending })
    }
}

impl Flash {
    /// Queue `notice` and send a 303 to `to`.
    pub fn redirect(mut self, to: &str, notice: Notice) -> Response {
        self.pending.push(notice);
        if self.pending.len() > MAX_PENDING {
            let excess = self.pending.len() - MAX_PENDING;
            self.pending.drain(..excess);
        }
        (
            AppendHeaders([(SET_COOKIE, flash_cookie(&encode(&self.pending)))]),
            Redirect::to(to),
        )
            .into_response()
    }

    /// Render a view with the pending notices and clear them.
    pub fn page<T: Serialize>(self, data: T) -> Response {
        let body = Json(Page {
            data,
            notices: self.pending.iter().map(|n| n.render()).collect(),
        });
        if self.pending.is_empty() {
            body.into_response()
        } else {
            (
                AppendHeaders([(SET_COOKIE, expired_cookie(FLASH_COOKIE))]),
                body,
            )
                .into_response()
        }
    }
}

fn decode(raw: &str) -> Vec<Notice> {
    raw.split(SEPARATOR).filter_map(Notice::from_key).collect()
}

fn encode(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| n.key())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
