//! Alert fragments for displaying success and error messages to users.
//!
//! Mutation endpoints return these fragments for htmx to swap into the fixed
//! alert container, instead of the application keeping any global
//! notification state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A dismissible alert message with an optional detail line.
pub struct Alert<'a> {
    kind: AlertKind,
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            details,
        }
    }

    /// Create a new error alert without details
    pub fn error_simple(message: &'a str) -> Self {
        Self::error(message, "")
    }

    /// Render the alert as markup.
    pub fn into_markup(self) -> Markup {
        let container_style = match self.kind {
            AlertKind::Success => {
                "p-4 mb-4 rounded-lg bg-green-50 text-green-800 \
                dark:bg-gray-800 dark:text-green-400"
            }
            AlertKind::Error => {
                "p-4 mb-4 rounded-lg bg-red-50 text-red-800 \
                dark:bg-gray-800 dark:text-red-400"
            }
        };

        html!(
            div
                class=(container_style)
                role="alert"
                onclick="this.parentElement.classList.add('hidden')"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p class="text-sm" { (self.details) }
                }
            }
        )
    }

    /// Render the alert as a response with the given status code.
    pub fn into_response(self, status_code: StatusCode) -> Response {
        (status_code, self.into_markup()).into_response()
    }
}
