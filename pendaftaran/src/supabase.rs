//! Thin client for the hosted Supabase table that stores submissions.
//!
//! The table schema, constraints, and indexes live entirely on the remote
//! side; this module only knows how to POST one row and how to turn a
//! rejection body into something a parent can read.

use serde::Deserialize;
use thiserror::Error;

use crate::model::Registration;

/// Shown when the service gives us nothing better.
pub const GENERIC_FAILURE: &str = "Terjadi kesalahan. Silakan coba lagi.";

#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Transport never got an answer out of the service.
    #[error("request to Supabase failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered and said no.
    #[error("insert rejected by Supabase (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl SupabaseError {
    /// The one user-visible string: the service's message when it gave one,
    /// else the generic fallback. All causes collapse into this.
    pub fn user_message(&self) -> String {
        match self {
            SupabaseError::Http(_) => GENERIC_FAILURE.to_owned(),
            SupabaseError::Rejected { message, .. } if message.is_empty() => {
                GENERIC_FAILURE.to_owned()
            }
            SupabaseError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// The one operation the landing page needs from the outside world.
// Single-threaded wasm consumer, no Send bound wanted.
#[allow(async_fn_in_trait)]
pub trait PendaftaranStore {
    async fn insert(&self, row: &Registration) -> Result<(), SupabaseError>;
}

/// PostgREST client scoped to the `pendaftaran` table.
#[derive(Debug, Clone)]
pub struct Supabase {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl Supabase {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Credentials are baked in at build time, the CSR analogue of public
    /// env vars. Missing values still build; the insert then fails like any
    /// other rejection.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("SUPABASE_URL").unwrap_or_default(),
            option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
        )
    }
}

impl PendaftaranStore for Supabase {
    async fn insert(&self, row: &Registration) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/pendaftaran", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=minimal")
            // PostgREST inserts take an array of rows.
            .json(&[row])
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(SupabaseError::Rejected {
            status,
            message: rejection_message(&body),
        })
    }
}

/// PostgREST error bodies carry `message` (plus `code`/`details`/`hint`,
/// which we drop). Empty when the body is missing or not that shape.
fn rejection_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_postgrest_message() {
        let body = r#"{"code":"23502","details":null,"hint":null,"message":"null value in column \"nama_siswa\""}"#;
        assert_eq!(
            rejection_message(body),
            "null value in column \"nama_siswa\""
        );
    }

    #[test]
    fn garbage_bodies_yield_no_message() {
        assert_eq!(rejection_message(""), "");
        assert_eq!(rejection_message("<html>502</html>"), "");
        assert_eq!(rejection_message(r#"{"code":"PGRST301"}"#), "");
    }

    #[test]
    fn empty_message_falls_back_to_generic_string() {
        let err = SupabaseError::Rejected {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        let err = SupabaseError::Rejected {
            status: 400,
            message: "duplicate key value".to_owned(),
        };
        assert_eq!(err.user_message(), "duplicate key value");
    }
}
