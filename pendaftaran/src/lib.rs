//! Registration domain for the Sekolah Islam Alhaq Margahayu landing page.
//!
//! Three pieces:
//! - [`model`]: the `pendaftaran` row shape sent to the remote table
//! - [`form`]: the form state controller and the submit workflow
//! - [`supabase`]: the thin REST insert client behind [`PendaftaranStore`]
//!
//! The UI crate (`alhaq-landing`) owns rendering; everything observable
//! about a submission lives here so it can be tested natively.

pub mod form;
pub mod model;
pub mod supabase;

pub use form::{RegistrationForm, SubmitOutcome, SubmitStatus, submit};
pub use model::{Field, JenisKelamin, Jenjang, Registration};
pub use supabase::{GENERIC_FAILURE, PendaftaranStore, Supabase, SupabaseError};
