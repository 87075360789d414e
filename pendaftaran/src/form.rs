//! Form state controller for the registration section.
//!
//! The lifecycle is idle -> submitting -> success or failed, and back to
//! idle when the success banner is dismissed. Exactly one submission can be
//! in flight at a time because the UI disables the submit control while
//! [`RegistrationForm::is_submitting`] holds.

use crate::model::{Field, Registration};
use crate::supabase::PendaftaranStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// What the insert workflow reports back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

/// The current draft plus where the submission lifecycle stands.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub draft: Registration,
    status: SubmitStatus,
}

impl RegistrationForm {
    /// The single mutation: set field X to value V, unconstrained.
    pub fn set(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
    }

    /// Starts a submission: clears any previous error and hands back the
    /// immutable snapshot to send.
    pub fn begin_submit(&mut self) -> Registration {
        self.status = SubmitStatus::Submitting;
        self.draft.clone()
    }

    /// Ends a submission. Success resets the draft to empty; rejection
    /// leaves the user's input untouched so they can resubmit.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => {
                self.draft = Registration::default();
                self.status = SubmitStatus::Success;
            }
            SubmitOutcome::Rejected(message) => {
                self.status = SubmitStatus::Failed(message);
            }
        }
    }

    /// Success banner timer fired (or the section is being torn down).
    /// No-op unless the banner is actually showing.
    pub fn dismiss_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn success_shown(&self) -> bool {
        self.status == SubmitStatus::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Sends one snapshot to the store and folds the result into an outcome the
/// controller understands. No retries, no backoff, no idempotency key; a
/// failed attempt is resubmitted by the user, and the remote table owns any
/// deduplication.
pub async fn submit<S: PendaftaranStore>(store: &S, snapshot: Registration) -> SubmitOutcome {
    match store.insert(&snapshot).await {
        Ok(()) => SubmitOutcome::Accepted,
        Err(err) => SubmitOutcome::Rejected(err.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supabase::{GENERIC_FAILURE, SupabaseError};

    /// Store stub that answers every insert the same way.
    struct FixedStore(Result<(), fn() -> SupabaseError>);

    impl PendaftaranStore for FixedStore {
        async fn insert(&self, _row: &Registration) -> Result<(), SupabaseError> {
            self.0.map_err(|make| make())
        }
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.set(Field::NamaSiswa, "Ahmad Fauzi");
        form.set(Field::TempatLahir, "Bandung");
        form.set(Field::TanggalLahir, "2018-03-14");
        form.set(Field::JenisKelamin, "Laki-laki");
        form.set(Field::NamaAyah, "Budi Santoso");
        form.set(Field::NamaIbu, "Rina Kartika");
        form.set(Field::Alamat, "Jl. Margahayu Raya No. 12, Bandung");
        form.set(Field::NoTelepon, "081234567890");
        form.set(Field::Email, "budi@contoh.com");
        form.set(Field::Jenjang, "SD");
        form
    }

    #[test]
    fn submit_control_disabled_while_in_flight() {
        let mut form = filled_form();
        assert!(!form.is_submitting());

        let snapshot = form.begin_submit();
        assert!(form.is_submitting());
        assert_eq!(snapshot, form.draft);

        form.finish_submit(SubmitOutcome::Accepted);
        assert!(!form.is_submitting());
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Rejected("duplicate key value".into()));
        assert_eq!(form.error_message(), Some("duplicate key value"));

        form.begin_submit();
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn success_resets_fields_and_shows_banner() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Accepted);

        assert_eq!(form.draft, Registration::default());
        assert!(form.success_shown());
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn rejection_keeps_fields_and_shows_message() {
        let mut form = filled_form();
        let before = form.draft.clone();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Rejected("network error".into()));

        assert_eq!(form.draft, before);
        assert_eq!(form.error_message(), Some("network error"));
        assert!(!form.success_shown());
    }

    #[test]
    fn dismiss_only_clears_the_banner() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Accepted);
        assert!(form.success_shown());

        form.dismiss_success();
        assert!(!form.success_shown());
        assert_eq!(*form.status(), SubmitStatus::Idle);

        // Not showing: dismiss must not disturb other states.
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Rejected("x".into()));
        form.dismiss_success();
        assert_eq!(form.error_message(), Some("x"));
    }

    #[tokio::test]
    async fn accepted_insert_ends_with_empty_form() {
        let mut form = filled_form();
        let store = FixedStore(Ok(()));

        let snapshot = form.begin_submit();
        let outcome = submit(&store, snapshot).await;
        form.finish_submit(outcome);

        assert_eq!(form.draft, Registration::default());
        assert!(form.success_shown());
    }

    #[tokio::test]
    async fn rejected_insert_surfaces_the_service_message() {
        let mut form = filled_form();
        let before = form.draft.clone();
        let store = FixedStore(Err(|| SupabaseError::Rejected {
            status: 503,
            message: "network error".to_owned(),
        }));

        let snapshot = form.begin_submit();
        let outcome = submit(&store, snapshot).await;
        form.finish_submit(outcome);

        assert_eq!(form.draft, before);
        assert_eq!(form.error_message(), Some("network error"));
        assert!(!form.success_shown());
    }

    #[tokio::test]
    async fn rejection_without_message_uses_the_fallback() {
        let mut form = filled_form();
        let store = FixedStore(Err(|| SupabaseError::Rejected {
            status: 500,
            message: String::new(),
        }));

        let snapshot = form.begin_submit();
        let outcome = submit(&store, snapshot).await;
        form.finish_submit(outcome);

        assert_eq!(form.error_message(), Some(GENERIC_FAILURE));
    }
}
