//! Account flows: sign-in, sign-up with the email-safety gate, skill edits,
//! sign-out.
//!
//! Sign-up is the one gated path: the address must pass the email-safety
//! check before any identity record is created. Sign-in paths trust the
//! caller (no real authentication exists in this system) and differ only in
//! the starter skill set.

use th_core::analysis::{EmailSecurityVerdict, Grounded};
use th_core::entities::IdentityRecord;
use th_core::ids::{PREFIX_IDENTITY, generate_id};
use th_session::resolve_profile;

use crate::error::VerifyError;
use crate::service::VerifyService;

const SIGN_IN_STARTER_SKILLS: [&str; 2] = ["Research", "Analysis"];
const GOOGLE_STARTER_SKILLS: [&str; 3] = ["Problem Solving", "Security Analysis", "AI Navigation"];

/// Avatar style used when the user supplies their own display name.
const MANUAL_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

impl VerifyService {
    /// The currently signed-in identity, if any.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Session` if the slot cannot be read.
    pub fn current_identity(&self) -> Result<Option<IdentityRecord>, VerifyError> {
        Ok(self.store().current()?)
    }

    /// Sign in with an email address, replacing any existing identity.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError` if ID generation or the store write fails.
    pub fn sign_in(&self, email: &str) -> Result<IdentityRecord, VerifyError> {
        self.create_identity(email, None, &SIGN_IN_STARTER_SKILLS)
    }

    /// Sign in via the Google path. Same flow as [`Self::sign_in`] with the
    /// Google-path starter skills.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError` if ID generation or the store write fails.
    pub fn sign_in_with_google(&self, email: &str) -> Result<IdentityRecord, VerifyError> {
        self.create_identity(email, None, &GOOGLE_STARTER_SKILLS)
    }

    /// Sign up a new identity, gated on the email-safety check.
    ///
    /// If the verdict marks the address invalid or unsafe, sign-up fails
    /// with [`VerifyError::EmailRejected`] carrying the verdict's reason and
    /// no identity record is created. A caller-supplied display name wins
    /// over the derived one and selects a name-seeded avatar.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::EmailRejected` on gate refusal, or any failure
    /// of the safety check itself.
    pub async fn sign_up(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<IdentityRecord, VerifyError> {
        let Grounded { analysis, .. } = self.check_email_security(email).await?;
        gate_email(&analysis)?;
        self.create_identity(email, display_name, &[])
    }

    /// Replace the stored skill list. `None` when no identity is current.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Session` on store failure.
    pub fn update_skills(
        &self,
        skills: Vec<String>,
    ) -> Result<Option<IdentityRecord>, VerifyError> {
        Ok(self.store().update_skills(skills)?)
    }

    /// Sign out, destroying the current identity record.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Session` if the slot cannot be removed.
    pub fn sign_out(&self) -> Result<(), VerifyError> {
        Ok(self.store().clear()?)
    }

    fn create_identity(
        &self,
        email: &str,
        display_name: Option<&str>,
        starter_skills: &[&str],
    ) -> Result<IdentityRecord, VerifyError> {
        let profile = resolve_profile(email);
        let (display_name, avatar_ref) = match display_name {
            Some(name) if !name.trim().is_empty() => (name.to_string(), manual_avatar(name)),
            _ => (profile.display_name, profile.avatar_ref),
        };

        let record = IdentityRecord {
            id: generate_id(PREFIX_IDENTITY)?,
            display_name,
            email: email.to_string(),
            skills: starter_skills.iter().map(ToString::to_string).collect(),
            authenticated: true,
            avatar_ref,
            history: Vec::new(),
        };
        self.store().replace(&record)?;
        tracing::debug!(id = %record.id, "identity created");
        Ok(record)
    }
}

/// The sign-up gate: both flags must hold, otherwise the verdict's reason is
/// surfaced to the caller.
fn gate_email(verdict: &EmailSecurityVerdict) -> Result<(), VerifyError> {
    if verdict.is_valid && verdict.is_safe {
        Ok(())
    } else {
        Err(VerifyError::EmailRejected {
            reason: verdict.reason.clone(),
        })
    }
}

fn manual_avatar(name: &str) -> String {
    format!("{MANUAL_AVATAR_BASE}?seed={}", urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use th_config::GeminiConfig;
    use th_gemini::GeminiClient;
    use th_schema::SchemaRegistry;
    use th_session::SessionStore;

    fn service(dir: &tempfile::TempDir) -> VerifyService {
        let config = GeminiConfig {
            api_key: "test-key".into(),
            ..GeminiConfig::default()
        };
        VerifyService::new(
            GeminiClient::from_config(&config).unwrap(),
            SchemaRegistry::new(),
            SessionStore::open(dir.path().join("session.json")),
        )
    }

    #[test]
    fn sign_in_creates_a_fresh_identity() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);

        let record = svc.sign_in("jane.doe@example.com").unwrap();
        assert_eq!(record.display_name, "Jane Doe");
        assert_eq!(record.email, "jane.doe@example.com");
        assert_eq!(record.skills, vec!["Research", "Analysis"]);
        assert!(record.authenticated);
        assert!(record.history.is_empty());
        assert!(record.id.starts_with("usr-"));

        assert_eq!(svc.current_identity().unwrap(), Some(record));
    }

    #[test]
    fn google_sign_in_uses_its_starter_skills() {
        let dir = tempfile::tempdir().unwrap();
        let record = service(&dir)
            .sign_in_with_google("sam_smith@example.org")
            .unwrap();
        assert_eq!(
            record.skills,
            vec!["Problem Solving", "Security Analysis", "AI Navigation"]
        );
        assert_eq!(record.display_name, "Sam Smith");
    }

    #[test]
    fn sign_in_replaces_any_existing_identity() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        svc.sign_in("first@example.com").unwrap();
        let second = svc.sign_in("second@example.com").unwrap();
        assert_eq!(svc.current_identity().unwrap(), Some(second));
    }

    #[test]
    fn sign_out_destroys_the_identity() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        svc.sign_in("jane@example.com").unwrap();
        svc.sign_out().unwrap();
        assert_eq!(svc.current_identity().unwrap(), None);
    }

    #[test]
    fn update_skills_flows_through_to_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        svc.sign_in("jane@example.com").unwrap();
        let updated = svc
            .update_skills(vec!["Incident Response".into()])
            .unwrap()
            .unwrap();
        assert_eq!(updated.skills, vec!["Incident Response"]);
    }

    #[test]
    fn gate_rejects_unsafe_email_with_its_reason() {
        let verdict = EmailSecurityVerdict {
            is_valid: true,
            is_safe: false,
            reason: "disposable domain".into(),
            domain_trust_score: 4,
        };
        let err = gate_email(&verdict).unwrap_err();
        assert!(err.to_string().contains("disposable domain"));
    }

    #[test]
    fn gate_rejects_invalid_email() {
        let verdict = EmailSecurityVerdict {
            is_valid: false,
            is_safe: true,
            reason: "no MX record".into(),
            domain_trust_score: 0,
        };
        assert!(matches!(
            gate_email(&verdict),
            Err(VerifyError::EmailRejected { .. })
        ));
    }

    #[test]
    fn gate_passes_valid_and_safe() {
        let verdict = EmailSecurityVerdict {
            is_valid: true,
            is_safe: true,
            reason: "established provider".into(),
            domain_trust_score: 96,
        };
        assert!(gate_email(&verdict).is_ok());
    }

    #[test]
    fn manual_display_name_selects_name_seeded_avatar() {
        let name = "José García";
        let avatar = manual_avatar(name);
        assert!(avatar.starts_with(MANUAL_AVATAR_BASE));
        assert!(avatar.contains("seed=Jos%C3%A9%20Garc%C3%ADa"));
    }
}
