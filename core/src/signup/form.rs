//! Simulated email signup
//!
//! There is no backend: a submission waits a fixed delay, then succeeds with a
//! configured probability and records the address in local storage.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use launchpad_types::SignupConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{LocalStorage, SignupError, StorageError, SubscriberList, is_valid_email};

/// How a successful submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Address accepted and stored
    Subscribed,
    /// Address was already on the list; nothing was submitted
    AlreadySubscribed,
}

impl SignupOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SignupOutcome::Subscribed => "Thank you! We'll notify you when we launch.",
            SignupOutcome::AlreadySubscribed => {
                "You're already on our list! We'll notify you soon."
            }
        }
    }
}

#[derive(Debug)]
pub struct SignupForm {
    subscribers: SubscriberList,
    submit_delay: Duration,
    success_rate: f64,
    rng: Mutex<SmallRng>,
}

impl SignupForm {
    pub fn new(subscribers: SubscriberList, submit_delay: Duration, success_rate: f64) -> Self {
        Self {
            subscribers,
            submit_delay,
            success_rate: if success_rate.is_nan() {
                0.0
            } else {
                success_rate.clamp(0.0, 1.0)
            },
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Build from config, falling back to the platform storage location.
    pub fn from_config(config: &SignupConfig) -> Result<Self, StorageError> {
        let path = match &config.storage_path {
            Some(path) => PathBuf::from(path),
            None => LocalStorage::default_path().ok_or(StorageError::NoLocation)?,
        };
        let subscribers = SubscriberList::new(LocalStorage::open(path), &config.storage_key);

        Ok(Self::new(
            subscribers,
            Duration::from_millis(config.submit_delay_ms),
            config.clamped_success_rate(),
        ))
    }

    /// Replace the random source with a seeded one (repeatable demos).
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
            ..self
        }
    }

    pub fn subscribers(&self) -> &SubscriberList {
        &self.subscribers
    }

    /// Validate, dedupe and submit one address.
    pub async fn submit(&self, input: &str) -> Result<SignupOutcome, SignupError> {
        let email = input.trim();
        if email.is_empty() {
            return Err(SignupError::EmptyEmail);
        }
        if !is_valid_email(email) {
            return Err(SignupError::InvalidEmail);
        }

        if self.subscribers.contains(email)? {
            tracing::debug!(email, "email already subscribed");
            return Ok(SignupOutcome::AlreadySubscribed);
        }

        tokio::time::sleep(self.submit_delay).await;

        if !self.roll_success() {
            tracing::warn!(email, "simulated submission failed");
            return Err(SignupError::Submission);
        }

        // Another submission may have stored the same address meanwhile
        self.subscribers.add(email)?;
        tracing::info!(email, "email subscription successful");
        Ok(SignupOutcome::Subscribed)
    }

    fn roll_success(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(self.success_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(dir: &tempfile::TempDir, success_rate: f64) -> SignupForm {
        let storage = LocalStorage::open(dir.path().join("local_storage.json"));
        let list = SubscriberList::new(storage, "guestogram_emails");
        SignupForm::new(list, Duration::from_millis(1500), success_rate).with_seed(7)
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_empty_and_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let form = form(&dir, 1.0);

        assert!(matches!(form.submit("   ").await, Err(SignupError::EmptyEmail)));
        assert!(matches!(form.submit("nope@").await, Err(SignupError::InvalidEmail)));
        assert!(form.subscribers().emails().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_submission_waits_and_stores() {
        let dir = tempfile::tempdir().unwrap();
        let form = form(&dir, 1.0);

        let started = tokio::time::Instant::now();
        let outcome = form.submit("  guest@example.com ").await.unwrap();
        assert_eq!(outcome, SignupOutcome::Subscribed);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(
            form.subscribers().emails().unwrap(),
            vec!["guest@example.com".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_skips_submission() {
        let dir = tempfile::tempdir().unwrap();
        let form = form(&dir, 1.0);
        form.submit("guest@example.com").await.unwrap();

        let started = tokio::time::Instant::now();
        let outcome = form.submit("guest@example.com").await.unwrap();
        assert_eq!(outcome, SignupOutcome::AlreadySubscribed);
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(form.subscribers().emails().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let form = form(&dir, 0.0);

        let err = form.submit("guest@example.com").await.unwrap_err();
        assert!(matches!(err, SignupError::Submission));
        assert_eq!(err.to_string(), "Server error. Please try again.");
        assert!(form.subscribers().emails().unwrap().is_empty());
    }

    #[test]
    fn from_config_uses_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let config = SignupConfig {
            storage_path: Some(path.to_string_lossy().to_string()),
            ..SignupConfig::default()
        };
        let form = SignupForm::from_config(&config).unwrap();
        assert_eq!(form.subscribers().storage().path(), path.as_path());
        assert_eq!(form.subscribers().key(), "guestogram_emails");
    }
}
