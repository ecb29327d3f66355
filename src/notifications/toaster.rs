//! In-process notification queue.
//!
//! Toasts are appended in emission order and expire after a fixed
//! display duration; expiry never reorders the queue.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::session::AuthError;

use super::models::{Toast, ToastKind};

pub const DEFAULT_TOAST_DURATION_SECS: i64 = 4;

pub struct Toaster {
    toasts: Vec<Toast>,
    duration: Duration,
    next_id: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_duration_secs(DEFAULT_TOAST_DURATION_SECS)
    }

    pub fn with_duration_secs(secs: i64) -> Self {
        Self {
            toasts: Vec::new(),
            duration: Duration::seconds(secs),
            next_id: 0,
        }
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let toast = Toast {
            id,
            kind,
            message: message.into(),
            created_at: Utc::now(),
        };
        debug!("Toast {:?}: {}", toast.kind, toast.message);
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Error, message)
    }

    /// One failed operation surfaces exactly one toast, carrying the
    /// error's own message.
    pub fn notify_auth_error(&mut self, error: &AuthError) -> u64 {
        self.error(error.to_string())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Toasts still within their display window at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|toast| now - toast.created_at < self.duration)
            .collect()
    }

    /// Drops expired toasts from the queue.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let duration = self.duration;
        self.toasts
            .retain(|toast| now - toast.created_at < duration);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_appear_in_emission_order() {
        let mut toaster = Toaster::new();
        toaster.success("Giriş başarılı");
        toaster.error("Bir hata oluştu");
        toaster.success("Topluluk oluşturuldu");

        let active = toaster.active(Utc::now());
        assert_eq!(active.len(), 3);
        assert_eq!(active[0].message, "Giriş başarılı");
        assert_eq!(active[1].message, "Bir hata oluştu");
        assert_eq!(active[2].message, "Topluluk oluşturuldu");
    }

    #[test]
    fn toast_expires_after_duration() {
        let mut toaster = Toaster::new();
        toaster.success("kaybolur");

        let now = Utc::now();
        assert_eq!(toaster.active(now).len(), 1);
        assert!(toaster.active(now + Duration::seconds(5)).is_empty());
    }

    #[test]
    fn expiry_does_not_reorder_survivors() {
        let mut toaster = Toaster::with_duration_secs(4);
        let first = toaster.success("eski");
        toaster.toasts[0].created_at = Utc::now() - Duration::seconds(10);
        toaster.error("ikinci");
        toaster.success("üçüncü");

        let now = Utc::now();
        let active = toaster.active(now);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "ikinci");
        assert_eq!(active[1].message, "üçüncü");

        toaster.prune(now);
        assert!(toaster.toasts.iter().all(|t| t.id != first));
    }

    #[test]
    fn dismiss_removes_a_single_toast() {
        let mut toaster = Toaster::new();
        let id = toaster.success("bir");
        toaster.success("iki");

        toaster.dismiss(id);
        let active = toaster.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "iki");
    }

    #[test]
    fn auth_error_produces_exactly_one_toast() {
        let mut toaster = Toaster::new();
        toaster.notify_auth_error(&AuthError::Conflict(
            "Bu kullanıcı adı zaten alınmış".to_string(),
        ));

        let active = toaster.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, ToastKind::Error);
        assert!(active[0].message.contains("kullanıcı adı"));
    }
}
