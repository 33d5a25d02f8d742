//! Toast notification state.
//!
//! At most one toast is live. Showing a new one replaces the previous toast
//! wholesale and schedules a fresh dismissal; hiding cancels whatever dismissal
//! is pending. The terminal tick samples the schedule, so a dismissal fires at
//! most once and never for a toast that has already been replaced or hidden.

use std::time::{Duration, Instant};

/// Auto-hide delay used when none is configured.
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(6000);

/// Specifying the toast severity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn title(self) -> &'static str {
        match self {
            ToastKind::Success => "Success !",
            ToastKind::Error => "Error !",
            ToastKind::Warning => "Warning !",
            ToastKind::Info => "Info !",
        }
    }
}

/// A pending auto-hide for the current toast.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledDismiss {
    started_at: Instant,
    duration: Duration,
}

impl ScheduledDismiss {
    fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    fn remaining(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let ratio = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (1.0 - ratio).clamp(0.0, 1.0)
    }
}

/// Houses the single live notification.
///
#[derive(Debug, Clone)]
pub struct Toast {
    open: bool,
    message: String,
    kind: ToastKind,
    auto_hide: Duration,
    default_auto_hide: Duration,
    dismiss: Option<ScheduledDismiss>,
}

impl Default for Toast {
    fn default() -> Self {
        Toast::new(DEFAULT_AUTO_HIDE)
    }
}

impl Toast {
    /// Return a closed toast whose convenience methods use `default_auto_hide`.
    ///
    pub fn new(default_auto_hide: Duration) -> Self {
        Toast {
            open: false,
            message: String::new(),
            kind: ToastKind::Success,
            auto_hide: default_auto_hide,
            default_auto_hide,
            dismiss: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn auto_hide(&self) -> Duration {
        self.auto_hide
    }

    /// Replace the current toast and start its countdown at `now`.
    ///
    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration, now: Instant) {
        self.open = true;
        self.message = message.into();
        self.kind = kind;
        self.auto_hide = duration;
        self.dismiss = Some(ScheduledDismiss {
            started_at: now,
            duration,
        });
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        self.show_at(message, kind, duration, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success, self.default_auto_hide);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error, self.default_auto_hide);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Warning, self.default_auto_hide);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Info, self.default_auto_hide);
    }

    /// Close the toast, keeping its content, and cancel the pending dismissal.
    ///
    pub fn hide(&mut self) {
        self.open = false;
        self.dismiss = None;
    }

    /// Sample the countdown. Hides the toast and returns true when the
    /// scheduled dismissal is due.
    ///
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss {
            Some(dismiss) if dismiss.is_due(now) => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Fraction of the countdown left, from 1.0 right after `show` down to 0.0.
    ///
    pub fn remaining(&self, now: Instant) -> f64 {
        match &self.dismiss {
            Some(dismiss) => dismiss.remaining(now),
            None if self.open => 1.0,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn show_replaces_state_and_opens() {
        let mut toast = Toast::default();
        assert!(!toast.is_open());
        toast.show("primero", ToastKind::Info, SECOND);
        toast.show("segundo", ToastKind::Error, SECOND * 2);
        assert!(toast.is_open());
        assert_eq!(toast.message(), "segundo");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.auto_hide(), SECOND * 2);
    }

    #[test]
    fn hide_keeps_content() {
        let mut toast = Toast::default();
        toast.success("guardado");
        toast.hide();
        assert!(!toast.is_open());
        assert_eq!(toast.message(), "guardado");
        assert_eq!(toast.kind(), ToastKind::Success);
    }

    #[test]
    fn convenience_methods_use_default_duration() {
        let mut toast = Toast::new(Duration::from_millis(2500));
        toast.warning("cuidado");
        assert_eq!(toast.auto_hide(), Duration::from_millis(2500));
        assert_eq!(toast.kind(), ToastKind::Warning);
        toast.error("fallo");
        assert_eq!(toast.kind(), ToastKind::Error);
        toast.info("dato");
        assert_eq!(toast.kind(), ToastKind::Info);
    }

    #[test]
    fn dismisses_once_after_duration() {
        let start = Instant::now();
        let mut toast = Toast::default();
        toast.show_at("m", ToastKind::Success, SECOND, start);

        assert!(!toast.tick(start + Duration::from_millis(999)));
        assert!(toast.is_open());
        assert!(toast.tick(start + SECOND));
        assert!(!toast.is_open());
        assert!(!toast.tick(start + SECOND * 2));
    }

    #[test]
    fn manual_hide_cancels_dismissal() {
        let start = Instant::now();
        let mut toast = Toast::default();
        toast.show_at("m", ToastKind::Success, SECOND, start);

        toast.hide();
        assert!(!toast.tick(start + Duration::from_millis(500)));
        assert!(!toast.tick(start + SECOND));
        assert!(!toast.is_open());
    }

    #[test]
    fn new_show_restarts_countdown() {
        let start = Instant::now();
        let mut toast = Toast::default();
        toast.show_at("a", ToastKind::Success, SECOND, start);
        toast.show_at("b", ToastKind::Success, SECOND, start + Duration::from_millis(800));

        assert!(!toast.tick(start + SECOND));
        assert!(toast.is_open());
        assert!(toast.tick(start + Duration::from_millis(1800)));
    }

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let mut toast = Toast::default();
        assert_eq!(toast.remaining(start), 0.0);
        toast.show_at("m", ToastKind::Info, SECOND, start);
        assert_eq!(toast.remaining(start), 1.0);
        let half = toast.remaining(start + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 1e-9);
        assert_eq!(toast.remaining(start + SECOND * 3), 0.0);
    }
}
