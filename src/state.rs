//! Page State
//!
//! DOM-free state machines behind the two panels. The store wraps these;
//! components only read them.

use crate::models::GreetingPayload;

// ========================
// Counter
// ========================

/// A write the page should send after an optimistic update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterWrite {
    pub seq: u64,
    pub count: i64,
}

/// Displayed counter value plus bookkeeping for in-flight writes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counter {
    value: i64,
    /// Number of writes issued so far; the latest write has `seq == writes_issued`
    writes_issued: u64,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Apply the initial remote read. Ignored once the user has clicked.
    pub fn load(&mut self, remote: Option<i64>) {
        if self.writes_issued == 0 {
            self.value = remote.unwrap_or(0);
        }
    }

    pub fn increment(&mut self) -> CounterWrite {
        self.set(self.value.saturating_add(1))
    }

    pub fn decrement(&mut self) -> CounterWrite {
        self.set(self.value.saturating_sub(1))
    }

    fn set(&mut self, count: i64) -> CounterWrite {
        self.value = count;
        self.writes_issued += 1;
        CounterWrite { seq: self.writes_issued, count }
    }

    /// Adopt the server's stored count if `seq` is still the latest write.
    /// Echoes of older writes would otherwise roll the display back, and an
    /// echo without a count leaves the optimistic value in place.
    pub fn confirm(&mut self, seq: u64, server_count: Option<i64>) {
        if seq != self.writes_issued {
            return;
        }
        if let Some(count) = server_count {
            self.value = count;
        }
    }
}

// ========================
// Greeting
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Badge {
    #[default]
    Ready,
    Loading,
    Success,
    Error,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Ready => "Ready",
            Badge::Loading => "Loading",
            Badge::Success => "Success",
            Badge::Error => "Error",
        }
    }

    /// Class list for the `panel-badge` span
    pub fn class(self) -> &'static str {
        match self {
            Badge::Success => "panel-badge success",
            Badge::Error => "panel-badge error",
            Badge::Ready | Badge::Loading => "panel-badge",
        }
    }
}

/// Identifies one greeting request; timers carry it to avoid reverting a newer badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// What the greeting results area shows
#[derive(Debug, Clone, PartialEq)]
pub enum GreetingView {
    Empty,
    Failed(String),
    Loaded(GreetingPayload),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreetingState {
    pub result: Option<GreetingPayload>,
    pub error: Option<String>,
    pub loading: bool,
    pub badge: Badge,
    generation: u64,
}

impl GreetingState {
    /// Start a request. `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.loading {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.badge = Badge::Loading;
        Some(RequestId(self.generation))
    }

    fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.generation
    }

    pub fn succeed(&mut self, id: RequestId, payload: GreetingPayload) {
        if !self.is_current(id) {
            return;
        }
        self.result = Some(payload);
        self.error = None;
        self.badge = Badge::Success;
        self.loading = false;
    }

    pub fn fail(&mut self, id: RequestId, message: String) {
        if !self.is_current(id) {
            return;
        }
        self.result = None;
        self.error = Some(message);
        self.badge = Badge::Error;
        self.loading = false;
    }

    /// Timer callback: Success → Ready, only for the request that set it
    pub fn reset_badge(&mut self, id: RequestId) {
        if self.is_current(id) && self.badge == Badge::Success {
            self.badge = Badge::Ready;
        }
    }

    pub fn view(&self) -> GreetingView {
        match (&self.error, &self.result) {
            (Some(message), _) => GreetingView::Failed(message.clone()),
            (None, Some(payload)) => GreetingView::Loaded(payload.clone()),
            (None, None) => GreetingView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CounterResponse;
    use serde_json::json;

    fn payload() -> GreetingPayload {
        match json!({"greeting": "Hello, World!"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_counter_defaults_to_zero_without_record() {
        let mut counter = Counter::default();
        counter.load(None);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_counter_loads_remote_value() {
        let mut counter = Counter::default();
        counter.load(Some(41));
        assert_eq!(counter.value(), 41);
    }

    #[test]
    fn test_increment_is_immediate() {
        let mut counter = Counter::default();
        counter.load(Some(5));
        let write = counter.increment();
        assert_eq!(counter.value(), 6);
        assert_eq!(write.count, 6);

        let write = counter.decrement();
        assert_eq!(counter.value(), 5);
        assert_eq!(write.count, 5);
    }

    #[test]
    fn test_decrement_below_zero() {
        let mut counter = Counter::default();
        counter.decrement();
        assert_eq!(counter.value(), -1);
    }

    #[test]
    fn test_failed_write_keeps_optimistic_value() {
        let mut counter = Counter::default();
        counter.load(Some(2));
        counter.increment();
        // A failed PUT never calls confirm
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_late_initial_load_does_not_clobber_click() {
        let mut counter = Counter::default();
        counter.increment();
        counter.load(Some(100));
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_stale_echo_ignored() {
        let mut counter = Counter::default();
        let first = counter.increment();
        let second = counter.increment();
        assert_eq!(counter.value(), 2);

        counter.confirm(first.seq, Some(first.count));
        assert_eq!(counter.value(), 2);

        counter.confirm(second.seq, Some(2));
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_latest_echo_adopted() {
        let mut counter = Counter::default();
        let write = counter.increment();
        counter.confirm(write.seq, Some(10));
        assert_eq!(counter.value(), 10);
    }

    #[test]
    fn test_echo_without_count_keeps_optimistic_value() {
        let mut counter = Counter::default();
        counter.load(Some(4));
        let write = counter.increment();

        let echo: CounterResponse = serde_json::from_str(r#"{"id": "main-counter"}"#).unwrap();
        counter.confirm(write.seq, echo.count);
        assert_eq!(counter.value(), 5);

        let echo: CounterResponse = serde_json::from_str(r#"{"id": "main-counter", "count": null}"#).unwrap();
        counter.confirm(write.seq, echo.count);
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn test_greeting_initial_state() {
        let state = GreetingState::default();
        assert_eq!(state.badge, Badge::Ready);
        assert!(!state.loading);
        assert_eq!(state.view(), GreetingView::Empty);
    }

    #[test]
    fn test_greeting_success_then_ready() {
        let mut state = GreetingState::default();
        let id = state.begin().unwrap();
        assert!(state.loading);
        assert_eq!(state.badge, Badge::Loading);

        state.succeed(id, payload());
        assert!(!state.loading);
        assert_eq!(state.badge, Badge::Success);
        assert_eq!(state.badge.label(), "Success");
        assert_eq!(state.view(), GreetingView::Loaded(payload()));

        state.reset_badge(id);
        assert_eq!(state.badge, Badge::Ready);
        // Payload stays on screen
        assert_eq!(state.view(), GreetingView::Loaded(payload()));
    }

    #[test]
    fn test_greeting_failure_does_not_revert() {
        let mut state = GreetingState::default();
        let id = state.begin().unwrap();
        state.fail(id, "HTTP 500: Internal Server Error".to_string());

        assert!(!state.loading);
        assert_eq!(state.badge, Badge::Error);
        assert_eq!(state.view(), GreetingView::Failed("HTTP 500: Internal Server Error".to_string()));

        state.reset_badge(id);
        assert_eq!(state.badge, Badge::Error);
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let mut state = GreetingState::default();
        let id = state.begin().unwrap();
        state.succeed(id, payload());

        let id = state.begin().unwrap();
        assert_eq!(state.error, None);
        state.fail(id, "boom".to_string());
        assert_eq!(state.result, None);
        assert_eq!(state.view(), GreetingView::Failed("boom".to_string()));
    }

    #[test]
    fn test_begin_refused_while_in_flight() {
        let mut state = GreetingState::default();
        assert!(state.begin().is_some());
        assert!(state.begin().is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_stale_timer_does_not_revert_newer_badge() {
        let mut state = GreetingState::default();
        let first = state.begin().unwrap();
        state.succeed(first, payload());

        let second = state.begin().unwrap();
        state.succeed(second, payload());

        // Timer from the first request fires after the second succeeded
        state.reset_badge(first);
        assert_eq!(state.badge, Badge::Success);

        state.reset_badge(second);
        assert_eq!(state.badge, Badge::Ready);
    }

    #[test]
    fn test_stale_timer_during_loading() {
        let mut state = GreetingState::default();
        let first = state.begin().unwrap();
        state.succeed(first, payload());
        state.begin().unwrap();

        state.reset_badge(first);
        assert_eq!(state.badge, Badge::Loading);
        assert!(state.loading);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(Badge::Ready.class(), "panel-badge");
        assert_eq!(Badge::Success.class(), "panel-badge success");
        assert_eq!(Badge::Error.class(), "panel-badge error");
    }
}
