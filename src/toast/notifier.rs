//! Toast lifecycle: show, fade, remove
//!
//! Every `show` appends its own element and schedules a fade task. When the
//! fade task runs it restyles the element and schedules the removal task, so
//! each toast owns exactly one timer pair and is removed exactly once.

use std::time::{Duration, Instant};

use super::surface::{DisplaySurface, ElementId};
use super::timer::{Clock, SystemClock, TimerQueue};
use super::{DEFAULT_DURATION_MS, FADE_MS, MAX_DURATION_MS};
use crate::config::settings::ToastSettings;

/// Resolve a requested display time in milliseconds
///
/// Missing, NaN and infinite values fall back to `default`; negative values
/// clamp to zero and values past [`MAX_DURATION_MS`] clamp to it.
pub fn resolve_duration(requested_ms: Option<f64>, default: Duration) -> Duration {
    match requested_ms {
        Some(ms) if ms >= MAX_DURATION_MS as f64 && ms.is_finite() => {
            Duration::from_millis(MAX_DURATION_MS)
        }
        Some(ms) if ms.is_finite() => Duration::from_secs_f64(ms.max(0.0) / 1000.0),
        _ => capped(default),
    }
}

fn capped(duration: Duration) -> Duration {
    duration.min(Duration::from_millis(MAX_DURATION_MS))
}

/// `from + after`, never past the capped delay and never overflowing
fn deadline(from: Instant, after: Duration) -> Instant {
    from.checked_add(capped(after)).unwrap_or(from)
}

/// Resolve a display time given as text; unparseable input uses `default`
pub fn resolve_duration_str(requested: Option<&str>, default: Duration) -> Duration {
    resolve_duration(
        requested.and_then(|s| s.trim().parse::<f64>().ok()),
        default,
    )
}

/// Scheduled step of a toast's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTask {
    BeginFade(ElementId),
    Remove(ElementId),
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Fading,
    Removed,
}

/// Shows transient messages on a display surface
pub struct ToastNotifier<S: DisplaySurface, C: Clock = SystemClock> {
    surface: S,
    clock: C,
    timers: TimerQueue<ToastTask>,
    default_duration: Duration,
    fade: Duration,
}

impl<S: DisplaySurface> ToastNotifier<S, SystemClock> {
    /// Create a notifier driven by the system clock
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, SystemClock)
    }
}

impl<S: DisplaySurface, C: Clock> ToastNotifier<S, C> {
    /// Create a notifier driven by a custom clock
    pub fn with_clock(surface: S, clock: C) -> Self {
        Self {
            surface,
            clock,
            timers: TimerQueue::new(),
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            fade: Duration::from_millis(FADE_MS),
        }
    }

    /// Apply configured timings
    pub fn with_settings(mut self, settings: &ToastSettings) -> Self {
        self.default_duration = capped(Duration::from_millis(settings.default_duration_ms));
        self.fade = capped(Duration::from_millis(settings.fade_ms));
        self
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade
    }

    /// Show `message` for `duration_ms` (default when absent or not a number)
    ///
    /// The element is on the surface when this returns. The returned id is
    /// for observation only; a toast cannot be cancelled.
    pub fn show(&mut self, message: &str, duration_ms: Option<f64>) -> ElementId {
        let duration = resolve_duration(duration_ms, self.default_duration);
        self.show_for(message, duration)
    }

    /// Show `message` for an already resolved display time
    pub fn show_for(&mut self, message: &str, duration: Duration) -> ElementId {
        let mut element = self.surface.create_element();
        element.set_text(message);
        let id = element.id;
        self.surface.append(element);

        let duration = capped(duration);
        let due = deadline(self.clock.now(), duration);
        self.timers.schedule(due, ToastTask::BeginFade(id));
        log::debug!("Toast {} shown for {:?}", id, duration);

        id
    }

    /// Run every task that has come due; returns how many ran
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        while let Some((due, task)) = self.timers.pop_due(now) {
            self.run(task, due);
            ran += 1;
        }
        ran
    }

    fn run(&mut self, task: ToastTask, due: Instant) {
        match task {
            ToastTask::BeginFade(id) => match self.surface.element_mut(id) {
                Some(element) => {
                    element.style.begin_fade(self.fade);
                    self.timers.schedule(deadline(due, self.fade), ToastTask::Remove(id));
                    log::debug!("Toast {} fading", id);
                }
                None => log::warn!("Toast {} left the surface before fading", id),
            },
            ToastTask::Remove(id) => match self.surface.remove(id) {
                Some(_) => log::debug!("Toast {} removed", id),
                None => log::warn!("Toast {} already removed", id),
            },
        }
    }

    /// When the next task comes due, if any are pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Number of scheduled tasks
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// Lifecycle phase of a toast
    pub fn phase(&self, id: ElementId) -> ToastPhase {
        match self.surface.element(id) {
            Some(element) if element.style.is_fading() => ToastPhase::Fading,
            Some(_) => ToastPhase::Shown,
            None => ToastPhase::Removed,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
