//! Transient on-screen notifications
//!
//! A toast is appended to a [`DisplaySurface`] immediately, starts fading
//! after its display time, and is removed from the surface once the fade
//! finishes. Timers run on a single-threaded [`TimerQueue`] that the owner
//! drives with [`ToastNotifier::tick`].

pub mod notifier;
pub mod surface;
pub mod timer;

pub use notifier::{resolve_duration, resolve_duration_str, ToastNotifier, ToastPhase, ToastTask};
pub use surface::{DisplaySurface, Element, ElementId, ElementStyle, MemorySurface};
pub use timer::{Clock, ManualClock, SystemClock, TimerQueue};

/// Display time used when none (or an invalid one) is requested
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Length of the fade-out before removal
pub const FADE_MS: u64 = 500;

/// Longest display or fade time a timer accepts (the range of a signed
/// 32-bit millisecond delay); longer requests are capped to it
pub const MAX_DURATION_MS: u64 = i32::MAX as u64;
