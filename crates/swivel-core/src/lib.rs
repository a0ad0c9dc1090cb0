//! # Signals, timers, and the animation clock
//!
//! Swivel components are thin view builders over a small reactive core.
//! There are four main pieces:
//!
//! - `Signal<T>` — observable, cloneable value with unsubscribable observers.
//! - `SettleTimer` / `Debounced<T>` — cancellable deadline timers, driven by
//!   an explicit poll from the owner's frame tick and guarded by generation
//!   counters against stale firing.
//! - `AnimatedValue<T>` — tweened value advanced per frame against the
//!   installed `Clock`.
//! - `Theme` locals — thread-local palette/density stack for a subtree build.
//!
//! ## Signals
//!
//! ```rust
//! use swivel_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Timers
//!
//! Timers are data, not threads: arming records a deadline, polling reports
//! expiry, and dropping the owner cancels everything outstanding. The
//! generation token returned from `arm()` lets a caller recognize that a
//! wakeup belongs to a superseded request:
//!
//! ```rust
//! use swivel_core::*;
//! use web_time::Duration;
//!
//! let mut settle = SettleTimer::new();
//! let token = settle.arm(Duration::from_millis(350));
//! // ... later, from the frame tick:
//! if let Some(fired) = settle.poll() {
//!     assert_eq!(fired, token);
//! }
//! ```
//!
//! ## Deterministic time
//!
//! All time flows through the installed [`clock::Clock`]. Tests pin a
//! thread-local instant with `clock::set_test_now` and advance it manually,
//! so animation and debounce behavior is reproducible without sleeping.

pub mod animation;
pub mod clock;
pub mod color;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod modifier;
pub mod signal;
pub mod theme;
pub mod timer;
pub mod view;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use haptics::*;
pub use modifier::*;
pub use signal::*;
pub use theme::*;
pub use timer::*;
pub use view::*;
