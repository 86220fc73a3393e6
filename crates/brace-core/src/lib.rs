//! # State, Scopes, and Time
//!
//! The landing page is driven by a handful of small state machines (the
//! carousels, the size calculator, the dialogs). They share a tiny reactive
//! core instead of a framework:
//!
//! - `Signal<T>`: cloneable observable value; hosts subscribe to it to react
//!   to index changes outside the thing that owns the state.
//! - `Scope` / `Dispose`: lifetimes for side effects such as timers and
//!   embedded players, cleaned up when the owning view is torn down.
//! - `Clock`: injectable time source so timers and tweens are testable.
//!
//! ## Signals
//!
//! ```rust
//! use brace_core::*;
//!
//! let index = signal(0usize);
//! let seen = signal(Vec::new());
//! index.subscribe({
//!     let seen = seen.clone();
//!     move |i| seen.update(|v| v.push(*i))
//! });
//! index.set(2);
//! assert_eq!(index.get(), 2);
//! assert_eq!(seen.get(), vec![2]);
//! ```
//!
//! Subscribers run after the write has been committed, so they may read the
//! signal (or write other signals) freely.
//!
//! ## Scopes and effects
//!
//! ```rust
//! use brace_core::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let stopped = Rc::new(Cell::new(false));
//! let scope = Scope::new();
//! scope.run(|| {
//!     let stopped = stopped.clone();
//!     effect(move || on_unmount(move || stopped.set(true)));
//! });
//! scope.dispose();
//! assert!(stopped.get());
//! ```
//!
//! `effect` runs immediately and registers its cleanup with the current
//! scope (if any). Dialogs own a scope each, so anything started while a
//! dialog is open is stopped when it closes.

pub mod animation;
pub mod clock;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scope;
pub mod signal;

pub use animation::{AnimationSpec, Easing, Interpolate, Tween};
pub use clock::*;
pub use effects::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use scope::*;
pub use signal::*;
