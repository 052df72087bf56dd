//! learnhub-core: Learning-mode activity engine.
//!
//! This crate maps a learning-mode id and optional chapter context to typed
//! content, and runs the per-mode state machines (flashcards, quizzes,
//! matching, timed challenges, notes, practice) that consume it.

pub mod catalog;
pub mod config;
pub mod content;
pub mod countdown;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod model;
pub mod modes;
pub mod registry;
pub mod script;

pub use dispatch::{dispatch, dispatch_with, Activity, ActivityMachine, SessionOptions};
pub use error::ActivityError;
pub use event::ActivityEvent;
pub use model::{ChapterContext, ContentKind, ContentPayload};
