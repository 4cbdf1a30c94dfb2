//! In-memory todo store behind the todo HTTP API.
//!
//! # Overview
//! Owns an ordered collection of todos and exposes the five operations the
//! API serves: list, get, create, update and delete. No I/O, no async; the
//! server crate wraps the store in a lock and maps its errors to HTTP.
//!
//! # Design
//! - `TodoStore` is the sole owner and mutator of the collection.
//! - Validation runs before any mutation and returns a typed
//!   `ValidationError` instead of panicking.
//! - Ids are allocated from a counter and never reused.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{FieldError, StoreError, ValidationError};
pub use store::{TodoStore, DELETED_MESSAGE};
pub use types::{CreateTodo, InvalidPriority, Priority, Todo, TodoId, UpdateTodo};
