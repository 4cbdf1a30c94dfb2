//! Domain types for the todo collection.
//!
//! # Design
//! `Todo` is what the store owns and what the HTTP layer returns. `CreateTodo`
//! and `UpdateTodo` are the caller-supplied payloads; neither carries an id
//! because ids are allocated by the store. Field names match the JSON wire
//! names so serde needs no renames.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo.
pub type TodoId = i64;

/// Urgency rank of a todo. Lower number means more urgent.
///
/// Encoded on the wire as its integer value (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.rank()
    }
}

/// Returned when an integer does not name a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority {0}, expected 1 (high), 2 (medium) or 3 (low)")]
pub struct InvalidPriority(pub u8);

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(name)
    }
}

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: TodoId,
    pub todo_name: String,
    pub todo_description: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub todo_name: String,
    pub todo_description: String,
    #[serde(default)]
    pub priority: Priority,
}

impl CreateTodo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            todo_name: name.into(),
            todo_description: description.into(),
            priority: Priority::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Payload for updating an existing todo. Only the fields that are present
/// are applied; omitted (or `null`) fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.todo_name.is_none() && self.todo_description.is_none() && self.priority.is_none()
    }
}
