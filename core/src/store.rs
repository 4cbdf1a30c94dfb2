//! In-memory owner of the todo collection.
//!
//! # Design
//! `TodoStore` is plain synchronous data: reads take `&self`, writes take
//! `&mut self`. Callers that share it between tasks wrap it in a single lock,
//! which makes each scan-then-mutate operation atomic.
//!
//! Ids come from a counter rather than from `max + 1`, so an empty store
//! starts at 1 and deleting the newest todo never frees its id for reuse.
//! The counter is `None` once `TodoId::MAX` has been handed out.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::types::{CreateTodo, Priority, Todo, TodoId, UpdateTodo};
use crate::validate::{validate_create, validate_update};

/// Confirmation returned by [`TodoStore::delete_todo`].
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

const SEED: [(&str, &str); 5] = [
    ("Buy groceries", "Milk, Bread, Eggs"),
    ("Walk the dog", "Take the dog for a walk in the park"),
    ("Read a book", "Finish reading \"The Great Gatsby\""),
    ("Exercise", "Go for a run or hit the gym"),
    ("Clean the house", "Vacuum and dust all rooms"),
];

/// Ordered, in-memory todo collection. Insertion order is preserved.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: Option<TodoId>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store; the first created todo gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(1),
        }
    }

    /// The five fixed records the service starts with, ids 1 through 5.
    pub fn seeded() -> Self {
        let todos = SEED
            .iter()
            .zip(1..)
            .map(|(&(name, description), todo_id)| Todo {
                todo_id,
                todo_name: name.to_string(),
                todo_description: description.to_string(),
                priority: Priority::Low,
            })
            .collect::<Vec<_>>();
        let next_id = next_after(&todos);
        Self { todos, next_id }
    }

    /// Builds a store around an existing collection. The id counter starts
    /// after the largest id present.
    ///
    /// Fails if an id is below 1 or appears twice.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if todo.todo_id < 1 {
                return Err(StoreError::NonPositiveId(todo.todo_id));
            }
            if !seen.insert(todo.todo_id) {
                return Err(StoreError::DuplicateId(todo.todo_id));
            }
        }
        let next_id = next_after(&todos);
        Ok(Self { todos, next_id })
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns every todo, or only the first `limit` of them, in insertion order.
    pub fn list_todos(&self, limit: Option<usize>) -> &[Todo] {
        match limit {
            Some(n) => &self.todos[..n.min(self.todos.len())],
            None => &self.todos,
        }
    }

    pub fn get_todo(&self, todo_id: TodoId) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|t| t.todo_id == todo_id)
            .ok_or(StoreError::NotFound(todo_id))
    }

    pub fn create_todo(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        validate_create(&input)?;
        let todo_id = self.next_id.ok_or(StoreError::IdsExhausted)?;

        let todo = Todo {
            todo_id,
            todo_name: input.todo_name,
            todo_description: input.todo_description,
            priority: input.priority,
        };
        self.next_id = todo_id.checked_add(1);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Applies the fields present in `input`. Nothing changes unless every
    /// present field is valid.
    pub fn update_todo(&mut self, todo_id: TodoId, input: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.todo_id == todo_id)
            .ok_or(StoreError::NotFound(todo_id))?;
        validate_update(&input)?;

        if let Some(name) = input.todo_name {
            todo.todo_name = name;
        }
        if let Some(description) = input.todo_description {
            todo.todo_description = description;
        }
        if let Some(priority) = input.priority {
            todo.priority = priority;
        }
        Ok(todo.clone())
    }

    pub fn delete_todo(&mut self, todo_id: TodoId) -> Result<&'static str, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.todo_id == todo_id)
            .ok_or(StoreError::NotFound(todo_id))?;
        self.todos.remove(index);
        Ok(DELETED_MESSAGE)
    }
}

fn next_after(todos: &[Todo]) -> Option<TodoId> {
    match todos.iter().map(|t| t.todo_id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
