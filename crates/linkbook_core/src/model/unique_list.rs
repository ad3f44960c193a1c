//! Ordered collection that rejects identity duplicates.
//!
//! # Invariants
//! - No two elements share identity as defined by [`Entity::same_identity`].
//! - Every failing operation leaves the list unchanged.
//! - Insertion order is preserved; `set` replaces in place.

use crate::model::entity::{Entity, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Uniqueness/presence violation raised by entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    Duplicate(EntityKind),
    NotFound(EntityKind),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => write!(f, "operation would result in duplicate {kind}s"),
            Self::NotFound(kind) => write!(f, "{kind} not found"),
        }
    }
}

impl Error for ModelError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an element with the same identity exists.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.same_identity(candidate))
    }

    pub fn add(&mut self, item: T) -> ModelResult<()> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` (matched by full equality) with `replacement`.
    ///
    /// Uniqueness is re-checked against every element except `target`, so an
    /// edit that keeps the same identity is allowed.
    pub fn set(&mut self, target: &T, replacement: T) -> ModelResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or(ModelError::NotFound(T::KIND))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(index, item)| index != position && item.same_identity(&replacement));
        if collides {
            return Err(ModelError::Duplicate(T::KIND));
        }

        self.items[position] = replacement;
        Ok(())
    }

    /// Bulk replace. Fails without touching the list when `items` holds
    /// internal duplicates.
    pub fn set_all(&mut self, items: Vec<T>) -> ModelResult<()> {
        if !all_unique(&items) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items = items;
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> ModelResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or(ModelError::NotFound(T::KIND))?;
        self.items.remove(position);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn all_unique<T: Entity>(items: &[T]) -> bool {
    items.iter().enumerate().all(|(index, item)| {
        items[index + 1..]
            .iter()
            .all(|other| !item.same_identity(other))
    })
}
