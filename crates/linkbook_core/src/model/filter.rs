//! Predicate filters and order-preserving filtered views.
//!
//! # Responsibility
//! - Define one filter value per entity kind, each with a `ShowAll` default.
//! - Keep a projection of the backing list that is recomputed on demand by
//!   the owning model after every predicate change or list mutation.
//!
//! # Invariants
//! - A view's visible positions are strictly increasing (backing order).
//! - Keyword matching is case-insensitive everywhere.

use crate::model::contact::Contact;
use crate::model::event::Event;
use crate::model::fields::EventAlias;
use crate::model::todo::Todo;

/// Predicate over one entity type.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    ShowAll,
    /// Any keyword equals a whole word of the name.
    NameKeywords(Vec<String>),
    /// Contact is linked to this event alias.
    LinkedTo(EventAlias),
}

impl Filter<Contact> for ContactFilter {
    fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameKeywords(keywords) => keywords.iter().any(|keyword| {
                contact
                    .name()
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
            Self::LinkedTo(alias) => contact.is_linked_to(alias),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    ShowAll,
    /// Alias starts with any keyword.
    AliasPrefixes(Vec<String>),
}

impl Filter<Event> for EventFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::ShowAll => true,
            Self::AliasPrefixes(keywords) => keywords
                .iter()
                .any(|keyword| event.alias().starts_with_ignore_case(keyword)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    ShowAll,
    /// Name contains any keyword as a substring.
    NameContains(Vec<String>),
}

impl Filter<Todo> for TodoFilter {
    fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContains(keywords) => {
                let name = todo.name().as_str().to_ascii_lowercase();
                keywords
                    .iter()
                    .any(|keyword| name.contains(&keyword.to_ascii_lowercase()))
            }
        }
    }
}

/// Live projection of a backing slice through a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<F> {
    filter: F,
    visible: Vec<usize>,
}

impl<F: Default> Default for FilteredView<F> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            visible: Vec::new(),
        }
    }
}

impl<F> FilteredView<F> {
    /// Replaces the predicate and re-applies it.
    pub fn set_filter<T>(&mut self, filter: F, items: &[T])
    where
        F: Filter<T>,
    {
        self.filter = filter;
        self.refresh(items);
    }

    /// Re-applies the current predicate to the backing items.
    pub fn refresh<T>(&mut self, items: &[T])
    where
        F: Filter<T>,
    {
        self.visible = items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item))
            .map(|(position, _)| position)
            .collect();
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Item shown at zero-based display `position`.
    pub fn get<'a, T>(&self, items: &'a [T], position: usize) -> Option<&'a T> {
        self.visible
            .get(position)
            .and_then(|&backing| items.get(backing))
    }

    pub fn project<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.visible
            .iter()
            .filter_map(move |&backing| items.get(backing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Filter<u32> for Even {
        fn matches(&self, item: &u32) -> bool {
            item % 2 == 0
        }
    }

    #[test]
    fn view_preserves_backing_order_and_tracks_refresh() {
        let mut view = FilteredView {
            filter: Even,
            visible: Vec::new(),
        };
        let mut items = vec![4, 1, 2, 7, 8];
        view.refresh(&items);
        assert_eq!(view.project(&items).copied().collect::<Vec<_>>(), vec![4, 2, 8]);
        assert_eq!(view.get(&items, 1), Some(&2));
        assert_eq!(view.get(&items, 3), None);

        items.remove(0);
        view.refresh(&items);
        assert_eq!(view.project(&items).copied().collect::<Vec<_>>(), vec![2, 8]);
    }
}
