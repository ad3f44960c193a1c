//! Contact entity.
//!
//! # Invariants
//! - Identity is the exact (case-sensitive) name.
//! - The event link is a bare alias; the model never checks that the event
//!   exists. Commands keep links consistent on delete.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Address, Email, EventAlias, Name, Phone, Tag};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    event: Option<EventAlias>,
}

impl Contact {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        event: Option<EventAlias>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            event,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn event(&self) -> Option<&EventAlias> {
        self.event.as_ref()
    }

    /// Returns whether this contact is linked to `alias` (case-insensitive).
    pub fn is_linked_to(&self, alias: &EventAlias) -> bool {
        self.event.as_ref().is_some_and(|linked| linked.matches(alias))
    }

    /// Copy with the event link replaced (`None` unlinks).
    pub fn with_event(&self, event: Option<EventAlias>) -> Self {
        Self {
            event,
            ..self.clone()
        }
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        match &self.event {
            Some(alias) => write!(f, "; Event: {alias}"),
            None => Ok(()),
        }
    }
}
