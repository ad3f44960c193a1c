//! Domain entities, field value objects and the organizer model.

pub mod contact;
pub mod entity;
pub mod event;
pub mod fields;
pub mod filter;
pub mod organizer;
pub mod todo;
pub mod unique_list;
