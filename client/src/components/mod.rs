//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity list and the signup form from the shared
//! `ViewContext` and hand user events to `flows`.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_form;
