//! Small helpers with no view or network state.
//!
//! `url` holds the percent-encoding used when an activity name or email is
//! placed into a request path or query.

pub mod url;
