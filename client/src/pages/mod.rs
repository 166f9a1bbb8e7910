//! Routed pages. The app has a single page, the activity listing with its
//! signup form, mounted at `/`.

pub mod activities;
