//! Small terminal widget that keeps one running clock per activity category.
//! Time goes to a single active category at a time, switching never loses what the others have
//! accumulated.
//!

pub mod app;
pub mod tracker;
pub mod utils;
