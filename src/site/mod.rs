//! Site structure: the closed set of pages and the sections composed into them.
//!
//! Nothing here depends on the terminal. The UI layer reads a [`Page`], asks
//! [`compose`] for its sections and draws them in order.

mod page;
mod renderer;

pub use page::{Page, Section};
pub use renderer::{compose, contains_contact_form};
