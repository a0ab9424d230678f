//! Framework-free operations behind the components. Each one talks to the
//! injected `ReviewApi` and returns the state the view should show.
pub mod field_validator;
pub mod request_ticket;
pub mod review_liker;
pub mod review_loader;

#[cfg(test)]
pub(crate) mod test_support;
