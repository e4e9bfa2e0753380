//! Profile application handlers.
//!
//! The dispatch resolver picks the add, edit or listing workflow for a
//! user's profile page; the form handlers build the add, edit and delete
//! forms reached from that page.

mod add_profile;
mod delete_profile;
mod edit_profile;
mod errors;
mod resolve_profile_form;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_profile::{AddProfileHandler, AddProfileQuery};
pub use delete_profile::{DeleteProfileHandler, DeleteProfileQuery};
pub use edit_profile::{EditProfileHandler, EditProfileQuery};
pub use errors::DispatchError;
pub use resolve_profile_form::{ProfileDispatchResolver, ProfileListing, ProfilePage, ProfileSection};
