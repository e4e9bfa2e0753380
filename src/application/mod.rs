//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain decisions and coordinates between ports.

pub mod handlers;

pub use handlers::profile::{
    AddProfileHandler, AddProfileQuery, DeleteProfileHandler, DeleteProfileQuery, DispatchError,
    EditProfileHandler, EditProfileQuery, ProfileDispatchResolver, ProfileListing, ProfilePage,
    ProfileSection,
};
