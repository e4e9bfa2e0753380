//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddLinkResponse, ErrorResponse, FormResponse, ProfilePageResponse, ProfileResponse,
    ProfileTypeResponse, SectionResponse, TitleResponse,
};
pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
