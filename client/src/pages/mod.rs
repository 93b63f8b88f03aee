//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per route. Pages compose the shared chrome with their own
//! content fragments and delegate repeated blocks to `components`.

pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod partners;
pub mod pitch_prep;
pub mod session_review;
pub mod voice_session;
