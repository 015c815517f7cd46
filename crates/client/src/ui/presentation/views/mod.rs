//! Full-page views

mod profile_view;

pub use profile_view::ProfileView;
