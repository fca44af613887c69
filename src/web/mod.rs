//! Server-rendered pages: the home search form, flight results and the
//! booking views. Markup is plain HTML built from escaped strings.

pub mod booking;
pub mod flights;
pub mod format;
pub mod home;
pub mod layout;
