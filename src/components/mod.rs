//! Page sections for the SACTIFI site.
//!
//! One component per section, in page order, plus the shared section
//! header and the toast host.

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section_header;
mod sectors;
mod team;
mod tech_stack;
mod toast;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use section_header::SectionHeader;
pub use sectors::Sectors;
pub use team::Team;
pub use tech_stack::TechStack;
pub use toast::ToastHost;
