//! Page components for the SACTIFI site.

mod index;

pub use index::Index;
