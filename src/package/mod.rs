//! Package data model
//!
//! Package specifications (`name>=version`) and the ordered lists of them
//! used by the individual install path.

mod list;
mod spec;

pub use list::PackageList;
pub use spec::PackageSpec;
