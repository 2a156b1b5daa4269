//! Internal department reference data.

mod department;

pub use department::Department;
