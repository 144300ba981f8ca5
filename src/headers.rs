pub mod category;
pub mod descriptor;
pub mod names;
pub mod validate;

pub use category::Category;
pub use descriptor::{ HeaderDescriptor, canonical_key };
