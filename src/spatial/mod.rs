pub mod index;
pub mod lookup;
