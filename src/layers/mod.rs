pub mod cache;
pub mod compositor;
pub mod descriptor;
