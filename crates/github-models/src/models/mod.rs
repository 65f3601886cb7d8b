pub mod detailed;
pub mod owner;
pub mod repo;

pub use detailed::*;
pub use owner::*;
pub use repo::*;
