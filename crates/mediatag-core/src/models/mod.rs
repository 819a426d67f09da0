pub mod media;
pub mod tag;

pub use media::{Media, NewMedia};
pub use tag::Tag;
