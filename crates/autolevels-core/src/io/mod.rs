pub mod compare;
pub mod image_io;
