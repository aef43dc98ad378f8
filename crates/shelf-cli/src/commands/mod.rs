pub mod books;
pub mod misc;
