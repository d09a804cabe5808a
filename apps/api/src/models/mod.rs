pub mod knowledge;
pub mod post;
