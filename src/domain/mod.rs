pub mod article;
pub mod errors;
pub mod identifier;
pub mod taxonomy;
pub mod text;
