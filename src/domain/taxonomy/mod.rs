pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTerm, Term};
pub use repository::TaxonomyRepository;
pub use value_objects::{TermId, TermKind, TermName};
