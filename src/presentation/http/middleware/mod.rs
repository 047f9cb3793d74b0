pub mod require_editor;

pub use require_editor::{EditorCredential, require_editor};
