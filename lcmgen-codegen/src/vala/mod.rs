//! Vala code generation modules.

pub mod classes;
pub mod comments;
pub mod hash;
pub mod members;
pub mod types;

pub use classes::ClassGenerator;
pub use comments::{AUTO_GENERATED_WARNING, emit_comment};
pub use hash::HashGenerator;
pub use members::MemberGenerator;
pub use types::{make_dynarray_type, map_type_name};
