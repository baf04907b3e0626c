pub mod classify;
pub mod normalize;
pub mod script;
pub mod synopsis;

pub use script::{parse_script, ScriptMap};
pub use synopsis::{parse_synopsis, Entry};
