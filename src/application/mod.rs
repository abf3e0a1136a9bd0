pub mod chunk;
pub mod translate;

pub use chunk::split_into_chunks;
pub use translate::{translate_text, TranslateOptions};
