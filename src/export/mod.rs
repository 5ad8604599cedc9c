pub mod document;
pub mod normalizer;
pub mod resolve;
pub mod settings;

pub use document::*;
pub use normalizer::*;
pub use resolve::*;
pub use settings::*;
