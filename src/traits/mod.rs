mod classifier;
mod native;

pub use classifier::{StatementClassifier, StatementKind};
pub use native::NativeDriver;
