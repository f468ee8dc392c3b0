pub mod classify;
pub mod extract;
pub mod normalize;
pub mod orchestrator;
pub mod rules;
pub mod sanitize;
pub mod types;
pub mod validation;

pub use classify::*;
pub use extract::*;
pub use normalize::*;
pub use orchestrator::*;
pub use rules::*;
pub use sanitize::*;
pub use types::*;
pub use validation::*;
