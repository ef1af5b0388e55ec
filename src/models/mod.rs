// Re-export all model types
pub use self::catalog::*;
pub use self::contact::*;
pub use self::enums::*;
pub use self::errors::*;
pub use self::validation::*;

mod catalog;
mod contact;
mod enums;
mod errors;
mod validation;
