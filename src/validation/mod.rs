//! Validation functionality
//!
//! Provides validation logic for:
//! - Element names (emptiness, path delimiter, length, identifier rules)
//! - Model references (circular containment)

pub mod naming;
pub mod references;

pub use naming::NamingRules;
pub use references::ReferenceValidator;
