//! All built-in lint rule implementations.

mod n001;
mod n002;
mod n003;
mod p101;
mod p102;

pub use n001::PrivateFieldNaming;
pub use n002::MemberPascalNaming;
pub use n003::LocalVariableNaming;
pub use p101::NonPrivateField;
pub use p102::MissingVisibility;

use crate::LintEngine;

/// Registers all built-in lint rules with the engine: N001-N003 and
/// P101-P102.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(PrivateFieldNaming));
    engine.register(Box::new(MemberPascalNaming));
    engine.register(Box::new(LocalVariableNaming));
    engine.register(Box::new(NonPrivateField));
    engine.register(Box::new(MissingVisibility));
}
