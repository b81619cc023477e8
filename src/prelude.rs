pub use crate::catalog::*;
pub use crate::cube::*;
pub use crate::diff::*;
pub use crate::r#move::*;
pub use crate::search::*;

#[cfg(test)]
pub use crate::test::*;
