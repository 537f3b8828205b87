//! Re-exports [`fastvec`]'s containers.
//!
//! Paths are short, so building them on the stack first avoids most
//! intermediate heap growth.

pub use fastvec::FastVec;
