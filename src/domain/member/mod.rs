//! Member domain module.

mod member;

pub use member::Member;
