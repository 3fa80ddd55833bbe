mod common;

pub use common::{AsyncTimer, DynTimer};
