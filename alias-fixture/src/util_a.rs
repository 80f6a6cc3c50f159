//! First sibling module.

pub fn helper() -> i64 {
    1
}
