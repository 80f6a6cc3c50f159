//! Second sibling module.

pub fn helper() -> i64 {
    2
}
