//! Wrappers reaching `helper` through a qualified module path or an aliased item import.

use crate::util_a;
use crate::util_a::helper as helper_a;
use crate::util_b;
use crate::util_b::helper as helper_b;

pub fn run_namespace_a() -> i64 {
    util_a::helper()
}

pub fn run_namespace_b() -> i64 {
    util_b::helper()
}

pub fn run_alias_a() -> i64 {
    helper_a()
}

pub fn run_alias_b() -> i64 {
    helper_b()
}
