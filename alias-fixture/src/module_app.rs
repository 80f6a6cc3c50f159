//! Wrappers reaching `helper` through an aliased module or an aliased item import.
//!
//! Both sibling modules are named `util`, so only the alias tells them apart.

use crate::pkg_a::util as util_a;
use crate::pkg_a::util::helper as helper_a;
use crate::pkg_b::util as util_b;
use crate::pkg_b::util::helper as helper_b;

pub fn run_module_a() -> i64 {
    util_a::helper()
}

pub fn run_module_b() -> i64 {
    util_b::helper()
}

pub fn run_alias_a() -> i64 {
    helper_a()
}

pub fn run_alias_b() -> i64 {
    helper_b()
}
