pub fn helper() -> i64 {
    1
}
