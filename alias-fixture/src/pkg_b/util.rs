pub fn helper() -> i64 {
    2
}
