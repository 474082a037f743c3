
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod buy_test;
    pub mod lifecycle_test;
    pub mod opt_in_test;
}
