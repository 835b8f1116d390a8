#![cfg(test)]
pub use rstest::*;

use crate::metadata::{MemoryCatalog, Parameter};

/// Install the tracing subscriber once for the whole test binary.
pub fn init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// A small schema shared by resolution tests. Relations start unloaded so
/// the lazy loading path is exercised by default.
pub fn sample_catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.add_table("EMPLOYEES", ["EMP_NO", "FIRST_NAME", "LAST_NAME"]);
    catalog.add_table("DEPARTMENTS", ["DEPT_NO", "DEPT_NAME"]);
    catalog.add_table("CUSTOMERS", ["ID", "NAME", "CITY"]);
    catalog.add_view("V_ACTIVE_EMPLOYEES", ["EMP_NO", "STATUS"]);
    catalog.add_procedure(
        "GET_TOTALS",
        [
            Parameter::input("FROM_DATE"),
            Parameter::output("TOTAL_SUM"),
            Parameter::output("TOTAL_COUNT"),
        ],
    );
    catalog.add_trigger("TRG_EMP_AUDIT", "EMPLOYEES");
    catalog
}
