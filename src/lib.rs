//! Completion core for an interactive SQL editor.
//!
//! Given a multi-statement SQL buffer and a cursor offset, this crate finds
//! the statement, procedural block and `UNION` branch enclosing the cursor,
//! scans that fragment for table / view / procedure references and their
//! aliases, and resolves a typed alias (or the `OLD` / `NEW` trigger
//! pseudo-aliases) to the column or output-parameter names worth suggesting.
//!
//! Entry point: [`Resolver::object_columns`].

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        pub mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(completion);
reexport!(config);
reexport!(error);
reexport!(metadata);
reexport!(sql);
