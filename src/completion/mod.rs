//! Cursor-context resolution for SQL completion.
//!
//! The pipeline narrows a buffer to the fragment that matters for the
//! cursor, then resolves the typed alias against what that fragment
//! references:
//!
//! buffer → enclosing statement → enclosing `BEGIN..END` / `FOR..DO` block
//! → enclosing `UNION` branch → alias scan → catalog lookup → column /
//! output-parameter names.
//!
//! Modules:
//! - `narrow`   : block extraction and union-branch splitting.
//! - `aliases`  : the FROM / JOIN / UPDATE / INSERT INTO reference scanner
//!   and its insertion-ordered multi-map.
//! - `trigger`  : `OLD` / `NEW` pseudo-alias resolution from trigger
//!   headers.
//! - `resolver` : the public entry point tying it all together.

crate::reexport!(aliases);
crate::reexport!(narrow);
crate::reexport!(resolver);
crate::reexport!(trigger);
