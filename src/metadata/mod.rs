//! Metadata catalog consumed by the completion resolver.
//!
//! The resolver only needs a narrow surface: find an object by kind and
//! name, read its column / parameter list, and trigger the lazy load of that
//! list when it has not been fetched yet. [`Catalog`] is that surface;
//! [`MemoryCatalog`] is a deferred-store implementation that keeps lazy
//! loading observable without any live data source.
//!
//! Objects carry their lazily loaded lists behind interior mutability so
//! loading works through the shared references a resolution holds. The
//! catalog serializes its own load state; the completion core itself keeps
//! only request-scoped data and takes no locks of its own.

crate::reexport!(catalog);
crate::reexport!(kind);
crate::reexport!(memory);
crate::reexport!(procedure);
crate::reexport!(relation);
crate::reexport!(trigger);
