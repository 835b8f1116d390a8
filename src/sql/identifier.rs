//! Identifier normalization for the target dialect's quoting rules.
//!
//! Unquoted identifiers are case-insensitive and stored upper-cased in the
//! metadata catalog, so `customers` canonicalizes to `CUSTOMERS`. Quoted
//! identifiers (`"Mixed Case"`) are case-sensitive: the quotes are stripped
//! and the inner text kept verbatim, with doubled `""` collapsed to a single
//! quote.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Canonicalize a raw identifier as it appears in SQL text.
    pub fn from_sql(raw: &str) -> Self {
        let raw = raw.trim();
        let name = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            raw[1..raw.len() - 1].replace("\"\"", "\"")
        } else {
            raw.to_ascii_uppercase()
        };
        Self { name }
    }

    /// The canonical name, as the metadata catalog stores it.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume into the canonical name.
    pub fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
