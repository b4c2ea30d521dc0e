//! Case and separator insensitive name lookup
//!
//! User-facing names such as `"thin-thick small gap"`, `"THINTHICK_SMALLGAP"`
//! and `"ThinThickSmallGap"` all resolve to the same variant.

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Normalize a name for lookup: lowercase, with `_`, `-` and whitespace removed
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Static table mapping normalized names to values
#[derive(Debug)]
pub(crate) struct NameTable<T: Copy> {
    kind: &'static str,
    map: AHashMap<String, T>,
}

impl<T: Copy> NameTable<T> {
    /// Build a table from `(name, value)` pairs. Several names may map to one value.
    pub(crate) fn new(kind: &'static str, entries: &[(&str, T)]) -> Self {
        let map = entries
            .iter()
            .map(|(name, value)| (normalize(name), *value))
            .collect();
        Self { kind, map }
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<T> {
        self.map
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| Error::unknown_name(self.kind, name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Thin-Thick Small_Gap"), "thinthicksmallgap");
        assert_eq!(normalize("  MM100 "), "mm100");
    }

    #[test]
    fn test_lookup() {
        let table = NameTable::new("fruit", &[("apple", 1), ("green_apple", 1), ("pear", 2)]);
        assert_eq!(table.lookup("APPLE"), Ok(1));
        assert_eq!(table.lookup("Green Apple"), Ok(1));
        assert_eq!(table.lookup("pear"), Ok(2));
        assert_eq!(
            table.lookup("plum"),
            Err(Error::UnknownName {
                kind: "fruit",
                name: "plum".to_string()
            })
        );
    }
}
