//! Name-override resolution between foreign (hkx) and host bone identifiers.

use hashbrown::HashMap;

/// Bidirectional override table, built once per animation from host bone
/// metadata. Absence of an entry means identity mapping.
#[derive(Clone, Debug, Default)]
pub struct NameOverrides {
    to_host: HashMap<String, String>,
    to_hkx: HashMap<String, String>,
}

impl NameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (hkx, host) in pairs {
            table.insert(hkx, host);
        }
        table
    }

    pub fn insert(&mut self, hkx_name: impl Into<String>, host_name: impl Into<String>) {
        let hkx = hkx_name.into();
        let host = host_name.into();
        self.to_host.insert(hkx.clone(), host.clone());
        self.to_hkx.insert(host, hkx);
    }

    /// Effective host name for an imported track.
    pub fn to_host<'a>(&'a self, hkx_name: &'a str) -> &'a str {
        self.to_host
            .get(hkx_name)
            .map(String::as_str)
            .unwrap_or(hkx_name)
    }

    /// Effective track name for an exported bone.
    pub fn to_hkx<'a>(&'a self, host_name: &'a str) -> &'a str {
        self.to_hkx
            .get(host_name)
            .map(String::as_str)
            .unwrap_or(host_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_resolve_in_both_directions() {
        let table = NameOverrides::from_pairs([("NPC Root", "Root")]);
        assert_eq!(table.to_host("NPC Root"), "Root");
        assert_eq!(table.to_hkx("Root"), "NPC Root");
    }

    #[test]
    fn missing_entries_fall_back_to_the_raw_name() {
        let table = NameOverrides::new();
        assert_eq!(table.to_host("Spine"), "Spine");
        assert_eq!(table.to_hkx("Spine"), "Spine");
    }
}
