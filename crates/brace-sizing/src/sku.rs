use std::fmt;

use crate::size::{BraceSize, SizeSelection, StrapSize};

/// Storefront variant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariantId(pub &'static str);

impl VariantId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Total over every selection; the match fails to compile if a size is added
/// without a variant.
pub fn resolve_sku(sel: SizeSelection) -> VariantId {
    use BraceSize::*;
    use StrapSize::*;
    VariantId(match (sel.brace, sel.strap) {
        (Small, Standard) => "34867137085605",
        (Small, Long) => "34867137151141",
        (Regular, Standard) => "34867137216677",
        (Regular, Long) => "34867137249445",
        (Tall, Standard) => "34867137314981",
        (Tall, Long) => "34867137347749",
    })
}

/// `"{BraceSize}-{StrapSize}"`, the storefront's key for a variant.
pub fn variant_key(sel: SizeSelection) -> String {
    format!("{}-{}", sel.brace, sel.strap)
}

pub fn lookup_variant(key: &str) -> Option<VariantId> {
    let (brace, strap) = key.split_once('-')?;
    let sel = SizeSelection::new(brace.parse().ok()?, strap.parse().ok()?);
    Some(resolve_sku(sel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_selection_has_a_distinct_variant() {
        let ids: HashSet<_> = SizeSelection::all().map(resolve_sku).collect();
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|id| !id.as_str().is_empty()));
    }

    #[test]
    fn keyed_lookup() {
        assert_eq!(lookup_variant("Regular-Long"), Some(VariantId("34867137249445")));
        assert_eq!(lookup_variant("Regular"), None);
        assert_eq!(lookup_variant("Huge-Long"), None);
        for sel in SizeSelection::all() {
            assert_eq!(lookup_variant(&variant_key(sel)), Some(resolve_sku(sel)));
        }
    }
}
