use crate::size::SizeSelection;
use crate::sku::{VariantId, resolve_sku};

pub const DEFAULT_CART_BASE_URL: &str = "https://freedom-leg-brace.myshopify.com/cart";

/// Storefront cart base; variants are appended as `{base}/{id}:1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartEndpoint {
    base_url: String,
}

impl Default for CartEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_CART_BASE_URL)
    }
}

impl CartEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, variant: VariantId) -> String {
        format!("{}/{}:1", self.base_url, variant)
    }
}

/// A resolved add-to-cart navigation. The shell performs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRedirect {
    pub selection: SizeSelection,
    pub variant: VariantId,
    pub url: String,
}

impl OrderRedirect {
    pub fn new(cart: &CartEndpoint, selection: SizeSelection) -> Self {
        let variant = resolve_sku(selection);
        Self {
            selection,
            variant,
            url: cart.url_for(variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::{BraceSize, StrapSize};

    #[test]
    fn url_has_single_quantity() {
        let r = OrderRedirect::new(
            &CartEndpoint::default(),
            SizeSelection::new(BraceSize::Small, StrapSize::Standard),
        );
        assert_eq!(
            r.url,
            "https://freedom-leg-brace.myshopify.com/cart/34867137085605:1"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cart = CartEndpoint::new("http://localhost:8080/cart//");
        assert_eq!(cart.base_url(), "http://localhost:8080/cart");
        assert_eq!(cart.url_for(VariantId("1")), "http://localhost:8080/cart/1:1");
    }
}
