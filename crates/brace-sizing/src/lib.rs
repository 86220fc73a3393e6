//! Size calculator: two body measurements in, a brace/strap size and a
//! storefront variant out.
//!
//! ```rust
//! use brace_sizing::*;
//!
//! let mut r = SizeResolver::new(MemoryStore::new(), CartEndpoint::default());
//! r.update(Field::A, "18.5");
//! r.update(Field::B, "21");
//! assert_eq!(
//!     r.result(),
//!     SizeResult::Fit(SizeSelection::new(BraceSize::Small, StrapSize::Standard))
//! );
//! assert!(r.confirm_order().unwrap().url.ends_with("/34867137085605:1"));
//! ```

pub mod measurement;
pub mod order;
pub mod resolver;
pub mod size;
pub mod sku;
pub mod store;

pub use measurement::{Field, format_measurement, parse_measurement};
pub use order::{CartEndpoint, DEFAULT_CART_BASE_URL, OrderRedirect};
pub use resolver::SizeResolver;
pub use size::{A_RANGE, B_RANGE, BraceSize, SizeResult, SizeSelection, StrapSize, UnknownSize, compute};
pub use sku::{VariantId, lookup_variant, resolve_sku, variant_key};
pub use store::{
    KEY_BRACE_SIZE, KEY_MEASUREMENT_A, KEY_MEASUREMENT_B, KEY_STRAP_SIZE, KeyValueStore,
    MemoryStore, StoreError,
};

/// Phone line shown with out-of-range results.
pub const HELP_PHONE: &str = "(888) 816-8127";
