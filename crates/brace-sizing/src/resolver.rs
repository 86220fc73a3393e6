use crate::measurement::{Field, parse_measurement};
use crate::order::{CartEndpoint, OrderRedirect};
use crate::size::{SizeResult, SizeSelection, compute};
use crate::store::{
    KEY_BRACE_SIZE, KEY_MEASUREMENT_A, KEY_MEASUREMENT_B, KEY_STRAP_SIZE, KeyValueStore,
};

/// Owns the two measurement inputs and the size derived from them.
///
/// The result is recomputed on every input change and never stored apart
/// from its inputs. Cache writes are best effort: a failing store is logged
/// and the result is still returned.
pub struct SizeResolver<S: KeyValueStore> {
    store: S,
    cart: CartEndpoint,
    raw_a: String,
    raw_b: String,
    result: SizeResult,
}

impl<S: KeyValueStore> std::fmt::Debug for SizeResolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeResolver")
            .field("raw_a", &self.raw_a)
            .field("raw_b", &self.raw_b)
            .field("result", &self.result)
            .finish()
    }
}

impl<S: KeyValueStore> SizeResolver<S> {
    pub fn new(store: S, cart: CartEndpoint) -> Self {
        Self {
            store,
            cart,
            raw_a: String::new(),
            raw_b: String::new(),
            result: SizeResult::Incomplete,
        }
    }

    /// Loads the last cached pair and recomputes from it. Nothing changes
    /// unless both cached values parse.
    pub fn restore_from_cache(&mut self) -> Option<(f64, f64)> {
        let raw_a = self.store.get(KEY_MEASUREMENT_A)?;
        let raw_b = self.store.get(KEY_MEASUREMENT_B)?;
        let (Some(a), Some(b)) = (parse_measurement(&raw_a), parse_measurement(&raw_b)) else {
            log::warn!("sizing: ignoring unparseable cached measurements {raw_a:?}, {raw_b:?}");
            return None;
        };
        self.raw_a = raw_a;
        self.raw_b = raw_b;
        self.result = compute(Some(a), Some(b));
        log::info!("sizing: restored A={a} B={b} -> {:?}", self.result);
        Some((a, b))
    }

    pub fn update(&mut self, field: Field, raw: &str) -> SizeResult {
        match field {
            Field::A => self.raw_a = raw.to_string(),
            Field::B => self.raw_b = raw.to_string(),
        }
        let a = parse_measurement(&self.raw_a);
        let b = parse_measurement(&self.raw_b);
        self.result = compute(a, b);

        if a.is_some() && b.is_some() {
            self.persist(KEY_MEASUREMENT_A, self.raw_a.trim().to_string());
            self.persist(KEY_MEASUREMENT_B, self.raw_b.trim().to_string());
        }
        if let SizeResult::Fit(sel) = self.result {
            self.persist(KEY_BRACE_SIZE, sel.brace.to_string());
            self.persist(KEY_STRAP_SIZE, sel.strap.to_string());
        }
        self.result
    }

    pub fn result(&self) -> SizeResult {
        self.result
    }

    pub fn selection(&self) -> Option<SizeSelection> {
        self.result.selection()
    }

    /// Raw text of a field, as typed or as restored.
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::A => &self.raw_a,
            Field::B => &self.raw_b,
        }
    }

    pub fn can_order(&self) -> bool {
        self.result.is_fit()
    }

    /// The cart redirect for the current size, or `None` unless the inputs
    /// resolve to one.
    pub fn confirm_order(&self) -> Option<OrderRedirect> {
        let sel = self.selection()?;
        let redirect = OrderRedirect::new(&self.cart, sel);
        log::info!("sizing: order {sel} -> variant {}", redirect.variant);
        Some(redirect)
    }

    pub fn cart(&self) -> &CartEndpoint {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, key: &str, value: String) {
        if let Err(e) = self.store.set(key, &value) {
            log::warn!("sizing: failed to cache {key}: {e}");
        }
    }
}
