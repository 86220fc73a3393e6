//! The size calculator surfaces: the inline order section and the sizing
//! guide dialog. Both read and write one shared resolver, so a value typed
//! in either shows up in the other.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use brace_sizing::{
    CartEndpoint, Field, HELP_PHONE, KeyValueStore, OrderRedirect, SizeResolver, SizeResult,
};

pub type SharedResolver = Rc<RefCell<SizeResolver<Box<dyn KeyValueStore>>>>;

pub fn shared_resolver(store: Box<dyn KeyValueStore>, cart: CartEndpoint) -> SharedResolver {
    Rc::new(RefCell::new(SizeResolver::new(store, cart)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeMessage {
    Hidden,
    Recommended(String),
    CallForHelp { phone: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizePanelView {
    pub measurement_a: String,
    pub measurement_b: String,
    pub message: SizeMessage,
    pub add_to_cart_enabled: bool,
}

impl fmt::Display for SizePanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A [{}] B [{}]", self.measurement_a, self.measurement_b)?;
        match &self.message {
            SizeMessage::Hidden => {}
            SizeMessage::Recommended(s) => writeln!(f, "Your size: {s}")?,
            SizeMessage::CallForHelp { phone } => {
                writeln!(f, "Outside our standard sizes. Call {phone} for help.")?
            }
        }
        let cart = if self.add_to_cart_enabled { "enabled" } else { "disabled" };
        write!(f, "Add to Cart: {cart}")
    }
}

/// Calculator body shared by both surfaces.
#[derive(Clone)]
pub struct SizePanel {
    resolver: SharedResolver,
}

impl SizePanel {
    pub fn new(resolver: SharedResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &SharedResolver {
        &self.resolver
    }

    pub fn restore(&self) -> Option<(f64, f64)> {
        self.resolver.borrow_mut().restore_from_cache()
    }

    pub fn input(&self, field: Field, raw: &str) -> SizeResult {
        self.resolver.borrow_mut().update(field, raw)
    }

    pub fn add_to_cart(&self) -> Option<OrderRedirect> {
        self.resolver.borrow().confirm_order()
    }

    pub fn view(&self) -> SizePanelView {
        let r = self.resolver.borrow();
        let message = match r.result() {
            SizeResult::Incomplete => SizeMessage::Hidden,
            SizeResult::OutOfRange => SizeMessage::CallForHelp { phone: HELP_PHONE },
            SizeResult::Fit(sel) => SizeMessage::Recommended(sel.to_string()),
        };
        SizePanelView {
            measurement_a: r.raw(Field::A).to_string(),
            measurement_b: r.raw(Field::B).to_string(),
            message,
            add_to_cart_enabled: r.can_order(),
        }
    }
}

/// Inline order block with a collapsible "Find My Size" calculator.
pub struct OrderSection {
    panel: SizePanel,
    calculator_expanded: bool,
}

impl OrderSection {
    /// Restores any cached measurements so returning visitors see their size.
    pub fn new(resolver: SharedResolver) -> Self {
        let panel = SizePanel::new(resolver);
        panel.restore();
        Self {
            panel,
            calculator_expanded: false,
        }
    }

    pub fn toggle_calculator(&mut self) -> bool {
        self.calculator_expanded = !self.calculator_expanded;
        self.calculator_expanded
    }

    pub fn calculator_expanded(&self) -> bool {
        self.calculator_expanded
    }

    pub fn panel(&self) -> &SizePanel {
        &self.panel
    }

    pub fn input(&self, field: Field, raw: &str) -> SizeResult {
        self.panel.input(field, raw)
    }

    pub fn add_to_cart(&self) -> Option<OrderRedirect> {
        self.panel.add_to_cart()
    }
}

/// Sizing dialog body. Re-reads the cache every time the dialog opens.
pub struct SizingGuide {
    panel: SizePanel,
}

impl SizingGuide {
    pub fn new(resolver: SharedResolver) -> Self {
        Self {
            panel: SizePanel::new(resolver),
        }
    }

    pub fn on_open(&self) {
        self.panel.restore();
    }

    pub fn panel(&self) -> &SizePanel {
        &self.panel
    }

    pub fn input(&self, field: Field, raw: &str) -> SizeResult {
        self.panel.input(field, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brace_sizing::{KEY_MEASUREMENT_A, KEY_MEASUREMENT_B, MemoryStore};

    fn resolver_over(store: &MemoryStore) -> SharedResolver {
        shared_resolver(Box::new(store.clone()), CartEndpoint::default())
    }

    #[test]
    fn surfaces_share_one_resolver() {
        let store = MemoryStore::new();
        let resolver = resolver_over(&store);
        let order = OrderSection::new(resolver.clone());
        let guide = SizingGuide::new(resolver);

        guide.input(Field::A, "20");
        guide.input(Field::B, "22");
        insta::assert_snapshot!(order.panel().view().to_string(), @r"
        A [20] B [22]
        Your size: Regular Brace / Long Strap
        Add to Cart: enabled
        ");
        assert_eq!(
            order.add_to_cart().map(|r| r.url),
            Some("https://freedom-leg-brace.myshopify.com/cart/34867137249445:1".to_string())
        );
    }

    #[test]
    fn out_of_range_offers_phone_help() {
        let store = MemoryStore::new();
        let order = OrderSection::new(resolver_over(&store));
        order.input(Field::A, "25");
        order.input(Field::B, "20");
        insta::assert_snapshot!(order.panel().view().to_string(), @r"
        A [25] B [20]
        Outside our standard sizes. Call (888) 816-8127 for help.
        Add to Cart: disabled
        ");
        assert_eq!(order.add_to_cart(), None);
    }

    #[test]
    fn returning_visitor_sees_cached_size() {
        let mut store = MemoryStore::new();
        store.set(KEY_MEASUREMENT_A, "19").unwrap();
        store.set(KEY_MEASUREMENT_B, "15").unwrap();
        let order = OrderSection::new(resolver_over(&store));
        assert_eq!(
            order.panel().view().message,
            SizeMessage::Recommended("Regular Brace / Standard Strap".into())
        );
    }

    #[test]
    fn guide_reloads_cache_on_open() {
        let mut store = MemoryStore::new();
        let guide = SizingGuide::new(resolver_over(&store));
        assert_eq!(guide.panel().view().message, SizeMessage::Hidden);
        store.set(KEY_MEASUREMENT_A, "17").unwrap();
        store.set(KEY_MEASUREMENT_B, "24").unwrap();
        guide.on_open();
        assert_eq!(guide.panel().view().measurement_b, "24");
        assert!(guide.panel().view().add_to_cart_enabled);
    }

    #[test]
    fn calculator_toggles() {
        let mut order = OrderSection::new(resolver_over(&MemoryStore::new()));
        assert!(!order.calculator_expanded());
        assert!(order.toggle_calculator());
        assert!(!order.toggle_calculator());
    }
}
