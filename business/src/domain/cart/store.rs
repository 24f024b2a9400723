use std::sync::Arc;

use uuid::Uuid;

use crate::domain::card::model::Card;
use crate::domain::logger::Logger;

use super::model::LineItem;
use super::pricing::{CartTotals, PricingEngine};
use super::storage::CartStorage;

/// Owned cart state with recompute-on-mutation semantics.
///
/// Invariants:
/// - items are unique by card id, insertion order preserved
/// - quantity never drops below 1 through `update_quantity`
/// - derived totals are current before any mutating call returns
/// - the durable representation is rewritten in full after every mutation
///
/// Invalid input (quantity < 1, unknown id) is silently ignored, matching
/// the storefront's no-op contract.
pub struct CartStore {
    items: Vec<LineItem>,
    engine: PricingEngine,
    totals: CartTotals,
    storage: Arc<dyn CartStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Rehydrates the cart from storage. Absent or malformed persisted data
    /// starts an empty cart, never an error.
    pub fn new(
        engine: PricingEngine,
        storage: Arc<dyn CartStorage>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let items = storage.load().unwrap_or_else(|err| {
            logger.warn(&format!("Discarding unreadable persisted cart: {}", err));
            Vec::new()
        });
        let totals = engine.totals(&items);

        Self {
            items,
            engine,
            totals,
            storage,
            logger,
        }
    }

    /// Adds a card to the cart, incrementing the quantity when the card is
    /// already present. The unit price is frozen at this moment.
    pub fn add_item(&mut self, card: &Card) {
        match self.items.iter_mut().find(|item| item.id == card.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem::from_card(card)),
        }
        self.commit();
    }

    /// Sets the quantity of a line item. Requests below 1 and unknown ids
    /// are ignored; lowering to zero never removes the line.
    pub fn update_quantity(&mut self, id: Uuid, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
            self.commit();
        }
    }

    pub fn toggle_premium_packaging(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.premium_packaging = !item.premium_packaging;
            self.commit();
        }
    }

    pub fn remove_item(&mut self, id: Uuid) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() != before {
            self.commit();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// Injects the shipping cost selected from the admin settings.
    pub fn set_shipping_cost(&mut self, value: f64) {
        self.engine.shipping_cost = value;
        self.commit();
    }

    /// Injects the premium packaging unit price from the admin settings.
    pub fn set_premium_unit_price(&mut self, value: f64) {
        self.engine.premium_unit_price = value;
        self.commit();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item_count(&self) -> i64 {
        self.totals.item_count
    }

    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes derived totals and rewrites the durable representation.
    /// Persistence is best-effort: a failed write keeps the in-memory cart
    /// usable and is only logged.
    fn commit(&mut self) {
        self.totals = self.engine.totals(&self.items);
        if let Err(err) = self.storage.save(&self.items) {
            self.logger
                .warn(&format!("Failed to persist cart: {}", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::model::{Card, NewCardProps};
    use crate::domain::cart::model::FALLBACK_UNIT_PRICE;
    use crate::domain::cart::pricing::DEFAULT_TAX_RATE;
    use crate::domain::cart::storage::CartStorageError;
    use mockall::mock;

    mock! {
        pub Storage {}

        impl CartStorage for Storage {
            fn load(&self) -> Result<Vec<LineItem>, CartStorageError>;
            fn save(&self, items: &[LineItem]) -> Result<(), CartStorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_storage() -> Arc<dyn CartStorage> {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(Vec::new()));
        storage.expect_save().returning(|_| Ok(()));
        Arc::new(storage)
    }

    fn engine() -> PricingEngine {
        PricingEngine::new(DEFAULT_TAX_RATE, 5.99, 19.99)
    }

    fn card(name: &str, price: Option<f64>) -> Card {
        Card::new(NewCardProps {
            name: name.to_string(),
            image_url: None,
            price,
            rarity: "Rare".to_string(),
            set_num: "1".to_string(),
            color: "Ruby".to_string(),
        })
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn should_add_new_item_with_quantity_one() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());

        store.add_item(&card("Elsa - Snow Queen", Some(4.99)));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_count(), 1);
        assert!(!store.items()[0].premium_packaging);
    }

    #[test]
    fn should_increment_quantity_when_same_card_added_twice() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));

        store.add_item(&card);
        store.add_item(&card);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
        assert_eq!(store.item_count(), 2);
        assert_close(store.totals().subtotal, 9.98);
    }

    #[test]
    fn should_use_fallback_price_when_card_has_none() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());

        store.add_item(&card("Unpriced Promo", None));

        assert_eq!(store.items()[0].unit_price, FALLBACK_UNIT_PRICE);
    }

    #[test]
    fn should_ignore_quantity_update_below_one() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);

        store.update_quantity(card.id, 0);
        store.update_quantity(card.id, -1);

        assert_eq!(store.items()[0].quantity, 1);
    }

    #[test]
    fn should_update_quantity_when_at_least_one() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);

        store.update_quantity(card.id, 4);

        assert_eq!(store.items()[0].quantity, 4);
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn should_ignore_operations_on_unknown_id() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        store.add_item(&card("Elsa - Snow Queen", Some(4.99)));

        let unknown = Uuid::new_v4();
        store.update_quantity(unknown, 3);
        store.toggle_premium_packaging(unknown);
        store.remove_item(unknown);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 1);
    }

    #[test]
    fn should_charge_premium_packaging_after_toggle() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);
        store.update_quantity(card.id, 2);

        store.toggle_premium_packaging(card.id);

        assert_close(store.totals().premium_packaging_total, 39.98);
        assert_close(store.totals().total, 58.0261);
    }

    #[test]
    fn should_restore_totals_when_premium_toggled_twice() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);
        let before = store.totals().clone();

        store.toggle_premium_packaging(card.id);
        store.toggle_premium_packaging(card.id);

        assert_eq!(store.totals(), &before);
    }

    #[test]
    fn should_persist_empty_representation_when_last_item_removed() {
        let mut seq = mockall::Sequence::new();
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(Vec::new()));
        storage
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|items: &[LineItem]| items.len() == 1)
            .returning(|_| Ok(()));
        storage
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|items: &[LineItem]| items.is_empty())
            .returning(|_| Ok(()));
        let mut store = CartStore::new(engine(), Arc::new(storage), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);

        store.remove_item(card.id);

        assert!(store.is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn should_clear_all_items() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        store.add_item(&card("Elsa - Snow Queen", Some(4.99)));
        store.add_item(&card("Olaf - Friendly Snowman", Some(0.99)));

        store.clear();

        assert!(store.is_empty());
        assert_close(store.totals().subtotal, 0.0);
    }

    #[test]
    fn should_rehydrate_items_and_totals_from_storage() {
        let persisted = vec![LineItem {
            id: Uuid::new_v4(),
            name: "Elsa - Snow Queen".to_string(),
            image_url: None,
            unit_price: 4.99,
            quantity: 2,
            premium_packaging: false,
        }];
        let restored = persisted.clone();
        let mut storage = MockStorage::new();
        storage.expect_load().return_once(move || Ok(restored));
        storage.expect_save().returning(|_| Ok(()));

        let store = CartStore::new(engine(), Arc::new(storage), mock_logger());

        assert_eq!(store.items(), persisted.as_slice());
        assert_eq!(store.item_count(), 2);
        assert_close(store.totals().subtotal, 9.98);
        assert_close(store.totals().total, 18.0461);
    }

    #[test]
    fn should_start_empty_when_persisted_cart_is_malformed() {
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .returning(|| Err(CartStorageError::Malformed));
        storage.expect_save().returning(|_| Ok(()));

        let store = CartStore::new(engine(), Arc::new(storage), mock_logger());

        assert!(store.is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn should_recompute_totals_when_shipping_cost_changes() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);
        store.update_quantity(card.id, 2);

        store.set_shipping_cost(12.99);

        assert_close(store.totals().shipping_cost, 12.99);
        assert_close(store.totals().tax_amount, (9.98 + 12.99) * 0.13);
    }

    #[test]
    fn should_recompute_totals_when_premium_unit_price_changes() {
        let mut store = CartStore::new(engine(), empty_storage(), mock_logger());
        let card = card("Elsa - Snow Queen", Some(4.99));
        store.add_item(&card);
        store.toggle_premium_packaging(card.id);

        store.set_premium_unit_price(9.99);

        assert_close(store.totals().premium_packaging_total, 9.99);
    }

    #[test]
    fn should_keep_cart_usable_when_persistence_fails() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(Vec::new()));
        storage
            .expect_save()
            .returning(|_| Err(CartStorageError::Write));
        let mut store = CartStore::new(engine(), Arc::new(storage), mock_logger());

        store.add_item(&card("Elsa - Snow Queen", Some(4.99)));

        assert_eq!(store.items().len(), 1);
        assert_close(store.totals().subtotal, 4.99);
    }
}
