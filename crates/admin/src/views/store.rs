//! Per-view state: the last list snapshot and the in-progress form.

use tienda_costa_core::{Entity, EntityId, FormRecord};

/// Load state of a view, derived from the store contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No list has been fetched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// A list snapshot is present.
    Loaded,
}

/// State of one view.
///
/// The list is only ever replaced wholesale by a snapshot from the API. A
/// failed fetch leaves the previous snapshot in place; there is no error
/// phase.
#[derive(Debug, Clone)]
pub struct ViewStore<E, F> {
    items: Option<Vec<E>>,
    form: F,
    loads_in_flight: usize,
}

impl<E, F> Default for ViewStore<E, F>
where
    E: Entity + Clone,
    F: FormRecord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, F> ViewStore<E, F>
where
    E: Entity + Clone,
    F: FormRecord,
{
    /// An idle store with no list and a blank form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: None,
            form: F::default(),
            loads_in_flight: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.loads_in_flight > 0 {
            Phase::Loading
        } else if self.items.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Current list snapshot (empty until the first successful fetch).
    #[must_use]
    pub fn items(&self) -> &[E] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Whether the snapshot holds an entity with `id`.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.items().iter().any(|item| item.id() == id)
    }

    /// Find the ID in the snapshot whose display form equals `raw`.
    ///
    /// Falls back to [`EntityId::from_path_segment`] when no listed entity
    /// matches, so IDs keep the JSON shape the API gave them whenever possible.
    #[must_use]
    pub fn resolve_id(&self, raw: &str) -> EntityId {
        self.items()
            .iter()
            .map(Entity::id)
            .find(|id| id.to_string() == raw)
            .cloned()
            .unwrap_or_else(|| EntityId::from_path_segment(raw))
    }

    /// Current form record.
    #[must_use]
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Record that a fetch has started.
    pub fn begin_load(&mut self) {
        self.loads_in_flight += 1;
    }

    /// Record that a fetch has finished, replacing the snapshot on success.
    ///
    /// Overlapping fetches are not ordered: whichever finishes last wins.
    pub fn finish_load(&mut self, snapshot: Option<Vec<E>>) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
        if let Some(items) = snapshot {
            self.items = Some(items);
        }
    }

    pub fn set_form(&mut self, form: F) {
        self.form = form;
    }

    /// Clear every form field.
    pub fn reset_form(&mut self) {
        self.form = F::default();
    }
}

#[cfg(test)]
mod tests {
    use tienda_costa_core::{Product, ProductForm};

    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id: EntityId::from(id),
            name: format!("Product {id}"),
            price: rust_decimal::Decimal::ONE,
            description: String::new(),
            image: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn test_phase_transitions() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        assert_eq!(store.phase(), Phase::Idle);

        store.begin_load();
        assert_eq!(store.phase(), Phase::Loading);

        store.finish_load(None);
        assert_eq!(store.phase(), Phase::Idle);

        store.begin_load();
        store.finish_load(Some(vec![product(1)]));
        assert_eq!(store.phase(), Phase::Loaded);
        assert!(store.contains(&EntityId::from(1)));
    }

    #[test]
    fn test_failed_load_keeps_snapshot() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        store.begin_load();
        store.finish_load(Some(vec![product(1), product(2)]));

        store.begin_load();
        store.finish_load(None);

        assert_eq!(store.phase(), Phase::Loaded);
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_snapshot_is_replaced_not_merged() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        store.begin_load();
        store.finish_load(Some(vec![product(1), product(2)]));
        store.begin_load();
        store.finish_load(Some(vec![product(3)]));

        assert!(!store.contains(&EntityId::from(1)));
        assert!(store.contains(&EntityId::from(3)));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_last_finished_load_wins() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        store.begin_load();
        store.begin_load();
        store.finish_load(Some(vec![product(2)]));
        assert_eq!(store.phase(), Phase::Loading);
        store.finish_load(Some(vec![product(1)]));

        assert_eq!(store.phase(), Phase::Loaded);
        assert!(store.contains(&EntityId::from(1)));
        assert!(!store.contains(&EntityId::from(2)));
    }

    #[test]
    fn test_resolve_id_prefers_snapshot_shape() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        let mut textual = product(0);
        textual.id = EntityId::from("7");
        store.begin_load();
        store.finish_load(Some(vec![textual]));

        assert_eq!(store.resolve_id("7"), EntityId::Text("7".to_string()));
        assert_eq!(store.resolve_id("8"), EntityId::Number(8));
    }

    #[test]
    fn test_form_reset() {
        let mut store: ViewStore<Product, ProductForm> = ViewStore::new();
        store.set_form(ProductForm {
            name: "Lamp".to_string(),
            ..ProductForm::default()
        });
        assert_eq!(store.form().name, "Lamp");

        store.reset_form();
        assert!(store.form().is_blank());
    }
}
