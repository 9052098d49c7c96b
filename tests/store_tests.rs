// Host-side tests for dish persistence and the admin add/delete flow.

use armenu_core::constants::STORAGE_KEY;
use armenu_core::form::{validate, DishFormFields};
use armenu_core::view::{admin_entries, menu_cards};
use armenu_core::*;

fn sample(id: &str, name: &str) -> DishRecord {
    DishRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        diameter: 25.0,
        height: 3.0,
        price: 50.0,
        model_reference: format!("{id}.glb"),
        image_reference: None,
    }
}

/// Store whose writes always fail.
struct ReadOnlyStore(MemoryStore);

impl BlobStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), MenuError> {
        Err(MenuError::Storage("quota exceeded".to_string()))
    }
}

#[test]
fn empty_store_yields_and_persists_default_dish() {
    let mut repo = DishRepository::new(MemoryStore::new());
    let dishes = repo.load_all().unwrap();
    assert_eq!(dishes, vec![DishRecord::default_dish()]);
    assert!(repo.store().get(STORAGE_KEY).unwrap().is_some());
}

#[test]
fn blank_or_corrupt_document_falls_back_to_default() {
    for doc in ["", "   ", "{not json", "{\"id\":1}"] {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, doc).unwrap();
        let mut repo = DishRepository::new(store);
        assert_eq!(repo.load_all().unwrap(), vec![DishRecord::default_dish()]);
    }
}

#[test]
fn explicit_empty_list_is_respected() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "[]").unwrap();
    let mut repo = DishRepository::new(store);
    assert!(repo.load_all().unwrap().is_empty());
}

#[test]
fn saving_what_was_loaded_changes_nothing() {
    let mut repo = DishRepository::new(MemoryStore::new());
    repo.save_all(&[sample("a", "Lasanha"), sample("b", "Risoto")])
        .unwrap();
    let first = repo.load_all().unwrap();
    let raw_before = repo.store().get(STORAGE_KEY).unwrap();
    repo.save_all(&first).unwrap();
    assert_eq!(repo.load_all().unwrap(), first);
    assert_eq!(repo.store().get(STORAGE_KEY).unwrap(), raw_before);
}

#[test]
fn document_uses_existing_field_names() {
    let mut repo = DishRepository::new(MemoryStore::new());
    repo.save_all(&[DishRecord::default_dish()]).unwrap();
    let raw = repo.store().get(STORAGE_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &v[0];
    assert_eq!(first["modelPath"], "pizza.glb");
    assert!(first["image"].is_null());
    assert_eq!(first["price"], 45.0);
}

#[test]
fn reads_documents_written_by_earlier_versions() {
    let doc = r#"[{"id":"1","name":"Pizza","description":"","diameter":30,"height":2,
        "price":45,"modelPath":"pizza.glb","image":null},
        {"id":"17","name":"Bolo","diameter":20,"height":8,"price":12.5,
        "modelPath":"blob:x","image":"data:image/png;base64,AAAA"}]"#;
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, doc).unwrap();
    let dishes = DishRepository::new(store).load_all().unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].description_text(), None);
    assert_eq!(dishes[1].description, None);
    assert_eq!(
        dishes[1].image_reference.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn add_then_delete_restores_prior_content_in_order() {
    let mut repo = DishRepository::new(MemoryStore::new());
    repo.save_all(&[sample("a", "A"), sample("b", "B"), sample("c", "C")])
        .unwrap();
    let mut catalog = Catalog::open(repo).unwrap();
    let before = catalog.dishes().to_vec();

    catalog.add(sample("d", "D")).unwrap();
    assert_eq!(catalog.dishes().len(), 4);
    assert!(catalog.delete("d").unwrap());
    assert_eq!(catalog.dishes(), before.as_slice());

    assert!(catalog.delete("b").unwrap());
    let ids: Vec<_> = catalog.dishes().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert!(!catalog.delete("missing").unwrap());

    let mut reloaded = DishRepository::new(MemoryStore::new());
    reloaded
        .save_all(catalog.dishes())
        .unwrap();
    assert_eq!(reloaded.load_all().unwrap(), catalog.dishes());
}

#[test]
fn failed_save_rolls_back_in_memory_list() {
    let mut inner = MemoryStore::new();
    inner
        .set(STORAGE_KEY, &serde_json::to_string(&[sample("a", "A")]).unwrap())
        .unwrap();
    let mut catalog = Catalog::open(DishRepository::new(ReadOnlyStore(inner))).unwrap();
    assert!(matches!(
        catalog.add(sample("b", "B")),
        Err(MenuError::Storage(_))
    ));
    assert_eq!(catalog.dishes().len(), 1);
    assert!(catalog.delete("a").is_err());
    assert_eq!(catalog.dishes().len(), 1);
}

#[test]
fn unwritable_empty_store_still_yields_default_dish() {
    let mut repo = DishRepository::new(ReadOnlyStore(MemoryStore::new()));
    let dishes = repo.load_all().unwrap();
    assert_eq!(dishes, vec![DishRecord::default_dish()]);
    assert_eq!(repo.store().get(STORAGE_KEY).unwrap(), None);

    let catalog = Catalog::open(DishRepository::new(ReadOnlyStore(MemoryStore::new()))).unwrap();
    assert_eq!(catalog.dishes().len(), 1);
    assert_eq!(catalog.dishes()[0].name, "Pizza Margherita");
}

#[test]
fn admin_add_and_delete_round_trip_through_menu_and_admin_views() {
    let mut catalog = Catalog::open(DishRepository::new(MemoryStore::new())).unwrap();
    assert_eq!(menu_cards(catalog.dishes()).len(), 1);

    let fields = DishFormFields {
        name: "Salada Caesar".to_string(),
        description: String::new(),
        diameter: "25".to_string(),
        height: "3".to_string(),
        price: "50".to_string(),
        has_model_file: true,
        has_image_file: false,
    };
    let draft = validate(&fields).unwrap();
    let id = generate_id(1_700_000_000_000, catalog.dishes());
    let record = draft.into_record(id.clone(), "blob:model".to_string(), None);
    catalog.add(record).unwrap();

    let cards = menu_cards(catalog.dishes());
    let entries = admin_entries(catalog.dishes());
    assert_eq!(cards.len(), 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(cards[1].name, "Salada Caesar");
    assert_eq!(cards[1].price_label, "R$ 50.00");
    assert_eq!(entries[1].summary, "25cm × 3cm - R$ 50.00");

    assert!(catalog.delete(&id).unwrap());
    let cards = menu_cards(catalog.dishes());
    let entries = admin_entries(catalog.dishes());
    assert_eq!(cards.len(), 1);
    assert_eq!(entries.len(), 1);
    assert_eq!(cards[0].id, DishRecord::default_dish().id);
    assert_eq!(entries[0].name, "Pizza Margherita");
}

#[test]
fn generated_ids_are_unique() {
    let existing = vec![sample("1000", "x"), sample("1001", "y")];
    assert_eq!(generate_id(1000, &existing), "1002");
    assert_eq!(generate_id(5, &existing), "5");
}
