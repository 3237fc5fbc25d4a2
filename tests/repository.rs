use product_catalog::domain::product::NewProduct;
use product_catalog::domain::types::ProductId;
use product_catalog::repository::{
    DieselRepository, ProductListQuery, ProductOrder, ProductReader, ProductWriter,
};

mod common;

fn new_product(name: &str, price: f64, quantity: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price,
        quantity,
    }
}

#[test]
fn create_assigns_id_and_roundtrips() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&NewProduct {
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: 9.99,
            quantity: 5,
        })
        .expect("should create product");

    let fetched = repo
        .get_product_by_id(created.id)
        .expect("should query product")
        .expect("created product should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.description.as_deref(), Some("A widget"));
    assert_eq!(fetched.price, 9.99);
    assert_eq!(fetched.quantity, 5);
}

#[test]
fn ids_are_unique_and_increasing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_product(&new_product("A", 1.0, 1)).unwrap();
    let second = repo.create_product(&new_product("B", 2.0, 2)).unwrap();

    assert!(second.id.get() > first.id.get());
}

#[test]
fn get_missing_product_returns_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = repo
        .get_product_by_id(ProductId::new(999).unwrap())
        .expect("lookup should not fail");

    assert!(missing.is_none());
}

#[test]
fn update_overwrites_every_field() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&NewProduct {
            name: "Widget".to_string(),
            description: Some("old description".to_string()),
            price: 9.99,
            quantity: 5,
        })
        .unwrap();

    let updated = repo
        .update_product(created.id, &new_product("Gadget", 19.99, 2))
        .expect("update should not fail")
        .expect("existing product should be updated");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gadget");
    // Wholesale overwrite: a missing description clears the column.
    assert_eq!(updated.description, None);
    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.quantity, 2);

    let fetched = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn update_missing_product_returns_none_and_inserts_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = repo
        .update_product(ProductId::new(999).unwrap(), &new_product("Ghost", 1.0, 1))
        .expect("update should not fail");

    assert!(result.is_none());
    assert!(
        repo.list_products(ProductListQuery::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn delete_removes_row_and_is_idempotent() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo.create_product(&new_product("Widget", 9.99, 5)).unwrap();

    assert_eq!(repo.delete_product(created.id).unwrap(), 1);
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());

    // Second delete affects nothing.
    assert_eq!(repo.delete_product(created.id).unwrap(), 0);
}

#[test]
fn listing_orders_by_price_when_requested() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("C", 30.0, 1)).unwrap();
    repo.create_product(&new_product("A", 10.0, 1)).unwrap();
    repo.create_product(&new_product("B", 20.0, 1)).unwrap();

    let unordered = repo.list_products(ProductListQuery::default()).unwrap();
    assert_eq!(unordered.len(), 3);

    let ordered = repo
        .list_products(ProductListQuery::default().order_by(ProductOrder::PriceAsc))
        .unwrap();
    let prices: Vec<f64> = ordered.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![10.0, 20.0, 30.0]);
}
