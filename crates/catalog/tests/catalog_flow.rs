use serde_json::json;
use storefront_catalog::{
    AssumeNo, AssumeYes, CatalogRegistry, LawnGrassSpec, PriceUpdate, Product, SmartphoneSpec,
};
use storefront_core::DomainError;

fn iphone() -> Product {
    Product::smartphone(
        "iPhone 13",
        "Apple",
        79999.0,
        10,
        SmartphoneSpec {
            performance: 3.2,
            model: "iPhone 13".to_string(),
            memory: 128,
            color: "black".to_string(),
        },
    )
    .unwrap()
}

#[test]
fn storefront_walkthrough() {
    let mut registry = CatalogRegistry::new();

    let mut fruit = registry.new_category("Fruit", "Domestic");
    registry
        .add_product(&mut fruit, Product::create("Apples", "Domestic", 15.5, 55).unwrap())
        .unwrap();

    let mut electronics = registry.new_category("Electronics", "Home appliances");
    registry
        .add_product(&mut electronics, Product::create("TV", "4K Smart TV", 50000.0, 10).unwrap())
        .unwrap();
    registry
        .add_product(&mut electronics, Product::create("Samsung", "Android", 30000.0, 5).unwrap())
        .unwrap();
    registry.add_product(&mut electronics, iphone()).unwrap();

    let mut garden = registry.new_category("Lawn grass", "Garden supplies");
    let grass = Product::lawn_grass(
        "Lawn grass",
        "Premium lawn grass",
        500.0,
        20,
        LawnGrassSpec {
            manufacturer_country: "Russia".to_string(),
            germination_period: 14,
            color: "green".to_string(),
        },
    )
    .unwrap();
    registry.add_product(&mut garden, grass).unwrap();

    assert_eq!(registry.categories_created(), 3);
    assert_eq!(registry.products_added(), 5);

    assert_eq!(fruit.listing(), "Apples, 15.5 rub. Remaining: 55 pcs.");
    assert_eq!(electronics.to_string(), "Electronics, products in stock: 25 pcs.");
    assert_eq!(garden.to_string(), "Lawn grass, products in stock: 20 pcs.");

    let apples = fruit.find_mut("Apples").unwrap();
    assert_eq!(apples.set_price(45000.0, &mut AssumeNo), PriceUpdate::Accepted);

    let tv = electronics.find_mut("TV").unwrap();
    assert_eq!(tv.set_price(-1000.0, &mut AssumeYes), PriceUpdate::Rejected);
    assert_eq!(tv.price().value(), 50000.0);

    let samsung = electronics.find_mut("Samsung").unwrap();
    assert_eq!(samsung.set_price(25000.0, &mut AssumeYes), PriceUpdate::Lowered);
    assert_eq!(samsung.set_price(35000.0, &mut AssumeNo), PriceUpdate::Accepted);

    let samsung = electronics.find("Samsung").unwrap();
    let tv = electronics.find("TV").unwrap();
    assert_eq!((samsung + tv).unwrap(), 35000.0 * 5.0 + 50000.0 * 10.0);

    let phone = electronics.find("iPhone 13").unwrap();
    assert!(matches!(tv + phone, Err(DomainError::TypeMismatch(_))));
}

#[test]
fn adding_a_non_product_is_a_type_mismatch() {
    let mut registry = CatalogRegistry::new();
    let mut electronics = registry.new_category("Electronics", "Home appliances");
    let err = registry.add_record(&mut electronics, &json!("TV")).unwrap_err();
    assert!(matches!(err, DomainError::TypeMismatch(_)));
    assert!(electronics.is_empty());
    assert_eq!(registry.products_added(), 0);
}

#[test]
fn zero_quantity_product_is_refused() {
    let mut registry = CatalogRegistry::new();
    let mut fruit = registry.new_category("Fruit", "Domestic");
    let product = Product::create("Apples", "Domestic", 15.5, 0).unwrap();

    let err = registry.add_product(&mut fruit, product).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(fruit.is_empty());
    assert_eq!(fruit.average_price(), 0.0);
}

#[test]
fn fixture_combined_value() {
    let apples = Product::create("Apples", "Domestic", 15.5, 55).unwrap();
    let tv = Product::create("TV", "4K Smart TV", 50000.0, 10).unwrap();
    assert_eq!((&apples + &tv).unwrap(), 500852.5);
}
