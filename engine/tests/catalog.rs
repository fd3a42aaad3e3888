//! End-to-end behaviour of the catalog service over the in-memory store.

use catalog_engine::{
    CatalogService, Error, InMemoryStore, PageRequest, Pagination, Product, ProductPatch,
};

fn sample_products() -> Vec<Product> {
    (1..=10)
        .map(|n| {
            Product::new(
                format!("sku-{n}"),
                format!("title-{n}"),
                format!("description-{n}"),
                n * 10,
            )
        })
        .collect()
}

fn seeded() -> CatalogService<InMemoryStore> {
    let catalog = CatalogService::new(InMemoryStore::new());
    for product in sample_products() {
        let sku = product.sku.clone();
        let outcome = catalog.create_product(product);
        assert_eq!(
            outcome.message(),
            format!("Product with sku: {sku} created successfully!")
        );
    }
    catalog
}

#[test]
fn product_lifecycle() {
    let catalog = CatalogService::new(InMemoryStore::new());
    let product = Product::new("sku-1", "title-1", "description-1", 10);

    // nonexistent -> existing
    let created = catalog.create_product(product.clone());
    assert!(created.is_success());
    assert_eq!(created.data(), Some(&product));

    // round trip
    assert_eq!(catalog.get_product("sku-1").into_data(), Some(product.clone()));

    // duplicate refused, first write wins
    let duplicate = catalog.create_product(Product::new("sku-1", "x", "y", 1));
    assert_eq!(duplicate.error(), Some(&Error::Conflict("sku-1".into())));
    assert_eq!(duplicate.message(), "Product with sku: sku-1 already exist!");
    assert_eq!(catalog.get_product("sku-1").into_data(), Some(product));

    // existing -> existing
    let updated = catalog.update_product(
        "sku-1",
        ProductPatch::new()
            .title("title-1-updated")
            .description("description-1-updated-2")
            .qty(15),
    );
    assert_eq!(updated.message(), "Product with sku: sku-1 updated!");

    let updated = catalog.update_product("sku-1", ProductPatch::new().qty(10));
    assert_eq!(
        updated.into_data(),
        Some(Product::new(
            "sku-1",
            "title-1-updated",
            "description-1-updated-2",
            10
        ))
    );

    // existing -> nonexistent
    let deleted = catalog.delete_product("sku-1");
    assert_eq!(deleted.message(), "Product with sku: sku-1 deleted!");

    for outcome in [
        catalog.get_product("sku-1"),
        catalog.update_product("sku-1", ProductPatch::new().qty(1)),
        catalog.delete_product("sku-1"),
    ] {
        assert_eq!(outcome.message(), "Product with sku: sku-1 doesn't exist!");
    }
}

#[test]
fn list_empty_catalog_with_defaults() {
    let catalog = CatalogService::new(InMemoryStore::new());

    let outcome = catalog.list_products(PageRequest::from_params(None, None));
    assert_eq!(outcome.message(), "Showing available products");

    let page = outcome.into_data().unwrap();
    assert!(page.products.is_empty());
    assert_eq!(
        page.pagination,
        Pagination {
            page: 1,
            total_pages: 0,
            page_size: 100,
            total: 0,
            showing: 0,
        }
    );
}

#[test]
fn list_empty_catalog_with_supplied_values() {
    let catalog = CatalogService::new(InMemoryStore::new());

    let page = catalog
        .list_products(PageRequest::from_params(Some("3"), Some("200")))
        .into_data()
        .unwrap();

    assert!(page.products.is_empty());
    assert_eq!(
        page.pagination,
        Pagination {
            page: 3,
            total_pages: 0,
            page_size: 200,
            total: 0,
            showing: 0,
        }
    );
}

#[test]
fn list_all_with_defaults() {
    let catalog = seeded();

    let page = catalog
        .list_products(PageRequest::default())
        .into_data()
        .unwrap();

    assert_eq!(page.products, sample_products());
    assert_eq!(
        page.pagination,
        Pagination {
            page: 1,
            total_pages: 1,
            page_size: 100,
            total: 10,
            showing: 10,
        }
    );
}

#[test]
fn list_page_past_end() {
    let catalog = seeded();

    let page = catalog
        .list_products(PageRequest::new(3, 200))
        .into_data()
        .unwrap();

    assert!(page.products.is_empty());
    assert_eq!(
        page.pagination,
        Pagination {
            page: 3,
            total_pages: 1,
            page_size: 200,
            total: 10,
            showing: 0,
        }
    );
}

#[test]
fn list_first_half() {
    let catalog = seeded();

    let page = catalog
        .list_products(PageRequest::new(1, 5))
        .into_data()
        .unwrap();

    assert_eq!(page.products, sample_products()[..5].to_vec());
    assert_eq!(
        page.pagination,
        Pagination {
            page: 1,
            total_pages: 2,
            page_size: 5,
            total: 10,
            showing: 5,
        }
    );
}

#[test]
fn list_reflects_updates_and_deletes() {
    let catalog = seeded();

    catalog.update_product("sku-3", ProductPatch::new().title("renamed"));
    catalog.delete_product("sku-1");

    let page = catalog
        .list_products(PageRequest::new(1, 3))
        .into_data()
        .unwrap();

    let skus: Vec<_> = page.products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, vec!["sku-2", "sku-3", "sku-4"]);
    assert_eq!(page.products[1].title, "renamed");
    assert_eq!(page.pagination.total, 9);
    assert_eq!(page.pagination.total_pages, 3);
}
