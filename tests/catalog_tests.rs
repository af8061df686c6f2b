use chrono::Utc;
use realty_catalog::{
    create_in_memory_app,
    domain::models::{
        CreateImage, CreateOwner, CreateProperty, CreateTrace, PriceUpdate, UpdateOwner,
        UpdateProperty,
    },
    AppState, OwnerService as _, PropertyImageService as _, PropertyService as _,
    PropertyTraceService as _, ServiceError, ValidationError,
};
use uuid::Uuid;

async fn app() -> AppState {
    create_in_memory_app().await.unwrap()
}

async fn seed_owner(state: &AppState) -> Uuid {
    state
        .owner_service
        .create(CreateOwner {
            name: "Jane Doe".to_string(),
            address: "1 Main St".to_string(),
            photo: String::new(),
        })
        .await
        .unwrap()
        .id()
}

fn sample_property(owner_id: Uuid) -> CreateProperty {
    CreateProperty {
        name: "Casa Centro".to_string(),
        street: "100 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "USA".to_string(),
        zip_code: "62701".to_string(),
        price: 150_000.0,
        currency: "USD".to_string(),
        year: 2020,
        area: 100.0,
        owner_id,
        active: true,
    }
}

#[tokio::test]
async fn owner_round_trip() {
    let state = app().await;
    let id = seed_owner(&state).await;

    let owner = state.owner_service.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(owner.name(), "Jane Doe");
    assert_eq!(owner.address(), "1 Main St");

    let updated = state
        .owner_service
        .update(
            id,
            UpdateOwner {
                name: "Jane Smith".to_string(),
                address: "2 Oak Ave".to_string(),
                photo: "https://example.com/jane.jpg".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let owner = state.owner_service.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(owner.name(), "Jane Smith");

    assert!(state.owner_service.delete(id).await.unwrap());
    assert!(state.owner_service.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn owner_update_and_delete_report_missing() {
    let state = app().await;
    let missing = Uuid::new_v4();

    let updated = state
        .owner_service
        .update(
            missing,
            UpdateOwner {
                name: "Ghost".to_string(),
                address: String::new(),
                photo: String::new(),
            },
        )
        .await
        .unwrap();
    assert!(!updated);
    assert!(!state.owner_service.delete(missing).await.unwrap());
}

#[tokio::test]
async fn property_round_trip() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;

    let created = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let property = state
        .property_service
        .get_by_id(created.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(property.name(), "Casa Centro");
    assert_eq!(property.price().amount(), 150_000.0);
    assert_eq!(property.price().currency(), "USD");
    assert_eq!(property.year(), 2020);
    assert_eq!(property.area(), 100.0);
    assert_eq!(property.owner_id(), owner_id);
    assert!(property.active());
    assert_eq!(property.address().city(), "Springfield");

    let updated = state
        .property_service
        .update(
            created.id(),
            UpdateProperty {
                name: "Casa Centro Remodeled".to_string(),
                street: "100 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "USA".to_string(),
                zip_code: "62701".to_string(),
                year: 2021,
                area: 110.0,
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let property = state
        .property_service
        .get_by_id(created.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(property.name(), "Casa Centro Remodeled");
    assert_eq!(property.year(), 2021);
    // price untouched by the basic update
    assert_eq!(property.price().amount(), 150_000.0);

    assert!(state.property_service.delete(created.id()).await.unwrap());
    assert!(state
        .property_service
        .get_by_id(created.id())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn property_requires_known_owner() {
    let state = app().await;

    let result = state
        .property_service
        .create(sample_property(Uuid::new_v4()))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::UnknownOwner(_)))
    ));
}

#[tokio::test]
async fn update_price_changes_only_the_price() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let created = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let updated = state
        .property_service
        .update_price(
            created.id(),
            PriceUpdate {
                amount: 175_500.5,
                currency: "USD".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let property = state
        .property_service
        .get_by_id(created.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(property.price().amount(), 175_500.5);
    assert_eq!(property.name(), "Casa Centro");

    let missing = state
        .property_service
        .update_price(
            Uuid::new_v4(),
            PriceUpdate {
                amount: 1.0,
                currency: "USD".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(!missing);
}

#[tokio::test]
async fn concurrent_price_update_and_delete_settle_cleanly() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let id = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap()
        .id();

    let update = tokio::spawn({
        let service = state.property_service.clone();
        async move {
            service
                .update_price(
                    id,
                    PriceUpdate {
                        amount: 199_000.0,
                        currency: "USD".to_string(),
                    },
                )
                .await
        }
    });
    let delete = tokio::spawn({
        let service = state.property_service.clone();
        async move { service.delete(id).await }
    });

    // Whatever the interleaving, neither side may error: the loser just
    // reports that no row matched.
    let updated = update.await.unwrap().unwrap();
    let deleted = delete.await.unwrap().unwrap();
    assert!(deleted);
    let _ = updated;

    // After the delete has settled the row is gone and any further
    // update finds nothing to match.
    assert!(state.property_service.get_by_id(id).await.unwrap().is_none());
    let late = state
        .property_service
        .update_price(
            id,
            PriceUpdate {
                amount: 1.0,
                currency: "USD".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(!late);
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let mut request = sample_property(owner_id);
    request.price = -1.0;

    let result = state.property_service.create(request).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn image_flow() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let property = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let image = state
        .image_service
        .create(CreateImage {
            property_id: property.id(),
            url: "https://example.com/front.jpg".to_string(),
            description: "front".to_string(),
            enabled: true,
        })
        .await
        .unwrap();

    let images = state
        .image_service
        .get_by_property_id(property.id())
        .await
        .unwrap();
    assert_eq!(images.len(), 1);
    assert!(images[0].enabled());

    assert!(state
        .image_service
        .set_enabled(image.id(), false)
        .await
        .unwrap());
    let images = state
        .image_service
        .get_by_property_id(property.id())
        .await
        .unwrap();
    assert!(!images[0].enabled());

    assert!(state.image_service.delete(image.id()).await.unwrap());
    assert!(!state.image_service.delete(image.id()).await.unwrap());
}

#[tokio::test]
async fn image_url_must_be_http() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let property = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let result = state
        .image_service
        .create(CreateImage {
            property_id: property.id(),
            url: "ftp://example.com/front.jpg".to_string(),
            description: String::new(),
            enabled: true,
        })
        .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn trace_flow() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let property = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let trace = state
        .trace_service
        .create(CreateTrace {
            property_id: property.id(),
            date_utc: Utc::now(),
            description: "Initial sale".to_string(),
            amount: 140_000.0,
            currency: "USD".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(trace.value().amount(), 140_000.0);

    let traces = state
        .trace_service
        .get_by_property_id(property.id())
        .await
        .unwrap();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].description(), "Initial sale");

    assert!(state.trace_service.delete(trace.id()).await.unwrap());
}

#[tokio::test]
async fn trace_rejects_far_future_dates() {
    let state = app().await;
    let owner_id = seed_owner(&state).await;
    let property = state
        .property_service
        .create(sample_property(owner_id))
        .await
        .unwrap();

    let result = state
        .trace_service
        .create(CreateTrace {
            property_id: property.id(),
            date_utc: Utc::now() + chrono::Duration::days(30),
            description: "Future sale".to_string(),
            amount: 1.0,
            currency: "USD".to_string(),
        })
        .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}
