mod common;

use std::time::Duration;

use tokio::time::timeout;
use velu_mobile::stores::{LoadingState, LoadingStore, NavigationDirection, NavigationStore};

#[test]
fn loading_starts_idle_with_the_default_message() {
    let store = LoadingStore::new();

    assert!(!store.is_loading());
    assert_eq!(store.message(), LoadingState::DEFAULT_MESSAGE);
}

#[test]
fn loading_message_survives_turning_off() {
    let store = LoadingStore::new();

    store.set_loading(true, Some("Guardando tu pedido..."));
    assert!(store.is_loading());
    assert_eq!(store.message(), "Guardando tu pedido...");

    // Turning the overlay off must not blank the text mid-fade.
    store.set_loading(false, None);
    assert!(!store.is_loading());
    assert_eq!(store.message(), "Guardando tu pedido...");
}

#[test]
fn loading_without_a_message_uses_the_default() {
    let store = LoadingStore::new();

    store.set_loading(true, Some("Sincronizando..."));
    store.set_loading(false, None);
    store.set_loading(true, None);

    assert_eq!(store.message(), LoadingState::DEFAULT_MESSAGE);
}

#[tokio::test]
async fn loading_subscription_observes_changes() {
    let store = LoadingStore::new();
    let mut sub = store.subscribe();

    store.set_loading(true, Some("Cargando productos..."));

    let state = timeout(Duration::from_secs(1), sub.next())
        .await
        .unwrap()
        .unwrap();
    assert!(state.is_loading);
    assert_eq!(state.message, "Cargando productos...");
}

#[test]
fn loading_state_serializes_for_the_bridge() {
    let state = LoadingState::default();

    assert_eq!(
        serde_json::to_string(&state).unwrap(),
        r#"{"isLoading":false,"message":"Cargando..."}"#
    );
}

#[test]
fn navigation_defaults_to_forward() {
    let store = NavigationStore::new();

    assert_eq!(store.direction(), NavigationDirection::Forward);
}

#[test]
fn navigation_direction_round_trips() {
    let store = NavigationStore::new();

    store.set_direction(NavigationDirection::Backward);
    assert_eq!(store.direction(), NavigationDirection::Backward);

    store.set_direction(NavigationDirection::Forward);
    assert_eq!(store.direction(), NavigationDirection::Forward);
}

#[test]
fn navigation_direction_parses_its_own_display() {
    for direction in [NavigationDirection::Forward, NavigationDirection::Backward] {
        let parsed: NavigationDirection = direction.to_string().parse().unwrap();
        assert_eq!(parsed, direction);
    }

    assert!("sideways".parse::<NavigationDirection>().is_err());
}

#[test]
fn navigation_direction_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&NavigationDirection::Backward).unwrap(),
        r#""backward""#
    );
}

#[tokio::test]
async fn navigation_subscription_observes_changes() {
    let store = NavigationStore::new();
    let mut sub = store.subscribe();

    store.set_direction(NavigationDirection::Backward);

    let seen = timeout(Duration::from_secs(1), sub.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(seen, NavigationDirection::Backward);
}
