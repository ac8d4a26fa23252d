//! Integration tests for login, logout, profile operations, and session
//! storage.

use std::sync::Arc;

use memoria_client::auth::{self, AuthError};
use memoria_client::{
    ApiConfig, BaseUrl, HttpClient, MemorySessionStore, Session, SessionStore,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn create_http_client(server: &MockServer) -> (HttpClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    store.set_session(Session::new(
        "A1",
        Some("R1".to_string()),
        Some(json!({"oidpersona": 7, "nombre": "Ana"})),
    ));
    let client = HttpClient::new(&create_config(server), Arc::clone(&store) as Arc<dyn SessionStore>);
    (client, store)
}

#[tokio::test]
async fn test_successful_login_stores_session() {
    let server = MockServer::start().await;
    let config = create_config(&server);
    let store = MemorySessionStore::new();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({
            "correo": "ana@frre.utn.edu.ar",
            "contrasena": "secreta"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "Login exitoso",
            "persona": {"oidpersona": 7, "nombre": "Ana", "apellido": "Gómez"},
            "tokens": {"access": "A1", "refresh": "R1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = auth::login(&config, &store, "ana@frre.utn.edu.ar", "secreta")
        .await
        .unwrap();

    assert_eq!(response.mensaje.as_deref(), Some("Login exitoso"));
    assert!(auth::is_authenticated(&store));
    assert_eq!(store.access_token(), Some("A1".to_string()));
    assert_eq!(store.refresh_token(), Some("R1".to_string()));
    assert_eq!(
        store.user_profile().unwrap()["nombre"],
        json!("Ana")
    );
}

#[tokio::test]
async fn test_rejected_login_surfaces_backend_message() {
    let server = MockServer::start().await;
    let config = create_config(&server);
    let store = MemorySessionStore::new();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Credenciales inválidas"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = auth::login(&config, &store, "ana@frre.utn.edu.ar", "incorrecta").await;

    match result {
        Err(AuthError::LoginFailed { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Credenciales inválidas");
        }
        other => panic!("Expected LoginFailed, got: {other:?}"),
    }
    assert!(!auth::is_authenticated(&store));
}

#[tokio::test]
async fn test_login_without_tokens_leaves_store_untouched() {
    let server = MockServer::start().await;
    let config = create_config(&server);
    let store = MemorySessionStore::new();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"mensaje": "Cambio de clave requerido"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = auth::login(&config, &store, "ana@frre.utn.edu.ar", "secreta")
        .await
        .unwrap();

    assert!(response.tokens.is_none());
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_logout_after_login_clears_session() {
    let server = MockServer::start().await;
    let config = create_config(&server);
    let store = MemorySessionStore::new();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": {"access": "A1", "refresh": "R1"}
        })))
        .mount(&server)
        .await;

    auth::login(&config, &store, "ana@frre.utn.edu.ar", "secreta")
        .await
        .unwrap();
    assert!(auth::is_authenticated(&store));

    auth::logout(&store);

    assert!(!auth::is_authenticated(&store));
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_profile_fetch_unwraps_persona_envelope() {
    let server = MockServer::start().await;
    let (client, _store) = create_http_client(&server);

    Mock::given(method("GET"))
        .and(path("/auth/perfil/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "persona": {"oidpersona": 7, "nombre": "Ana", "apellido": "Gómez"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let persona = auth::profile(&client, 7).await.unwrap();

    assert_eq!(persona["nombre"], "Ana");
    assert_eq!(persona["oidpersona"], 7);
}

#[tokio::test]
async fn test_profile_fetch_surfaces_backend_error() {
    let server = MockServer::start().await;
    let (client, _store) = create_http_client(&server);

    Mock::given(method("GET"))
        .and(path("/auth/perfil/99/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Persona no encontrada"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = auth::profile(&client, 99).await;

    match result {
        Err(AuthError::ProfileFailed { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Persona no encontrada");
        }
        other => panic!("Expected ProfileFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_profile_update_rewrites_stored_profile() {
    let server = MockServer::start().await;
    let (client, store) = create_http_client(&server);

    Mock::given(method("PUT"))
        .and(path("/auth/perfil/7/actualizar/"))
        .and(body_json(json!({"nombre": "Ana María"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "Perfil actualizado exitosamente",
            "persona": {"oidpersona": 7, "nombre": "Ana María", "apellido": "Gómez"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = auth::update_profile(&client, 7, json!({"nombre": "Ana María"}))
        .await
        .unwrap();

    assert_eq!(
        response.mensaje.as_deref(),
        Some("Perfil actualizado exitosamente")
    );
    // The session's profile tracks the backend's echoed record.
    let profile = store.user_profile().unwrap();
    assert_eq!(profile["nombre"], "Ana María");
    // Tokens survive a profile update.
    assert_eq!(store.access_token(), Some("A1".to_string()));
}

#[tokio::test]
async fn test_change_password_sends_expected_body() {
    let server = MockServer::start().await;
    let (client, _store) = create_http_client(&server);

    Mock::given(method("POST"))
        .and(path("/auth/perfil/7/cambiar-contrasena/"))
        .and(body_json(json!({
            "currentPassword": "vieja",
            "newPassword": "nueva-segura"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "Contraseña actualizada exitosamente"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mensaje = auth::change_password(&client, 7, "vieja", "nueva-segura")
        .await
        .unwrap();

    assert_eq!(mensaje.as_deref(), Some("Contraseña actualizada exitosamente"));
}

#[tokio::test]
async fn test_change_password_rejection_surfaces_message() {
    let server = MockServer::start().await;
    let (client, _store) = create_http_client(&server);

    Mock::given(method("POST"))
        .and(path("/auth/perfil/7/cambiar-contrasena/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "La contraseña actual es incorrecta"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = auth::change_password(&client, 7, "equivocada", "nueva").await;

    match result {
        Err(AuthError::ProfileFailed { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "La contraseña actual es incorrecta");
        }
        other => panic!("Expected ProfileFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_profile_options_returns_option_lists() {
    let server = MockServer::start().await;
    let (client, _store) = create_http_client(&server);

    Mock::given(method("GET"))
        .and(path("/auth/opciones-perfil/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tiposPersonal": [{"id": 1, "nombre": "Investigador"}],
            "grupos": [{"id": 3, "nombre": "Sistemas Inteligentes"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = auth::profile_options(&client).await.unwrap();

    assert_eq!(options["tiposPersonal"][0]["nombre"], "Investigador");
    assert_eq!(options["grupos"][0]["id"], 3);
}

#[tokio::test]
async fn test_refresh_endpoint_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = BaseUrl::new(server.uri()).unwrap();
    let access = auth::refresh_access_token(&client, &base_url, "R1")
        .await
        .unwrap();

    assert_eq!(access, "A2");
}

#[tokio::test]
async fn test_refresh_rejection_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token inválido"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = BaseUrl::new(server.uri()).unwrap();
    let result = auth::refresh_access_token(&client, &base_url, "expired").await;

    match result {
        Err(AuthError::RefreshFailed { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Token inválido"));
        }
        other => panic!("Expected RefreshFailed, got: {other:?}"),
    }
}
