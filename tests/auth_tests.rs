use realty_catalog::{
    create_in_memory_app,
    domain::models::{Credentials, RegisterUser},
    AppState, AuthError, AuthService as _, TokenProvider as _,
};

async fn app() -> AppState {
    create_in_memory_app().await.unwrap()
}

fn registration(email: &str) -> RegisterUser {
    RegisterUser {
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        role: "user".to_string(),
    }
}

#[tokio::test]
async fn register_then_login() {
    let state = app().await;

    let issued = state
        .auth_service
        .register(registration("jane@example.com"))
        .await
        .unwrap();
    assert_eq!(issued.email, "jane@example.com");
    assert!(!issued.access_token.is_empty());

    let logged_in = state
        .auth_service
        .login(Credentials {
            email: "jane@example.com".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap();

    let claims = state.tokens.validate(&logged_in.access_token).unwrap();
    assert_eq!(claims.email, "jane@example.com");
    assert_eq!(claims.role, "user");
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
    let state = app().await;
    state
        .auth_service
        .register(registration("jane@example.com"))
        .await
        .unwrap();

    let logged_in = state
        .auth_service
        .login(Credentials {
            email: "Jane@Example.COM".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.email, "jane@example.com");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let state = app().await;
    state
        .auth_service
        .register(registration("jane@example.com"))
        .await
        .unwrap();

    let result = state
        .auth_service
        .register(registration("Jane@example.com"))
        .await;
    assert!(matches!(result, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let state = app().await;
    state
        .auth_service
        .register(registration("jane@example.com"))
        .await
        .unwrap();

    let result = state
        .auth_service
        .login(Credentials {
            email: "jane@example.com".to_string(),
            password: "wrong-pass".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn unknown_email_is_rejected_like_wrong_password() {
    let state = app().await;

    let result = state
        .auth_service
        .login(Credentials {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn garbage_token_does_not_validate() {
    let state = app().await;
    assert!(state.tokens.validate("not.a.token").is_none());
    assert!(state.tokens.validate("").is_none());
}
