use hoteldesk::error::HoteldeskError;
use hoteldesk::models::Role;
use hoteldesk::resolver::SessionResolver;
use hoteldesk::session::MemorySessionStore;
use mockito::Server;

fn login_endpoint(server: &Server) -> String {
    format!("{}/api/auth/login", server.url())
}

#[tokio::test]
async fn test_login_success_persists_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "t1", "username": "a", "roles": "ADMIN"}"#)
        .create_async()
        .await;

    let resolver = SessionResolver::new(MemorySessionStore::new(), login_endpoint(&server));
    let session = resolver.login("a", "b").await.unwrap();

    assert_eq!(session.token, "t1");
    assert_eq!(session.username(), "a");
    assert_eq!(session.role(), Some(Role::Admin));

    assert!(resolver.is_authenticated());
    assert_eq!(resolver.landing_route(), "/dashboard/admin");

    let current = resolver.current_session().unwrap();
    assert_eq!(current.username(), "a");
    assert_eq!(current.user.role, "ADMIN");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_propagates_and_persists_nothing() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body("Bad credentials")
        .create_async()
        .await;

    let resolver = SessionResolver::new(MemorySessionStore::new(), login_endpoint(&server));
    let err = resolver.login("a", "wrong").await.unwrap_err();

    match err {
        HoteldeskError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!resolver.is_authenticated());
    assert_eq!(resolver.current_session(), None);
}

#[tokio::test]
async fn test_login_empty_token_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "", "username": "a", "roles": "ADMIN"}"#)
        .create_async()
        .await;

    let resolver = SessionResolver::new(MemorySessionStore::new(), login_endpoint(&server));
    let err = resolver.login("a", "b").await.unwrap_err();

    assert!(matches!(err, HoteldeskError::EmptyToken));
    assert!(!resolver.is_authenticated());
}

#[tokio::test]
async fn test_relogin_overwrites_session() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "t1", "username": "a", "roles": "ADMIN"}"#)
        .expect(1)
        .create_async()
        .await;

    let resolver = SessionResolver::new(MemorySessionStore::new(), login_endpoint(&server));
    resolver.login("a", "b").await.unwrap();
    assert_eq!(resolver.landing_route(), "/dashboard/admin");
    first.assert_async().await;

    // Later mocks take priority over earlier ones for the same route
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "t2", "username": "c", "roles": "CLIENT"}"#)
        .create_async()
        .await;

    let session = resolver.login("c", "d").await.unwrap();
    assert_eq!(session.token, "t2");
    assert_eq!(resolver.role(), Some(Role::Client));
    assert_eq!(resolver.landing_route(), "/dashboard/client");
}
