//! CRUD wrapper for the user resource.
//!
//! Ids are `u64` throughout, matching the wire format; the wrapper does
//! not accept stringly-typed ids anywhere.

use reqwest::StatusCode;
use tracing::info;

use webapi::{ApiError, CheckedResponse, RequestSpec, WebClient};

use crate::models::UserDto;

const USERS: &str = "/users";
const USER_BY_ID: &str = "/users/{userId}";

/// Typed CRUD operations for `/users`.
#[derive(Debug)]
pub struct UserEndpoint {
    client: WebClient,
}

impl UserEndpoint {
    /// Creates the wrapper from a request specification.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(spec: RequestSpec) -> Result<Self, ApiError> {
        Ok(Self {
            client: WebClient::new(spec)?,
        })
    }

    /// Creates a user and returns the server's copy of it.
    ///
    /// Asserts HTTP 201 Created.
    pub async fn create(&self, user: &UserDto) -> Result<UserDto, ApiError> {
        self.try_create(user, StatusCode::CREATED).await?.json()
    }

    /// Creates a user, asserting `expect` instead of 201, and returns the
    /// raw validated response.
    pub async fn try_create(
        &self,
        user: &UserDto,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!("create new user");
        self.client.post(USERS, user).await?.expect_status(expect)
    }

    /// Replaces the user with id `id` and returns the server's copy.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn update(&self, id: u64, user: &UserDto) -> Result<UserDto, ApiError> {
        self.try_update(user, id, StatusCode::OK).await?.json()
    }

    /// Replaces the user with id `id`, asserting `expect`, and returns the
    /// raw validated response.
    pub async fn try_update(
        &self,
        user: &UserDto,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "update user");
        let id = id.to_string();
        self.client
            .put(USER_BY_ID, user, &[("userId", id.as_str())])
            .await?
            .expect_status(expect)
    }

    /// Fetches the user with id `id`.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn get_by_id(&self, id: u64) -> Result<UserDto, ApiError> {
        self.try_get_by_id(id, StatusCode::OK).await?.json()
    }

    /// Fetches the user with id `id`, asserting `expect`, and returns the
    /// raw validated response.
    pub async fn try_get_by_id(
        &self,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "get user by id");
        let id = id.to_string();
        self.client
            .get(USER_BY_ID, &[("userId", id.as_str())])
            .await?
            .expect_status(expect)
    }

    /// Fetches every user on the server.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn get_all(&self) -> Result<Vec<UserDto>, ApiError> {
        self.try_get_all(StatusCode::OK).await?.json()
    }

    /// Fetches the user collection, asserting `expect`, and returns the
    /// raw validated response.
    pub async fn try_get_all(&self, expect: StatusCode) -> Result<CheckedResponse, ApiError> {
        info!("get all users");
        self.client.get(USERS, &[]).await?.expect_status(expect)
    }

    /// Deletes the user with id `id`.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.try_delete(id, StatusCode::OK).await?;
        Ok(())
    }

    /// Deletes the user with id `id`, asserting `expect`, and returns the
    /// raw validated response.
    pub async fn try_delete(
        &self,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "delete user");
        let id = id.to_string();
        self.client
            .delete(USER_BY_ID, &[("userId", id.as_str())])
            .await?
            .expect_status(expect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixture() -> UserDto {
        UserDto {
            id: None,
            name: "Ann Example".to_string(),
            username: "ann".to_string(),
            email: "ann@example.com".to_string(),
            ..Default::default()
        }
    }

    async fn endpoint(server: &MockServer) -> UserEndpoint {
        let spec = RequestSpec::builder(Url::parse(&server.uri()).unwrap()).build();
        UserEndpoint::new(spec).unwrap()
    }

    #[tokio::test]
    async fn test_create_round_trips_submitted_fields() {
        let mock_server = MockServer::start().await;
        let sent = fixture();
        let mut stored = sent.clone();
        stored.id = Some(11);

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(&sent))
            .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
            .mount(&mock_server)
            .await;

        let created = endpoint(&mock_server).await.create(&sent).await.unwrap();
        assert_eq!(created.id, Some(11));
        assert_eq!(created.username, sent.username);
        assert_eq!(created.email, sent.email);
    }

    #[tokio::test]
    async fn test_create_conflict_negative_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"error": "username taken"})),
            )
            .mount(&mock_server)
            .await;

        let response = endpoint(&mock_server)
            .await
            .try_create(&fixture(), StatusCode::CONFLICT)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_then_get_reflects_new_fields() {
        let mock_server = MockServer::start().await;
        let mut updated = fixture();
        updated.id = Some(2);
        updated.email = "new@example.com".to_string();

        Mock::given(method("PUT"))
            .and(path("/users/2"))
            .and(body_json(&updated))
            .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
            .mount(&mock_server)
            .await;

        let users = endpoint(&mock_server).await;
        let put_back = users.update(2, &updated).await.unwrap();
        assert_eq!(put_back.email, "new@example.com");

        let re_read = users.get_by_id(2).await.unwrap();
        assert_eq!(re_read, updated);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_matching_id() {
        let mock_server = MockServer::start().await;
        let mut stored = fixture();
        stored.id = Some(4);

        Mock::given(method("GET"))
            .and(path("/users/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .mount(&mock_server)
            .await;

        let user = endpoint(&mock_server).await.get_by_id(4).await.unwrap();
        assert_eq!(user.id, Some(4));
    }

    #[tokio::test]
    async fn test_get_by_id_unexpected_status_fails_fast() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/8"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let err = endpoint(&mock_server).await.get_by_id(8).await.unwrap_err();
        assert!(err.is_status_mismatch());
        assert_eq!(err.actual_status(), Some(404));
    }

    #[tokio::test]
    async fn test_get_all_returns_every_user() {
        let mock_server = MockServer::start().await;
        let stored: Vec<UserDto> = (1..=2)
            .map(|i| {
                let mut u = fixture();
                u.id = Some(i);
                u
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .mount(&mock_server)
            .await;

        let all = endpoint(&mock_server).await.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all, stored);
    }

    #[tokio::test]
    async fn test_delete() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        endpoint(&mock_server).await.delete(5).await.unwrap();
    }
}
