//! CRUD wrapper for the comment resource.

use reqwest::StatusCode;
use tracing::info;

use webapi::{ApiError, CheckedResponse, RequestSpec, WebClient};

use crate::models::CommentDto;

const COMMENTS: &str = "/comments";
const COMMENT_BY_ID: &str = "/comments/{commentId}";

/// Typed CRUD operations for `/comments`.
///
/// Stateless beyond the client configured at construction; safe to share
/// across tests.
#[derive(Debug)]
pub struct CommentEndpoint {
    client: WebClient,
}

impl CommentEndpoint {
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

    /// Creates a comment and returns the server's copy of it.
    ///
    /// Asserts HTTP 201 Created.
    pub async fn create(&self, comment: &CommentDto) -> Result<CommentDto, ApiError> {
        self.try_create(comment, StatusCode::CREATED).await?.json()
    }

    /// Creates a comment, asserting `expect` instead of 201, and returns
    /// the raw validated response.
    pub async fn try_create(
        &self,
        comment: &CommentDto,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!("create new comment");
        self.client
            .post(COMMENTS, comment)
            .await?
            .expect_status(expect)
    }

    /// Replaces the comment with id `id` and returns the server's copy.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn update(&self, id: u64, comment: &CommentDto) -> Result<CommentDto, ApiError> {
        self.try_update(comment, id, StatusCode::OK).await?.json()
    }

    /// Replaces the comment with id `id`, asserting `expect`, and returns
    /// the raw validated response.
    pub async fn try_update(
        &self,
        comment: &CommentDto,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "update comment");
        let id = id.to_string();
        self.client
            .put(COMMENT_BY_ID, comment, &[("commentId", id.as_str())])
            .await?
            .expect_status(expect)
    }

    /// Fetches the comment with id `id`.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn get_by_id(&self, id: u64) -> Result<CommentDto, ApiError> {
        self.try_get_by_id(id, StatusCode::OK).await?.json()
    }

    /// Fetches the comment with id `id`, asserting `expect`, and returns
    /// the raw validated response.
    pub async fn try_get_by_id(
        &self,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "get comment by id");
        let id = id.to_string();
        self.client
            .get(COMMENT_BY_ID, &[("commentId", id.as_str())])
            .await?
            .expect_status(expect)
    }

    /// Fetches every comment on the server.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn get_all(&self) -> Result<Vec<CommentDto>, ApiError> {
        self.try_get_all(StatusCode::OK).await?.json()
    }

    /// Fetches the comment collection, asserting `expect`, and returns the
    /// raw validated response.
    pub async fn try_get_all(&self, expect: StatusCode) -> Result<CheckedResponse, ApiError> {
        info!("get all comments");
        self.client.get(COMMENTS, &[]).await?.expect_status(expect)
    }

    /// Deletes the comment with id `id`.
    ///
    /// Asserts HTTP 200 OK.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.try_delete(id, StatusCode::OK).await?;
        Ok(())
    }

    /// Deletes the comment with id `id`, asserting `expect`, and returns
    /// the raw validated response.
    pub async fn try_delete(
        &self,
        id: u64,
        expect: StatusCode,
    ) -> Result<CheckedResponse, ApiError> {
        info!(id, "delete comment");
        let id = id.to_string();
        self.client
            .delete(COMMENT_BY_ID, &[("commentId", id.as_str())])
            .await?
            .expect_status(expect)
    }
}
