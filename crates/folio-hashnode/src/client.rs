//! HTTP client for the Hashnode GraphQL endpoint.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{HashnodeError, Result};
use crate::model::{
    Envelope, Post, PostPublication, PostsPublication, PublicationData, Tag, TagsPublication,
};
use crate::query::GraphQlRequest;

/// Public Hashnode GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://gql.hashnode.com";

pub const TOKEN_ENV: &str = "HASHNODE_TOKEN";
pub const PUBLICATION_ENV: &str = "HASHNODE_PUBLICATION_ID";
pub const ENDPOINT_ENV: &str = "HASHNODE_ENDPOINT";

/// Connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashnodeConfig {
    pub endpoint: String,
    /// Personal access token; anonymous when absent.
    pub token: Option<String>,
    pub publication_id: String,
}

impl HashnodeConfig {
    pub fn new(publication_id: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            publication_id: publication_id.into(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Read `HASHNODE_PUBLICATION_ID`, `HASHNODE_TOKEN` and `HASHNODE_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let publication_id =
            non_empty(PUBLICATION_ENV).ok_or(HashnodeError::MissingConfig(PUBLICATION_ENV))?;
        let mut config = Self::new(publication_id);
        config.token = non_empty(TOKEN_ENV);
        if let Some(endpoint) = non_empty(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Value of the `Authorization` header; empty without a token.
    pub fn authorization(&self) -> String {
        match &self.token {
            Some(token) => format!("Bearer {token}"),
            None => String::new(),
        }
    }
}

/// Client bound to one publication.
#[derive(Debug, Clone)]
pub struct HashnodeClient {
    http: reqwest::Client,
    config: HashnodeConfig,
}

impl HashnodeClient {
    /// Client for the public endpoint.
    pub fn new(token: Option<&str>, publication_id: &str) -> Result<Self> {
        let mut config = HashnodeConfig::new(publication_id);
        config.token = token.map(str::to_string);
        Self::from_config(config)
    }

    pub fn from_config(config: HashnodeConfig) -> Result<Self> {
        if config.publication_id.trim().is_empty() {
            return Err(HashnodeError::MissingConfig(PUBLICATION_ENV));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("folio-hashnode/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &HashnodeConfig {
        &self.config
    }

    /// The latest `first` posts of the publication.
    pub async fn posts(&self, first: u32) -> Result<Vec<Post>> {
        let request = GraphQlRequest::posts(&self.config.publication_id, first);
        let publication: PostsPublication = self.execute(&request).await?;
        Ok(publication
            .posts
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect())
    }

    /// A single post with rendered HTML, `None` if the slug is unknown.
    pub async fn post(&self, slug: &str) -> Result<Option<Post>> {
        let request = GraphQlRequest::post(&self.config.publication_id, slug);
        let publication: PostPublication = self.execute(&request).await?;
        Ok(publication.post)
    }

    /// All tags used by the publication.
    pub async fn tags(&self) -> Result<Vec<Tag>> {
        let request = GraphQlRequest::tags(&self.config.publication_id);
        let publication: TagsPublication = self.execute(&request).await?;
        Ok(publication.tags.unwrap_or_default())
    }

    async fn execute<P: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<P> {
        debug!(endpoint = %self.config.endpoint, "sending GraphQL request");
        let response = self
            .http
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, self.config.authorization())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "GraphQL request failed");
            return Err(HashnodeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        decode_publication(&body, &self.config.publication_id)
    }
}

/// Decode a response body into the `publication` payload.
pub(crate) fn decode_publication<P: DeserializeOwned>(body: &str, publication_id: &str) -> Result<P> {
    let envelope: Envelope<PublicationData<P>> = serde_json::from_str(body)?;

    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(HashnodeError::GraphQl(message));
    }

    envelope
        .data
        .and_then(|data| data.publication)
        .ok_or_else(|| HashnodeError::MissingPublication(publication_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const POSTS_RESPONSE: &str = r##"{
        "data": {
            "publication": {
                "posts": {
                    "edges": [
                        {
                            "node": {
                                "id": "p1",
                                "title": "Hello",
                                "brief": "First post",
                                "slug": "hello",
                                "dateAdded": "2024-01-02T03:04:05.000Z",
                                "coverImage": { "url": "https://cdn.example/cover.png" },
                                "content": { "markdown": "# Hello" },
                                "tags": [{ "name": "Rust", "slug": "rust" }]
                            }
                        },
                        {
                            "node": {
                                "id": "p2",
                                "title": "Untitled",
                                "brief": "",
                                "slug": "untitled",
                                "coverImage": null,
                                "content": { "markdown": "" },
                                "tags": []
                            }
                        }
                    ]
                }
            }
        }
    }"##;

    #[test]
    fn test_decode_posts() {
        let publication: PostsPublication = decode_publication(POSTS_RESPONSE, "pub").unwrap();
        let posts: Vec<Post> = publication.posts.edges.into_iter().map(|e| e.node).collect();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "hello");
        assert_eq!(
            posts[0].cover_image.as_ref().map(|c| c.url.as_str()),
            Some("https://cdn.example/cover.png")
        );
        assert_eq!(posts[0].tags.as_ref().unwrap()[0].slug, "rust");
        assert!(posts[1].cover_image.is_none());
        assert!(posts[1].date_added.is_none());
    }

    #[test]
    fn test_decode_single_post() {
        let body = r##"{"data":{"publication":{"post":{
            "id":"p1","title":"Hello","brief":"b","slug":"hello",
            "content":{"markdown":"# Hello","html":"<h1>Hello</h1>"}
        }}}}"##;
        let publication: PostPublication = decode_publication(body, "pub").unwrap();
        let post = publication.post.unwrap();

        assert_eq!(post.content.unwrap().html.as_deref(), Some("<h1>Hello</h1>"));
    }

    #[test]
    fn test_decode_unknown_post() {
        let body = r#"{"data":{"publication":{"post":null}}}"#;
        let publication: PostPublication = decode_publication(body, "pub").unwrap();
        assert!(publication.post.is_none());
    }

    #[test]
    fn test_decode_tags() {
        let body = r#"{"data":{"publication":{"tags":[
            {"name":"Rust","slug":"rust","postsCount":3},
            {"name":"Web","slug":"web"}
        ]}}}"#;
        let publication: TagsPublication = decode_publication(body, "pub").unwrap();
        let tags = publication.tags.unwrap();

        assert_eq!(tags[0].posts_count, Some(3));
        assert_eq!(tags[1].posts_count, None);
    }

    #[test]
    fn test_graphql_errors_surface() {
        let body = r#"{"data":null,"errors":[{"message":"Invalid ObjectId"},{"message":"Second"}]}"#;
        let err = decode_publication::<TagsPublication>(body, "pub").unwrap_err();

        match err {
            HashnodeError::GraphQl(message) => assert_eq!(message, "Invalid ObjectId; Second"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_publication() {
        let body = r#"{"data":{"publication":null}}"#;
        let err = decode_publication::<TagsPublication>(body, "nope").unwrap_err();
        assert!(matches!(err, HashnodeError::MissingPublication(id) if id == "nope"));
    }

    #[test]
    fn test_malformed_body() {
        let err = decode_publication::<TagsPublication>("<html>", "pub").unwrap_err();
        assert!(matches!(err, HashnodeError::Decode(_)));
    }

    #[test]
    fn test_authorization_header() {
        let anonymous = HashnodeConfig::new("pub");
        assert_eq!(anonymous.authorization(), "");
        assert_eq!(anonymous.with_token("abc").authorization(), "Bearer abc");
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (PUBLICATION_ENV, "pub-1"),
            (TOKEN_ENV, ""),
            (ENDPOINT_ENV, "http://localhost:4000/graphql"),
        ]);
        let config =
            HashnodeConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string())).unwrap();

        assert_eq!(config.publication_id, "pub-1");
        assert_eq!(config.token, None);
        assert_eq!(config.endpoint, "http://localhost:4000/graphql");
    }

    #[test]
    fn test_config_requires_publication() {
        let err = HashnodeConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, HashnodeError::MissingConfig(PUBLICATION_ENV)));
    }

    #[test]
    fn test_client_rejects_empty_publication() {
        assert!(matches!(
            HashnodeClient::new(None, " "),
            Err(HashnodeError::MissingConfig(_))
        ));
    }
}
