//! Typed Hashnode responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brief: String,
    pub slug: String,
    /// ISO-8601 publication date.
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub content: Option<PostContent>,
    #[serde(default)]
    pub tags: Option<Vec<TagRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    #[serde(default)]
    pub markdown: Option<String>,
    /// Only requested for single posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Tag as embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
    pub slug: String,
}

/// Tag with its post count, as listed on the publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub posts_count: Option<u32>,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PublicationData<P> {
    pub publication: Option<P>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostsPublication {
    pub posts: Connection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection {
    pub edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge {
    pub node: Post,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostPublication {
    pub post: Option<Post>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagsPublication {
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}
