//! GraphQL documents and request bodies.

use serde::Serialize;
use serde_json::{Value, json};

pub const POSTS: &str = r#"
query GetPosts($publicationId: ObjectId!, $first: Int!) {
  publication(id: $publicationId) {
    posts(first: $first) {
      edges {
        node {
          id
          title
          brief
          slug
          dateAdded
          coverImage { url }
          content { markdown }
          tags { name slug }
        }
      }
    }
  }
}
"#;

pub const POST: &str = r#"
query GetPost($publicationId: ObjectId!, $slug: String!) {
  publication(id: $publicationId) {
    post(slug: $slug) {
      id
      title
      content { markdown html }
      brief
      slug
      dateAdded
      coverImage { url }
      tags { name slug }
    }
  }
}
"#;

pub const TAGS: &str = r#"
query GetTags($publicationId: ObjectId!) {
  publication(id: $publicationId) {
    tags { name slug postsCount }
  }
}
"#;

/// JSON body of a GraphQL POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn posts(publication_id: &str, first: u32) -> Self {
        Self {
            query: POSTS,
            variables: json!({ "publicationId": publication_id, "first": first }),
        }
    }

    pub fn post(publication_id: &str, slug: &str) -> Self {
        Self {
            query: POST,
            variables: json!({ "publicationId": publication_id, "slug": slug }),
        }
    }

    pub fn tags(publication_id: &str) -> Self {
        Self {
            query: TAGS,
            variables: json!({ "publicationId": publication_id }),
        }
    }
}
