//! Source snippets shown under each panel

pub const SCHEMA_GRAPHQL: &str = "## Simple counter schema

type TableName @table @export {
    id: ID! @primaryKey
    count: Int!
}";

pub const GREETING_RS: &str = r#"use yeti_core::prelude::*;

/// Custom greeting resource using concise syntax
resource!(Greeting {
    get => json!({"greeting": "Hello, World!"})
});"#;
