//! Fields serde does not serialize directly get no selector, the rest still do

use std::collections::BTreeMap;

use docwire_core::field::Entity;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    title: String,
    #[serde(skip)]
    cached_html: Option<String>,
    #[serde(skip_serializing)]
    draft_notes: String,
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

fn main() {
    let fields = Post::fields();
    assert_eq!(fields.title().resolve().unwrap(), "Title");
    assert_eq!(fields.tags().resolve().unwrap(), "Tags");
}
