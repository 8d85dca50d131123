//! A field marked `#[serde(flatten)]` has no selector

use docwire_core::field::Entity;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    title: String,
    #[serde(flatten)]
    extra: std::collections::BTreeMap<String, String>,
}

fn main() {
    let _ = Post::fields().extra();
}
