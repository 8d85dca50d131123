//! A field marked `#[serde(skip)]` has no selector

use docwire_core::field::Entity;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    title: String,
    #[serde(skip)]
    cached_html: Option<String>,
}

fn main() {
    let _ = Post::fields().cached_html();
}
