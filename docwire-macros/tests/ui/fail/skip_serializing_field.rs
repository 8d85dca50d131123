//! A field marked `#[serde(skip_serializing)]` has no selector

use docwire_core::field::Entity;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    title: String,
    #[serde(skip_serializing)]
    draft_notes: String,
}

fn main() {
    let _ = Post::fields().draft_notes();
}
