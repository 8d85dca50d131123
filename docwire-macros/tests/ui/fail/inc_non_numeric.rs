//! inc only accepts numeric fields

use docwire_core::typed::TypedUpdate;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    title: String,
}

fn main() {
    let mut update = TypedUpdate::<Post>::new();
    let _ = update.inc(|p| p.title(), String::from("1"));
}
