//! array operators take values of the collection's element type

use docwire_core::typed::TypedUpdate;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    scores: Vec<i32>,
}

fn main() {
    let mut update = TypedUpdate::<Post>::new();
    let _ = update.push(|p| p.scores(), "NoSql");
}
