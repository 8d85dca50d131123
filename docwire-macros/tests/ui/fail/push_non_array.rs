//! push only accepts collection fields

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
    let _ = update.push(|p| p.title(), "NoSql");
}
