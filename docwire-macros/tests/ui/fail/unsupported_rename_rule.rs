//! rename_all rules serde does not define are rejected

use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "Title Case")]
struct Post {
    title: String,
}

fn main() {}
