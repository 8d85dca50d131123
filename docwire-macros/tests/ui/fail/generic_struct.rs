//! Entity cannot be derived for generic structs

use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
struct Page<T> {
    items: Vec<T>,
}

fn main() {}
