//! Entity cannot be derived for enums

use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
enum Status {
    Draft,
    Published,
}

fn main() {}
