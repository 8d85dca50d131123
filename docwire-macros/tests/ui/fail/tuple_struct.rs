//! Entity cannot be derived for tuple structs

use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
struct Score(i32);

fn main() {}
