//! Every serde rename_all rule maps field names the way serde does

use docwire_core::field::Entity;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "lowercase")]
struct Lower {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "UPPERCASE")]
struct Upper {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Pascal {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "camelCase")]
struct Camel {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "snake_case")]
struct Snake {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct ScreamingSnake {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "kebab-case")]
struct Kebab {
    view_count: i32,
}

#[derive(Serialize, Entity)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
struct ScreamingKebab {
    view_count: i32,
    #[serde(rename = "id")]
    record_id: i64,
}

fn main() {
    assert_eq!(Lower::fields().view_count().resolve().unwrap(), "view_count");
    assert_eq!(Upper::fields().view_count().resolve().unwrap(), "VIEW_COUNT");
    assert_eq!(Pascal::fields().view_count().resolve().unwrap(), "ViewCount");
    assert_eq!(Camel::fields().view_count().resolve().unwrap(), "viewCount");
    assert_eq!(Snake::fields().view_count().resolve().unwrap(), "view_count");
    assert_eq!(ScreamingSnake::fields().view_count().resolve().unwrap(), "VIEW_COUNT");
    assert_eq!(Kebab::fields().view_count().resolve().unwrap(), "view-count");
    assert_eq!(ScreamingKebab::fields().view_count().resolve().unwrap(), "VIEW-COUNT");
    assert_eq!(ScreamingKebab::fields().record_id().resolve().unwrap(), "id");
}
