//! Typed operations accept numeric fields for inc and collection fields for array operators

use std::collections::BTreeSet;

use bson::doc;
use docwire_core::typed::TypedUpdate;
use docwire_macros::Entity;
use serde::Serialize;

#[derive(Serialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Post {
    score: i64,
    rating: f64,
    tags: Vec<String>,
    labels: Option<BTreeSet<String>>,
}

fn main() {
    let document = TypedUpdate::<Post>::build_with(|op| {
        op.inc(|p| p.score(), 3)?
            .inc(|p| p.rating(), 0.5)?
            .push(|p| p.tags(), "NoSql")?
            .add_to_set(|p| p.labels(), "featured")?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        document.into_document(),
        doc! {
            "$inc": { "Score": 3i64, "Rating": 0.5 },
            "$push": { "Tags": "NoSql" },
            "$addToSet": { "Labels": "featured" },
        }
    );
}
