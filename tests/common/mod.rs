#![allow(dead_code)]

use boardgamegeek_core::prelude::RawData;
use serde_json::Value;

pub fn raw(value: Value) -> RawData {
    match value {
        Value::Object(map) => map,
        other => panic!("test fixture must be a mapping, got {other}"),
    }
}

pub fn hot_entry(rank: u32, name: &str) -> RawData {
    raw(serde_json::json!({ "id": rank * 100, "rank": rank, "name": name }))
}

pub fn hot_list(count: u32) -> RawData {
    let items: Vec<Value> = (1..=count)
        .map(|rank| Value::Object(hot_entry(rank, &format!("Game {rank}"))))
        .collect();
    raw(serde_json::json!({ "items": items }))
}
