//! Canned JSON response bodies

use serde_json::{Value, json};

pub fn user_response() -> Value {
    json!({
        "id": "42",
        "name": "Ada Lovelace",
        "email": "ada@example.com"
    })
}

pub fn user_list_response() -> Value {
    json!([
        { "id": "42", "name": "Ada Lovelace", "email": "ada@example.com" },
        { "id": "43", "name": "Grace Hopper", "email": "grace@example.com" }
    ])
}

pub fn user_page_response() -> Value {
    json!({
        "content": [
            { "id": "42", "name": "Ada Lovelace", "email": "ada@example.com" }
        ],
        "number": 0,
        "size": 20,
        "totalElements": 1,
        "totalPages": 1
    })
}
