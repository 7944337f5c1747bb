//! Backend payload fixtures

use serde_json::{Value, json};

/// One physiotherapist as the backend serialises it
pub fn physiotherapist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "specializations": ["Sports Physiotherapy"],
        "experienceYears": 8,
        "rating": 4.7,
        "reviewCount": 112,
        "address": { "city": "Pune", "state": "Maharashtra" },
        "fees": { "consultationFee": 800.0, "homeVisitFee": 1200.0 },
        "isVerified": true,
        "isAvailable": true
    })
}

/// A result with a numeric id and nulls where values are expected
pub fn sparse_physiotherapist(id: u64) -> Value {
    json!({
        "id": id,
        "name": null,
        "specializations": null,
        "experienceYears": null,
        "rating": null,
        "reviewCount": null,
        "address": null,
        "isVerified": null,
        "isAvailable": null
    })
}

/// Successful search envelope with pagination
pub fn search_page(results: Vec<Value>, total: u64) -> Value {
    json!({
        "success": true,
        "data": results,
        "pagination": { "total": total }
    })
}

/// Successful envelope around arbitrary data
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// Envelope reporting a failure with HTTP 200
pub fn failure(message: &str) -> Value {
    json!({ "success": false, "message": message })
}
