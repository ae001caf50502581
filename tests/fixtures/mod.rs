#![allow(dead_code)]

use serde_json::{Value, json};

pub fn gemini_text_response(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 12,
            "candidatesTokenCount": 7,
            "totalTokenCount": 19
        },
        "modelVersion": "test-model"
    })
}

pub fn gemini_mixed_response() -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "Claim: ", "thoughtSignature": "c2ln" },
                    { "functionCall": { "name": "lookup", "args": {} } },
                    { "text": "unsupported." }
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn gemini_no_candidates_response() -> Value {
    json!({ "candidates": [], "usageMetadata": { "promptTokenCount": 3 } })
}

pub fn gemini_error_body(code: u16, message: &str, status: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}
