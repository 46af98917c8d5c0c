//! `responseSchema` payloads sent with each request.
//!
//! Gemini uses an OpenAPI-style subset with upper-case type names.

use serde_json::{Value, json};

pub fn syllabus() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "name": { "type": "STRING" },
                "subtopics": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "STRING" },
                            "name": { "type": "STRING" }
                        },
                        "required": ["id", "name"]
                    }
                }
            },
            "required": ["id", "name", "subtopics"]
        }
    })
}

pub fn mapped_questions() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "text": { "type": "STRING" },
                "allottedMarks": { "type": "NUMBER" },
                "mappedTopicId": { "type": "STRING" },
                "mappedSubtopicId": { "type": "STRING" }
            },
            "required": ["text", "allottedMarks", "mappedTopicId"]
        }
    })
}

pub fn recommendations() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "topicId": { "type": "STRING" },
                "suggestion": { "type": "STRING" },
                "priority": { "type": "STRING", "description": "High, Medium, or Low" }
            },
            "required": ["topicId", "suggestion", "priority"]
        }
    })
}
