#![allow(dead_code)]

use notegen::domain::GenerateResponse;
use serde_json::{json, Value};

/// Response shaped like the server's "summary" notes for a known topic
pub fn summary_response_json() -> Value {
    json!({
        "success": true,
        "topic": "algebra",
        "subject": "mathematics",
        "generated_at": "2024-03-09 10:15:00",
        "notes": {
            "title": "Algebra - Complete Study Guide",
            "subject": "Mathematics",
            "type": "Summary",
            "metadata": {
                "difficulty": "Beginner",
                "reading_time": "9 minutes",
                "sections": 5
            },
            "sections": [
                {
                    "title": "🎯 Key Concepts",
                    "type": "concepts",
                    "content": ["• Variables", "• Equations", "• Functions"]
                },
                {
                    "title": "📋 Important Points",
                    "type": "points",
                    "content": ["• Slope: m = (y₂ - y₁)/(x₂ - x₁)"]
                },
                {
                    "title": "⚡ Quick Reference",
                    "type": "quick",
                    "content": ["• Physics calculations", "• Financial modeling"]
                }
            ]
        }
    })
}

/// Response shaped like the server's fallback notes, with markup and blank items
pub fn default_response_json() -> Value {
    json!({
        "success": true,
        "notes": {
            "title": "Origami - Complete Study Guide",
            "subject": "General",
            "type": "Other",
            "sections": [
                {
                    "title": "📖 Overview",
                    "type": "overview",
                    "content": ["**Topic**: origami", "**Category**: General Study"]
                },
                {
                    "title": "📝 Study Guide",
                    "type": "general",
                    "content": [
                        "**Section 1**: Introduction to origami",
                        "  • Historical background",
                        "",
                        "**Section 2**: Core elements of origami"
                    ]
                },
                {
                    "title": "✅ Review Questions",
                    "type": "practice",
                    "content": ["1. What are the main concepts of origami?"]
                }
            ]
        }
    })
}

pub fn parse(value: Value) -> GenerateResponse {
    serde_json::from_value(value).expect("fixture should deserialize")
}
