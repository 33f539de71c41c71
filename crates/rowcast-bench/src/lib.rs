//! Benchmarking suite for rowcast
//!
//! Shared input generators for the criterion benches.

/// Temporal tokens covering the catalog's main layout families.
pub const TEMPORAL_SAMPLES: &[&str] = &[
    "20060317",
    "2006-03-17",
    "17/03/2006",
    "17-Mar-2006",
    "13:27:54",
    "13:27:54.123456",
    "2006-03-17 13:27:54",
    "2006-03-17T13:27:54.123456+02:00",
    "17/Mar/2006:13:27:54 -0537",
    "Sat, 17 Mar 2006 13:27:54 +0325",
];

/// Scalar tokens spread across the evaluation ladder.
pub const SCALAR_SAMPLES: &[&str] = &[
    "",
    "7",
    "1327",
    "-7341",
    "3.141592",
    "12345678901234567890",
    "0x1A",
    "TRUE",
    "None",
    "550e8400-e29b-41d4-a716-446655440000",
    "[1, 2, 3]",
    "192.168.1.1",
    "2001:db8:85a3:0:0:8a2e:370:7334",
    "2006-03-17 13:27:54",
    "an ordinary string token",
];

/// An event log document: constant header fields over `rows` array
/// elements with a couple of nested levels.
pub fn generate_event_log(rows: usize) -> String {
    let mut events = Vec::with_capacity(rows);
    for i in 0..rows {
        events.push(format!(
            r#"{{
                "id": {i},
                "ts": "2024-01-01T10:30:{:02}",
                "level": "{}",
                "message": "event number {i} with some payload text",
                "context": {{
                    "host": "node-{}",
                    "latency_ms": {}.5,
                    "retries": {}
                }}
            }}"#,
            i % 60,
            if i % 7 == 0 { "warn" } else { "info" },
            i % 16,
            i % 250,
            i % 4,
        ));
    }
    format!(
        r#"{{
            "header": {{"version": 3, "source": "bench", "batch": 1}},
            "events": [{}]
        }}"#,
        events.join(",")
    )
}

/// A ragged document set for schema merging: field types and presence
/// vary between documents.
pub fn generate_schema_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!(r#"{{"id": {i}, "name": "doc {i}", "tags": ["a", "b"]}}"#),
            1 => format!(r#"{{"id": "{i}", "score": {i}.25}}"#),
            _ => format!(r#"{{"id": {i}, "nested": {{"depth": {i}, "flag": true}}}}"#),
        })
        .collect()
}
