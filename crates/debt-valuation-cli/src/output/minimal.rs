use serde_json::Value;

/// Print just the adjusted value(s) from the output.
///
/// One instrument prints one number; a listing prints `id: value` per line.
pub fn print_minimal(value: &Value) {
    let result = value.get("result").unwrap_or(value);

    match result {
        Value::Object(map) => println!("{}", adjusted_of(map)),
        Value::Array(instruments) => {
            for instrument in instruments {
                if let Value::Object(map) = instrument {
                    let id = map.get("id").and_then(Value::as_str).unwrap_or("?");
                    println!("{}: {}", id, adjusted_of(map));
                }
            }
        }
        other => println!("{}", other),
    }
}

fn adjusted_of(map: &serde_json::Map<String, Value>) -> String {
    match map.get("adjusted_value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}
