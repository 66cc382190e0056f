use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format valuation output as tables: a summary per instrument followed by
/// its installment rows, then any envelope warnings and the methodology.
pub fn print_table(value: &Value) {
    match value.get("result") {
        Some(result @ Value::Object(_)) => print_instrument(result),
        Some(Value::Array(instruments)) => {
            if instruments.is_empty() {
                println!("(no instruments)");
            }
            for (i, instrument) in instruments.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_instrument(instrument);
            }
        }
        _ => print_flat_object(value),
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = value.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

/// Instrument summary (scalar fields) plus one row per installment.
fn print_instrument(instrument: &Value) {
    let Value::Object(map) = instrument else {
        println!("{}", instrument);
        return;
    };

    let mut summary = Builder::default();
    summary.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key == "installments" {
            continue;
        }
        summary.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(summary));

    if let Some(Value::Array(installments)) = map.get("installments") {
        if installments.is_empty() {
            return;
        }
        let mut rows = Builder::default();
        rows.push_record([
            "number",
            "due_date",
            "face_value",
            "days_overdue",
            "adjusted_value",
        ]);
        for parcel in installments {
            if let Value::Object(p) = parcel {
                rows.push_record([
                    format_value(p.get("number").unwrap_or(&Value::Null)),
                    format_value(p.get("due_date").unwrap_or(&Value::Null)),
                    format_value(p.get("face_value").unwrap_or(&Value::Null)),
                    format_value(p.get("days_overdue").unwrap_or(&Value::Null)),
                    format_value(p.get("adjusted_value").unwrap_or(&Value::Null)),
                ]);
            }
        }
        println!("{}", Table::from(rows));
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
