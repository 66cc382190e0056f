use serde_json::Value;
use std::io;

const INSTALLMENT_HEADERS: [&str; 6] = [
    "instrument_id",
    "number",
    "due_date",
    "face_value",
    "days_overdue",
    "adjusted_value",
];

/// Write valuation output as CSV to stdout: one row per installment, the
/// owning instrument id in the first column.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value.get("result") {
        Some(instrument @ Value::Object(_)) => {
            let _ = wtr.write_record(INSTALLMENT_HEADERS);
            write_installment_rows(&mut wtr, instrument);
        }
        Some(Value::Array(instruments)) => {
            let _ = wtr.write_record(INSTALLMENT_HEADERS);
            for instrument in instruments {
                write_installment_rows(&mut wtr, instrument);
            }
        }
        _ => {
            // Not a valuation envelope: fall back to field,value pairs.
            if let Value::Object(map) = value {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
    }

    let _ = wtr.flush();
}

fn write_installment_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, instrument: &Value) {
    let id = instrument
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if let Some(Value::Array(installments)) = instrument.get("installments") {
        for parcel in installments {
            if let Value::Object(p) = parcel {
                let row = [
                    id.to_string(),
                    format_csv_value(p.get("number").unwrap_or(&Value::Null)),
                    format_csv_value(p.get("due_date").unwrap_or(&Value::Null)),
                    format_csv_value(p.get("face_value").unwrap_or(&Value::Null)),
                    format_csv_value(p.get("days_overdue").unwrap_or(&Value::Null)),
                    format_csv_value(p.get("adjusted_value").unwrap_or(&Value::Null)),
                ];
                let _ = wtr.write_record(&row);
            }
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
