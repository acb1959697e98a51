//! JSON rendering to stdout.

use serde::Serialize;
use std::io::Write;

/// Pretty-print `value` as JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `value` as one JSON document to `writer`.
pub fn render<T: Serialize, W: Write>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    writer.write_all(&to_pretty_json(value)?)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_core::LossLeader;

    #[test]
    fn test_four_space_indent() {
        let leader = LossLeader {
            ticker: "COF".to_string(),
            loss_day_count: 2,
        };
        let text = String::from_utf8(to_pretty_json(&leader).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"ticker\": \"COF\",\n    \"lossDayCount\": 2\n}\n");
    }
}
