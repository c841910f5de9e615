//! Bulk ingestion of uploaded sample batches.
//!
//! Both upload formats share the same tolerance rules: a file that
//! cannot be parsed at all fails with a validation error, while
//! individual rows without usable text are skipped and counted.

use crate::error::ServiceError;
use crate::models::TextSample;
use crate::repository::TextSampleRepository;

/// Outcome of one bulk upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Samples inserted.
    pub inserted: usize,
    /// Rows skipped for failing row-level validation.
    pub skipped: usize,
}

/// Samples parsed out of an upload, plus the rows that didn't make it.
#[derive(Debug)]
pub struct ParsedBatch {
    pub samples: Vec<TextSample>,
    pub skipped: usize,
}

/// Parse a CSV upload and insert the valid rows.
pub async fn ingest_csv(
    repo: &TextSampleRepository,
    bytes: &[u8],
) -> Result<IngestReport, ServiceError> {
    let batch = parse_csv_samples(bytes)?;
    let inserted = repo.insert_batch(&batch.samples).await?;
    Ok(IngestReport {
        inserted,
        skipped: batch.skipped,
    })
}

/// Parse a JSON upload and insert the valid rows.
pub async fn ingest_json(
    repo: &TextSampleRepository,
    bytes: &[u8],
) -> Result<IngestReport, ServiceError> {
    let batch = parse_json_samples(bytes)?;
    let inserted = repo.insert_batch(&batch.samples).await?;
    Ok(IngestReport {
        inserted,
        skipped: batch.skipped,
    })
}

/// Parse CSV bytes into samples.
///
/// The header row must contain a `text` column; `source` and `topic`
/// columns are optional. Rows whose `text` trims to empty are skipped.
pub fn parse_csv_samples(bytes: &[u8]) -> Result<ParsedBatch, ServiceError> {
    let content = std::str::from_utf8(bytes)
        .map_err(|_| ServiceError::validation("File is not valid UTF-8"))?;

    let rows = parse_csv_rows(content)?;
    let mut rows = rows.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| ServiceError::validation("CSV file has no header row"))?;
    let column = |name: &str| header.iter().position(|cell| cell.trim() == name);
    let text_idx = column("text")
        .ok_or_else(|| ServiceError::validation("CSV header is missing the required 'text' column"))?;
    let source_idx = column("source");
    let topic_idx = column("topic");

    let mut samples = Vec::new();
    let mut skipped = 0;
    for row in rows {
        // Blank separator lines are not data rows.
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let text = row.get(text_idx).map(|s| s.trim()).unwrap_or("");
        if text.is_empty() {
            skipped += 1;
            continue;
        }

        let optional = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        samples.push(TextSample::new(
            text.to_string(),
            optional(source_idx),
            optional(topic_idx),
        ));
    }

    Ok(ParsedBatch { samples, skipped })
}

/// Parse JSON bytes into samples.
///
/// The document must be an array; elements that are not objects or
/// lack a usable `text` field are skipped.
pub fn parse_json_samples(bytes: &[u8]) -> Result<ParsedBatch, ServiceError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)
        .map_err(|e| ServiceError::validation(format!("Invalid JSON upload: {}", e)))?;

    let mut samples = Vec::new();
    let mut skipped = 0;
    for value in &values {
        let text = value
            .get("text")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if text.is_empty() {
            skipped += 1;
            continue;
        }

        let optional = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        samples.push(TextSample::new(
            text.to_string(),
            optional("source"),
            optional("topic"),
        ));
    }

    Ok(ParsedBatch { samples, skipped })
}

/// Split CSV text into rows of fields, honoring RFC 4180 quoting.
fn parse_csv_rows(input: &str) -> Result<Vec<Vec<String>>, ServiceError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ServiceError::validation(
            "Unparseable CSV: unterminated quoted field",
        ));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_rows_quoting() {
        let rows = parse_csv_rows("a,\"b,c\",\"say \"\"hi\"\"\"\r\nd,\"multi\nline\",e\n").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a", "b,c", "say \"hi\""],
                vec!["d", "multi\nline", "e"],
            ]
        );
    }

    #[test]
    fn test_parse_csv_rows_unterminated_quote() {
        let err = parse_csv_rows("a,\"broken\n").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_csv_skips_empty_text_rows() {
        // One valid row, one skipped for empty text.
        let input = b"text,source,topic\n\"Hello world\",Demo,Tech\n,Demo,Tech\n";
        let batch = parse_csv_samples(input).unwrap();
        assert_eq!(batch.samples.len(), 1);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.samples[0].text, "Hello world");
        assert_eq!(batch.samples[0].source.as_deref(), Some("Demo"));
        assert_eq!(batch.samples[0].topic.as_deref(), Some("Tech"));
    }

    #[test]
    fn test_csv_optional_columns_default_to_none() {
        let batch = parse_csv_samples(b"text\njust text\n").unwrap();
        assert_eq!(batch.samples.len(), 1);
        assert!(batch.samples[0].source.is_none());
        assert!(batch.samples[0].topic.is_none());
    }

    #[test]
    fn test_csv_blank_lines_are_not_counted() {
        let batch = parse_csv_samples(b"text,source\nhello,Demo\n\n").unwrap();
        assert_eq!(batch.samples.len(), 1);
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn test_csv_missing_text_column() {
        let err = parse_csv_samples(b"source,topic\nDemo,Tech\n").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = parse_csv_samples(b"").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_csv_rejects_invalid_utf8() {
        let err = parse_csv_samples(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_json_happy_path_and_skips() {
        let input = br#"[
            {"text": "First sample", "source": "Demo", "topic": "Tech"},
            {"text": "   "},
            {"source": "no text here"},
            42,
            {"text": "Second sample"}
        ]"#;
        let batch = parse_json_samples(input).unwrap();
        assert_eq!(batch.samples.len(), 2);
        assert_eq!(batch.skipped, 3);
        assert_eq!(batch.samples[0].source.as_deref(), Some("Demo"));
        assert!(batch.samples[1].source.is_none());
    }

    #[test]
    fn test_json_rejects_malformed_and_non_array() {
        assert!(matches!(
            parse_json_samples(b"{not json").unwrap_err(),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            parse_json_samples(br#"{"text": "an object, not an array"}"#).unwrap_err(),
            ServiceError::Validation(_)
        ));
    }
}
