// Ticket references and the `?format=tab` export.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TracError;

static TICKET_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ticket/(\d+)").expect("TICKET_PATH should compile"));

const BOM: char = '\u{feff}';

/// Extract a ticket number from `123`, `#123` or a ticket URL.
pub fn parse_ticket_ref(input: &str) -> Result<u32, TracError> {
    let digits = match TICKET_PATH.captures(input) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => input.trim_start_matches('#'),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TracError::InvalidTicket(input.to_string()));
    }
    digits
        .parse()
        .map_err(|_| TracError::InvalidTicket(input.to_string()))
}

/// Column name → value for one ticket, in export order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketFields {
    fields: Vec<(String, String)>,
}

impl TicketFields {
    /// Parse the header and value records of a tab-separated ticket export.
    pub fn from_tsv(text: &str) -> Result<Self, TracError> {
        let mut reader = TsvReader::new(text);
        let mut headers = reader.next_record().ok_or(TracError::InvalidResponse("TSV header"))?;
        let values = reader.next_record().ok_or(TracError::InvalidResponse("TSV values"))?;

        if let Some(first) = headers.first_mut() {
            if let Some(stripped) = first.strip_prefix(BOM) {
                *first = stripped.to_string();
            }
        }

        if headers.len() != values.len() {
            return Err(TracError::MalformedTsv {
                headers: headers.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            fields: headers.into_iter().zip(values).collect(),
        })
    }

    /// Value of a column, or `""` if the export has no such column.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map_or("", |(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Record reader for tab-delimited text with `"` enclosures.
///
/// Quoted fields may contain tabs and newlines; `""` inside quotes is a
/// literal quote. Characters after a closing quote are kept as-is.
struct TsvReader<'a> {
    rest: &'a str,
}

impl<'a> TsvReader<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn next_record(&mut self) -> Option<Vec<String>> {
        if self.rest.is_empty() {
            return None;
        }

        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;
        let mut chars = self.rest.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if matches!(chars.peek(), Some((_, '"'))) {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
                continue;
            }

            match c {
                '"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                '\t' => {
                    record.push(std::mem::take(&mut field));
                    at_field_start = true;
                }
                '\n' | '\r' => {
                    let mut end = i + 1;
                    if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                        end += 1;
                    }
                    self.rest = &self.rest[end..];
                    record.push(field);
                    return Some(record);
                }
                _ => {
                    field.push(c);
                    at_field_start = false;
                }
            }
        }

        self.rest = "";
        record.push(field);
        Some(record)
    }
}
