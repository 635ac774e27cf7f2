//! Strict fixed-width date format used by timestamp templates

use chrono::{NaiveDate, NaiveDateTime};

use super::TemplateError;

/// A date/time field and the token that spells it in a format string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
        Field::Second,
    ];

    fn token(self) -> &'static str {
        match self {
            Field::Year => "yyyy",
            Field::Month => "MM",
            Field::Day => "dd",
            Field::Hour => "HH",
            Field::Minute => "mm",
            Field::Second => "ss",
        }
    }

    /// Number of ASCII digits the field consumes
    fn width(self) -> usize {
        self.token().len()
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Item {
    Field(Field),
    Literal(String),
}

/// Compiled date format
///
/// Every field is fixed width, so a format always matches inputs of exactly
/// one byte length. That makes rejecting a wrong-sized candidate a length
/// comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFormat {
    source: String,
    items: Vec<Item>,
    len: usize,
}

impl DateFormat {
    /// Compiles `format`, e.g. `'scheduled-'yyyy-MM-dd-HH_mm_ss'_UTC'`
    pub fn compile(format: &str) -> Result<Self, TemplateError> {
        if format.is_empty() {
            return Err(TemplateError::EmptyFormat(format.to_string()));
        }

        let mut items: Vec<Item> = Vec::new();
        let mut seen = [false; 6];
        let mut pos = 0;

        while pos < format.len() {
            let rest = &format[pos..];
            let Some(c) = rest.chars().next() else { break };

            if c == '\'' {
                let (text, consumed) = scan_quoted(format, pos)?;
                push_literal(&mut items, &text);
                pos += consumed;
                continue;
            }

            if c == '*' {
                return Err(TemplateError::MisplacedWildcard {
                    format: format.to_string(),
                    position: pos,
                });
            }

            if c.is_ascii_alphabetic() {
                let field = Field::ALL
                    .into_iter()
                    .find(|f| rest.starts_with(f.token()))
                    .ok_or_else(|| TemplateError::UnknownToken {
                        format: format.to_string(),
                        token: c,
                        position: pos,
                    })?;
                if seen[field.index()] {
                    return Err(TemplateError::DuplicateField {
                        format: format.to_string(),
                        field: field.token(),
                    });
                }
                seen[field.index()] = true;
                items.push(Item::Field(field));
                pos += field.width();
                continue;
            }

            push_literal(&mut items, c.encode_utf8(&mut [0; 4]));
            pos += c.len_utf8();
        }

        for required in [Field::Year, Field::Month, Field::Day] {
            if !seen[required.index()] {
                return Err(TemplateError::MissingField {
                    format: format.to_string(),
                    field: required.token(),
                });
            }
        }

        let len = items
            .iter()
            .map(|item| match item {
                Item::Field(field) => field.width(),
                Item::Literal(text) => text.len(),
            })
            .sum();

        Ok(Self {
            source: format.to_string(),
            items,
            len,
        })
    }

    /// The format string this was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Byte length of every input this format can match
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parses `input` in full, or returns `None`.
    ///
    /// Fields must be exactly their width in ASCII digits, literals must match
    /// byte for byte and the resulting date and time must exist on the
    /// calendar. Absent time fields are zero.
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        if input.len() != self.len {
            return None;
        }

        let mut values = [0u32; 6];
        let mut rest = input;

        for item in &self.items {
            match item {
                Item::Literal(text) => {
                    rest = rest.strip_prefix(text.as_str())?;
                }
                Item::Field(field) => {
                    let width = field.width();
                    let digits = rest.get(..width)?;
                    if !digits.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    values[field.index()] = digits.parse().ok()?;
                    rest = &rest[width..];
                }
            }
        }

        if !rest.is_empty() {
            return None;
        }

        let [year, month, day, hour, minute, second] = values;
        NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)
    }
}

/// Reads a quoted literal starting at `start` (which holds the opening quote).
/// Returns the unescaped text and the number of bytes consumed.
fn scan_quoted(format: &str, start: usize) -> Result<(String, usize), TemplateError> {
    let body = &format[start + 1..];

    // '' outside of a quoted run is a literal quote
    if body.starts_with('\'') {
        return Ok(("'".to_string(), 2));
    }

    let mut text = String::new();
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '\'' {
            text.push(c);
            continue;
        }
        if matches!(chars.peek(), Some((_, '\''))) {
            text.push('\'');
            chars.next();
            continue;
        }
        return Ok((text, i + 2));
    }

    Err(TemplateError::UnterminatedQuote(format.to_string()))
}

fn push_literal(items: &mut Vec<Item>, text: &str) {
    if let Some(Item::Literal(last)) = items.last_mut() {
        last.push_str(text);
    } else {
        items.push(Item::Literal(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_compile_scheduled_format() {
        let format = DateFormat::compile("'scheduled-'yyyy-MM-dd-HH_mm_ss'_UTC'").unwrap();
        assert_eq!(format.len(), "scheduled-2026-01-23-04_00_40_UTC".len());
        assert_eq!(
            format.parse("scheduled-2026-01-23-04_00_40_UTC"),
            Some(at(2026, 1, 23, 4, 0, 40))
        );
    }

    #[test]
    fn test_parse_is_strict_about_width() {
        let format = DateFormat::compile("yyyy-MM-dd").unwrap();
        assert_eq!(format.parse("2026-01-05"), Some(at(2026, 1, 5, 0, 0, 0)));
        assert_eq!(format.parse("2026-1-05"), None);
        assert_eq!(format.parse("2026-01-5"), None);
        assert_eq!(format.parse("2026-01-05 "), None);
        assert_eq!(format.parse("2026-0a-05"), None);
        assert_eq!(format.parse("+026-01-05"), None);
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        let format = DateFormat::compile("yyyy-MM-dd HH:mm:ss").unwrap();
        assert_eq!(format.parse("2026-02-30 00:00:00"), None);
        assert_eq!(format.parse("2026-13-01 00:00:00"), None);
        assert_eq!(format.parse("2026-01-01 24:00:00"), None);
        assert_eq!(format.parse("2026-01-01 23:60:00"), None);
    }

    #[test]
    fn test_fields_may_appear_in_any_order() {
        let format = DateFormat::compile("ddMMyyyy").unwrap();
        assert_eq!(format.parse("24012026"), Some(at(2026, 1, 24, 0, 0, 0)));
    }

    #[test]
    fn test_quote_escapes() {
        let format = DateFormat::compile("yyyy''MM'it''s'dd").unwrap();
        assert_eq!(format.parse("2026'01it's24"), Some(at(2026, 1, 24, 0, 0, 0)));
    }

    #[test]
    fn test_non_ascii_literals() {
        let format = DateFormat::compile("yyyy·MM·dd").unwrap();
        assert_eq!(format.parse("2026·01·24"), Some(at(2026, 1, 24, 0, 0, 0)));
    }

    #[test]
    fn test_compile_errors() {
        assert!(matches!(
            DateFormat::compile(""),
            Err(TemplateError::EmptyFormat(_))
        ));
        assert!(matches!(
            DateFormat::compile("scheduled-yyyy-MM-dd"),
            Err(TemplateError::UnknownToken { token: 's', position: 0, .. })
        ));
        assert!(matches!(
            DateFormat::compile("yyyy-MM-dd'oops"),
            Err(TemplateError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            DateFormat::compile("yyyy*MM-dd"),
            Err(TemplateError::MisplacedWildcard { position: 4, .. })
        ));
        assert!(matches!(
            DateFormat::compile("yyyy-MM-dd-dd"),
            Err(TemplateError::DuplicateField { field: "dd", .. })
        ));
        assert!(matches!(
            DateFormat::compile("HH_mm_ss"),
            Err(TemplateError::MissingField { field: "yyyy", .. })
        ));
    }
}
