//! Single-line CSV tokenizing.

/// Parses one CSV line into trimmed fields, handling quoted values.
///
/// A quoted field may contain commas, and `""` inside quotes is a literal
/// `"`. Each physical line is parsed on its own: an unbalanced quote keeps
/// the rest of the line inside the current field.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}
