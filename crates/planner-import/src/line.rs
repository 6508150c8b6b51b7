//! Splitting one line of pasted text into raw fields.

use crate::delimiter::Delimiter;

/// Split a single line into its ordered raw fields.
///
/// Tab and semicolon tables get a naive split with no quoting support.
/// Comma tables get minimal CSV handling: a left-to-right scan that toggles
/// an in-quotes flag on each `"` and only treats `,` as a boundary outside
/// quotes. Quote characters stay in the output verbatim; a later
/// normalization step strips the outermost pair.
///
/// An unterminated quote leaves the flag open for the rest of this line
/// only; every line starts its scan outside quotes.
pub fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    if delimiter != Delimiter::Comma {
        return line
            .split(delimiter.as_char())
            .map(str::to_string)
            .collect();
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == ',' && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_stays_inside_field() {
        let fields = split_line("a,\"b,c\",d", Delimiter::Comma);
        assert_eq!(fields, vec!["a", "\"b,c\"", "d"]);
    }

    #[test]
    fn naive_split_for_tab_ignores_quotes() {
        let fields = split_line("a\t\"b\tc\"", Delimiter::Tab);
        assert_eq!(fields, vec!["a", "\"b", "c\""]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        let fields = split_line("a,\"b,c", Delimiter::Comma);
        assert_eq!(fields, vec!["a", "\"b,c"]);
    }
}
