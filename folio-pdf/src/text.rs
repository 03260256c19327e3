//! Line wrapping and escaping of plain text before it reaches a content stream.

/// Escapes text for use inside a literal string.
///
/// Backslashes and parentheses are prefixed with a backslash and carriage
/// returns become the two characters `\r`.
pub fn escaped(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\r' => result.push_str("\\r"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            _ => result.push(c),
        }
    }
    result
}

/// Greedy word wrap against a character count.
///
/// All whitespace, newlines included, is folded into single separators.
/// A word joins the current line while the line stays within `width`
/// characters; a word longer than `width` gets a line of its own. Empty
/// input yields a single empty line.
pub fn multiline(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }

    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static str,
            width: usize,
            expected: &'static [&'static str],
        }

        let test_cases = [
            TestCase {
                name: "breaks between words",
                input: "Hello World!",
                width: 5,
                expected: &["Hello", "World!"],
            },
            TestCase {
                name: "fits on one line",
                input: "Hello World!",
                width: 12,
                expected: &["Hello World!"],
            },
            TestCase {
                name: "empty input gives one empty line",
                input: "",
                width: 10,
                expected: &[""],
            },
            TestCase {
                name: "empty input with zero width",
                input: "",
                width: 0,
                expected: &[""],
            },
            TestCase {
                name: "whitespace only",
                input: " \n\t ",
                width: 3,
                expected: &[""],
            },
            TestCase {
                name: "newlines are folded",
                input: "one\ntwo\n\nthree",
                width: 80,
                expected: &["one two three"],
            },
            TestCase {
                name: "greedy packing",
                input: "aa bb cc dd ee",
                width: 5,
                expected: &["aa bb", "cc dd", "ee"],
            },
            TestCase {
                name: "long word stays whole",
                input: "a extraordinarily b",
                width: 4,
                expected: &["a", "extraordinarily", "b"],
            },
        ];

        for case in &test_cases {
            let result = multiline(case.input, case.width);
            assert_eq!(
                result, case.expected,
                "Test '{}' failed: got {:?}",
                case.name, result
            );
        }
    }

    #[test]
    fn test_escaped() {
        assert_eq!(escaped("\\, (, ), \r"), "\\\\, \\(, \\), \\r");
        assert_eq!(escaped("plain"), "plain");
        assert_eq!(escaped("(nested (parens))"), "\\(nested \\(parens\\)\\)");
    }
}
