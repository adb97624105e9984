//! String exercises.

/// Format a numeric interval in mathematical notation.
///
/// Endpoints are ordered ascending regardless of argument order; `[`/`]`
/// mark an included endpoint and `(`/`)` an excluded one.
///
/// ```
/// use kestrel_kata::text::format_interval;
/// assert_eq!(format_interval(5, 3, true, false), "[3, 5)");
/// ```
#[must_use]
pub fn format_interval(a: i64, b: i64, start_included: bool, end_included: bool) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{low}, {high}{close}")
}

const fn opening(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        '>' => Some('<'),
        _ => None,
    }
}

/// Whether every `()`, `[]`, `{}` and `<>` pair is properly nested.
///
/// Characters other than brackets are ignored.
#[must_use]
pub fn is_brackets_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    for c in input.chars() {
        match c {
            '(' | '[' | '{' | '<' => stack.push(c),
            ')' | ']' | '}' | '>' => {
                if stack.pop() != opening(c) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Longest directory prefix shared by every path, ending in `/`.
///
/// Returns an empty string when the paths share no directory (or when
/// `paths` is empty).
///
/// ```
/// use kestrel_kata::text::common_directory;
/// let paths = ["/web/images/image1.png", "/web/images/image2.png"];
/// assert_eq!(common_directory(&paths), "/web/images/");
/// ```
#[must_use]
pub fn common_directory(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let mut common: Vec<&str> = first.split_inclusive('/').collect();
    for path in rest {
        let shared = common
            .iter()
            .zip(path.split_inclusive('/'))
            .take_while(|(a, b)| *a == b)
            .count();
        common.truncate(shared);
    }

    // A shared trailing file name is not a directory.
    common
        .into_iter()
        .take_while(|segment| segment.ends_with('/'))
        .collect()
}
