//! Character scanning over type expressions. Splitting and unwrapping are
//! nesting-aware: commas and pipes inside brackets, parentheses, angle
//! brackets, or quoted spans never count as separators.

/// Streaming nesting tracker. Feed characters left to right; `step` returns
/// true when the character sits at top level, outside every bracket pair
/// and quoted span.
#[derive(Default)]
struct Nesting {
    depth: i32,
    quote: Option<char>,
}

impl Nesting {
    fn step(&mut self, c: char) -> bool {
        if let Some(quote) = self.quote {
            if c == quote {
                self.quote = None;
            }
            return false;
        }
        match c {
            '\'' | '"' | '`' => {
                self.quote = Some(c);
                false
            }
            '(' | '[' | '<' => {
                self.depth += 1;
                false
            }
            ')' | ']' | '>' => {
                self.depth -= 1;
                false
            }
            _ => self.depth == 0,
        }
    }

    fn balanced(&self) -> bool {
        self.depth == 0 && self.quote.is_none()
    }
}

/// True if the bracket opened by the first character closes exactly at the
/// last character, with nothing unbalanced in between.
fn encloses_whole(expr: &str) -> bool {
    let mut nesting = Nesting::default();
    for (index, c) in expr.char_indices() {
        nesting.step(c);
        if nesting.depth == 0 && index + c.len_utf8() < expr.len() {
            return false;
        }
    }
    nesting.balanced()
}

/// Strips one redundant pair of parentheses enclosing the whole expression.
pub fn strip_wrapped(expr: &str) -> Option<&str> {
    if !expr.starts_with('(') || !expr.ends_with(')') || expr.len() < 3 {
        return None;
    }
    encloses_whole(expr).then(|| &expr[1..expr.len() - 1])
}

/// Extracts the element type from `Array<T>` or the `T[]` suffix form.
pub fn strip_array(expr: &str) -> Option<&str> {
    if let Some(rest) = expr.strip_prefix("Array<") {
        if let Some(inner) = rest.strip_suffix('>') {
            if !inner.is_empty() && encloses_whole(&expr["Array".len()..]) {
                return Some(inner);
            }
        }
    }
    let inner = expr.strip_suffix("[]")?;
    (!inner.is_empty()).then_some(inner)
}

/// Splits at the rightmost top-level `|`, yielding the greedy left operand
/// and the final right operand. Both sides must be non-empty.
pub fn split_last_pipe(expr: &str) -> Option<(&str, &str)> {
    let mut nesting = Nesting::default();
    let mut split = None;
    for (index, c) in expr.char_indices() {
        if nesting.step(c) && c == '|' {
            split = Some(index);
        }
    }
    let index = split?;
    let (left, right) = (&expr[..index], &expr[index + 1..]);
    (!left.is_empty() && !right.is_empty()).then_some((left, right))
}

/// Splits a tuple body at top-level commas only, so composite part types
/// like `[string, number]` or `Array<number>` stay intact.
pub fn split_parts(inner: &str) -> Vec<&str> {
    let mut nesting = Nesting::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (index, c) in inner.char_indices() {
        if nesting.step(c) && c == ',' {
            parts.push(&inner[start..index]);
            start = index + 1;
        }
    }
    parts.push(&inner[start..]);
    parts
}
