//! Kotlin script text helpers shared by settings and build script scanning.

/// Remove `//` line comments and `/* */` block comments, leaving string
/// literals intact (`"https://…"` is not a comment).
pub fn strip_comments(content: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Str,
        Line,
        Block,
    }

    let mut out = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            State::Code => match (c, chars.peek().copied()) {
                ('/', Some('/')) => {
                    chars.next();
                    state = State::Line;
                }
                ('/', Some('*')) => {
                    chars.next();
                    state = State::Block;
                }
                ('"', _) => {
                    out.push(c);
                    state = State::Str;
                }
                _ => out.push(c),
            },
            State::Str => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == '"' {
                    state = State::Code;
                }
            }
            State::Line => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                }
            }
            State::Block => {
                if c == '*' && chars.peek().copied() == Some('/') {
                    chars.next();
                    state = State::Code;
                } else if c == '\n' {
                    out.push(c);
                }
            }
        }
    }
    out
}
