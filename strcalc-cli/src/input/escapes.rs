//! Backslash escapes for expressions typed on the command line
//!
//! Shells make literal newlines awkward, so `//;\n1;2` can be written with a
//! two-character `\n` and expanded here.

/// Expand `\n`, `\r`, `\t` and `\\`; any other backslash sequence is kept as-is
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
