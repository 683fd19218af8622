use std::collections::HashSet;

use super::ComposeError;

const DIRECTIVE: &str = "#import";

/// Shared WGSL modules that stage bodies may import, by name.
const MODULES: &[(&str, &str)] = &[("editor_common", super::EDITOR_COMMON)];

fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    MODULES.iter().find(|(n, _)| *n == name).copied()
}

fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Resolves `#import <name>` lines in a WGSL stage body.
///
/// Each module is spliced in at its first import; later imports of the same
/// module are dropped, so stage bodies can import freely. All other lines
/// are copied byte for byte, line terminators included; a body without a
/// trailing newline composes to one without.
pub fn compose(body: &str) -> Result<String, ComposeError> {
    let mut out = String::with_capacity(body.len() + 256);
    let mut included: HashSet<&'static str> = HashSet::new();

    for (idx, line) in body.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        let Some(rest) = trimmed.strip_prefix(DIRECTIVE) else {
            out.push_str(line);
            continue;
        };

        // `#importfoo` is not a directive we understand.
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Err(ComposeError::new(format!("malformed directive `{trimmed}`"), line_no));
        }

        let name = rest.trim();
        if name.is_empty() {
            return Err(ComposeError::new("`#import` without a module name", line_no));
        }

        let Some((key, src)) = lookup(name) else {
            return Err(ComposeError::new(format!("unknown module `{name}`"), line_no));
        };

        if !included.insert(key) {
            log::debug!("compose: `{name}` already imported; line {line_no} dropped");
            continue;
        }

        out.push_str(src);
        if !src.ends_with('\n') {
            out.push_str(line_terminator(line));
        }
    }

    log::debug!(
        "compose: {} bytes -> {} bytes ({} module(s))",
        body.len(),
        out.len(),
        included.len()
    );
    Ok(out)
}
