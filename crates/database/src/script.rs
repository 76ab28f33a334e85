use std::{iter::Peekable, str::Chars};

/// Splits a SQL script into individual statements.
///
/// Statements end at `;` outside of quoted text. `-- `, `#` and `/* */`
/// comments are stripped. Empty statements are dropped.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            current.push(c);
            if c == '\\' && open != '`' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            } else if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => {
                quote = Some(c);
                current.push(c);
            }
            '#' => skip_line(&mut chars, &mut current),
            '-' if starts_line_comment(&chars) => skip_line(&mut chars, &mut current),
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block(&mut chars);
                current.push(' ');
            }
            ';' => finish_statement(&mut statements, &mut current),
            _ => current.push(c),
        }
    }

    finish_statement(&mut statements, &mut current);
    statements
}

/// MySQL only treats `--` as a comment when followed by whitespace or the end of input
fn starts_line_comment(chars: &Peekable<Chars<'_>>) -> bool {
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('-') {
        return false;
    }
    lookahead.peek().is_none_or(|c| c.is_whitespace())
}

fn skip_line(chars: &mut Peekable<Chars<'_>>, current: &mut String) {
    for c in chars.by_ref() {
        if c == '\n' {
            current.push('\n');
            break;
        }
    }
}

fn skip_block(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'/') {
            chars.next();
            break;
        }
    }
}

fn finish_statement(statements: &mut Vec<String>, current: &mut String) {
    let statement = current.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }
    current.clear();
}
