use crate::tokenizing::TokenSet;
use std::fmt::{Display, Formatter};

pub const INDENT_UNIT: &str = "\t";

/// Joins the present fields and the comment with single spaces, then indents.
pub fn render(tokens: &TokenSet) -> String {
    let line = tokens
        .fields()
        .chain(tokens.comment.as_deref())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = INDENT_UNIT.repeat(tokens.indent.into());
    out.push_str(line.trim());
    out
}

impl Display for TokenSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
