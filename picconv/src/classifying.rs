use crate::tokenizing::TokenSet;
use piccommon::Capabilities;

/// Keyword membership tests used to tell labels, directives and opcodes apart.
pub trait Classifier {
    fn is_directive(&self, token: &str) -> bool;

    fn is_instruction(&self, token: &str) -> bool;

    /// Directives allowed to follow a label, such as `db` or `res`.
    fn is_label_directive(&self, token: &str) -> bool;

    fn is_keyword(&self, token: &str) -> bool {
        self.is_directive(token) || self.is_instruction(token)
    }

    /// Field 1 is a label unless it is a keyword itself, or field 2 is a directive that defines
    /// a symbol rather than placing something at a label (`FOO equ 5`, `BAR macro`).
    fn has_label(&self, tokens: &TokenSet) -> bool {
        let Some(field1) = tokens.field1.as_deref() else {
            return false;
        };
        let field2_defines_symbol = tokens
            .field2
            .as_deref()
            .map_or(false, |field2| {
                self.is_directive(field2) && !self.is_label_directive(field2)
            });

        !(self.is_keyword(field1) || field2_defines_symbol)
    }
}

impl Classifier for Capabilities {
    fn is_directive(&self, token: &str) -> bool {
        self.directives().contains(token)
    }

    fn is_instruction(&self, token: &str) -> bool {
        self.instructions().contains(token)
    }

    fn is_label_directive(&self, token: &str) -> bool {
        self.label_directives().contains(token)
    }
}
