use crate::classifying::Classifier;
use crate::labels::resolve;
use crate::literals::fix_literals;
use crate::rendering::render;
use crate::tokenizing::{tokenize, TokenSet};
use getset::Getters;
use log::trace;
use piccommon::{Capabilities, DeviceFamily};

/// Converts single MPASM lines into ASPIC fields.
///
/// Holds nothing but the keyword tables, so one parser can be shared between threads and every
/// line is handled on its own.
#[derive(Debug, Clone, Getters)]
pub struct Parser {
    #[getset(get = "pub")]
    capabilities: Capabilities,
}

impl Parser {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn for_family(family: DeviceFamily) -> Self {
        Self::new(Capabilities::for_family(family))
    }

    pub fn tokenize(&self, line: &str) -> TokenSet {
        tokenize(line, &self.capabilities)
    }

    pub fn is_directive(&self, token: &str) -> bool {
        self.capabilities.is_directive(token)
    }

    pub fn is_instruction(&self, token: &str) -> bool {
        self.capabilities.is_instruction(token)
    }

    pub fn has_label(&self, tokens: &TokenSet) -> bool {
        self.capabilities.has_label(tokens)
    }

    pub fn parse(&self, line: &str) -> TokenSet {
        let mut tokens = self.tokenize(line);

        // Literals only ever show up as operands.
        if tokens.field3.is_some() {
            tokens.field3 = fix_literals(tokens.field3.as_deref());
        }
        if tokens.field2.is_some() {
            tokens.field2 = fix_literals(tokens.field2.as_deref());
        }

        resolve(&mut tokens, &self.capabilities);
        trace!("Parsed {:?} into {:?}", line, tokens);
        tokens
    }

    pub fn textify(&self, tokens: &TokenSet) -> String {
        render(tokens)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::for_family(DeviceFamily::Midrange)
    }

    #[test]
    fn test_simple_label() {
        assert_eq!(
            parser().parse("LABEL"),
            TokenSet {
                field1: Some("LABEL:".into()),
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_commented_label() {
        assert_eq!(
            parser().parse("LABEL\t\t    ; a comment"),
            TokenSet {
                field1: Some("LABEL:".into()),
                comment: Some("; a comment".into()),
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_four_field_label() {
        assert_eq!(
            parser().parse("LABEL MOVLW B\"10101010\"\t;comment"),
            TokenSet {
                field1: Some("LABEL:".into()),
                field2: Some("MOVLW".into()),
                field3: Some("10101010B".into()),
                comment: Some(";comment".into()),
                indent: 0,
            }
        );
    }

    #[test]
    fn test_comment_with_apostrophe_and_markers() {
        let tokens = parser().parse("LABEL MOVLW B\"10101010\"\t;comment don't\t; #v4.1.1 style");
        assert_eq!(
            tokens.comment.as_deref(),
            Some(";comment don't\t; #v4.1.1 style")
        );
        assert_eq!(tokens.field3.as_deref(), Some("10101010B"));
    }

    #[test]
    fn test_colon_label() {
        assert_eq!(
            parser().parse("BEGIN:"),
            TokenSet {
                field1: Some("BEGIN:".into()),
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_two_field_instruction() {
        assert_eq!(
            parser().parse("\tmovwf TRISB"),
            TokenSet {
                field1: Some("movwf".into()),
                field2: Some("TRISB".into()),
                indent: 1,
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_expression_instruction() {
        assert_eq!(
            parser().parse("\tMOVLW 1 << 5"),
            TokenSet {
                field1: Some("MOVLW".into()),
                field2: Some("1 << 5".into()),
                indent: 1,
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_define() {
        assert_eq!(
            parser().parse("#include pic16f877a.inc"),
            TokenSet {
                field1: Some("#include".into()),
                field2: Some("pic16f877a.inc".into()),
                ..TokenSet::default()
            }
        );
    }

    #[test]
    fn test_empty_line() {
        let tokens = parser().parse("");
        assert_eq!(tokens, TokenSet::blank());
        assert_eq!(parser().textify(&tokens), "");
    }

    #[test]
    fn test_instruction_literal() {
        let tokens = parser().parse("\tmovlw A'x'\t; load x");
        assert_eq!(tokens.field2.as_deref(), Some("\"x\""));
        assert_eq!(parser().textify(&tokens), "\tmovlw \"x\" ; load x");
    }

    #[test]
    fn test_data_with_label() {
        assert_eq!(
            parser().textify(&parser().parse("MSG dt A'Hello world'")),
            "MSG: dt \"Hello world\""
        );
    }

    #[test]
    fn test_equ_keeps_name() {
        assert_eq!(
            parser().textify(&parser().parse("COUNT equ H'20'")),
            "COUNT equ 20H"
        );
    }

    #[test]
    fn test_label_then_instruction() {
        assert_eq!(
            parser().textify(&parser().parse("LOOP: decfsz COUNT, F")),
            "LOOP: decfsz COUNT, F"
        );
    }

    #[test]
    fn test_unclassifiable() {
        let tokens = parser().parse("what is this");
        assert!(tokens.is_unclassifiable());
        assert_eq!(
            parser().textify(&tokens),
            "what is this    ;#PARSE_ERROR"
        );
    }

    #[test]
    fn test_label_and_indent_are_exclusive() {
        let parser = parser();
        for line in [
            "LABEL",
            "BEGIN:",
            "\tnop",
            "LOOP goto LOOP",
            "X: movwf PORTB",
            "\torg 0x00",
            "TABLE db 1, 2, 3",
            "; just words",
            "a b c",
        ] {
            let tokens = parser.parse(line);
            assert!(
                !(tokens.has_label_marker() && tokens.indent == 1),
                "{:?} produced {:?}",
                line,
                tokens
            );
        }
    }

    #[test]
    fn test_render_keeps_comment_and_fields() {
        let parser = parser();
        for line in [
            "LABEL MOVLW B'1010' ; set bits",
            "\tbsf STATUS, RP0\t;bank 1",
            ";; banner ;;",
            "\tcall DELAY ; wait 'a while'",
        ] {
            let tokens = parser.parse(line);
            let rendered = parser.textify(&tokens);
            let comment = tokens.comment.as_deref().expect("line has a comment");
            assert!(rendered.ends_with(comment), "{:?} lost its comment", line);
            for field in tokens.fields() {
                assert!(rendered.contains(field), "{:?} lost {:?}", line, field);
            }
        }
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
