use crate::classifying::Classifier;
use log::debug;
use piccommon::{COMMENT_MARKER, LABEL_MARKER};

/// Appended to the original text of a line that could not be split into fields.
pub const PARSE_ERROR_MARKER: &str = "    ;#PARSE_ERROR";

/// One source line broken into its fields.
///
/// A present field is never empty; `None` means the slot was not filled.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TokenSet {
    /// Label, or opcode when there is no label.
    pub field1: Option<String>,
    pub field2: Option<String>,
    /// Everything after field 2, unsplit.
    pub field3: Option<String>,
    /// Starts at the comment marker, kept verbatim.
    pub comment: Option<String>,
    pub indent: u8,
}

impl TokenSet {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn comment_only(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..Self::default()
        }
    }

    /// The whole line is carried in the comment slot, flagged for manual review.
    pub fn unclassifiable(line: &str) -> Self {
        Self::comment_only(format!("{}{}", line, PARSE_ERROR_MARKER))
    }

    pub fn is_blank(&self) -> bool {
        self.fields().next().is_none() && self.comment.is_none()
    }

    pub fn is_unclassifiable(&self) -> bool {
        // A real comment always starts with the marker; a rejected line never does.
        self.fields().next().is_none()
            && self.comment.as_deref().map_or(false, |comment| {
                comment.ends_with(PARSE_ERROR_MARKER) && !comment.starts_with(COMMENT_MARKER)
            })
    }

    pub fn has_label_marker(&self) -> bool {
        self.field1
            .as_deref()
            .map_or(false, |field| field.ends_with(LABEL_MARKER))
    }

    /// The present fields, in order, without the comment.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [&self.field1, &self.field2, &self.field3]
            .into_iter()
            .filter_map(|field| field.as_deref())
    }
}

/// Splits `line` at the first comment marker that is not escaped or inside a quoted literal.
///
/// If a quote is left open the quotes are ignored and the first unescaped marker wins.
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut first_marker = None;

    for (index, character) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (character, quote) {
            ('\\', _) => escaped = true,
            (COMMENT_MARKER, None) => return (&line[..index], Some(&line[index..])),
            (COMMENT_MARKER, Some(_)) => {
                first_marker.get_or_insert(index);
            }
            ('\'' | '"', None) => quote = Some(character),
            (close, Some(open)) if close == open => quote = None,
            _ => {}
        }
    }

    match first_marker {
        Some(index) if quote.is_some() => (&line[..index], Some(&line[index..])),
        _ => (line, None),
    }
}

/// Splits at the first whitespace run. The remainder has no leading whitespace.
fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], text[index..].trim_start()),
        None => (text, ""),
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Breaks a line into label/opcode, operands and comment.
///
/// Only the first two words are looked at; whatever follows the opcode stays in one piece so
/// that expressions such as `1 << 5` survive.
pub fn tokenize(line: &str, classifier: &impl Classifier) -> TokenSet {
    let (body, comment) = split_comment(line);
    let body = body.trim();

    let mut tokens = TokenSet {
        comment: comment.map(str::to_string),
        ..TokenSet::default()
    };
    if body.is_empty() {
        return tokens;
    }

    let (candidate, remainder) = split_word(body);
    if classifier.is_keyword(candidate) {
        tokens.field1 = Some(candidate.to_string());
        tokens.indent = 1;
    }

    let (second, second_remainder) = split_word(remainder);
    if classifier.is_keyword(second) {
        if tokens.field1.is_none() {
            tokens.field1 = Some(candidate.to_string());
        }
        tokens.field2 = Some(second.to_string());
        tokens.field3 = non_empty(second_remainder);
    }

    if tokens.field1.is_some() {
        if tokens.field2.is_none() {
            tokens.field2 = non_empty(remainder);
        }
    } else if remainder.is_empty() {
        // A lone word that is not a keyword can only be a label.
        tokens.field1 = Some(candidate.to_string());
    } else {
        debug!("Could not classify {:?}", line);
        return TokenSet::unclassifiable(line);
    }

    tokens
}
