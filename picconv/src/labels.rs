use crate::classifying::Classifier;
use crate::tokenizing::TokenSet;
use log::debug;
use piccommon::LABEL_MARKER;

/// Gives labels their colon and indents bare opcodes. Running it twice changes nothing.
pub fn resolve(tokens: &mut TokenSet, classifier: &impl Classifier) {
    if classifier.has_label(tokens) {
        if let Some(label) = tokens.field1.as_mut() {
            if !label.ends_with(LABEL_MARKER) {
                label.push(LABEL_MARKER);
                debug!("Marked {:?} as a label", label);
            }
        }
        tokens.indent = 0;
    } else {
        // Directives stay in column 0; only opcodes are indented.
        let opcode = tokens.field1.as_deref().filter(|field| {
            classifier.is_instruction(field) && !field.ends_with(LABEL_MARKER)
        });
        tokens.indent = u8::from(opcode.is_some());
    }
}
