/// Enhanced 14-bit core (PIC12F1xxx, PIC16F1xxx).
pub const ENHANCED_MIDRANGE_INSTRUCTIONS: &[&str] = &[
    // Byte-oriented file register operations
    "addwf", "addwfc", "andwf", "asrf", "clrf", "clrw", "comf", "decf", "decfsz", "incf",
    "incfsz", "iorwf", "lslf", "lsrf", "movf", "movwf", "nop", "rlf", "rrf", "subwf",
    "subwfb", "swapf", "xorwf",
    // Bit-oriented file register operations
    "bcf", "bsf", "btfsc", "btfss",
    // Literal operations
    "addlw", "andlw", "iorlw", "movlb", "movlp", "movlw", "sublw", "xorlw",
    // Control operations
    "bra", "brw", "call", "callw", "goto", "retfie", "retlw", "return",
    // Inherent operations
    "clrwdt", "option", "reset", "sleep", "tris",
    // C-compiler optimized
    "addfsr", "moviw", "movwi",
];
