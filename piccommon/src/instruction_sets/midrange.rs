/// 14-bit core (PIC16F84A, PIC16F877, PIC16F887, ...).
pub const MIDRANGE_INSTRUCTIONS: &[&str] = &[
    // Byte-oriented file register operations
    "addwf", "andwf", "clrf", "clrw", "comf", "decf", "decfsz", "incf", "incfsz", "iorwf",
    "movf", "movwf", "nop", "rlf", "rrf", "subwf", "swapf", "xorwf",
    // Bit-oriented file register operations
    "bcf", "bsf", "btfsc", "btfss",
    // Literal and control operations
    "addlw", "andlw", "call", "clrwdt", "goto", "iorlw", "movlw", "retfie", "retlw", "return",
    "sleep", "sublw", "xorlw",
];
