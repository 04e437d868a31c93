/// 12-bit core (PIC10F2xx, PIC12F5xx, PIC16F5x).
pub const BASELINE_INSTRUCTIONS: &[&str] = &[
    // Byte-oriented file register operations
    "addwf", "andwf", "clrf", "clrw", "comf", "decf", "decfsz", "incf", "incfsz", "iorwf",
    "movf", "movwf", "nop", "rlf", "rrf", "subwf", "swapf", "xorwf",
    // Bit-oriented file register operations
    "bcf", "bsf", "btfsc", "btfss",
    // Literal and control operations
    "andlw", "call", "clrwdt", "goto", "iorlw", "movlw", "option", "retlw", "sleep", "tris",
    "xorlw",
];
