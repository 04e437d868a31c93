/// 16-bit core (PIC18).
pub const PIC18_INSTRUCTIONS: &[&str] = &[
    // Byte-oriented file register operations
    "addwf", "addwfc", "andwf", "clrf", "comf", "cpfseq", "cpfsgt", "cpfslt", "decf",
    "decfsz", "dcfsnz", "incf", "incfsz", "infsnz", "iorwf", "movf", "movff", "movwf",
    "mulwf", "negf", "rlcf", "rlncf", "rrcf", "rrncf", "setf", "subfwb", "subwf", "subwfb",
    "swapf", "tstfsz", "xorwf",
    // Bit-oriented file register operations
    "bcf", "bsf", "btfsc", "btfss", "btg",
    // Control operations
    "bc", "bn", "bnc", "bnn", "bnov", "bnz", "bov", "bra", "bz", "call", "clrwdt", "daw",
    "goto", "nop", "pop", "push", "rcall", "reset", "retfie", "retlw", "return", "sleep",
    // Literal operations
    "addlw", "andlw", "iorlw", "lfsr", "movlb", "movlw", "mullw", "sublw", "xorlw",
    // Data memory <-> program memory operations
    "tblrd*", "tblrd*+", "tblrd*-", "tblrd+*", "tblwt*", "tblwt*+", "tblwt*-", "tblwt+*",
];
