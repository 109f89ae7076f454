/// Static metadata for one opcode byte.
///
/// `length` is the number of bytes the instruction occupies when it carries
/// no variable payload, opcode byte included. Direct pushes count their
/// payload, the PUSHDATA forms count only their length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub name: &'static str,
    pub length: usize,
}

impl OpcodeInfo {
    pub const fn new(name: &'static str, length: usize) -> Self {
        OpcodeInfo { name, length }
    }
}

pub type OpcodeTable = [OpcodeInfo; 256];

pub fn opcode_info(op: u8) -> &'static OpcodeInfo {
    &OPCODES[op as usize]
}

pub static OPCODES: OpcodeTable = [
    // constants and pushes
    OpcodeInfo::new("OP_0", 1), // 0x00
    OpcodeInfo::new("OP_PUSHBYTES_1", 2), // 0x01
    OpcodeInfo::new("OP_PUSHBYTES_2", 3), // 0x02
    OpcodeInfo::new("OP_PUSHBYTES_3", 4), // 0x03
    OpcodeInfo::new("OP_PUSHBYTES_4", 5), // 0x04
    OpcodeInfo::new("OP_PUSHBYTES_5", 6), // 0x05
    OpcodeInfo::new("OP_PUSHBYTES_6", 7), // 0x06
    OpcodeInfo::new("OP_PUSHBYTES_7", 8), // 0x07
    OpcodeInfo::new("OP_PUSHBYTES_8", 9), // 0x08
    OpcodeInfo::new("OP_PUSHBYTES_9", 10), // 0x09
    OpcodeInfo::new("OP_PUSHBYTES_10", 11), // 0x0a
    OpcodeInfo::new("OP_PUSHBYTES_11", 12), // 0x0b
    OpcodeInfo::new("OP_PUSHBYTES_12", 13), // 0x0c
    OpcodeInfo::new("OP_PUSHBYTES_13", 14), // 0x0d
    OpcodeInfo::new("OP_PUSHBYTES_14", 15), // 0x0e
    OpcodeInfo::new("OP_PUSHBYTES_15", 16), // 0x0f
    OpcodeInfo::new("OP_PUSHBYTES_16", 17), // 0x10
    OpcodeInfo::new("OP_PUSHBYTES_17", 18), // 0x11
    OpcodeInfo::new("OP_PUSHBYTES_18", 19), // 0x12
    OpcodeInfo::new("OP_PUSHBYTES_19", 20), // 0x13
    OpcodeInfo::new("OP_PUSHBYTES_20", 21), // 0x14
    OpcodeInfo::new("OP_PUSHBYTES_21", 22), // 0x15
    OpcodeInfo::new("OP_PUSHBYTES_22", 23), // 0x16
    OpcodeInfo::new("OP_PUSHBYTES_23", 24), // 0x17
    OpcodeInfo::new("OP_PUSHBYTES_24", 25), // 0x18
    OpcodeInfo::new("OP_PUSHBYTES_25", 26), // 0x19
    OpcodeInfo::new("OP_PUSHBYTES_26", 27), // 0x1a
    OpcodeInfo::new("OP_PUSHBYTES_27", 28), // 0x1b
    OpcodeInfo::new("OP_PUSHBYTES_28", 29), // 0x1c
    OpcodeInfo::new("OP_PUSHBYTES_29", 30), // 0x1d
    OpcodeInfo::new("OP_PUSHBYTES_30", 31), // 0x1e
    OpcodeInfo::new("OP_PUSHBYTES_31", 32), // 0x1f
    OpcodeInfo::new("OP_PUSHBYTES_32", 33), // 0x20
    OpcodeInfo::new("OP_PUSHBYTES_33", 34), // 0x21
    OpcodeInfo::new("OP_PUSHBYTES_34", 35), // 0x22
    OpcodeInfo::new("OP_PUSHBYTES_35", 36), // 0x23
    OpcodeInfo::new("OP_PUSHBYTES_36", 37), // 0x24
    OpcodeInfo::new("OP_PUSHBYTES_37", 38), // 0x25
    OpcodeInfo::new("OP_PUSHBYTES_38", 39), // 0x26
    OpcodeInfo::new("OP_PUSHBYTES_39", 40), // 0x27
    OpcodeInfo::new("OP_PUSHBYTES_40", 41), // 0x28
    OpcodeInfo::new("OP_PUSHBYTES_41", 42), // 0x29
    OpcodeInfo::new("OP_PUSHBYTES_42", 43), // 0x2a
    OpcodeInfo::new("OP_PUSHBYTES_43", 44), // 0x2b
    OpcodeInfo::new("OP_PUSHBYTES_44", 45), // 0x2c
    OpcodeInfo::new("OP_PUSHBYTES_45", 46), // 0x2d
    OpcodeInfo::new("OP_PUSHBYTES_46", 47), // 0x2e
    OpcodeInfo::new("OP_PUSHBYTES_47", 48), // 0x2f
    OpcodeInfo::new("OP_PUSHBYTES_48", 49), // 0x30
    OpcodeInfo::new("OP_PUSHBYTES_49", 50), // 0x31
    OpcodeInfo::new("OP_PUSHBYTES_50", 51), // 0x32
    OpcodeInfo::new("OP_PUSHBYTES_51", 52), // 0x33
    OpcodeInfo::new("OP_PUSHBYTES_52", 53), // 0x34
    OpcodeInfo::new("OP_PUSHBYTES_53", 54), // 0x35
    OpcodeInfo::new("OP_PUSHBYTES_54", 55), // 0x36
    OpcodeInfo::new("OP_PUSHBYTES_55", 56), // 0x37
    OpcodeInfo::new("OP_PUSHBYTES_56", 57), // 0x38
    OpcodeInfo::new("OP_PUSHBYTES_57", 58), // 0x39
    OpcodeInfo::new("OP_PUSHBYTES_58", 59), // 0x3a
    OpcodeInfo::new("OP_PUSHBYTES_59", 60), // 0x3b
    OpcodeInfo::new("OP_PUSHBYTES_60", 61), // 0x3c
    OpcodeInfo::new("OP_PUSHBYTES_61", 62), // 0x3d
    OpcodeInfo::new("OP_PUSHBYTES_62", 63), // 0x3e
    OpcodeInfo::new("OP_PUSHBYTES_63", 64), // 0x3f
    OpcodeInfo::new("OP_PUSHBYTES_64", 65), // 0x40
    OpcodeInfo::new("OP_PUSHBYTES_65", 66), // 0x41
    OpcodeInfo::new("OP_PUSHBYTES_66", 67), // 0x42
    OpcodeInfo::new("OP_PUSHBYTES_67", 68), // 0x43
    OpcodeInfo::new("OP_PUSHBYTES_68", 69), // 0x44
    OpcodeInfo::new("OP_PUSHBYTES_69", 70), // 0x45
    OpcodeInfo::new("OP_PUSHBYTES_70", 71), // 0x46
    OpcodeInfo::new("OP_PUSHBYTES_71", 72), // 0x47
    OpcodeInfo::new("OP_PUSHBYTES_72", 73), // 0x48
    OpcodeInfo::new("OP_PUSHBYTES_73", 74), // 0x49
    OpcodeInfo::new("OP_PUSHBYTES_74", 75), // 0x4a
    OpcodeInfo::new("OP_PUSHBYTES_75", 76), // 0x4b
    OpcodeInfo::new("OP_PUSHDATA1", 2), // 0x4c
    OpcodeInfo::new("OP_PUSHDATA2", 3), // 0x4d
    OpcodeInfo::new("OP_PUSHDATA4", 5), // 0x4e

    // small numbers
    OpcodeInfo::new("OP_1NEGATE", 1), // 0x4f
    OpcodeInfo::new("OP_RESERVED", 1), // 0x50
    OpcodeInfo::new("OP_1", 1), // 0x51
    OpcodeInfo::new("OP_2", 1), // 0x52
    OpcodeInfo::new("OP_3", 1), // 0x53
    OpcodeInfo::new("OP_4", 1), // 0x54
    OpcodeInfo::new("OP_5", 1), // 0x55
    OpcodeInfo::new("OP_6", 1), // 0x56
    OpcodeInfo::new("OP_7", 1), // 0x57
    OpcodeInfo::new("OP_8", 1), // 0x58
    OpcodeInfo::new("OP_9", 1), // 0x59
    OpcodeInfo::new("OP_10", 1), // 0x5a
    OpcodeInfo::new("OP_11", 1), // 0x5b
    OpcodeInfo::new("OP_12", 1), // 0x5c
    OpcodeInfo::new("OP_13", 1), // 0x5d
    OpcodeInfo::new("OP_14", 1), // 0x5e
    OpcodeInfo::new("OP_15", 1), // 0x5f
    OpcodeInfo::new("OP_16", 1), // 0x60

    // flow control
    OpcodeInfo::new("OP_NOP", 1), // 0x61
    OpcodeInfo::new("OP_VER", 1), // 0x62
    OpcodeInfo::new("OP_IF", 1), // 0x63
    OpcodeInfo::new("OP_NOTIF", 1), // 0x64
    OpcodeInfo::new("OP_VERIF", 1), // 0x65
    OpcodeInfo::new("OP_VERNOTIF", 1), // 0x66
    OpcodeInfo::new("OP_ELSE", 1), // 0x67
    OpcodeInfo::new("OP_ENDIF", 1), // 0x68
    OpcodeInfo::new("OP_VERIFY", 1), // 0x69
    OpcodeInfo::new("OP_RETURN", 1), // 0x6a

    // stack
    OpcodeInfo::new("OP_TOALTSTACK", 1), // 0x6b
    OpcodeInfo::new("OP_FROMALTSTACK", 1), // 0x6c
    OpcodeInfo::new("OP_2DROP", 1), // 0x6d
    OpcodeInfo::new("OP_2DUP", 1), // 0x6e
    OpcodeInfo::new("OP_3DUP", 1), // 0x6f
    OpcodeInfo::new("OP_2OVER", 1), // 0x70
    OpcodeInfo::new("OP_2ROT", 1), // 0x71
    OpcodeInfo::new("OP_2SWAP", 1), // 0x72
    OpcodeInfo::new("OP_IFDUP", 1), // 0x73
    OpcodeInfo::new("OP_DEPTH", 1), // 0x74
    OpcodeInfo::new("OP_DROP", 1), // 0x75
    OpcodeInfo::new("OP_DUP", 1), // 0x76
    OpcodeInfo::new("OP_NIP", 1), // 0x77
    OpcodeInfo::new("OP_OVER", 1), // 0x78
    OpcodeInfo::new("OP_PICK", 1), // 0x79
    OpcodeInfo::new("OP_ROLL", 1), // 0x7a
    OpcodeInfo::new("OP_ROT", 1), // 0x7b
    OpcodeInfo::new("OP_SWAP", 1), // 0x7c
    OpcodeInfo::new("OP_TUCK", 1), // 0x7d

    // splice
    OpcodeInfo::new("OP_CAT", 1), // 0x7e
    OpcodeInfo::new("OP_SUBSTR", 1), // 0x7f
    OpcodeInfo::new("OP_LEFT", 1), // 0x80
    OpcodeInfo::new("OP_RIGHT", 1), // 0x81
    OpcodeInfo::new("OP_SIZE", 1), // 0x82

    // bitwise logic
    OpcodeInfo::new("OP_INVERT", 1), // 0x83
    OpcodeInfo::new("OP_AND", 1), // 0x84
    OpcodeInfo::new("OP_OR", 1), // 0x85
    OpcodeInfo::new("OP_XOR", 1), // 0x86
    OpcodeInfo::new("OP_EQUAL", 1), // 0x87
    OpcodeInfo::new("OP_EQUALVERIFY", 1), // 0x88
    OpcodeInfo::new("OP_RESERVED1", 1), // 0x89
    OpcodeInfo::new("OP_RESERVED2", 1), // 0x8a

    // arithmetic
    OpcodeInfo::new("OP_1ADD", 1), // 0x8b
    OpcodeInfo::new("OP_1SUB", 1), // 0x8c
    OpcodeInfo::new("OP_2MUL", 1), // 0x8d
    OpcodeInfo::new("OP_2DIV", 1), // 0x8e
    OpcodeInfo::new("OP_NEGATE", 1), // 0x8f
    OpcodeInfo::new("OP_ABS", 1), // 0x90
    OpcodeInfo::new("OP_NOT", 1), // 0x91
    OpcodeInfo::new("OP_0NOTEQUAL", 1), // 0x92
    OpcodeInfo::new("OP_ADD", 1), // 0x93
    OpcodeInfo::new("OP_SUB", 1), // 0x94
    OpcodeInfo::new("OP_MUL", 1), // 0x95
    OpcodeInfo::new("OP_DIV", 1), // 0x96
    OpcodeInfo::new("OP_MOD", 1), // 0x97
    OpcodeInfo::new("OP_LSHIFT", 1), // 0x98
    OpcodeInfo::new("OP_RSHIFT", 1), // 0x99
    OpcodeInfo::new("OP_BOOLAND", 1), // 0x9a
    OpcodeInfo::new("OP_BOOLOR", 1), // 0x9b
    OpcodeInfo::new("OP_NUMEQUAL", 1), // 0x9c
    OpcodeInfo::new("OP_NUMEQUALVERIFY", 1), // 0x9d
    OpcodeInfo::new("OP_NUMNOTEQUAL", 1), // 0x9e
    OpcodeInfo::new("OP_LESSTHAN", 1), // 0x9f
    OpcodeInfo::new("OP_GREATERTHAN", 1), // 0xa0
    OpcodeInfo::new("OP_LESSTHANOREQUAL", 1), // 0xa1
    OpcodeInfo::new("OP_GREATERTHANOREQUAL", 1), // 0xa2
    OpcodeInfo::new("OP_MIN", 1), // 0xa3
    OpcodeInfo::new("OP_MAX", 1), // 0xa4
    OpcodeInfo::new("OP_WITHIN", 1), // 0xa5

    // crypto
    OpcodeInfo::new("OP_RIPEMD160", 1), // 0xa6
    OpcodeInfo::new("OP_SHA1", 1), // 0xa7
    OpcodeInfo::new("OP_SHA256", 1), // 0xa8
    OpcodeInfo::new("OP_HASH160", 1), // 0xa9
    OpcodeInfo::new("OP_HASH256", 1), // 0xaa
    OpcodeInfo::new("OP_CODESEPARATOR", 1), // 0xab
    OpcodeInfo::new("OP_CHECKSIG", 1), // 0xac
    OpcodeInfo::new("OP_CHECKSIGVERIFY", 1), // 0xad
    OpcodeInfo::new("OP_CHECKMULTISIG", 1), // 0xae
    OpcodeInfo::new("OP_CHECKMULTISIGVERIFY", 1), // 0xaf

    // expansion
    OpcodeInfo::new("OP_NOP1", 1), // 0xb0
    OpcodeInfo::new("OP_CHECKLOCKTIMEVERIFY", 1), // 0xb1
    OpcodeInfo::new("OP_CHECKSEQUENCEVERIFY", 1), // 0xb2
    OpcodeInfo::new("OP_NOP4", 1), // 0xb3
    OpcodeInfo::new("OP_NOP5", 1), // 0xb4
    OpcodeInfo::new("OP_NOP6", 1), // 0xb5
    OpcodeInfo::new("OP_NOP7", 1), // 0xb6
    OpcodeInfo::new("OP_NOP8", 1), // 0xb7
    OpcodeInfo::new("OP_NOP9", 1), // 0xb8
    OpcodeInfo::new("OP_NOP10", 1), // 0xb9

    // tapscript
    OpcodeInfo::new("OP_CHECKSIGADD", 1), // 0xba

    // unassigned
    OpcodeInfo::new("OP_RETURN_187", 1), // 0xbb
    OpcodeInfo::new("OP_RETURN_188", 1), // 0xbc
    OpcodeInfo::new("OP_RETURN_189", 1), // 0xbd
    OpcodeInfo::new("OP_RETURN_190", 1), // 0xbe
    OpcodeInfo::new("OP_RETURN_191", 1), // 0xbf
    OpcodeInfo::new("OP_RETURN_192", 1), // 0xc0
    OpcodeInfo::new("OP_RETURN_193", 1), // 0xc1
    OpcodeInfo::new("OP_RETURN_194", 1), // 0xc2
    OpcodeInfo::new("OP_RETURN_195", 1), // 0xc3
    OpcodeInfo::new("OP_RETURN_196", 1), // 0xc4
    OpcodeInfo::new("OP_RETURN_197", 1), // 0xc5
    OpcodeInfo::new("OP_RETURN_198", 1), // 0xc6
    OpcodeInfo::new("OP_RETURN_199", 1), // 0xc7
    OpcodeInfo::new("OP_RETURN_200", 1), // 0xc8
    OpcodeInfo::new("OP_RETURN_201", 1), // 0xc9
    OpcodeInfo::new("OP_RETURN_202", 1), // 0xca
    OpcodeInfo::new("OP_RETURN_203", 1), // 0xcb
    OpcodeInfo::new("OP_RETURN_204", 1), // 0xcc
    OpcodeInfo::new("OP_RETURN_205", 1), // 0xcd
    OpcodeInfo::new("OP_RETURN_206", 1), // 0xce
    OpcodeInfo::new("OP_RETURN_207", 1), // 0xcf
    OpcodeInfo::new("OP_RETURN_208", 1), // 0xd0
    OpcodeInfo::new("OP_RETURN_209", 1), // 0xd1
    OpcodeInfo::new("OP_RETURN_210", 1), // 0xd2
    OpcodeInfo::new("OP_RETURN_211", 1), // 0xd3
    OpcodeInfo::new("OP_RETURN_212", 1), // 0xd4
    OpcodeInfo::new("OP_RETURN_213", 1), // 0xd5
    OpcodeInfo::new("OP_RETURN_214", 1), // 0xd6
    OpcodeInfo::new("OP_RETURN_215", 1), // 0xd7
    OpcodeInfo::new("OP_RETURN_216", 1), // 0xd8
    OpcodeInfo::new("OP_RETURN_217", 1), // 0xd9
    OpcodeInfo::new("OP_RETURN_218", 1), // 0xda
    OpcodeInfo::new("OP_RETURN_219", 1), // 0xdb
    OpcodeInfo::new("OP_RETURN_220", 1), // 0xdc
    OpcodeInfo::new("OP_RETURN_221", 1), // 0xdd
    OpcodeInfo::new("OP_RETURN_222", 1), // 0xde
    OpcodeInfo::new("OP_RETURN_223", 1), // 0xdf
    OpcodeInfo::new("OP_RETURN_224", 1), // 0xe0
    OpcodeInfo::new("OP_RETURN_225", 1), // 0xe1
    OpcodeInfo::new("OP_RETURN_226", 1), // 0xe2
    OpcodeInfo::new("OP_RETURN_227", 1), // 0xe3
    OpcodeInfo::new("OP_RETURN_228", 1), // 0xe4
    OpcodeInfo::new("OP_RETURN_229", 1), // 0xe5
    OpcodeInfo::new("OP_RETURN_230", 1), // 0xe6
    OpcodeInfo::new("OP_RETURN_231", 1), // 0xe7
    OpcodeInfo::new("OP_RETURN_232", 1), // 0xe8
    OpcodeInfo::new("OP_RETURN_233", 1), // 0xe9
    OpcodeInfo::new("OP_RETURN_234", 1), // 0xea
    OpcodeInfo::new("OP_RETURN_235", 1), // 0xeb
    OpcodeInfo::new("OP_RETURN_236", 1), // 0xec
    OpcodeInfo::new("OP_RETURN_237", 1), // 0xed
    OpcodeInfo::new("OP_RETURN_238", 1), // 0xee
    OpcodeInfo::new("OP_RETURN_239", 1), // 0xef
    OpcodeInfo::new("OP_RETURN_240", 1), // 0xf0
    OpcodeInfo::new("OP_RETURN_241", 1), // 0xf1
    OpcodeInfo::new("OP_RETURN_242", 1), // 0xf2
    OpcodeInfo::new("OP_RETURN_243", 1), // 0xf3
    OpcodeInfo::new("OP_RETURN_244", 1), // 0xf4
    OpcodeInfo::new("OP_RETURN_245", 1), // 0xf5
    OpcodeInfo::new("OP_RETURN_246", 1), // 0xf6
    OpcodeInfo::new("OP_RETURN_247", 1), // 0xf7
    OpcodeInfo::new("OP_RETURN_248", 1), // 0xf8
    OpcodeInfo::new("OP_RETURN_249", 1), // 0xf9
    OpcodeInfo::new("OP_RETURN_250", 1), // 0xfa
    OpcodeInfo::new("OP_RETURN_251", 1), // 0xfb
    OpcodeInfo::new("OP_RETURN_252", 1), // 0xfc
    OpcodeInfo::new("OP_RETURN_253", 1), // 0xfd
    OpcodeInfo::new("OP_RETURN_254", 1), // 0xfe
    OpcodeInfo::new("OP_INVALIDOPCODE", 1), // 0xff
];
