//! Tapscript disassembly.
//!
//! The decoder walks the script left to right. Pushes and the handful of
//! opcodes tapscript renders differently are handled inline; everything else
//! goes through an [`OpcodeTable`] and must be a one byte instruction.

use std::fmt;

use log::warn;

use crate::error::{Error, Result};
use crate::opcodes::{OpcodeTable, OPCODES};

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;

/// First opcode rendered as `OP_RETURN_<n>` regardless of the table.
const FIRST_SENTINEL_OPCODE: u8 = 0xfd;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub offset: usize,
    pub mnemonic: String,
    pub payload: Option<&'a [u8]>,
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Some(data) => write!(f, "{} {}", self.mnemonic, hex::encode(data)),
            None => f.write_str(&self.mnemonic),
        }
    }
}

/// Everything decoded from a script, plus the error that stopped decoding
/// early if there was one.
#[derive(Debug)]
pub struct Disassembly<'a> {
    pub instructions: Vec<Instruction<'a>>,
    pub error: Option<Error>,
}

impl<'a> Disassembly<'a> {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn listing(&self) -> String {
        self.instructions
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drops the partial listing when decoding failed.
    pub fn into_result(self) -> Result<String> {
        let listing = self.listing();
        match self.error {
            Some(err) => Err(err),
            None => Ok(listing),
        }
    }
}

struct Cursor<'a> {
    script: &'a [u8],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> usize {
        self.script.len() - self.index
    }

    fn take(&mut self, n: usize, offset: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::TruncatedPushPayload {
                offset,
                needed: n,
                available: self.remaining(),
            });
        }
        let data = &self.script[self.index..self.index + n];
        self.index += n;
        Ok(data)
    }
}

fn decode_push<'a>(op: u8, cursor: &mut Cursor<'a>, offset: usize) -> Result<Instruction<'a>> {
    let (mnemonic, data_len) = match op {
        OP_PUSHDATA1 => {
            let len = cursor.take(1, offset)?;
            ("OP_PUSHDATA1".to_string(), len[0] as usize)
        }
        OP_PUSHDATA2 => {
            let len = cursor.take(2, offset)?;
            ("OP_PUSHDATA2".to_string(), u16::from_le_bytes([len[0], len[1]]) as usize)
        }
        OP_PUSHDATA4 => {
            let len = cursor.take(4, offset)?;
            ("OP_PUSHDATA4".to_string(), u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize)
        }
        _ => (format!("OP_PUSHBYTES_{}", op), op as usize),
    };
    let data = cursor.take(data_len, offset)?;
    Ok(Instruction { offset, mnemonic, payload: Some(data) })
}

fn decode_generic(op: u8, table: &OpcodeTable, cursor: &mut Cursor<'_>, offset: usize) -> Result<String> {
    let info = &table[op as usize];
    if info.length != 1 {
        return Err(Error::UnexpectedPayloadOpcode {
            offset,
            opcode: op,
            name: info.name,
            length: info.length,
        });
    }
    cursor.index += info.length;

    if op >= FIRST_SENTINEL_OPCODE {
        return Ok(format!("OP_RETURN_{}", op));
    }
    // OP_1..OP_16 read as OP_PUSHNUM_1..OP_PUSHNUM_16 in tapscript
    let bare = info.name.strip_prefix("OP_").unwrap_or(info.name);
    if bare.parse::<i64>().is_ok() {
        Ok(format!("OP_PUSHNUM_{}", bare))
    } else {
        Ok(info.name.to_string())
    }
}

fn decode_one<'a>(cursor: &mut Cursor<'a>, table: &OpcodeTable) -> Result<Instruction<'a>> {
    let offset = cursor.index;
    let op = cursor.script[offset];
    cursor.index += 1;

    let fixed = match op {
        0x01..=0x4e => return decode_push(op, cursor, offset),
        0x00 => "OP_0",
        0x4f => "OP_PUSHNUM_NEG1",
        0xb1 => "OP_CLTV",
        0xb2 => "OP_CSV",
        0xba => "OP_CHECKSIGADD",
        _ => {
            // the table entry accounts for the opcode byte itself
            cursor.index = offset;
            let mnemonic = decode_generic(op, table, cursor, offset)?;
            return Ok(Instruction { offset, mnemonic, payload: None });
        }
    };
    Ok(Instruction { offset, mnemonic: fixed.to_string(), payload: None })
}

/// Disassembles a tapscript using the given opcode table.
pub fn disassemble<'a>(script: &'a [u8], table: &OpcodeTable) -> Disassembly<'a> {
    let mut cursor = Cursor { script, index: 0 };
    let mut instructions = Vec::new();

    while cursor.index < script.len() {
        match decode_one(&mut cursor, table) {
            Ok(instruction) => instructions.push(instruction),
            Err(err) => {
                warn!("disassembly stopped after {} instruction(s): {}", instructions.len(), err);
                return Disassembly { instructions, error: Some(err) };
            }
        }
    }

    Disassembly { instructions, error: None }
}

pub fn disassemble_default(script: &[u8]) -> Disassembly<'_> {
    disassemble(script, &OPCODES)
}
