//! Extracts the tapscript from a taproot script-path witness and disassembles
//! it into one instruction per line.
//!
//! ```
//! use tapscript_disasm::{disassemble_default, extract_script_bytes};
//!
//! let witness = vec![vec![0x01; 64], vec![0x51, 0xb1], vec![0xc0; 33]];
//! let script = extract_script_bytes(&witness).unwrap();
//! assert_eq!(disassemble_default(&script).listing(), "OP_PUSHNUM_1\nOP_CLTV");
//! ```

pub mod config;
pub mod disassemble;
pub mod error;
pub mod hash;
pub mod opcodes;
pub mod report;
pub mod transaction;
pub mod witness;

pub use disassemble::{disassemble, disassemble_default, Disassembly, Instruction};
pub use error::{Error, Result};
pub use opcodes::{OpcodeInfo, OpcodeTable, OPCODES};
pub use transaction::{load_transaction, witness_from_json, RawTransaction, Transaction};
pub use witness::{classify, extract_script_bytes, is_compatible_tapscript, strip_annex, TapscriptSpend};
