//! Recognising tapscript script-path spends from a raw witness stack.
//!
//! BIP-341: if there are at least two witness elements and the first byte of
//! the last one is 0x50, that element is the annex and is dropped before the
//! rest of the stack is interpreted. For a script-path spend the remaining
//! last element is the control block, whose first byte carries the leaf
//! version, and the element before it is the script.

use log::debug;

use crate::error::{Error, Result};

pub const ANNEX_TAG: u8 = 0x50;
pub const TAPSCRIPT_LEAF_VERSION: u8 = 0xc0;
/// Leaf version with the output key parity bit set.
pub const TAPSCRIPT_LEAF_VERSION_ODD: u8 = 0xc1;

/// A compatible script-path spend, borrowed from the witness it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapscriptSpend<'a> {
    pub script: &'a [u8],
    pub leaf_version: u8,
    pub control_block: &'a [u8],
    pub annex: Option<&'a [u8]>,
}

fn is_annex(element: &[u8]) -> bool {
    element.first() == Some(&ANNEX_TAG)
}

/// Returns a copy of the stack without its annex, if it has one.
pub fn strip_annex<T: AsRef<[u8]> + Clone>(stack: &[T]) -> Result<Vec<T>> {
    if stack.len() < 2 {
        return Err(Error::InsufficientElements { len: stack.len() });
    }
    let mut stripped = stack.to_vec();
    if stripped.last().is_some_and(|last| is_annex(last.as_ref())) {
        debug!("dropping annex from {} element witness", stack.len());
        stripped.pop();
    }
    Ok(stripped)
}

pub fn is_compatible_tapscript<T: AsRef<[u8]> + Clone>(stack: &[T]) -> bool {
    if stack.len() < 2 {
        return false;
    }
    let stripped = match strip_annex(stack) {
        Ok(stripped) => stripped,
        Err(_) => return false,
    };
    if stripped.len() < 2 {
        debug!("witness too short once the annex is removed");
        return false;
    }
    match stripped.last().and_then(|control| control.as_ref().first()) {
        Some(&TAPSCRIPT_LEAF_VERSION) | Some(&TAPSCRIPT_LEAF_VERSION_ODD) => true,
        Some(tag) => {
            debug!("unsupported leaf version tag 0x{:02x}", tag);
            false
        }
        None => false,
    }
}

/// The script element of a compatible witness, returned unchanged.
pub fn extract_script_bytes<T: AsRef<[u8]> + Clone>(stack: &[T]) -> Result<Vec<u8>> {
    if !is_compatible_tapscript(stack) {
        return Err(Error::IncompatibleWitness);
    }
    let stripped = strip_annex(stack)?;
    Ok(stripped[stripped.len() - 2].as_ref().to_vec())
}

/// Splits a compatible witness into its parts, or `None` if it is not one.
pub fn classify<T: AsRef<[u8]>>(stack: &[T]) -> Option<TapscriptSpend<'_>> {
    let (annex, rest) = match stack {
        [.., last] if stack.len() >= 2 && is_annex(last.as_ref()) => {
            (Some(last.as_ref()), &stack[..stack.len() - 1])
        }
        _ if stack.len() >= 2 => (None, stack),
        _ => return None,
    };
    let [.., script, control_block] = rest else {
        return None;
    };
    let control_block = control_block.as_ref();
    match control_block.first() {
        Some(&TAPSCRIPT_LEAF_VERSION) | Some(&TAPSCRIPT_LEAF_VERSION_ODD) => Some(TapscriptSpend {
            script: script.as_ref(),
            leaf_version: control_block[0] & 0xfe,
            control_block,
            annex,
        }),
        _ => None,
    }
}
