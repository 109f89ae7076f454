//! Getting witness stacks out of transactions.
//!
//! Two encodings are understood: the verbose JSON record a node returns from
//! `getrawtransaction` (verbosity 2 or 3) and the raw serialized transaction
//! as hex.

use std::io::{Cursor, Read};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::hash::{hash256, txid_hex};

pub type WitnessStack = Vec<Vec<u8>>;

#[derive(Debug, Deserialize)]
pub struct TxRecord {
    pub txid: Option<String>,
    pub blocktime: Option<i64>,
    pub vin: Vec<TxInRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TxInRecord {
    pub txinwitness: Option<Vec<String>>,
}

impl TxRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn witness(&self, index: usize) -> Result<WitnessStack> {
        let input = self.vin.get(index).ok_or(Error::InputIndexOutOfRange {
            index,
            len: self.vin.len(),
        })?;
        let elements = input.txinwitness.as_ref().ok_or(Error::MissingWitness { index })?;
        decode_witness_hex(elements)
    }
}

/// Decodes hex witness elements, failing on the first one that isn't hex.
pub fn decode_witness_hex<S: AsRef<str>>(elements: &[S]) -> Result<WitnessStack> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| hex::decode(element.as_ref()).map_err(|source| Error::InvalidHex { index, source }))
        .collect()
}

pub fn witness_from_json(json: &str, input_index: usize) -> Result<WitnessStack> {
    TxRecord::from_json(json)?.witness(input_index)
}

/// A serialized transaction reduced to what witness inspection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub txid: String,
    pub version: u32,
    pub input_count: usize,
    pub witnesses: Vec<WitnessStack>,
    pub lock_time: u32,
}

fn read_varint<R: Read>(reader: &mut R, stripped: &mut Vec<u8>) -> Result<u64> {
    let mut b1 = [0u8; 1];
    reader.read_exact(&mut b1)?;
    stripped.push(b1[0]);

    let value = match b1[0] {
        0xfd => {
            let mut b2 = [0u8; 2];
            reader.read_exact(&mut b2)?;
            stripped.extend_from_slice(&b2);
            u16::from_le_bytes(b2) as u64
        }
        0xfe => {
            let mut b4 = [0u8; 4];
            reader.read_exact(&mut b4)?;
            stripped.extend_from_slice(&b4);
            u32::from_le_bytes(b4) as u64
        }
        0xff => {
            let mut b8 = [0u8; 8];
            reader.read_exact(&mut b8)?;
            stripped.extend_from_slice(&b8);
            u64::from_le_bytes(b8)
        }
        n => n as u64,
    };
    Ok(value)
}

fn read_bytes(reader: &mut Cursor<&[u8]>, len: u64) -> Result<Vec<u8>> {
    let remaining = reader.get_ref().len() as u64 - reader.position();
    if len > remaining {
        return Err(Error::MalformedTransaction(format!(
            "field of {} bytes but only {} remain",
            len, remaining
        )));
    }
    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

impl RawTransaction {
    pub fn from_hex(tx_hex: &str) -> Result<Self> {
        let bytes = hex::decode(tx_hex.trim())
            .map_err(|e| Error::MalformedTransaction(format!("invalid hex: {}", e)))?;
        Self::parse(&bytes)
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(data);
        // serialization without marker, flag and witnesses, used for the txid
        let mut stripped = Vec::with_capacity(data.len());
        let mut b4 = [0u8; 4];
        let mut b8 = [0u8; 8];

        reader.read_exact(&mut b4)?;
        stripped.extend_from_slice(&b4);
        let version = u32::from_le_bytes(b4);

        // an input count of zero is the segwit marker, followed by the flag
        let mut scratch = Vec::new();
        let mut in_count = read_varint(&mut reader, &mut scratch)?;
        let has_witness = in_count == 0;
        if has_witness {
            let mut flag = [0u8; 1];
            reader.read_exact(&mut flag)?;
            if flag[0] != 0x01 {
                return Err(Error::MalformedTransaction(format!("unknown segwit flag 0x{:02x}", flag[0])));
            }
            scratch.clear();
            in_count = read_varint(&mut reader, &mut scratch)?;
        }
        stripped.extend_from_slice(&scratch);

        for _ in 0..in_count {
            // prev txid and vout
            let outpoint = read_bytes(&mut reader, 36)?;
            stripped.extend_from_slice(&outpoint);
            let script_len = read_varint(&mut reader, &mut stripped)?;
            let script_sig = read_bytes(&mut reader, script_len)?;
            stripped.extend_from_slice(&script_sig);
            reader.read_exact(&mut b4)?;
            stripped.extend_from_slice(&b4);
        }

        let out_count = read_varint(&mut reader, &mut stripped)?;
        for _ in 0..out_count {
            reader.read_exact(&mut b8)?;
            stripped.extend_from_slice(&b8);
            let script_len = read_varint(&mut reader, &mut stripped)?;
            let script_pubkey = read_bytes(&mut reader, script_len)?;
            stripped.extend_from_slice(&script_pubkey);
        }

        let mut witnesses = Vec::new();
        for _ in 0..in_count {
            let mut stack = Vec::new();
            if has_witness {
                let mut ignored = Vec::new();
                let wit_count = read_varint(&mut reader, &mut ignored)?;
                for _ in 0..wit_count {
                    let wit_len = read_varint(&mut reader, &mut ignored)?;
                    stack.push(read_bytes(&mut reader, wit_len)?);
                }
            }
            witnesses.push(stack);
        }

        reader.read_exact(&mut b4)?;
        stripped.extend_from_slice(&b4);
        let lock_time = u32::from_le_bytes(b4);

        if reader.position() != data.len() as u64 {
            return Err(Error::MalformedTransaction(format!(
                "{} trailing bytes after lock time",
                data.len() as u64 - reader.position()
            )));
        }

        Ok(RawTransaction {
            txid: txid_hex(&hash256(&stripped)),
            version,
            input_count: witnesses.len(),
            witnesses,
            lock_time,
        })
    }
}

/// A transaction from either source, with one optional witness per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub txid: Option<String>,
    pub block_time: Option<i64>,
    pub witnesses: Vec<Option<WitnessStack>>,
}

impl Transaction {
    pub fn input_count(&self) -> usize {
        self.witnesses.len()
    }
}

/// Accepts either a JSON transaction record or raw transaction hex.
pub fn load_transaction(text: &str) -> Result<Transaction> {
    let text = text.trim();
    if text.starts_with('{') {
        let record = TxRecord::from_json(text)?;
        let witnesses = record
            .vin
            .iter()
            .map(|input| input.txinwitness.as_deref().map(decode_witness_hex).transpose())
            .collect::<Result<Vec<_>>>()?;
        return Ok(Transaction {
            txid: record.txid,
            block_time: record.blocktime,
            witnesses,
        });
    }
    let raw = RawTransaction::from_hex(text)?;
    Ok(Transaction {
        txid: Some(raw.txid),
        block_time: None,
        witnesses: raw.witnesses.into_iter().map(Some).collect(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const KEY_PATH_TX: &str = r#"
    {
        "txid": "700bf4b1d18f40c674a11d5a2c3a9c09666d24a8cfe47746b7e8148781b1f9e8",
        "version": 2,
        "locktime": 0,
        "vin": [
          {
            "txid": "2c3fd8ae40f4011712b2cd0eaa8431c82e15823fabdb304a4c3205a06fe5edf1",
            "vout": 0,
            "scriptSig": { "asm": "", "hex": "" },
            "txinwitness": [
              "6570cfa568a062d2653b7cbdfb8bf2bdfd537fda7284a9ff00c455d3df9f140a94f9894d720d09a6e70c13329fc71c86245f8e66cef7dcce425de28d3ca1a8e6"
            ],
            "sequence": 4294967295
          }
        ],
        "vout": [],
        "hex": "02000000000101f1ede56fa005324c4a30dbab3f82152ec83184aa0ecdb2121701f440aed83f2c0000000000ffffffff02220200000000000022512072a2e3409ac29a01dc70bb851dba2b4bc5e4c06a2db7a0eb90088ca65b89674200000000000000000b6a5d0814b0a733141d160001406570cfa568a062d2653b7cbdfb8bf2bdfd537fda7284a9ff00c455d3df9f140a94f9894d720d09a6e70c13329fc71c86245f8e66cef7dcce425de28d3ca1a8e600000000",
        "blocktime": 1714462823
    }"#;

    pub(crate) const SCRIPT_PATH_TX_HEX: &str = "02000000000101c79daeb324db08ebefc08f66ed7bbb28f137207a759eebd755fa7b17b8622a630000000000fdffffff0222020000000000001600148c4cab55ab911fad95542a1cd1739fd09df3029ad805000000000000160014e2fde28f96e76d7618f0e80b6c9a3db04292a5090340521d4fa4df0bf2f0933ecdbb33e11fa288346e89ef82e568cb28b0d8a528fff135c6bdcba29a8321c6566ed446be6d75226a1a415c0b0b19701660c3f90c08298b2057109034c99ed544e7bc5285920eaccc05e67556403a7da82a633c8e6cd623f0ac0063036f7264010118746578742f706c61696e3b636861727365743d7574662d3800457b2270223a226272632d3230222c226f70223a226465706c6f79222c227469636b223a2273636467222c226c696d223a2231222c226d6178223a223231303030303030227d6821c1e8de26eb76709ec2eceef1512b6d1ca4c99c24e13509bd250cbb62d8ed422fcc00000000";

    pub(crate) const SCRIPT_PATH_WITNESS: [&str; 3] = [
        "521d4fa4df0bf2f0933ecdbb33e11fa288346e89ef82e568cb28b0d8a528fff135c6bdcba29a8321c6566ed446be6d75226a1a415c0b0b19701660c3f90c0829",
        "2057109034c99ed544e7bc5285920eaccc05e67556403a7da82a633c8e6cd623f0ac0063036f7264010118746578742f706c61696e3b636861727365743d7574662d3800457b2270223a226272632d3230222c226f70223a226465706c6f79222c227469636b223a2273636467222c226c696d223a2231222c226d6178223a223231303030303030227d68",
        "c1e8de26eb76709ec2eceef1512b6d1ca4c99c24e13509bd250cbb62d8ed422fcc",
    ];

    pub(crate) fn script_path_json() -> String {
        format!(
            r#"{{
                "txid": "55750249356628f5b6367cec82b092fb69b1b80a1f55a4cdbf9041d92a101a30",
                "vin": [ {{ "txid": "632a62b8177bfa55d7eb9e757a2037f128bb7bed668fc0efeb08db24b3ae9dc7", "vout": 0, "txinwitness": ["{}", "{}", "{}"] }} ],
                "blocktime": 1714486187
            }}"#,
            SCRIPT_PATH_WITNESS[0], SCRIPT_PATH_WITNESS[1], SCRIPT_PATH_WITNESS[2]
        )
    }

    #[test]
    fn test_witness_from_json_key_path() {
        let witness = witness_from_json(KEY_PATH_TX, 0).unwrap();
        assert_eq!(witness.len(), 1);
        assert_eq!(witness[0].len(), 64);
        assert!(hex::encode(&witness[0]).starts_with("6570cfa5"));
    }

    #[test]
    fn test_witness_from_json_script_path() {
        let witness = witness_from_json(&script_path_json(), 0).unwrap();
        assert_eq!(witness, decode_witness_hex(&SCRIPT_PATH_WITNESS).unwrap());
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(witness_from_json(KEY_PATH_TX, 1), Err(Error::InputIndexOutOfRange { index: 1, len: 1 })));
        assert!(matches!(witness_from_json(r#"{"vin": [{}]}"#, 0), Err(Error::MissingWitness { index: 0 })));
        assert!(matches!(witness_from_json(r#"{"txid": "00"}"#, 0), Err(Error::Json(_))));
        assert!(matches!(witness_from_json("not json", 0), Err(Error::Json(_))));
        assert!(matches!(witness_from_json(r#"{"vin": [{"txinwitness": [1]}]}"#, 0), Err(Error::Json(_))));
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        let result = decode_witness_hex(&["00", "abc", "zz"]);
        assert!(matches!(result, Err(Error::InvalidHex { index: 1, .. })));
    }

    #[test]
    fn test_parse_raw_segwit() {
        let raw = RawTransaction::from_hex(SCRIPT_PATH_TX_HEX).unwrap();
        assert_eq!(raw.txid, "55750249356628f5b6367cec82b092fb69b1b80a1f55a4cdbf9041d92a101a30");
        assert_eq!(raw.version, 2);
        assert_eq!(raw.input_count, 1);
        assert_eq!(raw.lock_time, 0);
        assert_eq!(raw.witnesses[0], decode_witness_hex(&SCRIPT_PATH_WITNESS).unwrap());
    }

    #[test]
    fn test_parse_raw_key_path() {
        let record: serde_json::Value = serde_json::from_str(KEY_PATH_TX).unwrap();
        let raw = RawTransaction::from_hex(record["hex"].as_str().unwrap()).unwrap();
        assert_eq!(raw.txid, "700bf4b1d18f40c674a11d5a2c3a9c09666d24a8cfe47746b7e8148781b1f9e8");
        assert_eq!(raw.witnesses, witness_from_json(KEY_PATH_TX, 0).map(|w| vec![w]).unwrap());
    }

    #[test]
    fn test_parse_legacy() {
        let tx = "0100000001c997a5e56e104102fa209c6a852dd90660a20b2d9c352423edce25857fcd3704000000004847304402204e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd410220181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d0901ffffffff0200ca9a3b00000000434104ae1a62fe09c5f51b13905f07f06b99a2f7159b2225f374cd378d71302fa28414e7aab37397f554a7df5f142c21c1b7303b8a0626f1baded5c72a704f7e6cd84cac00286bee0000000043410411db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5cb2e0eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3ac00000000";
        let raw = RawTransaction::from_hex(tx).unwrap();
        assert_eq!(raw.txid, "f4184fc596403b9d638783cf57adfe4c75c605f6356fbc91338530e9831e9e16");
        assert_eq!(raw.witnesses, vec![Vec::<Vec<u8>>::new()]);
    }

    #[test]
    fn test_parse_truncated() {
        let truncated = &SCRIPT_PATH_TX_HEX[..SCRIPT_PATH_TX_HEX.len() - 40];
        assert!(RawTransaction::from_hex(truncated).is_err());

        let mut padded = SCRIPT_PATH_TX_HEX.to_string();
        padded.push_str("00");
        assert!(matches!(RawTransaction::from_hex(&padded), Err(Error::MalformedTransaction(_))));

        // witness element claiming far more bytes than exist
        assert!(matches!(
            RawTransaction::parse(&hex_literal::hex!("02000000 0001 01 0000000000000000000000000000000000000000000000000000000000000000 00000000 00 ffffffff 00 01 fe ffffff7f")),
            Err(Error::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_load_transaction() {
        let from_json = load_transaction(&script_path_json()).unwrap();
        let from_hex = load_transaction(&format!("  {}\n", SCRIPT_PATH_TX_HEX)).unwrap();
        assert_eq!(from_json.witnesses, from_hex.witnesses);
        assert_eq!(from_json.txid, from_hex.txid);
        assert_eq!(from_json.block_time, Some(1714486187));
        assert_eq!(from_hex.block_time, None);

        let no_witness = load_transaction(r#"{"vin": [{}, {"txinwitness": []}]}"#).unwrap();
        assert_eq!(no_witness.input_count(), 2);
        assert_eq!(no_witness.witnesses, vec![None, Some(vec![])]);
    }
}
