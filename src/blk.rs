//! Outer container (`.blk`) decoding.
//!
//! A container is a short key header followed by an encrypted body. The body
//! is recovered by XORing a derived 4096-byte pad cyclically over the whole
//! ciphertext, then interpreted as zero or more consecutive `mhy0`
//! sub-containers. Callers that indexed the container before can hand back
//! the recorded sub-container offsets and decode just those.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::warn;
use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32},
    IResult,
};

use crate::error::Error;
use crate::keystream::derive_xorpad;
use crate::mhy0::Mhy0File;
use crate::scramble::{transform_key, KEY_LEN};

pub const BLK_MAGIC: [u8; 4] = *b"blk\0";

/// A decoded outer container.
pub struct BlkFile {
    pub files: Vec<Mhy0File>,
}

// Parser for the key fields between the magic and the ciphertext
fn key_fields(input: &[u8]) -> IResult<&[u8], (&[u8], u16)> {
    let (input, key_size) = le_u32(input)?;
    let (input, key) = take(key_size)(input)?;
    // The second half of the key field is unused.
    let (input, _) = take(key_size)(input)?;
    let (input, xorpad_size) = le_u16(input)?;
    Ok((input, (key, xorpad_size)))
}

/// Decrypt the container body, leaving the header behind.
pub(crate) fn decrypt_body(input: &[u8]) -> crate::error::Result<Vec<u8>> {
    let actual: [u8; 4] = input
        .get(..4)
        .ok_or_else(|| Error::malformed(0, "truncated magic"))?
        .try_into()
        .unwrap();
    if actual != BLK_MAGIC {
        return Err(Error::InvalidFormat {
            offset: 0,
            expected: BLK_MAGIC,
            actual,
        });
    }

    let (ciphertext, (key, xorpad_size)) =
        key_fields(&input[4..]).map_err(|_| Error::malformed(4, "truncated key fields"))?;
    let key: &[u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| Error::malformed(4, format!("unexpected key length: {}", key.len())))?;
    if xorpad_size > 0 && !ciphertext.is_empty() && ciphertext.len() < 8 {
        return Err(Error::malformed(
            (input.len() - ciphertext.len()) as u64,
            "ciphertext shorter than one keystream word",
        ));
    }

    let key = transform_key(key);
    let pad = derive_xorpad(&key, ciphertext, xorpad_size);
    let mut body = ciphertext.to_vec();
    for (i, b) in body.iter_mut().enumerate() {
        *b ^= pad[i & 0xFFF];
    }
    Ok(body)
}

/// Decode a container from memory.
///
/// With `offsets`, exactly those sub-containers are decoded and a failure on
/// one is logged and skipped. Without, the body is scanned from the top and
/// the scan stops at the first failure, returning what decoded so far.
pub fn parse_blk(
    input: &[u8],
    source_path: &str,
    offsets: Option<&[u64]>,
) -> crate::error::Result<BlkFile> {
    let body = decrypt_body(input)?;

    let mut files = Vec::new();
    match offsets {
        Some(offsets) => {
            for &offset in offsets {
                match Mhy0File::parse(&body, offset, source_path) {
                    Ok((file, _)) => files.push(file),
                    Err(e) => warn!("skipping sub-container in {source_path} at {offset:#x}: {e}"),
                }
            }
        }
        None => {
            let mut pos = 0u64;
            while (pos as usize) < body.len() {
                match Mhy0File::parse(&body, pos, source_path) {
                    Ok((file, consumed)) => {
                        pos += consumed as u64;
                        files.push(file);
                    }
                    Err(e) => {
                        warn!("stopping scan of {source_path} at {pos:#x}: {e}");
                        break;
                    }
                }
            }
        }
    }
    Ok(BlkFile { files })
}

/// Load a container file from disk, scanning for every sub-container.
pub fn load_blk_file(path: &Path) -> Result<BlkFile> {
    let content = fs::read(path).context("Failed to read blk file")?;
    Ok(parse_blk(&content, &path.to_string_lossy(), None)?)
}

/// Load a container file from disk, decoding only the given sub-container
/// offsets recorded by a previous index build.
pub fn load_blk_file_at(path: &Path, offsets: &[u64]) -> Result<BlkFile> {
    let content = fs::read(path).context("Failed to read blk file")?;
    Ok(parse_blk(&content, &path.to_string_lossy(), Some(offsets))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assemble a container around `plaintext` with a zero declared xorpad
    /// size, so the pad depends only on the key and the body encrypts as
    /// `plaintext XOR pad`.
    fn make_blk(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
        let pad = derive_xorpad(&transform_key(key), &[], 0);
        let mut out = BLK_MAGIC.to_vec();
        out.extend_from_slice(&(KEY_LEN as u32).to_le_bytes());
        out.extend_from_slice(key);
        out.extend_from_slice(&[0u8; KEY_LEN]);
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend(
            plaintext
                .iter()
                .enumerate()
                .map(|(i, b)| b ^ pad[i & 0xFFF]),
        );
        out
    }

    #[test]
    fn body_decrypts_back_to_the_plaintext() {
        let key = *b"0123456789abcdef";
        let plaintext = b"definitely not a sub-container".repeat(3);
        let container = make_blk(&key, &plaintext);
        assert_eq!(decrypt_body(&container).unwrap(), plaintext);
    }

    #[test]
    fn empty_body_decodes_to_zero_sub_containers() {
        let key = [0x42u8; KEY_LEN];
        let container = make_blk(&key, b"");
        let blk = parse_blk(&container, "empty.blk", None).unwrap();
        assert!(blk.files.is_empty());
    }

    #[test]
    fn scan_stops_gracefully_on_garbage() {
        let key = [0x17u8; KEY_LEN];
        let container = make_blk(&key, b"garbage that is not a sub-container");
        let blk = parse_blk(&container, "garbage.blk", None).unwrap();
        assert!(blk.files.is_empty());
    }

    #[test]
    fn explicit_offsets_skip_failing_sub_containers() {
        let key = [0x29u8; KEY_LEN];
        let container = make_blk(&key, b"nothing decodable lives at these offsets");
        let blk = parse_blk(&container, "indexed.blk", Some(&[0, 16])).unwrap();
        assert!(blk.files.is_empty());
    }

    #[test]
    fn wrong_magic_is_invalid_format() {
        let container = b"PK\x03\x04 the rest does not matter".to_vec();
        assert!(matches!(
            decrypt_body(&container),
            Err(Error::InvalidFormat { offset: 0, .. })
        ));
    }

    #[test]
    fn wrong_key_length_is_malformed() {
        let mut container = BLK_MAGIC.to_vec();
        container.extend_from_slice(&8u32.to_le_bytes());
        container.extend_from_slice(&[0u8; 8]);
        container.extend_from_slice(&[0u8; 8]);
        container.extend_from_slice(&0u16.to_le_bytes());
        assert!(matches!(
            decrypt_body(&container),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn short_ciphertext_with_declared_fold_is_malformed() {
        let mut container = BLK_MAGIC.to_vec();
        container.extend_from_slice(&(KEY_LEN as u32).to_le_bytes());
        container.extend_from_slice(&[1u8; KEY_LEN]);
        container.extend_from_slice(&[0u8; KEY_LEN]);
        container.extend_from_slice(&0x1000u16.to_le_bytes());
        container.extend_from_slice(&[0xAA; 5]);
        assert!(matches!(
            decrypt_body(&container),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn truncated_key_fields_are_malformed() {
        let mut container = BLK_MAGIC.to_vec();
        container.extend_from_slice(&(KEY_LEN as u32).to_le_bytes());
        container.extend_from_slice(&[1u8; 4]);
        assert!(matches!(
            decrypt_body(&container),
            Err(Error::MalformedHeader { offset: 4, .. })
        ));
    }
}
