//! Byte transforms for the proprietary container scramble.
//!
//! Two transforms live here. `transform_key` turns the 16-byte key found in
//! a container header into the key actually used for keystream derivation.
//! `scramble` is the in-place pass applied to sub-container headers and
//! storage blocks before LZ4 decompression; callers parameterize it with the
//! window and entry sizes their layout uses.
//!
//! Both are pure and deterministic. They reimplement a reverse-engineered
//! transform, so every table lookup and offset below must match the original
//! exactly; none of it is negotiable.

mod tables;

use tables::{
    ENTRY_INDEX_SCRAMBLE, ENTRY_KEY, ENTRY_MASK, ENTRY_MIX_TABLE, ENTRY_SUM_TABLE, EXPAND_TABLE,
    FINAL_XOR_KEY, FOLD_POSITIONS, KEY_SCRAMBLE_TABLE, MIX_TABLES, STACK_TABLE, TAIL_SBOX,
    TAIL_XOR_TABLE,
};

/// Length of the container key, before and after transformation.
pub const KEY_LEN: usize = 16;

/// XOR together 16 consecutive bytes of the expanded buffer.
fn xor_fold(buf: &[u8; 256], offset: usize) -> u8 {
    buf[offset..offset + 16].iter().fold(0, |acc, &b| acc ^ b)
}

/// Place 16 bytes at stride-16 offsets of a zeroed 256-byte buffer.
fn expand(bytes: &[u8; 16]) -> [u8; 256] {
    let mut buf = [0u8; 256];
    for (i, &b) in bytes.iter().enumerate() {
        buf[i * 16] = b;
    }
    buf
}

/// Derive the keystream key from the raw 16-byte header key.
pub fn transform_key(raw: &[u8; KEY_LEN]) -> [u8; KEY_LEN] {
    // Positional substitution through the four table rows.
    let mut key = *raw;
    for (i, b) in key.iter_mut().enumerate() {
        *b = KEY_SCRAMBLE_TABLE[((i & 3) << 8) | *b as usize];
    }

    let mut expanded = expand(&key);
    for i in 0..256 {
        expanded[i] ^= EXPAND_TABLE[i] ^ STACK_TABLE[i];
    }

    // Nine mixing rounds: fold 16 bytes at each permuted position, push the
    // fold through the lane tables, re-expand, and XOR the next table window.
    let mut folded = [0u8; 16];
    for round in 1..10 {
        let mut words = [0u32; 4];
        for (j, word) in words.iter_mut().enumerate() {
            for (lane, table) in MIX_TABLES.iter().enumerate() {
                let t = xor_fold(&expanded, 16 * FOLD_POSITIONS[4 * j + lane]);
                *word ^= table[t as usize];
            }
        }
        for (chunk, word) in folded.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        expanded = expand(&folded);
        for i in 0..256 {
            let pos = i + (round << 8);
            expanded[i] ^= EXPAND_TABLE[pos] ^ STACK_TABLE[pos];
        }
    }

    // Tail pass: complemented substitution, one more expansion against the
    // dedicated table window at 0xA00.
    for (i, b) in folded.iter_mut().enumerate() {
        let t = xor_fold(&expanded, 16 * FOLD_POSITIONS[i]);
        *b = TAIL_SBOX[t as usize] ^ !t;
    }
    expanded = expand(&folded);
    for i in 0..256 {
        expanded[i] ^= TAIL_XOR_TABLE[i] ^ STACK_TABLE[i + 0xA00];
    }

    let mut out = [0u8; KEY_LEN];
    for (i, b) in out.iter_mut().enumerate() {
        *b = xor_fold(&expanded, 16 * i) ^ FINAL_XOR_KEY[i];
    }
    out
}

/// Three permute-and-substitute rounds over one 16-byte chunk.
fn scramble_chunk(chunk: &mut [u8]) {
    let mut permuted = [0u8; 16];
    for round in 0..3 {
        // Rows are consumed back to front.
        let row = &ENTRY_INDEX_SCRAMBLE[0x20 - 0x10 * round..][..16];
        for (dst, &src) in permuted.iter_mut().zip(row) {
            *dst = chunk[src];
        }
        chunk[..16].copy_from_slice(&permuted);
        for (j, b) in chunk.iter_mut().take(16).enumerate() {
            let lane = j % 8;
            *b = if *b == 0 || ENTRY_MASK[lane] == 0 {
                KEY_SCRAMBLE_TABLE[(j % 4) * 0x100] ^ ENTRY_KEY[lane]
            } else {
                let sum = (ENTRY_SUM_TABLE[ENTRY_MASK[lane] as usize] as usize
                    + ENTRY_SUM_TABLE[*b as usize] as usize)
                    % 0xFF;
                ENTRY_KEY[lane]
                    ^ KEY_SCRAMBLE_TABLE[(j % 4) * 0x100 | ENTRY_MIX_TABLE[sum] as usize]
            };
        }
    }
}

/// Descramble the leading `window` bytes of `input` in place.
///
/// The first `entry` bytes (rounded up to 16) past the 4-byte head go
/// through the chunk rounds, the head is XOR-folded against them, and the
/// rest of the window is XOR-chained against the entry bytes. Bytes beyond
/// `window` are never touched. Callers must ensure `input` covers the
/// aligned entry region plus the window; see the size guards at the call
/// sites in `mhy0`.
pub fn scramble(input: &mut [u8], window: u64, entry: u64) {
    let aligned = ((entry + 0xF) & !0xF) as usize;
    for i in (0..aligned).step_by(16) {
        scramble_chunk(&mut input[i + 4..]);
    }
    for i in 0..4 {
        input[i] ^= input[i + 4];
    }

    let mut cur = aligned as u64 + 4;
    let mut finished = false;
    while cur < window && !finished {
        for k in 0..entry {
            input[(k + cur) as usize] ^= input[k as usize + 4];
            if k + cur >= window - 1 {
                finished = true;
                break;
            }
        }
        cur += entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_transform_is_deterministic() {
        let raw = *b"0123456789abcdef";
        let a = transform_key(&raw);
        let b = transform_key(&raw);
        assert_eq!(a, b);
        assert_eq!(a.len(), KEY_LEN);
    }

    #[test]
    fn key_transform_does_not_echo_input() {
        // The final XOR constant alone guarantees the all-zero key cannot
        // survive unchanged.
        let raw = [0u8; KEY_LEN];
        assert_ne!(transform_key(&raw), raw);
    }

    #[test]
    fn scramble_is_deterministic() {
        let mut a: Vec<u8> = (0..0x60).map(|i| (i * 7 + 3) as u8).collect();
        let mut b = a.clone();
        scramble(&mut a, 0x39, 0x1C);
        scramble(&mut b, 0x39, 0x1C);
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_leaves_bytes_past_the_window_alone() {
        let mut a: Vec<u8> = (0..0x80).map(|i| i as u8).collect();
        let mut b = a.clone();
        b[0x39..].iter_mut().for_each(|x| *x = !*x);
        scramble(&mut a, 0x39, 0x1C);
        scramble(&mut b, 0x39, 0x1C);
        assert_eq!(a[..0x39], b[..0x39]);
        // Suffixes stay what each buffer started with.
        assert_eq!(&a[0x39..], &(0x39..0x80).map(|i| i as u8).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn block_parameters_touch_at_most_0x21_bytes() {
        let mut a: Vec<u8> = (0..0x40).map(|i| (i * 13 + 1) as u8).collect();
        let before = a.clone();
        scramble(&mut a, 0x21, 8);
        assert_eq!(a[0x21..], before[0x21..]);
        assert_ne!(a[..0x21], before[..0x21]);
    }
}
