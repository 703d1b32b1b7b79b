//! `mhy0` sub-container decoding.
//!
//! A sub-container carries a scrambled, LZ4-compressed header describing a
//! directory of named entries plus a table of storage blocks. Decoding
//! descrambles and inflates the header, parses both tables, inflates every
//! block into one logical "blocks stream", and slices each directory entry
//! out of that stream as a [`StreamFile`].
//!
//! All integers in the decompressed header use one of two scrambled
//! byte-order encodings; see [`scrambled_int_a`] and [`scrambled_int_b`].

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Mutex;

use bytes::Bytes;
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::error::{Error, Result};
use crate::scramble::scramble;
use crate::stream_file::{StreamFile, MEMORY_LIMIT};

pub const MHY0_MAGIC: [u8; 4] = *b"mhy0";

/// Directory entries are 0x113 bytes apart, starting at offset 6.
const DIRECTORY_STRIDE: usize = 0x113;
const DIRECTORY_BASE: usize = 6;
/// Block table entries are 13 bytes apart, following the directory.
const BLOCK_STRIDE: usize = 13;
/// Scramble parameters for the raw header and for storage blocks.
const HEADER_WINDOW: u64 = 0x39;
const HEADER_ENTRY: u64 = 0x1C;
const BLOCK_WINDOW: u64 = 0x21;
const BLOCK_ENTRY: u64 = 8;
/// LZ4 payload offsets inside the raw header and inside each block.
const HEADER_DATA_START: usize = 0x27;
const BLOCK_DATA_START: usize = 0xC;
/// Smallest block the scramble pass can operate on.
const MIN_SCRAMBLE_LEN: usize = 0x14;

/// One compressed chunk of the blocks stream.
#[derive(Debug, Clone, Copy)]
pub struct StorageBlock {
    pub compressed_size: u32,
    pub uncompressed_size: u32,
}

/// One named entry, addressing a range of the logical blocks stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub path: String,
    pub offset: u64,
    pub size: u64,
}

/// A fully decoded sub-container.
pub struct Mhy0File {
    /// Offset of this sub-container within the decrypted outer body.
    pub start_offset: u64,
    pub blocks: Vec<StorageBlock>,
    pub directory: Vec<DirectoryNode>,
    pub entries: Vec<StreamFile>,
}

impl Mhy0File {
    /// Decode the sub-container starting at `start` within `body`.
    ///
    /// Returns the decoded container and the number of bytes it occupied,
    /// so a caller can scan an entire body sub-container by sub-container.
    pub fn parse(body: &[u8], start: u64, source_path: &str) -> Result<(Mhy0File, usize)> {
        let base = start as usize;
        let input = body
            .get(base..)
            .ok_or_else(|| Error::malformed(start, "start offset beyond stream"))?;

        let actual: [u8; 4] = input
            .get(..4)
            .ok_or_else(|| Error::malformed(start, "truncated magic"))?
            .try_into()
            .unwrap();
        if actual != MHY0_MAGIC {
            return Err(Error::InvalidFormat {
                offset: start,
                expected: MHY0_MAGIC,
                actual,
            });
        }

        let header_size = read_u32_le(input, 4, start)? as usize;
        if header_size < HEADER_WINDOW as usize {
            return Err(Error::malformed(
                start,
                format!("header too small: {header_size:#x} bytes"),
            ));
        }
        let mut header = input
            .get(8..8 + header_size)
            .ok_or_else(|| Error::malformed(start, "truncated header"))?
            .to_vec();
        scramble(&mut header, HEADER_WINDOW, HEADER_ENTRY);

        let decompressed_size = scrambled_int_a(&header, 0x20, start)? as usize;
        let header_data =
            decompress_checked(&header[HEADER_DATA_START..], decompressed_size, start)?;

        let (blocks, directory) = parse_tables(&header_data, start)?;
        let total_uncompressed: u64 = blocks.iter().map(|b| b.uncompressed_size as u64).sum();
        for node in &directory {
            if node.offset + node.size > total_uncompressed {
                return Err(Error::malformed(
                    start,
                    format!(
                        "entry {:?} spans past the blocks stream ({} + {} > {})",
                        node.path, node.offset, node.size, total_uncompressed
                    ),
                ));
            }
        }

        let data_start = base + header_size + 8;
        let total_compressed: u64 = blocks.iter().map(|b| b.compressed_size as u64).sum();
        let consumed = header_size + 8 + total_compressed as usize;
        if body.len() < data_start + total_compressed as usize {
            return Err(Error::malformed(start, "truncated block data"));
        }

        let stream = read_blocks(body, data_start, &blocks, total_uncompressed, start)?;
        let entries = materialize(stream, &directory, source_path)?;

        Ok((
            Mhy0File {
                start_offset: start,
                blocks,
                directory,
                entries,
            },
            consumed,
        ))
    }
}

/// Scrambled u32, byte order `[1, 6, 3, 2]` (low to high).
pub(crate) fn scrambled_int_a(buf: &[u8], offset: usize, at: u64) -> Result<u32> {
    let b = buf
        .get(offset..offset + 7)
        .ok_or_else(|| Error::malformed(at, "truncated scrambled field"))?;
    Ok(u32::from(b[1]) | u32::from(b[6]) << 8 | u32::from(b[3]) << 16 | u32::from(b[2]) << 24)
}

/// Scrambled u32, byte order `[2, 4, 0, 5]` (low to high).
pub(crate) fn scrambled_int_b(buf: &[u8], offset: usize, at: u64) -> Result<u32> {
    let b = buf
        .get(offset..offset + 6)
        .ok_or_else(|| Error::malformed(at, "truncated scrambled field"))?;
    Ok(u32::from(b[2]) | u32::from(b[4]) << 8 | u32::from(b[0]) << 16 | u32::from(b[5]) << 24)
}

fn read_u32_le(buf: &[u8], offset: usize, at: u64) -> Result<u32> {
    buf.get(offset..offset + 4)
        .map(|b| u32::from_le_bytes(b.try_into().unwrap()))
        .ok_or_else(|| Error::malformed(at, "truncated field"))
}

fn nul_terminated(buf: &[u8], offset: usize, at: u64) -> Result<String> {
    let tail = buf
        .get(offset..)
        .ok_or_else(|| Error::malformed(at, "truncated entry path"))?;
    let raw: Vec<u8> = tail.iter().take_while(|&&b| b != 0).copied().collect();
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn directory_offset(entry: usize) -> usize {
    entry * DIRECTORY_STRIDE + DIRECTORY_BASE
}

/// Parse the block table and directory out of the decompressed header.
pub(crate) fn parse_tables(
    header_data: &[u8],
    at: u64,
) -> Result<(Vec<StorageBlock>, Vec<DirectoryNode>)> {
    let len = header_data.len() as u64;
    let bundle_count = scrambled_int_b(header_data, 0, at)? as usize;
    if bundle_count as u64 * DIRECTORY_STRIDE as u64 + DIRECTORY_BASE as u64 > len {
        return Err(Error::malformed(
            at,
            format!("directory count {bundle_count} exceeds the header"),
        ));
    }
    let block_base = directory_offset(bundle_count);
    let block_count = scrambled_int_b(header_data, block_base, at)? as usize;
    if block_base as u64 + block_count as u64 * BLOCK_STRIDE as u64 + 6 > len {
        return Err(Error::malformed(
            at,
            format!("block count {block_count} exceeds the header"),
        ));
    }

    let mut blocks = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let offset = i * BLOCK_STRIDE + block_base;
        blocks.push(StorageBlock {
            compressed_size: scrambled_int_b(header_data, offset + 6, at)?,
            uncompressed_size: scrambled_int_a(header_data, offset + 0xC, at)?,
        });
    }

    let mut directory = Vec::with_capacity(bundle_count);
    for i in 0..bundle_count {
        let offset = directory_offset(i);
        directory.push(DirectoryNode {
            path: nul_terminated(header_data, offset, at)?,
            offset: scrambled_int_b(header_data, offset + 0x100 + 6, at)? as u64,
            size: scrambled_int_a(header_data, offset + 0x100 + 0xC, at)? as u64,
        });
    }

    Ok((blocks, directory))
}

/// Inflate `src` and require exactly `expected` output bytes.
pub(crate) fn decompress_checked(src: &[u8], expected: usize, at: u64) -> Result<Vec<u8>> {
    let mut out = vec![0u8; expected];
    decompress_checked_into(src, &mut out, at)?;
    Ok(out)
}

fn decompress_checked_into(src: &[u8], dst: &mut [u8], at: u64) -> Result<()> {
    let written =
        lz4_flex::block::decompress_into(src, dst).map_err(|_| Error::CorruptData {
            offset: at,
            expected: dst.len(),
            actual: 0,
        })?;
    if written != dst.len() {
        return Err(Error::CorruptData {
            offset: at,
            expected: dst.len(),
            actual: written,
        });
    }
    Ok(())
}

/// Descramble one storage block and inflate it into `dst`.
fn decode_block_into(src: &[u8], dst: &mut [u8], at: u64) -> Result<()> {
    if src.len() < 0x10 {
        return Err(Error::malformed(
            at,
            format!("wrong compressed length: {}", src.len()),
        ));
    }
    let mut scrambled = SCRATCH.acquire(src.len());
    scrambled.copy_from_slice(src);
    if scrambled.len() >= MIN_SCRAMBLE_LEN {
        let window = (scrambled.len() as u64).min(BLOCK_WINDOW);
        scramble(&mut scrambled, window, BLOCK_ENTRY);
    }
    let result = decompress_checked_into(&scrambled[BLOCK_DATA_START..], dst, at);
    SCRATCH.release(scrambled);
    result
}

enum BlocksStream {
    Memory(Bytes),
    Spill(File),
}

/// Inflate every storage block, in order, into one logical stream.
///
/// Bodies below the 32-bit boundary decode in parallel into disjoint
/// slices of a single buffer; larger bodies spill to a delete-on-close
/// temp file and decode sequentially through pooled scratch buffers.
fn read_blocks(
    body: &[u8],
    data_start: usize,
    blocks: &[StorageBlock],
    total_uncompressed: u64,
    at: u64,
) -> Result<BlocksStream> {
    let mut sources = Vec::with_capacity(blocks.len());
    let mut pos = data_start;
    for block in blocks {
        let end = pos + block.compressed_size as usize;
        sources.push(&body[pos..end]);
        pos = end;
    }

    if total_uncompressed < MEMORY_LIMIT {
        let mut out = vec![0u8; total_uncompressed as usize];
        let mut targets = Vec::with_capacity(blocks.len());
        let mut rest = out.as_mut_slice();
        for block in blocks {
            let (head, tail) = rest.split_at_mut(block.uncompressed_size as usize);
            targets.push(head);
            rest = tail;
        }
        targets
            .into_par_iter()
            .zip(sources)
            .try_for_each(|(dst, src)| decode_block_into(src, dst, at))?;
        Ok(BlocksStream::Memory(Bytes::from(out)))
    } else {
        let mut spill = tempfile::tempfile()?;
        for (block, src) in blocks.iter().zip(sources) {
            let mut dst = SCRATCH.acquire(block.uncompressed_size as usize);
            let result = decode_block_into(src, &mut dst, at);
            if let Err(e) = result {
                SCRATCH.release(dst);
                return Err(e);
            }
            spill.write_all(&dst)?;
            SCRATCH.release(dst);
        }
        spill.seek(SeekFrom::Start(0))?;
        Ok(BlocksStream::Spill(spill))
    }
}

/// Slice every directory entry out of the blocks stream.
fn materialize(
    stream: BlocksStream,
    directory: &[DirectoryNode],
    source_path: &str,
) -> Result<Vec<StreamFile>> {
    let mut entries = Vec::with_capacity(directory.len());
    match stream {
        BlocksStream::Memory(data) => {
            for node in directory {
                let start = node.offset as usize;
                let slice = data.slice(start..start + node.size as usize);
                entries.push(StreamFile::from_bytes(node.path.clone(), slice));
            }
        }
        BlocksStream::Spill(mut file) => {
            let unpack_dir = format!("{source_path}_unpacked");
            for node in directory {
                file.seek(SeekFrom::Start(node.offset))?;
                if node.size >= MEMORY_LIMIT {
                    entries.push(StreamFile::spill(
                        node.path.clone(),
                        &mut file,
                        node.size,
                        unpack_dir.as_ref(),
                    )?);
                } else {
                    let mut buf = Vec::with_capacity(node.size as usize);
                    (&mut file).take(node.size).read_to_end(&mut buf)?;
                    entries.push(StreamFile::from_bytes(node.path.clone(), Bytes::from(buf)));
                }
            }
        }
    }
    Ok(entries)
}

const SCRATCH_POOL_MAX: usize = 4;

/// Process-wide pool of decompression scratch buffers, so peak memory stays
/// bounded by concurrency rather than by container count.
struct BufferPool {
    buffers: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    const fn new() -> Self {
        BufferPool {
            buffers: Mutex::new(Vec::new()),
        }
    }

    fn acquire(&self, len: usize) -> Vec<u8> {
        let mut buf = self
            .buffers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop()
            .unwrap_or_default();
        buf.clear();
        buf.resize(len, 0);
        buf
    }

    fn release(&self, buf: Vec<u8>) {
        let mut buffers = self.buffers.lock().unwrap_or_else(|e| e.into_inner());
        if buffers.len() < SCRATCH_POOL_MAX {
            buffers.push(buf);
        }
    }
}

static SCRATCH: BufferPool = BufferPool::new();

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of [`scrambled_int_a`], for building synthetic headers.
    fn write_int_a(buf: &mut [u8], offset: usize, value: u32) {
        buf[offset + 1] = value as u8;
        buf[offset + 6] = (value >> 8) as u8;
        buf[offset + 3] = (value >> 16) as u8;
        buf[offset + 2] = (value >> 24) as u8;
    }

    /// Inverse of [`scrambled_int_b`].
    fn write_int_b(buf: &mut [u8], offset: usize, value: u32) {
        buf[offset + 2] = value as u8;
        buf[offset + 4] = (value >> 8) as u8;
        buf[offset] = (value >> 16) as u8;
        buf[offset + 5] = (value >> 24) as u8;
    }

    #[test]
    fn scrambled_ints_round_trip() {
        let mut buf = [0u8; 16];
        write_int_a(&mut buf, 2, 0xDEAD_BEEF);
        assert_eq!(scrambled_int_a(&buf, 2, 0).unwrap(), 0xDEAD_BEEF);

        let mut buf = [0u8; 16];
        write_int_b(&mut buf, 3, 0x0102_0304);
        assert_eq!(scrambled_int_b(&buf, 3, 0).unwrap(), 0x0102_0304);
    }

    #[test]
    fn scrambled_int_out_of_bounds_is_malformed() {
        let buf = [0u8; 4];
        assert!(matches!(
            scrambled_int_a(&buf, 0, 7),
            Err(Error::MalformedHeader { offset: 7, .. })
        ));
    }

    /// Build a decompressed header describing the given directory and blocks.
    fn synthetic_header(nodes: &[DirectoryNode], blocks: &[StorageBlock]) -> Vec<u8> {
        let block_base = directory_offset(nodes.len());
        let mut buf = vec![0u8; block_base + blocks.len() * BLOCK_STRIDE + 0x20];
        write_int_b(&mut buf, 0, nodes.len() as u32);
        write_int_b(&mut buf, block_base, blocks.len() as u32);
        for (i, node) in nodes.iter().enumerate() {
            let offset = directory_offset(i);
            buf[offset..offset + node.path.len()].copy_from_slice(node.path.as_bytes());
            write_int_b(&mut buf, offset + 0x100 + 6, node.offset as u32);
            write_int_a(&mut buf, offset + 0x100 + 0xC, node.size as u32);
        }
        for (i, block) in blocks.iter().enumerate() {
            let offset = i * BLOCK_STRIDE + block_base;
            write_int_b(&mut buf, offset + 6, block.compressed_size);
            write_int_a(&mut buf, offset + 0xC, block.uncompressed_size);
        }
        buf
    }

    #[test]
    fn tables_parse_reproduces_the_encoded_directory() {
        let nodes = vec![
            DirectoryNode {
                path: "CAB-0123456789abcdef0123456789abcdef".to_owned(),
                offset: 0,
                size: 0x40,
            },
            DirectoryNode {
                path: "CAB-0123456789abcdef0123456789abcdef.resS".to_owned(),
                offset: 0x40,
                size: 0x1000,
            },
        ];
        let blocks = vec![
            StorageBlock {
                compressed_size: 0x800,
                uncompressed_size: 0x1000,
            },
            StorageBlock {
                compressed_size: 0x21,
                uncompressed_size: 0x40,
            },
        ];
        let header = synthetic_header(&nodes, &blocks);

        let (parsed_blocks, parsed_nodes) = parse_tables(&header, 0).unwrap();
        assert_eq!(parsed_nodes, nodes);
        assert_eq!(parsed_blocks.len(), 2);
        assert_eq!(parsed_blocks[0].compressed_size, 0x800);
        assert_eq!(parsed_blocks[0].uncompressed_size, 0x1000);
        assert_eq!(parsed_blocks[1].compressed_size, 0x21);
        assert_eq!(parsed_blocks[1].uncompressed_size, 0x40);
    }

    #[test]
    fn truncated_tables_are_malformed() {
        // Claim more blocks than the buffer holds.
        let mut header = synthetic_header(&[], &[]);
        write_int_b(&mut header, directory_offset(0), 1000);
        assert!(matches!(
            parse_tables(&header, 0),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn wrong_magic_is_invalid_format() {
        let body = b"UnityFS\0\0\0\0\0\0\0\0\0".to_vec();
        match Mhy0File::parse(&body, 0, "test.blk") {
            Err(Error::InvalidFormat {
                offset, expected, ..
            }) => {
                assert_eq!(offset, 0);
                assert_eq!(expected, MHY0_MAGIC);
            }
            other => panic!("expected InvalidFormat, got {:?}", other.err()),
        }
    }

    #[test]
    fn short_header_is_malformed() {
        let mut body = MHY0_MAGIC.to_vec();
        body.extend_from_slice(&0x10u32.to_le_bytes());
        body.extend_from_slice(&[0u8; 0x10]);
        assert!(matches!(
            Mhy0File::parse(&body, 0, "test.blk"),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn declared_size_mismatch_is_corrupt_data() {
        let payload = b"the quick brown fox jumps over the lazy dog".repeat(4);
        let compressed = lz4_flex::block::compress(&payload);
        // Declaring too small an output fails inside the decoder; declaring
        // too large fails the exact-length check. Both are CorruptData.
        assert!(matches!(
            decompress_checked(&compressed, payload.len() - 1, 0x30),
            Err(Error::CorruptData { offset: 0x30, .. })
        ));
        assert!(matches!(
            decompress_checked(&compressed, payload.len() + 1, 0x30),
            Err(Error::CorruptData { .. })
        ));
        assert_eq!(
            decompress_checked(&compressed, payload.len(), 0x30).unwrap(),
            payload
        );
    }

    #[test]
    fn scratch_pool_reuses_buffers() {
        let buf = SCRATCH.acquire(128);
        assert_eq!(buf.len(), 128);
        SCRATCH.release(buf);
        let buf = SCRATCH.acquire(16);
        assert_eq!(buf.len(), 16);
        SCRATCH.release(buf);
    }
}
