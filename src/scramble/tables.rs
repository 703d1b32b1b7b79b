//! Fixed data for the container byte transforms.
//!
//! Every table here was recovered from the shipped client and must stay
//! byte-identical: the transforms in `scramble` index into these with exact
//! offset arithmetic, and any edit breaks compatibility with real containers.
//! See `scramble::transform_key` for how each table is consumed.

/// Byte substitution, four 256-entry rows selected by `position % 4`.
pub(crate) const KEY_SCRAMBLE_TABLE: [u8; 1024] = [
    0xFE, 0x52, 0x68, 0xFA, 0xAD, 0x94, 0xA4, 0xDA, 0x06, 0x98, 0xBD, 0x86, 0xB8, 0x83, 0xAE, 0xA5,
    0x4A, 0x2A, 0xC5, 0x4B, 0x0B, 0x9D, 0xA8, 0xBB, 0xD1, 0x22, 0x25, 0x96, 0xC0, 0x0F, 0xFF, 0x49,
    0xE4, 0x53, 0x24, 0x16, 0x45, 0xF3, 0xB1, 0xE9, 0x91, 0x67, 0x6A, 0x1B, 0x88, 0x59, 0xD4, 0x46,
    0x95, 0xB9, 0x8E, 0x0D, 0x9C, 0xDB, 0x69, 0xA6, 0x17, 0xBA, 0xB7, 0x40, 0x3B, 0xDC, 0x20, 0x35,
    0xA3, 0xC9, 0x26, 0x89, 0x99, 0x9A, 0x2E, 0xCD, 0xA0, 0x6C, 0x29, 0xF7, 0x93, 0xDE, 0x75, 0x6B,
    0xB4, 0x51, 0xD9, 0x38, 0xD6, 0x62, 0xC2, 0x7E, 0xFC, 0x0E, 0x11, 0x9E, 0x81, 0x21, 0x31, 0xDD,
    0x2F, 0x2C, 0xEF, 0x32, 0x41, 0xB6, 0xC7, 0xF1, 0xA9, 0x70, 0xEB, 0x3F, 0x6D, 0x78, 0xF0, 0x73,
    0x7A, 0xC1, 0x97, 0x92, 0xA7, 0x5B, 0x9F, 0xE0, 0x8F, 0xBE, 0x56, 0x65, 0xCB, 0x3D, 0x19, 0x4D,
    0x76, 0x80, 0xAB, 0xB0, 0x8C, 0x7F, 0x54, 0xF8, 0x0C, 0x01, 0xD7, 0x1F, 0x27, 0xFB, 0xEE, 0x3A,
    0xCC, 0x63, 0x02, 0x0A, 0x18, 0x23, 0xF9, 0x39, 0x2D, 0xCE, 0x8D, 0xD5, 0x3C, 0x5F, 0x6F, 0xE3,
    0xBF, 0xAF, 0x28, 0xCF, 0x71, 0x5E, 0x05, 0x7D, 0x44, 0x82, 0x36, 0x42, 0x57, 0xAC, 0x04, 0xB2,
    0x5D, 0x3E, 0xAA, 0xE2, 0x50, 0x5C, 0x30, 0x37, 0xBC, 0x61, 0x8B, 0x43, 0x1E, 0x77, 0x47, 0x55,
    0xB3, 0xE8, 0x4C, 0xD3, 0x13, 0x74, 0x33, 0xC8, 0xFD, 0xE6, 0xD2, 0x15, 0x1C, 0xE7, 0xEA, 0xB5,
    0x07, 0x48, 0x14, 0x12, 0x00, 0x7B, 0xF2, 0x79, 0x1D, 0xCA, 0xE5, 0xEC, 0x60, 0x90, 0x58, 0xA1,
    0xD8, 0x85, 0x72, 0xDF, 0x10, 0x2B, 0xC3, 0x8A, 0xC4, 0xF5, 0xF6, 0x4E, 0xED, 0x4F, 0xC6, 0xD0,
    0x5A, 0x87, 0x1A, 0x64, 0x09, 0x7C, 0xF4, 0x66, 0x03, 0x08, 0xE1, 0x84, 0x34, 0xA2, 0x9B, 0x6E,
    0xD4, 0x53, 0x10, 0x22, 0xAD, 0xCE, 0x0E, 0x19, 0x82, 0xCA, 0xDA, 0x3C, 0xFC, 0x7F, 0x77, 0x9D,
    0xDB, 0xF1, 0x5F, 0x47, 0xCD, 0xC9, 0x84, 0xF7, 0x23, 0x4C, 0xFD, 0x83, 0x41, 0x6A, 0x29, 0x90,
    0x25, 0xC7, 0x21, 0x63, 0x85, 0xF0, 0x52, 0xBD, 0x55, 0xB4, 0x6E, 0x02, 0xFE, 0x17, 0xB6, 0xEC,
    0x00, 0xDD, 0x3F, 0x32, 0x3D, 0x6B, 0xDE, 0xA0, 0xC1, 0x1E, 0x01, 0x38, 0x0F, 0x45, 0xC4, 0x03,
    0x0D, 0x30, 0x5A, 0xE5, 0x35, 0x33, 0xD1, 0xD0, 0x7A, 0xBB, 0x1F, 0x18, 0xA2, 0x2F, 0x91, 0x6D,
    0xB8, 0x2C, 0xE8, 0xCF, 0xA4, 0x80, 0xD6, 0x50, 0x9C, 0x8C, 0x99, 0xB9, 0x8F, 0x86, 0xA6, 0x95,
    0xCB, 0x07, 0x12, 0xD7, 0x75, 0x1C, 0x26, 0x28, 0xAA, 0x11, 0x20, 0x5B, 0x81, 0xC3, 0x05, 0x92,
    0xD8, 0xE2, 0x1D, 0x67, 0xBC, 0x2A, 0x0A, 0x7B, 0x96, 0xE6, 0xA8, 0xA5, 0x8A, 0xBF, 0x36, 0x40,
    0xDF, 0xEB, 0x34, 0x61, 0x7D, 0x5C, 0x14, 0xB2, 0x24, 0x73, 0x98, 0xD5, 0xAF, 0x69, 0x64, 0xA1,
    0xB3, 0x6C, 0x13, 0x48, 0xEF, 0xE4, 0xC8, 0x8B, 0x71, 0xC5, 0xF6, 0x1A, 0x1B, 0x6F, 0xDC, 0x89,
    0x4D, 0x39, 0x66, 0x76, 0x5D, 0xBA, 0x27, 0x42, 0x46, 0xAE, 0xF3, 0x7E, 0x0B, 0x70, 0x49, 0x43,
    0x37, 0xD9, 0x9E, 0xA7, 0xEE, 0x15, 0x93, 0x88, 0x59, 0x62, 0xCC, 0x2D, 0xEA, 0x8D, 0xE0, 0x9F,
    0x74, 0xC2, 0xF5, 0x06, 0x58, 0xC6, 0x4E, 0xE7, 0x3B, 0x94, 0xF9, 0xED, 0xF4, 0xA3, 0xE9, 0xF8,
    0x3A, 0x9A, 0x51, 0xE3, 0xFB, 0xAB, 0xA9, 0x8E, 0x79, 0x2B, 0xFA, 0x65, 0xB5, 0xE1, 0x87, 0x56,
    0x57, 0x2E, 0x78, 0xF2, 0xB7, 0xBE, 0x0C, 0x4B, 0x08, 0x09, 0x31, 0x68, 0x3E, 0xD2, 0x44, 0x7C,
    0xB0, 0xB1, 0x4F, 0x9B, 0xFF, 0xC0, 0x97, 0x54, 0x5E, 0x04, 0x72, 0x4A, 0x60, 0xAC, 0xD3, 0x16,
    0xAB, 0xD0, 0xC1, 0xDD, 0x27, 0x9F, 0x62, 0xD5, 0x06, 0x3F, 0xA0, 0x50, 0x8C, 0x5E, 0x0D, 0x26,
    0xAA, 0xB5, 0x9D, 0x57, 0x46, 0xB6, 0xF3, 0x6C, 0x0A, 0xC4, 0x1E, 0xA2, 0x69, 0x35, 0x98, 0x19,
    0xED, 0x30, 0xEE, 0x71, 0x49, 0xCD, 0x3A, 0xCA, 0xBE, 0x05, 0x7C, 0x93, 0x83, 0x81, 0x8B, 0x22,
    0x52, 0x07, 0x89, 0x6D, 0x01, 0xF9, 0xA7, 0xF2, 0xAE, 0xD4, 0x43, 0x14, 0xF7, 0x72, 0x39, 0x76,
    0xE0, 0x08, 0x53, 0x16, 0xC8, 0x18, 0x13, 0x41, 0xB2, 0x0E, 0xE4, 0x86, 0x3B, 0xA8, 0x42, 0x44,
    0x1A, 0x36, 0x4D, 0xB0, 0x23, 0xBA, 0x1D, 0xC6, 0xD2, 0x3C, 0x61, 0x37, 0x4E, 0xD3, 0x63, 0x54,
    0xDF, 0x5A, 0x73, 0x87, 0x12, 0xAF, 0x60, 0xF5, 0xDC, 0xFF, 0x9A, 0x9E, 0xA4, 0xA9, 0x58, 0xBB,
    0xB3, 0x2A, 0x5C, 0x6A, 0x6E, 0x85, 0x0F, 0x8F, 0xBC, 0x7D, 0x21, 0xF4, 0xF8, 0x80, 0xC0, 0x03,
    0x15, 0x40, 0x77, 0xEC, 0x09, 0x31, 0x4A, 0xB4, 0x38, 0xEA, 0x29, 0x74, 0xB9, 0xCE, 0x11, 0x78,
    0xF6, 0x1B, 0xE8, 0x2C, 0x79, 0xA1, 0x7A, 0x24, 0xD6, 0x84, 0x7E, 0x8E, 0x96, 0x3D, 0xFE, 0x4F,
    0x04, 0xA5, 0xC9, 0x7F, 0x2B, 0xDB, 0x2E, 0xE9, 0x88, 0x32, 0x5F, 0x0C, 0x65, 0xEF, 0xCF, 0x94,
    0xE6, 0x17, 0x00, 0x4C, 0xD7, 0x2D, 0x9C, 0xE2, 0x33, 0xA6, 0x0B, 0x70, 0x68, 0xE3, 0x97, 0xC3,
    0xA3, 0xFA, 0x5D, 0xCC, 0xBD, 0xC2, 0xE1, 0x75, 0x51, 0x99, 0xE7, 0x4B, 0x55, 0x8D, 0xD8, 0x82,
    0x6B, 0x95, 0xF0, 0x6F, 0x5B, 0x48, 0x56, 0xFC, 0xD1, 0xAD, 0xFD, 0xC7, 0x92, 0xC5, 0x2F, 0x25,
    0xF1, 0x8A, 0xD9, 0x10, 0x3E, 0xDA, 0x45, 0xEB, 0x1C, 0x7B, 0xCB, 0x9B, 0x59, 0xAC, 0xFB, 0x91,
    0x34, 0x28, 0xBF, 0x47, 0xB8, 0x20, 0xDE, 0xB7, 0x64, 0x1F, 0xE5, 0x66, 0x02, 0x67, 0x90, 0xB1,
    0x99, 0x92, 0xC8, 0x17, 0x4F, 0x5D, 0xD0, 0x3E, 0x48, 0xE2, 0x9B, 0x3D, 0x4C, 0x4A, 0xEB, 0x8B,
    0x95, 0x41, 0xFC, 0x53, 0x4E, 0x97, 0x7E, 0xCF, 0xF5, 0x0B, 0x59, 0x38, 0x7C, 0x75, 0x01, 0x7A,
    0x96, 0xD7, 0x27, 0xED, 0xE9, 0x3A, 0xB4, 0xD2, 0xEE, 0x8A, 0x60, 0x40, 0x28, 0x51, 0x1C, 0xDA,
    0xEA, 0x2C, 0x25, 0x9D, 0x20, 0xA2, 0x1F, 0xA5, 0x86, 0x52, 0xC7, 0x9C, 0x57, 0x73, 0x3C, 0xCB,
    0x36, 0x50, 0x4D, 0xDC, 0x62, 0x9F, 0x34, 0xBA, 0x30, 0xD4, 0xF8, 0x29, 0xCA, 0x19, 0xC5, 0xF2,
    0xF1, 0x8F, 0xF7, 0xB0, 0xB9, 0xAE, 0xF4, 0x83, 0xDB, 0x80, 0x49, 0xE6, 0x22, 0x85, 0x66, 0x88,
    0xBD, 0x14, 0x8E, 0x00, 0xD6, 0xFF, 0x70, 0x24, 0x9E, 0xA9, 0x32, 0xE5, 0x04, 0x54, 0x0F, 0x09,
    0x89, 0xFB, 0xE0, 0xB1, 0x4B, 0xFE, 0xC0, 0x94, 0xC9, 0x77, 0x6B, 0x61, 0xB2, 0x6C, 0x5E, 0x2F,
    0xD3, 0x74, 0x67, 0xCD, 0xC1, 0x10, 0xAD, 0x11, 0x69, 0x1B, 0x07, 0x7B, 0x18, 0xA6, 0xE1, 0xBF,
    0x35, 0xE4, 0xDD, 0x2D, 0x2B, 0xB6, 0xD9, 0x37, 0xAC, 0x6D, 0x5C, 0xB7, 0x8C, 0x1E, 0x31, 0x64,
    0x58, 0xD1, 0x08, 0xDF, 0x68, 0x5F, 0x21, 0xF6, 0xFD, 0x56, 0xEC, 0xA0, 0x81, 0x0D, 0xDE, 0x9A,
    0xA7, 0x55, 0x33, 0x76, 0x1A, 0xBE, 0x2A, 0x72, 0xFA, 0x84, 0xB3, 0xF0, 0xF3, 0xD5, 0x82, 0x23,
    0x05, 0x47, 0xC2, 0xF9, 0x0A, 0xCC, 0x16, 0xBB, 0x15, 0xA4, 0xB8, 0xEF, 0x3F, 0x5B, 0x46, 0xAF,
    0xE3, 0x6A, 0x90, 0x3B, 0x65, 0x87, 0xCE, 0x02, 0x44, 0xB5, 0xBC, 0xD8, 0xC4, 0x6E, 0x6F, 0xA8,
    0x06, 0x42, 0xC6, 0x98, 0x93, 0x12, 0xC3, 0x45, 0x0E, 0x26, 0x2E, 0x79, 0xAA, 0xAB, 0x03, 0x63,
    0x39, 0x7D, 0x43, 0x91, 0x0C, 0x5A, 0xA3, 0xE8, 0x71, 0x7F, 0x13, 0x1D, 0xA1, 0xE7, 0x8D, 0x78,
];

/// Expansion-stage XOR data, one 256-byte window per mixing round.
pub(crate) const EXPAND_TABLE: [u8; 2560] = [
    0xA1, 0xC9, 0x4F, 0x21, 0x9A, 0x47, 0x14, 0x7A, 0xC4, 0xAA, 0x64, 0x9A, 0x96, 0x02, 0xF4, 0xDA,
    0x75, 0x4A, 0x19, 0xA0, 0xBA, 0xBE, 0xDA, 0x13, 0x8B, 0xB6, 0x28, 0xDF, 0x05, 0xA7, 0xDC, 0xBA,
    0xFB, 0xF4, 0xAE, 0x15, 0x87, 0xA8, 0x64, 0xF3, 0xD7, 0x50, 0x66, 0xD1, 0xCF, 0x0F, 0x14, 0x55,
    0xEF, 0xDA, 0x0A, 0x38, 0x44, 0x08, 0x2C, 0x23, 0x19, 0x06, 0xCE, 0xAE, 0x76, 0x6E, 0x59, 0xC3,
    0x13, 0x1F, 0x81, 0x19, 0xC5, 0x50, 0x69, 0xF8, 0x4C, 0x32, 0x3D, 0x24, 0x29, 0xA6, 0x98, 0xD6,
    0xA6, 0x67, 0xAB, 0x4A, 0x35, 0x6C, 0x6A, 0x3D, 0xD3, 0x34, 0x84, 0x59, 0x8A, 0xB3, 0x50, 0xFC,
    0x1C, 0x22, 0xFC, 0xEB, 0xA2, 0xE8, 0xFE, 0xEA, 0x33, 0x54, 0xBD, 0xB7, 0x20, 0x2C, 0x8B, 0xFC,
    0x5F, 0x71, 0x5F, 0xBB, 0xDC, 0xB7, 0x4B, 0xA5, 0xED, 0xF2, 0x7A, 0x0A, 0x13, 0x7A, 0xD8, 0x00,
    0xBC, 0x69, 0x58, 0x4D, 0x26, 0xFE, 0x39, 0x52, 0x39, 0xD7, 0x89, 0x2F, 0xE6, 0xDE, 0x15, 0x1C,
    0x8B, 0x80, 0xD6, 0xE3, 0x7C, 0xFD, 0xB9, 0xBD, 0xCF, 0x9D, 0x75, 0xF6, 0xAC, 0x4E, 0xB0, 0x7A,
    0x22, 0xFF, 0x37, 0x1D, 0x95, 0xBC, 0x5B, 0x17, 0x34, 0x93, 0x35, 0xA0, 0xAB, 0xC9, 0x96, 0xBA,
    0x46, 0x14, 0xEF, 0xCE, 0xEE, 0xEF, 0xAE, 0xAD, 0x49, 0x05, 0x15, 0x29, 0x10, 0xD9, 0x7C, 0xB6,
    0xD9, 0xC3, 0xA9, 0x05, 0xD8, 0x95, 0x67, 0xE5, 0xC8, 0xB2, 0xC8, 0xA4, 0xA5, 0x8C, 0x0A, 0x21,
    0x44, 0x70, 0xC5, 0xED, 0x37, 0x4A, 0x24, 0x92, 0xF7, 0x1C, 0x40, 0x35, 0xEC, 0x01, 0x70, 0x32,
    0x80, 0x79, 0xAD, 0x6C, 0xC3, 0x95, 0xC7, 0x25, 0xD9, 0x94, 0x66, 0x75, 0x7A, 0x0A, 0xE4, 0xE5,
    0xF8, 0x7C, 0xD2, 0x3F, 0xB2, 0xF9, 0x14, 0x3C, 0xF8, 0x26, 0x00, 0x9E, 0x3A, 0x18, 0xC5, 0xBA,
    0x8A, 0xB0, 0x39, 0xE1, 0xB3, 0x92, 0x37, 0x0C, 0x12, 0x23, 0xEB, 0x5A, 0x08, 0xD5, 0x2C, 0x74,
    0xD4, 0xA6, 0x34, 0x01, 0xAE, 0x69, 0xB3, 0xA7, 0xE9, 0xFD, 0x44, 0x16, 0xCB, 0x04, 0x5A, 0xD8,
    0x6D, 0xEB, 0xED, 0x36, 0x1E, 0x99, 0x03, 0x3B, 0xC5, 0xCB, 0x40, 0x66, 0x21, 0x89, 0x40, 0x89,
    0x62, 0x48, 0x09, 0x5D, 0x48, 0xD5, 0x9F, 0x8B, 0xDF, 0xC7, 0x7A, 0x59, 0x5E, 0x03, 0x5D, 0xEC,
    0x77, 0xCE, 0x2B, 0x5E, 0xF6, 0x5C, 0x7E, 0x0C, 0xC5, 0xE8, 0xF5, 0x5C, 0xC3, 0x7B, 0x01, 0xEE,
    0x8F, 0xC5, 0xBC, 0x85, 0xDC, 0x76, 0xAB, 0xA4, 0xF5, 0x4E, 0x67, 0x9A, 0x6B, 0x0A, 0x3D, 0xC9,
    0x3C, 0xCD, 0x6A, 0x52, 0xA5, 0x30, 0x73, 0x00, 0x0F, 0xC7, 0xF7, 0x66, 0x3E, 0xAE, 0xB3, 0xAA,
    0x6E, 0x97, 0x5C, 0xA4, 0x19, 0x1A, 0x32, 0x11, 0x38, 0xCD, 0x98, 0x21, 0x65, 0xC0, 0x6E, 0x02,
    0x41, 0x12, 0xF2, 0x8E, 0x20, 0x74, 0x93, 0x8E, 0x7B, 0xF9, 0xFF, 0x80, 0xCC, 0xDE, 0x0A, 0xC3,
    0xED, 0x2B, 0xCE, 0x40, 0x17, 0x0A, 0x36, 0xA5, 0xBB, 0x44, 0xBB, 0xBC, 0x77, 0xDE, 0xB4, 0x8B,
    0xD5, 0xDD, 0x39, 0xA7, 0x2A, 0x31, 0x28, 0xAE, 0x1D, 0xA0, 0x62, 0xB6, 0xB1, 0x89, 0x2F, 0x8C,
    0x5C, 0xA7, 0x17, 0x88, 0x28, 0x25, 0x12, 0x70, 0x15, 0xC8, 0x22, 0x2C, 0xBB, 0x0C, 0xB8, 0x6E,
    0x71, 0x22, 0x8B, 0x47, 0xEE, 0xE7, 0xDA, 0x06, 0x3C, 0x3D, 0x1A, 0x92, 0x27, 0x26, 0x3B, 0x92,
    0x0D, 0x78, 0xD3, 0xC9, 0xA8, 0xA1, 0xDF, 0x74, 0x8E, 0xBC, 0xD8, 0xEF, 0x1A, 0x12, 0xCE, 0x2C,
    0x79, 0x0E, 0x79, 0xB4, 0xC0, 0x4F, 0xD9, 0x69, 0x23, 0x52, 0x7E, 0x40, 0x81, 0xCF, 0x4C, 0xDE,
    0x31, 0x62, 0x60, 0x44, 0x9C, 0x14, 0xF9, 0x6A, 0x7A, 0x9F, 0x78, 0x02, 0x15, 0xE4, 0xBA, 0x8C,
    0x46, 0xDE, 0xFD, 0x76, 0x48, 0x4E, 0x7C, 0x50, 0xBE, 0x2F, 0x71, 0x4A, 0xC1, 0x5D, 0xF3, 0xA1,
    0x4F, 0xE4, 0xC4, 0x62, 0x2C, 0xC5, 0xB2, 0xA2, 0xEC, 0x1E, 0xFA, 0xEF, 0xCF, 0x1F, 0x02, 0x81,
    0xD1, 0x35, 0x2F, 0x82, 0x2E, 0xFB, 0xB4, 0xB5, 0xEC, 0x99, 0x04, 0x66, 0x47, 0x3A, 0xD4, 0x8D,
    0xA7, 0xF2, 0x1D, 0xF1, 0x80, 0x4D, 0x7A, 0x87, 0x64, 0xDF, 0x3F, 0x00, 0x96, 0x0F, 0xE5, 0x3F,
    0xF4, 0x7B, 0xF0, 0x28, 0xCF, 0x12, 0x46, 0xA8, 0xE9, 0x90, 0xBF, 0x48, 0xFC, 0xF2, 0x3B, 0xC8,
    0x05, 0x09, 0xB6, 0xDC, 0x06, 0xCB, 0xB1, 0xDA, 0x69, 0xC1, 0x9E, 0x44, 0x80, 0x91, 0xBC, 0xC2,
    0x37, 0xC2, 0x8E, 0xCB, 0xFD, 0xCE, 0xF8, 0x08, 0x9D, 0x48, 0xF4, 0x10, 0xCA, 0x36, 0xD5, 0x30,
    0xF7, 0x97, 0xAE, 0x81, 0x8F, 0xA0, 0xC3, 0x2E, 0xA1, 0x10, 0xF8, 0x7E, 0xDC, 0xD0, 0x50, 0xCC,
    0x3E, 0xA5, 0x1C, 0x71, 0x07, 0xF3, 0xBF, 0xB8, 0xDB, 0xC5, 0x4B, 0x4D, 0x43, 0xBF, 0xAE, 0x62,
    0x78, 0x7B, 0xBA, 0x53, 0x38, 0x9C, 0x38, 0x93, 0x78, 0x41, 0xBB, 0xE1, 0xAA, 0x7C, 0xF0, 0xF3,
    0x02, 0x51, 0x97, 0xE7, 0x8A, 0xEE, 0x65, 0x3D, 0xEE, 0x54, 0x75, 0x09, 0x8F, 0x53, 0x0F, 0x98,
    0xF8, 0x46, 0xEF, 0xDE, 0xE0, 0x0B, 0x50, 0x31, 0x7F, 0xE3, 0x64, 0xAA, 0x53, 0x93, 0x64, 0x61,
    0xCC, 0xF1, 0xF3, 0xC5, 0xEA, 0xFC, 0x19, 0x22, 0x3C, 0x07, 0x90, 0x0A, 0x8F, 0xCE, 0x08, 0xE4,
    0x2E, 0x86, 0x2E, 0xC0, 0xAF, 0xFE, 0xBD, 0xD4, 0x73, 0x41, 0x2F, 0xC5, 0x5F, 0x16, 0xD3, 0xE8,
    0x0C, 0x06, 0x0F, 0x9C, 0x71, 0xD7, 0x33, 0x79, 0x9E, 0x62, 0x81, 0x5E, 0x1D, 0x84, 0xCE, 0x83,
    0x90, 0x11, 0x75, 0x80, 0x5C, 0xE5, 0xD4, 0x7D, 0xEC, 0x11, 0xB6, 0x19, 0xD0, 0x40, 0xBA, 0x9A,
    0x6C, 0x2A, 0xB4, 0xEE, 0xB9, 0x2B, 0xA2, 0x9B, 0x7D, 0x93, 0x83, 0x90, 0x36, 0x69, 0x23, 0x6C,
    0x83, 0xCC, 0x89, 0x39, 0x7C, 0xFF, 0x55, 0x8B, 0x0A, 0x9B, 0x7B, 0x6C, 0x9C, 0x2D, 0x98, 0xE3,
    0x5E, 0x28, 0x34, 0xD5, 0x0D, 0x3A, 0xA1, 0x98, 0xB7, 0x17, 0x4A, 0x22, 0xDD, 0x95, 0xBC, 0x54,
    0x6A, 0xBC, 0x3B, 0xC0, 0x76, 0x93, 0x9C, 0x49, 0xB1, 0xC1, 0x05, 0x1A, 0x5A, 0x4B, 0x96, 0xFC,
    0x29, 0x74, 0x3A, 0x2A, 0x01, 0x64, 0x5F, 0x12, 0x19, 0xF3, 0xB2, 0x66, 0xB8, 0xDC, 0x11, 0xEB,
    0xF4, 0xC0, 0x3F, 0x9B, 0x36, 0x4F, 0xEC, 0x92, 0xF4, 0xE4, 0x18, 0xC4, 0x2B, 0xD2, 0xFA, 0x04,
    0x99, 0x89, 0x79, 0x02, 0x99, 0x6C, 0x9A, 0xA5, 0xCC, 0x0D, 0x1D, 0xC0, 0x90, 0xFC, 0x23, 0x7E,
    0xEE, 0x1C, 0xCD, 0x51, 0x51, 0xBF, 0x8D, 0x79, 0xD8, 0x33, 0xB8, 0x64, 0xD2, 0xF7, 0x9F, 0xB7,
    0xA2, 0x97, 0xBF, 0x00, 0xED, 0xCC, 0x91, 0x53, 0x45, 0xD5, 0x9D, 0x62, 0x10, 0xCF, 0x5A, 0x2C,
    0xFE, 0xC1, 0x51, 0x7F, 0xA5, 0x0D, 0x25, 0x3C, 0xC6, 0xE0, 0xB7, 0x22, 0x04, 0x95, 0xBB, 0xD7,
    0xC4, 0x74, 0x86, 0xB6, 0x02, 0x89, 0xF6, 0x03, 0x20, 0x01, 0x93, 0xB9, 0xE3, 0xEB, 0x6B, 0xB8,
    0xC5, 0xC5, 0xC4, 0x41, 0xAB, 0xA3, 0x83, 0xFE, 0x8D, 0x8F, 0x8A, 0x99, 0x35, 0x7E, 0x6A, 0x72,
    0x90, 0xE3, 0x15, 0x6E, 0x54, 0x7D, 0x25, 0xE4, 0xB4, 0xF1, 0x07, 0xCA, 0x77, 0xEB, 0x0E, 0x94,
    0xDF, 0x89, 0xFE, 0x55, 0xFC, 0x7E, 0x1A, 0x01, 0x72, 0x8D, 0x1F, 0x8E, 0x18, 0x9D, 0xAA, 0x3A,
    0xC8, 0xFA, 0x8F, 0xA7, 0xFB, 0x07, 0x77, 0x69, 0x4D, 0x5E, 0x70, 0x07, 0xE1, 0x08, 0xE1, 0xA4,
    0xFB, 0x2D, 0xE5, 0x05, 0x3F, 0x1F, 0x1D, 0x85, 0x10, 0xB9, 0xE1, 0xA5, 0xE0, 0x59, 0x66, 0xE8,
    0x52, 0x75, 0x8F, 0x1C, 0x4F, 0x0E, 0xE9, 0xCB, 0x9D, 0xA9, 0x4D, 0xC3, 0xCD, 0xA4, 0xDE, 0x49,
    0x6A, 0xC6, 0x6F, 0x46, 0x60, 0x89, 0x03, 0x40, 0x31, 0x7C, 0xAD, 0xB2, 0x98, 0xE8, 0xD5, 0xA6,
    0xBB, 0x36, 0x8A, 0x79, 0x87, 0x9D, 0x09, 0x10, 0x3A, 0x1C, 0x2E, 0x68, 0x5D, 0xCD, 0x15, 0x19,
    0xAB, 0x71, 0x56, 0xA6, 0xC8, 0xDF, 0x3E, 0x25, 0xE4, 0x17, 0x0F, 0x19, 0x76, 0x60, 0x07, 0x1A,
    0x2A, 0x38, 0xA6, 0xC9, 0xD2, 0xFB, 0x74, 0xA9, 0xA1, 0xA8, 0xB7, 0xFA, 0xA1, 0xD1, 0x99, 0xA0,
    0xC8, 0x64, 0x86, 0xAC, 0xDC, 0xF1, 0x2F, 0x55, 0x8F, 0x82, 0x32, 0x13, 0x0D, 0x5F, 0x1E, 0x21,
    0xB2, 0x1B, 0x10, 0x37, 0x7A, 0x24, 0xEE, 0xC1, 0xF4, 0x99, 0x66, 0x22, 0x5B, 0xA2, 0xEB, 0xA1,
    0x52, 0xCC, 0xD0, 0x6D, 0x77, 0xC5, 0xA3, 0x53, 0x90, 0x8C, 0x77, 0xF4, 0x7C, 0x04, 0x90, 0x05,
    0xCE, 0x8F, 0x1E, 0x5F, 0xDB, 0x18, 0x80, 0xBC, 0xD4, 0x46, 0x88, 0x70, 0x86, 0x0C, 0x8C, 0xE5,
    0xDA, 0x0E, 0xF9, 0xDC, 0x6C, 0x36, 0x83, 0x3C, 0x2E, 0x48, 0x8D, 0xEB, 0xF8, 0xE8, 0xCA, 0x8C,
    0x4B, 0xAB, 0x2D, 0x4F, 0x6D, 0xA3, 0x0C, 0x11, 0x9B, 0x7F, 0x07, 0x64, 0x59, 0xC3, 0xE1, 0x26,
    0x0B, 0x5F, 0x40, 0x30, 0x1C, 0x14, 0xC3, 0x06, 0x06, 0xC9, 0x45, 0x18, 0xAF, 0x31, 0xDB, 0x44,
    0x20, 0xF3, 0x8A, 0x8E, 0x5E, 0x82, 0xA3, 0x67, 0xC3, 0x6A, 0x99, 0xBE, 0xD3, 0x24, 0x27, 0x10,
    0x2B, 0xC8, 0x5E, 0xC8, 0x76, 0x35, 0x61, 0xD5, 0xA1, 0x44, 0x29, 0xE6, 0x21, 0xED, 0x9B, 0xFA,
    0x27, 0x44, 0xDA, 0x6D, 0x9B, 0x53, 0x98, 0x76, 0x9C, 0xBA, 0xE7, 0xBF, 0x69, 0x8C, 0x4B, 0x19,
    0x0C, 0x03, 0x0F, 0xAA, 0x21, 0xE7, 0xA0, 0xAF, 0xB9, 0xB9, 0xE4, 0x46, 0x30, 0x9B, 0xD3, 0x1F,
    0x6B, 0x17, 0x68, 0x9C, 0x7F, 0x40, 0x8B, 0x35, 0x88, 0x44, 0xC3, 0x0F, 0x95, 0xDA, 0x4A, 0x36,
    0xAC, 0xF7, 0x03, 0x8A, 0x3E, 0x53, 0xB0, 0x43, 0x13, 0x6A, 0x27, 0xEC, 0x25, 0x14, 0x62, 0x8E,
    0x17, 0x02, 0x0A, 0x59, 0x47, 0xE1, 0x8A, 0x3B, 0x71, 0xDE, 0xED, 0xD8, 0x56, 0x9D, 0x54, 0x19,
    0x20, 0x85, 0x94, 0x4D, 0x11, 0xCA, 0x55, 0x64, 0xB4, 0x8E, 0x26, 0x9A, 0xF9, 0x6C, 0x2B, 0x14,
    0x2C, 0xC4, 0x69, 0x36, 0xDA, 0x03, 0x70, 0xF8, 0xA4, 0x39, 0x35, 0x03, 0x8D, 0x42, 0xB8, 0x60,
    0xEE, 0x26, 0xB8, 0xC7, 0xD0, 0xAE, 0x92, 0x5D, 0x80, 0xD0, 0x4C, 0x0C, 0x33, 0x19, 0x30, 0xA9,
    0xC3, 0x3F, 0x8A, 0x67, 0xC2, 0xB1, 0xB7, 0x3E, 0xDA, 0x77, 0x9A, 0x90, 0xD6, 0x52, 0xD7, 0x2D,
    0xE1, 0xBB, 0x32, 0x2B, 0x32, 0xA5, 0x1C, 0x19, 0x01, 0x44, 0xDA, 0xEC, 0xC6, 0x75, 0x44, 0x85,
    0x6E, 0xD1, 0x53, 0x9B, 0xC4, 0xD5, 0xE5, 0x28, 0x25, 0xD8, 0x7A, 0x0C, 0x5D, 0x54, 0x4F, 0xDF,
    0xD6, 0x92, 0xAA, 0x76, 0xCA, 0xDA, 0x6C, 0xA8, 0x8D, 0x4C, 0x59, 0x54, 0xC4, 0xDD, 0xEC, 0x94,
    0xC1, 0x2D, 0x96, 0xB7, 0x63, 0x15, 0x32, 0x9F, 0x95, 0x97, 0xB7, 0xEF, 0x04, 0x21, 0x55, 0xF5,
    0x44, 0x8B, 0x60, 0x8F, 0x42, 0x12, 0x33, 0x35, 0x15, 0x00, 0xC2, 0x16, 0x87, 0x92, 0xE4, 0xC8,
    0xDE, 0xEA, 0xDC, 0x2A, 0xC9, 0x81, 0x9F, 0x83, 0xCA, 0xC5, 0xD5, 0x39, 0xFB, 0x53, 0xC3, 0xEC,
    0x16, 0x6E, 0x9F, 0xB3, 0xBC, 0x7C, 0xE9, 0xA7, 0xEF, 0x2F, 0x62, 0xF7, 0x43, 0x17, 0x3F, 0x79,
    0xFE, 0x97, 0x58, 0x56, 0x78, 0xE4, 0x78, 0x6F, 0x5D, 0x73, 0x8A, 0xDE, 0x11, 0x8F, 0x74, 0x3B,
    0x3F, 0xA1, 0xEB, 0x17, 0xA9, 0xAE, 0x38, 0x50, 0x14, 0x30, 0x01, 0x6B, 0xAE, 0xCD, 0x41, 0x14,
    0x55, 0xAE, 0xF7, 0x08, 0xF5, 0x47, 0x01, 0xFE, 0x57, 0xE8, 0xC0, 0xD6, 0x8A, 0x37, 0x5E, 0x88,
    0x42, 0xE2, 0x1E, 0x99, 0x86, 0xEE, 0x99, 0x90, 0xED, 0xAC, 0x0D, 0xA8, 0x10, 0x27, 0x82, 0xDC,
    0xA1, 0x93, 0xFF, 0xC1, 0x76, 0x13, 0x15, 0x59, 0x8D, 0x51, 0xD3, 0xD7, 0x25, 0x00, 0xA4, 0x30,
    0x97, 0xEE, 0xEA, 0xD1, 0x45, 0x20, 0x4A, 0x55, 0x08, 0x90, 0x36, 0x83, 0x21, 0xB1, 0x08, 0x5E,
    0x76, 0x52, 0xC8, 0x70, 0xDC, 0xBF, 0x92, 0x10, 0xFE, 0xB4, 0x97, 0x69, 0x7A, 0x88, 0x3C, 0xAD,
    0xDD, 0x1F, 0xDB, 0x4D, 0x76, 0x0B, 0x4C, 0x05, 0x17, 0x6E, 0xC2, 0x1C, 0x8D, 0xD7, 0x88, 0x24,
    0xF2, 0xE4, 0xF2, 0xE5, 0x64, 0xD4, 0xC0, 0xEE, 0xD4, 0x2D, 0xE9, 0x19, 0xC2, 0x11, 0x7F, 0xC2,
    0x99, 0x3C, 0xDC, 0x9F, 0x65, 0x5A, 0x0F, 0x33, 0xF7, 0x68, 0x71, 0x9C, 0x9F, 0x29, 0xD3, 0x81,
    0x00, 0x38, 0x2A, 0x10, 0x33, 0x1E, 0x5F, 0xD2, 0x35, 0x08, 0x10, 0x45, 0xA8, 0xEE, 0x1E, 0x2D,
    0x7E, 0xCB, 0x4F, 0x00, 0x86, 0x4C, 0xC5, 0xFE, 0xC9, 0xF6, 0x98, 0xF7, 0xB5, 0x51, 0x49, 0x3D,
    0x1E, 0x0A, 0x1D, 0x12, 0x5D, 0xE5, 0xA8, 0xDD, 0x4A, 0xBE, 0xD3, 0x80, 0x92, 0xAD, 0x6D, 0xC9,
    0x62, 0x93, 0x32, 0xD7, 0xAE, 0xD1, 0xC1, 0xC7, 0x1A, 0x02, 0xB2, 0xD4, 0x0B, 0x36, 0x96, 0x38,
    0x3A, 0x68, 0x08, 0x22, 0x57, 0x88, 0xEB, 0xA5, 0xD9, 0x52, 0x4B, 0x13, 0x20, 0x6D, 0xD3, 0xB5,
    0xAB, 0x85, 0xF4, 0x77, 0x88, 0x5B, 0xAA, 0xAF, 0x60, 0xE1, 0x91, 0x4A, 0xBB, 0xB2, 0x24, 0x43,
    0x7F, 0xE6, 0xDC, 0xB9, 0x73, 0x02, 0x05, 0x62, 0xFA, 0x99, 0xAE, 0x19, 0x42, 0x8D, 0xAC, 0x22,
    0xE8, 0x03, 0x36, 0x8B, 0x51, 0x2F, 0xC7, 0xF7, 0x14, 0xA6, 0x45, 0xF4, 0x59, 0x4D, 0xF2, 0xDC,
    0xA9, 0x72, 0x99, 0x36, 0x82, 0x2A, 0xFA, 0xF4, 0xE5, 0x61, 0x04, 0xA1, 0x1B, 0x52, 0x62, 0x28,
    0xE4, 0x2C, 0xE2, 0x1E, 0x20, 0x61, 0x54, 0x08, 0x3F, 0xDC, 0xB9, 0xFC, 0x19, 0x68, 0x6A, 0xEF,
    0xE8, 0x5B, 0xED, 0x8C, 0x34, 0x01, 0xD9, 0x17, 0x03, 0xD3, 0xD1, 0x55, 0x85, 0xE0, 0xF0, 0xAE,
    0xFA, 0x24, 0xDE, 0x25, 0x74, 0x73, 0xE3, 0x9E, 0x9D, 0xB7, 0x12, 0xE7, 0xA9, 0x3D, 0x22, 0xDA,
    0xE5, 0xC4, 0x20, 0x75, 0xDA, 0xFB, 0xDF, 0xBE, 0x84, 0xF1, 0x1A, 0xD5, 0xA9, 0x6E, 0xF7, 0x5D,
    0x5C, 0x5C, 0x90, 0xB0, 0x72, 0x62, 0x59, 0x7A, 0x2D, 0x6A, 0x77, 0x5C, 0xCF, 0x90, 0x56, 0xC6,
    0x0D, 0x37, 0xAB, 0x1D, 0xD5, 0x0C, 0x7D, 0xF4, 0x78, 0xBD, 0x60, 0x78, 0x2A, 0xCE, 0x7D, 0x38,
    0x78, 0xF9, 0xC4, 0xA3, 0xA5, 0x2B, 0xD1, 0xC7, 0xDF, 0xCA, 0x72, 0xD6, 0xF1, 0xD9, 0x43, 0x1E,
    0xCC, 0xE4, 0x5E, 0x20, 0xDA, 0x3E, 0x71, 0xD2, 0x9F, 0xC1, 0x77, 0x63, 0x5A, 0x34, 0x22, 0xE7,
    0x1A, 0x7D, 0xD0, 0x86, 0xF8, 0xB1, 0x5E, 0xB4, 0x10, 0xBE, 0x3A, 0xF9, 0xC4, 0x99, 0x20, 0x54,
    0x35, 0x3F, 0x7E, 0x27, 0x12, 0x4D, 0xC3, 0x96, 0x44, 0x86, 0x55, 0x8D, 0xB0, 0xD2, 0x2E, 0x96,
    0x31, 0xB1, 0xFC, 0xD2, 0x8B, 0xAC, 0x5F, 0x4A, 0x99, 0xAA, 0xF7, 0xAB, 0xB1, 0x88, 0x6B, 0x9C,
    0xC6, 0x0F, 0x4B, 0xF3, 0xF0, 0x33, 0x89, 0xF1, 0x69, 0x18, 0xD3, 0xC3, 0x3B, 0x9C, 0x72, 0x2D,
    0xCA, 0xF7, 0x44, 0x5C, 0x56, 0xA3, 0x89, 0x6D, 0x1A, 0x40, 0x7F, 0x89, 0x59, 0x6E, 0x0B, 0x0A,
    0x52, 0x44, 0xA9, 0xA8, 0x27, 0x54, 0xAC, 0x63, 0x08, 0x5A, 0x03, 0xBC, 0x41, 0x8B, 0xBC, 0x5A,
    0x7F, 0xB9, 0x4C, 0x4E, 0xA1, 0x64, 0xF8, 0x60, 0xF5, 0x93, 0x80, 0x17, 0x85, 0x52, 0x65, 0x68,
    0xB9, 0x45, 0xA8, 0x40, 0xCE, 0x90, 0x72, 0x72, 0xF9, 0x7B, 0x3A, 0x23, 0xCA, 0x0E, 0xD8, 0x42,
    0x84, 0x07, 0xE7, 0x63, 0x29, 0xDE, 0x97, 0x32, 0xB7, 0xE3, 0xFC, 0x1B, 0xC1, 0x23, 0xC0, 0x14,
    0xCA, 0x36, 0x8A, 0xC1, 0x4D, 0x6D, 0x84, 0x88, 0x74, 0xA8, 0xC5, 0x1E, 0x9C, 0x44, 0x72, 0xBA,
    0x42, 0x95, 0x8A, 0xA6, 0x2E, 0x4D, 0x6E, 0x62, 0xF2, 0xCA, 0x34, 0xAF, 0x06, 0xD3, 0x6B, 0x86,
    0x4D, 0x12, 0xD5, 0x57, 0x5F, 0x61, 0xE6, 0x0B, 0x9A, 0x61, 0xFF, 0xC2, 0x8F, 0xEA, 0x4A, 0xF6,
    0x80, 0xD0, 0x54, 0x43, 0x39, 0xAA, 0x95, 0x00, 0xBB, 0x33, 0x10, 0xF7, 0xD4, 0x7F, 0x7D, 0x4A,
    0x52, 0x40, 0x4B, 0x75, 0x4B, 0x96, 0xEE, 0x53, 0xB2, 0x93, 0x42, 0x15, 0xB6, 0x4E, 0x08, 0x22,
    0xDF, 0x8E, 0x9D, 0x40, 0xC1, 0x50, 0xFB, 0xDF, 0xD9, 0x1A, 0x46, 0xB0, 0x51, 0xD0, 0x3B, 0x3A,
    0x6F, 0x44, 0x8F, 0xFD, 0x24, 0x52, 0xB8, 0x92, 0x3B, 0xEB, 0x97, 0xB8, 0x16, 0x58, 0x26, 0xC7,
    0x44, 0xC8, 0xF1, 0xD6, 0x34, 0x8F, 0x56, 0x3B, 0xF2, 0xFD, 0xE4, 0x37, 0x82, 0xD6, 0xD6, 0xF5,
    0x0A, 0x8F, 0x34, 0x8D, 0x51, 0xEA, 0x03, 0x57, 0x17, 0x96, 0x86, 0xCC, 0xA3, 0xA0, 0xA2, 0x68,
    0x86, 0x63, 0x8E, 0x68, 0xD2, 0x47, 0x45, 0xE2, 0xDB, 0x49, 0xF7, 0x11, 0x9E, 0xD0, 0xA4, 0xD1,
    0x42, 0xF5, 0x85, 0xB4, 0x2B, 0x21, 0xAD, 0xE1, 0xB8, 0x37, 0xEE, 0x26, 0x3C, 0x21, 0xA0, 0x86,
    0xE6, 0x71, 0x37, 0x70, 0x05, 0x38, 0x35, 0xE8, 0x63, 0xF1, 0xD0, 0x62, 0xF5, 0xB0, 0xD5, 0x87,
    0x10, 0x67, 0x9E, 0xEC, 0x33, 0xFA, 0xC0, 0x03, 0x98, 0x8C, 0x95, 0xD2, 0x98, 0x1E, 0x7F, 0xC9,
    0x6B, 0x72, 0xE7, 0xE1, 0x23, 0xB1, 0x79, 0x4D, 0x63, 0x46, 0x4D, 0xA1, 0x4F, 0x4D, 0x38, 0xAB,
    0x83, 0xFE, 0x99, 0x0E, 0x02, 0xBD, 0x5E, 0x96, 0x2A, 0xDA, 0x44, 0x8A, 0xB6, 0x1F, 0x50, 0x04,
    0x94, 0xD1, 0x4F, 0xB9, 0x29, 0x7F, 0xFD, 0xEB, 0xA7, 0x6C, 0x1C, 0xD0, 0x25, 0x4A, 0xE8, 0xAD,
    0xDD, 0xD6, 0x61, 0x3D, 0x59, 0xB2, 0x51, 0xF8, 0xC2, 0xDC, 0x7E, 0x1F, 0xB7, 0xC2, 0x70, 0x6D,
    0x4B, 0xA8, 0x3E, 0x73, 0x75, 0xEA, 0x47, 0x3C, 0x5F, 0xD2, 0x5B, 0x9A, 0xB6, 0x15, 0xAC, 0x82,
    0x12, 0x1E, 0xE6, 0xBE, 0xDD, 0x49, 0xBD, 0xA9, 0x2F, 0xE0, 0x61, 0x4A, 0x53, 0x9D, 0x5C, 0xAA,
    0x0C, 0xCF, 0x67, 0x4B, 0x4A, 0x43, 0x69, 0x52, 0x6E, 0xB9, 0x8C, 0x78, 0x2B, 0xBD, 0x55, 0x27,
    0x44, 0x7E, 0x5D, 0x42, 0x32, 0xFC, 0x82, 0x05, 0xD2, 0xEC, 0x9A, 0x86, 0x47, 0x66, 0x08, 0x26,
    0x1D, 0x56, 0xCF, 0xF5, 0x50, 0xF7, 0x8E, 0x62, 0xFB, 0x07, 0xAD, 0x4A, 0x0D, 0x0F, 0xF2, 0x23,
    0xBC, 0xF0, 0x79, 0x59, 0x38, 0xA3, 0xBE, 0x35, 0x7E, 0x94, 0x0C, 0x76, 0x96, 0x8E, 0x99, 0xF5,
    0xAF, 0x2C, 0x35, 0xCC, 0x9F, 0xDE, 0xB7, 0x0D, 0x80, 0x10, 0x3E, 0x3E, 0xDE, 0x49, 0x28, 0xAC,
    0xEC, 0x33, 0x9F, 0x20, 0x33, 0x20, 0x7C, 0xDD, 0x4D, 0x4F, 0x66, 0xC1, 0x09, 0x98, 0x2F, 0x6E,
    0x34, 0x3F, 0xBE, 0x2D, 0xE7, 0xE7, 0x87, 0xB9, 0xEB, 0xF4, 0x42, 0x9C, 0x61, 0xE0, 0xCD, 0x16,
    0x95, 0xE4, 0x05, 0x96, 0x6A, 0x7A, 0x7D, 0x13, 0x34, 0x42, 0xB4, 0xA2, 0x64, 0x23, 0x23, 0x66,
    0xFE, 0x24, 0x20, 0x61, 0xEC, 0x6E, 0xF4, 0x59, 0x11, 0x0D, 0xCC, 0x84, 0x8A, 0xDD, 0xA2, 0xA4,
    0xEE, 0xCF, 0x12, 0xB5, 0xAA, 0xCB, 0x9A, 0x5E, 0xF0, 0x06, 0x94, 0x5C, 0xCE, 0x3E, 0x94, 0xA9,
    0x13, 0x2F, 0xB4, 0xDA, 0xDE, 0x24, 0x5A, 0xF8, 0x6F, 0x56, 0xAD, 0x6E, 0x42, 0xAF, 0x80, 0xF4,
];

/// Second XOR operand layered over every expansion window, plus the
/// dedicated tail window at `0xA00`.
pub(crate) const STACK_TABLE: [u8; 2816] = [
    0xBB, 0xBB, 0x24, 0xB3, 0x6E, 0xE8, 0x45, 0xB1, 0x95, 0xCE, 0xB1, 0x24, 0x4C, 0xC4, 0xD8, 0xEE,
    0x69, 0x5B, 0x5C, 0xB9, 0x86, 0xD5, 0x00, 0x5C, 0x63, 0x34, 0xC0, 0xBB, 0x11, 0x62, 0x74, 0x96,
    0xF3, 0x42, 0xE7, 0x8F, 0x38, 0x56, 0xFE, 0xDC, 0x8C, 0xF4, 0xE0, 0x5A, 0xBD, 0x4A, 0xDF, 0x0C,
    0x86, 0x2A, 0x34, 0x69, 0x57, 0xD7, 0x94, 0xC9, 0x06, 0x38, 0x52, 0xB8, 0x2A, 0xCE, 0xE3, 0xA5,
    0xA6, 0x1C, 0xE7, 0xCB, 0xDC, 0x8B, 0x81, 0x13, 0x0F, 0xD4, 0x23, 0x24, 0x7D, 0xAC, 0x44, 0x26,
    0x07, 0x11, 0x55, 0x39, 0x9B, 0x50, 0x9E, 0xE6, 0x55, 0xE1, 0x69, 0x2D, 0x82, 0x0B, 0x1B, 0x9A,
    0x6F, 0xBC, 0x6D, 0x90, 0x2D, 0x45, 0x7C, 0xB1, 0xBF, 0x44, 0x13, 0xE2, 0x7A, 0xA9, 0x4C, 0x0D,
    0x98, 0x60, 0x4A, 0xC9, 0x65, 0xC4, 0xF6, 0xBF, 0x6E, 0xF0, 0xC8, 0xA9, 0xF1, 0x86, 0x0A, 0x0D,
    0xC6, 0x20, 0x85, 0x50, 0x86, 0x18, 0x41, 0x98, 0x06, 0x41, 0x99, 0x4E, 0xD3, 0x97, 0xA7, 0xC8,
    0xDD, 0xAC, 0x1D, 0xF6, 0x07, 0xC7, 0x85, 0xD1, 0x29, 0x33, 0x38, 0x55, 0xF8, 0x04, 0x0A, 0xE0,
    0xC0, 0x04, 0xD3, 0x38, 0x9D, 0xB2, 0x5E, 0xA8, 0xD1, 0x00, 0xE3, 0x46, 0x7B, 0xE0, 0x8E, 0x75,
    0xB1, 0xA2, 0xD4, 0x77, 0x1E, 0x55, 0x27, 0x9E, 0x58, 0x41, 0xE0, 0x4A, 0xDB, 0x0A, 0x0F, 0x56,
    0xA6, 0xAC, 0xFF, 0x78, 0x89, 0x2D, 0xEB, 0xB5, 0x58, 0xC3, 0x7C, 0x26, 0x48, 0xE3, 0xDF, 0x90,
    0x2A, 0xAA, 0xF7, 0x5C, 0x5F, 0xB0, 0x09, 0x37, 0xDA, 0xF6, 0x54, 0xB3, 0xC3, 0xBD, 0x8F, 0xFA,
    0xD3, 0xCE, 0xD9, 0xC7, 0x69, 0x41, 0xF0, 0x42, 0x80, 0x42, 0x69, 0x9A, 0xC0, 0x4B, 0x37, 0x08,
    0xF4, 0x4C, 0x92, 0x47, 0xF8, 0x6B, 0x8B, 0x8F, 0xF2, 0xD0, 0x9D, 0xBA, 0xDF, 0xB9, 0xFA, 0x4B,
    0x2F, 0x33, 0x20, 0xEB, 0xE0, 0x62, 0x29, 0xFB, 0x78, 0xB0, 0xEC, 0x2B, 0xE1, 0x37, 0x92, 0x06,
    0xF3, 0x5A, 0xAB, 0xF0, 0xCC, 0xE9, 0xF8, 0x9B, 0xAB, 0x0A, 0x0D, 0xB5, 0x14, 0xB7, 0x78, 0x77,
    0x76, 0xDD, 0xFC, 0x01, 0x28, 0x4A, 0xF6, 0x01, 0x71, 0xCC, 0xCD, 0x57, 0xED, 0x9A, 0xAE, 0x23,
    0xFF, 0x81, 0x3C, 0x23, 0x98, 0xEA, 0x3D, 0xB5, 0x4B, 0x3D, 0x28, 0x5B, 0xF9, 0xBA, 0x92, 0x13,
    0x90, 0xDF, 0xC0, 0x3E, 0x69, 0x1B, 0xB6, 0x39, 0xBA, 0x47, 0x7C, 0x5C, 0x73, 0x05, 0x06, 0x5F,
    0xCA, 0x46, 0x20, 0x5C, 0x6C, 0xE9, 0x45, 0x65, 0x7D, 0xFA, 0x5B, 0x17, 0xD3, 0xD1, 0x29, 0x79,
    0xB7, 0x2D, 0xFD, 0xCA, 0x43, 0x79, 0xA1, 0x0A, 0xB7, 0xE0, 0x66, 0x7E, 0x8C, 0xB4, 0x8B, 0x1C,
    0x80, 0xB6, 0x20, 0x92, 0x84, 0x92, 0xB9, 0xCC, 0x9C, 0x01, 0x02, 0x80, 0x28, 0xA9, 0x21, 0x19,
    0xBC, 0x1C, 0x78, 0x63, 0xDD, 0xAA, 0x44, 0xA3, 0x1D, 0x07, 0xE4, 0x43, 0xF0, 0xA2, 0x27, 0x77,
    0xD9, 0x12, 0x2C, 0x43, 0x37, 0x9D, 0x93, 0xCA, 0x45, 0x58, 0x60, 0xC7, 0x75, 0x9F, 0xE3, 0x75,
    0x0B, 0x7B, 0xD0, 0xA1, 0x40, 0x95, 0x11, 0xFC, 0xAB, 0xCD, 0x96, 0x8A, 0x95, 0x17, 0xB0, 0x00,
    0xCB, 0xB0, 0xE5, 0x30, 0xF5, 0x8C, 0x49, 0xAB, 0xD6, 0xF3, 0xF4, 0x76, 0x66, 0xF0, 0xD3, 0xAA,
    0xA5, 0x5D, 0xB2, 0x2F, 0x1C, 0x7D, 0xFD, 0xD0, 0x40, 0xF1, 0x63, 0xB8, 0x53, 0xC3, 0x7E, 0xBB,
    0x73, 0xA4, 0x67, 0xE1, 0x36, 0xA2, 0x27, 0xB0, 0xBB, 0x13, 0xA1, 0x37, 0xE5, 0xAC, 0xD7, 0xAE,
    0x33, 0xCA, 0xB5, 0x56, 0x08, 0x00, 0x8D, 0x26, 0x91, 0x47, 0xBF, 0x63, 0xDE, 0x1A, 0x6C, 0x6E,
    0xD4, 0xBC, 0x14, 0xAE, 0x7D, 0xD9, 0xA8, 0x1E, 0x88, 0xC0, 0xE4, 0xFC, 0xED, 0x52, 0x63, 0xC9,
    0x48, 0x30, 0xDF, 0x71, 0x01, 0xDB, 0xF6, 0xDC, 0xB0, 0x6D, 0xF4, 0x98, 0xA4, 0x63, 0x04, 0x05,
    0xBC, 0x36, 0xE2, 0xA3, 0xDC, 0x86, 0x17, 0x06, 0x6C, 0xFB, 0x25, 0x7F, 0x17, 0x76, 0x03, 0x94,
    0xBC, 0xC7, 0xD0, 0x18, 0x91, 0xFB, 0x0B, 0x4C, 0xFA, 0x75, 0x51, 0x23, 0x2F, 0x2D, 0x67, 0x5B,
    0xDF, 0x3B, 0x84, 0x63, 0x4A, 0xF5, 0xF3, 0xF1, 0x98, 0xE4, 0x5E, 0xC0, 0x76, 0xE9, 0x9F, 0xB6,
    0x65, 0x0D, 0x7B, 0xD3, 0x11, 0xB4, 0x53, 0x97, 0xB4, 0x5C, 0xDF, 0xCA, 0xE6, 0x39, 0xBC, 0xC8,
    0xEA, 0x6C, 0x45, 0x0D, 0xD1, 0x35, 0x83, 0x38, 0x7D, 0x67, 0x54, 0xD4, 0x13, 0x40, 0xE7, 0x8B,
    0x85, 0x05, 0x4A, 0x09, 0x87, 0x2E, 0xFF, 0x21, 0xA2, 0x3C, 0xA0, 0xBF, 0xEA, 0x2F, 0x17, 0x1C,
    0x02, 0x5C, 0xD8, 0xC2, 0x44, 0xF2, 0x6A, 0x52, 0x8B, 0x6E, 0x1E, 0xD3, 0x12, 0x16, 0x1A, 0x00,
    0x95, 0x74, 0x69, 0x13, 0xE7, 0x10, 0x64, 0xDD, 0x00, 0x85, 0x27, 0x4F, 0xD6, 0xED, 0xB4, 0x84,
    0x8F, 0xB7, 0xA0, 0xBD, 0xBE, 0x0A, 0xE8, 0x5D, 0x1E, 0x66, 0x4E, 0x84, 0x95, 0xE3, 0xFD, 0x3E,
    0x73, 0x40, 0x03, 0xB2, 0xAD, 0x7F, 0xF9, 0x3B, 0x33, 0x77, 0xB5, 0xEB, 0x0D, 0x7C, 0x7F, 0x3A,
    0x20, 0xBF, 0x34, 0xCD, 0x4B, 0xEA, 0xF9, 0xCF, 0x0A, 0x80, 0x2F, 0xD2, 0x2A, 0x2E, 0x81, 0xF0,
    0xA7, 0x4A, 0xD6, 0xCC, 0xCE, 0xB4, 0x98, 0x3D, 0xF5, 0x92, 0x9D, 0x94, 0x33, 0x8D, 0x67, 0xEA,
    0x39, 0x9C, 0xE6, 0xD5, 0x02, 0x16, 0x75, 0x2C, 0x68, 0x3E, 0x38, 0x19, 0x50, 0x1C, 0x01, 0x30,
    0xFA, 0xBD, 0x8F, 0x85, 0x25, 0x45, 0x20, 0x9F, 0xBD, 0xF8, 0xBF, 0xF5, 0x83, 0x9C, 0xF3, 0x91,
    0xC3, 0x9A, 0x3C, 0xCD, 0x80, 0x8D, 0x50, 0x1F, 0x86, 0x0A, 0x84, 0x5A, 0x90, 0x6E, 0x52, 0x0A,
    0x86, 0x82, 0x36, 0xA0, 0x93, 0x3C, 0x8D, 0x35, 0x37, 0x73, 0xF6, 0xDE, 0x84, 0xBE, 0x77, 0x5A,
    0xA4, 0x9A, 0xEE, 0xC2, 0x85, 0x09, 0x0E, 0xB9, 0x60, 0x0C, 0x1B, 0x0E, 0x0C, 0x64, 0x81, 0x47,
    0x4C, 0xC7, 0x29, 0xB9, 0xC1, 0xF2, 0x52, 0xB2, 0xAB, 0xCA, 0xDA, 0xA6, 0x61, 0xE6, 0x10, 0x08,
    0x2A, 0xD5, 0x42, 0x78, 0xD2, 0x01, 0x67, 0xBE, 0x76, 0xD9, 0xCA, 0x6D, 0x0C, 0x18, 0xD5, 0xE3,
    0x0E, 0xC0, 0x4E, 0x42, 0x64, 0xFB, 0xB9, 0x0C, 0xBA, 0x08, 0x57, 0x47, 0x80, 0xE5, 0x79, 0x68,
    0xBE, 0xD2, 0xAD, 0x08, 0x4E, 0x81, 0x67, 0x08, 0x8F, 0xD5, 0x98, 0x7C, 0xCC, 0x23, 0x06, 0x02,
    0x1A, 0x2C, 0x31, 0x17, 0x84, 0x47, 0x51, 0xF7, 0x6F, 0x57, 0x74, 0x75, 0x99, 0x25, 0x26, 0x95,
    0xB2, 0xE6, 0x01, 0xBD, 0x9D, 0x95, 0xD0, 0x7D, 0xFB, 0x35, 0xB2, 0xAB, 0xE2, 0x17, 0xA1, 0xB9,
    0x2A, 0xEA, 0x85, 0xAC, 0xC4, 0xAD, 0x0B, 0x03, 0x42, 0xDD, 0x2F, 0xC8, 0x94, 0x86, 0x17, 0x80,
    0x03, 0x50, 0x18, 0x59, 0x08, 0x53, 0x31, 0x0A, 0x0E, 0xAD, 0x51, 0x33, 0xB0, 0xA6, 0xAA, 0x14,
    0xE3, 0xC8, 0xEA, 0x95, 0xEE, 0x8B, 0x44, 0xF5, 0xC8, 0xC7, 0xB0, 0x93, 0x48, 0xE1, 0xA4, 0x0B,
    0xA8, 0x87, 0xE5, 0x14, 0x79, 0x00, 0xCE, 0x24, 0x37, 0xFA, 0x0E, 0x13, 0x4B, 0xAD, 0xE3, 0xEF,
    0xCA, 0xD0, 0xDD, 0x26, 0xA4, 0x4D, 0x1C, 0x69, 0x33, 0xCD, 0x8F, 0x94, 0xBF, 0x40, 0xF4, 0x4B,
    0xDC, 0x94, 0x59, 0xC9, 0x59, 0x22, 0xEA, 0xFF, 0xE0, 0xE4, 0x85, 0xAF, 0xA0, 0xF9, 0xF6, 0x94,
    0x6E, 0x12, 0x8D, 0x7F, 0xA4, 0x7D, 0x86, 0x46, 0xC7, 0x51, 0x2F, 0xE9, 0x6C, 0xB1, 0x21, 0x94,
    0xC0, 0x20, 0x15, 0x2C, 0x8A, 0x2E, 0xB1, 0xE3, 0x46, 0xEA, 0xB2, 0xA1, 0xFC, 0xA8, 0x47, 0xEF,
    0x93, 0x3F, 0x99, 0xC6, 0x99, 0xC0, 0x4F, 0xF8, 0x46, 0x07, 0xCF, 0xFD, 0xE9, 0xA2, 0x61, 0xA5,
    0x27, 0x8D, 0x5C, 0xF9, 0x77, 0xA8, 0x43, 0xCE, 0x2C, 0xBC, 0x5D, 0x8E, 0xE0, 0xCA, 0xCE, 0x85,
    0x65, 0x85, 0x4A, 0x18, 0x64, 0xA7, 0x33, 0x55, 0xE3, 0x07, 0x4E, 0x28, 0xF6, 0x2E, 0xDE, 0x52,
    0xA3, 0x62, 0x5B, 0x64, 0xE8, 0x67, 0x5A, 0xE0, 0xB8, 0xC1, 0x1D, 0x48, 0x66, 0xDA, 0xEC, 0x96,
    0xFC, 0xB1, 0xCB, 0x2C, 0x47, 0x0C, 0x10, 0x15, 0xA4, 0xD6, 0x4F, 0x15, 0xFF, 0x88, 0xE2, 0x31,
    0x27, 0x7E, 0xBF, 0xD1, 0x1C, 0xD9, 0x52, 0x71, 0x17, 0x3E, 0xBB, 0xD2, 0x4E, 0x02, 0xC9, 0x23,
    0xD6, 0xF8, 0x31, 0x7C, 0xAC, 0x67, 0x93, 0xE7, 0x31, 0x4C, 0xEE, 0x56, 0xE8, 0x0C, 0xC5, 0xB2,
    0xC2, 0x2C, 0xAE, 0x31, 0x95, 0x40, 0x13, 0xBA, 0x8B, 0xF7, 0x73, 0x5F, 0xD3, 0xDF, 0xE1, 0x5C,
    0xC4, 0xFA, 0x67, 0x26, 0x82, 0xD6, 0x24, 0x82, 0xC7, 0x2F, 0x3C, 0x9B, 0xB6, 0x8C, 0x21, 0x9E,
    0x58, 0xE8, 0x08, 0xAD, 0x32, 0xFF, 0x51, 0x67, 0x01, 0x8E, 0x91, 0xC9, 0xEC, 0xED, 0xC4, 0xEF,
    0x06, 0x7E, 0xF3, 0xE4, 0xF7, 0xF1, 0x09, 0xEA, 0xD4, 0x96, 0xDA, 0xF1, 0xD7, 0x45, 0x4C, 0x82,
    0xDC, 0xF0, 0x5B, 0x6B, 0xDD, 0xB1, 0x8C, 0x69, 0x8B, 0x24, 0x5F, 0x43, 0xC2, 0x5E, 0x6A, 0xAD,
    0xAF, 0x92, 0xC7, 0x08, 0x33, 0xDE, 0xF0, 0x35, 0x2F, 0xE3, 0x79, 0x4E, 0x23, 0xDA, 0x56, 0x07,
    0x10, 0x62, 0xD1, 0x5E, 0x21, 0x53, 0x78, 0xAD, 0xEF, 0x01, 0xAD, 0x0C, 0xC7, 0xB0, 0x0A, 0x56,
    0x70, 0x37, 0x62, 0x68, 0xF9, 0xD8, 0xA7, 0x55, 0x4F, 0x56, 0xEB, 0x84, 0x71, 0x2B, 0x26, 0x1E,
    0xC8, 0xAE, 0xE4, 0x9D, 0xCA, 0x17, 0xA1, 0x9D, 0x3A, 0x93, 0x44, 0x41, 0x63, 0x18, 0x4F, 0x0E,
    0x1D, 0x22, 0x18, 0x81, 0x95, 0x0D, 0x61, 0x44, 0xF2, 0x97, 0xB5, 0x1A, 0xFD, 0x31, 0x13, 0xFF,
    0x2C, 0x2E, 0x3C, 0x52, 0x4C, 0x17, 0x11, 0x98, 0xCA, 0x33, 0x47, 0x54, 0xAF, 0xB8, 0x39, 0x82,
    0x4E, 0x27, 0x2D, 0x27, 0x8E, 0xEC, 0xA4, 0xBF, 0x4B, 0x45, 0x08, 0xE8, 0x38, 0xFD, 0x90, 0x7D,
    0xD7, 0x61, 0x9B, 0x42, 0xC5, 0xFC, 0xD0, 0x96, 0x6D, 0x35, 0xF5, 0xEC, 0xF2, 0xAB, 0x9E, 0xBA,
    0x2D, 0xAA, 0xE7, 0x81, 0xB3, 0x16, 0x9C, 0xE4, 0x5E, 0xC7, 0x32, 0xE6, 0x56, 0x75, 0x72, 0x6C,
    0x24, 0x95, 0x91, 0xC8, 0xEF, 0x9D, 0xBB, 0x9F, 0xE7, 0xDA, 0xEE, 0x8D, 0x82, 0x16, 0x4E, 0xAD,
    0xAE, 0xC3, 0xB7, 0x77, 0x1E, 0x40, 0xB9, 0xFA, 0xF1, 0xDF, 0x53, 0xA3, 0x34, 0xAB, 0x6A, 0xE9,
    0x84, 0xC9, 0x4C, 0xF6, 0x86, 0x10, 0xEA, 0x8F, 0xBD, 0xF5, 0x64, 0x4E, 0xC6, 0x7E, 0x52, 0x54,
    0xDB, 0x70, 0x00, 0xE5, 0x3F, 0x05, 0x97, 0xDD, 0xE7, 0x02, 0x8E, 0xC3, 0xAA, 0xA2, 0x72, 0x13,
    0x90, 0xE1, 0x87, 0x0B, 0x20, 0xAA, 0x07, 0xBE, 0x42, 0x3E, 0xC3, 0xBD, 0x9D, 0xF4, 0x9E, 0x23,
    0x51, 0x76, 0x67, 0x25, 0x3A, 0xCF, 0xA9, 0x7E, 0x8F, 0xA5, 0xB9, 0xB7, 0x3A, 0x8A, 0x92, 0xC5,
    0x27, 0xF0, 0x05, 0x0B, 0xB5, 0xD1, 0xCE, 0xFB, 0x47, 0x8E, 0xC5, 0x13, 0x90, 0xFA, 0x65, 0xDC,
    0x3B, 0x8B, 0x05, 0x43, 0x41, 0x91, 0xB3, 0xF5, 0xDD, 0xD1, 0x39, 0xEC, 0xB8, 0xC5, 0x4A, 0x1F,
    0xB6, 0xD7, 0x93, 0xEA, 0x58, 0x29, 0xE2, 0x2F, 0x6F, 0x6C, 0xAE, 0x49, 0xC1, 0x0D, 0x18, 0x0F,
    0xC0, 0x47, 0x28, 0xA5, 0x38, 0xED, 0x4B, 0x54, 0x49, 0x01, 0x00, 0xB3, 0x2D, 0x13, 0x15, 0xC3,
    0xC8, 0x12, 0xE5, 0x59, 0xC4, 0x1E, 0x77, 0xA9, 0xC7, 0x4E, 0xB8, 0x69, 0xDD, 0xC4, 0xCF, 0x34,
    0x79, 0xAF, 0x77, 0x3E, 0x3A, 0x85, 0x6C, 0xDF, 0xF6, 0x2B, 0x3A, 0x68, 0xEA, 0xDD, 0xE3, 0xAA,
    0xA2, 0xDA, 0x8C, 0x48, 0xEF, 0xBB, 0x2D, 0x0A, 0x9E, 0x17, 0x1A, 0x34, 0x46, 0x3F, 0x4A, 0x38,
    0x3A, 0x47, 0x39, 0x73, 0x95, 0x22, 0x3D, 0xBB, 0x20, 0xB1, 0x30, 0x91, 0x90, 0xF5, 0xE2, 0x5F,
    0xE5, 0xBF, 0x1C, 0xD8, 0x14, 0xC8, 0x90, 0x08, 0x24, 0x0C, 0xE0, 0x9E, 0xF1, 0xB5, 0xF1, 0x6C,
    0x96, 0x2B, 0x79, 0x5E, 0x1E, 0x87, 0x52, 0x07, 0x2F, 0x2B, 0xA1, 0x7F, 0x2E, 0x99, 0x53, 0x63,
    0xEA, 0x6C, 0x7E, 0x99, 0xBB, 0x2A, 0xA1, 0x1C, 0xE4, 0x99, 0xFE, 0xB6, 0x7D, 0x5A, 0xC0, 0x43,
    0x9F, 0x2B, 0x79, 0x9D, 0xBC, 0x4B, 0x9A, 0xC4, 0x8E, 0x0B, 0xE5, 0xB0, 0xDD, 0x01, 0xE3, 0x6F,
    0xA6, 0x49, 0x68, 0xFC, 0xC5, 0x72, 0x79, 0xFF, 0x0E, 0xCD, 0x99, 0xDB, 0x06, 0xB5, 0x38, 0x72,
    0xBF, 0xA8, 0x6C, 0x81, 0xF5, 0xC7, 0xE4, 0x07, 0x24, 0xBE, 0xFE, 0x96, 0x90, 0xC0, 0x2B, 0x27,
    0xCA, 0x2D, 0x1C, 0xA4, 0xD9, 0x9B, 0xC9, 0x68, 0x03, 0xAF, 0x9C, 0x71, 0x02, 0xFA, 0x44, 0x2A,
    0x62, 0x50, 0x60, 0x8D, 0x40, 0xD9, 0xEB, 0x94, 0xC9, 0x51, 0xDF, 0x86, 0x4F, 0xE4, 0x2E, 0x78,
    0xE8, 0xB4, 0xB7, 0x4C, 0x4F, 0x19, 0xDA, 0x2A, 0x7F, 0x7C, 0xF2, 0xEE, 0x18, 0x95, 0x85, 0xC7,
    0x7B, 0x7E, 0xDC, 0x7C, 0x54, 0x8C, 0xEA, 0xBB, 0x42, 0x38, 0xDB, 0x1F, 0x9B, 0xB9, 0xA9, 0x85,
    0xF6, 0x3F, 0x5C, 0xA1, 0x73, 0x81, 0xE9, 0x35, 0x67, 0x6B, 0x92, 0xA9, 0xC9, 0x71, 0x6C, 0x66,
    0xD3, 0x59, 0x4C, 0xB7, 0xAB, 0xA1, 0xCE, 0xCA, 0x66, 0xC6, 0x62, 0x36, 0x5C, 0x18, 0xCE, 0xF6,
    0x63, 0x05, 0x70, 0xD3, 0xE2, 0xB3, 0x08, 0xF3, 0x07, 0xBB, 0x31, 0x2E, 0x0E, 0x9C, 0x13, 0x03,
    0x93, 0x23, 0xD8, 0xE8, 0x26, 0xE4, 0xE1, 0x26, 0x48, 0xB3, 0x6D, 0xD4, 0x8B, 0x81, 0x7A, 0x23,
    0x8F, 0x8D, 0x4E, 0xDB, 0xE3, 0x6F, 0x6E, 0x29, 0x51, 0x21, 0xA3, 0xE2, 0xEE, 0x3E, 0x70, 0x3B,
    0x30, 0x4B, 0xFC, 0xA2, 0x82, 0x6B, 0x65, 0xCE, 0x19, 0x53, 0xA2, 0x2F, 0x7C, 0x77, 0x6A, 0x41,
    0x88, 0x75, 0xDE, 0x7C, 0x9A, 0xF3, 0xD9, 0x1C, 0xBF, 0x01, 0x5E, 0x36, 0x25, 0x05, 0x58, 0x51,
    0xDD, 0x93, 0xDF, 0xF1, 0x45, 0x97, 0xDA, 0xBF, 0x42, 0x38, 0x0C, 0x1C, 0xDE, 0x9F, 0xEC, 0x6E,
    0x85, 0x10, 0x32, 0x48, 0xAD, 0x88, 0x2E, 0x70, 0x5F, 0x8E, 0x8C, 0x71, 0x66, 0x4E, 0x00, 0x13,
    0x40, 0x2F, 0x30, 0x94, 0x23, 0xE8, 0x96, 0x0E, 0x43, 0x0F, 0xE9, 0x8E, 0x49, 0xA6, 0x54, 0xA3,
    0x00, 0x75, 0x62, 0x49, 0x8E, 0x50, 0x7F, 0x59, 0xFC, 0xD4, 0x80, 0x4F, 0xE6, 0x75, 0xAD, 0x58,
    0x3D, 0x59, 0xE2, 0x9E, 0xFC, 0x95, 0x0E, 0x2B, 0x90, 0x6A, 0xF8, 0x5C, 0x35, 0x01, 0x48, 0xBA,
    0xCB, 0xD5, 0x32, 0x8F, 0x34, 0x8D, 0xD8, 0xD9, 0xE1, 0x62, 0x89, 0x12, 0x5F, 0x61, 0xD9, 0x51,
    0x87, 0x6B, 0x1A, 0xC8, 0xD9, 0xCC, 0x18, 0xD9, 0x3E, 0x24, 0xD3, 0x5C, 0xBF, 0xD2, 0x07, 0x4A,
    0xC1, 0x48, 0x98, 0x26, 0x80, 0xBB, 0x66, 0x74, 0x7A, 0x62, 0x4E, 0x00, 0x3E, 0x3B, 0x17, 0x62,
    0xE0, 0x8B, 0xC0, 0x4D, 0x7E, 0xAA, 0xF1, 0xF9, 0xD9, 0x04, 0xC0, 0xFB, 0xCF, 0x57, 0x5B, 0x8D,
    0xAA, 0x88, 0x11, 0x39, 0x7D, 0x89, 0x69, 0x8E, 0xD4, 0x3D, 0x8A, 0xA4, 0xF1, 0x7B, 0x92, 0x91,
    0x75, 0x95, 0xAC, 0xFA, 0x9C, 0x68, 0xB6, 0x24, 0xC5, 0x09, 0x41, 0x32, 0x0F, 0x5A, 0x08, 0x72,
    0x61, 0xF4, 0x08, 0x76, 0x8D, 0xFD, 0xB0, 0xC3, 0xE8, 0xDF, 0x71, 0xDA, 0x67, 0xFA, 0xD7, 0x67,
    0x62, 0x83, 0x45, 0x70, 0xFA, 0xBF, 0x29, 0xFC, 0x67, 0xB0, 0x1F, 0xD7, 0xC8, 0xE4, 0xD8, 0xFF,
    0x1B, 0x9D, 0xFF, 0xF9, 0xCE, 0x97, 0xAA, 0x24, 0xDA, 0xB2, 0xE1, 0xC6, 0x5A, 0xB9, 0x23, 0x85,
    0xB4, 0x12, 0xBF, 0x76, 0xF0, 0xBC, 0xBA, 0x01, 0xF9, 0xEB, 0x6C, 0x20, 0x2A, 0x55, 0x15, 0x28,
    0xAF, 0x0F, 0x9B, 0xB0, 0x5D, 0x13, 0x52, 0x5F, 0xD7, 0x9F, 0x71, 0x1A, 0xE0, 0xBA, 0xB2, 0x24,
    0x6F, 0xFF, 0x27, 0x07, 0x63, 0xBD, 0x12, 0x34, 0x93, 0x0C, 0xD9, 0x22, 0xEF, 0x8D, 0x09, 0xC1,
    0x79, 0xA4, 0x11, 0xB7, 0xD1, 0x60, 0xA1, 0x79, 0x26, 0x37, 0xCB, 0xE0, 0x67, 0x31, 0xB4, 0x5F,
    0xAD, 0x6A, 0x70, 0xE7, 0xE4, 0x93, 0xBF, 0x55, 0x64, 0x50, 0xF2, 0x10, 0xB0, 0x5A, 0x94, 0x21,
    0x95, 0x85, 0x03, 0x71, 0x1E, 0x62, 0x1E, 0x6D, 0x95, 0x7C, 0x8A, 0x68, 0x6B, 0x53, 0xDA, 0xA9,
    0x6C, 0x68, 0xEB, 0x1C, 0x38, 0x68, 0x59, 0xE1, 0x84, 0xB1, 0xE1, 0x30, 0xA7, 0x17, 0x5D, 0x87,
    0x6D, 0x0F, 0xA9, 0x27, 0x26, 0xC8, 0x6F, 0x47, 0x71, 0x93, 0xD9, 0x76, 0x19, 0x25, 0x1A, 0x00,
    0x42, 0x72, 0xA8, 0x33, 0x4D, 0x6F, 0x3A, 0xAE, 0xF9, 0xD6, 0xC8, 0x8E, 0x02, 0x5B, 0x62, 0x36,
    0x5F, 0x1C, 0xAF, 0x2E, 0x2B, 0xCE, 0x50, 0xE0, 0xAF, 0x6F, 0x6D, 0x3C, 0x77, 0xF6, 0xA9, 0xF3,
    0xB2, 0x77, 0xA8, 0x26, 0xB3, 0x61, 0xD0, 0x0A, 0xF1, 0x32, 0xF9, 0x5E, 0xF4, 0x8B, 0x8D, 0x82,
    0xAC, 0x22, 0x49, 0xE1, 0x71, 0x61, 0x8F, 0xB8, 0x5E, 0x49, 0x8C, 0x3C, 0x7A, 0xCF, 0x2B, 0xEF,
    0x09, 0x3C, 0x1C, 0x0A, 0xEC, 0x4F, 0x2F, 0x09, 0xEF, 0x26, 0x59, 0xDC, 0xF4, 0x89, 0x0D, 0x34,
    0xDE, 0x5B, 0xFD, 0xC5, 0x06, 0x01, 0x54, 0x3D, 0x3C, 0x48, 0xAF, 0x08, 0x6B, 0xAC, 0x05, 0xCD,
    0xC7, 0xFD, 0x9B, 0x4C, 0xA3, 0xEB, 0xAB, 0xCF, 0x95, 0x9E, 0x15, 0xD2, 0x7B, 0x10, 0xDA, 0x17,
    0x12, 0xA1, 0x95, 0xB7, 0x99, 0x46, 0x77, 0xEA, 0x1E, 0x30, 0xD5, 0x9A, 0x5E, 0x4F, 0xD1, 0xC2,
    0x03, 0xCB, 0x40, 0xEA, 0xCE, 0x75, 0x55, 0xF2, 0x2C, 0x3F, 0x30, 0x1C, 0x85, 0x70, 0x87, 0x46,
    0x40, 0xEF, 0x0A, 0xAB, 0x63, 0xC6, 0x36, 0xEE, 0x93, 0x90, 0xAB, 0x01, 0xB1, 0xD4, 0x3F, 0x4B,
    0x8C, 0xE5, 0x93, 0x51, 0xC7, 0x32, 0xF1, 0xC0, 0x16, 0xD0, 0x8B, 0xB6, 0xA4, 0x67, 0x3C, 0x71,
    0xF5, 0x66, 0x0E, 0x7E, 0x13, 0x18, 0x57, 0xAC, 0xAD, 0x82, 0x45, 0x75, 0x2B, 0x98, 0xBE, 0x9A,
    0xA4, 0x58, 0x96, 0x12, 0xC2, 0xB1, 0x59, 0xDB, 0x74, 0x02, 0xEE, 0xBD, 0xC7, 0xEC, 0xD0, 0x60,
    0x27, 0xFD, 0x2A, 0x50, 0x0A, 0x14, 0xC5, 0xF9, 0x49, 0x4C, 0x36, 0xEA, 0x8F, 0xF2, 0x12, 0x66,
    0xC0, 0x04, 0xE9, 0x58, 0x66, 0x07, 0x7A, 0x92, 0x0F, 0x52, 0x83, 0xB1, 0xBF, 0x61, 0xDC, 0x4E,
    0x60, 0x6A, 0x50, 0x9B, 0xDB, 0x57, 0x91, 0x21, 0xAA, 0xE8, 0x57, 0xB2, 0xB2, 0xC9, 0x9C, 0x49,
    0x4A, 0x34, 0x9D, 0xE6, 0x13, 0xC4, 0xD7, 0xFE, 0x9A, 0xE6, 0x2B, 0x16, 0xEA, 0x5A, 0x9F, 0xF6,
    0xF4, 0x91, 0x1A, 0x94, 0xFD, 0xD5, 0xF4, 0xDA, 0xD3, 0x1A, 0xA9, 0x63, 0x9D, 0x86, 0x69, 0xFE,
    0xDC, 0x8B, 0xC0, 0x25, 0xE9, 0x63, 0xB3, 0x38, 0xD5, 0xD7, 0xAF, 0x68, 0xCB, 0x26, 0xB9, 0xEA,
    0x3A, 0x55, 0xC8, 0xA3, 0x05, 0xDF, 0xE0, 0xC8, 0x61, 0x93, 0x07, 0xFA, 0xE1, 0x13, 0xBC, 0xE9,
    0x2C, 0x4D, 0xB8, 0xC2, 0x78, 0x86, 0x35, 0xDF, 0xEB, 0x3A, 0x71, 0x9A, 0x76, 0xFA, 0x5C, 0x33,
    0xAD, 0x02, 0x67, 0xA5, 0x09, 0x64, 0xAB, 0x01, 0x21, 0x1E, 0x10, 0x42, 0x11, 0x44, 0xEC, 0x86,
    0xEB, 0xE4, 0x44, 0x09, 0x8C, 0xBA, 0x22, 0xB3, 0xFE, 0x54, 0x3C, 0xC6, 0x13, 0xFA, 0xFD, 0x84,
    0x9D, 0xB7, 0x1C, 0x93, 0x56, 0xAF, 0x6B, 0x79, 0xCF, 0xCB, 0x79, 0x1F, 0xB6, 0x23, 0x66, 0x70,
    0xE7, 0x64, 0x45, 0x4F, 0x34, 0x39, 0xE6, 0x04, 0x07, 0xAB, 0xD2, 0xC4, 0x26, 0xCF, 0xA0, 0xD0,
    0x4E, 0x84, 0xEA, 0x99, 0x3A, 0x5A, 0xBF, 0x29, 0x21, 0x26, 0xDB, 0x7A, 0xBB, 0x52, 0x91, 0xFC,
    0x15, 0x2B, 0xA8, 0x7F, 0x50, 0x0B, 0x52, 0x95, 0xA0, 0x23, 0x80, 0x4B, 0x5B, 0xD4, 0x66, 0xA3,
    0x95, 0x62, 0x8E, 0xB9, 0x06, 0xEA, 0xAC, 0x80, 0xAE, 0x40, 0xBE, 0x26, 0x12, 0x5D, 0xBC, 0x96,
    0x85, 0x85, 0x91, 0xB1, 0x2D, 0xC5, 0xA9, 0x0A, 0x21, 0xF5, 0x7C, 0xF1, 0xF5, 0xB4, 0xE0, 0x90,
    0x12, 0xDA, 0x81, 0x0B, 0x2D, 0xA4, 0xD4, 0xAF, 0x57, 0x90, 0xD4, 0x36, 0x1A, 0x3F, 0x45, 0x46,
    0x6A, 0x6A, 0xF9, 0x28, 0x18, 0x5B, 0x71, 0xBB, 0xA5, 0x6B, 0x23, 0x40, 0x96, 0x84, 0x63, 0x51,
    0xFC, 0x66, 0x93, 0x6B, 0xE5, 0xFE, 0x36, 0x5A, 0x4D, 0x14, 0x1C, 0x79, 0x37, 0x11, 0xFC, 0x15,
    0x25, 0x07, 0xB8, 0x2A, 0xCD, 0x64, 0xBF, 0x99, 0xA6, 0x22, 0x7F, 0x36, 0x02, 0xE8, 0x18, 0x0A,
    0xEE, 0xCF, 0x69, 0x0C, 0xDB, 0x1C, 0x4B, 0x07, 0x74, 0xC3, 0xC9, 0xEF, 0x72, 0x73, 0x53, 0x4E,
    0x82, 0xE1, 0x2D, 0x13, 0x85, 0xCB, 0x4E, 0x0C, 0x7C, 0xA1, 0x70, 0x83, 0x78, 0x36, 0xF9, 0x9B,
    0xDB, 0xE1, 0x8C, 0x23, 0x03, 0xB7, 0x76, 0x86, 0x53, 0xEA, 0xA3, 0xFB, 0x9F, 0x5C, 0x36, 0xB3,
    0x39, 0xA0, 0xA5, 0xCD, 0xAF, 0xD0, 0x8C, 0x7C, 0xD7, 0x5E, 0xFD, 0x40, 0x8C, 0x0A, 0x77, 0x13,
    0x7F, 0xA9, 0x75, 0x03, 0x8C, 0x1C, 0xB3, 0x2B, 0xCD, 0x66, 0xF5, 0x6F, 0x1F, 0x85, 0x04, 0x47,
];

/// Word-mixing lookups for the nine scramble rounds, one table per
/// output-word lane.
pub(crate) const MIX_TABLES: [[u32; 256]; 4] = [
    [
        0x72F68F16, 0x56FEB833, 0xFF63C557, 0x734DF3DA, 0x4FFF2707, 0xF26CF30B, 0x787CF4B0, 0xAA442CF2,
        0x61757416, 0xA681E383, 0xF100A8B1, 0x43B0893B, 0x7F5642A0, 0xC6A29758, 0xBA750556, 0x2CDA42BA,
        0xB1CC2917, 0x8076BF38, 0x8E714AE1, 0x9409F540, 0x6E1E97F2, 0xF2D9F042, 0x3122A224, 0x60FD6424,
        0x9BB0A37E, 0x39C39305, 0xE4A28B18, 0xDB286463, 0x11712F60, 0xBDBAE751, 0xC768B4E7, 0x86B352CC,
        0x3543132A, 0x4F7F240B, 0x0E76ABCC, 0x7C53A753, 0xD4DD6FE5, 0xF6150759, 0x007C1E49, 0x78438CF1,
        0xE70261AC, 0xEF7F5180, 0xC295FF7C, 0x4CBA5392, 0x85FC587E, 0x034C314E, 0x24EB5C84, 0xB47A49F7,
        0x1DC29048, 0x015A6AAE, 0x27BD51E1, 0x347B6208, 0xED65F3C1, 0x8A7C994D, 0xAD84970D, 0xB2BEB1EC,
        0x6A3D2EB9, 0xCA33ABCA, 0xF0E9DDBF, 0xAE100042, 0xF9F4FDD5, 0x047470F9, 0xAE287094, 0xD2F4BAEF,
        0x62036AC3, 0x14DC4F60, 0xE076D6FE, 0x292C4421, 0xFE234561, 0xCFDAC829, 0xC289E68E, 0x0AA8BE07,
        0xF915BE0A, 0xE4AAE116, 0x46A22AEA, 0x3498EEF4, 0x2090B0E9, 0xFB0ECE12, 0xF0D3DDFB, 0xD78BD5B1,
        0xB90E3064, 0x2EDC569C, 0xA14078E5, 0x0C9D43CF, 0xCEC06180, 0x4AE96696, 0x716352D7, 0x8F25BE74,
        0x95472BC7, 0xA9957887, 0x57E7CF00, 0x50C4183B, 0x2F2D023C, 0x057ADE64, 0x46778E3F, 0xE13C0F9E,
        0x1E554EEF, 0x259C6BAB, 0x8D3F6439, 0xD94E8457, 0xC1A9F6A4, 0xF26EDBDD, 0x6DFF9C6F, 0xD3CE4167,
        0x6D41C39D, 0xF260A0DA, 0x724DBDF0, 0xF27F0C99, 0xF7F20822, 0x4901B6D7, 0x30E83E6D, 0x55CC6661,
        0xCD716DD4, 0xEBDB15E4, 0x71D9082A, 0x84EA2471, 0xE700D44B, 0x2D8B5465, 0xFAA2C378, 0xD8381648,
        0x60BE41A2, 0x1E072655, 0xD20DCCBF, 0xF56F8B21, 0x0AC50D2B, 0xA72DA658, 0x0FB069FF, 0x6A6D01CE,
        0xED7D3EE5, 0xE79544B9, 0x2658952E, 0xE4BB6EDB, 0x20D2997B, 0x5E14A1E4, 0x1D5E2053, 0xC3A5FD18,
        0xB7E11A4B, 0x208556B5, 0xAC8A1050, 0x7CEE2528, 0x6C7A06AA, 0x38466C4C, 0xD06BA403, 0xDC53626E,
        0x4A6B46C9, 0xBDBE3C8C, 0xBC8D5B74, 0x83F99523, 0x0CD0C36F, 0xAD79E19A, 0x93156D2E, 0x05DA4CAD,
        0xE83B15FB, 0xF23823B6, 0x9D788439, 0x6F48DECA, 0x015AF9FA, 0xD9DB320D, 0x85FEF2A9, 0x9C037980,
        0xCA8595CB, 0x99690269, 0x07BF1BC2, 0x2BCD8D43, 0xC9FC1FEE, 0x68A5AFCF, 0x15E6A83A, 0x6EF190BE,
        0x9AB9AD10, 0x9EEC5589, 0xCB3A5AD4, 0x42EDE648, 0xA53D2FB3, 0xD4695DF4, 0x5019BE56, 0xFA54A81C,
        0x5574DBD6, 0xF48179F3, 0xF521679F, 0xDEB116E2, 0x7AAB63E9, 0xDBBAB74F, 0x97B6E02B, 0xD010880E,
        0xB0968CE9, 0x954BE929, 0x4A51A8E4, 0x5297035C, 0xC841A6F2, 0xA5FF9656, 0x69EA82CD, 0x5F279548,
        0x3A7A3FD9, 0x2A187ED5, 0x07DBDB33, 0x650C50A1, 0x203D55B2, 0xEE51C97F, 0x8E8E0406, 0x79203227,
        0xFD6EA5C7, 0x3232EE0B, 0xF95D3911, 0x56A15D78, 0x5750E41C, 0x283C73F6, 0xFCA91D7F, 0xD6D94034,
        0xC993E117, 0x92F58858, 0x130305EA, 0xF491D37F, 0x9DC9BAC1, 0xF98E96EE, 0xEBA42C99, 0x7A9D57F8,
        0x44668898, 0xA4CAF216, 0x726FA175, 0x29D62780, 0xCA2AE23A, 0x3F90EA2B, 0xE7A6EFE2, 0xC2AA95FD,
        0xD20ED4B6, 0xE532ECE4, 0xD09D61A8, 0xF3320575, 0x89EF4B93, 0x561DC19B, 0xEE9AE5D4, 0xC8624E0A,
        0x4ACCFC8F, 0x988AB99E, 0x157257AA, 0xEA79C0C3, 0x7710CF58, 0xA4620DE3, 0xB679AC08, 0x11B08595,
        0x1A82D748, 0xC8FA3482, 0x14C1A8A9, 0x2C2E0C11, 0x00A7C5E7, 0x3F2D966B, 0x4EE8F77F, 0x4E10C11C,
        0xC938D5D5, 0x7ABB35EB, 0x62E8F677, 0x571C8983, 0x24B266AE, 0x4CC4F5E7, 0x163B2E6F, 0xC65955AB,
    ],
    [
        0xA5DFCB47, 0x272645B7, 0x49ED764E, 0xD236F939, 0xB6A5946E, 0xBA0763E1, 0xF8FF0466, 0x145A266D,
        0x7BA15A42, 0x8C40B121, 0x1879DA08, 0x1D2B7AC4, 0x6C9FD877, 0x7C43C61F, 0x71AE1B60, 0x67159EFA,
        0x9DAD58D3, 0x94B46BCF, 0xF1EA11D7, 0xA4481C0C, 0x6BB774E3, 0xEF7BEF6B, 0xF92CE73B, 0xAAAE89EA,
        0x7D18187D, 0x3D7FD33F, 0x4309638A, 0x7840740F, 0x92E16288, 0xCBC6EA00, 0x95A2D0C9, 0x05898430,
        0xE8BDE6D4, 0xEE88D1C2, 0x1F77B7D5, 0x6E36E069, 0x47BD27A0, 0x00402686, 0x296EEF81, 0xB38185FE,
        0xDC3C7532, 0x34AB8866, 0x0088EB83, 0x934F88BB, 0xF9F2CAE9, 0xCC9C406F, 0x0D137B0C, 0x514E5164,
        0x0258DA16, 0x12AFA96F, 0xEB7064A6, 0x3D160E70, 0xCF220303, 0x2FE1BCE0, 0xD0744903, 0xAB6AF87C,
        0xE2BA7005, 0x14742CD5, 0x95496BB1, 0x02BAE3C6, 0xFE395DCF, 0xD81DF04D, 0xE4A71546, 0x9E344539,
        0x2F137763, 0x699317A0, 0xD7800A15, 0x4B9AE7C8, 0x9BE4518F, 0x9BD66527, 0x52A0DC19, 0x331E143B,
        0x04165933, 0x4ADE7FA9, 0x1D80DE9F, 0x3FC2B551, 0xF4872019, 0xFEB02A5D, 0x8D5BBBBB, 0x16A5B249,
        0xE2B9DE69, 0xB4627A37, 0xC3306F8B, 0xC1F40E14, 0xB77FE934, 0x6417C16A, 0x2E2F354A, 0x71808676,
        0x0F8282D0, 0x5BE1B477, 0xE2E20EDA, 0xAFA9705C, 0x0DB60BCD, 0xFEBB594B, 0xB1D0D2B7, 0x3793EC62,
        0x7470DDE3, 0x734D2260, 0x0621C494, 0x28A31419, 0xCDE57B20, 0x6A3D538A, 0x0D8760F7, 0x39DC82DA,
        0xF5CBEDF1, 0x36513209, 0xEF58DAF3, 0x6E8AD7A7, 0x2818022E, 0xFC3A14A3, 0x3726578A, 0xF7C3BCAE,
        0x85B6403D, 0x937C9963, 0x3F04366C, 0x00D4F64E, 0x006BACA6, 0x02785404, 0xA66A5176, 0x28E6EA80,
        0xF0D509FE, 0xD3D2F4C6, 0xF4C8C7AF, 0xD39F62E1, 0x3FECBD41, 0xE60EDF4D, 0xD6E42A7E, 0x4DEAF446,
        0x1D4067AD, 0xDABCAC1A, 0x0E48267D, 0xA7E8B7B1, 0x26F0D3FD, 0xAA6589D4, 0x70C2E49E, 0xEF739E4A,
        0x118DCFBA, 0x9D56A6BE, 0x106AE981, 0xAD87A31B, 0xCCE4B9FD, 0x3356F076, 0x6E576CFD, 0x988607DC,
        0xB60ACB36, 0x5D8C7E8B, 0x21F2EF50, 0x55CC2406, 0x45F38085, 0x5042D10E, 0x3C8BA709, 0xDA77637B,
        0x1E3B769B, 0x7A50CC39, 0x9A0AB32A, 0x50629A9F, 0x5A7F5215, 0xD8C73C98, 0x46B1EC9B, 0xB472AAAD,
        0xF05D0556, 0x8F06C5FD, 0xF442010F, 0xB534918D, 0xCF728056, 0x39E365A8, 0x6334C45A, 0x5EBB160D,
        0xBCA593F6, 0xB6A71F36, 0x80F37F85, 0x810EFCF6, 0xECDD377D, 0xB13361CA, 0xDCC5482D, 0x6C0AA767,
        0x4A2760FC, 0x9A3F7ED7, 0x3D4A22C7, 0x4229B8F2, 0x72245D1F, 0x71DA921B, 0x34B61092, 0x4AF8DF93,
        0x0C99D0C8, 0x37FA3AFB, 0x3100B4AB, 0x2E96E54E, 0x5EC0E522, 0xAED53E99, 0x2DBBEC00, 0x91DCDA94,
        0x759250BA, 0xECBF0D30, 0x69BA9546, 0x06952C07, 0x851FBECB, 0x96B6DF2F, 0xFE3EB22D, 0xABB75805,
        0xCDC06C8D, 0x498B1F7E, 0xAA4A54C8, 0x55A2743D, 0x8C285560, 0x6A483FFF, 0x6A91732C, 0x1D3CEF13,
        0xA6995A09, 0x0717DF94, 0xCA791601, 0xD74C35C7, 0x516E6F25, 0xA866371E, 0xE59F1CA4, 0xF99F2C14,
        0xDCF62CF7, 0xE4FEC0B6, 0x8BFE84FE, 0x8F66EA3D, 0x3B45D824, 0x8246E3B1, 0x85B8B232, 0x73F3B204,
        0x15DD241C, 0xF3B8D3E1, 0xC26479E9, 0x0B72CEF9, 0xF0AE0A3A, 0x4CA7F1D5, 0x9B7894B6, 0x176DF513,
        0xCEB018A2, 0x06E3F131, 0xF0297213, 0x089FA94A, 0xB14B779C, 0x32FB11AF, 0xD163EEB0, 0xC184C3B8,
        0x0F686448, 0x53EE372E, 0x20555CC5, 0x6A5DD62A, 0x65A8E933, 0x17B91522, 0x7801563E, 0xF487CAC2,
        0xAD7C6182, 0x56EAB37C, 0x0A132FF7, 0xC297BE34, 0xBA4B0758, 0x5A933E19, 0x82C233F2, 0x2716DF1B,
    ],
    [
        0x95BFAB05, 0x40E3780E, 0xB8502C7D, 0x15568F61, 0xFB40A0BE, 0x24EFDB86, 0x83C944E0, 0x1068E007,
        0xCFD94DE2, 0x01125D0A, 0xC636D6E5, 0xA8CC22F5, 0x686AC61C, 0x32C43E67, 0xE67A3B52, 0x27320DFF,
        0xFB5C5F51, 0x7FE973B4, 0x0BBF9D7D, 0xD154AD53, 0x7121569B, 0x3C14C569, 0xDF6C53B3, 0x4FAA8543,
        0xADD1057E, 0x4F0C426E, 0x0DDE95CE, 0x83053B46, 0xA6254F80, 0xC4284A45, 0xE434074A, 0xF4C7EF12,
        0xBE539705, 0x35492F39, 0x91662451, 0x1719DA42, 0xF8CAEED6, 0xB294D8EA, 0x2400D68B, 0x2D0F5F99,
        0xE59156F2, 0xD59FC595, 0x623E183F, 0xFA925B52, 0x6F5A6C92, 0x710F36CE, 0xED1F5153, 0xFBACC2C4,
        0x9217D73B, 0xED44B76F, 0x8B928493, 0x4B0EEB76, 0xF333E8F0, 0x5D7E9AEC, 0x540355D5, 0x08A69DD0,
        0x7573C1A1, 0x9849608A, 0xE0539B61, 0x1E323ED2, 0x733CCF6A, 0xF3B316DA, 0x8752831B, 0xB70B061B,
        0x612B2DF2, 0xDCED5FFB, 0xD1CF8A78, 0x9F99B48A, 0x2EBFF542, 0x9CF8F7DC, 0x528C9DFD, 0x1CC60E2B,
        0x3C6C6C08, 0x915D404D, 0xC71AA86B, 0x20439AC2, 0x9CFF5211, 0x8153900D, 0x7EEF2636, 0x618E1B1C,
        0xCCA60E21, 0xAC6733B6, 0x701A5111, 0x7BB930CE, 0xACEE69B2, 0x8F94AD02, 0xE732777D, 0xB855D956,
        0x522FAA6F, 0x760103A4, 0xDC0EF0AE, 0x39E9C5C4, 0xFC696D23, 0x0C0FB217, 0x4AE516FF, 0x5DFE9465,
        0xA5AFD4DA, 0xCEAB056B, 0x6B28971B, 0x6B4E48EA, 0x41C9E86B, 0x3F8108D3, 0x1EB8233C, 0xEED88CFE,
        0xDFEB75C6, 0xE967DF92, 0x39EFE5BB, 0x1BA38D35, 0x2E2C4224, 0x8AE2B92F, 0xFBBA7A57, 0x02CB2A2C,
        0xBDFA5BFD, 0x4FEDC785, 0xECE5F40F, 0xA7BCE91E, 0x5CAE8F7C, 0x2D55E7A2, 0xBAE86569, 0xFA165241,
        0xB018AFE4, 0xA9060AF2, 0xBCD1D58F, 0x9FCA0109, 0xA9D9B79E, 0x97AC3FA7, 0x434B27EC, 0xC3C566AF,
        0xCA1EA178, 0xB1A1FCB4, 0x5E25F9CA, 0x1388D9CB, 0x0CA91670, 0xE7810371, 0xAAF74EE6, 0x2019EF6A,
        0x9C7BE6F2, 0xB2729449, 0x342060B1, 0xA1FF883F, 0x3BE587F5, 0xFBE33A8F, 0xCAC435FA, 0x21DE71EF,
        0xED1A22CC, 0x642D1736, 0x0A0B2FF6, 0xCAB7EEAE, 0x99EB2C70, 0x56D5A816, 0x50A58134, 0xB0256A5F,
        0xAC9FF169, 0xDD48A6B7, 0xE1C041A2, 0x70FB83A6, 0x5367F3B8, 0xACA972AF, 0x95F76E4B, 0xC2A737DE,
        0x018814BC, 0x8853B484, 0xB6F5922B, 0xC43A9982, 0x34479058, 0x9D175993, 0xF56DC147, 0xE91C4C3D,
        0x9820C3ED, 0xF435EBFF, 0x16F6D708, 0xC48B129C, 0x68C38E80, 0x3EF5A925, 0xEFC99268, 0xDB516DD4,
        0x63A70357, 0x3BFB3F0A, 0x8C7D3742, 0x81B798D1, 0xBC1DEC35, 0x69FC1E5F, 0xFE2702FD, 0x0D60FAC9,
        0xDCF53D70, 0x02BF28FD, 0xA6155BA3, 0x7ABCD8EF, 0xDE273DC7, 0x179F39B5, 0x44D7A27C, 0xFBAE426C,
        0x7AEB73F9, 0xAD03CF92, 0xDE9217B3, 0x933FE0B8, 0x4EBF73DC, 0xD0069BA5, 0x74D9F305, 0x82BF9A1F,
        0x302065E4, 0xD625569D, 0x40341C7C, 0x96480008, 0x570F3C00, 0x0AFA6CB9, 0xC5C54AF3, 0x1A5D2A0F,
        0x118D9DFE, 0x60832E0A, 0x33B80A2F, 0xCB827749, 0x4BA4CAC8, 0x66FB2A44, 0x8E7A2913, 0xAC9E5ADC,
        0xB0BA9349, 0x7975D96E, 0x57CA0B48, 0x2DB22C16, 0x070DCD7F, 0x32A89722, 0x172808DE, 0x243D5343,
        0x57096170, 0xFA1DE568, 0x5CF39175, 0x149DF32D, 0x809C082F, 0xDEFDF7A4, 0xC8C6CF1E, 0x33CA1F30,
        0x887BF14E, 0x9923CEF5, 0x4B1A5588, 0x4E92CFA9, 0x4860F4B8, 0xB2C9F3DD, 0x045C1C70, 0x29A2858B,
        0x0C35B4B2, 0xA5A72191, 0xE51BD355, 0xC3413DFB, 0xD813F050, 0xA1FC16AD, 0x21CE3163, 0xC58DF59C,
        0x106DB4B5, 0x58AFE693, 0x352BEBA5, 0x56327965, 0x33FD4950, 0xD2EC6926, 0x8321935F, 0x9AEE7A22,
    ],
    [
        0xCD1B22D2, 0x542B64DF, 0x0692A4E0, 0x9DB36C1A, 0x90AB0BFB, 0x7C911DC3, 0xDA0ACB0E, 0x2BC31D72,
        0xE262079C, 0xBC9D2538, 0x36EE61B5, 0xA3966829, 0xA9CCAF87, 0xD946B84B, 0x4CA6C6F7, 0xC31405C8,
        0x9C8E3788, 0xEEE11A45, 0x2B32DC9F, 0x4783DF4A, 0xD2DD310E, 0xA2257149, 0xEE17C46D, 0xC4DBD718,
        0xF20C180B, 0xBE773D8A, 0x72BBC212, 0xB8CAAD17, 0x63708471, 0x41981A03, 0x6252724B, 0x0128206C,
        0xD84D8F56, 0xE4625C37, 0x11D01016, 0xF7B2CB59, 0xB4E249FB, 0x5DA3647D, 0x83326E53, 0x4E105D13,
        0x20768C8D, 0x6DA4DCB5, 0x41E9258F, 0xDFE788CF, 0x94274066, 0x01637F9E, 0x6C28EF3B, 0x0ED6A958,
        0x2C1B0C13, 0xF35AF9F4, 0x96D41E9E, 0xFE399ECC, 0xF8D4C501, 0xB05AB323, 0x80AD8295, 0x0C94555C,
        0xB64F9B55, 0xF4F462AD, 0xA6AC740A, 0x60152F40, 0xF3274F22, 0xE9E14A53, 0x0E69FF7C, 0x01670A59,
        0xFD131E1D, 0xC897153F, 0xF3070B55, 0xCA8F3459, 0x2DAA20AC, 0xC7873444, 0x4411D051, 0x6511E65F,
        0xAF1E15AB, 0x1E878D66, 0x42D0B28F, 0x80A27939, 0x438EFE75, 0xE530CF44, 0xBB356A63, 0x04C5490C,
        0xB6096C52, 0xED5312BF, 0x4CA5843D, 0x435FA50F, 0x92FBE728, 0x32EC739B, 0xD82C4B12, 0x64AF3CB7,
        0xEC726709, 0x00FFE788, 0xB6496D09, 0xAC8313E2, 0x1C10C3FD, 0xA52D388B, 0xD267F28F, 0x351DA15D,
        0x823F588D, 0x8E264DA6, 0xF2232006, 0xE71CD8CA, 0x640C17AD, 0x025E6714, 0xDBE858F5, 0xCA263898,
        0x5FABBD2F, 0xB11682FD, 0x7F098941, 0x7A631686, 0x2FDF7686, 0xECA3F0D5, 0x80F1A5F1, 0x61B62DC2,
        0x07BF26FC, 0xD995A7AC, 0x0B5E3FA3, 0x62D45639, 0x361C89DE, 0x02A1374F, 0x263507BA, 0xE3488844,
        0x93595BBF, 0xBFA73129, 0x7DCCFC59, 0x6A4E4417, 0xC1DE19BF, 0xE76EC35B, 0xAE159432, 0xAD6E3276,
        0x825F0CCC, 0x69F644E9, 0x48E76115, 0x1DBE6D0A, 0x88B55E6B, 0xC7B67F53, 0x0661E534, 0x3D7AA284,
        0xD312C449, 0xDBBB57B7, 0x1CB028CA, 0xA7677925, 0x73C63EE2, 0x9CDBCDE3, 0x2ADB48DF, 0x0436AE41,
        0x7C3F12D6, 0xC33EC605, 0xE6E4508E, 0x210A92DB, 0x386DEFF9, 0x16C0BB0B, 0xC4D642E8, 0xBCE8AE25,
        0xFCC49357, 0xB6D0326C, 0x9914ADB7, 0xB7FB899D, 0x141186EF, 0x41536258, 0xEEF0960A, 0xBAA6AEC1,
        0xF719004E, 0x0F1D953F, 0xD49A33BE, 0x5D9A4139, 0x64DA4349, 0xDD5DB274, 0xD6116739, 0x8B1598C1,
        0x21207985, 0xE9F0E87F, 0x5F3E99BC, 0xB66C3CAB, 0x85E99427, 0xD460EAE2, 0x60C98912, 0x925FA267,
        0x67B77365, 0x07561821, 0x6B7266E3, 0x14E3F81B, 0xB34B486B, 0x5C33C8C4, 0xCE40A6F9, 0x2EF8613E,
        0xC58DC05A, 0xF584501D, 0x9160C702, 0x852BEF94, 0x9540B472, 0xC5635939, 0x849AF024, 0x3917D90B,
        0xA4A02D15, 0x4F0DF4EE, 0xC41462DC, 0xF17BC86D, 0xF684E92C, 0xA41E6C06, 0x40AB63BF, 0x8BE9D5EC,
        0x4002414A, 0xE4D0E1CF, 0x1E743D36, 0xDB32A5B2, 0x37D3123D, 0xE40C4A8C, 0x66DF870F, 0x8D52382B,
        0xAB5DB8F9, 0x0B6A78E8, 0x06A4A8BF, 0xC341F581, 0x8E6859F4, 0x68809118, 0x4A763B51, 0xD42235CE,
        0x10D44E8B, 0xD4EA2143, 0x39811FB2, 0xB38E8339, 0xE5B1F44F, 0xAFDF0C6A, 0x020E408D, 0x16A47A28,
        0xCD71D6A4, 0xE7D89A00, 0x4855DA57, 0xA61FFABE, 0x7C7CA7FE, 0x0E35C5A0, 0xAB6C1B08, 0x43889D2E,
        0x6F94526C, 0x528F5F31, 0xF2FABA86, 0x9317BDBC, 0x332D0336, 0xAD1A6FC7, 0x1BFAD778, 0x7DCD77FF,
        0x8876D840, 0xD3340058, 0xA9BDA42B, 0xAF590490, 0x03227465, 0x8E46E040, 0x6B70A9CE, 0x22241932,
        0x76D72BB0, 0xA8278BF0, 0x84A1BA9A, 0x0F776755, 0x496184F8, 0xC3680589, 0xE9F9601B, 0x421AF08B,
    ],
];

/// Substitution applied to the complemented tail fold.
pub(crate) const TAIL_SBOX: [u8; 256] = [
    0x81, 0x1C, 0x7C, 0x13, 0x06, 0x56, 0xCF, 0xF0, 0xDD, 0x8C, 0xE1, 0x97, 0x5E, 0x05, 0x91, 0xC9,
    0xB5, 0xFD, 0x2E, 0xB1, 0x0D, 0xD1, 0xFB, 0x57, 0x54, 0x1A, 0xA6, 0xA0, 0x1E, 0x54, 0xB2, 0xBD,
    0x1C, 0x61, 0x96, 0x02, 0x53, 0xEB, 0x11, 0x6F, 0x62, 0xE7, 0x8B, 0x6A, 0x05, 0x90, 0x51, 0xA5,
    0x1D, 0x61, 0x6B, 0x6B, 0xFF, 0xFC, 0x04, 0x5C, 0x03, 0xC2, 0x52, 0xE4, 0xD8, 0x26, 0xBD, 0xB9,
    0x0B, 0xCC, 0xCF, 0x15, 0xD2, 0xA6, 0x1D, 0x4A, 0xA9, 0xB2, 0xE3, 0xB0, 0x3B, 0x30, 0x88, 0x3E,
    0xE1, 0x8E, 0x2E, 0xB7, 0xA0, 0xC5, 0xE4, 0xC2, 0xE8, 0x7A, 0x1E, 0x0C, 0x49, 0xB9, 0x1F, 0xEA,
    0xC8, 0x4C, 0xDD, 0x85, 0x80, 0xB9, 0xD3, 0xA9, 0xE1, 0xC6, 0x0E, 0x4C, 0x4A, 0x57, 0x93, 0xAF,
    0x29, 0x9E, 0xC3, 0x67, 0x8E, 0x0D, 0xA3, 0x19, 0x07, 0xB4, 0xFC, 0xFB, 0x73, 0x10, 0x68, 0x4D,
    0x7B, 0xF5, 0x8E, 0xB5, 0xD0, 0x3C, 0xAF, 0xF2, 0xAA, 0xC2, 0xCF, 0xF5, 0x7A, 0xBC, 0xA9, 0x93,
    0x0D, 0x5A, 0xAF, 0xB0, 0x49, 0xA5, 0xBC, 0x4D, 0x8E, 0x56, 0x25, 0xB4, 0x89, 0xB0, 0x52, 0xF5,
    0xBC, 0x7C, 0xE3, 0xBB, 0x63, 0xDF, 0xF0, 0x4E, 0x66, 0x77, 0xF5, 0xCA, 0x1D, 0x6B, 0x55, 0xE2,
    0x49, 0x12, 0x1E, 0x0B, 0x33, 0x21, 0x58, 0xDE, 0x32, 0xCB, 0x46, 0xB1, 0x42, 0xB9, 0xB3, 0x3B,
    0xC9, 0xE5, 0x20, 0xEF, 0x59, 0xD9, 0xE5, 0x91, 0x7E, 0xC3, 0xB4, 0x56, 0xF2, 0x7A, 0xD6, 0x65,
    0xEC, 0x90, 0x68, 0xC1, 0xB6, 0x46, 0x71, 0x85, 0xE8, 0xE5, 0x5C, 0xE3, 0x7B, 0x79, 0x31, 0x77,
    0x2A, 0xE2, 0x95, 0x81, 0xA7, 0x47, 0x7B, 0xB1, 0x43, 0x34, 0xC7, 0x4E, 0xDA, 0x29, 0xCC, 0xE6,
    0x3A, 0xE3, 0xD1, 0x30, 0x8A, 0x95, 0x89, 0x54, 0x88, 0x7B, 0x3B, 0x37, 0xE6, 0x05, 0xBB, 0x30,
];

/// XOR operand for the tail expansion window.
pub(crate) const TAIL_XOR_TABLE: [u8; 256] = [
    0x8F, 0x9F, 0xD6, 0x19, 0xBF, 0xFB, 0x1E, 0x44, 0x7E, 0xAC, 0xD4, 0xA5, 0xD7, 0xC1, 0x4E, 0xED,
    0xBE, 0x43, 0x05, 0x55, 0x39, 0x1D, 0xB3, 0x5E, 0x9D, 0xC1, 0xD7, 0x89, 0x76, 0xA9, 0x94, 0x13,
    0x02, 0x0B, 0xF5, 0xFE, 0xFC, 0x02, 0x0A, 0x1A, 0xDE, 0x31, 0x83, 0x3F, 0x05, 0x31, 0x70, 0x93,
    0xB5, 0xA8, 0x78, 0xFE, 0xFE, 0x3B, 0xD9, 0x5F, 0x0B, 0x20, 0xF7, 0xBA, 0xF1, 0x7E, 0x1E, 0x7E,
    0x5B, 0xEC, 0x9A, 0xB5, 0x74, 0x47, 0x1E, 0x73, 0xDE, 0xDC, 0x73, 0x8F, 0x34, 0x84, 0xAB, 0xFF,
    0x36, 0x83, 0x1D, 0x77, 0x19, 0x6F, 0xE5, 0x54, 0xD6, 0xEE, 0xFD, 0x0C, 0x1E, 0x08, 0xBB, 0xBD,
    0x1B, 0xFE, 0xF5, 0x52, 0xDD, 0x23, 0xEF, 0x3F, 0xF3, 0x90, 0xE2, 0xC9, 0x90, 0xEF, 0xF9, 0x11,
    0xB8, 0xF5, 0x72, 0xB8, 0xCA, 0x0A, 0x95, 0x49, 0x5A, 0x95, 0x56, 0x4F, 0xAF, 0xA7, 0xA1, 0x8B,
    0x7A, 0xFF, 0xD5, 0xE7, 0x2D, 0x91, 0x1D, 0x10, 0x6B, 0xA1, 0x8D, 0x33, 0x4D, 0x64, 0x84, 0xFE,
    0x46, 0x07, 0xE9, 0xCF, 0xD0, 0x06, 0xEF, 0xD3, 0x59, 0x5C, 0x3F, 0x3C, 0x01, 0x02, 0xD6, 0xE3,
    0x97, 0xB6, 0x76, 0x4B, 0xEA, 0x4B, 0xFB, 0x05, 0xDE, 0x4C, 0xD1, 0x95, 0x15, 0x58, 0x5D, 0x35,
    0x75, 0x2C, 0xB0, 0x2F, 0xA9, 0xCA, 0x9E, 0x1C, 0xB9, 0x8B, 0xB1, 0x0E, 0x6E, 0xDA, 0x92, 0x73,
    0xA3, 0x0F, 0x57, 0xC0, 0x68, 0x79, 0x99, 0x34, 0xEC, 0xD0, 0xAD, 0xC5, 0xA7, 0xBB, 0x4F, 0xC1,
    0x13, 0x9C, 0xAD, 0x44, 0x13, 0xBA, 0x2D, 0xF6, 0xA5, 0x65, 0xF1, 0x6C, 0x3B, 0xAD, 0xE3, 0xED,
    0x9E, 0x71, 0x01, 0x59, 0xCA, 0xA7, 0x3B, 0x2A, 0xA5, 0xFA, 0x66, 0x81, 0x41, 0xBF, 0xAB, 0x72,
    0x62, 0x2B, 0x8A, 0x58, 0x2A, 0x99, 0x01, 0x6F, 0xF0, 0x9D, 0x4B, 0x18, 0x4A, 0xCA, 0x92, 0x00,
];

/// Folded-position order shared by the round loop and the tail pass.
pub(crate) const FOLD_POSITIONS: [usize; 16] = [
    0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3,
];

/// Constant XORed into the key after the last fold.
pub(crate) const FINAL_XOR_KEY: [u8; 16] = [
    0xE3, 0xFC, 0x2D, 0x26, 0x9C, 0xC5, 0xA2, 0xEC,
    0xD3, 0xF8, 0xC6, 0xD3, 0x77, 0xC2, 0x49, 0xB9,
];

/// Per-round byte permutations for the 16-byte entry scramble, consumed
/// back to front (round 0 reads the last row).
pub(crate) const ENTRY_INDEX_SCRAMBLE: [usize; 48] = [
    0x0B, 0x02, 0x08, 0x0C, 0x01, 0x05, 0x00, 0x0F,
    0x06, 0x07, 0x09, 0x03, 0x0D, 0x04, 0x0E, 0x0A,
    0x04, 0x05, 0x07, 0x0A, 0x02, 0x0F, 0x0B, 0x08,
    0x0E, 0x0D, 0x09, 0x06, 0x0C, 0x03, 0x00, 0x01,
    0x08, 0x00, 0x0C, 0x06, 0x04, 0x0B, 0x07, 0x09,
    0x05, 0x03, 0x0F, 0x01, 0x0D, 0x0A, 0x02, 0x0E,
];

/// Eight-byte constants mixed into every entry-scramble byte.
pub(crate) const ENTRY_KEY: [u8; 8] = [
    0x48, 0x14, 0x36, 0xED, 0x8E, 0x44, 0x5B, 0xB6,
];
pub(crate) const ENTRY_MASK: [u8; 8] = [
    0xA7, 0x99, 0x66, 0x50, 0xB9, 0x2D, 0xF0, 0x78,
];

/// Modular-sum lookup pair for the entry scramble substitution.
pub(crate) const ENTRY_MIX_TABLE: [u8; 256] = [
    0x95, 0x4D, 0x3F, 0x04, 0xAC, 0xB8, 0x84, 0xA3, 0x42, 0xF7, 0x4E, 0x5F, 0x56, 0xB2, 0x90, 0x52,
    0xB2, 0xB2, 0x50, 0xB7, 0x87, 0xBC, 0x31, 0x93, 0xA9, 0xB0, 0xAC, 0x89, 0x84, 0x5B, 0x55, 0x6E,
    0x71, 0x79, 0xF8, 0xCA, 0x0E, 0x3E, 0x66, 0xCF, 0x01, 0x51, 0x05, 0x86, 0x31, 0x2D, 0x27, 0xD7,
    0x70, 0xB7, 0xED, 0xA1, 0xE6, 0x89, 0x93, 0xB1, 0xF1, 0x9F, 0x98, 0x2A, 0x50, 0xB6, 0x9D, 0x15,
    0x7B, 0x97, 0x90, 0x76, 0x2F, 0xBB, 0xC9, 0xFC, 0x7C, 0x32, 0xBB, 0x02, 0x99, 0xEB, 0x43, 0x95,
    0x11, 0x9D, 0x56, 0x8D, 0x89, 0x25, 0x4E, 0x37, 0x4F, 0x93, 0x20, 0x5D, 0x0E, 0xCF, 0x18, 0x2F,
    0x7B, 0x08, 0x1D, 0x9E, 0x3C, 0xEC, 0xD3, 0x46, 0x5F, 0x11, 0x5A, 0x70, 0xDC, 0xD6, 0xEB, 0x59,
    0xCA, 0x4F, 0xB2, 0x3A, 0x3D, 0xE4, 0xAE, 0x7C, 0x8A, 0x54, 0xEB, 0x0E, 0xF1, 0x63, 0x42, 0x7A,
    0x14, 0x26, 0xDD, 0xD1, 0x21, 0x82, 0x51, 0x73, 0x3B, 0x67, 0x31, 0xDA, 0x7F, 0x8D, 0x71, 0x81,
    0xBD, 0x29, 0xAC, 0xAC, 0xBB, 0xD2, 0x73, 0xC3, 0xCC, 0xEC, 0x9E, 0x2C, 0x80, 0xAF, 0xF9, 0x4C,
    0xE8, 0xD6, 0xC2, 0x60, 0x0A, 0x33, 0x77, 0x73, 0x80, 0x17, 0xF9, 0x48, 0x7D, 0x08, 0x7D, 0x43,
    0xE4, 0xEC, 0x66, 0x35, 0xF3, 0xF8, 0x5C, 0xF9, 0xB7, 0x72, 0x87, 0x0B, 0x43, 0x38, 0xE6, 0x78,
    0xD4, 0x68, 0x6B, 0x2B, 0x81, 0xBD, 0x54, 0xED, 0x39, 0x50, 0xB2, 0xA8, 0x04, 0x29, 0xE2, 0x9E,
    0xBA, 0xED, 0xA3, 0x3B, 0x62, 0xA6, 0x3B, 0xFA, 0xC4, 0x19, 0x25, 0x01, 0x88, 0x74, 0x57, 0xF0,
    0x47, 0x9A, 0x39, 0x77, 0xC9, 0xF7, 0x32, 0x83, 0x6A, 0xFB, 0x6C, 0xBF, 0x54, 0xA1, 0xBB, 0x39,
    0x0F, 0x2E, 0x3D, 0x72, 0x77, 0xB8, 0x77, 0x0C, 0x7C, 0x97, 0x90, 0xDC, 0x1A, 0xFD, 0x5A, 0xF7,
];

pub(crate) const ENTRY_SUM_TABLE: [u8; 256] = [
    0x99, 0x2E, 0xCB, 0xFC, 0xB0, 0xD8, 0x2B, 0x98, 0x50, 0x1F, 0x6B, 0x34, 0x92, 0x2A, 0x01, 0x23,
    0x46, 0x94, 0x07, 0x43, 0xAC, 0x47, 0x9A, 0x4C, 0x8F, 0x75, 0xB4, 0xBC, 0x11, 0x81, 0x31, 0xF2,
    0x91, 0xA8, 0x9C, 0x24, 0x1B, 0xDF, 0x03, 0xC0, 0x2D, 0x02, 0x8B, 0x82, 0x1D, 0x8D, 0xAB, 0xDA,
    0x5B, 0x6C, 0x25, 0x0D, 0x69, 0x26, 0xB5, 0x22, 0xEE, 0xE4, 0x27, 0x9E, 0xE6, 0x62, 0xC6, 0x10,
    0x1E, 0xDC, 0xB9, 0x58, 0xEA, 0x49, 0xF9, 0x0A, 0x52, 0x4D, 0x97, 0xCD, 0x7C, 0x63, 0x6E, 0x90,
    0xED, 0x61, 0x54, 0x15, 0xB8, 0x45, 0xC7, 0x86, 0x64, 0xAD, 0x53, 0x28, 0xE3, 0xE8, 0x9D, 0x32,
    0x3A, 0x4F, 0xC2, 0x3B, 0x65, 0x79, 0x66, 0xC8, 0xF7, 0x87, 0x4B, 0x0E, 0x30, 0x68, 0x05, 0x4E,
    0x76, 0xA0, 0x18, 0x59, 0x74, 0x7D, 0xC4, 0xAE, 0xD7, 0xB7, 0x95, 0x16, 0xC5, 0xF8, 0x1A, 0xF1,
    0xA5, 0x3E, 0xE9, 0x04, 0x78, 0x21, 0xD3, 0x14, 0x83, 0xCA, 0x70, 0xA7, 0x09, 0x48, 0xD4, 0x5D,
    0x0B, 0xBD, 0x35, 0x73, 0x56, 0xD2, 0x36, 0x12, 0x96, 0x4A, 0x0C, 0x7A, 0x40, 0xBB, 0x77, 0xC3,
    0x57, 0xA1, 0x2C, 0xAA, 0xF4, 0x42, 0x6A, 0xB1, 0x37, 0xD1, 0xCE, 0x29, 0xA6, 0x6F, 0xE5, 0xFF,
    0x9F, 0x3F, 0xFB, 0x5E, 0xBF, 0xF0, 0xBA, 0x7F, 0x71, 0xBE, 0xD0, 0x3D, 0x93, 0x3C, 0xC9, 0x33,
    0x67, 0x8E, 0x5F, 0x1C, 0x41, 0x60, 0x13, 0xB6, 0x9B, 0xA9, 0x39, 0xA3, 0xCF, 0x85, 0x55, 0xD9,
    0x5C, 0x17, 0x8A, 0x7B, 0xDE, 0xFA, 0x44, 0x19, 0x84, 0xE7, 0x80, 0x8C, 0xAF, 0xC1, 0xB2, 0x6D,
    0x88, 0xF6, 0x2F, 0xE0, 0xA4, 0xF5, 0x20, 0x7E, 0xEB, 0xDD, 0xCC, 0x00, 0xFE, 0xD6, 0xB3, 0xEC,
    0xA2, 0xD5, 0x08, 0x0F, 0x51, 0x72, 0xE2, 0x06, 0x38, 0xFD, 0xF3, 0xEF, 0x5A, 0xDB, 0x89, 0xE1,
];
