//! # Standard Vector Tests
//!
//! FIPS 180-4 / NIST example vectors, plus lengths that sit on either side
//! of the padding boundaries. Expected values were produced independently
//! by a reference SHA-384 implementation.
//!
//! Every vector is checked three ways: one-shot, streamed in 7-byte pieces,
//! and through a context that has already been used and finalized once.

use sha384_core::{hash, hash_to_base64, hash_to_hex, Sha384};

fn streamed_hex(data: &[u8], piece: usize) -> String {
    let mut ctx = Sha384::new();
    for chunk in data.chunks(piece) {
        ctx.update(chunk).expect("in-range input");
    }
    ctx.finalize().to_hex()
}

fn reused_hex(data: &[u8]) -> String {
    let mut ctx = Sha384::new();
    ctx.update(b"warm-up message that is thrown away").unwrap();
    let _ = ctx.finalize();
    ctx.update(data).unwrap();
    ctx.finalize().to_hex()
}

fn check(data: &[u8], expected_hex: &str) {
    assert_eq!(hash_to_hex(data).unwrap(), expected_hex, "one-shot");
    assert_eq!(streamed_hex(data, 7), expected_hex, "streamed");
    assert_eq!(reused_hex(data), expected_hex, "reused context");
}

// ---------------------------------------------------------------------------
// NIST examples
// ---------------------------------------------------------------------------

#[test]
fn empty_string() {
    check(
        b"",
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b",
    );
}

#[test]
fn abc() {
    check(
        b"abc",
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7",
    );
}

#[test]
fn two_block_448_bit_message() {
    check(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6\
         b0455a8520bc4e6f5fe95b1fe3c8452b",
    );
}

#[test]
fn two_block_896_bit_message() {
    check(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
         fcc7c71a557e2db966c3e9fa91746039",
    );
}

#[test]
fn quick_brown_fox() {
    check(
        b"The quick brown fox jumps over the lazy dog",
        "ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a50\
         9cb1e5dc1e85a941bbee3d7f2afbc9b1",
    );
}

#[test]
fn one_million_a() {
    let data = vec![b'a'; 1_000_000];
    let expected = "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b\
                    07b8b3dc38ecc4ebae97ddd87f3d8985";
    assert_eq!(hash_to_hex(&data).unwrap(), expected);
    // 8 KiB chunks, the size a file reader typically uses.
    assert_eq!(streamed_hex(&data, 8192), expected);
}

// ---------------------------------------------------------------------------
// Padding boundaries
// ---------------------------------------------------------------------------

#[test]
fn remainder_111_single_padding_block() {
    check(
        &[b'a'; 111],
        "3c37955051cb5c3026f94d551d5b5e2ac38d572ae4e07172085fed81f8466b8f\
         90dc23a8ffcdea0b8d8e58e8fdacc80a",
    );
}

#[test]
fn remainder_112_spills_into_extra_block() {
    check(
        &[b'a'; 112],
        "187d4e07cb306103c69967bf544d0dfbe9042577599c73c330abc0cb64c61236\
         d5ed565ee19119d8c31779a38f791fcd",
    );
}

#[test]
fn one_byte_short_of_a_block() {
    check(
        &[b'a'; 127],
        "9bd06b1763c2cf7aef40e795dc65bc96d59c41b537f3ad72ebdefd485476b571\
         7c1aeb37c327fe9c1831b12b9efd08ae",
    );
}

#[test]
fn exactly_one_block() {
    check(
        &[b'a'; 128],
        "edb12730a366098b3b2beac75a3bef1b0969b15c48e2163c23d96994f8d1bef7\
         60c7e27f3c464d3829f56c0d53808b0b",
    );
}

#[test]
fn one_block_plus_111() {
    check(
        &[b'a'; 239],
        "e247c35f4bc1aa38026f8880c8c97305545d00d3f859e00c57d1c1f0a176b3c6\
         b749c4eb081f08bd0fba500969cd056a",
    );
}

#[test]
fn one_block_plus_112() {
    check(
        &[b'a'; 240],
        "4d86957beab348a29180f02d02564ac1d32f5b4c217ece2b038f7c184f0cafc8\
         c8e438eb82aa03796170e0a7ce8c0675",
    );
}

// ---------------------------------------------------------------------------
// Encodings of known digests
// ---------------------------------------------------------------------------

#[test]
fn base64_of_standard_vectors() {
    assert_eq!(
        hash_to_base64(b"").unwrap(),
        "OLBgp1GsljhM2TJ+sbHjaiH9txEUvgdDTAzHv2P24donTt6/529l+9Ua0vFImLlb"
    );
    assert_eq!(
        hash_to_base64(b"abc").unwrap(),
        "ywB1P0WjXou1oD1pmsZQBycsMqsO3tFjGotgWkP/W+2AhgcroefMI1i67KE0yCWn"
    );
}

#[test]
fn independent_contexts_on_separate_threads() {
    let inputs: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 1000 + i as usize * 37]).collect();
    let expected: Vec<_> = inputs.iter().map(|d| hash(d).unwrap()).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|data| {
            std::thread::spawn(move || {
                let mut ctx = Sha384::new();
                for chunk in data.chunks(100) {
                    ctx.update(chunk).unwrap();
                }
                ctx.finalize()
            })
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
