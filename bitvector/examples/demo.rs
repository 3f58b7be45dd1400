//! Walks through construction, logic, shifting, field arithmetic and block reads.
//!
//! Run with `cargo run --example demo`.

use std::io::Cursor;

use bitvector::{BitCursor, BitVector, Result};

fn main() -> Result<()> {
    let empty = BitVector::zeros(0);
    let pair = BitVector::zeros(2);
    println!("empty + 00 = {}", &empty + &pair);

    let from_bits = BitVector::from_bits([1, 0, 0, 1])?;
    let from_int = BitVector::from_int_with_size(5678, 16)?;
    let from_reader = BitVector::from_reader(&mut Cursor::new("111100001111"))?;
    println!("{from_bits} {from_int} {from_reader}");
    println!("5678 reads back as {}", from_int.int_value()?);

    let left: BitVector = "00110011".parse()?;
    let right = BitVector::from_bits([0, 0, 1, 1, 0, 0, 1, 1])?;
    println!("equal: {}, ordered: {}", left == right, from_int > left);

    let joined = &BitVector::from_bits([1, 0, 0, 1])? + &BitVector::from_bits([1, 1, 0, 1])?;
    let widened = &joined + &BitVector::zeros(3);
    let inverted = !&widened;
    println!("{widened} | {inverted} = {}", &widened | &inverted);

    let mut rotating: BitVector = "10010000".parse()?;
    rotating.rotate_left(3).rotate_right(1);
    println!("rotated: {rotating}");

    let permuted = BitVector::from_bits([1, 0, 0, 1, 1, 0, 1])?.permute(&[6, 2, 0, 1])?;
    println!("permuted: {permuted}");

    let modulus: BitVector = "100011011".parse()?;
    let element: BitVector = "00110011".parse()?;
    if let Some(inverse) = element.gf_mi(&modulus, 8)? {
        println!("inverse of {element} in GF(2^8): {inverse}");
        println!("check: {}", element.gf_multiply_modular(&inverse, &modulus, 8)?);
    }

    let mut packed = Vec::new();
    BitVector::from_text("Hello World")?.write_to_file(&mut packed)?;
    let mut cursor = BitCursor::new(Cursor::new(packed));
    while cursor.more_to_read() {
        let block = cursor.read_bits_from_file(64)?;
        println!("block of {} bits: {:?}", block.len(), block.get_bitvector_in_ascii()?);
    }
    cursor.close()?;

    Ok(())
}
