const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
        assert_eq!(super::encode([0x00, 0x0f, 0xf0, 0xff]), "000ff0ff");
        assert_eq!(super::encode(b""), "");
    }
}
