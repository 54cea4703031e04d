pub fn xor_encrypt(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (byte, key_byte) in data.iter_mut().zip(key.iter().cycle()) {
        *byte ^= key_byte;
    }
}

#[cfg(test)]
mod tests {
    use super::xor_encrypt;

    #[test]
    fn repeating_key() {
        let mut data = [0x01, 0x02, 0x03, 0x04, 0x05];
        xor_encrypt(&mut data, &[0x42, 0x43, 0x44]);
        assert_eq!(data, [0x43, 0x41, 0x47, 0x46, 0x46]);
    }

    #[test]
    fn involution() {
        let mut data = *b"Hello world";
        xor_encrypt(&mut data, b"key");
        assert_ne!(&data, b"Hello world");
        xor_encrypt(&mut data, b"key");
        assert_eq!(&data, b"Hello world");
    }

    #[test]
    fn empty_key() {
        let mut data = [0x01, 0x02];
        xor_encrypt(&mut data, &[]);
        assert_eq!(data, [0x01, 0x02]);
    }
}
