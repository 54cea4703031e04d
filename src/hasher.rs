use sha2::{Digest, Sha256};

pub fn sha256(buffer: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&Sha256::digest(buffer));
    hash
}

#[cfg(test)]
mod tests {
    use crate::hex;

    #[test]
    fn sha256() {
        assert_eq!(
            hex::encode(super::sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex::encode(super::sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
