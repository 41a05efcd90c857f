//! Content hashing for bundled resources
//!
//! Every bundled resource is identified by the SHA-512 digest of its bytes,
//! hex encoded in lowercase. Digests are compared as opaque strings.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha512};

/// Compute the digest of an in-memory byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the digest of everything `reader` yields.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha512::new();

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the digest of a file's contents.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    hash_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HELLO_WORLD_SHA512: &str = "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f";

    #[test]
    fn test_hash_bytes() {
        assert_eq!(hash_bytes(b"hello world"), HELLO_WORLD_SHA512);
    }

    #[test]
    fn test_hash_bytes_empty_input() {
        assert_eq!(
            hash_bytes(b""),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_hash_reader_matches_hash_bytes() {
        let digest = hash_reader(&b"hello world"[..]).unwrap();
        assert_eq!(digest, HELLO_WORLD_SHA512);
    }

    #[test]
    fn test_hash_reader_input_larger_than_buffer() {
        let data = vec![0xabu8; 8192 * 3 + 17];
        let streamed = hash_reader(&data[..]).unwrap();
        assert_eq!(streamed, hash_bytes(&data));
    }

    #[test]
    fn test_hash_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();

        let digest = hash_file(file.path()).unwrap();
        assert_eq!(digest, HELLO_WORLD_SHA512);
    }

    #[test]
    fn test_hash_file_missing() {
        assert!(hash_file(Path::new("/nonexistent/file")).is_err());
    }

    #[test]
    fn test_different_content_different_digest() {
        assert_ne!(hash_bytes(b"a"), hash_bytes(b"b"));
    }
}
