//! Shared integration testing tools
use std::{fs, path::PathBuf};

/// A path under the system temp dir that is removed on drop.
pub struct Scratch(pub PathBuf);

impl Scratch {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "fixturegen-{}-{}.bin",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        Scratch(path)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// Split a fixture into its header and its records.
pub fn decode(bytes: &[u8]) -> (u32, Vec<u32>) {
    assert!(bytes.len() >= 4, "fixture too short: {} bytes", bytes.len());
    assert_eq!(bytes.len() % 4, 0, "fixture is not made of 32-bit words");

    let mut words = bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    let header = words.next().unwrap();
    (header, words.collect())
}
