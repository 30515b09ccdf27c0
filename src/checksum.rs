use sha2::{Digest, Sha256};
use std::{
    fs::File,
    io,
    path::Path,
};

pub struct Checksum {
    value: String,
}

impl Checksum {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn create(mut file: &File) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let _ = io::copy(&mut file, &mut hasher)?;
        let hash = hasher.finalize();

        let encoded = hex::encode(hash);

        Ok(Checksum { value: encoded })
    }

    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Checksum::create(&file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn should_create_checksum() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("checksum")?;

        let file_path = dir.path().join("test.txt");
        File::create(&file_path)?.write_all(b"Hello, world!")?;

        let file = File::open(&file_path)?;
        let checksum = Checksum::create(&file)?;

        assert_eq!(
            checksum.value(),
            "315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3"
        );

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_fail_for_a_missing_file() {
        assert!(Checksum::from_path("does/not/exist.tar.gz").is_err());
    }
}
