use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::confirm::ConfirmedAddress;

/// Session address, plain text.
const ADDRESS_FILE: &str = "user_address";
/// Last confirmed-address record, JSON.
const RECORD_FILE: &str = "address_data.json";

/// Key-value persistence for the session address. Injected so the
/// onboarding flow can be exercised without touching a real profile.
pub trait AddressStore {
    /// Stored session address; `None` when absent or blank.
    fn get(&self) -> io::Result<Option<String>>;
    fn set(&mut self, address: &str) -> io::Result<()>;
    /// Removes the session address. The confirmation record is kept.
    fn clear(&mut self) -> io::Result<()>;
    fn set_record(&mut self, record: &ConfirmedAddress) -> io::Result<()>;
    fn record(&self) -> io::Result<Option<ConfirmedAddress>>;
}

/// Store backed by two files under a per-user data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the store under `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Default profile location: `<user data dir>/gasola`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("gasola")
    }

    fn address_path(&self) -> PathBuf {
        self.dir.join(ADDRESS_FILE)
    }

    fn record_path(&self) -> PathBuf {
        self.dir.join(RECORD_FILE)
    }
}

fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl AddressStore for FileStore {
    fn get(&self) -> io::Result<Option<String>> {
        Ok(read_optional(&self.address_path())?
            .map(|contents| contents.trim().to_string())
            .filter(|address| !address.is_empty()))
    }

    fn set(&mut self, address: &str) -> io::Result<()> {
        debug!("storing session address in {}", self.dir.display());
        fs::write(self.address_path(), address)
    }

    fn clear(&mut self) -> io::Result<()> {
        match fs::remove_file(self.address_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn set_record(&mut self, record: &ConfirmedAddress) -> io::Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(), json)
    }

    fn record(&self) -> io::Result<Option<ConfirmedAddress>> {
        match read_optional(&self.record_path())? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
