use crate::utils::error::Result;

/// Byte-level access to the file that holds the ledger.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn date_format(&self) -> &str;
}
