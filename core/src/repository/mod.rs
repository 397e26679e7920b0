pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileLedgerRepository;
pub use memory::MemoryLedgerRepository;
pub use traits::LedgerRepository;
