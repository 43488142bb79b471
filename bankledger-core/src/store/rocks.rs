//! RocksDB-backed entry store
//!
//! # Column Families
//!
//! - `entries` - entry records (key: entry id, value: bincode)
//! - `indices` - account index (key: account || `|` || timestamp nanos (BE) || entry id)
//!
//! A batch of entries lands through a single [`rocksdb::WriteBatch`], so
//! the all-or-nothing contract of [`LedgerStore::append_entries`] holds
//! even under concurrent writers.

use rocksdb::{
    ColumnFamily, ColumnFamilyDescriptor, DBCompactionStyle, Direction, IteratorMode, Options,
    WriteBatch, DB,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::entry::LedgerEntry;
use crate::error::{Error, Result};
use crate::store::LedgerStore;
use crate::types::AccountId;

/// Column family names
const CF_ENTRIES: &str = "entries";
const CF_INDICES: &str = "indices";

/// Index key separator between account id and timestamp
const SEP: u8 = b'|';

/// RocksDB-backed [`LedgerStore`]
pub struct RocksStore {
    db: Arc<DB>,
}

impl RocksStore {
    /// Open or create the database described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let path = &config.data_dir;

        // Create directory if not exists
        std::fs::create_dir_all(path)?;

        // Database options
        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        // Tuning from config
        db_opts.set_write_buffer_size(config.rocksdb.write_buffer_size_mb * 1024 * 1024);
        db_opts.set_max_write_buffer_number(config.rocksdb.max_write_buffer_number);
        db_opts.set_target_file_size_base(config.rocksdb.target_file_size_mb * 1024 * 1024);
        db_opts.set_max_background_jobs(config.rocksdb.max_background_jobs);
        db_opts.set_level_zero_file_num_compaction_trigger(
            config.rocksdb.level0_file_num_compaction_trigger,
        );

        // Universal compaction for an append-only workload
        db_opts.set_compaction_style(DBCompactionStyle::Universal);

        let cf_descriptors = vec![
            ColumnFamilyDescriptor::new(CF_ENTRIES, Self::cf_options_entries()),
            ColumnFamilyDescriptor::new(CF_INDICES, Self::cf_options_indices()),
        ];

        let db = DB::open_cf_descriptors(&db_opts, path, cf_descriptors)?;

        tracing::info!(path = %path.display(), "opened RocksDB entry store");

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_options_entries() -> Options {
        let mut opts = Options::default();
        opts.set_compression_type(rocksdb::DBCompressionType::Zstd);
        opts.set_bottommost_compression_type(rocksdb::DBCompressionType::Zstd);
        opts
    }

    fn cf_options_indices() -> Options {
        let mut opts = Options::default();
        opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
        opts
    }

    fn cf_handle(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| Error::Storage(format!("Column family {} not found", name)))
    }

    /// Index key: account || SEP || timestamp nanos (BE) || entry id
    fn index_key(entry: &LedgerEntry) -> Vec<u8> {
        let nanos = entry.timestamp().timestamp_nanos_opt().unwrap_or(0);

        let mut key = entry.account().as_str().as_bytes().to_vec();
        key.push(SEP);
        key.extend_from_slice(&nanos.to_be_bytes());
        key.extend_from_slice(entry.id().as_bytes());
        key
    }

    fn index_prefix(account: &AccountId) -> Vec<u8> {
        let mut prefix = account.as_str().as_bytes().to_vec();
        prefix.push(SEP);
        prefix
    }

    fn load_entry(&self, entry_id: Uuid) -> Result<LedgerEntry> {
        let cf = self.cf_handle(CF_ENTRIES)?;

        let value = self.db.get_cf(cf, entry_id.as_bytes())?.ok_or_else(|| {
            Error::Storage(format!("index points at missing entry {}", entry_id))
        })?;

        let entry: LedgerEntry = bincode::deserialize(&value)?;
        Ok(entry)
    }

    /// Close database (graceful shutdown)
    pub fn close(self) -> Result<()> {
        drop(self.db);
        tracing::info!("RocksDB entry store closed");
        Ok(())
    }
}

impl LedgerStore for RocksStore {
    fn get_entries(&self, account: &AccountId) -> Result<Vec<LedgerEntry>> {
        if account.is_blank() {
            return Err(Error::InvalidAccountId);
        }

        let cf_indices = self.cf_handle(CF_INDICES)?;
        let prefix = Self::index_prefix(account);

        let iter = self.db.iterator_cf(
            cf_indices,
            IteratorMode::From(prefix.as_slice(), Direction::Forward),
        );

        let mut entries = Vec::new();
        for item in iter {
            let (key, _) = item?;
            if !key.starts_with(&prefix) {
                break;
            }

            // Entry id is the last 16 bytes of the key
            if key.len() >= 16 {
                let entry_id_bytes: [u8; 16] = key[key.len() - 16..].try_into().unwrap();
                let entry_id = Uuid::from_bytes(entry_id_bytes);
                entries.push(self.load_entry(entry_id)?);
            }
        }

        // Account ids may themselves contain the separator, so the
        // prefix scan can overshoot; the sort also settles entries whose
        // timestamps predate the epoch.
        entries.retain(|e| e.account() == account);
        entries.sort_by_key(|e| e.timestamp());

        Ok(entries)
    }

    fn append_entries(&self, entries: &[LedgerEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let cf_entries = self.cf_handle(CF_ENTRIES)?;
        let cf_indices = self.cf_handle(CF_INDICES)?;

        let mut batch = WriteBatch::default();
        for entry in entries {
            let value = bincode::serialize(entry)?;
            batch.put_cf(cf_entries, entry.id().as_bytes(), &value);
            batch.put_cf(cf_indices, Self::index_key(entry), &[]);
        }

        // Atomic commit
        self.db.write(batch)?;

        tracing::debug!(count = entries.len(), "entry batch appended");

        Ok(())
    }
}
