//! Process-wide symbol interning.
//!
//! A [`Symbol`] is the canonical handle for a name. Every distinct string is
//! stored exactly once per [`SymbolTable`], leaked for the life of the
//! process, and never mutated or evicted. Symbols compare and hash by the
//! address of that canonical string, so equality is identity.
//!
//! Most callers go through [`Symbol::intern`], which uses the global table
//! created on first use by [`SymbolTable::global`]. The table itself is never
//! handed out mutably; interning is the only way to add an entry.

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Number of independently locked shards.
const NUM_SHARDS: usize = 16;

static GLOBAL_SYMBOLS: OnceLock<SymbolTable> = OnceLock::new();

/// Canonical interned name.
///
/// Two symbols are equal only when they are the same table entry. Symbols
/// from different [`SymbolTable`] instances never compare equal, even when
/// their text matches.
#[derive(Copy, Clone)]
pub struct Symbol(&'static str);

impl Symbol {
    /// Intern `name` in the global table.
    #[inline]
    pub fn intern(name: &str) -> Symbol {
        SymbolTable::global().intern(name)
    }

    /// Intern an owned `name` in the global table, keeping its allocation
    /// when the name is new.
    #[inline]
    pub fn intern_owned(name: String) -> Symbol {
        SymbolTable::global().intern_owned(name)
    }

    /// The canonical text of this symbol.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Per-shard storage for interned strings.
struct SymbolShard {
    names: FxHashSet<&'static str>,
}

impl SymbolShard {
    fn new() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }
}

/// Sharded, append-only intern table.
///
/// # Thread Safety
/// Each shard sits behind its own `RwLock`. Lookups take the read lock;
/// a miss re-checks under the write lock before inserting, so concurrent
/// interning of the same text yields one canonical entry and every racer
/// receives it.
pub struct SymbolTable {
    shards: [RwLock<SymbolShard>; NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl SymbolTable {
    /// Create an empty, independent table.
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(SymbolShard::new())),
            total_count: AtomicUsize::new(0),
        }
    }

    /// The process-wide table, created empty on first access.
    pub fn global() -> &'static SymbolTable {
        GLOBAL_SYMBOLS.get_or_init(SymbolTable::new)
    }

    /// Compute shard for a string based on its first bytes.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % NUM_SHARDS
    }

    /// Intern a string, returning its canonical symbol.
    pub fn intern(&self, s: &str) -> Symbol {
        let shard = &self.shards[Self::shard_for(s)];

        // Fast path: already interned
        if let Some(&existing) = shard.read().names.get(s) {
            return Symbol(existing);
        }

        let mut guard = shard.write();

        // Double-check after acquiring the write lock
        if let Some(&existing) = guard.names.get(s) {
            return Symbol(existing);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.names.insert(leaked);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        Symbol(leaked)
    }

    /// Intern an owned string, reusing its allocation on a miss.
    pub fn intern_owned(&self, s: String) -> Symbol {
        let shard = &self.shards[Self::shard_for(&s)];

        if let Some(&existing) = shard.read().names.get(s.as_str()) {
            return Symbol(existing);
        }

        let mut guard = shard.write();
        if let Some(&existing) = guard.names.get(s.as_str()) {
            return Symbol(existing);
        }

        let leaked: &'static str = Box::leak(s.into_boxed_str());
        guard.names.insert(leaked);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        Symbol(leaked)
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Returns `true` if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
