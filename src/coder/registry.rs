use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Coder, UNKNOWN_CODE, UNKNOWN_CODER};
use crate::types::Error;

/// Invalid use of a [`CodeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryError {
    /// Attempted to register [`UNKNOWN_CODE`].
    ReservedCode,
    /// Attempted a strict registration of a code that already has an entry.
    DuplicateCode(i32),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedCode => write!(f, "code `{UNKNOWN_CODE}` is reserved by the unknown coder"),
            Self::DuplicateCode(code) => write!(f, "code: {code} already exists"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Thread-safe mapping from business codes to their [`Coder`].
///
/// Writes are serialized by a write lock, lookups share a read lock. The reserved
/// entry for [`UNKNOWN_CODE`] is present from construction and cannot be replaced.
///
/// The panicking [`register`](Self::register) and [`must_register`](Self::must_register)
/// are meant for startup code where a bad registration is a programming error; the
/// `try_` forms report the same conditions as [`RegistryError`].
pub struct CodeRegistry {
    coders: RwLock<HashMap<i32, Arc<dyn Coder>>>,
    unknown: Arc<dyn Coder>,
}

impl CodeRegistry {
    /// Creates a registry holding only the built-in unknown coder.
    pub fn new() -> Self {
        let unknown: Arc<dyn Coder> = Arc::new(UNKNOWN_CODER.clone());
        let mut coders = HashMap::new();
        coders.insert(UNKNOWN_CODE, Arc::clone(&unknown));
        Self { coders: RwLock::new(coders), unknown }
    }

    /// Returns the process-wide registry used by the free functions of this crate.
    pub fn global() -> &'static CodeRegistry {
        static GLOBAL: OnceLock<CodeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CodeRegistry::new)
    }

    // Every write is a single map operation, so a poisoned lock still guards a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i32, Arc<dyn Coder>>> {
        self.coders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i32, Arc<dyn Coder>>> {
        self.coders.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts `coder`, returning the coder it replaced.
    pub fn try_register<C: Coder>(&self, coder: C) -> Result<Option<Arc<dyn Coder>>, RegistryError> {
        let code = coder.code();
        if code == UNKNOWN_CODE {
            return Err(RegistryError::ReservedCode);
        }

        let previous = self.write().insert(code, Arc::new(coder));

        trace_registered(code, previous.is_some());
        Ok(previous)
    }

    /// Inserts `coder` only if its code has no entry yet.
    pub fn try_must_register<C: Coder>(&self, coder: C) -> Result<(), RegistryError> {
        let code = coder.code();
        if code == UNKNOWN_CODE {
            return Err(RegistryError::ReservedCode);
        }

        match self.write().entry(code) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateCode(code)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(coder));
                trace_registered(code, false);
                Ok(())
            },
        }
    }

    /// Inserts `coder`, silently replacing any previous entry for its code.
    ///
    /// # Panics
    ///
    /// Panics if `coder.code()` is [`UNKNOWN_CODE`].
    #[track_caller]
    pub fn register<C: Coder>(&self, coder: C) {
        if let Err(err) = self.try_register(coder) {
            invalid_registration(err);
        }
    }

    /// Inserts `coder`, which must use a fresh code.
    ///
    /// # Panics
    ///
    /// Panics if `coder.code()` is [`UNKNOWN_CODE`] or already registered.
    #[track_caller]
    pub fn must_register<C: Coder>(&self, coder: C) {
        if let Err(err) = self.try_must_register(coder) {
            invalid_registration(err);
        }
    }

    /// Returns the coder registered for `code`, or the unknown coder.
    pub fn lookup(&self, code: i32) -> Arc<dyn Coder> {
        self.get(code).unwrap_or_else(|| self.unknown())
    }

    /// Returns the coder registered for `code`, if any.
    pub fn get(&self, code: i32) -> Option<Arc<dyn Coder>> {
        self.read().get(&code).cloned()
    }

    #[inline]
    pub fn contains(&self, code: i32) -> bool {
        self.read().contains_key(&code)
    }

    /// Number of caller-registered codes. The reserved entry is not counted.
    pub fn len(&self) -> usize {
        self.read().len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Caller-registered codes in ascending order.
    pub fn codes(&self) -> Vec<i32> {
        let mut codes: Vec<i32> =
            self.read().keys().copied().filter(|&code| code != UNKNOWN_CODE).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns the built-in unknown coder.
    #[inline]
    pub fn unknown(&self) -> Arc<dyn Coder> {
        Arc::clone(&self.unknown)
    }

    /// Resolves the coder for `err`.
    ///
    /// Only the outermost node is consulted: a coded node with a registered code
    /// yields that coder, anything else yields the unknown coder.
    pub fn parse_coder(&self, err: &Error) -> Arc<dyn Coder> {
        match err.code() {
            Some(code) => self.lookup(code),
            None => self.unknown(),
        }
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeRegistry").field("codes", &self.codes()).finish()
    }
}

#[cfg(feature = "tracing")]
fn trace_registered(code: i32, replaced: bool) {
    if replaced {
        tracing::warn!(code, "coder registration replaced an existing entry");
    } else {
        tracing::debug!(code, "coder registered");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_registered(_code: i32, _replaced: bool) {}

#[cold]
#[track_caller]
fn invalid_registration(err: RegistryError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "invalid coder registration");
    panic!("{err}")
}
