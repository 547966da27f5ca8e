use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

mod indexed_heap;

pub use indexed_heap::{HeapEntry, IndexedMinHeap};
pub use rustc_hash::FxHashMap;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
