use fnv::FnvHasher;
use std::{
    collections::HashMap,
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Empty map sized for `capacity` entries, used for the per cell distance tables.
/// FNV hashes a two word `Cell` key faster than the default SipHash; none of the keys come from
/// untrusted input, so its weaker collision resistance does not matter here.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashMap::<K, V, _>::with_capacity_and_hasher(capacity, fnv)
}
