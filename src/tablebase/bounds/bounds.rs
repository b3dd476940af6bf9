use std::{collections::HashMap, sync::LazyLock};
use crate::*;
use super::tables::{MAX_DTM_TABLE, MAX_DTZ_TABLE};

/*----------------------------------------------------------------*/

/// Cost charged for a composition missing from the DTZ table.
pub const DEFAULT_MAX_DTZ: i32 = 100;

static MAX_DTM: LazyLock<HashMap<MaterialId, i32>> = LazyLock::new(|| load("max DTM", MAX_DTM_TABLE));
static MAX_DTZ: LazyLock<HashMap<MaterialId, i32>> = LazyLock::new(|| load("max DTZ", MAX_DTZ_TABLE));

fn load(name: &str, table: &[(u64, i32)]) -> HashMap<MaterialId, i32> {
    let mut map = HashMap::with_capacity(table.len() * 2);

    for &(id, value) in table {
        let id = MaterialId(id);

        map.insert(id, value);
        map.insert(id.mirror(), value);
    }

    log::debug!("Loaded {} {} bounds", map.len(), name);
    map
}

/// Forces both bound tables to load.
pub fn init_bounds() {
    LazyLock::force(&MAX_DTM);
    LazyLock::force(&MAX_DTZ);
}

/*----------------------------------------------------------------*/

/// Worst-case mate score the winning side of a Gaviota WDL win can expect,
/// or `None` when the composition was never measured.
#[inline]
pub fn max_dtm(id: MaterialId) -> Option<i32> {
    MAX_DTM.get(&id).copied()
}

/// Plies charged for one Syzygy DTZ phase of this composition.
#[inline]
pub fn max_dtz(id: MaterialId) -> i32 {
    match MAX_DTZ.get(&id) {
        None => DEFAULT_MAX_DTZ,
        Some(&value) if value < 0 => 0,
        Some(&value) => (value + 2).min(DEFAULT_MAX_DTZ),
    }
}

/// Whether DTZ values for this composition may be off by one.
#[inline]
pub fn approx_dtz(id: MaterialId) -> bool {
    MAX_DTZ.get(&id).is_none_or(|&value| value != DEFAULT_MAX_DTZ)
}

/*----------------------------------------------------------------*/
