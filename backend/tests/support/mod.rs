#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use launch_dash::store::RecordStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A slice of the launch history covering all four sites, both outcomes and
/// payloads on either side of the default slider window.
pub const LAUNCH_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,0,F9 v1.0  B0004,v1.0
3,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
4,CCAFS LC-40,0,500,F9 v1.0  B0006,v1.0
5,CCAFS LC-40,0,677,F9 v1.0  B0007,v1.0
6,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
7,CCAFS LC-40,1,3170,F9 v1.1,v1.1
8,CCAFS LC-40,0,3325,F9 v1.1,v1.1
9,CCAFS LC-40,0,2296,F9 v1.1,v1.1
10,VAFB SLC-4E,1,9600,F9 FT B1029.1,FT
11,KSC LC-39A,1,2490,F9 FT B1031.1,FT
12,KSC LC-39A,1,5300,F9 FT B1030,FT
13,KSC LC-39A,0,3600,F9 FT B1032.1,FT
14,CCAFS SLC-40,1,2205,F9 B4 B1041.2,B4
15,CCAFS SLC-40,0,7076,F9 B5 B1046.1,B5
16,KSC LC-39A,1,6460,F9 B4 B1043.1,B4
";

pub const FIXTURE_RECORDS: usize = 16;

/// Write `contents` to a temporary `.csv` file that lives as long as the
/// returned handle.
pub fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("launches")
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Load the fixture through the real CSV path.
pub fn fixture_store() -> RecordStore {
    let file = write_csv(LAUNCH_CSV);
    RecordStore::load(file.path()).expect("fixture loads")
}

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to process-global
/// env vars, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
