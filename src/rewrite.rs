//! Depth-first rewriting of keyed entries in a JSON document
//!
//! The rewriter walks objects and arrays in document order. Every object entry
//! whose key equals the configured key is handed to a visit callback, and the
//! callback's result replaces the entry's value before the walk descends into
//! it. A `None` result clears the entry: the key stays and its value becomes
//! `null`.

use log::{debug, log_enabled, Level};
use serde_json::Value;
use std::fmt::Write;

/// Rewrites matching entries of a JSON tree in place
pub struct Rewriter<'k, F> {
    key: &'k str,
    visit: F,
    // Track entry paths; only needed for debug output
    trace: bool,
}

impl<'k, F> Rewriter<'k, F>
where
    F: FnMut(&str, Value) -> Option<Value>,
{
    pub fn new(key: &'k str, visit: F) -> Self {
        Rewriter {
            key,
            visit,
            trace: false,
        }
    }

    /// Walk `value`, replacing each matching entry with the visit result
    pub fn rewrite(&mut self, value: &mut Value) {
        self.trace = log_enabled!(Level::Debug);
        let mut path = String::new();
        self.rewrite_at(value, &mut path);
    }

    fn rewrite_at(&mut self, value: &mut Value, path: &mut String) {
        match value {
            Value::Object(map) => {
                for (key, entry) in map.iter_mut() {
                    let len = path.len();
                    if self.trace {
                        push_pointer_segment(path, key);
                    }

                    if key == self.key {
                        let current = std::mem::take(entry);
                        *entry = match (self.visit)(key.as_str(), current) {
                            Some(next) => next,
                            None => {
                                debug!("cleared {}", path);
                                Value::Null
                            }
                        };
                    }

                    self.rewrite_at(entry, path);
                    path.truncate(len);
                }
            }
            Value::Array(items) => {
                for (idx, item) in items.iter_mut().enumerate() {
                    let len = path.len();
                    if self.trace {
                        let _ = write!(path, "/{}", idx);
                    }
                    self.rewrite_at(item, path);
                    path.truncate(len);
                }
            }
            _ => {}
        }
    }
}

/// Rewrite every entry named `key` in `value` using `visit`
pub fn rewrite<F>(value: &mut Value, key: &str, visit: F)
where
    F: FnMut(&str, Value) -> Option<Value>,
{
    Rewriter::new(key, visit).rewrite(value);
}

// RFC 6901 escaping, used for debug output only
fn push_pointer_segment(path: &mut String, key: &str) {
    path.push('/');
    for ch in key.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            _ => path.push(ch),
        }
    }
}
