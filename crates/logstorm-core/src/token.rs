use std::sync::{Arc, RwLock};

/// Shared refreshable bearer token.
///
/// Single writer (the dispatcher), many concurrent readers (workers).
/// Readers take a snapshot at request-send time; a swap never disturbs
/// requests already in flight with the old value.
#[derive(Debug, Clone)]
pub struct TokenCell {
    inner: Arc<RwLock<Arc<str>>>,
}

impl TokenCell {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::from(token.as_ref()))),
        }
    }

    /// Snapshot of the current token value.
    pub fn get(&self) -> Arc<str> {
        Arc::clone(&self.inner.read().unwrap())
    }

    /// Replace the token for all future readers.
    pub fn swap(&self, token: impl AsRef<str>) {
        *self.inner.write().unwrap() = Arc::from(token.as_ref());
    }
}

impl Default for TokenCell {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_is_visible_to_all_handles() {
        let cell = TokenCell::new("tok1");
        let reader = cell.clone();

        cell.swap("tok2");
        assert_eq!(&*reader.get(), "tok2");
    }

    #[test]
    fn snapshot_survives_a_swap() {
        let cell = TokenCell::new("tok1");
        let snapshot = cell.get();

        cell.swap("tok2");
        assert_eq!(&*snapshot, "tok1");
        assert_eq!(&*cell.get(), "tok2");
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(&*TokenCell::default().get(), "");
    }
}
