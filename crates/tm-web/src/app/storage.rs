use serde::{Serialize, de::DeserializeOwned};

/// Thin wrapper over the browser's `localStorage`.
///
/// Outside the `web` feature every operation is a no-op so callers never need
/// to care which platform they run on.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "Window not available".to_string())?
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| "Storage not available".to_string())
    }

    /// Read a raw value. Missing keys and storage failures both yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = match self.backend() {
                Ok(storage) => storage,
                Err(e) => {
                    tracing::warn!(key, error = %e, "storage unavailable");
                    return None;
                }
            };
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "failed to read from storage");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            self.backend()?
                .set_item(key, value)
                .map_err(|e| format!("Failed to set item in storage '{}': {:?}", key, e))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            self.backend()?
                .remove_item(key)
                .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Get and deserialize a JSON value. Malformed values are logged and treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!(key, error = %e, "ignoring malformed JSON in storage");
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_storage_is_inert() {
        let storage = BrowserStorage::new();
        assert!(storage.set("user", "{}").is_ok());
        assert_eq!(storage.get("user"), None);
        assert_eq!(storage.get_json::<serde_json::Value>("user"), None);
        assert!(storage.remove("user").is_ok());
    }
}
