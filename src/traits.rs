use std::error::Error;

/// A persistent key-value storage, where each key holds a whole string value.
///
/// Writing a key replaces its previous value as a whole.
pub trait KeyValueStorage {
    /// Returns the value stored for `key`, or `None` if nothing has been stored yet
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Store `value` for `key`, overwriting any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;

    /// Forget the value stored for `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>>;
}
