use super::*;

impl Document {
    /// Get a typed value by key.
    ///
    /// # Examples
    /// ```
    /// use langpack::{parser, Output};
    ///
    /// # fn main() -> Result<(), langpack::PackError> {
    /// let doc = parser::parse("port=8080;\r\nhost=<localhost>;", &Output::silent());
    /// let port: u16 = doc.get("port")?;
    /// let host: String = doc.get("host")?;
    /// assert_eq!((port, host.as_str()), (8080, "localhost"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns `KeyNotFound` if the key is absent and `TypeError` if the value
    /// can't be converted to `T`.
    pub fn get<T>(&self, key: &str) -> Result<T, PackError>
    where
        T: TryFrom<Value, Error = PackError>,
    {
        let value = self.value(key).cloned().ok_or_else(|| PackError::KeyNotFound {
            key: key.to_string(),
            hint: Some("Check that the key exists and ends with '='".into()),
            code: Some(304),
        })?;
        T::try_from(value)
    }

    /// Like [`Document::get`], but absent keys and empty placeholders give `None`.
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>, PackError>
    where
        T: TryFrom<Value, Error = PackError>,
    {
        match self.value(key) {
            None => Ok(None),
            Some(v) if v.is_empty() => Ok(None),
            Some(v) => Ok(Some(T::try_from(v.clone())?)),
        }
    }

    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = PackError>,
    {
        self.get(key).unwrap_or(default)
    }
}
