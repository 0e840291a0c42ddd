/// Represents an XML declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The XML version.
    version: String,
    /// The encoding used for the XML document.
    encoding: String,
    /// The standalone status of the XML document (optional).
    standalone: Option<bool>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self::new("1.0", "utf-8")
    }
}

impl Declaration {
    /// Creates a new instance of `Declaration` with the given version and encoding.
    ///
    /// # Arguments
    ///
    /// * `version` - The XML version.
    /// * `encoding` - The encoding used for the XML document.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::Declaration;
    /// let declaration = Declaration::new("1.0", "utf-8");
    /// assert_eq!(declaration.to_string(), r#"<?xml version="1.0" encoding="utf-8" ?>"#);
    /// ```
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            encoding: encoding.into(),
            standalone: None,
        }
    }

    /// Sets the standalone status of the XML document and returns a modified `Declaration`.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::Declaration;
    /// let declaration = Declaration::default().with_standalone(true);
    /// ```
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn standalone(&self) -> Option<bool> {
        self.standalone
    }
}

impl std::fmt::Display for Declaration {
    /// Formats the declaration as an XML declaration string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"<?xml version="{}" encoding="{}""#,
            self.version, self.encoding
        )?;

        if let Some(standalone) = self.standalone {
            let standalone_as_string = if standalone { "yes" } else { "no" };

            write!(f, r#" standalone="{standalone_as_string}""#)?;
        }

        write!(f, " ?>")?;
        Ok(())
    }
}
