pub mod builder;

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid text: expected a string, found {found}")]
    NotAString { found: &'static str },

    #[error("Invalid value: expected a string, number or boolean, found {found}")]
    NotAScalar { found: &'static str },
}
