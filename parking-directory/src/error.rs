#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed reading table data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed reading configuration file '{path}'")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed decoding configuration")]
    ConfigDecode(#[from] toml::de::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("header row has no column titled '{0}'")]
    MissingColumn(String),
    #[error("header row has more than one column titled '{0}'")]
    DuplicateColumn(String),
    #[error("row {row} has an invalid {field} value '{value}'")]
    InvalidCoordinate {
        row: usize,
        field: String,
        value: String,
    },
    #[error("window failed: {0}")]
    Window(String),
    #[error("row {0} is out of range")]
    RowOutOfRange(usize),
}
