/// Constants used by the extension allow/deny policy.
pub mod policy {
    /// Extensions admitted into the corpus, matched as a `.<ext>` filename
    /// suffix (code, markup, scripting, documentation).
    pub const ALLOWED_EXTENSIONS: &[&str] = &["py", "jsx", "js", "java", "php", "dart", "md"];

    /// Image formats intentionally excluded from extraction.
    pub const DENIED_IMAGE: &[&str] = &["png", "jpg", "jpeg", "gif"];
    /// Video formats intentionally excluded from extraction.
    pub const DENIED_VIDEO: &[&str] = &["mp4", "jfif"];
    /// Document formats intentionally excluded from extraction.
    pub const DENIED_DOCUMENT: &[&str] = &["key", "PDF", "pdf", "docx", "xlsx", "pptx"];
    /// Audio formats intentionally excluded from extraction.
    pub const DENIED_AUDIO: &[&str] = &["flac", "ogg", "mid", "webm", "wav", "mp3"];
    /// Archive formats intentionally excluded from extraction.
    pub const DENIED_ARCHIVE: &[&str] = &["jar", "aar", "gz", "zip", "bz2"];
    /// Model-artifact formats intentionally excluded from extraction.
    pub const DENIED_MODEL: &[&str] = &["onnx", "pickle", "model", "neuron"];
    /// Other binary formats intentionally excluded from extraction.
    pub const DENIED_MISC: &[&str] = &[
        "npy",
        "index",
        "inv",
        "DS_Store",
        "rdb",
        "pack",
        "idx",
        "glb",
        "gltf",
        "len",
        "otf",
        "unitypackage",
        "ttf",
        "xz",
        "pcm",
        "opus",
    ];
}

/// Constants used by the CSV checkpoint format.
pub mod checkpoint {
    /// Header column names, in fixed order.
    pub const COLUMNS: [&str; 3] = ["index", "file_path", "content"];
    /// Checkpoint filename pattern: `dataset_<timestamp>.csv`.
    pub const FILENAME_PREFIX: &str = "dataset_";
    /// Checkpoint file extension.
    pub const FILENAME_EXTENSION: &str = "csv";
}

/// Constants used by the columnar dataset store layout.
pub mod store {
    /// Directory under the run dir holding both subset directories.
    pub const DATA_DIR: &str = "data";
    /// File extension of a persisted subset artifact.
    pub const SUBSET_EXTENSION: &str = "parquet";
}

/// Constants used by run-context naming.
pub mod context {
    /// Timestamp format for per-run directory names (`YYYY_MM_DD_HHMM`).
    pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M";
}
