use crate::error::{Error, Result};
use crate::tokenizer::NoiseWords;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies raw document text to the index builder. Implementations own all
/// file access; the engine core never touches storage itself.
pub trait DocumentSource {
    fn read_document(&self, name: &str) -> Result<String>;
}

/// Documents stored as UTF-8 text files under a root directory, addressed
/// by their file name.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for FsDocumentSource {
    fn read_document(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.root.join(name)).map_err(|source| Error::SourceNotFound {
            name: name.to_string(),
            source,
        })
    }
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::SourceNotFound {
        name: path.display().to_string(),
        source,
    })?;
    Ok(contents.split_whitespace().map(str::to_string).collect())
}

/// Load a whitespace-delimited noise-word file.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    Ok(read_words(path.as_ref())?.into_iter().collect())
}

/// Load a whitespace-delimited list of document names, in file order.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    read_words(path.as_ref())
}
