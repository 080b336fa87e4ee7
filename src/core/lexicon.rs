use crate::utils::error::{AnalyzerError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Positive, negative and stop-word sets. Built once at startup and shared
/// by reference with every scoring call.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
    pub stop_words: HashSet<String>,
}

impl Lexicon {
    pub fn new(
        positive: HashSet<String>,
        negative: HashSet<String>,
        stop_words: HashSet<String>,
    ) -> Self {
        Self {
            positive,
            negative,
            stop_words,
        }
    }

    pub fn load<P: AsRef<Path>>(positive: P, negative: P, stop_words_dir: P) -> Result<Self> {
        let lexicon = Self {
            positive: load_word_list(positive)?,
            negative: load_word_list(negative)?,
            stop_words: load_stop_words(stop_words_dir)?,
        };

        tracing::info!(
            "📚 Lexicon loaded: {} positive, {} negative, {} stop words",
            lexicon.positive.len(),
            lexicon.negative.len(),
            lexicon.stop_words.len()
        );
        Ok(lexicon)
    }
}

/// 讀取單一詞表，每行去除前後空白後成為一個詞條
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| AnalyzerError::LexiconError {
        path: path.display().to_string(),
        source,
    })?;

    let words: HashSet<String> = decode_latin1(&bytes)
        .lines()
        .map(|line| line.trim().to_string())
        .collect();

    tracing::debug!("Loaded {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// 停用詞目錄下所有檔案取聯集
pub fn load_stop_words<P: AsRef<Path>>(dir: P) -> Result<HashSet<String>> {
    let dir = dir.as_ref();
    let to_lexicon_error = |source| AnalyzerError::LexiconError {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_lexicon_error)? {
        let entry = entry.map_err(to_lexicon_error)?;
        if entry.file_type().map_err(to_lexicon_error)?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut stop_words = HashSet::new();
    for file in &files {
        stop_words.extend(load_word_list(file)?);
    }

    tracing::debug!(
        "Loaded {} stop words from {} files in {}",
        stop_words.len(),
        files.len(),
        dir.display()
    );
    Ok(stop_words)
}

// ISO-8859-1：每個位元組直接對應同值的 Unicode 碼位
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_word_list_trims_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"  good \r\nexcellent\n\nGreat\n").unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert!(words.contains("good"));
        assert!(words.contains("excellent"));
        // 載入時不轉小寫
        assert!(words.contains("Great"));
        assert!(!words.contains("great"));
    }

    #[test]
    fn test_load_word_list_reads_latin1() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'c', b'a', b'f', 0xE9, b'\n']).unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert!(words.contains("café"));
    }

    #[test]
    fn test_missing_word_list_is_fatal() {
        let err = load_word_list("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, AnalyzerError::LexiconError { .. }));
    }

    #[test]
    fn test_stop_words_are_unioned() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("StopWords_Generic.txt"), "the\nand\n").unwrap();
        std::fs::write(dir.path().join("StopWords_Names.txt"), "SMITH\nand\n").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let stop_words = load_stop_words(dir.path()).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("SMITH"));
    }

    #[test]
    fn test_missing_stop_word_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("StopWords");
        assert!(load_stop_words(&missing).is_err());
    }

    #[test]
    fn test_lexicon_load() {
        let dir = TempDir::new().unwrap();
        let positive = dir.path().join("positive-words.txt");
        let negative = dir.path().join("negative-words.txt");
        let stop_dir = dir.path().join("StopWords");
        std::fs::write(&positive, "good\n").unwrap();
        std::fs::write(&negative, "bad\n").unwrap();
        std::fs::create_dir(&stop_dir).unwrap();
        std::fs::write(stop_dir.join("generic.txt"), "the\n").unwrap();

        let lexicon = Lexicon::load(&positive, &negative, &stop_dir).unwrap();
        assert!(lexicon.positive.contains("good"));
        assert!(lexicon.negative.contains("bad"));
        assert!(lexicon.stop_words.contains("the"));
    }
}
