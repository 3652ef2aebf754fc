// Pairwise signature matching.
//
// Signatures are computed once per file up front, then every unordered
// pair is compared. With library-sized inputs the quadratic pass is
// cheap; the per-file normalization is the part worth parallelizing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::signature;

/// A music file together with its precomputed filename signature.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub path: PathBuf,
    pub signature: HashSet<String>,
}

impl MediaFile {
    /// Build a file entry, deriving the signature from the file name only.
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let signature = signature::normalize(&name);
        Self { path, signature }
    }
}

/// A reported pair of files sharing at least the threshold number of words.
#[derive(Debug)]
pub struct Match<'a> {
    /// 1-based position of this match in the report
    pub index: usize,
    pub first: &'a Path,
    pub second: &'a Path,
    /// Shared signature words, sorted ascending
    pub common: Vec<String>,
}

/// Compute signatures for all paths in parallel, preserving input order.
pub fn compute_signatures(paths: Vec<PathBuf>) -> Vec<MediaFile> {
    paths.into_par_iter().map(MediaFile::new).collect()
}

/// Lazily compare every unordered pair of files, yielding those whose
/// signatures share at least `threshold` words. A zero or negative
/// threshold matches every pair.
pub fn find_matches(files: &[MediaFile], threshold: i64) -> Matches<'_> {
    Matches {
        files,
        threshold,
        i: 0,
        j: 1,
        found: 0,
    }
}

/// Iterator over matching pairs, in first-index then second-index order.
pub struct Matches<'a> {
    files: &'a [MediaFile],
    threshold: i64,
    i: usize,
    j: usize,
    found: usize,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        while self.i < self.files.len() {
            while self.j < self.files.len() {
                let first = &self.files[self.i];
                let second = &self.files[self.j];
                self.j += 1;

                let mut common: Vec<String> = first
                    .signature
                    .intersection(&second.signature)
                    .cloned()
                    .collect();
                if common.len() as i64 >= self.threshold {
                    common.sort();
                    self.found += 1;
                    return Some(Match {
                        index: self.found,
                        first: &first.path,
                        second: &second.path,
                        common,
                    });
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(path: &str, words: &[&str]) -> MediaFile {
        MediaFile {
            path: PathBuf::from(path),
            signature: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    #[test]
    fn test_signature_comes_from_file_name_only() {
        let file = MediaFile::new(PathBuf::from(
            "/library/Remix Albums/Sezen Aksu - Firuze.mp3",
        ));
        let expected: HashSet<String> = ["sezen", "aksu", "firuze"]
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        assert_eq!(file.signature, expected);
    }

    #[test]
    fn test_reports_each_pair_once_in_order() {
        let files = vec![
            media("a.mp3", &["gece", "yolcusu"]),
            media("b.mp3", &["gece", "yolcusu", "akustik"]),
            media("c.mp3", &["gece"]),
        ];

        let matches: Vec<_> = find_matches(&files, 1).collect();

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[0].first, Path::new("a.mp3"));
        assert_eq!(matches[0].second, Path::new("b.mp3"));
        assert_eq!(matches[1].first, Path::new("a.mp3"));
        assert_eq!(matches[1].second, Path::new("c.mp3"));
        assert_eq!(matches[2].first, Path::new("b.mp3"));
        assert_eq!(matches[2].second, Path::new("c.mp3"));
        assert_eq!(matches[2].index, 3);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let files = vec![
            media("a.mp3", &["bir", "iki"]),
            media("b.mp3", &["bir", "iki", "dört"]),
        ];

        assert_eq!(find_matches(&files, 2).count(), 1);
        assert_eq!(find_matches(&files, 3).count(), 0);
    }

    #[test]
    fn test_zero_threshold_matches_disjoint_signatures() {
        let files = vec![media("a.mp3", &["bir"]), media("b.mp3", &["iki"])];

        let matches: Vec<_> = find_matches(&files, 0).collect();
        assert_eq!(matches.len(), 1);
        assert!(matches[0].common.is_empty());

        assert_eq!(find_matches(&files, -5).count(), 1);
    }

    #[test]
    fn test_common_words_are_sorted() {
        let files = vec![
            media("a.mp3", &["zeytin", "ayva", "nar"]),
            media("b.mp3", &["zeytin", "ayva", "nar"]),
        ];

        let matches: Vec<_> = find_matches(&files, 3).collect();
        assert_eq!(matches[0].common, vec!["ayva", "nar", "zeytin"]);
    }

    #[test]
    fn test_too_few_files_yield_nothing() {
        assert_eq!(find_matches(&[], 1).count(), 0);

        let one = vec![media("a.mp3", &["tek"])];
        assert_eq!(find_matches(&one, 0).count(), 0);
    }

    #[test]
    fn test_compute_signatures_preserves_order() {
        let paths = vec![
            PathBuf::from("Gece Yolcusu (Akustik).mp3"),
            PathBuf::from("Gündüz.flac"),
        ];

        let files = compute_signatures(paths);

        assert_eq!(files[0].path, PathBuf::from("Gece Yolcusu (Akustik).mp3"));
        assert_eq!(files[1].path, PathBuf::from("Gündüz.flac"));
        assert!(files[0].signature.contains("gece"));
        assert!(files[1].signature.contains("gündüz"));
    }
}
