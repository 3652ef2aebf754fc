// Songmatch: find likely duplicate songs in a music library by filename.
//
// The pipeline is scanner → signature → matcher: collect music files,
// reduce each filename to a set of identifying words, then report every
// pair of files sharing enough words.

pub mod matcher;
pub mod scanner;
pub mod signature;
