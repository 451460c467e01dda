use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a corpus file and returns its entire contents as a `String`.
///
/// The model consumes raw characters, so no line splitting or other
/// pre-processing is performed here.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
