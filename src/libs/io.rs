use std::io::{BufRead, Write};

/// Open an input source for reading.
///
/// `"stdin"` reads from standard input; anything else is treated as a path.
/// Gzipped files (`.gz`) are decompressed transparently.
///
/// ```
/// use std::io::BufRead;
/// let reader = nwt::reader("tests/newick/abc.nwk");
/// assert_eq!(reader.lines().collect::<Vec<_>>().len(), 1);
/// ```
pub fn reader(input: &str) -> Box<dyn BufRead> {
    intspan::reader(input)
}

/// Open an output sink for writing. `"stdout"` writes to standard output.
pub fn writer(output: &str) -> Box<dyn Write> {
    intspan::writer(output)
}

/// Slurp a whole input source into a string.
pub fn read_to_string(input: &str) -> anyhow::Result<String> {
    let mut reader = reader(input);
    let mut s = String::new();
    reader
        .read_to_string(&mut s)
        .map_err(|e| anyhow::anyhow!("could not read {}: {}", input, e))?;
    Ok(s)
}
