use std::io::{BufRead, BufReader, Read};

/// Read all lines from `reader`, without their `\n` or `\r\n` terminators.
/// The whole input is read before anything is returned, so a read error
/// never yields a partial set of lines.
pub fn read_lines<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}
