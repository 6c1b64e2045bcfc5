use std::fs;
use std::path::Path;

use crate::errors::LoadError;


/// Parse a textual program listing into its byte image.
///
/// One instruction byte per line, written as an 8-character binary string.
/// A `#` starts a comment running to the end of the line. Blank lines and
/// lines that do not parse as binary are skipped.
pub fn parse_program(source: &str) -> Vec<u8> {
    source
        .lines()
        .filter_map(|line| {
            let code = line.split('#').next().unwrap_or_default().trim();
            u8::from_str_radix(code, 2).ok()
        })
        .collect()
}


/// Read a program file from disk and parse it into its byte image.
pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path)?;
    Ok(parse_program(&source))
}


#[cfg(test)]
mod tests {

    use std::io;
    use std::path::Path;

    use super::*;

    #[test]
    fn comments_and_blank_lines_contribute_nothing() {
        let source = "\
# comment only

11111111 # binary with trailing comment
";
        assert_eq!(parse_program(source), vec![0b1111_1111]);
    }

    #[test]
    fn bytes_load_in_line_order() {
        let source = "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n";
        assert_eq!(
            parse_program(source),
            vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
        );
    }

    #[test]
    fn unparsable_lines_are_skipped() {
        let source = "10000010\nnot a byte\n2222\n00000001\n";
        assert_eq!(parse_program(source), vec![0b1000_0010, 0b0000_0001]);
    }

    #[test]
    fn missing_file_surfaces_not_found() {
        let err = read_program(Path::new("/no/such/program.ls8")).unwrap_err();
        match err {
            LoadError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

}
