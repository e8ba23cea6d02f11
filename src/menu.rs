use std::fmt;
use std::io::{self, BufRead, Write};

use crate::TermInt;
use crate::term::{CELL_WIDTH, STATUS_LINES};

pub const MIN_BOARD_SIZE: i64 = 5;

#[derive(Debug)]
pub enum MenuError {
    Read(io::Error),
    Parse { what: &'static str, input: String },
    TooSmall { width: i64, height: i64 },
    TooLarge { width: i64, height: i64, max_width: i64, max_height: i64 },
    Terminal(anyhow::Error),
}

impl MenuError {
    pub fn exit_code(&self) -> i32 {
        match self {
            MenuError::TooLarge { .. } => 2,
            MenuError::TooSmall { .. } => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Read(err) => write!(f, "Error reading the board size: {}", err),
            MenuError::Parse { what, input } => write!(f, "Error: {:?} is not a valid {}", input, what),
            MenuError::TooSmall { width, height } => write!(
                f,
                "The minimum dimensions are {min}x{min}! (got {}x{})",
                width,
                height,
                min = MIN_BOARD_SIZE
            ),
            MenuError::TooLarge { width, height, max_width, max_height } => write!(
                f,
                "Error: the desired dimensions are too large for your terminal!\n\
                 Your terminal size: {}x{}\n\
                 Your desired size: {}x{}",
                max_width, max_height, width, height
            ),
            MenuError::Terminal(err) => write!(f, "Error: {:#}", err),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Read(err) => Some(err),
            _ => None,
        }
    }
}

/// Takes the board size from the first two `args`, or asks for it on
/// `input` when they are missing.
pub fn read_size<R: BufRead, W: Write>(args: &[String], input: R, output: W) -> Result<(i64, i64), MenuError> {
    match args {
        [width, height, ..] => Ok((parse(width, "width")?, parse(height, "height")?)),
        _ => prompt_size(input, output),
    }
}

/// Checks a board size against the terminal, which needs two columns per
/// cell and room for the status lines.
pub fn validate(width: i64, height: i64, term: (TermInt, TermInt)) -> Result<(usize, usize), MenuError> {
    if width < MIN_BOARD_SIZE || height < MIN_BOARD_SIZE {
        return Err(MenuError::TooSmall { width, height });
    }

    let max_width = (term.0 / CELL_WIDTH) as i64;
    let max_height = term.1 as i64 - STATUS_LINES as i64;
    if width > max_width || height > max_height {
        return Err(MenuError::TooLarge { width, height, max_width, max_height });
    }

    Ok((width as usize, height as usize))
}

///////////////////////////////////////////////////////////////////////////////

fn prompt_size<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(i64, i64), MenuError> {
    write!(output, "\nTERMSNAKE\nPlease enter the desired width of the board: ").map_err(MenuError::Read)?;
    let width = parse(&read_line(&mut input, &mut output)?, "width")?;

    write!(output, "Please enter the desired height of the board: ").map_err(MenuError::Read)?;
    let height = parse(&read_line(&mut input, &mut output)?, "height")?;

    Ok((width, height))
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, MenuError> {
    output.flush().map_err(MenuError::Read)?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(MenuError::Read)?;
    Ok(line)
}

fn parse(text: &str, what: &'static str) -> Result<i64, MenuError> {
    text.trim().parse().map_err(|_| MenuError::Parse { what, input: text.trim().to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: (TermInt, TermInt) = (80, 24);

    #[test]
    fn prompts_when_no_args() {
        let mut output = Vec::new();
        let size = read_size(&[], "20\n 12 \n".as_bytes(), &mut output).unwrap();
        assert_eq!(size, (20, 12));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("width of the board"));
        assert!(shown.contains("height of the board"));
    }

    #[test]
    fn args_skip_the_prompt() {
        let args = vec!["30".to_string(), "15".to_string()];
        let mut output = Vec::new();
        assert_eq!(read_size(&args, "".as_bytes(), &mut output).unwrap(), (30, 15));
        assert!(output.is_empty());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = read_size(&[], "wide\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, MenuError::Parse { what: "width", .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn small_boards_exit_with_3() {
        let err = validate(4, 10, TERM).unwrap_err();
        assert!(matches!(err, MenuError::TooSmall { .. }));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(validate(10, -1, TERM).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn large_boards_exit_with_2() {
        assert_eq!(validate(41, 10, TERM).unwrap_err().exit_code(), 2);
        assert_eq!(validate(10, 22, TERM).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn board_filling_the_terminal_fits() {
        assert_eq!(validate(40, 21, TERM).unwrap(), (40, 21));
        assert_eq!(validate(5, 5, TERM).unwrap(), (5, 5));
    }
}
