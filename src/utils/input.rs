use crate::error::{AppError, AppResult};
use std::io::{BufRead, Write};

/// 读一行并去掉首尾空白; 输入流关闭视为 I/O 错误
pub fn read_line<R: BufRead>(input: &mut R) -> AppResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }
    Ok(line.trim().to_string())
}

pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> AppResult<String> {
    write!(out, "{label}")?;
    out.flush()?;
    read_line(input)
}

/// 数字/日期等字段: 反复提示直到输入可解析。
/// 枚举字段不要用这个 — 它们走服务层解析, 失败要以 InvalidEnumValue 中止操作。
pub fn prompt_parse<T, R, W>(input: &mut R, out: &mut W, label: &str) -> AppResult<T>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt(input, out, label)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_trims_whitespace() {
        let mut input = Cursor::new("  hello \n");
        assert_eq!(read_line(&mut input).unwrap(), "hello");
    }

    #[test]
    fn read_line_on_closed_stream_is_an_io_error() {
        let mut input = Cursor::new("");
        let err = read_line(&mut input).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn prompt_parse_reprompts_until_parseable() {
        let mut input = Cursor::new("abc\n42\n");
        let mut out = Vec::new();
        let value: i64 = prompt_parse(&mut input, &mut out, "Id: ").unwrap();
        assert_eq!(value, 42);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid input. Try again."));
    }
}
