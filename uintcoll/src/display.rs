use crate::width::Element;
use std::fmt::{self, Display, Write as _};
use std::io;

/// Writes `[a,b,c]` with every element as unsigned decimal.
pub(crate) fn write_bracketed<T: Element>(
    f: &mut fmt::Formatter<'_>,
    values: impl IntoIterator<Item = T>,
) -> fmt::Result {
    f.write_char('[')?;
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            f.write_char(',')?;
        }
        write!(f, "{}", value.to_u64())?;
    }
    f.write_char(']')
}

/// Writes `value` followed by exactly one newline.
pub(crate) fn write_line(writer: &mut impl io::Write, value: &impl Display) -> io::Result<()> {
    writeln!(writer, "{value}")?;
    writer.flush()
}
