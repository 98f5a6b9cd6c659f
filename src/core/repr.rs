//! Literal rendering of values the way a REPL echoes them:
//! `[1, 2, 3]`, `'text'`, `{'key': 'value', 'n': 1}`, `True`, `None`.

use crate::domain::model::Person;
use crate::utils::error::Result;
use serde_json::Value;

pub trait PyRepr {
    fn write_repr(&self, out: &mut String) -> Result<()>;

    fn repr(&self) -> Result<String> {
        let mut out = String::new();
        self.write_repr(&mut out)?;
        Ok(out)
    }
}

macro_rules! int_repr {
    ($($t:ty),*) => {
        $(
            impl PyRepr for $t {
                fn write_repr(&self, out: &mut String) -> Result<()> {
                    out.push_str(&self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

int_repr!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl PyRepr for bool {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        out.push_str(if *self { "True" } else { "False" });
        Ok(())
    }
}

impl PyRepr for str {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        write_quoted(self, out);
        Ok(())
    }
}

impl PyRepr for String {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        self.as_str().write_repr(out)
    }
}

impl<T: PyRepr + ?Sized> PyRepr for &T {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        (**self).write_repr(out)
    }
}

impl<T: PyRepr> PyRepr for [T] {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_repr(out)?;
        }
        out.push(']');
        Ok(())
    }
}

impl<T: PyRepr> PyRepr for Vec<T> {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        self.as_slice().write_repr(out)
    }
}

impl PyRepr for Value {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        match self {
            Value::Null => out.push_str("None"),
            Value::Bool(b) => b.write_repr(out)?,
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => write_quoted(s, out),
            Value::Array(items) => items.write_repr(out)?,
            Value::Object(map) => {
                out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_quoted(key, out);
                    out.push_str(": ");
                    value.write_repr(out)?;
                }
                out.push('}');
            }
        }
        Ok(())
    }
}

impl PyRepr for Person {
    fn write_repr(&self, out: &mut String) -> Result<()> {
        serde_json::to_value(self)?.write_repr(out)
    }
}

/// Single quotes unless the text holds `'` but no `"`.
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
