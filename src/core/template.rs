//! Printf-style positional interpolation
//!
//! Templates use `%` directives of the form `%[flags][width][.precision]verb`.
//! Every directive consumes the next argument and renders its `Display`
//! output. `%q` quotes the rendered text, every other verb renders it as is.
//! Width and precision are honoured the way `std::fmt` honours them, so
//! `%.2f` on a float gives two decimals and `%.3s` truncates a string.
//!
//! Malformed input never fails; it produces inline markers instead:
//!
//! - `%!d(MISSING)` when a directive has no argument left
//! - `%!(EXTRA a, b)` when arguments are left over, listed by value only
//! - `%!(NOVERB)` for a trailing `%`

use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// Interpolate `args` into `template`.
///
/// # Examples
///
/// ```
/// use multi_sink_logger::core::template::interpolate;
///
/// assert_eq!(interpolate("n=%d", &[&3]), "n=3");
/// assert_eq!(interpolate("%-5s|", &[&"ab"]), "ab   |");
/// assert_eq!(interpolate("%.2f%%", &[&12.5]), "12.50%");
/// ```
pub fn interpolate(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let directive = Directive::parse(&mut chars);
        let Some(verb) = directive.verb else {
            out.push_str("%!(NOVERB)");
            break;
        };

        match args.get(next_arg) {
            Some(arg) => {
                directive.render(&mut out, *arg);
                next_arg += 1;
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (idx, arg) in args[next_arg..].iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", arg);
        }
        out.push(')');
    }

    out
}

#[derive(Debug, Default)]
struct Directive {
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: Option<char>,
}

impl Directive {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut directive = Directive::default();

        while let Some(&c) = chars.peek() {
            match c {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                '+' => directive.plus = true,
                ' ' | '#' => {}
                _ => break,
            }
            chars.next();
        }

        directive.width = Self::number(chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(Self::number(chars).unwrap_or(0));
        }
        directive.verb = chars.next();
        directive
    }

    fn number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
        let mut value: Option<usize> = None;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
            chars.next();
        }
        value
    }

    fn render(&self, out: &mut String, arg: &dyn Display) {
        let body = match self.verb {
            Some('q') => format!("{:?}", self.value(arg)),
            _ => self.value(arg),
        };

        let len = body.chars().count();
        let pad = self.width.map_or(0, |w| w.saturating_sub(len));
        if pad == 0 {
            out.push_str(&body);
        } else if self.left {
            out.push_str(&body);
            out.extend(std::iter::repeat(' ').take(pad));
        } else if self.zero {
            let (sign, digits) = match body.strip_prefix(['-', '+']) {
                Some(rest) => body.split_at(body.len() - rest.len()),
                None => ("", body.as_str()),
            };
            out.push_str(sign);
            out.extend(std::iter::repeat('0').take(pad));
            out.push_str(digits);
        } else {
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(&body);
        }
    }

    fn value(&self, arg: &dyn Display) -> String {
        match (self.plus, self.precision) {
            (false, None) => arg.to_string(),
            (false, Some(p)) => format!("{:.*}", p, arg),
            (true, None) => format!("{:+}", arg),
            (true, Some(p)) => format!("{:+.*}", p, arg),
        }
    }
}
