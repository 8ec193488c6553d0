//! Axis labels: template parsing, number formatting and the shared axis width.
//!
//! ### Template grammar
//! A template is literal text around exactly one placeholder. `{{` and `}}`
//! are literal braces. The placeholder is `{}` or `{:SPEC}` with
//!
//! ```text
//! SPEC := [[fill]align][sign][0][width][.precision][type]
//! align := '<' | '>' | '^'         (numbers default to '>')
//! sign  := '+' | '-' | ' '
//! type  := 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'n' | '%'
//! ```
//!
//! `g`/`n` keep `precision` significant digits (default 6), switching to
//! exponent notation below `1e-4` or at `10^precision`, and drop trailing
//! zeros. Without a type, a precision behaves like `g` but always keeps one
//! digit after the point (`{:.2}` of 3.0 is `3.0`), and no precision means
//! the shortest round-trip text with a decimal point (`10.0`).

use std::iter;

use crate::{
    core::{
        bounds::integer_digits, config::Config, constants::DECIMAL_PRECISION,
        error::FormatError,
    },
    render::scale::Scale,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Minus,
    Plus,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Shortest,
    Fixed,
    Exponent { upper: bool },
    General { upper: bool, keep_point: bool },
    Percent,
}

/// Drop trailing zeros after a decimal point, and the point if bare.
fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn exponent_form(mantissa: &str, exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}

/// Split `{:.p$e}` output into mantissa and exponent.
fn scientific(magnitude: f64, p: usize) -> (String, i32) {
    let raw = format!("{magnitude:.p$e}");
    match raw.split_once('e') {
        Some((m, e)) => (m.to_owned(), e.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

/// Parsed `{:SPEC}`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Option<Align>,
    sign: Sign,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    kind: Kind,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Minus,
            zero: false,
            width: 0,
            precision: None,
            kind: Kind::Shortest,
        }
    }
}

const fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

fn take_number(chars: &[char], idx: &mut usize) -> Option<usize> {
    let start = *idx;
    while *idx < chars.len() && chars[*idx].is_ascii_digit() {
        *idx += 1;
    }
    if *idx == start {
        return None;
    }
    chars[start..*idx].iter().collect::<String>().parse().ok()
}

/// `precision` significant digits, fixed or exponent by magnitude.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn general(magnitude: f64, precision: usize, upper: bool, keep_point: bool) -> String {
    let p = precision.max(1);
    let mut s = if magnitude == 0.0 {
        "0".to_owned()
    } else {
        let (mantissa, exp) = scientific(magnitude, p - 1);
        if (-4..p as i32).contains(&exp) {
            let decimals = (p as i32 - 1 - exp) as usize;
            trim_zeros(&format!("{magnitude:.decimals$}")).to_owned()
        } else {
            return exponent_form(trim_zeros(&mantissa), exp, upper);
        }
    };
    if keep_point && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

impl Spec {
    fn parse(text: &str) -> Result<Self, FormatError> {
        let bad = || FormatError::BadSpec(text.to_owned());
        let c: Vec<char> = text.chars().collect();
        let mut spec = Spec::default();
        let mut i = 0;

        if let Some(align) = c.get(1).copied().and_then(align_of) {
            spec.fill = c[0];
            spec.align = Some(align);
            i = 2;
        } else if let Some(align) = c.first().copied().and_then(align_of) {
            spec.align = Some(align);
            i = 1;
        }

        match c.get(i) {
            Some('+') => (spec.sign, i) = (Sign::Plus, i + 1),
            Some('-') => (spec.sign, i) = (Sign::Minus, i + 1),
            Some(' ') => (spec.sign, i) = (Sign::Space, i + 1),
            _ => {}
        }

        if c.get(i) == Some(&'0') {
            spec.zero = true;
            i += 1;
        }
        if let Some(width) = take_number(&c, &mut i) {
            spec.width = width;
        }
        if c.get(i) == Some(&'.') {
            i += 1;
            spec.precision = Some(take_number(&c, &mut i).ok_or_else(bad)?);
        }

        spec.kind = match c.get(i) {
            None => {
                if spec.precision.is_some() {
                    Kind::General {
                        upper: false,
                        keep_point: true,
                    }
                } else {
                    Kind::Shortest
                }
            }
            Some('f' | 'F') => Kind::Fixed,
            Some('e') => Kind::Exponent { upper: false },
            Some('E') => Kind::Exponent { upper: true },
            Some('g' | 'n') => Kind::General {
                upper: false,
                keep_point: false,
            },
            Some('G') => Kind::General {
                upper: true,
                keep_point: false,
            },
            Some('%') => Kind::Percent,
            Some(_) => return Err(bad()),
        };
        if c.get(i).is_some() {
            i += 1;
        }
        if i != c.len() {
            return Err(bad());
        }
        Ok(spec)
    }

    /// Digits of `|v|` without sign or padding.
    fn body(&self, magnitude: f64) -> String {
        let p = self.precision.unwrap_or(6);
        match self.kind {
            Kind::Fixed => format!("{magnitude:.p$}"),
            Kind::Percent => format!("{:.p$}%", magnitude * 100.0),
            Kind::Exponent { upper } => {
                let (mantissa, exp) = scientific(magnitude, p);
                exponent_form(&mantissa, exp, upper)
            }
            Kind::General { upper, keep_point } => general(magnitude, p, upper, keep_point),
            Kind::Shortest => {
                let mut s = magnitude.to_string();
                if !s.contains('.') {
                    s.push_str(".0");
                }
                s
            }
        }
    }

    fn apply(&self, v: f64) -> String {
        let body = self.body(v.abs());
        let sign = match (v.is_sign_negative(), self.sign) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        };
        let len = sign.chars().count() + body.chars().count();
        let pad = self.width.saturating_sub(len);
        if pad == 0 {
            return format!("{sign}{body}");
        }
        if self.zero && self.align.is_none() {
            return format!("{sign}{}{body}", "0".repeat(pad));
        }

        let fill = |n: usize| iter::repeat_n(self.fill, n).collect::<String>();
        match self.align.unwrap_or(Align::Right) {
            Align::Right => format!("{}{sign}{body}", fill(pad)),
            Align::Left => format!("{sign}{body}{}", fill(pad)),
            Align::Center => {
                let left = pad / 2;
                format!("{}{sign}{body}{}", fill(left), fill(pad - left))
            }
        }
    }
}

/// A label template: literal prefix, one number, literal suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    prefix: String,
    spec: Spec,
    suffix: String,
}

impl LabelFormat {
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec = None;
        let mut chars = template.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            let literal = match c {
                '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                    chars.next();
                    '{'
                }
                '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                    chars.next();
                    '}'
                }
                '}' => return Err(FormatError::UnbalancedBrace(at)),
                '{' => {
                    let rest = &template[at + 1..];
                    let close = rest.find('}').ok_or(FormatError::UnbalancedBrace(at))?;
                    let field = &rest[..close];
                    if field.contains('{') {
                        return Err(FormatError::UnbalancedBrace(at));
                    }
                    if spec.is_some() {
                        return Err(FormatError::ExtraPlaceholder);
                    }
                    let text = match field.split_once(':') {
                        None if field.is_empty() || field == "0" => "",
                        Some((name, text)) if name.is_empty() || name == "0" => text,
                        _ => return Err(FormatError::BadSpec(field.to_owned())),
                    };
                    spec = Some(Spec::parse(text)?);
                    while chars.peek().is_some_and(|&(i, _)| i <= at + 1 + close) {
                        chars.next();
                    }
                    continue;
                }
                other => other,
            };
            if spec.is_some() {
                suffix.push(literal);
            } else {
                prefix.push(literal);
            }
        }

        Ok(Self {
            prefix,
            spec: spec.ok_or(FormatError::MissingPlaceholder)?,
            suffix,
        })
    }

    /// `{:W.2f} ` where `W` leaves room for the integer part of `max`, the
    /// decimal point and two decimals.
    #[must_use]
    pub fn default_for(max: f64) -> Self {
        Self {
            prefix: String::new(),
            spec: Spec {
                width: integer_digits(max) + DECIMAL_PRECISION + 1,
                precision: Some(DECIMAL_PRECISION),
                kind: Kind::Fixed,
                ..Spec::default()
            },
            suffix: " ".to_owned(),
        }
    }

    #[must_use]
    pub fn format(&self, v: f64) -> String {
        format!("{}{}{}", self.prefix, self.spec.apply(v), self.suffix)
    }
}

/// Row labels plus the width of the axis column they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    /// One per body row, bottom row first, all `axis_len - 1` columns wide.
    pub labels: Vec<String>,
    /// Label columns plus one for the axis glyph.
    pub axis_len: usize,
}

impl AxisLabels {
    /// `series_max` sizes the axis; labels mark scale positions only.
    ///
    /// A label narrower than the widest one is right-aligned, so templates
    /// that produce variable-width text still line up on the axis.
    pub fn build(scale: &Scale, series_max: f64, config: &Config) -> Result<Self, FormatError> {
        let template = match config.format.as_deref() {
            Some(t) => LabelFormat::parse(t)?,
            None => LabelFormat::default_for(series_max),
        };
        let pad = " ".repeat(config.offset_or_default());
        let render = |v: f64| format!("{pad}{}", template.format(v));

        let mut labels: Vec<String> = (0..scale.height)
            .map(|row| render(scale.label_value(row)))
            .collect();

        let reference = render(series_max).chars().count();
        let text_width = labels
            .iter()
            .map(|l| l.chars().count())
            .fold(reference, usize::max);

        for label in &mut labels {
            let short = text_width - label.chars().count();
            if short > 0 {
                label.insert_str(0, &" ".repeat(short));
            }
        }

        Ok(Self {
            labels,
            axis_len: text_width + 1,
        })
    }
}
